#![no_std]
//! Shared types and cross-contract interfaces for the chain upgrade orchestrator.
//!
//! Every contract in the workspace talks to its collaborators through the
//! clients declared here, so a proxy, a custodian or an implementer can be
//! swapped for any contract exposing the same functions.

mod interfaces;
mod slots;
mod types;

pub use interfaces::*;
pub use slots::{packed_byte, slot_index, zero_word};
pub use types::*;
