#![no_std]
//! Storage Setter
//!
//! A transient implementation installed behind a proxy only while one of its raw
//! storage words is being patched. It understands nothing about the layout of
//! the proxy's real implementation; it reads and writes whole 32-byte words.

use soroban_sdk::{contract, contractimpl, BytesN, Env, Map, String};
use upgrade_interface::zero_word;

pub const VERSION: &str = "1.2.0";

#[contract]
pub struct StorageSetterContract;

#[contractimpl]
impl StorageSetterContract {
    pub fn version(env: Env) -> String {
        String::from_str(&env, VERSION)
    }

    /// Reads `slot` from the proxy storage handed in.
    pub fn get_bytes32(env: Env, storage: Map<BytesN<32>, BytesN<32>>, slot: BytesN<32>) -> BytesN<32> {
        storage.get(slot).unwrap_or_else(|| zero_word(&env))
    }

    /// Writes `value` at `slot`. The zero word clears the key.
    pub fn set_bytes32(
        env: Env,
        storage: Map<BytesN<32>, BytesN<32>>,
        slot: BytesN<32>,
        value: BytesN<32>,
    ) -> Map<BytesN<32>, BytesN<32>> {
        let mut storage = storage;
        if value == zero_word(&env) {
            storage.remove(slot);
        } else {
            storage.set(slot, value);
        }
        storage
    }
}
