//! Custody hand-off of a chain's custodian between its recognized owner and
//! the manager.
//!
//! ```text
//! UNPREPARED --register--> PREPARED --(owner transfers custodian)--> held
//!      ^                                                             |
//!      +------------------------- release ---------------------------+
//! ```
//!
//! Registration must come first: it records who gets the custodian back, so a
//! transfer can never leave the manager holding authority nobody can reclaim.

use soroban_sdk::{Address, Env};
use upgrade_interface::{BuildRegistryClient, CustodianClient};
use crate::{error::ManagerError, events::Events, storage::Storage};

/// The chain's custodian, or `InvalidChain` when the build registry has no proxy set for it.
pub fn custodian_of(env: &Env, store: &Storage, chain_id: u64) -> Result<Address, ManagerError> {
    let registry = BuildRegistryClient::new(env, &store.build_registry()?);
    registry
        .get_proxy_set(&chain_id)
        .map(|proxies| proxies.proxy_admin)
        .ok_or(ManagerError::InvalidChain)
}

pub fn holds_custody(env: &Env, custodian: &Address) -> bool {
    CustodianClient::new(env, custodian).owner() == env.current_contract_address()
}

/// Records `owner` as the party custody returns to. Caller checks are the entry point's job.
pub fn register(env: &Env, store: &Storage, chain_id: u64, owner: &Address) -> Result<(), ManagerError> {
    if store.recognized_owner(chain_id).is_some() {
        return Err(ManagerError::AlreadyPrepared);
    }
    store.set_recognized_owner(chain_id, owner);
    Events::emit_authority_registered(env, chain_id, owner);
    Ok(())
}

/// Returns the custodian to the recognized owner and forgets the record.
pub fn release(env: &Env, store: &Storage, chain_id: u64, custodian: &Address) -> Result<Address, ManagerError> {
    let owner = store.recognized_owner(chain_id).ok_or(ManagerError::NotPrepared)?;
    if !holds_custody(env, custodian) {
        return Err(ManagerError::NoCustody);
    }
    CustodianClient::new(env, custodian).transfer_ownership(&owner);
    store.clear_recognized_owner(chain_id);
    Events::emit_authority_released(env, chain_id, &owner);
    Ok(owner)
}
