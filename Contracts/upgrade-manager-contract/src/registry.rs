//! Append-only list of upgrade implementers. Position N in the list is the
//! only answer to "which implementer runs N-th".

use soroban_sdk::{Address, Env};
use upgrade_interface::{implementer_capabilities, ImplementerClient};
use crate::{error::ManagerError, events::Events, storage::Storage};

pub fn add_next(env: &Env, store: &Storage, implementer: &Address) -> Result<u32, ManagerError> {
    let client = ImplementerClient::new(env, implementer);
    if !declares_capabilities(env, &client) {
        return Err(ManagerError::UnsupportedImplementer);
    }
    let declared = match client.try_upgrade_index() {
        Ok(Ok(declared)) => declared,
        _ => return Err(ManagerError::UnsupportedImplementer),
    };
    let index = store.implementers().len();
    if declared != index {
        return Err(ManagerError::IndexMismatch);
    }
    store.push_implementer(implementer);
    Events::emit_implementer_added(env, index, implementer, &client.upgrade_name());
    Ok(index)
}

/// Implementer at `index`. Past the end the chain is up to date.
pub fn resolve(store: &Storage, index: u32) -> Result<Address, ManagerError> {
    let implementers = store.implementers();
    if implementers.is_empty() {
        return Err(ManagerError::NoImplementers);
    }
    implementers.get(index).ok_or(ManagerError::UpToDate)
}

// A contract that cannot answer `capabilities` at all is just as unsupported.
fn declares_capabilities(env: &Env, client: &ImplementerClient) -> bool {
    match client.try_capabilities() {
        Ok(Ok(declared)) => implementer_capabilities(env).iter().all(|op| declared.contains(&op)),
        _ => false,
    }
}
