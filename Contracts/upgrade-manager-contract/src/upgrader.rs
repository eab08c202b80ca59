//! Slot-safe proxy upgrade.
//!
//! With storage updates the proxy is first pointed at the storage setter, each
//! slot is compared against the value the implementer expects and patched, and
//! only then is the proxy pointed at the real implementation. A mismatch aborts the whole
//! invocation, so the proxy keeps its previous implementation and storage.

use soroban_sdk::{log, Address, Env, Vec};
use upgrade_interface::{CustodianClient, ProxyClient, ProxyUpgrade, StorageUpdate};
use crate::{error::ManagerError, events::Events, storage::Storage};

pub fn apply(
    env: &Env,
    store: &Storage,
    chain_id: u64,
    custodian: &Address,
    upgrade: &ProxyUpgrade,
) -> Result<(), ManagerError> {
    let implementation = upgrade.implementation.clone().ok_or(ManagerError::ZeroImplementation)?;
    let custodian = CustodianClient::new(env, custodian);

    if !upgrade.storage_updates.is_empty() {
        patch_slots(env, store, &custodian, &upgrade.proxy, &upgrade.storage_updates)?;
    }

    match &upgrade.init_data {
        Some(data) => custodian.upgrade_and_call(&upgrade.proxy, &implementation, data),
        None => custodian.upgrade(&upgrade.proxy, &implementation),
    }
    Events::emit_proxy_upgraded(env, chain_id, &upgrade.proxy, &implementation);
    Ok(())
}

fn patch_slots(
    env: &Env,
    store: &Storage,
    custodian: &CustodianClient,
    proxy: &Address,
    updates: &Vec<StorageUpdate>,
) -> Result<(), ManagerError> {
    custodian.upgrade(proxy, &store.storage_setter()?);

    let proxy_client = ProxyClient::new(env, proxy);
    for update in updates.iter() {
        let found = proxy_client.get_bytes32(&update.slot);
        if found != update.current_value {
            log!(env, "unexpected slot value", proxy.clone(), update.slot, found, update.current_value);
            return Err(ManagerError::UnexpectedSlotValue);
        }
        proxy_client.set_bytes32(&update.slot, &update.new_value);
    }
    Ok(())
}
