#![no_std]
//! Upgrade Manager Contract
//!
//! Drives every registered chain through an ordered list of upgrade
//! implementers. For each chain the manager tracks which implementer is active
//! and which of its steps runs next, borrows the chain's custodian for as long
//! as an upgrade path is in flight, and hands it back to the recognized owner
//! atomically with the step that completes the path.
//!
//! A chain owner drives the protocol:
//! 1. `register_before_transfer` records the owner custody returns to.
//! 2. The owner transfers the custodian to this contract.
//! 3. `advance` is called once per step until the path completes.
//!
//! Implementers never touch proxies themselves. Each step returns a plan of
//! proxy upgrades which the manager applies through the same slot-safe
//! primitive exposed by `upgrade` / `upgrade_and_call`.

mod custody;
mod error;
mod events;
mod registry;
mod storage;
mod upgrader;

use soroban_sdk::{contract, contractimpl, contracttype, Address, Bytes, Env, Vec};
use upgrade_interface::{CustodianClient, ImplementerClient, ProxyUpgrade, StorageUpdate, UpgradeStatus};
use crate::{events::Events, storage::Storage};
pub use crate::error::ManagerError;

#[contract]
pub struct UpgradeManagerContract;

/// Public interface for the upgrade manager.
pub trait UpgradeManagerTrait {
    /// Configure admin, build registry and storage setter. Can only be called once.
    fn init(env: Env, admin: Address, build_registry: Address, storage_setter: Address) -> Result<(), ManagerError>;
    fn admin(env: Env) -> Result<Address, ManagerError>;
    fn transfer_admin(env: Env, new_admin: Address) -> Result<(), ManagerError>;
    fn build_registry(env: Env) -> Result<Address, ManagerError>;
    fn storage_setter(env: Env) -> Result<Address, ManagerError>;

    /// Record `caller`, the custodian's current owner, as the party custody returns to.
    fn register_before_transfer(env: Env, caller: Address, chain_id: u64) -> Result<(), ManagerError>;
    /// Give the custodian back to the recognized owner.
    fn release(env: Env, caller: Address, chain_id: u64) -> Result<(), ManagerError>;
    /// Admin recovery for a custodian transferred without registration: registers `new_owner` and releases to it.
    fn admin_transfer(env: Env, chain_id: u64, new_owner: Address) -> Result<(), ManagerError>;
    fn recognized_owner(env: Env, chain_id: u64) -> Option<Address>;

    /// Append an implementer. Its declared index must equal the current registry length.
    fn add_next_implementer(env: Env, implementer: Address) -> Result<u32, ManagerError>;
    fn implementer_count(env: Env) -> u32;
    fn implementer_at(env: Env, index: u32) -> Result<Address, ManagerError>;

    /// Run the next step of the chain's active implementer.
    fn advance(env: Env, caller: Address, chain_id: u64) -> Result<(), ManagerError>;
    fn status(env: Env, chain_id: u64) -> UpgradeStatus;
    /// True once every registered implementer has run; false while the registry is empty.
    fn is_up_to_date(env: Env, chain_id: u64) -> bool;

    /// Swap `proxy` to `implementation`, optionally patching a slot first. Active implementer only.
    fn upgrade(
        env: Env,
        implementer: Address,
        chain_id: u64,
        proxy: Address,
        implementation: Option<Address>,
        storage_update: Option<StorageUpdate>,
    ) -> Result<(), ManagerError>;
    /// As `upgrade`, then run the implementation's initializer with `data`.
    fn upgrade_and_call(
        env: Env,
        implementer: Address,
        chain_id: u64,
        proxy: Address,
        implementation: Option<Address>,
        data: Bytes,
        storage_update: Option<StorageUpdate>,
    ) -> Result<(), ManagerError>;
}

#[contractimpl]
impl UpgradeManagerTrait for UpgradeManagerContract {
    fn init(env: Env, admin: Address, build_registry: Address, storage_setter: Address) -> Result<(), ManagerError> {
        let store = Storage::new(&env);
        if store.is_initialized() { return Err(ManagerError::AlreadyInitialized); }
        store.init(&admin, &build_registry, &storage_setter);
        Ok(())
    }

    fn admin(env: Env) -> Result<Address, ManagerError> { Storage::new(&env).admin() }

    fn transfer_admin(env: Env, new_admin: Address) -> Result<(), ManagerError> {
        let store = Storage::new(&env);
        let admin = store.admin()?;
        admin.require_auth();
        store.set_admin(&new_admin);
        Events::emit_admin_transferred(&env, &admin, &new_admin);
        Ok(())
    }

    fn build_registry(env: Env) -> Result<Address, ManagerError> { Storage::new(&env).build_registry() }
    fn storage_setter(env: Env) -> Result<Address, ManagerError> { Storage::new(&env).storage_setter() }

    fn register_before_transfer(env: Env, caller: Address, chain_id: u64) -> Result<(), ManagerError> {
        caller.require_auth();
        let store = Storage::new(&env);
        store.require_initialized()?;
        let custodian = custody::custodian_of(&env, &store, chain_id)?;
        if store.recognized_owner(chain_id).is_some() {
            return Err(ManagerError::AlreadyPrepared);
        }
        let current_owner = CustodianClient::new(&env, &custodian).owner();
        if current_owner == env.current_contract_address() {
            return Err(ManagerError::OwnershipAlreadyMoved);
        }
        if current_owner != caller {
            return Err(ManagerError::NotCurrentOwner);
        }
        custody::register(&env, &store, chain_id, &caller)
    }

    fn release(env: Env, caller: Address, chain_id: u64) -> Result<(), ManagerError> {
        caller.require_auth();
        let store = Storage::new(&env);
        store.require_initialized()?;
        let owner = store.recognized_owner(chain_id).ok_or(ManagerError::NotPrepared)?;
        if caller != owner {
            return Err(ManagerError::NotOwner);
        }
        let custodian = custody::custodian_of(&env, &store, chain_id)?;
        custody::release(&env, &store, chain_id, &custodian)?;
        Ok(())
    }

    fn admin_transfer(env: Env, chain_id: u64, new_owner: Address) -> Result<(), ManagerError> {
        let store = Storage::new(&env);
        store.admin()?.require_auth();
        let custodian = custody::custodian_of(&env, &store, chain_id)?;
        custody::register(&env, &store, chain_id, &new_owner)?;
        custody::release(&env, &store, chain_id, &custodian)?;
        Ok(())
    }

    fn recognized_owner(env: Env, chain_id: u64) -> Option<Address> { Storage::new(&env).recognized_owner(chain_id) }

    fn add_next_implementer(env: Env, implementer: Address) -> Result<u32, ManagerError> {
        let store = Storage::new(&env);
        store.admin()?.require_auth();
        registry::add_next(&env, &store, &implementer)
    }

    fn implementer_count(env: Env) -> u32 { Storage::new(&env).implementers().len() }
    fn implementer_at(env: Env, index: u32) -> Result<Address, ManagerError> { registry::resolve(&Storage::new(&env), index) }

    fn advance(env: Env, caller: Address, chain_id: u64) -> Result<(), ManagerError> {
        caller.require_auth();
        let store = Storage::new(&env);
        store.require_initialized()?;
        let custodian = custody::custodian_of(&env, &store, chain_id)?;
        // Resolved before the custody checks so a finished chain always reports UpToDate.
        let mut status = store.status(chain_id);
        let implementer = registry::resolve(&store, status.active_implementer)?;

        let owner = store.recognized_owner(chain_id).ok_or(ManagerError::NotPrepared)?;
        if caller != owner {
            return Err(ManagerError::NotOwner);
        }
        if !custody::holds_custody(&env, &custodian) {
            return Err(ManagerError::CustodyNotTransferred);
        }

        let client = ImplementerClient::new(&env, &implementer);

        status.next_step += 1;
        let outcome = client.execute_step(&chain_id, &status.next_step);
        for upgrade in outcome.upgrades.iter() {
            upgrader::apply(&env, &store, chain_id, &custodian, &upgrade)?;
        }

        let name = client.upgrade_name();
        Events::emit_step_advanced(&env, chain_id, &name, status.next_step, client.total_steps());

        if outcome.finished {
            status.active_implementer += 1;
            status.next_step = 0;
            store.set_status(chain_id, &status);
            custody::release(&env, &store, chain_id, &custodian)?;
            Events::emit_upgrade_completed(&env, chain_id, &name);
        } else {
            store.set_status(chain_id, &status);
        }
        Ok(())
    }

    fn status(env: Env, chain_id: u64) -> UpgradeStatus { Storage::new(&env).status(chain_id) }

    fn is_up_to_date(env: Env, chain_id: u64) -> bool {
        let store = Storage::new(&env);
        matches!(
            registry::resolve(&store, store.status(chain_id).active_implementer),
            Err(ManagerError::UpToDate)
        )
    }

    fn upgrade(
        env: Env,
        implementer: Address,
        chain_id: u64,
        proxy: Address,
        implementation: Option<Address>,
        storage_update: Option<StorageUpdate>,
    ) -> Result<(), ManagerError> {
        let upgrade = ProxyUpgrade { proxy, implementation, init_data: None, storage_updates: single(&env, storage_update) };
        apply_for_implementer(&env, &implementer, chain_id, &upgrade)
    }

    fn upgrade_and_call(
        env: Env,
        implementer: Address,
        chain_id: u64,
        proxy: Address,
        implementation: Option<Address>,
        data: Bytes,
        storage_update: Option<StorageUpdate>,
    ) -> Result<(), ManagerError> {
        let upgrade = ProxyUpgrade { proxy, implementation, init_data: Some(data), storage_updates: single(&env, storage_update) };
        apply_for_implementer(&env, &implementer, chain_id, &upgrade)
    }
}

/// The upgrade primitive as reached from outside `advance`: the caller must be
/// the implementer the registry resolves for the chain's current position.
fn apply_for_implementer(env: &Env, implementer: &Address, chain_id: u64, upgrade: &ProxyUpgrade) -> Result<(), ManagerError> {
    implementer.require_auth();
    let store = Storage::new(env);
    store.require_initialized()?;
    let custodian = custody::custodian_of(env, &store, chain_id)?;
    let active = registry::resolve(&store, store.status(chain_id).active_implementer).ok();
    if active.as_ref() != Some(implementer) {
        return Err(ManagerError::InconsistentImplementer);
    }
    if !custody::holds_custody(env, &custodian) {
        return Err(ManagerError::CustodyNotTransferred);
    }
    upgrader::apply(env, &store, chain_id, &custodian, upgrade)
}

fn single(env: &Env, update: Option<StorageUpdate>) -> Vec<StorageUpdate> {
    let mut updates = Vec::new(env);
    if let Some(update) = update {
        updates.push_back(update);
    }
    updates
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    BuildRegistry,
    StorageSetter,
    Implementers,
    Authority(u64),
    Status(u64),
}
