#![no_std]
//! Proxy Contract
//!
//! Keeps a chain contract's state in a raw word store addressed by 32-byte slots
//! and points at the implementation that interprets it. Only the admin (the
//! chain's custodian) may move the pointer. Soroban has no delegatecall, so
//! delegation hands the word store to the implementation and commits whatever
//! store the implementation returns.

mod storage;
mod error;

use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, Address, Bytes, BytesN, Env, String,
};
use upgrade_interface::{ImplementationClient, StorageSetterClient};
use crate::storage::Storage;
pub use crate::error::ProxyError;

#[contract]
pub struct ProxyContract;

/// Public interface for the proxy.
pub trait ProxyTrait {
    /// Set the admin. Can only be called once.
    fn init(env: Env, admin: Address) -> Result<(), ProxyError>;
    fn admin(env: Env) -> Result<Address, ProxyError>;
    /// Current implementation; errors before the first upgrade.
    fn implementation(env: Env) -> Result<Address, ProxyError>;
    fn change_admin(env: Env, new_admin: Address) -> Result<(), ProxyError>;
    fn upgrade_to(env: Env, implementation: Address) -> Result<(), ProxyError>;
    /// Swap the pointer, then run the new implementation's `initialize` over the proxy storage.
    fn upgrade_to_and_call(env: Env, implementation: Address, data: Bytes) -> Result<(), ProxyError>;
    /// Delegated slot read. Only answers while a storage setter is installed.
    fn get_bytes32(env: Env, slot: BytesN<32>) -> Result<BytesN<32>, ProxyError>;
    /// Delegated slot write. Only answers while a storage setter is installed.
    fn set_bytes32(env: Env, slot: BytesN<32>, value: BytesN<32>) -> Result<(), ProxyError>;
    /// Raw committed value of `slot`, independent of the implementation.
    fn storage_at(env: Env, slot: BytesN<32>) -> BytesN<32>;
    /// Semantic version reported by the implementation.
    fn version(env: Env) -> Result<String, ProxyError>;
}

#[contractimpl]
impl ProxyTrait for ProxyContract {
    fn init(env: Env, admin: Address) -> Result<(), ProxyError> {
        let store = Storage::new(&env);
        if store.is_initialized() { return Err(ProxyError::AlreadyInitialized); }
        store.init(&admin);
        Ok(())
    }

    fn admin(env: Env) -> Result<Address, ProxyError> { Storage::new(&env).admin() }
    fn implementation(env: Env) -> Result<Address, ProxyError> { Storage::new(&env).require_implementation() }

    fn change_admin(env: Env, new_admin: Address) -> Result<(), ProxyError> {
        let store = Storage::new(&env);
        let admin = store.admin()?;
        admin.require_auth();
        store.set_admin(&new_admin);
        env.events().publish((symbol_short!("admin_chg"),), (admin, new_admin));
        Ok(())
    }

    fn upgrade_to(env: Env, implementation: Address) -> Result<(), ProxyError> {
        let store = Storage::new(&env);
        store.admin()?.require_auth();
        store.set_implementation(&implementation);
        env.events().publish((symbol_short!("upgraded"),), implementation);
        Ok(())
    }

    fn upgrade_to_and_call(env: Env, implementation: Address, data: Bytes) -> Result<(), ProxyError> {
        let store = Storage::new(&env);
        store.admin()?.require_auth();
        store.set_implementation(&implementation);
        env.events().publish((symbol_short!("upgraded"),), implementation.clone());

        let updated = ImplementationClient::new(&env, &implementation).initialize(&store.slots(), &data);
        store.set_slots(&updated);
        Ok(())
    }

    fn get_bytes32(env: Env, slot: BytesN<32>) -> Result<BytesN<32>, ProxyError> {
        let store = Storage::new(&env);
        let target = store.require_implementation()?;
        Ok(StorageSetterClient::new(&env, &target).get_bytes32(&store.slots(), &slot))
    }

    fn set_bytes32(env: Env, slot: BytesN<32>, value: BytesN<32>) -> Result<(), ProxyError> {
        let store = Storage::new(&env);
        let target = store.require_implementation()?;
        let updated = StorageSetterClient::new(&env, &target).set_bytes32(&store.slots(), &slot, &value);
        store.set_slots(&updated);
        Ok(())
    }

    fn storage_at(env: Env, slot: BytesN<32>) -> BytesN<32> { Storage::new(&env).slot(slot) }

    fn version(env: Env) -> Result<String, ProxyError> {
        let target = Storage::new(&env).require_implementation()?;
        Ok(ImplementationClient::new(&env, &target).version())
    }
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Impl,
    Slots,
}
