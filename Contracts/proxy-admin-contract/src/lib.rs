#![no_std]
//! Proxy Admin Contract
//!
//! The custodian of a chain: it is the admin of every proxy the chain owns, and
//! whoever owns it decides which implementation each proxy points at. Ownership
//! is a single transferable address.

mod error;

use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, Address, Bytes, Env};
use upgrade_interface::ProxyClient;
pub use crate::error::ProxyAdminError;

#[contract]
pub struct ProxyAdminContract;

pub trait ProxyAdminTrait {
    fn init(env: Env, owner: Address) -> Result<(), ProxyAdminError>;
    fn owner(env: Env) -> Result<Address, ProxyAdminError>;
    /// Hand the upgrade authority to `new_owner`. Owner only.
    fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), ProxyAdminError>;
    fn upgrade(env: Env, proxy: Address, implementation: Address) -> Result<(), ProxyAdminError>;
    fn upgrade_and_call(env: Env, proxy: Address, implementation: Address, data: Bytes) -> Result<(), ProxyAdminError>;
    fn get_proxy_implementation(env: Env, proxy: Address) -> Address;
    fn get_proxy_admin(env: Env, proxy: Address) -> Address;
    fn change_proxy_admin(env: Env, proxy: Address, new_admin: Address) -> Result<(), ProxyAdminError>;
}

fn require_owner(env: &Env) -> Result<Address, ProxyAdminError> {
    let owner: Address = env.storage().instance().get(&DataKey::Owner).ok_or(ProxyAdminError::NotInitialized)?;
    owner.require_auth();
    Ok(owner)
}

#[contractimpl]
impl ProxyAdminTrait for ProxyAdminContract {
    fn init(env: Env, owner: Address) -> Result<(), ProxyAdminError> {
        if env.storage().instance().has(&DataKey::Owner) { return Err(ProxyAdminError::AlreadyInitialized); }
        env.storage().instance().set(&DataKey::Owner, &owner);
        Ok(())
    }

    fn owner(env: Env) -> Result<Address, ProxyAdminError> {
        env.storage().instance().get(&DataKey::Owner).ok_or(ProxyAdminError::NotInitialized)
    }

    fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), ProxyAdminError> {
        let previous = require_owner(&env)?;
        env.storage().instance().set(&DataKey::Owner, &new_owner);
        env.events().publish((symbol_short!("own_xfer"),), (previous, new_owner));
        Ok(())
    }

    fn upgrade(env: Env, proxy: Address, implementation: Address) -> Result<(), ProxyAdminError> {
        require_owner(&env)?;
        ProxyClient::new(&env, &proxy).upgrade_to(&implementation);
        Ok(())
    }

    fn upgrade_and_call(env: Env, proxy: Address, implementation: Address, data: Bytes) -> Result<(), ProxyAdminError> {
        require_owner(&env)?;
        ProxyClient::new(&env, &proxy).upgrade_to_and_call(&implementation, &data);
        Ok(())
    }

    fn get_proxy_implementation(env: Env, proxy: Address) -> Address {
        ProxyClient::new(&env, &proxy).implementation()
    }

    fn get_proxy_admin(env: Env, proxy: Address) -> Address {
        ProxyClient::new(&env, &proxy).admin()
    }

    fn change_proxy_admin(env: Env, proxy: Address, new_admin: Address) -> Result<(), ProxyAdminError> {
        require_owner(&env)?;
        ProxyClient::new(&env, &proxy).change_admin(&new_admin);
        Ok(())
    }
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
}
