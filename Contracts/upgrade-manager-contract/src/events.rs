//! Audit trail of the manager. Every state transition publishes exactly one
//! event, topic-indexed by chain id where a chain is involved.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImplementerAddedEvent {
    pub index: u32,
    pub implementer: Address,
    pub name: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthorityRegisteredEvent {
    pub chain_id: u64,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthorityReleasedEvent {
    pub chain_id: u64,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProxyUpgradedEvent {
    pub chain_id: u64,
    pub proxy: Address,
    pub implementation: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StepAdvancedEvent {
    pub chain_id: u64,
    pub name: String,
    pub step: u32,
    pub total_steps: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpgradeCompletedEvent {
    pub chain_id: u64,
    pub name: String,
}

pub struct Events;

impl Events {
    pub fn emit_implementer_added(env: &Env, index: u32, implementer: &Address, name: &String) {
        let event = ImplementerAddedEvent {
            index,
            implementer: implementer.clone(),
            name: name.clone(),
        };
        env.events().publish((symbol_short!("impl_add"), index), event);
    }

    pub fn emit_authority_registered(env: &Env, chain_id: u64, owner: &Address) {
        let event = AuthorityRegisteredEvent { chain_id, owner: owner.clone() };
        env.events().publish((symbol_short!("auth_reg"), chain_id), event);
    }

    pub fn emit_authority_released(env: &Env, chain_id: u64, owner: &Address) {
        let event = AuthorityReleasedEvent { chain_id, owner: owner.clone() };
        env.events().publish((symbol_short!("auth_rel"), chain_id), event);
    }

    pub fn emit_proxy_upgraded(env: &Env, chain_id: u64, proxy: &Address, implementation: &Address) {
        let event = ProxyUpgradedEvent {
            chain_id,
            proxy: proxy.clone(),
            implementation: implementation.clone(),
        };
        env.events().publish((symbol_short!("px_upgr"), chain_id), event);
    }

    pub fn emit_step_advanced(env: &Env, chain_id: u64, name: &String, step: u32, total_steps: u32) {
        let event = StepAdvancedEvent { chain_id, name: name.clone(), step, total_steps };
        env.events().publish((symbol_short!("step_adv"), chain_id), event);
    }

    pub fn emit_upgrade_completed(env: &Env, chain_id: u64, name: &String) {
        let event = UpgradeCompletedEvent { chain_id, name: name.clone() };
        env.events().publish((symbol_short!("upg_done"), chain_id), event);
    }

    pub fn emit_admin_transferred(env: &Env, previous: &Address, new_admin: &Address) {
        env.events().publish((symbol_short!("adm_xfer"),), (previous.clone(), new_admin.clone()));
    }
}
