use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, String, Symbol, Vec};
use upgrade_interface::{implementer_capabilities, ProxyUpgrade, StepOutcome};

#[contracttype]
#[derive(Clone)]
pub enum ImplementerKey {
    Manager,
    Index,
    Name,
    TotalSteps,
    Plan,
    LastStep(u64),
}

/// Implementer with a declared step count that returns a scripted plan on
/// every step and reports completion on the last one.
#[contract]
pub struct MockImplementer;

#[contractimpl]
impl MockImplementer {
    pub fn __constructor(env: Env, manager: Address, index: u32, name: String, total_steps: u32) {
        env.storage().instance().set(&ImplementerKey::Manager, &manager);
        env.storage().instance().set(&ImplementerKey::Index, &index);
        env.storage().instance().set(&ImplementerKey::Name, &name);
        env.storage().instance().set(&ImplementerKey::TotalSteps, &total_steps);
    }

    pub fn set_plan(env: Env, upgrades: Vec<ProxyUpgrade>) {
        env.storage().instance().set(&ImplementerKey::Plan, &upgrades);
    }

    pub fn last_step(env: Env, chain_id: u64) -> u32 {
        env.storage().instance().get(&ImplementerKey::LastStep(chain_id)).unwrap_or(0)
    }

    pub fn capabilities(env: Env) -> Vec<Symbol> {
        implementer_capabilities(&env)
    }

    pub fn upgrade_index(env: Env) -> u32 {
        env.storage().instance().get(&ImplementerKey::Index).unwrap()
    }

    pub fn upgrade_name(env: Env) -> String {
        env.storage().instance().get(&ImplementerKey::Name).unwrap()
    }

    pub fn total_steps(env: Env) -> u32 {
        env.storage().instance().get(&ImplementerKey::TotalSteps).unwrap()
    }

    pub fn execute_step(env: Env, chain_id: u64, step: u32) -> StepOutcome {
        let manager: Address = env.storage().instance().get(&ImplementerKey::Manager).unwrap();
        manager.require_auth();
        env.storage().instance().set(&ImplementerKey::LastStep(chain_id), &step);
        let upgrades = env
            .storage()
            .instance()
            .get(&ImplementerKey::Plan)
            .unwrap_or_else(|| Vec::new(&env));
        StepOutcome {
            finished: step >= Self::total_steps(env),
            upgrades,
        }
    }
}

/// Declares only part of the implementer capability set.
#[contract]
pub struct IncompleteImplementer;

#[contractimpl]
impl IncompleteImplementer {
    pub fn capabilities(env: Env) -> Vec<Symbol> {
        Vec::from_array(&env, [Symbol::new(&env, "upgrade_index"), Symbol::new(&env, "upgrade_name")])
    }

    pub fn upgrade_index(_env: Env) -> u32 {
        0
    }

    pub fn upgrade_name(env: Env) -> String {
        String::from_str(&env, "Incomplete")
    }
}
