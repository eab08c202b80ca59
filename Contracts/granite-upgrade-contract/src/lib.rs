#![no_std]
//! Granite Upgrade Contract
//!
//! Single-step upgrade path moving a chain onto the Granite contract set. The
//! contract is configured once with the new implementations and serves every
//! chain; per-chain data comes from the build registry at step time.

mod error;
mod plan;
mod storage;
mod types;
mod versions;

use soroban_sdk::{contract, contractimpl, contracttype, Address, Bytes, BytesN, Env, String, Symbol, Vec};
use upgrade_interface::{implementer_capabilities, BuildRegistryClient, ProxyDeployerClient, StepOutcome};
use crate::storage::Storage;
pub use crate::error::GraniteError;
pub use crate::types::{ChainProxies, GraniteConfig, GraniteImplementations};
pub use crate::versions::{
    L1_CROSS_DOMAIN_MESSENGER, L1_ERC721_BRIDGE, L1_STANDARD_BRIDGE, L2_OUTPUT_ORACLE, OPTIMISM_PORTAL,
    PROTOCOL_VERSIONS, SYSTEM_CONFIG,
};

pub const UPGRADE_NAME: &str = "Granite";
pub const TOTAL_STEPS: u32 = 1;

#[contract]
pub struct GraniteUpgradeContract;

pub trait GraniteUpgradeTrait {
    /// Configure collaborators and the new implementations. Can only be called once.
    fn init(
        env: Env,
        manager: Address,
        build_registry: Address,
        proxy_deployer: Address,
        index: u32,
        implementations: GraniteImplementations,
    ) -> Result<(), GraniteError>;
    fn implementations(env: Env) -> Result<GraniteImplementations, GraniteError>;
    /// Proxies recorded for a chain once its step has run.
    fn proxies(env: Env, chain_id: u64) -> Option<ChainProxies>;

    fn capabilities(env: Env) -> Vec<Symbol>;
    fn upgrade_index(env: Env) -> Result<u32, GraniteError>;
    fn upgrade_name(env: Env) -> String;
    fn total_steps(env: Env) -> u32;
    /// Check prior versions, deploy the superchain config proxy and return the upgrade plan. Manager only.
    fn execute_step(env: Env, chain_id: u64, step: u32) -> Result<StepOutcome, GraniteError>;
}

#[contractimpl]
impl GraniteUpgradeTrait for GraniteUpgradeContract {
    fn init(
        env: Env,
        manager: Address,
        build_registry: Address,
        proxy_deployer: Address,
        index: u32,
        implementations: GraniteImplementations,
    ) -> Result<(), GraniteError> {
        let store = Storage::new(&env);
        if store.is_initialized() { return Err(GraniteError::AlreadyInitialized); }
        store.init(&GraniteConfig { manager, build_registry, proxy_deployer, index }, &implementations);
        Ok(())
    }

    fn implementations(env: Env) -> Result<GraniteImplementations, GraniteError> { Storage::new(&env).implementations() }
    fn proxies(env: Env, chain_id: u64) -> Option<ChainProxies> { Storage::new(&env).proxies(chain_id) }

    fn capabilities(env: Env) -> Vec<Symbol> { implementer_capabilities(&env) }
    fn upgrade_index(env: Env) -> Result<u32, GraniteError> { Ok(Storage::new(&env).config()?.index) }
    fn upgrade_name(env: Env) -> String { String::from_str(&env, UPGRADE_NAME) }
    fn total_steps(_env: Env) -> u32 { TOTAL_STEPS }

    fn execute_step(env: Env, chain_id: u64, step: u32) -> Result<StepOutcome, GraniteError> {
        let store = Storage::new(&env);
        let config = store.config()?;
        config.manager.require_auth();
        if step != TOTAL_STEPS {
            return Err(GraniteError::UnexpectedStep);
        }

        let registry = BuildRegistryClient::new(&env, &config.build_registry);
        let existing = registry.get_proxy_set(&chain_id).ok_or(GraniteError::UnknownChain)?;
        let legacy = registry.is_upgrading_from_legacy(&chain_id);

        versions::check_prior_versions(&env, &existing)?;

        let superchain_config = ProxyDeployerClient::new(&env, &config.proxy_deployer)
            .deploy_proxy(&existing.proxy_admin, &deployment_salt(&env, chain_id));
        let proxies = ChainProxies { existing, superchain_config };
        store.set_proxies(chain_id, &proxies);

        let upgrades = plan::build(&env, &store.implementations()?, &proxies, legacy);
        Ok(StepOutcome { finished: true, upgrades })
    }
}

/// `sha256("granite" ++ chain_id)`, chain id big-endian.
fn deployment_salt(env: &Env, chain_id: u64) -> BytesN<32> {
    let mut preimage = Bytes::from_slice(env, b"granite");
    preimage.extend_from_array(&chain_id.to_be_bytes());
    env.crypto().sha256(&preimage).into()
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Implementations,
    Proxies(u64),
}

#[cfg(test)]
mod test;
