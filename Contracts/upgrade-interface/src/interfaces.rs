//! Client-side views of the contracts the orchestrator collaborates with.

use soroban_sdk::{contractclient, Address, Bytes, BytesN, Env, Map, String, Symbol, Vec};

use crate::types::{ProxySet, StepOutcome};

/// A proxy: admin-gated pointer swaps plus calls delegated to the implementation.
#[contractclient(name = "ProxyClient")]
pub trait ProxyInterface {
    fn admin(env: Env) -> Address;
    fn implementation(env: Env) -> Address;
    fn change_admin(env: Env, new_admin: Address);
    fn upgrade_to(env: Env, implementation: Address);
    fn upgrade_to_and_call(env: Env, implementation: Address, data: Bytes);
    fn get_bytes32(env: Env, slot: BytesN<32>) -> BytesN<32>;
    fn set_bytes32(env: Env, slot: BytesN<32>, value: BytesN<32>);
    fn storage_at(env: Env, slot: BytesN<32>) -> BytesN<32>;
    fn version(env: Env) -> String;
}

/// Code installed behind a proxy. The proxy passes its storage in and keeps
/// whatever storage comes back.
#[contractclient(name = "ImplementationClient")]
pub trait ImplementationInterface {
    fn version(env: Env) -> String;
    fn initialize(
        env: Env,
        storage: Map<BytesN<32>, BytesN<32>>,
        data: Bytes,
    ) -> Map<BytesN<32>, BytesN<32>>;
}

/// Transient implementation giving raw slot access.
#[contractclient(name = "StorageSetterClient")]
pub trait StorageSetterInterface {
    fn get_bytes32(env: Env, storage: Map<BytesN<32>, BytesN<32>>, slot: BytesN<32>) -> BytesN<32>;
    fn set_bytes32(
        env: Env,
        storage: Map<BytesN<32>, BytesN<32>>,
        slot: BytesN<32>,
        value: BytesN<32>,
    ) -> Map<BytesN<32>, BytesN<32>>;
}

/// Owner of the upgrade authority over a chain's proxies.
#[contractclient(name = "CustodianClient")]
pub trait CustodianInterface {
    fn owner(env: Env) -> Address;
    fn transfer_ownership(env: Env, new_owner: Address);
    fn upgrade(env: Env, proxy: Address, implementation: Address);
    fn upgrade_and_call(env: Env, proxy: Address, implementation: Address, data: Bytes);
}

/// Registry kept by the pipeline that built each chain.
#[contractclient(name = "BuildRegistryClient")]
pub trait BuildRegistryInterface {
    fn get_proxy_set(env: Env, chain_id: u64) -> Option<ProxySet>;
    fn is_upgrading_from_legacy(env: Env, chain_id: u64) -> bool;
}

/// Creates fresh proxies for topologies that gain a contract.
#[contractclient(name = "ProxyDeployerClient")]
pub trait ProxyDeployerInterface {
    fn deploy_proxy(env: Env, admin: Address, salt: BytesN<32>) -> Address;
}

/// One upgrade path, driven step by step by the manager.
#[contractclient(name = "ImplementerClient")]
pub trait ImplementerInterface {
    fn capabilities(env: Env) -> Vec<Symbol>;
    fn upgrade_index(env: Env) -> u32;
    fn upgrade_name(env: Env) -> String;
    fn total_steps(env: Env) -> u32;
    fn execute_step(env: Env, chain_id: u64, step: u32) -> StepOutcome;
}
