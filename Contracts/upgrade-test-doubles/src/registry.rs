use soroban_sdk::{contract, contractimpl, contracttype, Address, BytesN, Env, Vec};
use upgrade_interface::{ProxyClient, ProxySet};

#[contracttype]
#[derive(Clone)]
pub enum RegistryKey {
    ProxySet(u64),
    Legacy(u64),
}

/// Build registry answering for whichever chains a test declares.
#[contract]
pub struct MockBuildRegistry;

#[contractimpl]
impl MockBuildRegistry {
    pub fn set_chain(env: Env, chain_id: u64, proxies: ProxySet, legacy: bool) {
        env.storage().instance().set(&RegistryKey::ProxySet(chain_id), &proxies);
        env.storage().instance().set(&RegistryKey::Legacy(chain_id), &legacy);
    }

    pub fn get_proxy_set(env: Env, chain_id: u64) -> Option<ProxySet> {
        env.storage().instance().get(&RegistryKey::ProxySet(chain_id))
    }

    pub fn is_upgrading_from_legacy(env: Env, chain_id: u64) -> bool {
        env.storage().instance().get(&RegistryKey::Legacy(chain_id)).unwrap_or(false)
    }
}

#[contracttype]
#[derive(Clone)]
pub enum DeployerKey {
    Pool,
}

/// Hands out proxies the test registered up front, in order.
#[contract]
pub struct MockProxyDeployer;

#[contractimpl]
impl MockProxyDeployer {
    pub fn __constructor(env: Env, pool: Vec<Address>) {
        env.storage().instance().set(&DeployerKey::Pool, &pool);
    }

    pub fn deploy_proxy(env: Env, admin: Address, _salt: BytesN<32>) -> Address {
        let mut pool: Vec<Address> = env.storage().instance().get(&DeployerKey::Pool).unwrap();
        let proxy = pool.pop_front().expect("proxy pool exhausted");
        assert!(ProxyClient::new(&env, &proxy).admin() == admin, "pooled proxy has another admin");
        env.storage().instance().set(&DeployerKey::Pool, &pool);
        proxy
    }

    pub fn remaining(env: Env) -> u32 {
        let pool: Vec<Address> = env.storage().instance().get(&DeployerKey::Pool).unwrap();
        pool.len()
    }
}
