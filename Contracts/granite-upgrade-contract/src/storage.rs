use soroban_sdk::Env;
use crate::{DataKey, error::GraniteError, types::{ChainProxies, GraniteConfig, GraniteImplementations}};

pub struct Storage<'a> { env: &'a Env }

impl<'a> Storage<'a> {
    pub fn new(env: &'a Env) -> Self { Self { env } }

    pub fn is_initialized(&self) -> bool { self.env.storage().instance().has(&DataKey::Config) }

    pub fn init(&self, config: &GraniteConfig, implementations: &GraniteImplementations) {
        self.env.storage().instance().set(&DataKey::Config, config);
        self.env.storage().instance().set(&DataKey::Implementations, implementations);
    }

    pub fn config(&self) -> Result<GraniteConfig, GraniteError> {
        self.env.storage().instance().get(&DataKey::Config).ok_or(GraniteError::NotInitialized)
    }

    pub fn implementations(&self) -> Result<GraniteImplementations, GraniteError> {
        self.env.storage().instance().get(&DataKey::Implementations).ok_or(GraniteError::NotInitialized)
    }

    pub fn proxies(&self, chain_id: u64) -> Option<ChainProxies> {
        self.env.storage().persistent().get(&DataKey::Proxies(chain_id))
    }

    pub fn set_proxies(&self, chain_id: u64, proxies: &ChainProxies) {
        self.env.storage().persistent().set(&DataKey::Proxies(chain_id), proxies);
    }
}
