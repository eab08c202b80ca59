use soroban_sdk::{Address, Env, Vec};
use upgrade_interface::UpgradeStatus;
use crate::{DataKey, error::ManagerError};

/// Sole owner of the manager's per-chain records and configuration.
/// Configuration and the implementer list sit in instance storage; per-chain
/// records get their own persistent entries.
pub struct Storage<'a> { env: &'a Env }

impl<'a> Storage<'a> {
    pub fn new(env: &'a Env) -> Self { Self { env } }

    pub fn is_initialized(&self) -> bool { self.env.storage().instance().has(&DataKey::Admin) }
    pub fn require_initialized(&self) -> Result<(), ManagerError> { if self.is_initialized() { Ok(()) } else { Err(ManagerError::NotInitialized) } }

    pub fn init(&self, admin: &Address, build_registry: &Address, storage_setter: &Address) {
        self.env.storage().instance().set(&DataKey::Admin, admin);
        self.env.storage().instance().set(&DataKey::BuildRegistry, build_registry);
        self.env.storage().instance().set(&DataKey::StorageSetter, storage_setter);
        let implementers: Vec<Address> = Vec::new(self.env);
        self.env.storage().instance().set(&DataKey::Implementers, &implementers);
    }

    pub fn admin(&self) -> Result<Address, ManagerError> {
        self.env.storage().instance().get(&DataKey::Admin).ok_or(ManagerError::NotInitialized)
    }

    pub fn set_admin(&self, admin: &Address) { self.env.storage().instance().set(&DataKey::Admin, admin); }

    pub fn build_registry(&self) -> Result<Address, ManagerError> {
        self.env.storage().instance().get(&DataKey::BuildRegistry).ok_or(ManagerError::NotInitialized)
    }

    pub fn storage_setter(&self) -> Result<Address, ManagerError> {
        self.env.storage().instance().get(&DataKey::StorageSetter).ok_or(ManagerError::NotInitialized)
    }

    pub fn implementers(&self) -> Vec<Address> {
        self.env.storage().instance()
            .get(&DataKey::Implementers)
            .unwrap_or_else(|| Vec::new(self.env))
    }

    pub fn push_implementer(&self, implementer: &Address) {
        let mut implementers = self.implementers();
        implementers.push_back(implementer.clone());
        self.env.storage().instance().set(&DataKey::Implementers, &implementers);
    }

    pub fn recognized_owner(&self, chain_id: u64) -> Option<Address> {
        self.env.storage().persistent().get(&DataKey::Authority(chain_id))
    }

    pub fn set_recognized_owner(&self, chain_id: u64, owner: &Address) {
        self.env.storage().persistent().set(&DataKey::Authority(chain_id), owner);
    }

    pub fn clear_recognized_owner(&self, chain_id: u64) {
        self.env.storage().persistent().remove(&DataKey::Authority(chain_id));
    }

    /// `{0, 0}` until the chain first advances.
    pub fn status(&self, chain_id: u64) -> UpgradeStatus {
        self.env.storage().persistent().get(&DataKey::Status(chain_id)).unwrap_or_default()
    }

    pub fn set_status(&self, chain_id: u64, status: &UpgradeStatus) {
        self.env.storage().persistent().set(&DataKey::Status(chain_id), status);
    }
}
