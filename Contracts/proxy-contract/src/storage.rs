use soroban_sdk::{Address, BytesN, Env, Map};
use upgrade_interface::zero_word;
use crate::{DataKey, error::ProxyError};

pub struct Storage<'a> { env: &'a Env }

impl<'a> Storage<'a> {
    pub fn new(env: &'a Env) -> Self { Self { env } }

    pub fn is_initialized(&self) -> bool { self.env.storage().instance().has(&DataKey::Admin) }

    pub fn init(&self, admin: &Address) {
        self.env.storage().instance().set(&DataKey::Admin, admin);
        let slots: Map<BytesN<32>, BytesN<32>> = Map::new(self.env);
        self.env.storage().instance().set(&DataKey::Slots, &slots);
    }

    pub fn admin(&self) -> Result<Address, ProxyError> {
        self.env.storage().instance().get(&DataKey::Admin).ok_or(ProxyError::NotInitialized)
    }

    pub fn set_admin(&self, admin: &Address) { self.env.storage().instance().set(&DataKey::Admin, admin); }

    pub fn implementation(&self) -> Option<Address> { self.env.storage().instance().get(&DataKey::Impl) }

    pub fn require_implementation(&self) -> Result<Address, ProxyError> {
        self.implementation().ok_or(ProxyError::ImplementationNotSet)
    }

    pub fn set_implementation(&self, implementation: &Address) {
        self.env.storage().instance().set(&DataKey::Impl, implementation);
    }

    /// The whole slot-addressed word store, handed to the implementation on delegation.
    pub fn slots(&self) -> Map<BytesN<32>, BytesN<32>> {
        self.env.storage().instance()
            .get(&DataKey::Slots)
            .unwrap_or_else(|| Map::new(self.env))
    }

    pub fn set_slots(&self, slots: &Map<BytesN<32>, BytesN<32>>) {
        self.env.storage().instance().set(&DataKey::Slots, slots);
    }

    pub fn slot(&self, slot: BytesN<32>) -> BytesN<32> {
        self.slots().get(slot).unwrap_or_else(|| zero_word(self.env))
    }
}
