use soroban_sdk::{contract, contractimpl, contracttype, Bytes, BytesN, Env, Map, String};
use upgrade_interface::{packed_byte, slot_index, zero_word};

/// Slot holding the initialized flag, as OpenZeppelin's `Initializable` lays it out.
pub const INITIALIZED_SLOT: u32 = 0;
/// Slot where the mock records `sha256(data)` of its last initializer call.
pub const INIT_DATA_SLOT: u32 = 1;

#[contracttype]
#[derive(Clone)]
pub enum TargetKey {
    Version,
}

/// A chain contract implementation reporting a fixed version. Its initializer
/// refuses to run over a non-zero initialized slot.
#[contract]
pub struct MockTarget;

#[contractimpl]
impl MockTarget {
    pub fn __constructor(env: Env, version: String) {
        env.storage().instance().set(&TargetKey::Version, &version);
    }

    pub fn version(env: Env) -> String {
        env.storage().instance().get(&TargetKey::Version).unwrap()
    }

    pub fn initialize(
        env: Env,
        storage: Map<BytesN<32>, BytesN<32>>,
        data: Bytes,
    ) -> Map<BytesN<32>, BytesN<32>> {
        let mut storage = storage;
        let flag = slot_index(&env, INITIALIZED_SLOT);
        let current = storage.get(flag.clone()).unwrap_or_else(|| zero_word(&env));
        if current != zero_word(&env) {
            panic!("already initialized");
        }
        storage.set(flag, packed_byte(&env, 0, 1));
        let digest: BytesN<32> = env.crypto().sha256(&data).into();
        storage.set(slot_index(&env, INIT_DATA_SLOT), digest);
        storage
    }
}
