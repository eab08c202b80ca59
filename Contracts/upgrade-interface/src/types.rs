use soroban_sdk::{contracttype, Address, Bytes, BytesN, Env, Symbol, Vec};

/// Operations an upgrade implementer must declare through `capabilities()`.
pub const IMPLEMENTER_OPERATIONS: [&str; 5] = [
    "capabilities",
    "upgrade_index",
    "upgrade_name",
    "total_steps",
    "execute_step",
];

/// The capability marker as a list of symbols.
pub fn implementer_capabilities(env: &Env) -> Vec<Symbol> {
    let mut caps = Vec::new(env);
    for op in IMPLEMENTER_OPERATIONS {
        caps.push_back(Symbol::new(env, op));
    }
    caps
}

/// One-shot compare-and-swap on a raw proxy storage slot.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StorageUpdate {
    pub slot: BytesN<32>,
    pub current_value: BytesN<32>,
    pub new_value: BytesN<32>,
}

/// Proxies a chain was built with, as reported by the build registry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProxySet {
    /// Custodian holding upgrade authority over every proxy below.
    pub proxy_admin: Address,
    pub system_config: Address,
    pub portal: Address,
    pub output_oracle: Address,
    pub cross_domain_messenger: Address,
    pub standard_bridge: Address,
    pub erc721_bridge: Address,
    pub protocol_versions: Address,
}

/// A single proxy swap requested by an implementer.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProxyUpgrade {
    pub proxy: Address,
    /// `None` is rejected with `ZeroImplementation`.
    pub implementation: Option<Address>,
    /// Initializer payload; `None` performs a plain upgrade.
    pub init_data: Option<Bytes>,
    /// Slot patches applied, in order, through the storage setter before the swap.
    pub storage_updates: Vec<StorageUpdate>,
}

/// What an implementer hands back from one step.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StepOutcome {
    pub finished: bool,
    pub upgrades: Vec<ProxyUpgrade>,
}

/// Per-chain progress through the implementer registry.
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct UpgradeStatus {
    pub active_implementer: u32,
    pub next_step: u32,
}
