use soroban_sdk::{contracttype, Address};
use upgrade_interface::ProxySet;

/// New implementations installed by the Granite path. Shared by every chain.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraniteImplementations {
    pub superchain_config: Address,
    pub protocol_versions: Address,
    pub system_config: Address,
    pub output_oracle: Address,
    pub portal: Address,
    pub cross_domain_messenger: Address,
    pub standard_bridge: Address,
    pub erc721_bridge: Address,
}

/// Collaborators the implementer talks to.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraniteConfig {
    pub manager: Address,
    pub build_registry: Address,
    pub proxy_deployer: Address,
    pub index: u32,
}

/// A chain's proxies after the upgrade: the ones it was built with plus the
/// superchain config proxy deployed for it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChainProxies {
    pub existing: ProxySet,
    pub superchain_config: Address,
}
