#![no_std]
//! Stand-ins for the contracts the orchestrator only meets at an interface:
//! the build registry, the chain contracts behind each proxy, the proxy
//! deployer, and upgrade implementers with scripted behaviour.
//!
//! Only ever linked into host test binaries.

mod implementer;
mod registry;
mod target;

pub use implementer::{IncompleteImplementer, IncompleteImplementerClient, MockImplementer, MockImplementerClient};
pub use registry::{MockBuildRegistry, MockBuildRegistryClient, MockProxyDeployer, MockProxyDeployerClient};
pub use target::{MockTarget, MockTargetClient, INITIALIZED_SLOT, INIT_DATA_SLOT};
