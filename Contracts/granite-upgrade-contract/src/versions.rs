//! Prior-version preconditions. A chain is only upgraded along this path when
//! every existing contract still reports the version the path was written for.

use soroban_sdk::{log, Address, Env, String};
use upgrade_interface::{ProxyClient, ProxySet};
use crate::error::GraniteError;

pub const SYSTEM_CONFIG: &str = "1.3.0";
pub const OPTIMISM_PORTAL: &str = "1.6.0";
pub const L2_OUTPUT_ORACLE: &str = "1.3.0";
pub const L1_CROSS_DOMAIN_MESSENGER: &str = "1.4.0";
pub const L1_STANDARD_BRIDGE: &str = "1.1.0";
pub const L1_ERC721_BRIDGE: &str = "1.1.1";
pub const PROTOCOL_VERSIONS: &str = "1.0.0";

pub fn check_prior_versions(env: &Env, proxies: &ProxySet) -> Result<(), GraniteError> {
    expect_version(env, "SystemConfig", &proxies.system_config, SYSTEM_CONFIG, GraniteError::UnexpectedSystemConfigVersion)?;
    expect_version(env, "OptimismPortal", &proxies.portal, OPTIMISM_PORTAL, GraniteError::UnexpectedPortalVersion)?;
    expect_version(env, "L2OutputOracle", &proxies.output_oracle, L2_OUTPUT_ORACLE, GraniteError::UnexpectedOutputOracleVersion)?;
    expect_version(
        env,
        "L1CrossDomainMessenger",
        &proxies.cross_domain_messenger,
        L1_CROSS_DOMAIN_MESSENGER,
        GraniteError::UnexpectedMessengerVersion,
    )?;
    expect_version(env, "L1StandardBridge", &proxies.standard_bridge, L1_STANDARD_BRIDGE, GraniteError::UnexpectedStandardBridgeVersion)?;
    expect_version(env, "L1ERC721Bridge", &proxies.erc721_bridge, L1_ERC721_BRIDGE, GraniteError::UnexpectedErc721BridgeVersion)?;
    expect_version(
        env,
        "ProtocolVersions",
        &proxies.protocol_versions,
        PROTOCOL_VERSIONS,
        GraniteError::UnexpectedProtocolVersionsVersion,
    )
}

/// The error code names the contract; the versions go to the diagnostic log.
fn expect_version(env: &Env, name: &str, proxy: &Address, expected: &str, mismatch: GraniteError) -> Result<(), GraniteError> {
    let actual = ProxyClient::new(env, proxy).version();
    let expected = String::from_str(env, expected);
    if actual != expected {
        log!(env, "unexpected version", String::from_str(env, name), actual, expected);
        return Err(mismatch);
    }
    Ok(())
}
