//! The Granite upgrade plan. Contracts that others reference come first, so
//! every initializer sees its dependencies already on their new version.

use soroban_sdk::{vec, xdr::ToXdr, Address, Bytes, Env, Vec};
use upgrade_interface::{packed_byte, slot_index, zero_word, ProxyUpgrade, StorageUpdate};
use crate::types::{ChainProxies, GraniteImplementations};

/// Slot holding the initializer guard of every chain contract.
pub const INITIALIZED_SLOT: u32 = 0;
/// Byte offset of the guard on legacy messengers and standard bridges, which
/// pack it behind a 20-byte address.
pub const LEGACY_PACKED_OFFSET: u32 = 20;

pub fn build(env: &Env, implementations: &GraniteImplementations, proxies: &ChainProxies, legacy: bool) -> Vec<ProxyUpgrade> {
    let existing = &proxies.existing;
    let bridge_offset = if legacy { LEGACY_PACKED_OFFSET } else { 0 };

    vec![
        env,
        initialize(
            &proxies.superchain_config,
            &implementations.superchain_config,
            (existing.proxy_admin.clone(), false).to_xdr(env),
            Vec::new(env),
        ),
        ProxyUpgrade {
            proxy: existing.protocol_versions.clone(),
            implementation: Some(implementations.protocol_versions.clone()),
            init_data: None,
            storage_updates: Vec::new(env),
        },
        initialize(
            &existing.system_config,
            &implementations.system_config,
            (
                existing.portal.clone(),
                existing.output_oracle.clone(),
                existing.cross_domain_messenger.clone(),
                existing.standard_bridge.clone(),
                existing.erc721_bridge.clone(),
            )
                .to_xdr(env),
            vec![env, clear_guard(env, 0)],
        ),
        initialize(
            &existing.output_oracle,
            &implementations.output_oracle,
            existing.system_config.clone().to_xdr(env),
            vec![env, clear_guard(env, 0)],
        ),
        initialize(
            &existing.portal,
            &implementations.portal,
            (
                existing.output_oracle.clone(),
                existing.system_config.clone(),
                proxies.superchain_config.clone(),
            )
                .to_xdr(env),
            vec![env, clear_guard(env, 0)],
        ),
        initialize(
            &existing.cross_domain_messenger,
            &implementations.cross_domain_messenger,
            (proxies.superchain_config.clone(), existing.portal.clone(), existing.system_config.clone()).to_xdr(env),
            vec![env, clear_guard(env, bridge_offset)],
        ),
        initialize(
            &existing.standard_bridge,
            &implementations.standard_bridge,
            (existing.cross_domain_messenger.clone(), proxies.superchain_config.clone(), existing.system_config.clone())
                .to_xdr(env),
            vec![env, clear_guard(env, bridge_offset)],
        ),
        initialize(
            &existing.erc721_bridge,
            &implementations.erc721_bridge,
            (existing.cross_domain_messenger.clone(), proxies.superchain_config.clone()).to_xdr(env),
            vec![env, clear_guard(env, 0)],
        ),
    ]
}

fn initialize(proxy: &Address, implementation: &Address, data: Bytes, storage_updates: Vec<StorageUpdate>) -> ProxyUpgrade {
    ProxyUpgrade {
        proxy: proxy.clone(),
        implementation: Some(implementation.clone()),
        init_data: Some(data),
        storage_updates,
    }
}

/// Resets the initializer guard so the new implementation may initialize again.
fn clear_guard(env: &Env, offset: u32) -> StorageUpdate {
    StorageUpdate {
        slot: slot_index(env, INITIALIZED_SLOT),
        current_value: packed_byte(env, offset, 1),
        new_value: zero_word(env),
    }
}
