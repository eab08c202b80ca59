#![cfg(test)]
use soroban_sdk::{vec, xdr::ToXdr, Address, BytesN, Env, String, testutils::{Address as _}};
use proxy_admin_contract::{ProxyAdminContract, ProxyAdminContractClient};
use proxy_contract::{ProxyContract, ProxyContractClient};
use storage_setter::StorageSetterContract;
use upgrade_interface::{packed_byte, slot_index, ProxySet};
use upgrade_manager_contract::{UpgradeManagerContract, UpgradeManagerContractClient};
use upgrade_test_doubles::{
    MockBuildRegistry, MockBuildRegistryClient, MockProxyDeployer, MockProxyDeployerClient, MockTarget,
    INITIALIZED_SLOT, INIT_DATA_SLOT,
};
use upgrade_manager_contract::ManagerError;
use crate::{GraniteError, GraniteImplementations, GraniteUpgradeContract, GraniteUpgradeContractClient};

const CHAIN: u64 = 4200;

struct Setup {
    env: Env,
    owner: Address,
    setter: Address,
    custodian: ProxyAdminContractClient<'static>,
    registry: MockBuildRegistryClient<'static>,
    deployer: MockProxyDeployerClient<'static>,
    manager: UpgradeManagerContractClient<'static>,
    granite: GraniteUpgradeContractClient<'static>,
    implementations: GraniteImplementations,
}

impl Setup {
    fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let owner = Address::generate(&env);
        let setter = env.register(StorageSetterContract {}, ());
        let registry = MockBuildRegistryClient::new(&env, &env.register(MockBuildRegistry, ()));
        let manager = UpgradeManagerContractClient::new(&env, &env.register(UpgradeManagerContract {}, ()));
        manager.init(&Address::generate(&env), &registry.address, &setter);

        let custodian = ProxyAdminContractClient::new(&env, &env.register(ProxyAdminContract {}, ()));
        custodian.init(&owner);

        // The deployer hands out one fresh proxy, already administered by the custodian.
        let fresh = ProxyContractClient::new(&env, &env.register(ProxyContract {}, ()));
        fresh.init(&custodian.address);
        let deployer_id = env.register(MockProxyDeployer, (vec![&env, fresh.address.clone()],));
        let deployer = MockProxyDeployerClient::new(&env, &deployer_id);

        let target = |version: &str| env.register(MockTarget, (String::from_str(&env, version),));
        let implementations = GraniteImplementations {
            superchain_config: target("1.1.0"),
            protocol_versions: target("1.0.1"),
            system_config: target("2.3.0"),
            output_oracle: target("1.8.0"),
            portal: target("3.11.0"),
            cross_domain_messenger: target("2.3.0"),
            standard_bridge: target("2.1.0"),
            erc721_bridge: target("2.1.0"),
        };

        let granite = GraniteUpgradeContractClient::new(&env, &env.register(GraniteUpgradeContract {}, ()));
        granite.init(&manager.address, &registry.address, &deployer_id, &0, &implementations);
        manager.add_next_implementer(&granite.address);

        Setup { env, owner, setter, custodian, registry, deployer, manager, granite, implementations }
    }

    /// An existing chain proxy running `version` with its initializer guard set at `guard_offset`.
    fn existing_proxy(&self, version: &str, guard_offset: u32) -> Address {
        let proxy = ProxyContractClient::new(&self.env, &self.env.register(ProxyContract {}, ()));
        proxy.init(&self.custodian.address);
        self.custodian.upgrade(&proxy.address, &self.setter);
        proxy.set_bytes32(&slot_index(&self.env, INITIALIZED_SLOT), &packed_byte(&self.env, guard_offset, 1));
        let target = self.env.register(MockTarget, (String::from_str(&self.env, version),));
        self.custodian.upgrade(&proxy.address, &target);
        proxy.address
    }

    /// Declare the chain with every contract on its expected prior version.
    fn add_chain(&self, legacy: bool, bridge_guard_offset: u32) -> ProxySet {
        self.add_chain_with_portal(legacy, bridge_guard_offset, "1.6.0")
    }

    fn add_chain_with_portal(&self, legacy: bool, bridge_guard_offset: u32, portal_version: &str) -> ProxySet {
        self.add_chain_with_versions(legacy, bridge_guard_offset, portal_version, "1.0.0")
    }

    fn add_chain_with_versions(
        &self,
        legacy: bool,
        bridge_guard_offset: u32,
        portal_version: &str,
        protocol_versions_version: &str,
    ) -> ProxySet {
        let proxies = ProxySet {
            proxy_admin: self.custodian.address.clone(),
            system_config: self.existing_proxy("1.3.0", 0),
            portal: self.existing_proxy(portal_version, 0),
            output_oracle: self.existing_proxy("1.3.0", 0),
            cross_domain_messenger: self.existing_proxy("1.4.0", bridge_guard_offset),
            standard_bridge: self.existing_proxy("1.1.0", bridge_guard_offset),
            erc721_bridge: self.existing_proxy("1.1.1", 0),
            protocol_versions: self.existing_proxy(protocol_versions_version, 0),
        };
        self.registry.set_chain(&CHAIN, &proxies, &legacy);
        proxies
    }

    fn hand_over(&self) {
        self.manager.register_before_transfer(&self.owner, &CHAIN);
        self.custodian.transfer_ownership(&self.manager.address);
    }

    fn implementation_of(&self, proxy: &Address) -> Address {
        ProxyContractClient::new(&self.env, proxy).implementation()
    }
}

#[test]
fn test_granite_upgrade_end_to_end() {
    let s = Setup::new();
    let existing = s.add_chain(false, 0);
    s.hand_over();

    s.manager.advance(&s.owner, &CHAIN);

    let recorded = s.granite.proxies(&CHAIN).unwrap();
    assert_eq!(recorded.existing, existing);
    assert_eq!(s.deployer.remaining(), 0);

    let i = &s.implementations;
    assert_eq!(s.implementation_of(&recorded.superchain_config), i.superchain_config);
    assert_eq!(s.implementation_of(&existing.protocol_versions), i.protocol_versions);
    assert_eq!(s.implementation_of(&existing.system_config), i.system_config);
    assert_eq!(s.implementation_of(&existing.output_oracle), i.output_oracle);
    assert_eq!(s.implementation_of(&existing.portal), i.portal);
    assert_eq!(s.implementation_of(&existing.cross_domain_messenger), i.cross_domain_messenger);
    assert_eq!(s.implementation_of(&existing.standard_bridge), i.standard_bridge);
    assert_eq!(s.implementation_of(&existing.erc721_bridge), i.erc721_bridge);

    // The superchain config was initialized with the custodian as guardian, unpaused.
    let superchain = ProxyContractClient::new(&s.env, &recorded.superchain_config);
    let expected: BytesN<32> = s.env.crypto().sha256(&(s.custodian.address.clone(), false).to_xdr(&s.env)).into();
    assert_eq!(superchain.storage_at(&slot_index(&s.env, INIT_DATA_SLOT)), expected);

    // Re-initialized contracts hold a fresh guard; the plain upgrade kept the old one.
    let portal = ProxyContractClient::new(&s.env, &existing.portal);
    assert_eq!(portal.storage_at(&slot_index(&s.env, INITIALIZED_SLOT)), packed_byte(&s.env, 0, 1));
    assert_eq!(portal.version(), String::from_str(&s.env, "3.11.0"));

    assert_eq!(s.custodian.owner(), s.owner);
    assert!(s.manager.is_up_to_date(&CHAIN));
}

#[test]
fn test_legacy_chain_patches_packed_guards() {
    let s = Setup::new();
    let existing = s.add_chain(true, 20);
    s.hand_over();

    s.manager.advance(&s.owner, &CHAIN);

    assert_eq!(s.implementation_of(&existing.cross_domain_messenger), s.implementations.cross_domain_messenger);
    assert_eq!(s.implementation_of(&existing.standard_bridge), s.implementations.standard_bridge);
    let messenger = ProxyContractClient::new(&s.env, &existing.cross_domain_messenger);
    assert_eq!(messenger.storage_at(&slot_index(&s.env, INITIALIZED_SLOT)), packed_byte(&s.env, 0, 1));
}

#[test]
#[should_panic(expected = "Error(Contract, #15)")]
fn test_legacy_flag_with_modern_layout_aborts() {
    let s = Setup::new();
    s.add_chain(true, 0);
    s.hand_over();
    s.manager.advance(&s.owner, &CHAIN);
}

#[test]
#[should_panic(expected = "Error(Contract, #105)")]
fn test_unexpected_portal_version_aborts() {
    let s = Setup::new();
    s.add_chain_with_portal(false, 0, "1.5.0");
    s.hand_over();
    s.manager.advance(&s.owner, &CHAIN);
}

#[test]
fn test_version_mismatch_names_the_contract() {
    let s = Setup::new();
    s.add_chain_with_portal(false, 0, "1.5.0");
    assert_eq!(s.granite.try_execute_step(&CHAIN, &1), Err(Ok(GraniteError::UnexpectedPortalVersion)));

    let s = Setup::new();
    s.add_chain_with_versions(false, 0, "1.6.0", "0.9.0");
    assert_eq!(
        s.granite.try_execute_step(&CHAIN, &1),
        Err(Ok(GraniteError::UnexpectedProtocolVersionsVersion))
    );
    assert_eq!(s.granite.proxies(&CHAIN), None);
}

#[test]
fn test_failed_step_changes_nothing() {
    let s = Setup::new();
    let existing = s.add_chain_with_portal(false, 0, "1.5.0");
    let before = s.implementation_of(&existing.system_config);
    s.hand_over();

    assert!(s.manager.try_advance(&s.owner, &CHAIN).is_err());
    assert_eq!(s.implementation_of(&existing.system_config), before);
    assert_eq!(s.granite.proxies(&CHAIN), None);
    assert_eq!(s.deployer.remaining(), 1);
    assert_eq!(s.custodian.owner(), s.manager.address);
}

#[test]
fn test_step_must_be_the_first() {
    let s = Setup::new();
    s.add_chain(false, 0);
    assert_eq!(s.granite.try_execute_step(&CHAIN, &2), Err(Ok(GraniteError::UnexpectedStep)));
}

#[test]
fn test_unknown_chain_rejected() {
    let s = Setup::new();
    assert_eq!(s.granite.try_execute_step(&CHAIN, &1), Err(Ok(GraniteError::UnknownChain)));
}

#[test]
fn test_execute_step_requires_manager() {
    let s = Setup::new();
    s.add_chain(false, 0);
    s.env.set_auths(&[]);
    assert!(s.granite.try_execute_step(&CHAIN, &1).is_err());
    assert_eq!(s.granite.proxies(&CHAIN), None);
}

#[test]
fn test_declares_path_metadata() {
    let s = Setup::new();
    assert_eq!(s.granite.upgrade_name(), String::from_str(&s.env, "Granite"));
    assert_eq!(s.granite.total_steps(), 1);
    assert_eq!(s.granite.upgrade_index(), 0);
    assert_eq!(s.granite.implementations(), s.implementations);
    assert_eq!(s.manager.implementer_at(&0), s.granite.address);
    assert_eq!(s.granite.capabilities().len(), 5);
}

#[test]
fn test_init_twice_fails() {
    let s = Setup::new();
    assert_eq!(
        s.granite.try_init(&s.manager.address, &s.registry.address, &s.deployer.address, &0, &s.implementations),
        Err(Ok(GraniteError::AlreadyInitialized))
    );
}

#[test]
fn test_uninitialized_index_fails() {
    let env = Env::default();
    let granite = GraniteUpgradeContractClient::new(&env, &env.register(GraniteUpgradeContract {}, ()));
    assert_eq!(granite.try_upgrade_index(), Err(Ok(GraniteError::NotInitialized)));
}

#[test]
fn test_unconfigured_path_cannot_register() {
    let s = Setup::new();
    let unconfigured = s.env.register(GraniteUpgradeContract {}, ());
    assert_eq!(
        s.manager.try_add_next_implementer(&unconfigured),
        Err(Ok(ManagerError::UnsupportedImplementer))
    );
    assert_eq!(s.manager.implementer_count(), 1);
}
