//! Harness configuration loading.
//!
//! Everything the core consumes is static configuration supplied before it
//! runs: RPC endpoint, operator credential, contract addresses, confirmation
//! depth, and the identity and denylist key tables.

use crate::registrar::RegistrationConfig;
use rampart_types::{Address, Identity, IdentityPool, SigningKey};
use rampart_workload::WorkloadConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Errors from loading the harness configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level harness configuration, deserialized from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct HarnessConfig {
    /// Node RPC endpoint.
    pub rpc_url: String,

    /// Operator credential used for provisioning and registration.
    pub operator_key: SigningKey,

    /// Confirmation depth a workload call must reach to count as settled.
    #[serde(default = "default_confirmation_depth")]
    pub confirmation_depth: u32,

    /// Target contract addresses.
    pub contracts: ContractsConfig,

    /// Workload tuning knobs.
    #[serde(default)]
    pub workload: WorkloadSettings,

    /// Signing credentials of the workload identities, in pool order.
    pub identities: Vec<SigningKey>,

    /// Signing credentials of the pre-blacklisted identities, in pool order.
    pub denylist: Vec<SigningKey>,

    /// Optional project-registration table for the `register` subcommand.
    #[serde(default)]
    pub registration: Option<RegistrationConfig>,
}

/// Contract addresses the harness talks to.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractsConfig {
    /// The firewall deployer contract.
    pub firewall: Address,

    /// The contract the firewall protects.
    pub protected: Address,

    /// The reentrancy-attack contract.
    pub attack: Address,

    /// The benign-transaction contract.
    pub normal: Address,
}

/// Workload tuning knobs with production defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WorkloadSettings {
    /// Attack calls issued per identity.
    pub attack_calls_per_identity: usize,

    /// Benign calls issued per identity.
    pub normal_calls_per_identity: usize,

    /// Transfer value attached to each workload call, in wei.
    pub call_value_wei: u128,

    /// The fixed parameter every denylisted identity submits.
    pub blacklist_parameter: u64,

    /// First value of the shared benign-call parameter stream.
    pub normal_parameter_origin: u64,

    /// Endow every identity from the operator before the run.
    pub fund_identities: bool,

    /// Endowment per identity when funding, in wei.
    pub endowment_wei: u128,

    /// Install the denylist on the firewall before the run.
    pub install_denylist: bool,
}

impl Default for WorkloadSettings {
    fn default() -> Self {
        Self {
            attack_calls_per_identity: 5,
            normal_calls_per_identity: 10,
            call_value_wei: 100_000_000_000_000,
            blacklist_parameter: 110,
            normal_parameter_origin: 100,
            fund_identities: false,
            endowment_wei: 10_000_000_000_000_000,
            install_denylist: false,
        }
    }
}

fn default_confirmation_depth() -> u32 {
    2
}

impl HarnessConfig {
    /// Load the configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&raw)?)
    }

    /// The operator identity.
    pub fn operator(&self) -> Identity {
        Identity::from_key(self.operator_key.clone())
    }

    /// The ordered workload identity pool.
    pub fn identity_pool(&self) -> IdentityPool {
        IdentityPool::from_keys(self.identities.clone())
    }

    /// The ordered denylist pool.
    pub fn denylist_pool(&self) -> IdentityPool {
        IdentityPool::from_keys(self.denylist.clone())
    }

    /// Build the workload configuration from this file.
    pub fn workload_config(&self) -> WorkloadConfig {
        WorkloadConfig::new(
            self.contracts.firewall,
            self.contracts.protected,
            self.contracts.attack,
            self.contracts.normal,
        )
        .with_confirmation_depth(self.confirmation_depth)
        .with_attack_calls_per_identity(self.workload.attack_calls_per_identity)
        .with_normal_calls_per_identity(self.workload.normal_calls_per_identity)
        .with_call_value(self.workload.call_value_wei)
        .with_endowment(self.workload.endowment_wei)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        rpc_url = "http://127.0.0.1:8545"
        operator_key = "0xf47f02241e52eb9936b40f5937c21c190f29f928c560bf29e743a4194f141753"
        identities = [
            "0xae0b8590c5db4c287ae89b4b52ce6732f64180e063ab07a2ec67f091f2273c81",
            "0xfba53953ad48c733f02e324edcd7fc618695e4dfc328ecfbbad8acafdd5c085f",
        ]
        denylist = [
            "0xe6511ec12853cf254783e78bf28da1802a6e5753b7514b0109ecea3a69c6ca88",
        ]

        [contracts]
        firewall = "0x5fbdb2315678afecb367f032d93f642f64180aa3"
        protected = "0xcbfc7de5b85c135fcc03e313c8e4e6aa2729450c"
        attack = "0xf3965b267b2589e7e094ba890ee7c4a6c04c67ab"
        normal = "0x40258daef685606c2e890064c7d28fd7e6b146e1"
    "#;

    #[test]
    fn sample_config_parses_with_defaults() {
        let config: HarnessConfig = toml::from_str(SAMPLE).unwrap();

        assert_eq!(config.rpc_url, "http://127.0.0.1:8545");
        assert_eq!(config.confirmation_depth, 2);
        assert_eq!(config.workload.attack_calls_per_identity, 5);
        assert_eq!(config.workload.normal_calls_per_identity, 10);
        assert_eq!(config.workload.blacklist_parameter, 110);
        assert!(!config.workload.fund_identities);
        assert!(config.registration.is_none());

        assert_eq!(config.identity_pool().len(), 2);
        assert_eq!(config.denylist_pool().len(), 1);
    }

    #[test]
    fn workload_config_reflects_overrides() {
        let mut raw = SAMPLE.to_string();
        raw.push_str(
            r#"
            [workload]
            attack_calls_per_identity = 2
            normal_calls_per_identity = 3
            fund_identities = true
            "#,
        );

        let config: HarnessConfig = toml::from_str(&raw).unwrap();
        let workload = config.workload_config();

        assert_eq!(workload.attack_calls_per_identity, 2);
        assert_eq!(workload.normal_calls_per_identity, 3);
        assert_eq!(workload.blacklist_parameter, 110);
        assert!(config.workload.fund_identities);
    }

    #[test]
    fn registration_table_parses() {
        let mut raw = SAMPLE.to_string();
        raw.push_str(
            r#"
            [registration]
            targets = ["0xcf7ed3acca5a467e9e704c703e8d87f634fb0fc9"]
            selector = "0xd96073cf"
            params = [1, 2]
            modules = ["0xa513e6e4b8f2a923d98304ec87f64353c4d5c853"]
            "#,
        );

        let config: HarnessConfig = toml::from_str(&raw).unwrap();
        let registration = config.registration.unwrap();
        assert_eq!(registration.targets.len(), 1);
        assert_eq!(registration.selector, "0xd96073cf");
        assert_eq!(registration.params, vec![1, 2]);
    }
}
