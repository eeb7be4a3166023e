//! Workload configuration.

use rampart_types::Address;

/// 0.0001 ether, the transfer value attached to every workload call.
const DEFAULT_CALL_VALUE_WEI: u128 = 100_000_000_000_000;

/// 0.01 ether, the endowment transferred to each identity when funding.
const DEFAULT_ENDOWMENT_WEI: u128 = 10_000_000_000_000_000;

/// Configuration for a workload run.
#[derive(Debug, Clone)]
pub struct WorkloadConfig {
    /// The firewall deployer contract.
    pub firewall: Address,

    /// The contract the firewall protects; the denylist is installed on its
    /// behalf.
    pub protected_target: Address,

    /// The reentrancy-attack contract.
    pub attack_target: Address,

    /// The benign-transaction contract.
    pub normal_target: Address,

    /// Confirmation depth a call must reach to count as settled.
    pub confirmation_depth: u32,

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

    /// Endowment per identity when funding accounts before a run, in wei.
    pub endowment_wei: u128,
}

impl WorkloadConfig {
    /// Create a workload configuration with default counts and values.
    pub fn new(
        firewall: Address,
        protected_target: Address,
        attack_target: Address,
        normal_target: Address,
    ) -> Self {
        Self {
            firewall,
            protected_target,
            attack_target,
            normal_target,
            confirmation_depth: 2,
            attack_calls_per_identity: 5,
            normal_calls_per_identity: 10,
            call_value_wei: DEFAULT_CALL_VALUE_WEI,
            blacklist_parameter: 110,
            normal_parameter_origin: 100,
            endowment_wei: DEFAULT_ENDOWMENT_WEI,
        }
    }

    /// Set the confirmation depth.
    pub fn with_confirmation_depth(mut self, depth: u32) -> Self {
        self.confirmation_depth = depth;
        self
    }

    /// Set the number of attack calls per identity.
    pub fn with_attack_calls_per_identity(mut self, calls: usize) -> Self {
        self.attack_calls_per_identity = calls;
        self
    }

    /// Set the number of benign calls per identity.
    pub fn with_normal_calls_per_identity(mut self, calls: usize) -> Self {
        self.normal_calls_per_identity = calls;
        self
    }

    /// Set the transfer value attached to each workload call.
    pub fn with_call_value(mut self, value_wei: u128) -> Self {
        self.call_value_wei = value_wei;
        self
    }

    /// Set the per-identity funding endowment.
    pub fn with_endowment(mut self, endowment_wei: u128) -> Self {
        self.endowment_wei = endowment_wei;
        self
    }
}
