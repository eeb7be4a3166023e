//! Reentrancy-attack workload.

use super::submit_and_confirm;
use crate::config::WorkloadConfig;
use crate::metrics::MetricsCollector;
use rampart_chain::ChainClient;
use rampart_types::{Address, CallArg, ContractCall, IdentityPool, ParameterSequence};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Issues the reentrancy-attack sequence against the attack contract.
///
/// Every identity fires a fixed count of `attack(n)` calls, where `n` is
/// drawn from the parameter stream shared across all identities, so
/// parameters keep ascending across identity boundaries.
pub struct AttackRunner {
    target: Address,
    calls_per_identity: usize,
    value_wei: u128,
    confirmation_depth: u32,
}

impl AttackRunner {
    /// Build the runner from the workload configuration.
    pub fn new(config: &WorkloadConfig) -> Self {
        Self {
            target: config.attack_target,
            calls_per_identity: config.attack_calls_per_identity,
            value_wei: config.call_value_wei,
            confirmation_depth: config.confirmation_depth,
        }
    }

    /// Run the attack phase to completion.
    pub async fn run(
        &self,
        client: &dyn ChainClient,
        identities: &IdentityPool,
        params: &mut ParameterSequence,
        metrics: &mut MetricsCollector,
    ) {
        info!(
            identities = identities.len(),
            calls_per_identity = self.calls_per_identity,
            target = %self.target,
            "Executing reentrancy attack sequence"
        );

        for identity in identities.iter() {
            for _ in 0..self.calls_per_identity {
                // The parameter advances once per attempt, settled or not.
                let parameter = params.next_value();
                let call = ContractCall::new("attack")
                    .arg(CallArg::Uint(parameter))
                    .with_value(self.value_wei);

                let started = Instant::now();
                match submit_and_confirm(
                    client,
                    identity,
                    self.target,
                    &call,
                    self.confirmation_depth,
                )
                .await
                {
                    Ok(()) => {
                        let latency_ms = started.elapsed().as_millis() as u64;
                        metrics.record_attack_success(latency_ms);
                        debug!(
                            parameter,
                            from = %identity.address(),
                            latency_ms,
                            "Attack call settled"
                        );
                    }
                    Err(e) => {
                        metrics.record_attack_failure();
                        warn!(
                            parameter,
                            from = %identity.address(),
                            error = %e,
                            "Attack call failed"
                        );
                    }
                }
            }
        }
    }
}
