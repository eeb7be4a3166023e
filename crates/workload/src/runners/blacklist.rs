//! Denylisted-identity workload.

use super::submit_and_confirm;
use crate::config::WorkloadConfig;
use crate::metrics::MetricsCollector;
use rampart_chain::ChainClient;
use rampart_types::{Address, CallArg, ContractCall, IdentityPool};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Issues one benign-looking call per denylisted identity.
///
/// Denylisted identities are expected, but not guaranteed, to be rejected
/// by the firewall. The runner records the outcome without asserting it;
/// interpretation is left to the reader of the report.
pub struct BlacklistRunner {
    target: Address,
    parameter: u64,
    value_wei: u128,
    confirmation_depth: u32,
}

impl BlacklistRunner {
    /// Build the runner from the workload configuration.
    pub fn new(config: &WorkloadConfig) -> Self {
        Self {
            target: config.normal_target,
            parameter: config.blacklist_parameter,
            value_wei: config.call_value_wei,
            confirmation_depth: config.confirmation_depth,
        }
    }

    /// Run the blacklist phase to completion.
    pub async fn run(
        &self,
        client: &dyn ChainClient,
        denylist: &IdentityPool,
        metrics: &mut MetricsCollector,
    ) {
        info!(
            identities = denylist.len(),
            parameter = self.parameter,
            target = %self.target,
            "Executing blacklist transactions"
        );

        for identity in denylist.iter() {
            let call = ContractCall::new("sendTx")
                .arg(CallArg::Uint(self.parameter))
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
                        from = %identity.address(),
                        latency_ms,
                        "Blacklisted call settled"
                    );
                }
                Err(e) => {
                    metrics.record_attack_failure();
                    warn!(
                        from = %identity.address(),
                        error = %e,
                        "Blacklisted call failed"
                    );
                }
            }
        }
    }
}
