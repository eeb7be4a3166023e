//! Benign-transaction workload.

use super::submit_and_confirm;
use crate::config::WorkloadConfig;
use crate::metrics::MetricsCollector;
use rampart_chain::ChainClient;
use rampart_types::{Address, CallArg, ContractCall, IdentityPool, ParameterSequence};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Issues the benign call sequence from every workload identity.
///
/// Bookkeeping is asymmetric on purpose: settled calls increment the
/// success counter and record a latency sample, while failures are logged
/// and nothing else. The summary's success count is the only benign-phase
/// tally.
pub struct NormalTxRunner {
    target: Address,
    calls_per_identity: usize,
    value_wei: u128,
    confirmation_depth: u32,
}

impl NormalTxRunner {
    /// Build the runner from the workload configuration.
    pub fn new(config: &WorkloadConfig) -> Self {
        Self {
            target: config.normal_target,
            calls_per_identity: config.normal_calls_per_identity,
            value_wei: config.call_value_wei,
            confirmation_depth: config.confirmation_depth,
        }
    }

    /// Run the benign phase to completion.
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
            "Executing normal transactions"
        );

        for identity in identities.iter() {
            for _ in 0..self.calls_per_identity {
                let parameter = params.next_value();
                let call = ContractCall::new("sendTx")
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
                        metrics.record_normal_success(latency_ms);
                        debug!(
                            parameter,
                            from = %identity.address(),
                            latency_ms,
                            "Normal call settled"
                        );
                    }
                    Err(e) => {
                        warn!(
                            parameter,
                            from = %identity.address(),
                            error = %e,
                            "Normal call failed"
                        );
                    }
                }
            }
        }
    }
}
