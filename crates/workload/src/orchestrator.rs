//! Top-level workload driver.

use crate::config::WorkloadConfig;
use crate::metrics::{MetricsCollector, WorkloadReport};
use crate::runners::{
    submit_and_confirm, AttackRunner, BlacklistRunner, FundingRunner, NormalTxRunner,
};
use rampart_chain::ChainClient;
use rampart_types::{CallArg, ContractCall, Identity, IdentityPool, ParameterSequence};
use std::sync::Arc;
use tracing::{error, info};

/// Drives the three workload phases in a fixed order and publishes the
/// aggregate report.
///
/// Phases never interleave: the attack sequence settles completely before
/// the blacklist sequence starts, and the blacklist sequence before the
/// benign sequence. Within a phase, identities are processed strictly in
/// pool order, and within an identity, calls are issued in ascending
/// parameter order.
pub struct WorkloadOrchestrator {
    client: Arc<dyn ChainClient>,
    config: WorkloadConfig,
    operator: Identity,
    identities: IdentityPool,
    denylist: IdentityPool,
}

impl WorkloadOrchestrator {
    /// Create an orchestrator over configured collaborators.
    pub fn new(
        client: Arc<dyn ChainClient>,
        config: WorkloadConfig,
        operator: Identity,
        identities: IdentityPool,
        denylist: IdentityPool,
    ) -> Self {
        Self {
            client,
            config,
            operator,
            identities,
            denylist,
        }
    }

    /// Endow every workload and denylist identity from the operator.
    pub async fn fund_identities(&self) {
        let funding = FundingRunner::new(self.config.endowment_wei);
        funding
            .run(&*self.client, &self.operator, &self.identities)
            .await;
        funding
            .run(&*self.client, &self.operator, &self.denylist)
            .await;
    }

    /// Install the denylist on the firewall for the protected target.
    ///
    /// One `batch_setblack` call from the operator. Failure is logged and
    /// the run continues; the report will show what the firewall actually
    /// did with denylisted traffic.
    pub async fn install_denylist(&self) {
        let addresses: Vec<_> = self.denylist.iter().map(|id| id.address()).collect();
        info!(
            entries = addresses.len(),
            firewall = %self.config.firewall,
            "Installing denylist"
        );

        let call = ContractCall::new("batch_setblack")
            .arg(CallArg::Addr(self.config.protected_target))
            .arg(CallArg::AddrList(addresses));

        match submit_and_confirm(
            &*self.client,
            &self.operator,
            self.config.firewall,
            &call,
            self.config.confirmation_depth,
        )
        .await
        {
            Ok(()) => info!("Denylist installed"),
            Err(e) => error!(error = %e, "Failed to install denylist"),
        }
    }

    /// Run the three workload phases and return the final report.
    pub async fn run(&self) -> WorkloadReport {
        let mut metrics = MetricsCollector::new();
        let mut attack_params = ParameterSequence::new();
        let mut normal_params =
            ParameterSequence::starting_at(self.config.normal_parameter_origin);

        AttackRunner::new(&self.config)
            .run(
                &*self.client,
                &self.identities,
                &mut attack_params,
                &mut metrics,
            )
            .await;

        BlacklistRunner::new(&self.config)
            .run(&*self.client, &self.denylist, &mut metrics)
            .await;

        NormalTxRunner::new(&self.config)
            .run(
                &*self.client,
                &self.identities,
                &mut normal_params,
                &mut metrics,
            )
            .await;

        let report = metrics.finish();
        info!(
            attack_failures = report.stats.attack_failures,
            normal_successes = report.stats.normal_successes,
            "Workload complete"
        );
        report
    }
}
