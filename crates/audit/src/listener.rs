//! Registration event listener.

use crate::dedup::AuditDeduplicator;
use crate::job::run_audit;
use crate::policy::AnalysisPolicy;
use rampart_chain::{ChainClient, ChainError};
use rampart_types::Address;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

/// The firewall event announcing a newly registered project.
pub const REGISTER_EVENT: &str = "registerEvent";

/// Consumes registration events and starts one audit job per new project.
///
/// Each event passes through the dedup gate before anything else happens;
/// the claim is taken before the job starts, so duplicate deliveries and
/// failed jobs alike can never trigger a second audit of the same address.
pub struct RegistrationListener {
    events: mpsc::Receiver<Address>,
    dedup: Arc<AuditDeduplicator>,
    policy: Arc<dyn AnalysisPolicy>,
}

impl RegistrationListener {
    /// Listener over an already-open event stream.
    pub fn new(
        events: mpsc::Receiver<Address>,
        dedup: Arc<AuditDeduplicator>,
        policy: Arc<dyn AnalysisPolicy>,
    ) -> Self {
        Self {
            events,
            dedup,
            policy,
        }
    }

    /// Subscribe to the firewall's registration event and build a listener.
    pub async fn attach(
        client: &dyn ChainClient,
        firewall: Address,
        dedup: Arc<AuditDeduplicator>,
        policy: Arc<dyn AnalysisPolicy>,
    ) -> Result<Self, ChainError> {
        let events = client.subscribe(firewall, REGISTER_EVENT).await?;
        info!(
            contract = %firewall,
            event = REGISTER_EVENT,
            "Listening for registration events"
        );
        Ok(Self::new(events, dedup, policy))
    }

    /// Consume events until the stream closes.
    ///
    /// Audit jobs run as independent tasks; the listener keeps draining
    /// events while jobs are in flight.
    pub async fn run(mut self) {
        while let Some(project) = self.events.recv().await {
            if !self.dedup.try_claim(project) {
                debug!(project = %project, "Project already audited, skipping");
                continue;
            }

            info!(project = %project, "New project registered");

            let policy = Arc::clone(&self.policy);
            tokio::spawn(async move {
                // A failed or aborted job keeps its dedup entry: audits are
                // fire-once, never retried.
                let job = tokio::spawn(async move { run_audit(project, policy.as_ref()).await });
                match job.await {
                    Ok(Ok(_outcome)) => {}
                    Ok(Err(e)) => error!(project = %project, error = %e, "Audit job failed"),
                    Err(e) => error!(project = %project, error = %e, "Audit job aborted"),
                }
            });
        }

        debug!("Registration event stream closed");
    }
}
