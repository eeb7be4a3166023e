//! The multi-step audit job.

use crate::policy::{AnalysisPolicy, AuditOutcome, AUDIT_STEPS};
use crate::AuditError;
use rampart_types::Address;
use tracing::{debug, info};

/// Run the audit job for one project.
///
/// Walks the fixed step sequence, charging the policy's delay at each step,
/// then asks the policy for the final classification. The job has the same
/// structure every run; only delays and the outcome vary.
pub async fn run_audit(
    project: Address,
    policy: &dyn AnalysisPolicy,
) -> Result<AuditOutcome, AuditError> {
    info!(project = %project, "Audit started");

    let total = AUDIT_STEPS.len();
    for (index, step) in AUDIT_STEPS.iter().enumerate() {
        debug!(
            project = %project,
            step = index + 1,
            total,
            name = step,
            "Audit step"
        );
        tokio::time::sleep(policy.step_delay(index)).await;
    }

    let outcome = policy.classify(project)?;
    match &outcome {
        AuditOutcome::Clean => {
            info!(project = %project, "Audit complete: no known vulnerabilities");
        }
        AuditOutcome::Vulnerable { detail } => {
            info!(
                project = %project,
                detail = %detail,
                "Audit complete: project is vulnerable"
            );
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{SimulatedAnalysis, VULNERABILITY_CATALOG};

    fn addr(byte: u8) -> Address {
        Address::from_bytes([byte; 20])
    }

    #[tokio::test]
    async fn forced_vulnerable_job_attaches_one_catalog_entry() {
        let policy = SimulatedAnalysis::with_seed(3)
            .with_delay_range(0, 1)
            .with_vulnerability_rate(1.0);

        let outcome = run_audit(addr(0xAA), &policy).await.unwrap();
        match outcome {
            AuditOutcome::Vulnerable { detail } => {
                assert!(VULNERABILITY_CATALOG.contains(&detail.as_str()));
            }
            AuditOutcome::Clean => panic!("expected a vulnerable classification"),
        }
    }

    #[tokio::test]
    async fn clean_job_attaches_no_detail() {
        let policy = SimulatedAnalysis::with_seed(3)
            .with_delay_range(0, 1)
            .with_vulnerability_rate(0.0);

        let outcome = run_audit(addr(0xBB), &policy).await.unwrap();
        assert_eq!(outcome, AuditOutcome::Clean);
    }
}
