//! Event-triggered audit pipeline.
//!
//! Subscribes to the firewall's project-registration event and audits every
//! newly registered project exactly once:
//!
//! ```text
//! registerEvent ──▶ RegistrationListener ──▶ AuditDeduplicator (claim gate)
//!                                                    │ first claim only
//!                                                    ▼
//!                                            audit job (tokio task)
//!                                                    │
//!                                                    ▼
//!                                            Clean | Vulnerable(detail)
//! ```
//!
//! The dedup set is the only state shared across tasks; its check-and-insert
//! is atomic, so duplicate events for the same address, even concurrent
//! ones, start at most one job. A failed job keeps its dedup entry: audits
//! are fire-once, never retried.
//!
//! The analysis itself is a pluggable [`AnalysisPolicy`]; the shipped
//! [`SimulatedAnalysis`] models variable-cost stages with randomized delays
//! and a coin-flip classification, and can be swapped for a real analyzer
//! without touching the listener or the gate.

mod dedup;
mod job;
mod listener;
mod policy;

pub use dedup::AuditDeduplicator;
pub use job::run_audit;
pub use listener::{RegistrationListener, REGISTER_EVENT};
pub use policy::{
    AnalysisPolicy, AuditOutcome, SimulatedAnalysis, AUDIT_STEPS, VULNERABILITY_CATALOG,
};

/// Errors from an audit job.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    /// The analysis policy failed to produce a classification.
    #[error("Analysis failed: {0}")]
    Analysis(String),
}
