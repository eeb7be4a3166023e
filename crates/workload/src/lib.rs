//! Transaction workload orchestrator.
//!
//! Generates, sequences, dispatches, and measures three classes of on-chain
//! calls against a deployed firewall:
//!
//! 1. Reentrancy-attack attempts ([`AttackRunner`])
//! 2. Denylisted-identity transactions ([`BlacklistRunner`])
//! 3. Benign transactions ([`NormalTxRunner`])
//!
//! [`WorkloadOrchestrator`] drives the three runners strictly in program
//! order and publishes the aggregate [`WorkloadReport`]. The entire run is
//! serialized end-to-end: the ledger enforces per-identity nonce ordering,
//! so calls from one identity must settle in submission order. Do not
//! interleave identities without adding explicit nonce management first.

mod config;
mod metrics;
mod orchestrator;
mod runners;

pub use config::WorkloadConfig;
pub use metrics::{MetricsCollector, WorkloadReport, WorkloadStats};
pub use orchestrator::WorkloadOrchestrator;
pub use runners::{AttackRunner, BlacklistRunner, FundingRunner, NormalTxRunner};
