//! Process glue for the rampart harness.
//!
//! Configuration loading and the project-registration utility live here;
//! the `rampart` binary wires them to the workload orchestrator and the
//! audit listener.

mod config;
mod registrar;

pub use config::{ConfigError, ContractsConfig, HarnessConfig, WorkloadSettings};
pub use registrar::{register_projects, RegistrationConfig};
