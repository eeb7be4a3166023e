//! Rampart harness CLI
//!
//! Drives the firewall test workload and the event-triggered audit listener.
//!
//! # Example
//!
//! ```bash
//! # Run the three-phase transaction workload and print the summary
//! rampart workload --config harness.toml
//!
//! # Listen for registration events and audit new projects
//! rampart listen --config harness.toml
//!
//! # Register the configured target contracts with the firewall
//! rampart register --config harness.toml
//! ```

use clap::{Parser, Subcommand};
use rampart_audit::{AnalysisPolicy, AuditDeduplicator, RegistrationListener, SimulatedAnalysis};
use rampart_chain::HttpChainClient;
use rampart_harness::{register_projects, HarnessConfig};
use rampart_workload::WorkloadOrchestrator;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Rampart firewall harness
///
/// Exercises a deployed smart-contract firewall with adversarial and benign
/// traffic, and audits newly registered projects.
#[derive(Parser, Debug)]
#[command(name = "rampart")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the transaction workload and print the summary report
    Workload {
        /// Path to the harness configuration file
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Listen for registration events and audit new projects
    Listen {
        /// Path to the harness configuration file
        #[arg(short, long)]
        config: PathBuf,

        /// Seed for the simulated analysis RNG. When omitted, the simulator
        /// seeds itself from entropy.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Register configured target contracts with the firewall
    Register {
        /// Path to the harness configuration file
        #[arg(short, long)]
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(
                "warn,rampart=info,rampart_harness=info,rampart_workload=info,rampart_audit=info,rampart_chain=info",
            )
        }))
        .init();

    let args = Args::parse();

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");

    match args.command {
        Command::Workload { config } => {
            let config = match load_config(&config) {
                Some(config) => config,
                None => return ExitCode::FAILURE,
            };
            rt.block_on(run_workload(config));
        }
        Command::Listen { config, seed } => {
            let config = match load_config(&config) {
                Some(config) => config,
                None => return ExitCode::FAILURE,
            };
            rt.block_on(run_listener(config, seed));
        }
        Command::Register { config } => {
            let config = match load_config(&config) {
                Some(config) => config,
                None => return ExitCode::FAILURE,
            };
            rt.block_on(run_registration(config));
        }
    }

    ExitCode::SUCCESS
}

fn load_config(path: &std::path::Path) -> Option<HarnessConfig> {
    match HarnessConfig::load(path) {
        Ok(config) => Some(config),
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            None
        }
    }
}

async fn run_workload(config: HarnessConfig) {
    let client = Arc::new(HttpChainClient::new(&config.rpc_url));
    let orchestrator = WorkloadOrchestrator::new(
        client,
        config.workload_config(),
        config.operator(),
        config.identity_pool(),
        config.denylist_pool(),
    );

    if config.workload.fund_identities {
        orchestrator.fund_identities().await;
    }
    if config.workload.install_denylist {
        orchestrator.install_denylist().await;
    }

    let report = orchestrator.run().await;
    report.print_summary();
}

async fn run_listener(config: HarnessConfig, seed: Option<u64>) {
    let client = HttpChainClient::new(&config.rpc_url);
    let dedup = Arc::new(AuditDeduplicator::new());
    let policy: Arc<dyn AnalysisPolicy> = match seed {
        Some(seed) => Arc::new(SimulatedAnalysis::with_seed(seed)),
        None => Arc::new(SimulatedAnalysis::new()),
    };

    match RegistrationListener::attach(&client, config.contracts.firewall, dedup, policy).await {
        Ok(listener) => listener.run().await,
        Err(e) => error!(error = %e, "Failed to subscribe to registration events"),
    }
}

async fn run_registration(config: HarnessConfig) {
    let registration = match &config.registration {
        Some(registration) => registration,
        None => {
            error!("No [registration] table in the configuration file");
            return;
        }
    };

    let client = HttpChainClient::new(&config.rpc_url);
    let operator = config.operator();
    let registered = register_projects(
        &client,
        &operator,
        config.contracts.firewall,
        registration,
    )
    .await;

    info!(registered, "Done");
}
