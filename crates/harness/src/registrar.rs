//! Project registration utility.
//!
//! Registers target contracts with the firewall, which in turn emits the
//! registration events the audit listener consumes.

use rampart_chain::{ChainClient, ChainError};
use rampart_types::{Address, CallArg, ContractCall, Identity};
use serde::Deserialize;
use tracing::{error, info};

/// Registration settles at a single confirmation before the next target is
/// submitted, keeping the operator's calls in nonce order.
const REGISTRATION_CONFIRMATION_DEPTH: u32 = 1;

/// Registration table for the `register` subcommand.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationConfig {
    /// Target contracts to register, in order.
    pub targets: Vec<Address>,

    /// Selector of the protected function, hex-encoded.
    pub selector: String,

    /// Parameters forwarded to the firewall's register method.
    #[serde(default)]
    pub params: Vec<u64>,

    /// Module addresses to enable for each target.
    #[serde(default)]
    pub modules: Vec<Address>,
}

/// Register each configured target with the firewall, in order.
///
/// Returns the number of registrations that settled. Per-target failures are
/// logged and skipped.
pub async fn register_projects(
    client: &dyn ChainClient,
    operator: &Identity,
    firewall: Address,
    registration: &RegistrationConfig,
) -> usize {
    let mut registered = 0;

    for target in &registration.targets {
        info!(target = %target, "Registering target contract");

        let call = ContractCall::new("register")
            .arg(CallArg::Addr(*target))
            .arg(CallArg::Addr(operator.address()))
            .arg(CallArg::Selector(registration.selector.clone()))
            .arg(CallArg::UintList(registration.params.clone()))
            .arg(CallArg::AddrList(registration.modules.clone()));

        match submit_registration(client, operator, firewall, &call).await {
            Ok(()) => {
                info!(target = %target, "Registration confirmed");
                registered += 1;
            }
            Err(e) => {
                error!(target = %target, error = %e, "Registration failed");
            }
        }
    }

    info!(
        registered,
        total = registration.targets.len(),
        "Registration pass complete"
    );
    registered
}

async fn submit_registration(
    client: &dyn ChainClient,
    operator: &Identity,
    firewall: Address,
    call: &ContractCall,
) -> Result<(), ChainError> {
    let pending = client.submit(operator, firewall, call).await?;
    client
        .await_confirmation(&pending, REGISTRATION_CONFIRMATION_DEPTH)
        .await
}
