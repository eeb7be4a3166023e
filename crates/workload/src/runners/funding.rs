//! Account funding pass.

use super::submit_and_confirm;
use rampart_chain::ChainClient;
use rampart_types::{ContractCall, Identity, IdentityPool};
use tracing::{info, warn};

/// Funding transfers settle at a single confirmation; they only need to be
/// spendable before the workload starts.
const FUNDING_CONFIRMATION_DEPTH: u32 = 1;

/// Transfers a fixed endowment from the operator to each identity.
///
/// Run before the workload so that freshly generated identities can pay for
/// their own calls. Per-transfer failures are logged and skipped.
pub struct FundingRunner {
    endowment_wei: u128,
}

impl FundingRunner {
    /// Build a funding runner with the given per-identity endowment.
    pub fn new(endowment_wei: u128) -> Self {
        Self { endowment_wei }
    }

    /// Endow every identity in `recipients` from `operator`.
    ///
    /// Returns the number of transfers that settled.
    pub async fn run(
        &self,
        client: &dyn ChainClient,
        operator: &Identity,
        recipients: &IdentityPool,
    ) -> usize {
        info!(
            recipients = recipients.len(),
            endowment_wei = self.endowment_wei,
            "Funding identities"
        );

        let mut funded = 0;
        for recipient in recipients.iter() {
            let call = ContractCall::value_transfer(self.endowment_wei);
            match submit_and_confirm(
                client,
                operator,
                recipient.address(),
                &call,
                FUNDING_CONFIRMATION_DEPTH,
            )
            .await
            {
                Ok(()) => funded += 1,
                Err(e) => {
                    warn!(
                        recipient = %recipient.address(),
                        error = %e,
                        "Funding transfer failed"
                    );
                }
            }
        }

        info!(funded, total = recipients.len(), "Funding pass complete");
        funded
    }
}
