//! Workload runners.
//!
//! Each runner issues one class of call through the shared [`ChainClient`]
//! and feeds outcomes into the metrics collector. Runner failures are
//! never fatal: every loop proceeds to the next call regardless of the
//! outcome of the current one.

mod attack;
mod blacklist;
mod funding;
mod normal;

pub use attack::AttackRunner;
pub use blacklist::BlacklistRunner;
pub use funding::FundingRunner;
pub use normal::NormalTxRunner;

use rampart_chain::{ChainClient, ChainError};
use rampart_types::{Address, ContractCall, Identity};

/// Submit a call and wait for it to settle at the given depth.
pub(crate) async fn submit_and_confirm(
    client: &dyn ChainClient,
    from: &Identity,
    target: Address,
    call: &ContractCall,
    depth: u32,
) -> Result<(), ChainError> {
    let pending = client.submit(from, target, call).await?;
    client.await_confirmation(&pending, depth).await
}
