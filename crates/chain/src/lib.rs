//! Chain client boundary for the rampart harness.
//!
//! The harness core never interprets raw wire formats; everything on-chain
//! happens behind the [`ChainClient`] trait:
//!
//! - [`ChainClient::submit`]: dispatch a contract call from an identity
//! - [`ChainClient::await_confirmation`]: wait for a confirmation depth
//! - [`ChainClient::subscribe`]: stream a contract event as addresses
//!
//! [`HttpChainClient`] is the production implementation, talking JSON over
//! HTTP to a dev node. Tests substitute scripted in-memory clients.

mod client;
mod types;

pub use client::HttpChainClient;
pub use types::{
    CallEnvelope, CallStatusResponse, EventFeedResponse, EventRecord, SubmitCallRequest,
    SubmitCallResponse,
};

use async_trait::async_trait;
use rampart_types::{Address, ContractCall, Identity};
use tokio::sync::mpsc;

/// Handle for a submitted, not-yet-settled call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTx {
    /// Node-assigned transaction hash, hex-encoded.
    pub hash: String,
}

/// Chain interaction errors.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to encode call: {0}")]
    EncodingFailed(String),

    #[error("Call rejected: {0}")]
    Rejected(String),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),

    #[error("Subscription failed: {0}")]
    SubscribeFailed(String),
}

/// Client interface for submitting calls and observing contract events.
///
/// Implementations own signing and wire encoding; callers hand over an
/// [`Identity`] and opaque call description and get settlement outcomes
/// back. All methods are suspension points.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Submit a call from `from` against `target`.
    async fn submit(
        &self,
        from: &Identity,
        target: Address,
        call: &ContractCall,
    ) -> Result<PendingTx, ChainError>;

    /// Wait until `pending` has settled at the given confirmation depth.
    ///
    /// `Ok` means settled; any `Err` means the call was rejected or could
    /// not be confirmed. No timeout is applied here; a hung node stalls the
    /// caller.
    async fn await_confirmation(&self, pending: &PendingTx, depth: u32) -> Result<(), ChainError>;

    /// Subscribe to `event` on `contract`, yielding one address per
    /// occurrence.
    ///
    /// The stream ends when the subscription task stops or the receiver is
    /// dropped.
    async fn subscribe(
        &self,
        contract: Address,
        event: &str,
    ) -> Result<mpsc::Receiver<Address>, ChainError>;
}
