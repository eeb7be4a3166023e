//! Wire types for the HTTP chain client.

use rampart_types::{Address, ContractCall};
use serde::{Deserialize, Serialize};

/// The call envelope that gets hex-encoded for submission.
///
/// Sender authentication happens node-side at this boundary; the envelope
/// carries the originating address, not the credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallEnvelope {
    /// Originating identity's address.
    pub from: Address,
    /// Target contract (or recipient, for bare transfers).
    pub to: Address,
    /// The call payload.
    pub call: ContractCall,
}

/// Request to submit a call.
#[derive(Debug, Serialize)]
pub struct SubmitCallRequest {
    pub call_hex: String,
}

/// Response from call submission.
#[derive(Debug, Deserialize)]
pub struct SubmitCallResponse {
    pub accepted: bool,
    pub hash: String,
    pub error: Option<String>,
}

/// Response from the call status endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CallStatusResponse {
    /// Transaction hash (hex-encoded).
    pub hash: String,
    /// Current status of the call.
    /// Possible values: "pending", "confirmed", "rejected", "error"
    pub status: String,
    /// Number of ledger entries sealed on top of the containing one.
    #[serde(default)]
    pub confirmations: u32,
    /// Error message if the call was rejected.
    #[serde(default)]
    pub error: Option<String>,
}

impl CallStatusResponse {
    /// Whether the call has settled at the requested confirmation depth.
    pub fn is_settled(&self, depth: u32) -> bool {
        self.status == "confirmed" && self.confirmations >= depth
    }

    /// Whether the call reached a terminal failure state.
    pub fn is_rejected(&self) -> bool {
        matches!(self.status.as_str(), "rejected" | "error")
    }
}

/// One event occurrence in a feed page.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    /// Event name as declared by the contract.
    pub name: String,
    /// The address argument carried by the event.
    pub project: Address,
}

/// A page of contract events.
#[derive(Debug, Deserialize)]
pub struct EventFeedResponse {
    pub events: Vec<EventRecord>,
    /// Cursor to pass back as `after` for the next page.
    pub next_cursor: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_settles_only_at_depth() {
        let status = CallStatusResponse {
            hash: "0xabc".to_string(),
            status: "confirmed".to_string(),
            confirmations: 1,
            error: None,
        };
        assert!(!status.is_settled(2));
        assert!(status.is_settled(1));
        assert!(!status.is_rejected());
    }

    #[test]
    fn rejected_and_error_are_terminal() {
        for s in ["rejected", "error"] {
            let status = CallStatusResponse {
                hash: "0xabc".to_string(),
                status: s.to_string(),
                confirmations: 0,
                error: Some("denied".to_string()),
            };
            assert!(status.is_rejected());
            assert!(!status.is_settled(0));
        }
    }

    #[test]
    fn envelope_round_trips_through_json() {
        let envelope = CallEnvelope {
            from: "0x5fbdb2315678afecb367f032d93f642f64180aa3"
                .parse()
                .unwrap(),
            to: "0xcf7ed3acca5a467e9e704c703e8d87f634fb0fc9"
                .parse()
                .unwrap(),
            call: ContractCall::new("attack")
                .arg(rampart_types::CallArg::Uint(3))
                .with_value(100_000_000_000_000),
        };

        let bytes = serde_json::to_vec(&envelope).unwrap();
        let back: CallEnvelope = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back.from, envelope.from);
        assert_eq!(back.to, envelope.to);
        assert_eq!(back.call, envelope.call);
    }
}
