//! HTTP client for submitting calls to a dev node.

use crate::types::*;
use crate::{ChainClient, ChainError, PendingTx};
use async_trait::async_trait;
use rampart_types::{Address, ContractCall, Identity};
use reqwest::Client;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Capacity of the per-subscription event channel.
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Client for submitting calls and polling events via a node's JSON API.
pub struct HttpChainClient {
    base_url: String,
    client: Client,
    /// Interval between confirmation/event polls.
    poll_interval: Duration,
}

impl HttpChainClient {
    /// Create a new HTTP chain client.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into(),
            client,
            poll_interval: Duration::from_millis(500),
        }
    }

    /// Set the confirmation/event poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Get the base URL of this client.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the status of a submitted call.
    async fn call_status(&self, hash: &str) -> Result<CallStatusResponse, ChainError> {
        let response = self
            .client
            .get(format!("{}/api/v1/calls/{}", self.base_url, hash))
            .send()
            .await
            .map_err(ChainError::Http)?;

        if response.status().as_u16() == 404 {
            return Err(ChainError::TransactionNotFound(hash.to_string()));
        }

        let body: CallStatusResponse = response.json().await.map_err(ChainError::Http)?;
        Ok(body)
    }
}

#[async_trait]
impl ChainClient for HttpChainClient {
    async fn submit(
        &self,
        from: &Identity,
        target: Address,
        call: &ContractCall,
    ) -> Result<PendingTx, ChainError> {
        let envelope = CallEnvelope {
            from: from.address(),
            to: target,
            call: call.clone(),
        };

        let bytes = serde_json::to_vec(&envelope)
            .map_err(|e| ChainError::EncodingFailed(e.to_string()))?;
        let call_hex = hex::encode(bytes);

        let request = SubmitCallRequest { call_hex };

        let response = self
            .client
            .post(format!("{}/api/v1/calls", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(ChainError::Http)?;

        let body: SubmitCallResponse = response.json().await.map_err(ChainError::Http)?;

        if !body.accepted {
            return Err(ChainError::Rejected(
                body.error.unwrap_or_else(|| "submission refused".to_string()),
            ));
        }

        debug!(hash = %body.hash, target = %target, "Call submitted");
        Ok(PendingTx { hash: body.hash })
    }

    async fn await_confirmation(&self, pending: &PendingTx, depth: u32) -> Result<(), ChainError> {
        // Polls until settled or rejected. No timeout: a hung node stalls
        // the caller, which is the documented behavior of this harness.
        loop {
            let status = self.call_status(&pending.hash).await?;

            if status.is_rejected() {
                return Err(ChainError::Rejected(
                    status.error.unwrap_or_else(|| status.status.clone()),
                ));
            }

            if status.is_settled(depth) {
                return Ok(());
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }

    async fn subscribe(
        &self,
        contract: Address,
        event: &str,
    ) -> Result<mpsc::Receiver<Address>, ChainError> {
        let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

        let url = format!(
            "{}/api/v1/contracts/{}/events/{}",
            self.base_url, contract, event
        );
        let client = self.client.clone();
        let poll_interval = self.poll_interval;
        let event_name = event.to_string();

        tokio::spawn(async move {
            let mut cursor = 0u64;
            loop {
                let page = client
                    .get(&url)
                    .query(&[("after", cursor)])
                    .send()
                    .await
                    .and_then(|r| r.error_for_status());

                let page = match page {
                    Ok(response) => match response.json::<EventFeedResponse>().await {
                        Ok(page) => page,
                        Err(e) => {
                            warn!(error = %e, event = %event_name, "Malformed event page");
                            tokio::time::sleep(poll_interval).await;
                            continue;
                        }
                    },
                    Err(e) => {
                        warn!(error = %e, event = %event_name, "Event poll failed");
                        tokio::time::sleep(poll_interval).await;
                        continue;
                    }
                };

                cursor = page.next_cursor;
                for record in page.events {
                    if tx.send(record.project).await.is_err() {
                        // Receiver dropped; subscription over.
                        return;
                    }
                }

                tokio::time::sleep(poll_interval).await;
            }
        });

        Ok(rx)
    }
}
