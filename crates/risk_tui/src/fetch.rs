//! Generation-tagged background fetches.
//!
//! Every mount of a screen bumps the generation counter before spawning its
//! fetch; the task stamps its result with that generation so the event loop
//! can tell a live resolution from one belonging to a screen that has since
//! been left.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use risk_client::RiskApiClient;
use risk_core::types::{Risk, RiskMetrics};

/// A fetch resolution delivered to the event loop.
pub enum FetchMessage {
    /// Result of the dashboard metrics read.
    Metrics {
        /// Generation the fetch was started under.
        generation: u64,
        /// Decoded projection or the propagated client error.
        result: Result<RiskMetrics>,
    },
    /// Result of a single-risk read for the detail screen.
    RiskDetail {
        /// Generation the fetch was started under.
        generation: u64,
        /// Decoded risk or the propagated client error.
        result: Result<Risk>,
    },
}

/// Spawns fetch tasks and hands their results to the event loop.
pub struct Fetcher {
    client: Arc<RiskApiClient>,
    tx: mpsc::UnboundedSender<FetchMessage>,
    generation: u64,
}

impl Fetcher {
    /// Create a fetcher and the receiving end the event loop drains.
    pub fn new(client: Arc<RiskApiClient>) -> (Self, mpsc::UnboundedReceiver<FetchMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                client,
                tx,
                generation: 0,
            },
            rx,
        )
    }

    /// Start the metrics read for a fresh dashboard mount.
    ///
    /// Returns the generation stamped on the eventual resolution.
    pub fn spawn_metrics(&mut self) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.get_risk_metrics().await;
            let _ = tx.send(FetchMessage::Metrics { generation, result });
        });
        generation
    }

    /// Start a single-risk read for a fresh detail mount.
    pub fn spawn_risk_detail(&mut self, id: u64) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.get_risk(id).await;
            let _ = tx.send(FetchMessage::RiskDetail { generation, result });
        });
        generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_generations_are_monotonic() {
        let client = Arc::new(RiskApiClient::new("http://127.0.0.1:9"));
        let (mut fetcher, _rx) = Fetcher::new(client);

        let first = fetcher.spawn_metrics();
        let second = fetcher.spawn_risk_detail(1);
        let third = fetcher.spawn_metrics();

        assert!(first < second);
        assert!(second < third);
    }

    #[tokio::test]
    async fn test_failed_fetch_delivers_stamped_error() {
        // Nothing listens on this port; the resolution must still arrive,
        // carrying the generation and the propagated error.
        let client = Arc::new(RiskApiClient::new("http://127.0.0.1:9"));
        let (mut fetcher, mut rx) = Fetcher::new(client);

        let generation = fetcher.spawn_metrics();

        match rx.recv().await.unwrap() {
            FetchMessage::Metrics {
                generation: got,
                result,
            } => {
                assert_eq!(got, generation);
                assert!(result.is_err());
            }
            _ => panic!("expected a metrics resolution"),
        }
    }
}
