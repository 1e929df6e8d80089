use super::models::{FeedDocument, FeedSnapshot};
use crate::config::Config;
use crate::error::{feed_error, BoardResult};
use chrono::Local;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::info;

/// The live feed actor that processes messages
pub struct LiveFeedActor {
    config: Arc<RwLock<Config>>,
    client: Client,
    command_rx: mpsc::Receiver<LiveFeedCommand>,
    /// Last good snapshot, kept so the boards survive a failed refresh
    snapshot: Option<FeedSnapshot>,
}

/// Commands that can be sent to the live feed actor
pub enum LiveFeedCommand {
    GetSnapshot(mpsc::Sender<BoardResult<Option<FeedSnapshot>>>),
    Refresh(mpsc::Sender<BoardResult<FeedSnapshot>>),
    Shutdown,
}

/// Handle for communicating with the live feed actor
#[derive(Clone)]
pub struct LiveFeedActorHandle {
    command_tx: mpsc::Sender<LiveFeedCommand>,
}

impl LiveFeedActorHandle {
    /// Get the last good snapshot, if any fetch has succeeded yet
    pub async fn get_snapshot(&self) -> BoardResult<Option<FeedSnapshot>> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(LiveFeedCommand::GetSnapshot(response_tx))
            .await
            .map_err(|e| feed_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| feed_error("Response channel closed"))?
    }

    /// Fetch the feed now and cache the result
    pub async fn refresh(&self) -> BoardResult<FeedSnapshot> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(LiveFeedCommand::Refresh(response_tx))
            .await
            .map_err(|e| feed_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| feed_error("Response channel closed"))?
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> BoardResult<()> {
        let _ = self.command_tx.send(LiveFeedCommand::Shutdown).await;
        Ok(())
    }
}

impl LiveFeedActor {
    /// Create a new actor and return its handle
    pub fn new(config: Arc<RwLock<Config>>) -> (Self, LiveFeedActorHandle) {
        let (command_tx, command_rx) = mpsc::channel(32);

        let actor = Self {
            config,
            client: Client::new(),
            command_rx,
            snapshot: None,
        };

        let handle = LiveFeedActorHandle { command_tx };

        (actor, handle)
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!("Live feed actor started");

        // Process commands
        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                LiveFeedCommand::GetSnapshot(response_tx) => {
                    let _ = response_tx.send(Ok(self.snapshot.clone())).await;
                }
                LiveFeedCommand::Refresh(response_tx) => {
                    let result = self.refresh().await;
                    let _ = response_tx.send(result).await;
                }
                LiveFeedCommand::Shutdown => {
                    info!("Live feed actor shutting down");
                    break;
                }
            }
        }

        info!("Live feed actor shut down");
    }

    /// Fetch the feed and replace the cached snapshot on success
    async fn refresh(&mut self) -> BoardResult<FeedSnapshot> {
        let feed_url = {
            let config_read = self.config.read().await;
            config_read.feed_url.clone()
        };

        let document = Self::fetch_feed(&self.client, &feed_url).await?;
        let snapshot = FeedSnapshot {
            document,
            fetched_at: Local::now(),
        };
        self.snapshot = Some(snapshot.clone());

        Ok(snapshot)
    }

    /// Fetch and parse the feed document
    async fn fetch_feed(client: &Client, feed_url: &str) -> BoardResult<FeedDocument> {
        let response = client
            .get(feed_url)
            .send()
            .await
            .map_err(|e| feed_error(&format!("Failed to fetch calendar feed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(feed_error(&format!(
                "Failed to fetch calendar feed: HTTP {} - {}",
                status, error_body
            )));
        }

        response
            .json::<FeedDocument>()
            .await
            .map_err(|e| feed_error(&format!("Failed to parse calendar feed: {}", e)))
    }
}
