use super::actor::LiveFeedActorHandle;
use super::models::FeedSnapshot;
use crate::config::Config;
use crate::error::BoardResult;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Handle for interacting with the live feed actor
#[derive(Clone)]
pub struct LiveFeedHandle {
    actor_handle: LiveFeedActorHandle,
    _actor_task: Arc<JoinHandle<()>>,
}

impl LiveFeedHandle {
    /// Create a new LiveFeedHandle and spawn the actor
    pub fn new(config: Arc<RwLock<Config>>) -> Self {
        use super::actor::LiveFeedActor;

        // Create the actor and get its handle
        let (mut actor, handle) = LiveFeedActor::new(config);

        // Spawn a task to run the actor
        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        Self {
            actor_handle: handle,
            _actor_task: Arc::new(actor_task),
        }
    }

    /// Get the last good snapshot, if any
    pub async fn get_snapshot(&self) -> BoardResult<Option<FeedSnapshot>> {
        self.actor_handle.get_snapshot().await
    }

    /// Fetch the feed now and cache the result
    pub async fn refresh(&self) -> BoardResult<FeedSnapshot> {
        self.actor_handle.refresh().await
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> BoardResult<()> {
        self.actor_handle.shutdown().await
    }
}
