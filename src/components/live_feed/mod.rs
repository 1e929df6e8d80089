mod actor;
mod handle;
pub mod models;
mod scheduler;

pub use handle::LiveFeedHandle;
pub use models::{FeedDocument, FeedEvent, FeedSnapshot};

use crate::config::Config;
use crate::error::BoardResult;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::live_feed::scheduler::start_scheduler;

/// Live feed component: polls the calendar feed and redraws the room boards
#[derive(Default)]
pub struct LiveFeed {
    handle: RwLock<Option<LiveFeedHandle>>,
}

impl LiveFeed {
    /// Create a new live feed component
    pub fn new() -> Self {
        Self {
            handle: RwLock::new(None),
        }
    }

    /// Get the handle if it exists
    pub async fn get_handle(&self) -> Option<LiveFeedHandle> {
        let handle_lock = self.handle.read().await;
        handle_lock.clone()
    }
}

#[async_trait]
impl super::Component for LiveFeed {
    fn name(&self) -> &'static str {
        "live_feed"
    }

    async fn init(&self, config: Arc<RwLock<Config>>) -> BoardResult<()> {
        // Create a new handle if one doesn't exist
        let mut handle_lock = self.handle.write().await;
        if handle_lock.is_none() {
            *handle_lock = Some(LiveFeedHandle::new(Arc::clone(&config)));
        }

        let handle = handle_lock.as_ref().unwrap().clone();

        let lookahead_days = {
            let config_read = config.read().await;
            config_read.lookahead_days
        };

        // Load and draw once at startup, then keep refreshing on the interval
        scheduler::refresh_and_render(&handle, lookahead_days).await;
        start_scheduler(config, handle).await;

        Ok(())
    }

    async fn shutdown(&self) -> BoardResult<()> {
        // Shutdown the handle if it exists
        let handle_lock = self.handle.read().await;
        if let Some(handle) = &*handle_lock {
            handle.shutdown().await?;
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
