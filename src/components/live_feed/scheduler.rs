use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::{sleep, Duration as TokioDuration};
use tracing::error;

use super::handle::LiveFeedHandle;
use super::models::FeedSnapshot;
use crate::board;
use crate::config::Config;

/// Start the periodic refresh loop
pub async fn start_scheduler(config: Arc<RwLock<Config>>, handle: LiveFeedHandle) {
    let (interval_secs, lookahead_days) = {
        let config_read = config.read().await;
        (config_read.refresh_interval_secs, config_read.lookahead_days)
    };

    tokio::spawn(async move {
        loop {
            sleep(TokioDuration::from_secs(interval_secs)).await;
            refresh_and_render(&handle, lookahead_days).await;
        }
    });
}

/// Refresh the feed and redraw the boards.
///
/// A failed refresh keeps the boards alive: the last good snapshot is
/// re-rendered instead.
pub async fn refresh_and_render(handle: &LiveFeedHandle, lookahead_days: i64) {
    match handle.refresh().await {
        Ok(snapshot) => render_snapshot(&snapshot, lookahead_days),
        Err(e) => {
            error!("Failed to refresh calendar feed: {}", e);

            match handle.get_snapshot().await {
                Ok(Some(snapshot)) => render_snapshot(&snapshot, lookahead_days),
                Ok(None) => {}
                Err(e) => error!("Failed to read cached feed snapshot: {}", e),
            }
        }
    }
}

fn render_snapshot(snapshot: &FeedSnapshot, lookahead_days: i64) {
    let now = chrono::Local::now();
    for schedule in snapshot.room_schedules() {
        println!("{}", board::render_schedule(&schedule, now, lookahead_days));
    }
}
