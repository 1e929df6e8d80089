use crate::board::{self, RoomSchedule};
use crate::config::Config;
use crate::error::BoardResult;
use crate::ics;
use async_trait::async_trait;
use chrono::Local;
use std::fs;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

/// ICS import component: decodes configured local calendar files and draws
/// one board per file at startup.
#[derive(Default)]
pub struct IcsImport;

impl IcsImport {
    /// Create a new ICS import component
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl super::Component for IcsImport {
    fn name(&self) -> &'static str {
        "ics_import"
    }

    async fn init(&self, config: Arc<RwLock<Config>>) -> BoardResult<()> {
        let (paths, lookahead_days) = {
            let config_read = config.read().await;
            (config_read.ics_files.clone(), config_read.lookahead_days)
        };

        if paths.is_empty() {
            return Ok(());
        }

        let now = Local::now();
        for path in paths {
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    // An unreadable file is skipped, not fatal
                    error!("Failed to read calendar file {}: {}", path.display(), e);
                    continue;
                }
            };

            let events = ics::decode(&content);
            info!("Imported {} events from {}", events.len(), path.display());

            let label = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("Imported calendar")
                .to_string();

            let schedule = RoomSchedule {
                label,
                events,
                last_updated: Some(now),
            };
            println!("{}", board::render_schedule(&schedule, now, lookahead_days));
        }

        Ok(())
    }

    async fn shutdown(&self) -> BoardResult<()> {
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
