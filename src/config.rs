use crate::error::{config_error, env_error, BoardResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use toml;
use url::Url;

/// Default calendar feed endpoint (the published gist the booking flows
/// write to).
pub const DEFAULT_FEED_ENDPOINT: &str = "https://gist.githubusercontent.com/hadefuwa/627f54c72d2eeea07abb4f882c69434a/raw/f9d31fa607d84d7e6ae384238b50ebd6f0c1603d/matrix-calendar-data.json";

/// Default feed refresh interval in seconds
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 300;

/// Default number of days of upcoming events shown on a board
pub const DEFAULT_LOOKAHEAD_DAYS: i64 = 7;

/// Main configuration structure for the display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// URL of the calendar feed JSON document
    pub feed_url: String,
    /// Seconds between feed refreshes
    pub refresh_interval_secs: u64,
    /// How many days ahead a board shows
    pub lookahead_days: i64,
    /// Local ICS files to import and display at startup
    pub ics_files: Vec<PathBuf>,
    /// Map of component names to their enabled status
    pub components: HashMap<String, bool>,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> BoardResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let feed_url = env::var("FEED_URL").unwrap_or_else(|_| String::from(DEFAULT_FEED_ENDPOINT));
        Url::parse(&feed_url).map_err(|e| config_error(&format!("Invalid feed URL: {}", e)))?;

        let refresh_interval_secs = match env::var("REFRESH_INTERVAL_SECS") {
            Ok(value) => value
                .parse::<u64>()
                .map_err(|_| env_error("Invalid REFRESH_INTERVAL_SECS format"))?,
            Err(_) => DEFAULT_REFRESH_INTERVAL_SECS,
        };

        let lookahead_days = match env::var("LOOKAHEAD_DAYS") {
            Ok(value) => value
                .parse::<i64>()
                .map_err(|_| env_error("Invalid LOOKAHEAD_DAYS format"))?,
            Err(_) => DEFAULT_LOOKAHEAD_DAYS,
        };

        // Comma-separated list of .ics paths
        let ics_files = env::var("ICS_FILES")
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from)
                    .collect()
            })
            .unwrap_or_default();

        // Initialize default components
        let mut components = HashMap::new();
        components.insert("live_feed".to_string(), true);
        components.insert("ics_import".to_string(), true);

        // Load components configuration from file if it exists
        if let Ok(content) = fs::read_to_string("config/components.toml") {
            if let Ok(file_components) = toml::from_str::<HashMap<String, bool>>(&content) {
                // Merge with defaults
                for (key, value) in file_components {
                    components.insert(key, value);
                }
            }
        }

        Ok(Config {
            feed_url,
            refresh_interval_secs,
            lookahead_days,
            ics_files,
            components,
        })
    }

    /// Check if a component is enabled
    pub fn is_component_enabled(&self, name: &str) -> bool {
        *self.components.get(name).unwrap_or(&false)
    }

    /// Update component enabled status
    #[allow(dead_code)]
    pub fn set_component_enabled(&mut self, name: &str, enabled: bool) -> BoardResult<()> {
        self.components.insert(name.to_string(), enabled);
        self.save_components()
    }

    /// Save component configuration to file
    #[allow(dead_code)]
    fn save_components(&self) -> BoardResult<()> {
        // Create config directory if it doesn't exist
        if !Path::new("config").exists() {
            fs::create_dir("config")?;
        }

        let toml_str = toml::to_string(&self.components)?;
        fs::write("config/components.toml", toml_str)?;

        Ok(())
    }
}
