//! Viewer configuration: one endpoint, one poll interval.
//!
//! Loaded from a RON file; a missing or broken file degrades to defaults so
//! the dashboard always comes up.

use std::path::Path;
use std::time::Duration;

use feed_logging::{feed_info, feed_warn};
use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_CONFIG_PATH: &str = "sentinel_feed.ron";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub(crate) struct FeedConfig {
    pub endpoint: String,
    pub poll_interval_ms: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000/events".to_string(),
            poll_interval_ms: 3000,
        }
    }
}

impl FeedConfig {
    pub(crate) fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

pub(crate) fn load(path: &Path) -> FeedConfig {
    let content = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return FeedConfig::default();
        }
        Err(err) => {
            feed_warn!("Failed to read config from {:?}: {}", path, err);
            return FeedConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => {
            feed_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            feed_warn!("Failed to parse config from {:?}: {}", path, err);
            FeedConfig::default()
        }
    }
}
