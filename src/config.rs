// ABOUTME: Configuration for the built-in tool set, read from TOOLDISPATCH_*
// ABOUTME: environment variables with defaults. Binaries load .env first.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

pub const ENV_FEED_URL: &str = "TOOLDISPATCH_FEED_URL";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "TOOLDISPATCH_HTTP_TIMEOUT_SECS";
pub const ENV_USER_AGENT: &str = "TOOLDISPATCH_USER_AGENT";
pub const ENV_CHART_OUTPUT: &str = "TOOLDISPATCH_CHART_OUTPUT";
pub const ENV_LOG_LEVEL: &str = "TOOLDISPATCH_LOG_LEVEL";

/// Placeholder substituted with the encoded topic in the feed URL.
pub const TOPIC_PLACEHOLDER: &str = "{topic}";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub feed: FeedConfig,
    pub chart: ChartConfig,
    pub logging: LoggingConfig,
}

/// Settings for the headline feed client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// URL template containing `{topic}`.
    pub url_template: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url_template: "https://news.google.com/rss/search?q={topic}".to_string(),
            timeout_secs: 30,
            user_agent: concat!("tooldispatch/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Where rendered charts go.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Append charts to this file instead of printing them to stdout.
    pub output: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_FEED_URL) {
            if !url.contains(TOPIC_PLACEHOLDER) {
                return Err(ConfigError::InvalidValue {
                    key: ENV_FEED_URL.to_string(),
                    message: format!("must contain {}", TOPIC_PLACEHOLDER),
                });
            }
            config.feed.url_template = url;
        }

        if let Some(raw) = lookup(ENV_HTTP_TIMEOUT_SECS) {
            config.feed.timeout_secs = match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: ENV_HTTP_TIMEOUT_SECS.to_string(),
                        message: format!("expected a positive integer, got '{}'", raw),
                    });
                }
            };
        }

        if let Some(agent) = lookup(ENV_USER_AGENT) {
            config.feed.user_agent = agent;
        }

        if let Some(path) = lookup(ENV_CHART_OUTPUT).filter(|p| !p.is_empty()) {
            config.chart.output = Some(PathBuf::from(path));
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            match level.to_lowercase().as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => config.logging.level = level,
                _ => warn!(%level, "unknown log level, using default"),
            }
        }

        Ok(config)
    }
}
