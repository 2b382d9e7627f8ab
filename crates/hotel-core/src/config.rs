//! Runtime configuration, loaded from `HOTEL_*` environment variables with defaults.

use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_CHANNEL_BUFFER: usize = 32;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelConfig {
    /// Mailbox capacity of every resource actor (`HOTEL_CHANNEL_BUFFER`).
    pub channel_buffer: usize,
    /// Filter directive used when `RUST_LOG` is unset (`HOTEL_LOG`).
    pub log_filter: String,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl HotelConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source. Missing or unparsable values
    /// fall back to the defaults; a zero buffer is rejected since tokio panics on it.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            channel_buffer: lookup("HOTEL_CHANNEL_BUFFER")
                .and_then(|s| s.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_CHANNEL_BUFFER),
            log_filter: lookup("HOTEL_LOG")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}
