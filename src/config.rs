//! Configuration Module
//!
//! Handles loading cache tuning parameters from environment variables.

use std::env;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum allowed key length in bytes, unlimited when `None`
    pub max_key_length: Option<usize>,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_KEY_LENGTH` - Maximum key length in bytes (default: unlimited)
    /// - `CACHE_CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_key_length: env::var("CACHE_MAX_KEY_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .or(defaults.max_key_length),
            cleanup_interval: env::var("CACHE_CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cleanup_interval),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_key_length: None,
            cleanup_interval: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_key_length, None);
        assert_eq!(config.cleanup_interval, 1);
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the env so parallel tests don't race on it
        env::remove_var("CACHE_MAX_KEY_LENGTH");
        env::remove_var("CACHE_CLEANUP_INTERVAL");
        assert_eq!(Config::from_env(), Config::default());

        env::set_var("CACHE_MAX_KEY_LENGTH", "64");
        env::set_var("CACHE_CLEANUP_INTERVAL", "not-a-number");
        let config = Config::from_env();
        assert_eq!(config.max_key_length, Some(64));
        assert_eq!(config.cleanup_interval, 1);

        env::remove_var("CACHE_MAX_KEY_LENGTH");
        env::remove_var("CACHE_CLEANUP_INTERVAL");
    }
}
