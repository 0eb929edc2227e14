//! Messaging configuration module
//!
//! Tunables of the messaging core. Built through [`MessagingConfigBuilder`]
//! and checked with [`MessagingConfig::validate`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of messages returned by a history read
pub const DEFAULT_HISTORY_LIMIT: u32 = 50;

/// Upper bound applied to requested history limits
pub const MAX_HISTORY_LIMIT: u32 = 200;

/// Maximum message body length, in characters
pub const MAX_BODY_LEN: usize = 4000;

/// Extra attempts made when linking a stored message to its conversation fails
pub const APPEND_RETRIES: u32 = 2;

/// Messaging core configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagingConfig {
    /// Limit used when a history request does not specify one
    pub history_default_limit: u32,
    /// Requested limits above this are clamped
    pub history_max_limit: u32,
    /// Maximum body length in characters
    pub max_body_len: usize,
    /// Retries for the conversation append step of a send
    pub append_retries: u32,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            history_default_limit: DEFAULT_HISTORY_LIMIT,
            history_max_limit: MAX_HISTORY_LIMIT,
            max_body_len: MAX_BODY_LEN,
            append_retries: APPEND_RETRIES,
        }
    }
}

impl MessagingConfig {
    /// Create a new MessagingConfigBuilder
    pub fn builder() -> MessagingConfigBuilder {
        MessagingConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "history_default_limit",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.history_max_limit < self.history_default_limit {
            return Err(ConfigError::InvalidValue {
                field: "history_max_limit",
                reason: format!(
                    "must not be below history_default_limit ({})",
                    self.history_default_limit
                ),
            });
        }
        if self.max_body_len == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_body_len",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Resolve a requested history limit against the configured bounds
    ///
    /// `None` yields the default; values above the maximum are clamped.
    /// A zero limit is passed through unchanged so the caller can reject it.
    pub fn effective_history_limit(&self, requested: Option<u32>) -> u32 {
        match requested {
            None => self.history_default_limit,
            Some(limit) => limit.min(self.history_max_limit),
        }
    }
}

/// Builder for MessagingConfig
#[derive(Debug, Default)]
pub struct MessagingConfigBuilder {
    history_default_limit: Option<u32>,
    history_max_limit: Option<u32>,
    max_body_len: Option<usize>,
    append_retries: Option<u32>,
}

impl MessagingConfigBuilder {
    /// Set the default history limit
    pub fn history_default_limit(mut self, limit: u32) -> Self {
        self.history_default_limit = Some(limit);
        self
    }

    /// Set the maximum history limit
    pub fn history_max_limit(mut self, limit: u32) -> Self {
        self.history_max_limit = Some(limit);
        self
    }

    /// Set the maximum body length
    pub fn max_body_len(mut self, len: usize) -> Self {
        self.max_body_len = Some(len);
        self
    }

    /// Set the number of append retries
    pub fn append_retries(mut self, retries: u32) -> Self {
        self.append_retries = Some(retries);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<MessagingConfig, ConfigError> {
        let defaults = MessagingConfig::default();
        let config = MessagingConfig {
            history_default_limit: self
                .history_default_limit
                .unwrap_or(defaults.history_default_limit),
            history_max_limit: self.history_max_limit.unwrap_or(defaults.history_max_limit),
            max_body_len: self.max_body_len.unwrap_or(defaults.max_body_len),
            append_retries: self.append_retries.unwrap_or(defaults.append_retries),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = MessagingConfig::builder().build().unwrap();
        assert_eq!(config, MessagingConfig::default());
        assert_eq!(config.history_default_limit, 50);
    }

    #[test]
    fn test_builder_rejects_max_below_default() {
        let result = MessagingConfig::builder()
            .history_default_limit(100)
            .history_max_limit(10)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { field: "history_max_limit", .. })
        ));
    }

    #[test]
    fn test_builder_rejects_zero_body_len() {
        let result = MessagingConfig::builder().max_body_len(0).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_effective_history_limit() {
        let config = MessagingConfig::builder()
            .history_default_limit(20)
            .history_max_limit(100)
            .build()
            .unwrap();
        assert_eq!(config.effective_history_limit(None), 20);
        assert_eq!(config.effective_history_limit(Some(5)), 5);
        assert_eq!(config.effective_history_limit(Some(500)), 100);
        assert_eq!(config.effective_history_limit(Some(0)), 0);
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: MessagingConfig = toml::from_str("max_body_len = 280").unwrap();
        assert_eq!(config.max_body_len, 280);
        assert_eq!(config.history_default_limit, DEFAULT_HISTORY_LIMIT);
    }
}
