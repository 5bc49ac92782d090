//! Server configuration.
//!
//! Configuration is layered: built-in defaults, then an optional JSON file,
//! then command line flags and environment variables.
//!
//! ```json
//! {
//!   "bind": "0.0.0.0:8080",
//!   "max_input_chars": 15000,
//!   "classifier": { "min_detection_chars": 10, "precision": 3 }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classifier::ClassifierConfig;
use crate::error::{Result, SentixError};

/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Default limit on the length of analyzed text, in characters.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 15_000;

/// Configuration for the HTTP server and the classifier behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind: String,
    /// Longest accepted input, in Unicode scalar values.
    pub max_input_chars: usize,
    /// Classifier settings.
    pub classifier: ClassifierConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            classifier: ClassifierConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SentixError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: ServerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can be used.
    pub fn validate(&self) -> Result<()> {
        if self.bind.trim().is_empty() {
            return Err(SentixError::config("bind address must not be empty"));
        }
        if self.max_input_chars == 0 {
            return Err(SentixError::config("max_input_chars must be positive"));
        }
        self.classifier.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();

        assert_eq!(config.bind, "127.0.0.1:5000");
        assert_eq!(config.max_input_chars, 15_000);
        assert_eq!(config.classifier, ClassifierConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ServerConfig =
            serde_json::from_str(r#"{"max_input_chars": 100, "classifier": {"precision": 2}}"#)
                .unwrap();

        assert_eq!(config.bind, DEFAULT_BIND);
        assert_eq!(config.max_input_chars, 100);
        assert_eq!(config.classifier.precision, 2);
        assert_eq!(config.classifier.min_detection_chars, 10);
    }

    #[test]
    fn test_validation() {
        let config = ServerConfig {
            max_input_chars: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SentixError::Config(_))));

        let config = ServerConfig {
            bind: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SentixError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = ServerConfig::from_file("/nonexistent/sentix.json");
        assert!(matches!(result, Err(SentixError::Config(_))));
    }
}
