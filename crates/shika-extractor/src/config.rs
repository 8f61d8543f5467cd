//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Label that replaces the bare generic train noun
pub const ORDINARY_TRAIN_LABEL: &str = "普通列車";

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Optional cap on bulletin text length (characters); unlimited when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_text_length: Option<usize>,

    /// Display label used when a bulletin only says "train"
    pub canonical_train_label: String,

    /// Emit a debug log line for every dropped segment
    pub log_skipped_segments: bool,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_text_length == Some(0) {
            return Err("max_text_length must be greater than 0".to_string());
        }
        if self.canonical_train_label.trim().is_empty() {
            return Err("canonical_train_label must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_text_length: None,
            canonical_train_label: ORDINARY_TRAIN_LABEL.to_string(),
            log_skipped_segments: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.canonical_train_label, "普通列車");
        assert_eq!(config.max_text_length, None);
    }

    #[test]
    fn test_invalid_max_text_length() {
        let mut config = ExtractorConfig::default();
        config.max_text_length = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_train_label_rejected() {
        let mut config = ExtractorConfig::default();
        config.canonical_train_label = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ExtractorConfig::from_toml("max_text_length = 500").unwrap();
        assert_eq!(config.max_text_length, Some(500));
        assert_eq!(config.canonical_train_label, ORDINARY_TRAIN_LABEL);
        assert!(config.log_skipped_segments);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = ExtractorConfig::default();
        config.log_skipped_segments = false;
        config.max_text_length = Some(4_000);
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_unlimited_length_round_trip() {
        let toml_str = ExtractorConfig::default().to_toml().unwrap();
        assert!(!toml_str.contains("max_text_length"));
        assert_eq!(ExtractorConfig::from_toml(&toml_str).unwrap(), ExtractorConfig::default());
    }

    #[test]
    fn test_malformed_toml() {
        assert!(ExtractorConfig::from_toml("max_text_length = \"lots\"").is_err());
    }
}
