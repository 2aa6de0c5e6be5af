//! Deduplicator configuration

use crate::DedupError;
use serde::{Deserialize, Serialize};

/// Default Jaccard threshold at or above which two questions merge
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Configuration for the Deduplicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedupConfig {
    /// Similarity threshold (0.0-1.0); pairs scoring at or above it merge
    pub threshold: f64,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl DedupConfig {
    /// Create a configuration with the given threshold
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Strict preset: only near-identical wording merges
    pub fn strict() -> Self {
        Self { threshold: 0.8 }
    }

    /// Lenient preset: merge on moderate overlap
    pub fn lenient() -> Self {
        Self { threshold: 0.4 }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), DedupError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(DedupError::Config(format!(
                "threshold {} out of range [0.0, 1.0]",
                self.threshold
            )));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, DedupError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, DedupError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
