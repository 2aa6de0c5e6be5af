//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Name of the delimited block that holds the questions (`[QUESTIONS]...[/QUESTIONS]`)
    pub block_tag: String,

    /// Last-resort matches must be longer than this many characters after trimming
    pub min_fallback_length: usize,

    /// Bare sentences (no marker) need at least this many characters to count
    /// as a question in plain extraction
    pub min_bare_question_length: usize,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.block_tag.is_empty() {
            return Err(ExtractorError::Config("block_tag must not be empty".to_string()));
        }
        if !self
            .block_tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(ExtractorError::Config(format!(
                "block_tag '{}' may only contain ASCII letters, digits and '_'",
                self.block_tag
            )));
        }
        if self.min_bare_question_length == 0 {
            return Err(ExtractorError::Config(
                "min_bare_question_length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Strict preset: only longer free-standing questions survive the fallbacks
    pub fn strict() -> Self {
        Self {
            min_fallback_length: 20,
            min_bare_question_length: 30,
            ..Self::default()
        }
    }

    /// Lenient preset: accept short free-standing questions too
    pub fn lenient() -> Self {
        Self {
            min_fallback_length: 5,
            min_bare_question_length: 12,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            block_tag: "QUESTIONS".to_string(),
            min_fallback_length: 10,
            min_bare_question_length: 20,
        }
    }
}
