//! Combined configuration for the workflow

use crate::error::{Result, WorkflowError};
use cockpit_dedup::DedupConfig;
use cockpit_extractor::ExtractorConfig;
use serde::{Deserialize, Serialize};

/// Settings for every stage of the workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Extraction settings
    pub extractor: ExtractorConfig,

    /// Deduplication settings
    pub dedup: DedupConfig,

    /// Question limit stated in the clarifying-questions prompt
    pub max_questions: usize,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            extractor: ExtractorConfig::default(),
            dedup: DedupConfig::default(),
            max_questions: 10,
        }
    }
}

impl WorkflowConfig {
    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.extractor.validate()?;
        self.dedup.validate()?;
        if self.max_questions == 0 {
            return Err(WorkflowError::Config(
                "max_questions must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| WorkflowError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(WorkflowConfig::default().validate().is_ok());
    }

    #[test]
    fn test_sections_from_toml() {
        let config = WorkflowConfig::from_toml(
            r#"
            max_questions = 6

            [dedup]
            threshold = 0.7

            [extractor]
            min_fallback_length = 12
            "#,
        )
        .unwrap();
        assert_eq!(config.max_questions, 6);
        assert_eq!(config.dedup.threshold, 0.7);
        assert_eq!(config.extractor.min_fallback_length, 12);
        assert_eq!(config.extractor.block_tag, "QUESTIONS");
    }

    #[test]
    fn test_invalid_sections_rejected() {
        assert!(WorkflowConfig::from_toml("[dedup]\nthreshold = 1.2").is_err());
        assert!(WorkflowConfig::from_toml("max_questions = 0").is_err());
    }
}
