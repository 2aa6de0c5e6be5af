//! Error types for the Extractor
//!
//! Extraction itself never fails; these cover configuration only.

use thiserror::Error;

/// Errors that can occur while setting up an extractor
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// A pattern built from configuration did not compile
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}
