//! Deduplicator error types

use thiserror::Error;

/// Errors that can occur while configuring deduplication
///
/// Deduplicating well-formed records never fails.
#[derive(Error, Debug)]
pub enum DedupError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}
