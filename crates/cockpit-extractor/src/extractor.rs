//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::patterns::block_pattern;
use crate::plain::extract_lines;
use crate::strategies::run_cascade;
use crate::types::Extraction;
use cockpit_domain::CandidateQuestion;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, info};

static DEFAULT_EXTRACTOR: LazyLock<Extractor> = LazyLock::new(Extractor::default);

/// The Extractor turns one assistant reply into candidate questions
///
/// Extraction is pure: it holds no state between calls, never mutates its
/// inputs and never fails. Malformed or empty input yields an empty result.
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractorConfig,
    block: Option<Regex>,
}

impl Extractor {
    /// Create a new Extractor, validating the configuration
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate()?;
        let block = block_pattern(&config.block_tag)?;
        Ok(Self {
            config,
            block: Some(block),
        })
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract candidate questions from `text`, attributing them to `source`
    pub fn extract(&self, text: &str, source: &str) -> Vec<CandidateQuestion> {
        self.extract_detailed(text, source).questions
    }

    /// Extract candidate questions and report how they were found
    pub fn extract_detailed(&self, text: &str, source: &str) -> Extraction {
        let (content, used_block) = self.question_region(text);

        debug!(
            "Extracting from '{}': {} chars{}",
            source,
            content.len(),
            if used_block { " (questions block)" } else { "" }
        );

        let (strategy, questions) = match run_cascade(content, source, &self.config) {
            Some((strategy, questions)) => (Some(strategy), questions),
            None => (None, Vec::new()),
        };

        match strategy {
            Some(strategy) => info!(
                "Extracted {} questions from '{}' via {}",
                questions.len(),
                source,
                strategy
            ),
            None => info!("No extractable questions from '{}'", source),
        }

        Extraction {
            source: source.to_string(),
            strategy,
            used_block,
            questions,
        }
    }

    /// Line-oriented extraction returning plain question strings
    ///
    /// Used for free-form replies fed to remote deduplication or to the
    /// exact-match local fallback.
    pub fn extract_plain(&self, text: &str) -> Vec<String> {
        let lines = extract_lines(text, &self.config);
        debug!("Plain extraction found {} questions", lines.len());
        lines
    }

    /// Interior of the delimited questions block, or the whole text
    fn question_region<'t>(&self, text: &'t str) -> (&'t str, bool) {
        let interior = self
            .block
            .as_ref()
            .and_then(|re| re.captures(text))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str());

        match interior {
            Some(interior) => (interior, true),
            None => (text, false),
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        let config = ExtractorConfig::default();
        let block = block_pattern(&config.block_tag).ok();
        Self { config, block }
    }
}

/// Extract candidate questions with the default configuration
pub fn extract(text: &str, source: &str) -> Vec<CandidateQuestion> {
    DEFAULT_EXTRACTOR.extract(text, source)
}

/// Plain line-oriented extraction with the default configuration
pub fn extract_questions_from_text(text: &str) -> Vec<String> {
    DEFAULT_EXTRACTOR.extract_plain(text)
}
