//! Line-oriented plain extraction
//!
//! Each non-blank line is matched against a fixed list of shapes; the first
//! shape that fits yields the question text. Results are bare strings with
//! no priority or tag.

use crate::config::ExtractorConfig;
use crate::patterns::{
    RE_LINE_BOLD_LABEL, RE_LINE_BULLET_PRIORITY, RE_LINE_BULLET_QUESTION,
    RE_LINE_NUMBERED_PRIORITY, RE_LINE_NUMBERED_QUESTION, RE_LINE_NUMBERED_TAGGED,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A line shape recognised by plain extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineShape {
    /// `1. (P1) (TAG:x) text`
    NumberedTagged,
    /// `1. (P1) text`
    NumberedPriority,
    /// `- (P1) text`
    BulletPriority,
    /// `1. text?`
    NumberedQuestion,
    /// `- text?`
    BulletQuestion,
    /// `**Label:** text?` or `**text?**`
    BoldLabel,
    /// `Capitalised sentence of some length?`
    BareSentence,
}

impl LineShape {
    /// All shapes, in the order they are tried
    pub const ALL: [LineShape; 7] = [
        LineShape::NumberedTagged,
        LineShape::NumberedPriority,
        LineShape::BulletPriority,
        LineShape::NumberedQuestion,
        LineShape::BulletQuestion,
        LineShape::BoldLabel,
        LineShape::BareSentence,
    ];

    fn capture(&self, line: &str, config: &ExtractorConfig) -> Option<String> {
        match self {
            LineShape::NumberedTagged => first_group(&RE_LINE_NUMBERED_TAGGED, line),
            LineShape::NumberedPriority => first_group(&RE_LINE_NUMBERED_PRIORITY, line),
            LineShape::BulletPriority => first_group(&RE_LINE_BULLET_PRIORITY, line),
            LineShape::NumberedQuestion => first_group(&RE_LINE_NUMBERED_QUESTION, line),
            LineShape::BulletQuestion => first_group(&RE_LINE_BULLET_QUESTION, line),
            LineShape::BoldLabel => bold_label(line),
            LineShape::BareSentence => bare_sentence(line, config.min_bare_question_length),
        }
    }
}

/// Classify a single line, returning its shape and question text
pub fn classify_line(line: &str, config: &ExtractorConfig) -> Option<(LineShape, String)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    LineShape::ALL
        .iter()
        .find_map(|shape| shape.capture(line, config).map(|text| (*shape, text)))
}

/// Extract one question per matching line, in document order
pub(crate) fn extract_lines(text: &str, config: &ExtractorConfig) -> Vec<String> {
    text.lines()
        .filter_map(|line| classify_line(line, config).map(|(_, text)| text))
        .collect()
}

fn first_group(pattern: &LazyLock<Option<Regex>>, line: &str) -> Option<String> {
    let re = pattern.as_ref()?;
    let caps = re.captures(line)?;
    non_empty(tidy(caps.get(1)?.as_str()))
}

fn bold_label(line: &str) -> Option<String> {
    let re = RE_LINE_BOLD_LABEL.as_ref()?;
    let caps = re.captures(line)?;
    let label = caps.get(1)?.as_str().trim().trim_end_matches(':').trim();
    let rest = tidy(caps.get(2).map_or("", |m| m.as_str()));

    if rest.ends_with('?') {
        non_empty(rest)
    } else if rest.is_empty() && label.ends_with('?') {
        non_empty(label.to_string())
    } else {
        None
    }
}

fn bare_sentence(line: &str, min_length: usize) -> Option<String> {
    let starts_upper = line.chars().next().is_some_and(char::is_uppercase);
    if starts_upper && line.ends_with('?') && line.chars().count() >= min_length {
        Some(line.to_string())
    } else {
        None
    }
}

/// Trim whitespace and stray bold markers
fn tidy(text: &str) -> String {
    text.trim().trim_matches('*').trim().to_string()
}

fn non_empty(text: String) -> Option<String> {
    (!text.is_empty()).then_some(text)
}
