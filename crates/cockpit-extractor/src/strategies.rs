//! The structured extraction cascade
//!
//! Each strategy is a pure function over the question region of a reply.
//! They are tried in [`CASCADE`] order and the first one yielding at least
//! one question wins; the others are not consulted. Strategies run from the
//! most specific shape to the most permissive one.

use crate::config::ExtractorConfig;
use crate::patterns::{
    clean_question, RE_ANY_QUESTION, RE_FULL_FORMAT, RE_PRIORITY_ONLY, RE_SIMPLE_NUMBERED,
};
use cockpit_domain::{CandidateQuestion, Priority};
use regex::Captures;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A step of the extraction cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// `<n>. (P<k>) (TAG:<word>) <text>`
    FullFormat,
    /// `<n>. (P<k>) <text>`
    PriorityOnly,
    /// `<n>. <text ending in '?'>`
    SimpleNumbered,
    /// Any sentence fragment ending in '?'
    LastResort,
}

impl Strategy {
    /// Get the strategy name
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::FullFormat => "full_format",
            Strategy::PriorityOnly => "priority_only",
            Strategy::SimpleNumbered => "simple_numbered",
            Strategy::LastResort => "last_resort",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type StrategyFn = fn(&str, &str, &ExtractorConfig) -> Vec<CandidateQuestion>;

/// Cascade order: first non-empty result wins
pub(crate) const CASCADE: &[(Strategy, StrategyFn)] = &[
    (Strategy::FullFormat, full_format),
    (Strategy::PriorityOnly, priority_only),
    (Strategy::SimpleNumbered, simple_numbered),
    (Strategy::LastResort, last_resort),
];

/// Run the cascade over `content`
pub(crate) fn run_cascade(
    content: &str,
    source: &str,
    config: &ExtractorConfig,
) -> Option<(Strategy, Vec<CandidateQuestion>)> {
    CASCADE.iter().find_map(|(strategy, apply)| {
        let questions = apply(content, source, config);
        (!questions.is_empty()).then_some((*strategy, questions))
    })
}

fn full_format(content: &str, source: &str, _config: &ExtractorConfig) -> Vec<CandidateQuestion> {
    let Some(re) = RE_FULL_FORMAT.as_ref() else {
        return Vec::new();
    };
    re.captures_iter(content)
        .filter_map(|caps| numbered(&caps, source, Some(2), Some(3), 4))
        .collect()
}

fn priority_only(content: &str, source: &str, _config: &ExtractorConfig) -> Vec<CandidateQuestion> {
    let Some(re) = RE_PRIORITY_ONLY.as_ref() else {
        return Vec::new();
    };
    re.captures_iter(content)
        .filter_map(|caps| numbered(&caps, source, Some(2), None, 3))
        .collect()
}

fn simple_numbered(content: &str, source: &str, _config: &ExtractorConfig) -> Vec<CandidateQuestion> {
    let Some(re) = RE_SIMPLE_NUMBERED.as_ref() else {
        return Vec::new();
    };
    re.captures_iter(content)
        .filter_map(|caps| numbered(&caps, source, None, None, 2))
        .collect()
}

fn last_resort(content: &str, source: &str, config: &ExtractorConfig) -> Vec<CandidateQuestion> {
    let Some(re) = RE_ANY_QUESTION.as_ref() else {
        return Vec::new();
    };
    let mut ordinal = 0;
    re.find_iter(content)
        .filter_map(|m| {
            let trimmed = m.as_str().trim();
            if trimmed.chars().count() <= config.min_fallback_length {
                return None;
            }
            let text = clean_question(trimmed);
            if text.is_empty() {
                return None;
            }
            ordinal += 1;
            Some(CandidateQuestion::new(ordinal, text, source).with_raw_match(m.as_str()))
        })
        .collect()
}

/// Build a candidate from a numbered match; group 1 is always the ordinal
fn numbered(
    caps: &Captures<'_>,
    source: &str,
    priority_group: Option<usize>,
    tag_group: Option<usize>,
    text_group: usize,
) -> Option<CandidateQuestion> {
    let ordinal = caps.get(1)?.as_str().parse::<usize>().ok()?;
    let text = clean_question(caps.get(text_group)?.as_str());
    if text.is_empty() {
        return None;
    }

    let mut question = CandidateQuestion::new(ordinal, text, source).with_raw_match(&caps[0]);
    if let Some(group) = priority_group {
        let priority = caps
            .get(group)
            .and_then(|m| m.as_str().parse::<u8>().ok())
            .and_then(Priority::from_rank)?;
        question = question.with_priority(priority);
    }
    if let Some(group) = tag_group {
        question = question.with_tag(caps.get(group)?.as_str());
    }
    Some(question)
}
