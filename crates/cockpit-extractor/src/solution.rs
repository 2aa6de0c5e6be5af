//! Parse solve-phase replies into their sections

use crate::patterns::{
    block_interior, RE_NEXT_STEPS_BLOCK, RE_READINESS, RE_RISKS_BLOCK, RE_RISK_LINE,
    RE_SOLUTION_BLOCK, RE_STATUS_BLOCK, RE_STEP_LINE,
};
use crate::types::{Readiness, SolutionReport};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Split an assistant's solution reply into status, body, next steps and risks
///
/// Missing sections produce empty values; when there is no `[SOLUTION]`
/// block the whole reply is taken as the solution.
pub fn extract_solution(text: &str) -> SolutionReport {
    let status = block_interior(&RE_STATUS_BLOCK, text)
        .and_then(|status| block_interior(&RE_READINESS, status))
        .map(Readiness::parse)
        .unwrap_or_default();

    let solution = block_interior(&RE_SOLUTION_BLOCK, text)
        .unwrap_or(text)
        .trim()
        .to_string();

    let next_steps = block_interior(&RE_NEXT_STEPS_BLOCK, text)
        .map(|block| list_items(&RE_STEP_LINE, block))
        .unwrap_or_default();

    let risks = block_interior(&RE_RISKS_BLOCK, text)
        .map(|block| list_items(&RE_RISK_LINE, block))
        .unwrap_or_default();

    debug!(
        "Parsed solution: status {}, {} next steps, {} risks",
        status,
        next_steps.len(),
        risks.len()
    );

    SolutionReport {
        status,
        solution,
        next_steps,
        risks,
    }
}

fn list_items(pattern: &LazyLock<Option<Regex>>, block: &str) -> Vec<String> {
    let Some(re) = pattern.as_ref() else {
        return Vec::new();
    };
    re.captures_iter(block)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
