//! Combining the parsed solution replies into one synthesis

use cockpit_extractor::SolutionReport;
use serde::{Deserialize, Serialize};

/// Characters of each solution kept in a local summary
pub const EXCERPT_CHARS: usize = 500;

/// A parsed solution reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSolution {
    /// Source identifier
    pub source: String,

    /// Parsed sections
    pub report: SolutionReport,
}

/// Who produced a synthesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynthesisOrigin {
    /// External synthesizer
    Remote,
    /// Local summary of the parsed replies
    Local,
}

impl SynthesisOrigin {
    /// Get the origin name
    pub fn as_str(&self) -> &'static str {
        match self {
            SynthesisOrigin::Remote => "remote",
            SynthesisOrigin::Local => "local",
        }
    }
}

impl std::fmt::Display for SynthesisOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The combined result of the solve round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synthesis {
    /// Who produced the summary
    pub origin: SynthesisOrigin,

    /// Summary text
    pub summary: String,

    /// Parsed replies the summary was built from, in insertion order
    pub solutions: Vec<SourceSolution>,
}

impl Synthesis {
    /// Wrap a summary returned by a remote synthesizer
    pub fn remote(summary: impl Into<String>, solutions: Vec<SourceSolution>) -> Self {
        Self {
            origin: SynthesisOrigin::Remote,
            summary: summary.into(),
            solutions,
        }
    }

    /// Build a local summary from the parsed replies
    ///
    /// Each source contributes its status, the first [`EXCERPT_CHARS`]
    /// characters of its solution, its next steps and its risks.
    pub fn local(solutions: Vec<SourceSolution>) -> Self {
        let mut summary = format!("Summary of {} solution(s)\n", solutions.len());

        for solution in &solutions {
            let report = &solution.report;
            summary.push_str(&format!("\n== {} ({}) ==\n", solution.source, report.status));
            summary.push_str(&excerpt(&report.solution, EXCERPT_CHARS));
            summary.push('\n');

            if !report.next_steps.is_empty() {
                summary.push_str("Next steps:\n");
                for (i, step) in report.next_steps.iter().enumerate() {
                    summary.push_str(&format!("{}. {}\n", i + 1, step));
                }
            }
            if !report.risks.is_empty() {
                summary.push_str("Risks:\n");
                for risk in &report.risks {
                    summary.push_str(&format!("- {}\n", risk));
                }
            }
        }

        summary.push_str("\nNote: local summary. Connect a remote synthesizer for a combined answer.\n");

        Self {
            origin: SynthesisOrigin::Local,
            summary,
            solutions,
        }
    }
}

/// First `max` characters of `text`, with `...` appended when cut
fn excerpt(text: &str, max: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", text[..cut].trim_end()),
        None => text.to_string(),
    }
}
