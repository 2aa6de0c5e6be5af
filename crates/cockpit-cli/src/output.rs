//! Output formatting for the CLI.

use crate::config::{Config, OutputFormat};
use crate::error::Result;
use cockpit_domain::{MergedQuestion, Priority};
use cockpit_extractor::{Extraction, Readiness, SolutionReport};
use cockpit_workflow::Synthesis;
use colored::*;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The active output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a structured extraction result.
    pub fn format_extraction(&self, extraction: &Extraction) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(extraction),
            OutputFormat::Quiet => Ok(join_lines(extraction.questions.iter().map(|q| q.text.as_str()))),
            OutputFormat::Table => {
                if extraction.is_empty() {
                    return Ok(self.warning("No questions found."));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "Priority", "Tag", "Question"]);
                for question in &extraction.questions {
                    builder.push_record([
                        question.ordinal.to_string(),
                        self.priority(question.priority),
                        question.tag.clone(),
                        question.text.clone(),
                    ]);
                }

                let strategy = extraction
                    .strategy
                    .map_or_else(|| "none".to_string(), |s| s.to_string());
                let scope = if extraction.used_block { "questions block" } else { "full text" };
                let summary = self.info(&format!(
                    "{} question(s) from {} via {} ({})",
                    extraction.len(),
                    extraction.source,
                    strategy,
                    scope
                ));
                Ok(format!("{}\n{}", render(builder), summary))
            }
        }
    }

    /// Format plain question strings.
    pub fn format_plain(&self, questions: &[String]) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(&questions),
            OutputFormat::Quiet => Ok(questions.join("\n")),
            OutputFormat::Table => {
                if questions.is_empty() {
                    return Ok(self.warning("No questions found."));
                }
                let mut builder = Builder::default();
                builder.push_record(["#", "Question"]);
                for (i, question) in questions.iter().enumerate() {
                    builder.push_record([(i + 1).to_string(), question.clone()]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format merged questions.
    pub fn format_merged(&self, questions: &[MergedQuestion]) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(&questions),
            OutputFormat::Quiet => Ok(join_lines(questions.iter().map(|q| q.text.as_str()))),
            OutputFormat::Table => {
                if questions.is_empty() {
                    return Ok(self.warning("No questions found."));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Priority", "Tag", "Sources", "Question"]);
                for question in questions {
                    builder.push_record([
                        question.id.to_string(),
                        self.priority(question.priority),
                        question.tag.clone(),
                        question.sources.join(", "),
                        question.text.clone(),
                    ]);
                }

                let shared = questions.iter().filter(|q| q.is_shared()).count();
                let summary = self.info(&format!(
                    "{} question(s), {} asked by more than one source",
                    questions.len(),
                    shared
                ));
                Ok(format!("{}\n{}", render(builder), summary))
            }
        }
    }

    /// Format a parsed solution reply.
    pub fn format_solution(&self, report: &SolutionReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(report),
            OutputFormat::Quiet => Ok(report.solution.clone()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Section", "Content"]);
                builder.push_record(["Status".to_string(), self.readiness(report.status)]);
                builder.push_record(["Solution".to_string(), report.solution.clone()]);
                for (i, step) in report.next_steps.iter().enumerate() {
                    builder.push_record([format!("Step {}", i + 1), step.clone()]);
                }
                for risk in &report.risks {
                    builder.push_record(["Risk".to_string(), risk.clone()]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format a synthesis of several solution replies.
    pub fn format_synthesis(&self, synthesis: &Synthesis) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(synthesis),
            OutputFormat::Quiet => Ok(synthesis.summary.trim_end().to_string()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Source", "Status", "Next steps", "Risks"]);
                for solution in &synthesis.solutions {
                    builder.push_record([
                        solution.source.clone(),
                        self.readiness(solution.report.status),
                        solution.report.next_steps.len().to_string(),
                        solution.report.risks.len().to_string(),
                    ]);
                }

                let origin = self.info(&format!(
                    "{} solution(s), {} synthesis",
                    synthesis.solutions.len(),
                    synthesis.origin
                ));
                Ok(format!(
                    "{}\n\n{}\n{}",
                    render(builder),
                    synthesis.summary.trim_end(),
                    origin
                ))
            }
        }
    }

    /// Format a generated prompt.
    pub fn format_prompt(&self, prompt: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(&serde_json::json!({ "prompt": prompt })),
            _ => Ok(prompt.trim_end().to_string()),
        }
    }

    /// Format the effective configuration.
    pub fn format_config(&self, config: &Config) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(config),
            _ => config.to_toml(),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn priority(&self, priority: Priority) -> String {
        let color = match priority {
            Priority::P1 => "red",
            Priority::P2 => "yellow",
            Priority::P3 => "cyan",
        };
        self.colorize(priority.as_str(), color)
    }

    fn readiness(&self, readiness: Readiness) -> String {
        let color = match readiness {
            Readiness::Ready => "green",
            Readiness::NeedsInfo => "yellow",
            Readiness::Unknown => "magenta",
        };
        self.colorize(readiness.as_str(), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn join_lines<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    lines.collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cockpit_domain::{CandidateQuestion, Variant};
    use cockpit_workflow::SourceSolution;

    fn merged() -> MergedQuestion {
        MergedQuestion {
            id: 1,
            text: "What is the total budget?".to_string(),
            priority: Priority::P1,
            tag: "constraints".to_string(),
            sources: vec!["chatgpt".to_string(), "claude".to_string()],
            variants: vec![
                Variant {
                    source: "chatgpt".to_string(),
                    text: "What is the budget?".to_string(),
                },
                Variant {
                    source: "claude".to_string(),
                    text: "What is the total budget?".to_string(),
                },
            ],
            answer: String::new(),
        }
    }

    #[test]
    fn test_merged_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_merged(&[merged()]).unwrap();
        assert!(output.contains("Sources"));
        assert!(output.contains("chatgpt, claude"));
        assert!(output.contains("1 asked by more than one source"));
    }

    #[test]
    fn test_merged_json_round_trips() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_merged(&[merged()]).unwrap();
        let parsed: Vec<MergedQuestion> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, vec![merged()]);
    }

    #[test]
    fn test_quiet_is_texts_only() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_merged(&[merged(), merged()]).unwrap();
        assert_eq!(output, "What is the total budget?\nWhat is the total budget?");
    }

    #[test]
    fn test_empty_extraction() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let extraction = Extraction {
            source: "a".to_string(),
            strategy: None,
            used_block: false,
            questions: Vec::new(),
        };
        let output = formatter.format_extraction(&extraction).unwrap();
        assert!(output.contains("No questions found"));
    }

    #[test]
    fn test_extraction_summary() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let extraction = Extraction {
            source: "gemini".to_string(),
            strategy: Some(cockpit_extractor::Strategy::FullFormat),
            used_block: true,
            questions: vec![CandidateQuestion::new(1, "Who decides?", "gemini")],
        };
        let output = formatter.format_extraction(&extraction).unwrap();
        assert!(output.contains("Who decides?"));
        assert!(output.contains("1 question(s) from gemini via full_format (questions block)"));
    }

    #[test]
    fn test_solution_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let report = SolutionReport {
            status: Readiness::NeedsInfo,
            solution: "Cache the images.".to_string(),
            next_steps: vec!["Add a cache".to_string()],
            risks: vec!["Stale layers".to_string()],
        };
        let output = formatter.format_solution(&report).unwrap();
        assert!(output.contains("NEEDS_INFO"));
        assert!(output.contains("Step 1"));
        assert!(output.contains("Stale layers"));
    }

    #[test]
    fn test_synthesis_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let synthesis = Synthesis::local(vec![SourceSolution {
            source: "claude".to_string(),
            report: SolutionReport {
                status: Readiness::Ready,
                solution: "Cache the images.".to_string(),
                next_steps: vec!["Add a cache".to_string()],
                risks: Vec::new(),
            },
        }]);
        let output = formatter.format_synthesis(&synthesis).unwrap();
        assert!(output.contains("Next steps"));
        assert!(output.contains("== claude (READY) =="));
        assert!(output.contains("1 solution(s), local synthesis"));

        let quiet = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(
            quiet.format_synthesis(&synthesis).unwrap(),
            synthesis.summary.trim_end()
        );
    }

    #[test]
    fn test_prompt_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_prompt("Hello\n").unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["prompt"], "Hello\n");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.priority(Priority::P2), "P2");
    }
}
