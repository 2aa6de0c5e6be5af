//! Dedup command implementation.

use super::read_input;
use crate::cli::{parse_source_input, DedupArgs};
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use cockpit_workflow::{AnalysisOutcome, Session, Workflow};
use tracing::debug;

/// Execute the dedup command.
pub fn execute_dedup(args: DedupArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let mut config = config.clone();
    if let Some(threshold) = args.threshold {
        config.dedup.threshold = threshold;
    }
    let workflow = Workflow::new(config.workflow_config())?;

    let mut session = Session::new();
    for input in &args.inputs {
        let (source, path) = parse_source_input(input).ok_or_else(|| {
            CliError::InvalidInput(format!("Expected SOURCE=FILE, got '{}'", input))
        })?;
        debug!("Reading {} from {}", source, path);
        session.set_ai_questions(source, read_input(path)?);
    }

    let questions = if args.local {
        workflow.exact_match_questions(&session)
    } else {
        match workflow.analyze_questions_locally(&mut session)? {
            AnalysisOutcome::Questions { .. } => session.questions,
            AnalysisOutcome::NoQuestions => Vec::new(),
        }
    };

    if questions.is_empty() && formatter.format() != OutputFormat::Table {
        eprintln!("{}", formatter.warning("No questions found."));
    }
    println!("{}", formatter.format_merged(&questions)?);

    Ok(())
}
