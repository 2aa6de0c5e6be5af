//! Prompt command implementation.

use super::read_input;
use crate::cli::{PromptAction, PromptArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use cockpit_domain::MergedQuestion;
use cockpit_workflow::{Session, Workflow};
use std::fs;

/// Execute the prompt command.
pub fn execute_prompt(args: PromptArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let mut config = config.clone();

    let prompt = match args.action {
        PromptAction::Questions {
            input,
            max_questions,
        } => {
            if let Some(max_questions) = max_questions {
                config.prompt.max_questions = max_questions;
            }
            let workflow = Workflow::new(config.workflow_config())?;
            let mut session = Session::new();
            session.set_problem(read_input(&input)?)?;
            workflow.generate_questions_prompt(&mut session)?
        }
        PromptAction::Solve { problem, questions } => {
            let workflow = Workflow::new(config.workflow_config())?;
            let mut session = Session::new();
            session.set_problem(fs::read_to_string(&problem)?)?;
            session.questions = load_questions(&fs::read_to_string(&questions)?)?;
            workflow.generate_solve_prompt(&mut session)?
        }
    };

    println!("{}", formatter.format_prompt(&prompt)?);
    Ok(())
}

fn load_questions(json: &str) -> Result<Vec<MergedQuestion>> {
    let questions: Vec<MergedQuestion> = serde_json::from_str(json)?;
    if questions.is_empty() {
        return Err(CliError::InvalidInput("Question file is empty".to_string()));
    }
    Ok(questions)
}
