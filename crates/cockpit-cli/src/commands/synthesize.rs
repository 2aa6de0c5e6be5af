//! Synthesize command implementation.

use super::read_input;
use crate::cli::{parse_source_input, SynthesizeArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use cockpit_workflow::{Session, Workflow};
use tracing::debug;

/// Execute the synthesize command.
pub fn execute_synthesize(args: SynthesizeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let workflow = Workflow::new(config.workflow_config())?;

    let mut session = Session::new();
    if let Some(path) = &args.problem {
        session.set_problem(read_input(path)?)?;
    }
    for input in &args.solutions {
        let (source, path) = parse_source_input(input).ok_or_else(|| {
            CliError::InvalidInput(format!("Expected SOURCE=FILE, got '{}'", input))
        })?;
        debug!("Reading {} solution from {}", source, path);
        session.set_ai_solution(source, read_input(path)?);
    }

    let synthesis = workflow.synthesize_locally(&mut session)?;
    println!("{}", formatter.format_synthesis(&synthesis)?);

    Ok(())
}
