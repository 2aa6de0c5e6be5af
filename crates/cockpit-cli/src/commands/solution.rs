//! Solution command implementation.

use super::read_input;
use crate::cli::SolutionArgs;
use crate::error::Result;
use crate::output::Formatter;
use cockpit_extractor::extract_solution;

/// Execute the solution command.
pub fn execute_solution(args: SolutionArgs, formatter: &Formatter) -> Result<()> {
    let text = read_input(&args.input)?;
    println!("{}", formatter.format_solution(&extract_solution(&text))?);
    Ok(())
}
