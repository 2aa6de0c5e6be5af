//! Extract command implementation.

use super::read_input;
use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use cockpit_workflow::Workflow;

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let text = read_input(&args.input)?;
    let workflow = Workflow::new(config.workflow_config())?;
    let extractor = workflow.extractor();

    let output = if args.plain {
        formatter.format_plain(&extractor.extract_plain(&text))?
    } else {
        formatter.format_extraction(&extractor.extract_detailed(&text, &args.source))?
    };
    println!("{}", output);

    Ok(())
}
