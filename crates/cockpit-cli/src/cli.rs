//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Cockpit - pool clarifying questions from several AI assistants.
#[derive(Debug, Parser)]
#[command(name = "cockpit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "COCKPIT_CONFIG")]
    pub config: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (question texts only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract questions from one assistant reply
    Extract(ExtractArgs),

    /// Merge the questions of several assistant replies
    Dedup(DedupArgs),

    /// Generate a prompt to paste into the assistants
    Prompt(PromptArgs),

    /// Split a solution reply into its sections
    Solution(SolutionArgs),

    /// Combine the solution replies of several assistants
    Synthesize(SynthesizeArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Reply file, or '-' for stdin
    pub input: String,

    /// Source identifier recorded on each question
    #[arg(short, long, default_value = "input")]
    pub source: String,

    /// Line-oriented extraction returning bare question texts
    #[arg(long)]
    pub plain: bool,
}

/// Arguments for the dedup command.
#[derive(Debug, Parser)]
pub struct DedupArgs {
    /// Reply per source, as SOURCE=FILE (repeatable, pooled in the given order)
    #[arg(short, long = "input", required = true, value_name = "SOURCE=FILE")]
    pub inputs: Vec<String>,

    /// Similarity threshold (0.0-1.0), overrides the configuration
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Group plain-extracted lines by exact match instead of similarity
    #[arg(long)]
    pub local: bool,
}

/// Arguments for prompt generation.
#[derive(Debug, Parser)]
pub struct PromptArgs {
    #[command(subcommand)]
    pub action: PromptAction,
}

/// Prompt kinds.
#[derive(Debug, Subcommand)]
pub enum PromptAction {
    /// Clarifying-questions prompt for a problem statement
    Questions {
        /// Problem file, or '-' for stdin
        input: String,

        /// Question limit, overrides the configuration
        #[arg(short, long)]
        max_questions: Option<usize>,
    },

    /// Solve prompt from a problem and answered questions
    Solve {
        /// Problem statement file
        #[arg(short, long)]
        problem: String,

        /// JSON file of merged questions with answers (output of `dedup --format json`)
        #[arg(short, long)]
        questions: String,
    },
}

/// Arguments for the solution command.
#[derive(Debug, Parser)]
pub struct SolutionArgs {
    /// Reply file, or '-' for stdin
    pub input: String,
}

/// Arguments for the synthesize command.
#[derive(Debug, Parser)]
pub struct SynthesizeArgs {
    /// Solution reply per source, as SOURCE=FILE (repeatable, kept in the given order)
    #[arg(short, long = "solution", required = true, value_name = "SOURCE=FILE")]
    pub solutions: Vec<String>,

    /// Problem statement file
    #[arg(short, long)]
    pub problem: Option<String>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

/// Split a `SOURCE=FILE` argument.
pub fn parse_source_input(input: &str) -> Option<(&str, &str)> {
    let (source, path) = input.split_once('=')?;
    let (source, path) = (source.trim(), path.trim());
    if source.is_empty() || path.is_empty() {
        return None;
    }
    Some((source, path))
}
