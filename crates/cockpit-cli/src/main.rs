//! Cockpit CLI - pool and merge clarifying questions from several AI assistants.

use cockpit_cli::commands;
use cockpit_cli::{Cli, Command, Config, Formatter, OutputFormat};
use clap::Parser;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only command output
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let color_enabled = !cli.no_color;
    if let Err(e) = run(cli) {
        let formatter = Formatter::new(OutputFormat::Table, color_enabled);
        eprintln!("{}", formatter.error(&e.to_string()));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> cockpit_cli::Result<()> {
    let config_path = match &cli.config {
        Some(path) => PathBuf::from(path),
        None => Config::path()?,
    };

    // An explicit --config must load; the default location falls back to defaults
    let config = if cli.config.is_some() {
        Config::load_from(&config_path)?
    } else {
        Config::load_from(&config_path).unwrap_or_else(|e| {
            warn!("Ignoring unreadable config at {}: {}", config_path.display(), e);
            Config::default()
        })
    };

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Extract(args) => commands::execute_extract(args, &config, &formatter)?,
        Command::Dedup(args) => commands::execute_dedup(args, &config, &formatter)?,
        Command::Prompt(args) => commands::execute_prompt(args, &config, &formatter)?,
        Command::Solution(args) => commands::execute_solution(args, &formatter)?,
        Command::Synthesize(args) => commands::execute_synthesize(args, &config, &formatter)?,
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter)?
        }
    }

    Ok(())
}
