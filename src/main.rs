//! classforge - Character Archetype Model
//!
//! Runs the built-in showcase (or a scenario file) and prints the narration.

use std::process::ExitCode;

use classforge::cli;
use classforge::error::ConfigError;
use classforge::scenario::{self, ScenarioConfig};
use classforge::Grimoire;

fn main() -> ExitCode {
    // Diagnostics go to stderr so they never mix with the narration
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = cli::parse_args();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Args) -> Result<(), ConfigError> {
    let grimoire = match &args.spells {
        Some(path) => Grimoire::load_from_file(path)?,
        None => Grimoire::default(),
    };

    let config = match &args.scenario {
        Some(path) => ScenarioConfig::load_from_file(path)?,
        None => ScenarioConfig::showcase(),
    };

    let result = scenario::Scenario::new(config, &grimoire)?
        .with_echo(!args.quiet)
        .run();

    if let Some(path) = &args.output {
        result.save_to_file(path)?;
        if !args.quiet {
            println!();
            println!("Log saved to: {}", path.display());
        }
    }

    Ok(())
}
