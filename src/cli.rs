//! Command-line interface for classforge
//!
//! Runs the built-in showcase by default, or a JSON scenario file.

use clap::Parser;
use std::path::PathBuf;

/// Character archetype scenario runner
#[derive(Parser, Debug)]
#[command(name = "classforge")]
#[command(about = "Run scripted warrior and mage scenarios")]
#[command(version)]
pub struct Args {
    /// Run the scenario in the specified JSON file instead of the showcase
    #[arg(long, value_name = "SCENARIO_FILE")]
    pub scenario: Option<PathBuf>,

    /// Load spell costs and effects from a RON file
    #[arg(long, value_name = "SPELLS_FILE")]
    pub spells: Option<PathBuf>,

    /// Save the combat log and final roster as JSON
    #[arg(long, value_name = "OUTPUT_PATH")]
    pub output: Option<PathBuf>,

    /// Don't print narration to stdout
    #[arg(long, short)]
    pub quiet: bool,
}

pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["classforge"]).unwrap();
        assert!(args.scenario.is_none());
        assert!(args.spells.is_none());
        assert!(args.output.is_none());
        assert!(!args.quiet);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "classforge",
            "--scenario",
            "duel.json",
            "--spells",
            "spells.ron",
            "--output",
            "log.json",
            "-q",
        ])
        .unwrap();
        assert_eq!(args.scenario, Some(PathBuf::from("duel.json")));
        assert_eq!(args.spells, Some(PathBuf::from("spells.ron")));
        assert_eq!(args.output, Some(PathBuf::from("log.json")));
        assert!(args.quiet);
    }
}
