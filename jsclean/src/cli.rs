//! This file defines the command-line interface (CLI) for the jsclean application.

use clap::Parser;
use std::path::PathBuf;

/// Input file used when none is given on the command line.
pub const DEFAULT_INPUT: &str = "app.js";
/// Output file used when none is given on the command line.
pub const DEFAULT_OUTPUT: &str = "app_cleaned.js";

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "jsclean",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Strip console.log calls from a JavaScript file",
    long_about = "jsclean removes standalone console.log statements from a JavaScript source file. Lines that also contain fetch(, .then( or return keep their code; only the console.log(...); call is cut out of them. Run without arguments to clean app.js into app_cleaned.js.",
)]
pub struct Cli {
    /// File to clean.
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT, help = "JavaScript file to clean.")]
    pub input: PathBuf,

    /// Where to write the cleaned file (created or overwritten).
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT, help = "Where to write the cleaned file (created or overwritten).")]
    pub output: PathBuf,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all log messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a YAML file overriding the marker, indicators or strip pattern.
    #[arg(long = "config", value_name = "FILE", help = "Path to a YAML filter configuration file.")]
    pub config: Option<PathBuf>,

    /// Show a unified diff of the changes on stderr.
    #[arg(long, short = 'D', help = "Show a unified diff of the changes on stderr.")]
    pub diff: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_default_paths() {
        let cli = Cli::try_parse_from(["jsclean"]).unwrap();
        assert_eq!(cli.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT));
        assert!(!cli.diff);
    }

    #[test]
    fn positional_paths_and_flags() {
        let cli = Cli::try_parse_from(["jsclean", "src/main.js", "dist/main.js", "-D", "-d"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("src/main.js"));
        assert_eq!(cli.output, PathBuf::from("dist/main.js"));
        assert!(cli.diff);
        assert!(cli.debug);
    }

    #[test]
    fn theme_flag_is_not_accepted() {
        assert!(Cli::try_parse_from(["jsclean", "--theme", "colors.yaml"]).is_err());
    }

    #[test]
    fn quiet_and_debug_conflict() {
        assert!(Cli::try_parse_from(["jsclean", "-q", "-d"]).is_err());
    }
}
