//! jsclean entry point.
//!
//! Builds the filter from the embedded defaults plus any `--config`
//! overrides, then cleans INPUT into OUTPUT and prints the summary.

use anyhow::Result;
use clap::Parser;
use log::{info, LevelFilter};

use jsclean::cli::Cli;
use jsclean::commands::clean::{run_clean, CleanOptions};
use jsclean::logger;
use jsclean_core::{merge_config, FilterConfig, MarkerEngine};

fn main() -> Result<()> {
    let args = Cli::parse();

    let level = if args.quiet {
        Some(LevelFilter::Off)
    } else if args.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);
    info!("jsclean started. Version: {}", env!("CARGO_PKG_VERSION"));

    // 1. Embedded defaults, 2. optional user overrides.
    let overrides = args
        .config
        .as_ref()
        .map(FilterConfig::load_from_file)
        .transpose()?;
    let config = merge_config(FilterConfig::load_default()?, overrides)?;

    let engine = MarkerEngine::new(config)?;

    let opts = CleanOptions {
        input_path: args.input,
        output_path: args.output,
        diff: args.diff,
    };
    run_clean(&engine, &opts)?;

    Ok(())
}
