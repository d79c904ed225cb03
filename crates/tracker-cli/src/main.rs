//! `tracker-import`: convert tracking-log exports into SQL INSERT scripts.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use tracker_cli::cli::{Cli, Command};
use tracker_cli::config::ImportConfig;
use tracker_cli::logging::{LogConfig, init_logging};
use tracker_cli::pipeline::run_import;
use tracker_cli::report::write_report;
use tracker_cli::types::ImportResult;

mod summary;

use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli.command) {
        Ok(result) => {
            print_summary(&result);
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(command: &Command) -> Result<ImportResult> {
    let config = ImportConfig::resolve(&command.config_overrides())?;
    let request = command.request();
    let result = run_import(&request, &config)?;
    if let Some(path) = &request.report {
        write_report(path, &result)?;
    }
    Ok(result)
}

/// Logging settings from the global flags. An explicit level (`--log-level`
/// or `-v`/`-q`) disables `RUST_LOG`; `--log-level` beats `-v`/`-q`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let explicit = cli.log_level.is_some() || cli.verbosity.is_present();
    LogConfig {
        level_filter: cli
            .log_level
            .map_or_else(|| cli.verbosity.tracing_level_filter(), LevelFilter::from),
        use_env_filter: !explicit,
        format: cli.log_format.into(),
        log_file: cli.log_file.clone(),
        log_data: cli.log_data,
        with_ansi: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
        },
        ..LogConfig::default()
    }
}
