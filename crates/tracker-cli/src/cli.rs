//! CLI argument definitions for `tracker-import`.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use tracker_model::SourceKind;

use tracing::level_filters::LevelFilter;

use crate::config::ConfigOverrides;
use crate::logging::LogFormat;
use crate::pipeline::ImportRequest;

#[derive(Parser)]
#[command(
    name = "tracker-import",
    version,
    about = "Convert tracking-log exports into SQL INSERT scripts",
    long_about = "Convert personal tracking-log exports (Jotform, Tally, OneNote) into\n\
                  batched INSERT statements for the TrackingLog table.\n\n\
                  Records that cannot be converted are skipped and reported; the run\n\
                  still succeeds."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include notes and raw lines in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Tab-delimited Jotform extract (PostgreSQL).
    #[command(name = "jotform-legacy")]
    JotformLegacy(FileArgs),

    /// Jotform CSV download (SQL Server, generated keys).
    Jotform(FileArgs),

    /// Tally CSV download (SQL Server, one statement per file).
    Tally(ImportArgs),

    /// OneNote free-text export (PostgreSQL).
    #[command(name = "onenote")]
    OneNote(FileArgs),

    /// Saved OneNote page titled with its date (PostgreSQL, generated keys).
    #[command(name = "onenote-page")]
    OneNotePage(PageArgs),
}

impl Command {
    pub fn source(&self) -> SourceKind {
        match self {
            Command::JotformLegacy(_) => SourceKind::JotformLegacy,
            Command::Jotform(_) => SourceKind::Jotform,
            Command::Tally(_) => SourceKind::Tally,
            Command::OneNote(_) => SourceKind::OneNote,
            Command::OneNotePage(_) => SourceKind::OneNotePage,
        }
    }

    fn import_args(&self) -> &ImportArgs {
        match self {
            Command::JotformLegacy(args) | Command::Jotform(args) | Command::OneNote(args) => {
                &args.import
            }
            Command::Tally(args) => args,
            Command::OneNotePage(args) => &args.file.import,
        }
    }

    fn output(&self) -> Option<PathBuf> {
        match self {
            Command::JotformLegacy(args) | Command::Jotform(args) | Command::OneNote(args) => {
                args.output.clone()
            }
            Command::Tally(_) => None,
            Command::OneNotePage(args) => args.file.output.clone(),
        }
    }

    /// What to import and where to write it.
    pub fn request(&self) -> ImportRequest {
        let args = self.import_args();
        ImportRequest {
            source: self.source(),
            input: args.input.clone(),
            output: self.output(),
            page_date: match self {
                Command::OneNotePage(args) => args.page_date,
                _ => None,
            },
            dry_run: args.dry_run,
            report: args.report.clone(),
        }
    }

    /// Flag values that take part in configuration resolution.
    pub fn config_overrides(&self) -> ConfigOverrides {
        let args = self.import_args();
        ConfigOverrides {
            user_id: args.user_id.clone(),
            config: args.config.clone(),
            batch_size: args.batch_size,
            output_dir: args.output_dir.clone(),
        }
    }
}

/// Options shared by every source.
#[derive(Args, Debug, Clone)]
pub struct ImportArgs {
    /// Export file to convert.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Owner of the imported rows (UUID).
    #[arg(long = "user-id", value_name = "UUID")]
    pub user_id: Option<String>,

    /// TOML file providing user_id, batch_size and output_dir.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Maximum rows per INSERT statement (default: 1000).
    #[arg(long = "batch-size", value_name = "N")]
    pub batch_size: Option<usize>,

    /// Directory for generated files (default: the input's directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Convert and report without writing SQL files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write a JSON import report to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

/// Options for sources written to a single file.
#[derive(Args, Debug, Clone)]
pub struct FileArgs {
    #[command(flatten)]
    pub import: ImportArgs,

    /// SQL file to write (overrides the default name and --output-dir).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    #[command(flatten)]
    pub file: FileArgs,

    /// Date of the page (default: taken from the input file name).
    #[arg(long = "page-date", value_name = "YYYY-MM-DD")]
    pub page_date: Option<NaiveDate>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
