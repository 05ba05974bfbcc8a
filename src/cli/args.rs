//! CLI argument definitions for `ncnstats`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use logger::Level;
use ncn_stats::config::ConfigOverrides;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

/// Language of notices and reports
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LocaleArg {
    /// English
    En,
    /// Arabic
    Ar,
}

impl std::fmt::Display for LocaleArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::En => f.write_str("en"),
            Self::Ar => f.write_str("ar"),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `institution`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Show the dashboard summary and the per-year statistics table.
    Stats {
        /// Show the details of one academic year instead (by record id)
        #[arg(long, value_name = "ID")]
        year: Option<String>,

        /// Also write the computed statistics to a CSV file
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,

        /// Print the computed statistics as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Validate and import a JSON snapshot of academic year records.
    Import {
        /// Path to the JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Remember the file as the startup dataset (`paths.data_file`)
        #[arg(long)]
        save: bool,
    },
    /// Export the current dataset as pretty-printed JSON.
    Export {
        /// Output file path (defaults to `<exports_dir>/ncn_stats_<date>.json`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Generate a print-ready report.
    ///
    /// Without `--year` or `--all`, renders the overview report.
    Report {
        /// Render the report for one academic year (by record id)
        #[arg(long, value_name = "ID", conflicts_with = "all")]
        year: Option<String>,

        /// Render the overview plus one report per academic year
        #[arg(long)]
        all: bool,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,

        /// Output file path (ignored with `--all`; defaults to `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "ncnstats",
    about = "Academic statistics for the Northern College of Nursing",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Import this JSON snapshot at startup instead of the built-in dataset
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Language of notices and reports
    #[arg(long, value_enum)]
    pub locale: Option<LocaleArg>,

    /// Institution name printed on reports
    #[arg(long, value_name = "NAME")]
    pub institution: Option<String>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config exports directory
    #[arg(long = "config-exports-dir", value_name = "DIR")]
    pub config_exports_dir: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Write exports and reports to this directory (short form for both)
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `--out-dir` takes precedence over `--config-exports-dir` and
    /// `--config-reports-dir` when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let path = |p: &PathBuf| p.to_string_lossy().to_string();
        let out_dir = self.out_dir.as_ref().map(path);
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.config_log_file.as_ref().map(path),
            verbose: self.config_verbose,
            data_file: self.data.as_ref().map(path),
            exports_dir: out_dir
                .clone()
                .or_else(|| self.config_exports_dir.as_ref().map(path)),
            reports_dir: out_dir.or_else(|| self.config_reports_dir.as_ref().map(path)),
            institution: self.institution.clone(),
            locale: self.locale.map(|l| l.to_string()),
        }
    }
}
