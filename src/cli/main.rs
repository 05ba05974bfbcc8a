//! Command-line interface entry point for `ncnstats`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use commands::report::Selection;
use logger::{enable_debug, enable_verbose, info, init_file_logging, set_level, Level};
use ncn_stats::config::Config;
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| PathBuf::from(&config.logging.file));
    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        start_file_logging(log_path, verbose);
    }

    if let Err(message) = dispatch(args.command, &mut config, &defaults) {
        eprintln!("{message}");
        std::process::exit(1);
    }
}

fn start_file_logging(log_path: &std::path::Path, verbose: bool) {
    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let display_path = log_path.display();
    match init_file_logging(log_path) {
        Ok(()) if verbose => eprintln!("✓ File logging initialized at: {display_path}"),
        Ok(()) => info!("File logging initialized at: {display_path}"),
        Err(e) => eprintln!("✗ Failed to initialize file logging at {display_path}: {e}"),
    }
}

fn dispatch(command: Command, config: &mut Config, defaults: &Config) -> Result<(), String> {
    match command {
        Command::Config { subcommand } => commands::config::run(subcommand, config, defaults),
        Command::Stats { year, csv, json } => {
            let store = commands::open_store(config)?;
            commands::stats::run(
                store.dataset(),
                year.as_deref(),
                csv.as_deref(),
                json,
                config,
            )
        }
        Command::Import { file, save } => {
            // The import replaces whatever was loaded at startup, so skip it
            let mut store = ncn_stats::core::DatasetStore::new();
            commands::import::run(&mut store, &file, save, config)
        }
        Command::Export { output } => {
            let store = commands::open_store(config)?;
            commands::export::run(&store, output.as_deref(), config)
        }
        Command::Report {
            year,
            all,
            format,
            output,
        } => {
            let store = commands::open_store(config)?;
            let selection = match (year.as_deref(), all) {
                (Some(id), _) => Selection::Year(id),
                (None, true) => Selection::All,
                (None, false) => Selection::Overview,
            };
            commands::report::run(
                store.dataset(),
                selection,
                &format,
                output.as_deref(),
                config,
            )
        }
    }
}
