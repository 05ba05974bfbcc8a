//! Config command handler

use crate::args::ConfigSubcommand;
use ncn_stats::config::Config;
use std::io::{self, BufRead, Write};

/// Dispatch config subcommands
///
/// # Errors
/// Returns a message when a key is unknown, a value does not parse, or the
/// config file cannot be written.
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), String> {
    match subcommand {
        None => {
            show(config, None);
            Ok(())
        }
        Some(ConfigSubcommand::Get { key }) => get(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset(&mut io::stdin().lock()),
    }
}

fn show(config: &Config, key: Option<&str>) {
    if let Some(k) = key {
        if let Some(value) = config.get(k) {
            println!("{value}");
        }
    } else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
        println!("\nFile: {}", Config::get_config_file_path().display());
    }
}

fn get(config: &Config, key: Option<&str>) -> Result<(), String> {
    if let Some(k) = key {
        if config.get(k).is_none() {
            return Err(format!("✗ Unknown config key: '{k}'"));
        }
    }
    show(config, key);
    Ok(())
}

fn set(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    config.set(key, value).map_err(|e| format!("✗ {e}"))?;
    config
        .save()
        .map_err(|e| format!("✗ Failed to save config: {e}"))?;
    println!("✓ Set {key} = {}", config.get(key).unwrap_or_default());
    Ok(())
}

fn unset(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults).map_err(|e| format!("✗ {e}"))?;
    config
        .save()
        .map_err(|e| format!("✗ Failed to save config: {e}"))?;
    println!("✓ Reset {key} to default");
    Ok(())
}

fn reset(input: &mut impl BufRead) -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    input.read_line(&mut response).ok();

    if is_confirmation(&response) {
        Config::reset().map_err(|e| format!("✗ Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}

fn is_confirmation(response: &str) -> bool {
    let answer = response.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_accepts_y_and_yes() {
        assert!(is_confirmation("y\n"));
        assert!(is_confirmation(" YES "));
        assert!(!is_confirmation("n"));
        assert!(!is_confirmation(""));
    }

    #[test]
    fn get_rejects_unknown_key() {
        let config = Config::from_defaults();
        assert!(get(&config, Some("db_token")).is_err());
        assert!(get(&config, Some("locale")).is_ok());
    }
}
