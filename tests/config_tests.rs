//! Integration tests for configuration management

use ncn_stats::config::{Config, ConfigOverrides};
use ncn_stats::core::Locale;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(!config.paths.exports_dir.is_empty());
    assert!(!config.paths.reports_dir.is_empty());
    assert!(!config.report.institution.is_empty());
    assert!(
        config.paths.data_file.is_empty(),
        "Built-in dataset is used unless a data file is configured"
    );
    assert!(config.data_file().is_none());
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
data_file = "/srv/ncn/latest.json"
exports_dir = "./exports"
reports_dir = "./reports"

[report]
institution = "Northern College of Nursing"
locale = "ar"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.data_file, "/srv/ncn/latest.json");
    assert_eq!(config.paths.exports_dir, "./exports");
    assert_eq!(config.paths.reports_dir, "./reports");
    assert_eq!(config.report.institution, "Northern College of Nursing");
    assert_eq!(config.locale(), Locale::Ar);
}

#[test]
fn test_config_from_toml_partial() {
    // Missing sections and fields fall back to empty values
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.paths.reports_dir, "");
    assert_eq!(config.report.locale, "");
    assert_eq!(config.locale(), Locale::En);
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$NCN_STATS/logs/test.log"

[paths]
exports_dir = "$NCN_STATS/exports"
reports_dir = "$NCN_STATS/reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("ncnstats"));
    assert!(!config.logging.file.contains("$NCN_STATS"));
    assert!(config.paths.exports_dir.ends_with("exports"));
    assert!(!config.paths.exports_dir.contains("$NCN_STATS"));
    assert!(!config.paths.reports_dir.contains("$NCN_STATS"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "DEBUG").expect("Failed to set level");
    assert_eq!(config.get("level").as_deref(), Some("debug"));

    config.set("verbose", "true").expect("Failed to set verbose");
    assert!(config.logging.verbose);

    config
        .set("reports-dir", "/tmp/reports")
        .expect("Failed to set reports dir");
    assert_eq!(config.get("reports_dir").as_deref(), Some("/tmp/reports"));

    config.set("locale", "Arabic").expect("Failed to set locale");
    assert_eq!(config.get("locale").as_deref(), Some("ar"));

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_set_rejects_bad_values() {
    let mut config = Config::from_defaults();
    let before = config.report.locale.clone();

    assert!(config.set("locale", "fr").is_err());
    assert!(config.set("level", "loud").is_err());
    assert!(config.set("verbose", "sometimes").is_err());
    assert_eq!(config.report.locale, before);
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config
        .set("institution", "Somewhere Else")
        .expect("Failed to set institution");
    config
        .unset("institution", &defaults)
        .expect("Failed to unset institution");
    assert_eq!(config.report.institution, defaults.report.institution);

    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_serialized_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("locale", "ar").expect("Failed to set locale");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.report.locale, "ar");
    assert_eq!(loaded.report.institution, config.report.institution);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        data_file: Some("/data/in.json".to_string()),
        exports_dir: Some("./custom_exports".to_string()),
        reports_dir: Some("./custom_reports".to_string()),
        institution: Some("NCN".to_string()),
        locale: Some("ar".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(
        config.data_file().as_deref(),
        Some(std::path::Path::new("/data/in.json"))
    );
    assert_eq!(config.paths.exports_dir, "./custom_exports");
    assert_eq!(config.paths.reports_dir, "./custom_reports");
    assert_eq!(config.report.institution, "NCN");
    assert_eq!(config.locale(), Locale::Ar);
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
    assert_eq!(config.report.institution, defaults.report.institution);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("[report]"));
    assert!(display_str.contains("institution"));
    assert!(display_str.contains("data_file"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"
file = ""
verbose = false

[paths]
exports_dir = ""
reports_dir = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    let changed = config.merge_defaults(&defaults);

    assert!(changed, "merge_defaults should return true when fields are added");
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
    assert_eq!(config.report.institution, defaults.report.institution);
    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[report]
institution = "Custom Institute"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    config.merge_defaults(&defaults);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.report.institution, "Custom Institute");
}

#[test]
fn test_get_ncnstats_dir() {
    let dir = Config::get_ncnstats_dir();
    assert!(dir.ends_with("ncnstats"));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();
    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
