//! Tests for the hostmark configuration system.

use std::sync::Mutex;

use hostmark_core::config::{CliOverrides, HostmarkConfig};
use hostmark_core::errors::ConfigError;

/// Serializes tests that touch environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ENV_KEYS: [&str; 4] = [
    "HOSTMARK_CATEGORY_ATTRIBUTE",
    "HOSTMARK_MARK_ATTRIBUTE",
    "HOSTMARK_TRANSACTION_NAME",
    "HOSTMARK_STORAGE_BUSY_TIMEOUT_MS",
];

/// Clears HOSTMARK_ vars and points HOME at an empty directory so a real
/// user config cannot leak in.
fn isolate_env(home: &std::path::Path) {
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home);
    std::env::remove_var("USERPROFILE");
}

#[test]
fn defaults_without_any_files() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempfile::TempDir::new().unwrap();
    let project = tempfile::TempDir::new().unwrap();
    isolate_env(home.path());

    let config = HostmarkConfig::load(project.path(), None).unwrap();
    assert_eq!(config.annotation.effective_category_attribute(), "baseCategoryLabel");
    assert_eq!(config.annotation.effective_mark_attribute(), "baseMark");
    assert_eq!(
        config.annotation.effective_transaction_name(),
        "Write host parameters to rebar"
    );
    assert_eq!(config.storage.effective_busy_timeout_ms(), 5000);
}

#[test]
fn four_layer_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempfile::TempDir::new().unwrap();
    let project = tempfile::TempDir::new().unwrap();
    isolate_env(home.path());

    std::fs::create_dir_all(home.path().join(".hostmark")).unwrap();
    std::fs::write(
        home.path().join(".hostmark").join("config.toml"),
        r#"
[annotation]
category_attribute = "UserCategory"
mark_attribute = "UserMark"
transaction_name = "user tx"

[annotation.category_labels]
Walls = "User wall"
"#,
    )
    .unwrap();
    std::fs::write(
        project.path().join("hostmark.toml"),
        r#"
[annotation]
mark_attribute = "ProjectMark"
transaction_name = "project tx"

[annotation.category_labels]
Doors = "Project door"
"#,
    )
    .unwrap();
    std::env::set_var("HOSTMARK_TRANSACTION_NAME", "env tx");
    std::env::set_var("HOSTMARK_CATEGORY_ATTRIBUTE", "EnvCategory");

    let cli = CliOverrides {
        category_attribute: Some("CliCategory".to_string()),
        ..Default::default()
    };
    let config = HostmarkConfig::load(project.path(), Some(&cli)).unwrap();

    assert_eq!(config.annotation.effective_category_attribute(), "CliCategory");
    assert_eq!(config.annotation.effective_mark_attribute(), "ProjectMark");
    assert_eq!(config.annotation.effective_transaction_name(), "env tx");
    // Label overrides merge per category across layers.
    assert_eq!(
        config.annotation.category_labels.get("Walls").map(String::as_str),
        Some("User wall")
    );
    assert_eq!(
        config.annotation.category_labels.get("Doors").map(String::as_str),
        Some("Project door")
    );

    isolate_env(home.path());
}

#[test]
fn invalid_project_toml_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempfile::TempDir::new().unwrap();
    let project = tempfile::TempDir::new().unwrap();
    isolate_env(home.path());

    std::fs::write(project.path().join("hostmark.toml"), "[annotation\nbroken").unwrap();
    let err = HostmarkConfig::load(project.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }), "{err}");
}

#[test]
fn env_busy_timeout_ignores_garbage() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempfile::TempDir::new().unwrap();
    let project = tempfile::TempDir::new().unwrap();
    isolate_env(home.path());

    std::env::set_var("HOSTMARK_STORAGE_BUSY_TIMEOUT_MS", "soon");
    let config = HostmarkConfig::load(project.path(), None).unwrap();
    assert_eq!(config.storage.busy_timeout_ms, None);

    std::env::set_var("HOSTMARK_STORAGE_BUSY_TIMEOUT_MS", "250");
    let config = HostmarkConfig::load(project.path(), None).unwrap();
    assert_eq!(config.storage.effective_busy_timeout_ms(), 250);

    isolate_env(home.path());
}

#[test]
fn identical_attribute_names_are_rejected() {
    let err = HostmarkConfig::from_toml(
        r#"
[annotation]
category_attribute = "Same"
mark_attribute = "Same"
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn empty_attribute_name_is_rejected() {
    let err = HostmarkConfig::from_toml("[annotation]\ncategory_attribute = \"  \"\n").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "annotation.category_attribute")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_category_label_is_rejected() {
    let err = HostmarkConfig::from_toml(
        r#"
[annotation.category_labels]
UnknownCategoryXYZ = "Mystery"
"#,
    )
    .unwrap_err();
    match err {
        ConfigError::InvalidValue { field, message } => {
            assert_eq!(field, "annotation.category_labels.UnknownCategoryXYZ");
            assert_eq!(message, "unknown category: UnknownCategoryXYZ");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_label_is_rejected() {
    let err = HostmarkConfig::from_toml("[annotation.category_labels]\nDoors = \"\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn zero_busy_timeout_is_rejected() {
    let err = HostmarkConfig::from_toml("[storage]\nbusy_timeout_ms = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn toml_round_trip_preserves_overrides() {
    let config = HostmarkConfig::from_toml(
        r#"
[annotation]
category_attribute = "ADSK_Категория основы"
mark_attribute = "ADSK_Метка основы"

[annotation.category_labels]
Doors = "Дверь"
"#,
    )
    .unwrap();
    let reparsed = HostmarkConfig::from_toml(&config.to_toml().unwrap()).unwrap();
    assert_eq!(
        reparsed.annotation.effective_category_attribute(),
        "ADSK_Категория основы"
    );
    assert_eq!(
        reparsed.annotation.category_labels.get("Doors").map(String::as_str),
        Some("Дверь")
    );
}
