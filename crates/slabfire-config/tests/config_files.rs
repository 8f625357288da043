//! Integration test: configuration files on disk.

use std::fs;
use std::path::PathBuf;

use slabfire_config::{ConfigError, DataConfig};
use slabfire_core::{AggregateType, StrengthMaterial, TemperatureUnit};

#[test]
fn test_relative_paths_resolve_against_config_dir() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slabfire.toml");
    fs::write(
        &path,
        r#"
temperature_unit = "F"

[temperature]
siliceous = "tables/temperature_siliceous.csv"

[strength]
siliceous = "tables/strength_siliceous.csv"
"#,
    )
    .unwrap();

    let config = DataConfig::from_path(&path).unwrap();
    assert_eq!(config.unit().unwrap(), TemperatureUnit::Fahrenheit);
    assert_eq!(
        config.temperature_sources().unwrap(),
        vec![(
            AggregateType::Siliceous,
            dir.path().join("tables/temperature_siliceous.csv")
        )]
    );
    assert_eq!(
        config.strength_sources().unwrap(),
        vec![(
            StrengthMaterial::Siliceous,
            dir.path().join("tables/strength_siliceous.csv")
        )]
    );
}

#[test]
fn test_relative_base_dir_joined_to_config_dir() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slabfire.toml");
    fs::write(
        &path,
        "base_dir = \"data\"\n[temperature]\ncarbonate = \"t.csv\"\n",
    )
    .unwrap();

    let config = DataConfig::from_path(&path).unwrap();
    assert_eq!(config.base_dir, Some(dir.path().join("data")));
    assert_eq!(config.resolve("t.csv"), dir.path().join("data").join("t.csv"));
}

#[test]
fn test_missing_file() {
    let err = DataConfig::from_path(PathBuf::from("/nonexistent/slabfire.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_malformed_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[temperature\ncarbonate = ").unwrap();

    assert!(matches!(
        DataConfig::from_path(&path),
        Err(ConfigError::Deserialization(_))
    ));
}
