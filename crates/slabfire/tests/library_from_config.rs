//! Integration test: build a library from a configuration directory and
//! query it through the string-keyed surface.

use std::fs;
use std::path::Path;

use approx::assert_relative_eq;
use slabfire::prelude::*;
use slabfire::{ConfigError, CurveError};

const CARBONATE_F: &str = "\
depth,time,temperature
10,0,68
10,60,1112
10,120,1472
20,0,68
20,60,752
20,120,1112
20,180,1292
";

const SEMI_LIGHTWEIGHT_C: &str = "\
depth,time,temperature
15,0,20
15,90,500
25,0,20
25,90,350
";

const CARBONATE_STRENGTH_F: &str = "\
condition,temperature,strength_fraction
unstressed,68,1.0
unstressed,752,0.9
unstressed,1472,0.3
";

const SEMI_LIGHTWEIGHT_STRENGTH_F: &str = "\
condition,temperature,strength_fraction
stressed_sanded,68,1.0
stressed_sanded,1472,0.6
unstressed_unsanded,68,1.0
unstressed_unsanded,1472,0.4
";

const STEEL_STRENGTH_F: &str = "\
temperature,strength_fraction
68,1.0
572,1.0
1112,0.5
1292,0.3
";

fn write_data(dir: &Path) {
    let data = dir.join("data");
    fs::create_dir(&data).unwrap();
    fs::write(data.join("temperature_carbonate.csv"), CARBONATE_F).unwrap();
    fs::write(data.join("strength_carbonate.csv"), CARBONATE_STRENGTH_F).unwrap();
    fs::write(data.join("strength_semi_lightweight.csv"), SEMI_LIGHTWEIGHT_STRENGTH_F).unwrap();
    fs::write(data.join("strength_steel.csv"), STEEL_STRENGTH_F).unwrap();
    fs::write(
        dir.join("slabfire.toml"),
        r#"
temperature_unit = "fahrenheit"
base_dir = "data"

[temperature]
carbonate = "temperature_carbonate.csv"

[strength]
carbonate = "strength_carbonate.csv"
semi-lightweight = "strength_semi_lightweight.csv"
steel = "strength_steel.csv"
"#,
    )
    .unwrap();
}

fn library() -> (tempfile::TempDir, FireLibrary) {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path());
    let library = FireLibrary::from_config_path(dir.path().join("slabfire.toml")).unwrap();
    (dir, library)
}

#[test]
fn test_loaded_tables() {
    let (_dir, lib) = library();
    assert_eq!(lib.temperature_model().aggregates(), vec![AggregateType::Carbonate]);
    // carbonate/unstressed, two semi-lightweight curves, steel
    assert_eq!(lib.strength_model().tables().len(), 4);
}

#[test]
fn test_temperature_queries() {
    let (_dir, lib) = library();

    // Data was in Fahrenheit; 752 F = 400 C exactly.
    assert_relative_eq!(
        lib.temperature_at(60.0, 20.0, "carbonate", None).unwrap(),
        400.0,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        lib.temperature_at(60.0, 20.0, "Carbonate", Some("F")).unwrap(),
        752.0,
        epsilon = 1e-9
    );

    let profile = lib
        .temperature_profile(90.0, &[10.0, 15.0, 20.0], "carbonate", Some("celsius"))
        .unwrap();
    assert_relative_eq!(profile[0], 700.0, epsilon = 1e-9);
    assert_relative_eq!(profile[1], 600.0, epsilon = 1e-9);
    assert_relative_eq!(profile[2], 500.0, epsilon = 1e-9);
}

#[test]
fn test_temperature_errors() {
    let (_dir, lib) = library();

    match lib.temperature_at(60.0, 15.0, "siliceous", None).unwrap_err() {
        FireError::UnknownCategory { valid, .. } => assert_eq!(valid, vec!["carbonate"]),
        other => panic!("unexpected error: {other}"),
    }
    assert!(matches!(
        lib.temperature_at(60.0, 0.1, "carbonate", None),
        Err(FireError::OutOfRange { .. })
    ));
    assert!(matches!(
        lib.temperature_at(60.0, 15.0, "carbonate", Some("rankine")),
        Err(FireError::InvalidUnit { .. })
    ));
    assert!(matches!(
        lib.temperature_profile(150.0, &[20.0, 15.0], "carbonate", None),
        Err(FireError::OutOfRange { .. })
    ));
}

#[test]
fn test_strength_queries() {
    let (_dir, lib) = library();

    assert_relative_eq!(
        lib.strength_fraction(400.0, "carbonate", Some("unstressed"), None).unwrap(),
        0.9,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        lib.strength_fraction(800.0, "semi lightweight", Some("Stressed-Sanded"), None)
            .unwrap(),
        0.6,
        epsilon = 1e-12
    );

    // Steel threshold equal to the last knot's fraction.
    assert_relative_eq!(
        lib.critical_temperature(0.3, "steel", None, None).unwrap(),
        700.0,
        epsilon = 1e-9
    );
    assert_eq!(
        lib.critical_temperature(0.1, "steel", None, Some("f")).unwrap(),
        f64::INFINITY
    );
}

#[test]
fn test_strength_errors() {
    let (_dir, lib) = library();

    // Loaded material, but the condition belongs to another family.
    match lib
        .strength_fraction(400.0, "carbonate", Some("stressed_sanded"), None)
        .unwrap_err()
    {
        FireError::UnknownCategory { kind, .. } => assert_eq!(kind, "condition for carbonate"),
        other => panic!("unexpected error: {other}"),
    }

    // Valid key, table not loaded.
    assert!(matches!(
        lib.strength_fraction(400.0, "siliceous", Some("stressed"), None),
        Err(FireError::UnknownCategory { .. })
    ));

    assert!(matches!(
        lib.critical_temperature(-0.1, "steel", None, None),
        Err(FireError::DomainError { .. })
    ));
}

#[test]
fn test_rating_queries() {
    let (_dir, lib) = library();

    let results = lib
        .evaluate_rating("carbonate", false, 170.0, 30.0, Some(&[240]))
        .unwrap();
    assert!(results[0].pass);

    let results = lib
        .evaluate_rating("carbonate", false, 169.9, 30.0, Some(&[240]))
        .unwrap();
    assert!(!results[0].thickness_pass);
    assert!(results[0].cover_pass);

    // Rating tables do not need loaded temperature data.
    assert_eq!(
        lib.maximum_rating("lightweight", true, 95.0, 20.0, None).unwrap(),
        Some(120)
    );
    assert!(matches!(
        lib.evaluate_rating("carbonate", false, 170.0, 30.0, Some(&[60, 45])),
        Err(FireError::UnsupportedDuration { minutes: 45, .. })
    ));
}

#[test]
fn test_rebar_condition() {
    let (_dir, lib) = library();

    let condition = lib
        .rebar_condition(60.0, 20.0, "carbonate", Some("unstressed"), None)
        .unwrap();
    assert_relative_eq!(condition.temperature, 400.0, epsilon = 1e-9);
    assert_relative_eq!(condition.concrete_fraction, 0.9, epsilon = 1e-9);
    assert_relative_eq!(condition.steel_fraction, 1.0 - 0.5 / 3.0, epsilon = 1e-9);

    let json = serde_json::to_value(condition).unwrap();
    assert!(json.get("steel_fraction").is_some());
}

#[test]
fn test_invalid_config_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slabfire.toml");
    fs::write(&path, "[temperature]\ngranite = \"g.csv\"\n").unwrap();

    assert!(matches!(
        FireLibrary::from_config_path(&path),
        Err(LibraryError::Config(ConfigError::Validation { .. }))
    ));
}

#[test]
fn test_malformed_table_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("t.csv"), "depth,time,temperature\n10,0,20\n10,0,30\n").unwrap();

    let config = DataConfig::new()
        .with_base_dir(dir.path())
        .with_temperature(AggregateType::Siliceous, "t.csv");
    assert!(matches!(
        FireLibrary::from_config(&config),
        Err(LibraryError::Curve(CurveError::Curve { .. }))
    ));
}

#[test]
fn test_missing_table_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = DataConfig::new()
        .with_base_dir(dir.path())
        .with_temperature(AggregateType::Carbonate, "missing.csv");
    assert!(matches!(
        FireLibrary::from_config(&config),
        Err(LibraryError::Curve(CurveError::Io { .. }))
    ));
}

#[test]
fn test_semi_lightweight_surface_in_celsius() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("slw.csv"), SEMI_LIGHTWEIGHT_C).unwrap();
    let config = DataConfig::new()
        .with_base_dir(dir.path())
        .with_temperature(AggregateType::SemiLightweight, "slw.csv");

    let lib = FireLibrary::from_config(&config).unwrap();
    assert_relative_eq!(
        lib.temperature_at(90.0, 20.0, "semi-lightweight", None).unwrap(),
        425.0,
        epsilon = 1e-12
    );
}
