//! Long-format CSV table loading.
//!
//! Temperature tables have one row per digitized `(depth, time)` knot:
//!
//! ```text
//! depth,time,temperature
//! 10,0,68
//! 10,30,752
//! 20,0,68
//! ```
//!
//! Strength tables have one row per `(condition, temperature)` knot, with the
//! retained fraction already normalized to `[0, 1]`:
//!
//! ```text
//! condition,temperature,strength_fraction
//! unstressed,20,1.0
//! unstressed,600,0.55
//! ```
//!
//! Temperatures are converted to Celsius on load. Rows may appear in any
//! order; duplicates and non-finite values are rejected, never repaired.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use slabfire_core::{StrengthCurve, StrengthMaterial, TemperatureUnit};
use slabfire_math::Curve;

use crate::error::{CurveError, CurveResult};
use crate::surface::DepthTimeSurface;

// =============================================================================
// RECORDS
// =============================================================================

/// CSV record for temperature tables.
#[derive(Debug, Deserialize)]
struct TemperatureRecord {
    depth: f64,
    time: f64,
    temperature: f64,
}

/// CSV record for strength tables.
#[derive(Debug, Deserialize)]
struct StrengthRecord {
    #[serde(default)]
    condition: Option<String>,
    temperature: f64,
    strength_fraction: f64,
}

fn csv_reader(text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(text.as_bytes())
}

fn open(path: &Path) -> CurveResult<File> {
    File::open(path).map_err(|e| CurveError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Line of the record that ends at byte offset `end` of `text`.
///
/// A `csv` record position starts at any comment or blank line skipped
/// before the record; the end offset does not.
fn line_ending_at(text: &str, end: u64) -> u64 {
    let end = usize::try_from(end).map_or(text.len(), |e| e.min(text.len()));
    let consumed = text
        .get(..end)
        .unwrap_or(text)
        .trim_end_matches(|c| c == '\r' || c == '\n');
    consumed.matches('\n').count() as u64 + 1
}

/// Reads every data row of a CSV table, each paired with its line number.
fn read_rows<T: DeserializeOwned, R: Read>(
    source_name: &str,
    mut reader: R,
) -> CurveResult<Vec<(u64, T)>> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| CurveError::Io {
            path: source_name.to_string(),
            reason: e.to_string(),
        })?;

    let mut rdr = csv_reader(&text);
    let headers = match rdr.headers().cloned() {
        Ok(headers) => headers,
        Err(e) => {
            let line = line_ending_at(&text, rdr.position().byte());
            return Err(CurveError::parse(source_name, line, e.to_string()));
        }
    };

    let mut record = csv::StringRecord::new();
    let mut rows = Vec::new();
    loop {
        let more = rdr.read_record(&mut record);
        let line = line_ending_at(&text, rdr.position().byte());
        match more {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => return Err(CurveError::parse(source_name, line, e.to_string())),
        }
        let row = record
            .deserialize(Some(&headers))
            .map_err(|e| CurveError::parse(source_name, line, e.to_string()))?;
        rows.push((line, row));
    }
    Ok(rows)
}

fn require_finite(source_name: &str, line: u64, name: &str, value: f64) -> CurveResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CurveError::invalid_value(
            source_name,
            line,
            format!("{name} {value} is not finite"),
        ))
    }
}

// =============================================================================
// TEMPERATURE TABLES
// =============================================================================

/// Reads a depth-time surface from long-format CSV.
///
/// Rows are grouped by exact depth; each group is sorted by time and becomes
/// one time curve. `unit` is the unit of the `temperature` column.
pub fn read_depth_time_surface<R: Read>(
    label: &str,
    reader: R,
    unit: TemperatureUnit,
) -> CurveResult<DepthTimeSurface> {
    let mut rows: Vec<(f64, f64, f64)> = Vec::new();

    for (line, record) in read_rows::<TemperatureRecord, _>(label, reader)? {
        require_finite(label, line, "depth", record.depth)?;
        require_finite(label, line, "time", record.time)?;
        require_finite(label, line, "temperature", record.temperature)?;
        rows.push((record.depth, record.time, unit.to_celsius(record.temperature)));
    }

    if rows.is_empty() {
        return Err(CurveError::Empty {
            source_name: label.to_string(),
        });
    }

    rows.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

    let mut groups: Vec<(f64, Vec<(f64, f64)>)> = Vec::new();
    for (depth, time, temperature) in rows {
        match groups.last_mut() {
            Some((d, knots)) if *d == depth => knots.push((time, temperature)),
            _ => groups.push((depth, vec![(time, temperature)])),
        }
    }

    let mut depth_curves: Vec<(f64, Curve)> = Vec::with_capacity(groups.len());
    for (depth, knots) in groups {
        let curve = Curve::from_knots(knots)
            .map_err(|e| CurveError::curve(format!("{label} at depth {depth}"), e))?;
        debug!(
            "{}: depth {} has {} knots over t=[{}, {}]",
            label,
            depth,
            curve.len(),
            curve.min_x(),
            curve.max_x()
        );
        depth_curves.push((depth, curve));
    }

    let surface = DepthTimeSurface::new(label, depth_curves)?;
    info!(
        "Loaded temperature surface {}: {} depths, {} knots",
        label,
        surface.len(),
        surface.knot_count()
    );
    Ok(surface)
}

/// Loads a depth-time surface from a CSV file.
pub fn load_depth_time_surface(
    label: &str,
    path: impl AsRef<Path>,
    unit: TemperatureUnit,
) -> CurveResult<DepthTimeSurface> {
    let path = path.as_ref();
    debug!("Reading temperature table {}", path.display());
    read_depth_time_surface(label, open(path)?, unit)
}

// =============================================================================
// STRENGTH TABLES
// =============================================================================

/// Reads every strength curve of `material` from long-format CSV.
///
/// Conditions are parsed with the material's own vocabulary. Steel tables may
/// leave the condition column empty or omit it. `unit` is the unit of the
/// `temperature` column. Fractions outside `[0, 1]` are rejected.
pub fn read_strength_curves<R: Read>(
    material: StrengthMaterial,
    reader: R,
    unit: TemperatureUnit,
) -> CurveResult<Vec<(StrengthCurve, Curve)>> {
    let source_name = material.name();
    let mut groups: BTreeMap<StrengthCurve, Vec<(f64, f64)>> = BTreeMap::new();

    for (line, record) in read_rows::<StrengthRecord, _>(source_name, reader)? {
        require_finite(source_name, line, "temperature", record.temperature)?;
        require_finite(source_name, line, "strength_fraction", record.strength_fraction)?;
        if !(0.0..=1.0).contains(&record.strength_fraction) {
            return Err(CurveError::invalid_value(
                source_name,
                line,
                format!(
                    "strength_fraction {} is outside [0, 1]",
                    record.strength_fraction
                ),
            ));
        }

        let condition = record.condition.as_deref().filter(|c| !c.is_empty());
        let key = material.curve(condition)?;
        groups.entry(key).or_default().push((
            unit.to_celsius(record.temperature),
            record.strength_fraction,
        ));
    }

    if groups.is_empty() {
        return Err(CurveError::Empty {
            source_name: source_name.to_string(),
        });
    }

    let mut curves = Vec::with_capacity(groups.len());
    for (key, mut knots) in groups {
        knots.sort_by(|a, b| a.0.total_cmp(&b.0));
        let curve = Curve::from_knots(knots).map_err(|e| CurveError::curve(key.to_string(), e))?;
        if !curve.is_non_increasing() {
            warn!(
                "{}: retained fraction rises with temperature; critical temperatures use the first crossing",
                key
            );
        }
        debug!(
            "{}: {} knots over T=[{}, {}]",
            key,
            curve.len(),
            curve.min_x(),
            curve.max_x()
        );
        curves.push((key, curve));
    }

    info!(
        "Loaded {} strength curve(s) for {}",
        curves.len(),
        source_name
    );
    Ok(curves)
}

/// Loads every strength curve of `material` from a CSV file.
pub fn load_strength_curves(
    material: StrengthMaterial,
    path: impl AsRef<Path>,
    unit: TemperatureUnit,
) -> CurveResult<Vec<(StrengthCurve, Curve)>> {
    let path = path.as_ref();
    debug!("Reading strength table {}", path.display());
    read_strength_curves(material, open(path)?, unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use slabfire_core::{ConcreteCurve, FireError, NormalWeightCondition};
    use std::io::Write;

    const TEMPERATURE_CSV: &str = "\
depth,time,temperature
20,60,450
10,0,20
10,30,500
20,0,20
10,60,700
20,120,600
";

    #[test]
    fn test_read_surface_groups_and_sorts() {
        let surface =
            read_depth_time_surface("carbonate", TEMPERATURE_CSV.as_bytes(), TemperatureUnit::Celsius)
                .unwrap();

        assert_eq!(surface.depths(), &[10.0, 20.0]);
        assert_eq!(surface.curve(0).xs(), &[0.0, 30.0, 60.0]);
        assert_eq!(surface.curve(1).xs(), &[0.0, 60.0, 120.0]);
        assert_eq!(surface.curve(1).ys(), &[20.0, 450.0, 600.0]);
    }

    #[test]
    fn test_read_surface_converts_fahrenheit() {
        let csv = "depth,time,temperature\n10,0,68\n10,60,212\n";
        let surface =
            read_depth_time_surface("siliceous", csv.as_bytes(), TemperatureUnit::Fahrenheit)
                .unwrap();
        assert_relative_eq!(surface.curve(0).ys()[0], 20.0, epsilon = 1e-12);
        assert_relative_eq!(surface.curve(0).ys()[1], 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_read_surface_rejects_duplicate_time() {
        let csv = "depth,time,temperature\n10,0,20\n10,0,25\n";
        let err = read_depth_time_surface("carbonate", csv.as_bytes(), TemperatureUnit::Celsius)
            .unwrap_err();
        assert!(matches!(err, CurveError::Curve { .. }));
        assert!(err.to_string().contains("depth 10"));
    }

    #[test]
    fn test_read_surface_rejects_bad_rows() {
        let csv = "depth,time,temperature\n10,abc,20\n";
        let err = read_depth_time_surface("carbonate", csv.as_bytes(), TemperatureUnit::Celsius)
            .unwrap_err();
        assert!(matches!(err, CurveError::Parse { line: 2, .. }));

        let csv = "depth,time,temperature\n10,0,NaN\n";
        assert!(matches!(
            read_depth_time_surface("carbonate", csv.as_bytes(), TemperatureUnit::Celsius),
            Err(CurveError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_invalid_value_line_skips_comments_and_blank_lines() {
        let csv = "# comment\ndepth,time,temperature\n10,0,20\n10,30,NaN\n";
        let err = read_depth_time_surface("carbonate", csv.as_bytes(), TemperatureUnit::Celsius)
            .unwrap_err();
        assert!(matches!(err, CurveError::InvalidValue { line: 4, .. }));

        let csv = "depth,time,temperature\n\n# note\n10,0,20\n\n10,x,30\n";
        let err = read_depth_time_surface("carbonate", csv.as_bytes(), TemperatureUnit::Celsius)
            .unwrap_err();
        assert!(matches!(err, CurveError::Parse { line: 6, .. }));

        let csv = "# steel\r\ntemperature,strength_fraction\r\n20,1.0\r\n# knee\r\n600,1.5";
        let err = read_strength_curves(StrengthMaterial::Steel, csv.as_bytes(), TemperatureUnit::Celsius)
            .unwrap_err();
        assert!(matches!(err, CurveError::InvalidValue { line: 5, .. }));
    }

    #[test]
    fn test_rising_strength_curve_is_kept() {
        let csv = "condition,temperature,strength_fraction\nstressed,20,0.9\nstressed,200,1.0\n";
        let curves =
            read_strength_curves(StrengthMaterial::Carbonate, csv.as_bytes(), TemperatureUnit::Celsius)
                .unwrap();
        assert!(!curves[0].1.is_non_increasing());
    }

    #[test]
    fn test_read_surface_empty() {
        let csv = "depth,time,temperature\n";
        assert!(matches!(
            read_depth_time_surface("carbonate", csv.as_bytes(), TemperatureUnit::Celsius),
            Err(CurveError::Empty { .. })
        ));
    }

    #[test]
    fn test_read_strength_curves() {
        let csv = "\
condition,temperature,strength_fraction
stressed,20,1.0
unstressed,20,1.0
unstressed,400,0.9
stressed,600,0.7
stressed,400,0.95
";
        let curves =
            read_strength_curves(StrengthMaterial::Carbonate, csv.as_bytes(), TemperatureUnit::Celsius)
                .unwrap();
        assert_eq!(curves.len(), 2);

        let stressed = StrengthCurve::Concrete(ConcreteCurve::Carbonate(NormalWeightCondition::Stressed));
        let (_, curve) = curves.iter().find(|(k, _)| *k == stressed).unwrap();
        assert_eq!(curve.xs(), &[20.0, 400.0, 600.0]);
        assert_eq!(curve.ys(), &[1.0, 0.95, 0.7]);
    }

    #[test]
    fn test_read_steel_without_condition_column() {
        let csv = "temperature,strength_fraction\n20,1.0\n600,0.5\n";
        let curves =
            read_strength_curves(StrengthMaterial::Steel, csv.as_bytes(), TemperatureUnit::Celsius)
                .unwrap();
        assert_eq!(curves.len(), 1);
        assert_eq!(curves[0].0, StrengthCurve::Steel);
    }

    #[test]
    fn test_read_strength_rejects_unknown_condition() {
        let csv = "condition,temperature,strength_fraction\nstressed_sanded,20,1.0\n";
        let err = read_strength_curves(StrengthMaterial::Siliceous, csv.as_bytes(), TemperatureUnit::Celsius)
            .unwrap_err();
        assert!(matches!(
            err,
            CurveError::Category(FireError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_read_strength_rejects_fraction_above_one() {
        let csv = "condition,temperature,strength_fraction\nunstressed,20,1.02\n";
        let err = read_strength_curves(StrengthMaterial::Carbonate, csv.as_bytes(), TemperatureUnit::Celsius)
            .unwrap_err();
        assert!(matches!(err, CurveError::InvalidValue { line: 2, .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TEMPERATURE_CSV.as_bytes()).unwrap();

        let surface =
            load_depth_time_surface("carbonate", file.path(), TemperatureUnit::Celsius).unwrap();
        assert_eq!(surface.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_depth_time_surface(
            "carbonate",
            "/nonexistent/temperature.csv",
            TemperatureUnit::Celsius,
        )
        .unwrap_err();
        assert!(matches!(err, CurveError::Io { .. }));
    }
}
