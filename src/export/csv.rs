//! CSV export
//!
//! Records arrive as raw JSON objects whose shape is dictated entirely by
//! the remote API. Nested objects are flattened into dot-separated column
//! names, and the header is the union of field names across all records:
//! a record missing a column renders it empty rather than failing the
//! export. One data row is written per record, in arrival order.

use crate::error::AppError;
use chrono::Local;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Flattens a JSON object into dot-separated keys
///
/// Nested objects recurse (`item.name`); arrays and scalars stay as leaf
/// values. Returns pairs in depth-first field order.
pub fn flatten_record(record: &Value) -> Result<Vec<(String, Value)>, AppError> {
    let Value::Object(map) = record else {
        return Err(AppError::InvalidInput(format!(
            "expected a JSON object record, got: {record}"
        )));
    };

    let mut out = Vec::new();
    for (key, value) in map {
        flatten_into(key, value, &mut out);
    }
    Ok(out)
}

fn flatten_into(key: &str, value: &Value, out: &mut Vec<(String, Value)>) {
    match value {
        Value::Object(map) => {
            for (child_key, child) in map {
                flatten_into(&format!("{key}.{child_key}"), child, out);
            }
        }
        other => out.push((key.to_string(), other.clone())),
    }
}

/// Renders a leaf value as a CSV cell
fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Arrays survive flattening as leaves; keep them as compact JSON.
        other => other.to_string(),
    }
}

/// Writes records to a CSV file
///
/// Equivalent to [`write_csv_with_priority`] with no priority columns.
pub fn write_csv(path: &Path, records: &[Value]) -> Result<u64, AppError> {
    write_csv_with_priority(path, records, &[])
}

/// Writes records to a CSV file with selected columns ordered first
///
/// The header is the union of flattened field names across all records:
/// names listed in `priority` come first (in the given order, when
/// present), the rest follow in first-seen order. Returns the number of
/// data rows written, which always equals `records.len()`.
///
/// # Errors
/// Fails with `InvalidInput` when a record is not a JSON object, carrying
/// the offending record, and with `Csv`/`Io` on write failures.
pub fn write_csv_with_priority(
    path: &Path,
    records: &[Value],
    priority: &[&str],
) -> Result<u64, AppError> {
    let mut flattened: Vec<HashMap<String, Value>> = Vec::with_capacity(records.len());
    let mut columns: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for record in records {
        let fields = flatten_record(record)?;
        for (name, _) in &fields {
            if seen.insert(name.clone()) {
                columns.push(name.clone());
            }
        }
        flattened.push(fields.into_iter().collect());
    }

    let ordered: Vec<String> = priority
        .iter()
        .filter(|name| seen.contains(**name))
        .map(|name| name.to_string())
        .chain(
            columns
                .iter()
                .filter(|name| !priority.contains(&name.as_str()))
                .cloned(),
        )
        .collect();

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&ordered)?;

    for fields in &flattened {
        let row: Vec<String> = ordered
            .iter()
            .map(|column| fields.get(column).map(cell).unwrap_or_default())
            .collect();
        writer.write_record(&row)?;
    }
    writer.flush()?;

    info!(
        "Wrote {} rows to {}",
        flattened.len(),
        path.display()
    );
    Ok(flattened.len() as u64)
}

/// Builds a timestamped CSV path inside the output directory
///
/// Creates the directory if absent. The file name follows the pattern
/// `<license>_<label>_<YYYY-MM-DD_HH-MM-SS>.csv`.
pub fn timestamped_csv_path(
    output_dir: &Path,
    license_number: &str,
    label: &str,
) -> Result<PathBuf, AppError> {
    fs::create_dir_all(output_dir)?;
    let stamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    Ok(output_dir.join(format!("{license_number}_{label}_{stamp}.csv")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flattens_nested_objects_with_dot_keys() {
        let record = json!({
            "label": "1A4000000000000000000001",
            "item": {"name": "OG Kush", "category": {"name": "Flower"}},
            "quantity": 3.5
        });
        let fields = flatten_record(&record).unwrap();
        let names: Vec<&str> = fields.iter().map(|(k, _)| k.as_str()).collect();
        assert!(names.contains(&"label"));
        assert!(names.contains(&"item.name"));
        assert!(names.contains(&"item.category.name"));
        assert!(names.contains(&"quantity"));
    }

    #[test]
    fn non_object_record_is_rejected_with_context() {
        let err = flatten_record(&json!([1, 2, 3])).unwrap_err();
        assert!(err.to_string().contains("[1,2,3]"));
    }

    #[test]
    fn cell_renders_scalars_and_null() {
        assert_eq!(cell(&json!(null)), "");
        assert_eq!(cell(&json!("abc")), "abc");
        assert_eq!(cell(&json!(3.5)), "3.5");
        assert_eq!(cell(&json!(true)), "true");
        assert_eq!(cell(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn writes_union_header_and_one_row_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let records = vec![
            json!({"label": "A", "quantity": 1}),
            json!({"label": "B", "note": "late-added column"}),
        ];

        let rows = write_csv(&path, &records).unwrap();
        assert_eq!(rows, 2);

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "label,quantity,note");
        assert_eq!(lines[1], "A,1,");
        assert_eq!(lines[2], "B,,late-added column");
    }

    #[test]
    fn priority_columns_come_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let records = vec![json!({"a": 1, "label": "x", "b": 2})];

        write_csv_with_priority(&path, &records, &["label", "absent"]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().next().unwrap(), "label,a,b");
    }

    #[test]
    fn timestamped_path_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("output");
        let path = timestamped_csv_path(&output, "CUL000003", "active_packages").unwrap();
        assert!(output.is_dir());
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("CUL000003_active_packages_"));
        assert!(name.ends_with(".csv"));
    }
}
