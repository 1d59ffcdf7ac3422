//! CSV flattener/writer
//!
//! Records have no fixed schema; the column set is the sorted union of all
//! keys appearing in any record. A record missing a column gets a blank
//! cell. Nested values land in their cell as compact JSON text.

use crate::error::Result;
use crate::types::JsonValue;
use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

/// Write records to a CSV file at `path`
///
/// An empty result set produces a zero-byte file, not a lone header line.
/// Rows appear in result-set order.
pub fn write_csv(records: &[JsonValue], path: &Path) -> Result<()> {
    if records.is_empty() {
        File::create(path)?;
        return Ok(());
    }

    let columns = column_union(records);
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&columns)?;

    for record in records {
        let row = columns
            .iter()
            .map(|column| cell(record.get(column)))
            .collect::<Result<Vec<_>>>()?;
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Sorted union of keys across all object records
fn column_union(records: &[JsonValue]) -> Vec<String> {
    let mut keys = BTreeSet::new();
    for record in records {
        if let Some(map) = record.as_object() {
            keys.extend(map.keys().cloned());
        }
    }
    keys.into_iter().collect()
}

/// Render one cell
fn cell(value: Option<&JsonValue>) -> Result<String> {
    Ok(match value {
        None | Some(JsonValue::Null) => String::new(),
        Some(JsonValue::String(s)) => s.clone(),
        Some(nested @ (JsonValue::Object(_) | JsonValue::Array(_))) => {
            serde_json::to_string(nested)?
        }
        Some(scalar) => scalar.to_string(),
    })
}
