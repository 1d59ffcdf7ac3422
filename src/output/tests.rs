//! Tests for the CSV writer

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn write_to_temp(records: &[crate::types::JsonValue]) -> String {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    write_csv(records, &path).unwrap();
    std::fs::read_to_string(&path).unwrap()
}

#[test]
fn test_sorted_column_union_with_blanks() {
    let records = [json!({"a": 1}), json!({"b": 2})];
    let content = write_to_temp(&records);

    assert_eq!(content, "a,b\n1,\n,2\n");
}

#[test]
fn test_empty_result_set_writes_zero_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    write_csv(&[], &path).unwrap();

    assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
}

#[test]
fn test_nested_values_serialized_as_json_text() {
    let records = [json!({"id": 7, "tags": ["x", "y"]})];
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested.csv");
    write_csv(&records, &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let row = reader.records().next().unwrap().unwrap();

    assert_eq!(row.get(0), Some("7"));
    assert_eq!(row.get(1), Some(r#"["x","y"]"#));
}

#[test]
fn test_nested_objects_serialized_as_json_text() {
    let records = [json!({"owner": {"name": "Kim"}})];
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("object.csv");
    write_csv(&records, &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let row = reader.records().next().unwrap().unwrap();

    assert_eq!(row.get(0), Some(r#"{"name":"Kim"}"#));
}

#[test]
fn test_scalar_rendering() {
    let records = [json!({
        "name": "rack 1",
        "count": 12,
        "ratio": 0.5,
        "active": true,
        "note": null
    })];
    let content = write_to_temp(&records);

    // Columns sort to: active, count, name, note, ratio.
    assert_eq!(content, "active,count,name,note,ratio\ntrue,12,rack 1,,0.5\n");
}

#[test]
fn test_rows_preserve_result_set_order() {
    let records = [
        json!({"id": 3}),
        json!({"id": 1}),
        json!({"id": 2}),
    ];
    let content = write_to_temp(&records);

    assert_eq!(content, "id\n3\n1\n2\n");
}

#[test]
fn test_non_object_record_renders_blank_row() {
    let records = [json!({"id": 1}), json!("stray")];
    let content = write_to_temp(&records);

    assert_eq!(content, "id\n1\n\"\"\n");
}
