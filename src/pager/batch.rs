//! Batch extraction from a page response body
//!
//! The API answers either with a bare array of records or with an object
//! whose `results` key holds the array. Everything else counts as an empty
//! batch, which ends pagination.

use crate::types::JsonValue;

/// Extract the record batch from a response body
pub fn extract_batch(body: Option<JsonValue>) -> Vec<JsonValue> {
    match body {
        Some(JsonValue::Object(mut map)) => match map.remove("results") {
            Some(JsonValue::Array(items)) => items,
            _ => Vec::new(),
        },
        Some(JsonValue::Array(items)) => items,
        _ => Vec::new(),
    }
}
