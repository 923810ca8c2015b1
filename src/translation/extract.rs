//! Extraction of the translated text from the service's nested-array response.
//!
//! The service answers with an untyped structure shaped like
//! `[[["fragment", "original", ...], ...], null, "en", ...]`. Only element 0
//! of the top level is used; each of its entries is one segment whose first
//! element is the translated fragment.

use serde_json::Value;

/// Concatenates every segment's translated fragment, in order, with no separator.
///
/// A malformed top level yields an empty string. Malformed individual segments
/// are skipped.
pub fn extract_translation(response: &Value) -> String {
    let Some(segments) = response
        .as_array()
        .and_then(|top| top.first())
        .and_then(Value::as_array)
    else {
        return String::new();
    };

    segments
        .iter()
        .filter_map(|segment| segment.as_array()?.first()?.as_str())
        .collect()
}
