//! Response Splitter — separates the narrative from the marker-delimited JSON block.
//!
//! Strict by construction: the first `[JSON_START]` and the first `[JSON_END]`
//! in the raw text are the only delimiters considered. There is no fallback
//! (no brace scanning, no fence stripping).

use serde_json::{Map, Value};
use thiserror::Error;

use crate::llm_client::prompts::{JSON_END_MARKER, JSON_START_MARKER};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("start marker [JSON_START] not found in response")]
    MissingStartMarker,

    #[error("end marker [JSON_END] not found in response")]
    MissingEndMarker,

    #[error("end marker [JSON_END] appears before start marker [JSON_START]")]
    MarkersOutOfOrder,

    #[error("invalid JSON between markers: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("structured segment is a JSON {0}, expected an object")]
    NotAnObject(&'static str),

    #[error("structured data does not match the {profile} roadmap schema: {reason}")]
    SchemaMismatch { profile: String, reason: String },
}

/// Result of a successful split.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitResponse {
    pub narrative: String,
    pub structured: Map<String, Value>,
}

/// Splits `raw` into trimmed narrative and the parsed JSON object between the markers.
pub fn split_response(raw: &str) -> Result<SplitResponse, ExtractionError> {
    let start = raw
        .find(JSON_START_MARKER)
        .ok_or(ExtractionError::MissingStartMarker)?;
    let end = raw
        .find(JSON_END_MARKER)
        .ok_or(ExtractionError::MissingEndMarker)?;

    let segment_start = start + JSON_START_MARKER.len();
    if end < segment_start {
        return Err(ExtractionError::MarkersOutOfOrder);
    }

    let narrative = raw[..start].trim().to_string();
    let segment = raw[segment_start..end].trim();

    let structured = match serde_json::from_str::<Value>(segment)? {
        Value::Object(map) => map,
        other => return Err(ExtractionError::NotAnObject(json_kind(&other))),
    };

    Ok(SplitResponse {
        narrative,
        structured,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_basic_split() {
        let split = split_response("Narrative text [JSON_START] {\"a\":1} [JSON_END]").unwrap();
        assert_eq!(split.narrative, "Narrative text");
        assert_eq!(Value::Object(split.structured), json!({"a": 1}));
    }

    #[test]
    fn test_multiline_response_with_trailing_text() {
        let raw = "\n## Executive Summary\nA four-phase rollout.\n\n[JSON_START]\n{\n  \"roadmap\": {\"phases\": [{\"name\": \"Pilot\"}]}\n}\n[JSON_END]\nThanks!";
        let split = split_response(raw).unwrap();
        assert_eq!(split.narrative, "## Executive Summary\nA four-phase rollout.");
        assert_eq!(split.structured["roadmap"]["phases"][0]["name"], "Pilot");
    }

    #[test]
    fn test_empty_narrative_is_allowed() {
        let split = split_response("[JSON_START]{}[JSON_END]").unwrap();
        assert_eq!(split.narrative, "");
        assert!(split.structured.is_empty());
    }

    #[test]
    fn test_missing_start_marker() {
        let err = split_response("Narrative only {\"a\":1} [JSON_END]").unwrap_err();
        assert!(matches!(err, ExtractionError::MissingStartMarker));
        assert!(err.to_string().contains("[JSON_START]"));
    }

    #[test]
    fn test_missing_end_marker() {
        let err = split_response("Narrative [JSON_START] {\"a\":1}").unwrap_err();
        assert!(matches!(err, ExtractionError::MissingEndMarker));
    }

    #[test]
    fn test_no_markers_at_all() {
        let err = split_response("I could not produce a roadmap.").unwrap_err();
        assert!(matches!(err, ExtractionError::MissingStartMarker));
    }

    #[test]
    fn test_reversed_markers() {
        let err = split_response("Narrative [JSON_END] {\"a\":1} [JSON_START]").unwrap_err();
        assert!(matches!(err, ExtractionError::MarkersOutOfOrder));
    }

    #[test]
    fn test_invalid_json_surfaces_parse_error() {
        let err = split_response("Narrative [JSON_START] {invalid} [JSON_END]").unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidJson(_)));
        let message = err.to_string();
        assert!(message.starts_with("invalid JSON between markers:"));
        assert!(message.contains("line 1"), "serde detail missing: {message}");
    }

    #[test]
    fn test_empty_segment_is_invalid_json() {
        let err = split_response("Narrative [JSON_START]   [JSON_END]").unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidJson(_)));
    }

    #[test]
    fn test_non_object_segment_rejected() {
        let err = split_response("N [JSON_START] [1, 2, 3] [JSON_END]").unwrap_err();
        assert!(matches!(err, ExtractionError::NotAnObject("array")));

        let err = split_response("N [JSON_START] \"text\" [JSON_END]").unwrap_err();
        assert!(matches!(err, ExtractionError::NotAnObject("string")));
    }

    #[test]
    fn test_end_marker_inside_json_string_truncates_segment() {
        // First end marker wins, so a marker-like substring inside the payload
        // cuts the JSON short and the parse fails.
        let raw = r#"N [JSON_START] {"note": "wrap with [JSON_END]"} [JSON_END]"#;
        let err = split_response(raw).unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidJson(_)));
    }

    #[test]
    fn test_start_marker_inside_json_string_is_kept() {
        let raw = r#"N [JSON_START] {"note": "begins at [JSON_START]"} [JSON_END]"#;
        let split = split_response(raw).unwrap();
        assert_eq!(split.structured["note"], "begins at [JSON_START]");
    }

    #[test]
    fn test_start_marker_echoed_in_narrative_uses_first_occurrence() {
        // Unresolved ambiguity: an echoed marker in the narrative is treated as
        // the real one. The segment then spans narrative text and fails to parse.
        let raw = "The block follows [JSON_START] below.\n[JSON_START] {\"a\":1} [JSON_END]";
        let err = split_response(raw).unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidJson(_)));
    }

    #[test]
    fn test_multibyte_narrative() {
        let split = split_response("Fidélité, résumé ✓ [JSON_START]{\"ok\":true}[JSON_END]").unwrap();
        assert_eq!(split.narrative, "Fidélité, résumé ✓");
        assert_eq!(split.structured["ok"], true);
    }
}
