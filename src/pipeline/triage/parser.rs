use serde_json::{Map, Value};

use super::types::TriageAnalysis;
use super::TriageError;

/// Remove Markdown code-fence markers the model may wrap its answer in.
///
/// Only the markers are removed; any surrounding text is kept.
pub fn strip_code_fences(response: &str) -> String {
    response
        .trim()
        .replace("```json", "")
        .replace("```", "")
}

/// Parse the analysis stage's response into a `TriageAnalysis`.
///
/// Any JSON object is accepted. Fields that are missing or of the wrong type
/// fall back individually (empty string, empty list, or absent); only text
/// that is not JSON at all, or JSON that is not an object, is rejected.
pub fn parse_analysis_response(response: &str) -> Result<TriageAnalysis, TriageError> {
    let cleaned = strip_code_fences(response);

    let value: Value = serde_json::from_str(&cleaned)
        .map_err(|e| TriageError::MalformedModelOutput(e.to_string()))?;

    let Value::Object(fields) = value else {
        return Err(TriageError::MalformedModelOutput(
            "analysis response is not a JSON object".into(),
        ));
    };

    Ok(analysis_from_fields(&fields))
}

fn analysis_from_fields(fields: &Map<String, Value>) -> TriageAnalysis {
    TriageAnalysis {
        category: string_field(fields, "category").unwrap_or_default(),
        urgency_level: string_field(fields, "urgencyLevel").unwrap_or_default(),
        precautions: string_field(fields, "precautions"),
        symptoms: string_list_lenient(fields.get("symptoms")),
        doctor_type: string_field(fields, "doctorType").unwrap_or_default(),
        reasoning: string_field(fields, "reasoning"),
        urgency_alias: string_field(fields, "urgency"),
    }
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Parse a list leniently: skip items that are not strings.
fn string_list_lenient(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => vec![],
    }
}
