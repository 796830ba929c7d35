//! Convert JSON clinical notes into documents

use crate::error::ExtractorError;
use rebuttal_domain::ClinicalDocument;
use serde_json::Value;
use tracing::trace;

/// Parse a JSON clinical note
pub fn parse_document(json: &str) -> Result<ClinicalDocument, ExtractorError> {
    let value: Value = serde_json::from_str(json)?;
    Ok(document_from_json(&value))
}

/// Convert a JSON value into a clinical document.
///
/// Objects become mappings (key order preserved), arrays become sequences and
/// strings become leaves. Numbers, booleans and `null` carry no prose and are
/// skipped; a scalar at the root yields an empty sequence.
pub fn document_from_json(value: &Value) -> ClinicalDocument {
    convert(value, "$").unwrap_or_else(|| ClinicalDocument::Sequence(Vec::new()))
}

fn convert(value: &Value, path: &str) -> Option<ClinicalDocument> {
    match value {
        Value::Object(map) => Some(ClinicalDocument::Mapping(
            map.iter()
                .filter_map(|(key, child)| {
                    convert(child, &format!("{}.{}", path, key)).map(|doc| (key.clone(), doc))
                })
                .collect(),
        )),
        Value::Array(items) => Some(ClinicalDocument::Sequence(
            items
                .iter()
                .enumerate()
                .filter_map(|(idx, child)| convert(child, &format!("{}[{}]", path, idx)))
                .collect(),
        )),
        Value::String(text) => Some(ClinicalDocument::Leaf(text.clone())),
        Value::Number(_) | Value::Bool(_) | Value::Null => {
            trace!("Skipping non-text value at {}", path);
            None
        }
    }
}
