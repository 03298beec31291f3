use crate::analysis::{ScanOutcome, ScanReport};
use crate::types::AnalysisResult;
use serde::Serialize;

/// One JSON document per scanned source.
#[derive(Debug, Serialize)]
pub struct JsonDocument<'a> {
    pub source: &'a str,
    pub length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspicious_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<&'a AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> From<&'a ScanOutcome> for JsonDocument<'a> {
    fn from(outcome: &'a ScanOutcome) -> Self {
        match &outcome.result {
            Ok(result) => Self {
                source: &outcome.label,
                length: outcome.text_len,
                suspicious_count: Some(result.suspicious_count()),
                result: Some(result),
                error: None,
            },
            Err(e) => Self {
                source: &outcome.label,
                length: 0,
                suspicious_count: None,
                result: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Formats a batch report as a JSON array, one document per source.
///
/// # Errors
/// Returns error if serialization fails.
pub fn format_json(report: &ScanReport) -> serde_json::Result<String> {
    let docs: Vec<JsonDocument> = report.outcomes.iter().map(JsonDocument::from).collect();
    serde_json::to_string_pretty(&docs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ScanEngine;
    use crate::input::Source;

    #[test]
    fn test_json_shape() {
        let report = ScanEngine::scan(&[Source::Text("A\u{7}B".into())]);
        let json = format_json(&report).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        let doc = &v[0];
        assert_eq!(doc["source"], "Pasted Text");
        assert_eq!(doc["length"], 3);
        assert_eq!(doc["suspicious_count"], 1);
        assert_eq!(doc["result"]["suspicious"][0]["position"], 1);
        assert_eq!(doc["result"]["frequencies"][0]["verdict"], "suspicious");
        assert_eq!(doc["result"]["annotated"][1]["kind"], "suspicious");
        assert!(doc.get("error").is_none());
    }

    #[test]
    fn test_json_error_document() {
        let report = ScanEngine::scan(&[Source::Text(String::new())]);
        let v: serde_json::Value = serde_json::from_str(&format_json(&report).unwrap()).unwrap();
        assert_eq!(v[0]["error"], "No text to analyze");
        assert!(v[0].get("result").is_none());
    }
}
