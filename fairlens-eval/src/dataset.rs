//! Retrieval evaluation datasets.

use crate::retriever::RetrievalMode;
use fairlens_core::HarnessError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// On-disk JSON layout.
#[derive(Debug, Deserialize, Serialize)]
struct RawDataset {
    queries: serde_json::Map<String, serde_json::Value>,
    relevant_docs: HashMap<String, Vec<String>>,
    #[serde(default)]
    mode: RetrievalMode,
}

/// Queries with their relevant document ids.
///
/// Every query is guaranteed to have a relevant-docs entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievalDataset {
    queries: Vec<(String, String)>,
    relevant_docs: HashMap<String, Vec<String>>,
    mode: RetrievalMode,
}

impl RetrievalDataset {
    /// Build from `(query_id, query_text)` rows in submission order.
    pub fn new(
        queries: Vec<(String, String)>,
        relevant_docs: HashMap<String, Vec<String>>,
        mode: RetrievalMode,
    ) -> Result<Self, HarnessError> {
        for (id, _) in &queries {
            if !relevant_docs.contains_key(id) {
                return Err(HarnessError::dataset(format!(
                    "query '{id}' has no relevant_docs entry"
                )));
            }
        }
        Ok(Self {
            queries,
            relevant_docs,
            mode,
        })
    }

    /// Parse `{"queries": {id: text}, "relevant_docs": {id: [doc ids]}, "mode": "text"}`.
    /// Queries keep the order they appear in the file.
    pub fn from_json_str(json: &str) -> Result<Self, HarnessError> {
        let raw: RawDataset = serde_json::from_str(json)?;
        let queries = raw
            .queries
            .into_iter()
            .map(|(id, text)| match text {
                serde_json::Value::String(text) => Ok((id, text)),
                other => Err(HarnessError::dataset(format!(
                    "query '{id}' must be a string, got {other}"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(queries, raw.relevant_docs, raw.mode)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn mode(&self) -> RetrievalMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    pub fn query_texts(&self) -> Vec<String> {
        self.queries.iter().map(|(_, text)| text.clone()).collect()
    }

    /// `(query_id, query_text, expected_ids)` in submission order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &[String])> {
        self.queries.iter().map(|(id, text)| {
            let expected = self
                .relevant_docs
                .get(id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            (id.as_str(), text.as_str(), expected)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "queries": { "q2": "where is the report", "q1": "who wrote it" },
        "relevant_docs": { "q1": ["d1"], "q2": ["d2", "d3"] },
        "mode": "text"
    }"#;

    #[test]
    fn test_from_json() {
        let dataset = RetrievalDataset::from_json_str(JSON).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.mode(), RetrievalMode::Text);
        let rows: Vec<_> = dataset.iter().collect();
        assert_eq!(rows[0].0, "q2");
        assert_eq!(rows[0].2, &["d2".to_string(), "d3".to_string()]);
        assert_eq!(dataset.query_texts(), vec!["where is the report", "who wrote it"]);
    }

    #[test]
    fn test_json_queries_keep_file_order() {
        let json = r#"{
            "queries": { "q2": "b", "q10": "c", "q1": "a" },
            "relevant_docs": { "q1": ["d"], "q2": ["d"], "q10": ["d"] }
        }"#;
        let dataset = RetrievalDataset::from_json_str(json).unwrap();
        let ids: Vec<&str> = dataset.iter().map(|(id, _, _)| id).collect();
        assert_eq!(ids, vec!["q2", "q10", "q1"]);
    }

    #[test]
    fn test_non_string_query_is_rejected() {
        let json = r#"{ "queries": { "q1": 7 }, "relevant_docs": { "q1": [] } }"#;
        let err = RetrievalDataset::from_json_str(json).unwrap_err();
        assert!(matches!(err, HarnessError::Dataset(_)));
        assert!(err.to_string().contains("q1"));
    }

    #[test]
    fn test_missing_relevant_docs() {
        let json = r#"{ "queries": { "q1": "x" }, "relevant_docs": {} }"#;
        let err = RetrievalDataset::from_json_str(json).unwrap_err();
        assert!(matches!(err, HarnessError::Dataset(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        std::fs::write(&path, JSON).unwrap();
        let dataset = RetrievalDataset::from_json_file(&path).unwrap();
        assert!(!dataset.is_empty());

        let missing = RetrievalDataset::from_json_file(&dir.path().join("nope.json"));
        assert!(matches!(missing, Err(HarnessError::Io(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            RetrievalDataset::from_json_str("{"),
            Err(HarnessError::Serde(_))
        ));
    }
}
