//! Aggregated evaluation results for one run.

use crate::evaluator::EvalResult;
use chrono::{DateTime, Utc};
use fairlens_core::HarnessError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Results for one test type, in submission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestTypeResults {
    pub test_type: String,
    pub results: Vec<EvalResult>,
}

/// A query that failed under the isolating failure policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedQuery {
    pub test_type: String,
    pub query: String,
    pub error: String,
}

/// One batch's grouped output, ready to be absorbed into a report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchResults {
    pub results: Vec<TestTypeResults>,
    pub failures: Vec<FailedQuery>,
}

impl BatchResults {
    fn test_types(&self) -> BTreeSet<&str> {
        self.results.iter().map(|g| g.test_type.as_str()).collect()
    }
}

/// Append-only accumulator owned by the caller of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatedReport {
    pub run_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub results: Vec<TestTypeResults>,
    pub failures: Vec<FailedQuery>,
}

impl Default for AggregatedReport {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregatedReport {
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            created_at: Utc::now(),
            results: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty() && self.failures.is_empty()
    }

    /// Test types in first-seen order.
    pub fn test_types(&self) -> Vec<&str> {
        self.results.iter().map(|g| g.test_type.as_str()).collect()
    }

    pub fn get(&self, test_type: &str) -> Option<&[EvalResult]> {
        self.results
            .iter()
            .find(|g| g.test_type == test_type)
            .map(|g| g.results.as_slice())
    }

    pub fn total_results(&self) -> usize {
        self.results.iter().map(|g| g.results.len()).sum()
    }

    /// Extend each test type's list with a batch's results.
    ///
    /// A report that already holds results only accepts batches with the
    /// same test-type key set; the report is left untouched on mismatch.
    pub fn absorb(&mut self, batch: BatchResults) -> Result<(), HarnessError> {
        if !self.results.is_empty() {
            let current: BTreeSet<&str> =
                self.results.iter().map(|g| g.test_type.as_str()).collect();
            let incoming = batch.test_types();
            if current != incoming {
                return Err(HarnessError::aggregation(format!(
                    "batch test types {incoming:?} do not match report test types {current:?}"
                )));
            }
        }

        for group in batch.results {
            match self
                .results
                .iter_mut()
                .find(|g| g.test_type == group.test_type)
            {
                Some(existing) => existing.results.extend(group.results),
                None => self.results.push(group),
            }
        }
        self.failures.extend(batch.failures);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn result(query: &str) -> EvalResult {
        EvalResult {
            query: query.into(),
            expected_ids: vec!["d1".into()],
            retrieved_ids: vec!["d1".into()],
            metric_vals: BTreeMap::new(),
        }
    }

    fn batch(types: &[&str], queries: &[&str]) -> BatchResults {
        BatchResults {
            results: types
                .iter()
                .map(|t| TestTypeResults {
                    test_type: t.to_string(),
                    results: queries.iter().map(|q| result(q)).collect(),
                })
                .collect(),
            failures: Vec::new(),
        }
    }

    #[test]
    fn test_absorb_extends() {
        let mut report = AggregatedReport::new();
        assert!(report.is_empty());
        report.absorb(batch(&["original_query", "uppercase"], &["a", "b"])).unwrap();
        report.absorb(batch(&["uppercase", "original_query"], &["c"])).unwrap();

        assert_eq!(report.test_types(), vec!["original_query", "uppercase"]);
        let queries: Vec<&str> = report
            .get("uppercase")
            .unwrap()
            .iter()
            .map(|r| r.query.as_str())
            .collect();
        assert_eq!(queries, vec!["a", "b", "c"]);
        assert_eq!(report.total_results(), 6);
    }

    #[test]
    fn test_absorb_key_mismatch() {
        let mut report = AggregatedReport::new();
        report.absorb(batch(&["original_query", "uppercase"], &["a"])).unwrap();
        let err = report
            .absorb(batch(&["original_query", "lowercase"], &["b"]))
            .unwrap_err();
        assert!(matches!(err, HarnessError::Aggregation(_)));
        assert_eq!(report.total_results(), 2);
        assert!(report.get("lowercase").is_none());
    }

    #[test]
    fn test_fresh_reports_have_distinct_ids() {
        assert_ne!(AggregatedReport::new().run_id, AggregatedReport::new().run_id);
    }
}
