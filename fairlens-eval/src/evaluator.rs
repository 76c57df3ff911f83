//! Retrieval evaluator collaborator and its metric-based implementation.

use crate::metrics::{hit_rate, reciprocal_rank};
use crate::retriever::{RetrievalMode, Retriever};
use async_trait::async_trait;
use fairlens_core::HarnessError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const HIT_RATE: &str = "hit_rate";
pub const MRR: &str = "mrr";

/// Outcome of one retrieval query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalResult {
    pub query: String,
    pub expected_ids: Vec<String>,
    pub retrieved_ids: Vec<String>,
    pub metric_vals: BTreeMap<String, f64>,
}

impl EvalResult {
    pub fn hit_rate(&self) -> f64 {
        self.metric_vals.get(HIT_RATE).copied().unwrap_or(0.0)
    }

    pub fn mrr(&self) -> f64 {
        self.metric_vals.get(MRR).copied().unwrap_or(0.0)
    }
}

/// Scores one query against its relevant documents.
#[async_trait]
pub trait RetrievalEvaluator: Send + Sync {
    async fn evaluate(
        &self,
        query: &str,
        expected_ids: &[String],
        mode: RetrievalMode,
    ) -> Result<EvalResult, HarnessError>;

    /// Name of the retriever being scored.
    fn retriever_name(&self) -> &str;
}

/// Runs a [`Retriever`] and scores its ranking with hit rate and MRR.
pub struct MetricRetrievalEvaluator<R> {
    retriever: R,
}

impl<R: Retriever> MetricRetrievalEvaluator<R> {
    pub fn new(retriever: R) -> Self {
        Self { retriever }
    }

    pub fn retriever(&self) -> &R {
        &self.retriever
    }
}

#[async_trait]
impl<R: Retriever> RetrievalEvaluator for MetricRetrievalEvaluator<R> {
    async fn evaluate(
        &self,
        query: &str,
        expected_ids: &[String],
        _mode: RetrievalMode,
    ) -> Result<EvalResult, HarnessError> {
        let nodes = self.retriever.retrieve(query).await?;
        let retrieved_ids: Vec<String> = nodes.into_iter().map(|n| n.node_id).collect();

        let mut metric_vals = BTreeMap::new();
        metric_vals.insert(HIT_RATE.to_string(), hit_rate(expected_ids, &retrieved_ids));
        metric_vals.insert(MRR.to_string(), reciprocal_rank(expected_ids, &retrieved_ids));

        Ok(EvalResult {
            query: query.to_string(),
            expected_ids: expected_ids.to_vec(),
            retrieved_ids,
            metric_vals,
        })
    }

    fn retriever_name(&self) -> &str {
        self.retriever.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retriever::Node;

    struct FixedRetriever(Vec<&'static str>);

    #[async_trait]
    impl Retriever for FixedRetriever {
        async fn retrieve(&self, _query: &str) -> Result<Vec<Node>, HarnessError> {
            Ok(self.0.iter().map(|id| Node::new(*id)).collect())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[tokio::test]
    async fn test_metric_evaluator() {
        let evaluator = MetricRetrievalEvaluator::new(FixedRetriever(vec!["d3", "d1", "d2"]));
        let result = evaluator
            .evaluate("query", &["d1".to_string()], RetrievalMode::Text)
            .await
            .unwrap();
        assert_eq!(result.retrieved_ids, vec!["d3", "d1", "d2"]);
        assert_eq!(result.hit_rate(), 1.0);
        assert_eq!(result.mrr(), 0.5);
        assert_eq!(evaluator.retriever_name(), "fixed");
    }

    #[test]
    fn test_miss_with_block_on() {
        let evaluator = MetricRetrievalEvaluator::new(FixedRetriever(vec!["d9"]));
        let result = tokio_test::block_on(evaluator.evaluate(
            "query",
            &["d1".to_string()],
            RetrievalMode::Text,
        ))
        .unwrap();
        assert_eq!(result.hit_rate(), 0.0);
        assert_eq!(result.mrr(), 0.0);
    }

    #[test]
    fn test_missing_metrics_read_as_zero() {
        let result = EvalResult {
            query: "q".into(),
            expected_ids: vec![],
            retrieved_ids: vec![],
            metric_vals: BTreeMap::new(),
        };
        assert_eq!(result.hit_rate(), 0.0);
        assert_eq!(result.mrr(), 0.0);
    }
}
