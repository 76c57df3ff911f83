//! Report builder: mean hit rate and MRR per test type.

use crate::evaluator::EvalResult;
use crate::metrics::mean;
use crate::report::AggregatedReport;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the final summary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub retriever_model: String,
    pub test_type: String,
    pub hit_rate: f64,
    pub mrr: f64,
}

/// Per-test-type means for one retriever.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrieverSummary {
    pub run_id: Uuid,
    pub rows: Vec<SummaryRow>,
    pub failed_queries: usize,
}

impl RetrieverSummary {
    /// Reduce each test type's results to mean hit rate and MRR. Empty
    /// result lists score 0.
    pub fn from_report(retriever_name: &str, report: &AggregatedReport) -> Self {
        let rows = report
            .results
            .iter()
            .map(|group| SummaryRow {
                retriever_model: retriever_name.to_string(),
                test_type: group.test_type.clone(),
                hit_rate: mean(&collect(&group.results, EvalResult::hit_rate)),
                mrr: mean(&collect(&group.results, EvalResult::mrr)),
            })
            .collect();
        Self {
            run_id: report.run_id,
            rows,
            failed_queries: report.failures.len(),
        }
    }

    pub fn row(&self, test_type: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.test_type == test_type)
    }

    /// Render as a Markdown table.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        md.push_str("| Retriever Model | Test Type | Hit Rate | MRR |\n");
        md.push_str("|-----------------|-----------|----------|-----|\n");
        for row in &self.rows {
            md.push_str(&format!(
                "| {} | {} | {:.4} | {:.4} |\n",
                row.retriever_model, row.test_type, row.hit_rate, row.mrr
            ));
        }
        if self.failed_queries > 0 {
            md.push_str(&format!(
                "\n{} queries failed and are excluded from the means.\n",
                self.failed_queries
            ));
        }
        md
    }
}

fn collect(results: &[EvalResult], metric: fn(&EvalResult) -> f64) -> Vec<f64> {
    results.iter().map(metric).collect()
}
