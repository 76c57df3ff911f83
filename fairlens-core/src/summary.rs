//! Pass-rate summaries over finished samples.

use crate::sample::Sample;
use serde::{Deserialize, Serialize};

/// Pass/fail tally for one test type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSummary {
    pub test_type: String,
    pub pass_count: usize,
    pub fail_count: usize,
    pub pass_rate: f64,
    pub minimum_pass_rate: f64,
    pub pass: bool,
}

/// Group samples by test type (first-seen order) and compare each group's
/// pass rate with `min_pass_rate`.
pub fn summarize_samples(samples: &[Sample], min_pass_rate: f64) -> Vec<TestSummary> {
    let mut summaries: Vec<TestSummary> = Vec::new();
    for sample in samples {
        let idx = match summaries.iter().position(|s| s.test_type == sample.test_type) {
            Some(idx) => idx,
            None => {
                summaries.push(TestSummary {
                    test_type: sample.test_type.clone(),
                    pass_count: 0,
                    fail_count: 0,
                    pass_rate: 0.0,
                    minimum_pass_rate: min_pass_rate,
                    pass: false,
                });
                summaries.len() - 1
            }
        };
        if sample.is_pass() {
            summaries[idx].pass_count += 1;
        } else {
            summaries[idx].fail_count += 1;
        }
    }

    for summary in &mut summaries {
        let total = summary.pass_count + summary.fail_count;
        summary.pass_rate = if total == 0 {
            0.0
        } else {
            summary.pass_count as f64 / total as f64
        };
        summary.pass = summary.pass_rate >= min_pass_rate;
    }
    summaries
}

/// Render summaries as a Markdown table.
pub fn summary_to_markdown(summaries: &[TestSummary]) -> String {
    let mut md = String::new();
    md.push_str("| Test Type | Pass | Fail | Pass Rate | Minimum | Result |\n");
    md.push_str("|-----------|------|------|-----------|---------|--------|\n");
    for s in summaries {
        md.push_str(&format!(
            "| {} | {} | {} | {:.0}% | {:.0}% | {} |\n",
            s.test_type,
            s.pass_count,
            s.fail_count,
            s.pass_rate * 100.0,
            s.minimum_pass_rate * 100.0,
            if s.pass { "PASS" } else { "FAIL" }
        ));
    }
    md
}
