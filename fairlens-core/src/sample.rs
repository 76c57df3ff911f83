//! Test samples produced by representation and robustness tests.

use serde::{Deserialize, Serialize};

/// A single numeric score, used uniformly for counts and proportions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreOutput {
    pub score: f64,
}

impl ScoreOutput {
    pub fn new(score: f64) -> Self {
        Self { score }
    }
}

impl From<f64> for ScoreOutput {
    fn from(score: f64) -> Self {
        Self { score }
    }
}

impl From<usize> for ScoreOutput {
    fn from(count: usize) -> Self {
        Self {
            score: count as f64,
        }
    }
}

/// Lifecycle of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleState {
    Created,
    Done,
}

/// One test case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub original: Option<String>,
    pub perturbed: Option<String>,
    /// `"representation"` or a robustness test category.
    pub category: String,
    pub test_type: String,
    pub test_case: Option<String>,
    pub expected_results: Option<ScoreOutput>,
    pub actual_results: Option<ScoreOutput>,
    pub state: SampleState,
}

impl Sample {
    /// A pending sample with no results attached.
    pub fn new(category: impl Into<String>, test_type: impl Into<String>) -> Self {
        Self {
            original: None,
            perturbed: None,
            category: category.into(),
            test_type: test_type.into(),
            test_case: None,
            expected_results: None,
            actual_results: None,
            state: SampleState::Created,
        }
    }

    /// A finished representation sample for one category.
    pub fn representation(
        test_type: &str,
        test_case: &str,
        expected: impl Into<ScoreOutput>,
        actual: impl Into<ScoreOutput>,
    ) -> Self {
        let mut sample = Self::new("representation", test_type);
        sample.test_case = Some(test_case.to_string());
        sample.attach_results(expected.into(), actual.into());
        sample
    }

    pub fn with_texts(mut self, original: impl Into<String>, perturbed: Option<String>) -> Self {
        self.original = Some(original.into());
        self.perturbed = perturbed;
        self
    }

    /// Attach results and mark the sample done. Only the first call has an effect.
    pub fn attach_results(&mut self, expected: ScoreOutput, actual: ScoreOutput) {
        if self.state == SampleState::Done {
            return;
        }
        self.expected_results = Some(expected);
        self.actual_results = Some(actual);
        self.state = SampleState::Done;
    }

    /// Minimum-score semantics: passes when the observed value reaches the baseline.
    pub fn is_pass(&self) -> bool {
        match (&self.expected_results, &self.actual_results) {
            (Some(expected), Some(actual)) => actual.score >= expected.score,
            _ => false,
        }
    }
}
