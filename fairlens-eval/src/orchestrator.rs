//! Evaluation orchestrator.
//!
//! Runs every query once unperturbed (`original_query`) and once per active
//! perturbation, gating evaluator calls with a counting semaphore. All calls
//! of a batch are driven concurrently on the caller's task; results are
//! grouped per test type in submission order.

use crate::dataset::RetrievalDataset;
use crate::evaluator::{EvalResult, RetrievalEvaluator};
use crate::report::{AggregatedReport, BatchResults, FailedQuery, TestTypeResults};
use crate::retriever::RetrievalMode;
use fairlens_core::config::{EvaluationConfig, FailurePolicy, HarnessConfig};
use fairlens_core::perturbation::{PerturbationCatalog, TestConfiguration};
use fairlens_core::HarnessError;
use futures::future::{join_all, try_join_all};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

/// Test type of the unperturbed query.
pub const ORIGINAL_QUERY: &str = "original_query";

/// Lifecycle of one scheduled evaluator call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryState {
    Queued,
    Running,
    Done,
}

/// One evaluator call: a query text under one test type.
#[derive(Debug, Clone)]
pub struct QueryTask {
    pub test_type: String,
    pub query: String,
    pub expected_ids: Vec<String>,
    state: QueryState,
}

impl QueryTask {
    fn new(test_type: &str, query: String, expected_ids: &[String]) -> Self {
        Self {
            test_type: test_type.to_string(),
            query,
            expected_ids: expected_ids.to_vec(),
            state: QueryState::Queued,
        }
    }

    pub fn state(&self) -> QueryState {
        self.state
    }

    fn advance(&mut self, next: QueryState) {
        debug!(
            test_type = %self.test_type,
            query = %self.query,
            from = ?self.state,
            to = ?next,
            "Query state change"
        );
        self.state = next;
    }
}

struct TaskOutcome {
    test_type: String,
    query: String,
    result: Result<EvalResult, HarnessError>,
}

/// Runs a retrieval evaluator over original and perturbed queries.
pub struct EvaluationOrchestrator<E> {
    evaluator: E,
    catalog: Arc<PerturbationCatalog>,
    perturbations: TestConfiguration,
    workers: usize,
    failure_policy: FailurePolicy,
    query_timeout: Option<Duration>,
}

impl<E: RetrievalEvaluator> EvaluationOrchestrator<E> {
    /// Create an orchestrator with the default perturbations
    /// (uppercase, lowercase, add_typo).
    pub fn new(
        evaluator: E,
        catalog: Arc<PerturbationCatalog>,
        config: &EvaluationConfig,
    ) -> Result<Self, HarnessError> {
        if config.workers == 0 {
            return Err(HarnessError::config("evaluation.workers must be at least 1"));
        }
        let perturbations = TestConfiguration::default_for(&catalog)?;
        Ok(Self {
            evaluator,
            catalog,
            perturbations,
            workers: config.workers,
            failure_policy: config.failure_policy,
            query_timeout: config.query_timeout_secs.map(Duration::from_secs),
        })
    }

    /// Build the catalog and active perturbation list from a full
    /// configuration. Validation runs before anything is evaluated.
    pub fn from_config(evaluator: E, config: &HarnessConfig) -> Result<Self, HarnessError> {
        let catalog = Arc::new(PerturbationCatalog::builtin(&config.perturbations));
        config.validate(&catalog)?;
        let mut orchestrator = Self::new(evaluator, catalog, &config.evaluation)?;
        orchestrator.set_perturbations(&config.perturbations.active)?;
        Ok(orchestrator)
    }

    /// Validate every name against the catalog, then replace the active
    /// list. On error the previous list is kept.
    pub fn set_perturbations<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), HarnessError> {
        self.perturbations = TestConfiguration::new(&self.catalog, names)?;
        info!(perturbations = ?self.perturbations.ids(), "Active perturbations set");
        Ok(())
    }

    pub fn perturbations(&self) -> &[String] {
        self.perturbations.ids()
    }

    pub fn retriever_name(&self) -> &str {
        self.evaluator.retriever_name()
    }

    /// Test types this orchestrator produces, in report order.
    pub fn test_types(&self) -> Vec<String> {
        std::iter::once(ORIGINAL_QUERY.to_string())
            .chain(self.perturbations.iter().map(str::to_string))
            .collect()
    }

    /// Evaluate a dataset into a fresh report.
    pub async fn evaluate_dataset(
        &self,
        dataset: &RetrievalDataset,
    ) -> Result<AggregatedReport, HarnessError> {
        let mut report = AggregatedReport::new();
        self.evaluate_into(dataset, &mut report).await?;
        Ok(report)
    }

    /// Evaluate a dataset and extend `report` with the results.
    ///
    /// Under [`FailurePolicy::AbortBatch`] the first failing call aborts the
    /// batch and `report` is left untouched.
    pub async fn evaluate_into(
        &self,
        dataset: &RetrievalDataset,
        report: &mut AggregatedReport,
    ) -> Result<(), HarnessError> {
        let start = Instant::now();
        let tasks = self.build_tasks(dataset)?;
        let test_types = self.test_types();
        let mode = dataset.mode();
        let total = tasks.len();
        info!(
            run_id = %report.run_id,
            queries = dataset.len(),
            test_types = test_types.len(),
            calls = total,
            workers = self.workers,
            "Starting evaluation batch"
        );

        let semaphore = Semaphore::new(self.workers);
        let calls = tasks
            .into_iter()
            .map(|task| self.run_task(task, &semaphore, mode));

        let mut batch = BatchResults {
            results: test_types
                .iter()
                .map(|t| TestTypeResults {
                    test_type: t.clone(),
                    results: Vec::new(),
                })
                .collect(),
            failures: Vec::new(),
        };

        match self.failure_policy {
            FailurePolicy::AbortBatch => {
                let outcomes = try_join_all(calls.map(|call| async move {
                    let outcome = call.await;
                    outcome.result.map(|result| (outcome.test_type, result))
                }))
                .await
                .inspect_err(|e| warn!(error = %e, "Evaluation batch aborted"))?;
                for (test_type, result) in outcomes {
                    push_result(&mut batch, &test_type, result);
                }
            }
            FailurePolicy::Isolate => {
                for outcome in join_all(calls).await {
                    match outcome.result {
                        Ok(result) => push_result(&mut batch, &outcome.test_type, result),
                        Err(e) => {
                            warn!(
                                test_type = %outcome.test_type,
                                query = %outcome.query,
                                error = %e,
                                "Query failed"
                            );
                            batch.failures.push(FailedQuery {
                                test_type: outcome.test_type,
                                query: outcome.query,
                                error: e.to_string(),
                            });
                        }
                    }
                }
            }
        }

        let failures = batch.failures.len();
        report.absorb(batch)?;
        info!(
            run_id = %report.run_id,
            calls = total,
            failures,
            duration_ms = start.elapsed().as_millis() as u64,
            "Evaluation batch complete"
        );
        Ok(())
    }

    /// Perturb every query up front so a failing transform stops the batch
    /// before any evaluator call.
    fn build_tasks(&self, dataset: &RetrievalDataset) -> Result<Vec<QueryTask>, HarnessError> {
        let originals = dataset.query_texts();
        let expected: Vec<&[String]> = dataset.iter().map(|(_, _, ids)| ids).collect();

        let mut tasks = Vec::with_capacity(originals.len() * (self.perturbations.len() + 1));
        for test_type in self.test_types() {
            let texts = if test_type == ORIGINAL_QUERY {
                originals.clone()
            } else {
                self.catalog.apply(&test_type, &originals)?
            };
            if texts.len() != originals.len() {
                return Err(HarnessError::config(format!(
                    "perturbation '{test_type}' returned {} texts for {} queries",
                    texts.len(),
                    originals.len()
                )));
            }
            for (text, ids) in texts.into_iter().zip(&expected) {
                tasks.push(QueryTask::new(&test_type, text, ids));
            }
        }
        Ok(tasks)
    }

    async fn run_task(
        &self,
        mut task: QueryTask,
        semaphore: &Semaphore,
        mode: RetrievalMode,
    ) -> TaskOutcome {
        let result = match semaphore.acquire().await {
            Ok(_permit) => {
                task.advance(QueryState::Running);
                self.call_evaluator(&task, mode).await
            }
            Err(_) => Err(HarnessError::retrieval("worker semaphore closed")),
        };
        task.advance(QueryState::Done);
        TaskOutcome {
            test_type: task.test_type,
            query: task.query,
            result,
        }
    }

    async fn call_evaluator(
        &self,
        task: &QueryTask,
        mode: RetrievalMode,
    ) -> Result<EvalResult, HarnessError> {
        let call = self
            .evaluator
            .evaluate(&task.query, &task.expected_ids, mode);
        match self.query_timeout {
            Some(limit) => tokio::time::timeout(limit, call).await.map_err(|_| {
                HarnessError::Timeout(format!(
                    "query '{}' ({}) exceeded {}s",
                    task.query,
                    task.test_type,
                    limit.as_secs()
                ))
            })?,
            None => call.await,
        }
    }
}

fn push_result(batch: &mut BatchResults, test_type: &str, result: EvalResult) {
    if let Some(group) = batch.results.iter_mut().find(|g| g.test_type == test_type) {
        group.results.push(result);
    }
}
