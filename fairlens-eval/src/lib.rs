//! # fairlens-eval: retrieval robustness evaluation
//!
//! Runs a retrieval model against original and perturbed queries under
//! bounded concurrency and aggregates hit rate and MRR per test type.
//!
//! - **Collaborators:** [`Retriever`] and [`RetrievalEvaluator`] traits,
//!   implemented outside this crate (a metric-based evaluator is provided)
//! - **Orchestration:** [`EvaluationOrchestrator`] with a semaphore-gated
//!   worker pool, opt-in timeouts and failure isolation
//! - **Reporting:** [`AggregatedReport`] accumulator and the
//!   [`RetrieverSummary`] table

pub mod dataset;
pub mod evaluator;
pub mod metrics;
pub mod orchestrator;
pub mod report;
pub mod retriever;
pub mod summary;

pub use dataset::RetrievalDataset;
pub use evaluator::{EvalResult, MetricRetrievalEvaluator, RetrievalEvaluator};
pub use orchestrator::{EvaluationOrchestrator, QueryState, QueryTask, ORIGINAL_QUERY};
pub use report::{AggregatedReport, BatchResults, FailedQuery, TestTypeResults};
pub use retriever::{Node, RetrievalMode, Retriever};
pub use summary::{RetrieverSummary, SummaryRow};
