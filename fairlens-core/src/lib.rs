//! # fairlens-core: bias and robustness test primitives
//!
//! This crate holds the parts of the fairlens harness that do not talk to a
//! model: the gazetteer tables, the representation analyzer, the
//! perturbation catalog, layered configuration and tracing setup.
//!
//! Retrieval evaluation lives in `fairlens-eval`.

// Foundation
pub mod config;
pub mod error;
pub mod telemetry;

// Data model
pub mod dataset;
pub mod sample;

// Bias tests
pub mod gazetteer;
pub mod representation;
pub mod summary;

// Robustness tests
pub mod perturbation;

// Re-exports
pub use config::{
    load_config, EvaluationConfig, FailurePolicy, HarnessConfig, LoggingConfig,
    PerturbationConfig, RepresentationConfig,
};
pub use dataset::{DatasetSample, NerPrediction, TaskKind};
pub use error::HarnessError;
pub use gazetteer::{Dimension, Gazetteer};
pub use perturbation::{PerturbationCatalog, TestConfiguration, TextTransform};
pub use representation::{RepresentationAnalyzer, RepresentationCount, RepresentationTest};
pub use sample::{Sample, SampleState, ScoreOutput};
pub use summary::{summarize_samples, summary_to_markdown, TestSummary};
pub use telemetry::init_tracing;
