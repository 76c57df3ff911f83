//! Configuration for fairlens runs.
//!
//! Uses `figment` for layered configuration: defaults -> user config ->
//! workspace config -> environment -> explicit overrides.

use crate::error::HarnessError;
use crate::perturbation::PerturbationCatalog;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Top-level harness configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Perturbation catalog settings.
    #[serde(default)]
    pub perturbations: PerturbationConfig,
    /// Retrieval evaluation settings.
    #[serde(default)]
    pub evaluation: EvaluationConfig,
    /// Representation test settings.
    #[serde(default)]
    pub representation: RepresentationConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Perturbation catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerturbationConfig {
    /// Active perturbation identifiers, in run order.
    #[serde(default = "default_active_perturbations")]
    pub active: Vec<String>,
    /// Seed for randomized transforms.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Chance that a text receives a keyboard typo (0.0-1.0).
    #[serde(default = "default_typo_probability")]
    pub typo_probability: f64,
    /// Chance that a word receives an OCR confusion (0.0-1.0).
    #[serde(default = "default_ocr_probability")]
    pub ocr_probability: f64,
}

impl Default for PerturbationConfig {
    fn default() -> Self {
        Self {
            active: default_active_perturbations(),
            seed: default_seed(),
            typo_probability: default_typo_probability(),
            ocr_probability: default_ocr_probability(),
        }
    }
}

fn default_active_perturbations() -> Vec<String> {
    vec!["uppercase".into(), "lowercase".into(), "add_typo".into()]
}

fn default_seed() -> u64 {
    42
}

fn default_typo_probability() -> f64 {
    1.0
}

fn default_ocr_probability() -> f64 {
    0.3
}

/// What happens to a batch when one retrieval call fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// The first failure aborts the whole batch.
    #[default]
    AbortBatch,
    /// Each failure is recorded and the rest of the batch completes.
    Isolate,
}

/// Retrieval evaluation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Maximum concurrent retrieval calls.
    #[serde(default = "default_workers")]
    pub workers: usize,
    #[serde(default)]
    pub failure_policy: FailurePolicy,
    /// Per-query timeout in seconds. Unset means calls may wait indefinitely.
    #[serde(default)]
    pub query_timeout_secs: Option<u64>,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            failure_policy: FailurePolicy::default(),
            query_timeout_secs: None,
        }
    }
}

fn default_workers() -> usize {
    2
}

/// Representation test configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepresentationConfig {
    /// Test identifier -> params (`{ min_count = ... }` or `{ min_proportion = ... }`).
    #[serde(default)]
    pub tests: BTreeMap<String, serde_json::Value>,
    /// Fraction of samples per test that must pass (0.0-1.0).
    #[serde(default = "default_min_pass_rate")]
    pub min_pass_rate: f64,
}

impl Default for RepresentationConfig {
    fn default() -> Self {
        Self {
            tests: BTreeMap::new(),
            min_pass_rate: default_min_pass_rate(),
        }
    }
}

fn default_min_pass_rate() -> f64 {
    1.0
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive for stderr output.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines on stderr instead of human-readable output.
    #[serde(default)]
    pub json: bool,
    /// Directory for daily-rotated JSON log files.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            log_dir: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl HarnessConfig {
    /// Check ranges and catalog membership. Runs before any model call.
    pub fn validate(&self, catalog: &PerturbationCatalog) -> Result<(), HarnessError> {
        if self.evaluation.workers == 0 {
            return Err(HarnessError::config("evaluation.workers must be at least 1"));
        }
        for (name, value) in [
            ("perturbations.typo_probability", self.perturbations.typo_probability),
            ("perturbations.ocr_probability", self.perturbations.ocr_probability),
            ("representation.min_pass_rate", self.representation.min_pass_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(HarnessError::config(format!(
                    "{name} must be within 0.0-1.0, got {value}"
                )));
            }
        }
        for id in &self.perturbations.active {
            catalog.get(id)?;
        }
        Ok(())
    }
}

/// Load configuration from layered sources.
///
/// Priority (highest to lowest):
/// 1. Explicit overrides (passed as argument)
/// 2. Environment variables (prefixed with `FAIRLENS_`)
/// 3. Workspace-local config (`.fairlens/config.toml`)
/// 4. User config (`~/.config/fairlens/config.toml`)
/// 5. Built-in defaults
pub fn load_config(
    workspace: Option<&Path>,
    overrides: Option<&HarnessConfig>,
) -> Result<HarnessConfig, Box<figment::Error>> {
    let mut figment = Figment::from(Serialized::defaults(HarnessConfig::default()));

    if let Some(config_dir) = directories::ProjectDirs::from("dev", "fairlens", "fairlens") {
        let user_config = config_dir.config_dir().join("config.toml");
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }
    }

    if let Some(ws) = workspace {
        let ws_config = ws.join(".fairlens").join("config.toml");
        if ws_config.exists() {
            figment = figment.merge(Toml::file(&ws_config));
        }
    }

    // FAIRLENS_EVALUATION__WORKERS, FAIRLENS_PERTURBATIONS__SEED, etc.
    figment = figment.merge(Env::prefixed("FAIRLENS_").split("__"));

    if let Some(overrides) = overrides {
        figment = figment.merge(Serialized::defaults(overrides));
    }

    figment.extract().map_err(Box::new)
}
