//! Retriever collaborator interface.

use async_trait::async_trait;
use fairlens_core::HarnessError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A retrieved document reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub node_id: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub score: Option<f32>,
}

impl Node {
    pub fn new(node_id: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            text: None,
            score: None,
        }
    }

    pub fn with_score(mut self, score: f32) -> Self {
        self.score = Some(score);
        self
    }
}

/// What kind of content a dataset retrieves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetrievalMode {
    #[default]
    Text,
    Image,
}

impl fmt::Display for RetrievalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Image => f.write_str("image"),
        }
    }
}

impl FromStr for RetrievalMode {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            other => Err(HarnessError::config(format!(
                "unknown retrieval mode '{other}' (expected 'text' or 'image')"
            ))),
        }
    }
}

/// A retrieval model. Implementations are external to the harness.
#[async_trait]
pub trait Retriever: Send + Sync {
    /// Ranked nodes for a query, best first.
    async fn retrieve(&self, query: &str) -> Result<Vec<Node>, HarnessError>;

    /// Display name used in reports.
    fn name(&self) -> &str;
}
