//! Dataset samples analysed by representation tests.
//!
//! Each task kind decides which text feeds the gazetteer matcher. The
//! decision lives in one dispatch table, [`TEXT_EXTRACTORS`], with one pure
//! extractor per variant.

use serde::{Deserialize, Serialize};

/// Kind of NLP task a sample belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskKind {
    Classification,
    Ner,
    QuestionAnswering,
    Summarization,
}

/// A single token-level NER prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NerPrediction {
    pub word: String,
    /// BIO tag, e.g. `B-PER`, `I-LOC` or `O`.
    pub entity: String,
}

impl NerPrediction {
    pub fn new(word: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            entity: entity.into(),
        }
    }

    /// Tag with the BIO prefix removed. `O` stays `O`.
    pub fn base_tag(&self) -> &str {
        match self.entity.split_once('-') {
            Some((prefix, tag)) if matches!(prefix, "B" | "I") => tag,
            _ => &self.entity,
        }
    }
}

/// A dataset row, tagged by task kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "task", rename_all = "kebab-case")]
pub enum DatasetSample {
    Classification {
        text: String,
        labels: Vec<String>,
    },
    Ner {
        text: String,
        predictions: Vec<NerPrediction>,
    },
    QuestionAnswering {
        question: String,
        context: String,
        /// The sample perturbs its context rather than its question.
        #[serde(default)]
        perturbs_context: bool,
    },
    Summarization {
        text: String,
    },
}

type Extractor = fn(&DatasetSample) -> Vec<String>;

/// Text extractor per task kind.
pub const TEXT_EXTRACTORS: [(TaskKind, Extractor); 4] = [
    (TaskKind::Classification, extract_classification),
    (TaskKind::Ner, extract_ner),
    (TaskKind::QuestionAnswering, extract_question_answering),
    (TaskKind::Summarization, extract_summarization),
];

fn whitespace_tokens(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

fn extract_classification(sample: &DatasetSample) -> Vec<String> {
    match sample {
        DatasetSample::Classification { text, .. } => whitespace_tokens(text),
        _ => Vec::new(),
    }
}

fn extract_ner(sample: &DatasetSample) -> Vec<String> {
    match sample {
        DatasetSample::Ner { predictions, .. } => {
            predictions.iter().map(|p| p.word.clone()).collect()
        }
        _ => Vec::new(),
    }
}

fn extract_question_answering(sample: &DatasetSample) -> Vec<String> {
    match sample {
        DatasetSample::QuestionAnswering {
            question,
            context,
            perturbs_context,
        } => {
            if *perturbs_context {
                whitespace_tokens(context)
            } else {
                whitespace_tokens(question)
            }
        }
        _ => Vec::new(),
    }
}

fn extract_summarization(sample: &DatasetSample) -> Vec<String> {
    match sample {
        DatasetSample::Summarization { text } => whitespace_tokens(text),
        _ => Vec::new(),
    }
}

impl DatasetSample {
    pub fn task(&self) -> TaskKind {
        match self {
            Self::Classification { .. } => TaskKind::Classification,
            Self::Ner { .. } => TaskKind::Ner,
            Self::QuestionAnswering { .. } => TaskKind::QuestionAnswering,
            Self::Summarization { .. } => TaskKind::Summarization,
        }
    }

    /// Tokens fed to the gazetteer matcher.
    pub fn extract_text(&self) -> Vec<String> {
        let kind = self.task();
        TEXT_EXTRACTORS
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, extract)| extract(self))
            .unwrap_or_default()
    }

    /// Labels contributing to label representation. Free-text tasks have none.
    pub fn labels(&self) -> Vec<String> {
        match self {
            Self::Classification { labels, .. } => labels.clone(),
            Self::Ner { predictions, .. } => predictions
                .iter()
                .map(|p| p.base_tag().to_string())
                .collect(),
            Self::QuestionAnswering { .. } | Self::Summarization { .. } => Vec::new(),
        }
    }
}
