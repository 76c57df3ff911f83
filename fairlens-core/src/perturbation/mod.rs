//! Perturbation catalog: named text transforms used by robustness tests.
//!
//! Every transform maps a list of texts to a list of the same length.
//! Deterministic transforms ignore the RNG; randomized ones draw only from
//! it, so a catalog built with a fixed seed always produces the same output.

mod casing;
mod context;
mod entity;
mod lexicon;
mod numbers;
mod ocr;
mod pronoun;
mod punctuation;
mod spelling;
mod substitution;
mod typo;

pub use casing::{Lowercase, Titlecase, Uppercase};
pub use context::AddContext;
pub use entity::SwapEntities;
pub use numbers::{number_to_words, NumberToWord};
pub use ocr::AddOcrTypo;
pub use pronoun::{PronounSet, GENDER_PRONOUNS};
pub use punctuation::{AddPunctuation, StripAllPunctuation, StripPunctuation};
pub use substitution::WordSubstitution;
pub use typo::AddTypo;

use crate::config::PerturbationConfig;
use crate::error::HarnessError;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// A named text transform.
pub trait TextTransform: Send + Sync {
    /// Catalog identifier.
    fn id(&self) -> &'static str;

    /// Whether output depends on the RNG.
    fn is_randomized(&self) -> bool {
        false
    }

    fn transform(&self, texts: &[String], rng: &mut dyn RngCore) -> Vec<String>;
}

/// Registry of text transforms keyed by identifier.
pub struct PerturbationCatalog {
    seed: u64,
    transforms: BTreeMap<&'static str, Arc<dyn TextTransform>>,
}

impl PerturbationCatalog {
    /// A catalog with nothing registered.
    pub fn empty(seed: u64) -> Self {
        Self {
            seed,
            transforms: BTreeMap::new(),
        }
    }

    /// Every built-in transform.
    pub fn builtin(config: &PerturbationConfig) -> Self {
        let mut catalog = Self::empty(config.seed);
        let transforms: Vec<Arc<dyn TextTransform>> = vec![
            Arc::new(Uppercase),
            Arc::new(Lowercase),
            Arc::new(Titlecase),
            Arc::new(AddPunctuation),
            Arc::new(StripPunctuation),
            Arc::new(StripAllPunctuation),
            Arc::new(AddTypo::new(config.typo_probability)),
            Arc::new(AddOcrTypo::new(config.ocr_probability)),
            Arc::new(WordSubstitution::new(
                "american_to_british",
                spelling::AMERICAN_TO_BRITISH,
            )),
            Arc::new(WordSubstitution::inverse(
                "british_to_american",
                spelling::AMERICAN_TO_BRITISH,
            )),
            Arc::new(WordSubstitution::new("add_contraction", lexicon::CONTRACTIONS)),
            Arc::new(WordSubstitution::inverse(
                "expand_contraction",
                lexicon::CONTRACTIONS,
            )),
            Arc::new(WordSubstitution::new("add_abbreviation", lexicon::ABBREVIATIONS)),
            Arc::new(WordSubstitution::symmetric(
                "dyslexia_word_swap",
                lexicon::DYSLEXIA_SWAPS,
            )),
            Arc::new(AddContext::default()),
            Arc::new(SwapEntities),
            Arc::new(NumberToWord::new()),
            Arc::new(pronoun::replace_to("replace_to_male_pronouns", PronounSet::Male)),
            Arc::new(pronoun::replace_to("replace_to_female_pronouns", PronounSet::Female)),
            Arc::new(pronoun::replace_to("replace_to_neutral_pronouns", PronounSet::Neutral)),
        ];
        for transform in transforms {
            catalog.register(transform);
        }
        catalog
    }

    /// Register (or replace) a transform under its own identifier.
    pub fn register(&mut self, transform: Arc<dyn TextTransform>) {
        self.transforms.insert(transform.id(), transform);
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn contains(&self, id: &str) -> bool {
        self.transforms.contains_key(id)
    }

    /// Registered identifiers in sorted order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.transforms.keys().copied().collect()
    }

    /// Look up a transform; unknown identifiers are a configuration error.
    pub fn get(&self, id: &str) -> Result<Arc<dyn TextTransform>, HarnessError> {
        self.transforms.get(id).cloned().ok_or_else(|| {
            HarnessError::config(format!(
                "unknown perturbation '{id}'; available: {}",
                self.ids().join(", ")
            ))
        })
    }

    /// Apply a transform with an RNG derived from the catalog seed and the
    /// identifier, so the result does not depend on call order.
    pub fn apply(&self, id: &str, texts: &[String]) -> Result<Vec<String>, HarnessError> {
        let transform = self.get(id)?;
        let mut rng = self.rng_for(id);
        let out = transform.transform(texts, &mut rng);
        debug!(perturbation = id, texts = texts.len(), "Applied perturbation");
        Ok(out)
    }

    fn rng_for(&self, id: &str) -> StdRng {
        StdRng::seed_from_u64(self.seed ^ fnv1a(id))
    }
}

/// Stable 64-bit FNV-1a; std's hasher is not stable across releases.
fn fnv1a(s: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in s.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

/// Ordered, validated list of active perturbation identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestConfiguration {
    ids: Vec<String>,
}

impl TestConfiguration {
    /// Validate every name against the catalog. Fails on the first unknown
    /// or repeated identifier.
    pub fn new<S: AsRef<str>>(
        catalog: &PerturbationCatalog,
        names: &[S],
    ) -> Result<Self, HarnessError> {
        let mut ids: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            catalog.get(name)?;
            if ids.iter().any(|existing| existing == name) {
                return Err(HarnessError::config(format!(
                    "perturbation '{name}' is listed more than once"
                )));
            }
            ids.push(name.to_string());
        }
        Ok(Self { ids })
    }

    /// `uppercase`, `lowercase`, `add_typo`.
    pub fn default_for(catalog: &PerturbationCatalog) -> Result<Self, HarnessError> {
        Self::new(catalog, &["uppercase", "lowercase", "add_typo"])
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
