//! Irrelevant context added around a text.

use super::TextTransform;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

const STARTING_CONTEXT: &[&str] = &["Well,", "So,", "Honestly,", "To be fair,", "Anyway,"];
const ENDING_CONTEXT: &[&str] = &["Thanks!", "Just saying.", "I guess.", "Let me know.", "Cheers."];

/// Prepends, appends, or wraps each text with filler phrases.
pub struct AddContext {
    starting: Vec<String>,
    ending: Vec<String>,
}

impl Default for AddContext {
    fn default() -> Self {
        Self::new(
            STARTING_CONTEXT.iter().map(|s| s.to_string()).collect(),
            ENDING_CONTEXT.iter().map(|s| s.to_string()).collect(),
        )
    }
}

impl AddContext {
    pub fn new(starting: Vec<String>, ending: Vec<String>) -> Self {
        Self { starting, ending }
    }

    fn wrap(&self, text: &str, rng: &mut dyn RngCore) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }
        let mut out = text.to_string();
        let placement = rng.gen_range(0..3u8);
        if placement != 1 {
            if let Some(start) = self.starting.choose(rng) {
                out = format!("{start} {out}");
            }
        }
        if placement != 0 {
            if let Some(end) = self.ending.choose(rng) {
                out = format!("{out} {end}");
            }
        }
        out
    }
}

impl TextTransform for AddContext {
    fn id(&self) -> &'static str {
        "add_context"
    }

    fn is_randomized(&self) -> bool {
        true
    }

    fn transform(&self, texts: &[String], rng: &mut dyn RngCore) -> Vec<String> {
        texts.iter().map(|t| self.wrap(t, rng)).collect()
    }
}
