//! Dictionary-driven whole-word replacement.

use super::TextTransform;
use rand::RngCore;
use regex::{Captures, Regex};
use std::collections::HashMap;
use tracing::warn;

/// Replaces whole words or phrases using a lookup table.
///
/// Matching is case-insensitive and longest-first. The replacement takes
/// the casing of the matched text: all caps, capitalized, or as written in
/// the table.
pub struct WordSubstitution {
    id: &'static str,
    pattern: Option<Regex>,
    table: HashMap<String, String>,
}

impl WordSubstitution {
    /// Replace each left-hand entry with its right-hand entry.
    pub fn new(id: &'static str, pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self::from_pairs(id, pairs.iter().map(|(a, b)| (a.to_string(), b.to_string())))
    }

    /// Replace each right-hand entry with its left-hand entry.
    pub fn inverse(id: &'static str, pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self::from_pairs(id, pairs.iter().map(|(a, b)| (b.to_string(), a.to_string())))
    }

    /// Swap the two sides of every pair in both directions.
    pub fn symmetric(id: &'static str, pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self::from_pairs(
            id,
            pairs.iter().flat_map(|(a, b)| {
                [(a.to_string(), b.to_string()), (b.to_string(), a.to_string())]
            }),
        )
    }

    /// Build from owned pairs. When a source appears twice the first
    /// occurrence wins.
    pub fn from_pairs(id: &'static str, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut table: HashMap<String, String> = HashMap::new();
        for (from, to) in pairs {
            if from.is_empty() {
                continue;
            }
            table.entry(from.to_lowercase()).or_insert(to);
        }

        let mut sources: Vec<&String> = table.keys().collect();
        sources.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let alternation = sources
            .iter()
            .map(|s| regex::escape(s))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = if table.is_empty() {
            None
        } else {
            match Regex::new(&format!(r"(?i)\b(?:{alternation})\b")) {
                Ok(re) => Some(re),
                Err(e) => {
                    warn!(perturbation = id, error = %e, "Substitution table did not compile");
                    None
                }
            }
        };

        Self { id, pattern, table }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Replacement for one source, case-insensitive.
    pub fn lookup(&self, source: &str) -> Option<&str> {
        self.table.get(&source.to_lowercase()).map(String::as_str)
    }

    fn replace(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return text.to_string();
        };
        pattern
            .replace_all(text, |caps: &Captures| {
                let matched = &caps[0];
                match self.lookup(matched) {
                    Some(replacement) => match_case(matched, replacement),
                    None => matched.to_string(),
                }
            })
            .into_owned()
    }
}

/// Carry the casing of `matched` over to `replacement`.
pub(crate) fn match_case(matched: &str, replacement: &str) -> String {
    let letters: Vec<char> = matched.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.len() > 1 && letters.iter().all(|c| c.is_uppercase()) {
        return replacement.to_uppercase();
    }
    if letters.first().is_some_and(|c| c.is_uppercase()) {
        let mut chars = replacement.chars();
        return match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
    }
    replacement.to_string()
}

impl TextTransform for WordSubstitution {
    fn id(&self) -> &'static str {
        self.id
    }

    fn transform(&self, texts: &[String], _rng: &mut dyn RngCore) -> Vec<String> {
        texts.iter().map(|t| self.replace(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    const PAIRS: &[(&str, &str)] = &[
        ("color", "colour"),
        ("do not", "don't"),
        ("not", "no"),
        ("hue", "colour"),
    ];

    fn run(sub: &WordSubstitution, text: &str) -> String {
        let mut rng = StepRng::new(0, 1);
        sub.transform(&[text.to_string()], &mut rng).remove(0)
    }

    #[test]
    fn test_forward_whole_words_only() {
        let sub = WordSubstitution::new("t", PAIRS);
        assert_eq!(run(&sub, "The color is colorful"), "The colour is colorful");
    }

    #[test]
    fn test_longest_match_first() {
        let sub = WordSubstitution::new("t", PAIRS);
        assert_eq!(run(&sub, "I do not know, not now"), "I don't know, no now");
    }

    #[test]
    fn test_case_preserved() {
        let sub = WordSubstitution::new("t", PAIRS);
        assert_eq!(run(&sub, "Color COLOR color"), "Colour COLOUR colour");
        assert_eq!(run(&sub, "Do not"), "Don't");
    }

    #[test]
    fn test_inverse_first_entry_wins() {
        let sub = WordSubstitution::inverse("t", PAIRS);
        assert_eq!(sub.lookup("colour"), Some("color"));
        assert_eq!(run(&sub, "colour"), "color");
    }

    #[test]
    fn test_symmetric_swaps_in_one_pass() {
        const SWAPS: &[(&str, &str)] = &[("their", "there")];
        let sub = WordSubstitution::symmetric("t", SWAPS);
        assert_eq!(run(&sub, "their house is there"), "there house is their");
    }

    #[test]
    fn test_empty_table_is_identity() {
        let sub = WordSubstitution::from_pairs("t", Vec::new());
        assert!(sub.is_empty());
        assert_eq!(run(&sub, "unchanged"), "unchanged");
    }

    #[test]
    fn test_match_case_single_capital() {
        assert_eq!(match_case("I", "me"), "Me");
        assert_eq!(match_case("HE", "she"), "SHE");
        assert_eq!(match_case("he", "she"), "she");
    }
}
