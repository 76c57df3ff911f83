//! Simulated OCR recognition errors.

use super::TextTransform;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Whole words that OCR engines commonly misread.
const WORD_ERRORS: &[(&str, &str)] = &[
    ("the", "tbe"),
    ("and", "aud"),
    ("of", "o f"),
    ("that", "tbat"),
    ("with", "witb"),
    ("this", "tbis"),
    ("from", "frorn"),
    ("have", "bave"),
    ("which", "wbich"),
    ("modern", "modem"),
    ("clear", "dear"),
    ("burn", "bum"),
];

/// Glyph sequences and how they are misread.
const CHAR_ERRORS: &[(&str, &str)] = &[
    ("rn", "m"),
    ("m", "rn"),
    ("cl", "d"),
    ("d", "cl"),
    ("vv", "w"),
    ("w", "vv"),
    ("l", "1"),
    ("I", "l"),
    ("o", "0"),
    ("O", "0"),
    ("e", "c"),
    ("h", "b"),
    ("S", "5"),
    ("B", "8"),
    ("g", "q"),
    ("u", "v"),
];

static WORD: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\S+").ok());

/// Misreads words with probability `probability`. A known word-level error
/// is used when one exists, otherwise one character-level confusion is
/// applied at a random position.
pub struct AddOcrTypo {
    probability: f64,
}

impl AddOcrTypo {
    pub fn new(probability: f64) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
        }
    }

    fn misread(word: &str, rng: &mut dyn RngCore) -> String {
        let lower = word.to_lowercase();
        if let Some((_, replacement)) = WORD_ERRORS.iter().find(|(w, _)| *w == lower) {
            return super::substitution::match_case(word, replacement);
        }

        let mut sites: Vec<(usize, &str, &str)> = Vec::new();
        for &(from, to) in CHAR_ERRORS {
            for (idx, _) in word.match_indices(from) {
                sites.push((idx, from, to));
            }
        }
        match sites.choose(rng) {
            Some((idx, from, to)) => {
                let mut out = String::with_capacity(word.len() + 1);
                out.push_str(&word[..*idx]);
                out.push_str(to);
                out.push_str(&word[idx + from.len()..]);
                out
            }
            None => word.to_string(),
        }
    }

    fn apply(&self, text: &str, rng: &mut dyn RngCore) -> String {
        let Some(word_pattern) = WORD.as_ref() else {
            return text.to_string();
        };
        word_pattern
            .replace_all(text, |caps: &Captures| {
                let word = &caps[0];
                if rng.gen_bool(self.probability) {
                    Self::misread(word, rng)
                } else {
                    word.to_string()
                }
            })
            .into_owned()
    }
}

impl TextTransform for AddOcrTypo {
    fn id(&self) -> &'static str {
        "add_ocr_typo"
    }

    fn is_randomized(&self) -> bool {
        true
    }

    fn transform(&self, texts: &[String], rng: &mut dyn RngCore) -> Vec<String> {
        texts.iter().map(|t| self.apply(t, rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_word_level_error_preferred() {
        let mut rng = StdRng::seed_from_u64(1);
        let out = AddOcrTypo::new(1.0).transform(&["The modern".into()], &mut rng);
        assert_eq!(out, vec!["Tbe modem"]);
    }

    #[test]
    fn test_char_level_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let out = AddOcrTypo::new(1.0).transform(&["corn".into()], &mut rng);
        assert!(["com", "c0rn", "corm"].contains(&out[0].as_str()), "{}", out[0]);
    }

    #[test]
    fn test_unmatched_word_kept() {
        let mut rng = StdRng::seed_from_u64(1);
        let out = AddOcrTypo::new(1.0).transform(&["xyz 42".into()], &mut rng);
        assert_eq!(out, vec!["xyz 42"]);
    }

    #[test]
    fn test_zero_probability_is_identity() {
        let mut rng = StdRng::seed_from_u64(1);
        let input = vec!["the modern world".to_string()];
        assert_eq!(AddOcrTypo::new(0.0).transform(&input, &mut rng), input);
    }
}
