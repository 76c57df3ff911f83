//! Keyboard typo injection weighted by observed typo frequencies.

use super::TextTransform;
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

/// Per-letter replacement frequencies on a QWERTY keyboard.
/// Weights are relative counts of each mistyped neighbour.
const TYPO_FREQUENCY: &[(char, &[(char, u32)])] = &[
    ('a', &[('s', 12), ('q', 5), ('z', 4), ('w', 3), ('e', 2)]),
    ('b', &[('v', 8), ('n', 8), ('g', 3), ('h', 2)]),
    ('c', &[('x', 8), ('v', 7), ('d', 4), ('f', 2)]),
    ('d', &[('s', 9), ('f', 8), ('e', 5), ('r', 2), ('c', 2), ('x', 2)]),
    ('e', &[('r', 11), ('w', 9), ('d', 5), ('s', 3), ('a', 2)]),
    ('f', &[('d', 8), ('g', 8), ('r', 4), ('t', 2), ('v', 2), ('c', 2)]),
    ('g', &[('f', 8), ('h', 8), ('t', 4), ('y', 2), ('b', 2), ('v', 2)]),
    ('h', &[('g', 8), ('j', 8), ('y', 4), ('u', 2), ('n', 2), ('b', 2)]),
    ('i', &[('o', 11), ('u', 9), ('k', 4), ('j', 2), ('e', 2)]),
    ('j', &[('h', 8), ('k', 8), ('u', 4), ('i', 2), ('m', 2), ('n', 2)]),
    ('k', &[('j', 8), ('l', 8), ('i', 4), ('o', 2), ('m', 2)]),
    ('l', &[('k', 10), ('o', 5), ('p', 3), ('i', 2)]),
    ('m', &[('n', 12), ('j', 3), ('k', 3)]),
    ('n', &[('m', 10), ('b', 7), ('h', 3), ('j', 3)]),
    ('o', &[('i', 10), ('p', 9), ('l', 4), ('k', 2)]),
    ('p', &[('o', 12), ('l', 5)]),
    ('q', &[('w', 10), ('a', 6)]),
    ('r', &[('e', 10), ('t', 9), ('f', 4), ('d', 3)]),
    ('s', &[('a', 10), ('d', 9), ('w', 4), ('e', 3), ('x', 2), ('z', 2)]),
    ('t', &[('r', 10), ('y', 8), ('g', 4), ('f', 3)]),
    ('u', &[('y', 9), ('i', 9), ('j', 4), ('h', 2)]),
    ('v', &[('c', 8), ('b', 8), ('f', 3), ('g', 2)]),
    ('w', &[('q', 8), ('e', 9), ('s', 5), ('a', 2)]),
    ('x', &[('z', 8), ('c', 8), ('s', 4), ('d', 3)]),
    ('y', &[('t', 9), ('u', 9), ('h', 4), ('g', 2)]),
    ('z', &[('x', 10), ('a', 5), ('s', 4)]),
];

fn frequency_row(c: char) -> Option<&'static [(char, u32)]> {
    let lower = c.to_ascii_lowercase();
    TYPO_FREQUENCY
        .iter()
        .find(|(key, _)| *key == lower)
        .map(|(_, row)| *row)
}

/// Injects one keyboard typo per text.
///
/// Texts shorter than five characters are left alone. Otherwise, with
/// probability `probability`, 90% of the time one letter is replaced by a
/// weighted QWERTY neighbour and 10% of the time two adjacent interior
/// characters are swapped.
pub struct AddTypo {
    probability: f64,
}

impl AddTypo {
    pub fn new(probability: f64) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
        }
    }

    fn keyboard_typo(&self, text: &str, rng: &mut dyn RngCore) -> String {
        let mut chars: Vec<char> = text.chars().collect();
        if chars.len() < 5 || !rng.gen_bool(self.probability) {
            return text.to_string();
        }

        if rng.gen_bool(0.9) {
            let candidates: Vec<usize> = chars
                .iter()
                .enumerate()
                .filter(|(_, c)| c.is_ascii_alphabetic())
                .map(|(i, _)| i)
                .collect();
            let Some(&idx) = candidates.choose(rng) else {
                return text.to_string();
            };
            let Some(row) = frequency_row(chars[idx]) else {
                return text.to_string();
            };
            let Ok(weights) = WeightedIndex::new(row.iter().map(|(_, w)| *w)) else {
                return text.to_string();
            };
            let replacement = row[weights.sample(rng)].0;
            chars[idx] = if chars[idx].is_ascii_uppercase() {
                replacement.to_ascii_uppercase()
            } else {
                replacement
            };
        } else {
            let idx = rng.gen_range(1..chars.len() - 2);
            chars.swap(idx, idx + 1);
        }
        chars.into_iter().collect()
    }
}

impl TextTransform for AddTypo {
    fn id(&self) -> &'static str {
        "add_typo"
    }

    fn is_randomized(&self) -> bool {
        true
    }

    fn transform(&self, texts: &[String], rng: &mut dyn RngCore) -> Vec<String> {
        texts.iter().map(|t| self.keyboard_typo(t, rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_table_covers_alphabet() {
        for c in 'a'..='z' {
            let row = frequency_row(c).unwrap();
            assert!(!row.is_empty());
            assert!(row.iter().all(|(n, _)| *n != c));
        }
        assert!(frequency_row('Q').is_some());
        assert!(frequency_row('7').is_none());
    }

    #[test]
    fn test_short_text_untouched() {
        let mut rng = StdRng::seed_from_u64(0);
        let out = AddTypo::new(1.0).transform(&["abcd".into()], &mut rng);
        assert_eq!(out, vec!["abcd"]);
    }

    #[test]
    fn test_zero_probability_is_identity() {
        let mut rng = StdRng::seed_from_u64(0);
        let input = vec!["a perfectly normal sentence".to_string(); 10];
        assert_eq!(AddTypo::new(0.0).transform(&input, &mut rng), input);
    }

    #[test]
    fn test_typo_changes_at_most_two_chars() {
        let mut rng = StdRng::seed_from_u64(11);
        let original = "information retrieval quality";
        let input = vec![original.to_string(); 50];
        let out = AddTypo::new(1.0).transform(&input, &mut rng);
        let mut changed = 0;
        for text in &out {
            assert_eq!(text.chars().count(), original.chars().count());
            let diff = text
                .chars()
                .zip(original.chars())
                .filter(|(a, b)| a != b)
                .count();
            assert!(diff <= 2);
            if diff > 0 {
                changed += 1;
            }
        }
        assert!(changed > 40);
    }

    #[test]
    fn test_same_seed_same_typos() {
        let input = vec!["Reproducible perturbations matter".to_string(); 5];
        let mut a = StdRng::seed_from_u64(5);
        let mut b = StdRng::seed_from_u64(5);
        let typo = AddTypo::new(1.0);
        assert_eq!(typo.transform(&input, &mut a), typo.transform(&input, &mut b));
    }
}
