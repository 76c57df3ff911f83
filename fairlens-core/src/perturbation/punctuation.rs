//! Punctuation transforms.

use super::TextTransform;
use rand::seq::SliceRandom;
use rand::RngCore;

const TRAILING_CHOICES: &[&str] = &["!", "?", ",", ".", "-", ":", ";"];

/// Appends one random punctuation mark unless the text already ends in one.
pub struct AddPunctuation;

impl TextTransform for AddPunctuation {
    fn id(&self) -> &'static str {
        "add_punctuation"
    }

    fn is_randomized(&self) -> bool {
        true
    }

    fn transform(&self, texts: &[String], rng: &mut dyn RngCore) -> Vec<String> {
        texts
            .iter()
            .map(|t| {
                let trimmed = t.trim_end();
                match trimmed.chars().last() {
                    None => t.clone(),
                    Some(c) if c.is_ascii_punctuation() => t.clone(),
                    Some(_) => {
                        let mark = TRAILING_CHOICES.choose(rng).copied().unwrap_or(".");
                        format!("{trimmed}{mark}")
                    }
                }
            })
            .collect()
    }
}

/// Removes punctuation at the end of the text.
pub struct StripPunctuation;

impl TextTransform for StripPunctuation {
    fn id(&self) -> &'static str {
        "strip_punctuation"
    }

    fn transform(&self, texts: &[String], _rng: &mut dyn RngCore) -> Vec<String> {
        texts
            .iter()
            .map(|t| {
                t.trim_end()
                    .trim_end_matches(|c: char| c.is_ascii_punctuation())
                    .trim_end()
                    .to_string()
            })
            .collect()
    }
}

/// Removes every ASCII punctuation character.
pub struct StripAllPunctuation;

impl TextTransform for StripAllPunctuation {
    fn id(&self) -> &'static str {
        "strip_all_punctuation"
    }

    fn transform(&self, texts: &[String], _rng: &mut dyn RngCore) -> Vec<String> {
        texts
            .iter()
            .map(|t| t.chars().filter(|c| !c.is_ascii_punctuation()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run(t: &dyn TextTransform, items: &[&str]) -> Vec<String> {
        let mut rng = StdRng::seed_from_u64(3);
        let input: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        t.transform(&input, &mut rng)
    }

    #[test]
    fn test_add_punctuation() {
        let out = run(&AddPunctuation, &["hello there", "done.", ""]);
        let last = out[0].chars().last().unwrap();
        assert!(out[0].starts_with("hello there"));
        assert!(TRAILING_CHOICES.contains(&last.to_string().as_str()));
        assert_eq!(out[1], "done.");
        assert_eq!(out[2], "");
    }

    #[test]
    fn test_strip_punctuation() {
        let out = run(&StripPunctuation, &["Really?!", "e.g. this", "fine ... "]);
        assert_eq!(out, vec!["Really", "e.g. this", "fine"]);
    }

    #[test]
    fn test_strip_all_punctuation() {
        let out = run(&StripAllPunctuation, &["It's, like, (fine)!"]);
        assert_eq!(out, vec!["Its like fine"]);
    }
}
