//! Case transforms.

use super::TextTransform;
use rand::RngCore;

pub struct Uppercase;

impl TextTransform for Uppercase {
    fn id(&self) -> &'static str {
        "uppercase"
    }

    fn transform(&self, texts: &[String], _rng: &mut dyn RngCore) -> Vec<String> {
        texts.iter().map(|t| t.to_uppercase()).collect()
    }
}

pub struct Lowercase;

impl TextTransform for Lowercase {
    fn id(&self) -> &'static str {
        "lowercase"
    }

    fn transform(&self, texts: &[String], _rng: &mut dyn RngCore) -> Vec<String> {
        texts.iter().map(|t| t.to_lowercase()).collect()
    }
}

/// Upper-cases the first letter of every whitespace-delimited word.
pub struct Titlecase;

pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

impl TextTransform for Titlecase {
    fn id(&self) -> &'static str {
        "titlecase"
    }

    fn transform(&self, texts: &[String], _rng: &mut dyn RngCore) -> Vec<String> {
        texts
            .iter()
            .map(|t| {
                t.split(' ')
                    .map(capitalize)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn run(t: &dyn TextTransform, s: &str) -> String {
        let mut rng = StepRng::new(0, 1);
        t.transform(&[s.to_string()], &mut rng).remove(0)
    }

    #[test]
    fn test_casing() {
        assert_eq!(run(&Uppercase, "Hello world"), "HELLO WORLD");
        assert_eq!(run(&Lowercase, "Hello WORLD"), "hello world");
        assert_eq!(run(&Titlecase, "hello  wORLD of rust"), "Hello  World Of Rust");
        assert_eq!(run(&Titlecase, ""), "");
    }
}
