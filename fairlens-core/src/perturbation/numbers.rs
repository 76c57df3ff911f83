//! Digits to English words.

use super::TextTransform;
use rand::RngCore;
use regex::{Captures, Regex};

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];
const SCALES: [(u64, &str); 6] = [
    (1_000_000_000_000_000_000, "quintillion"),
    (1_000_000_000_000_000, "quadrillion"),
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

fn below_thousand(n: u64, words: &mut Vec<String>) {
    let hundreds = n / 100;
    let rest = n % 100;
    if hundreds > 0 {
        words.push(format!("{} hundred", ONES[hundreds as usize]));
    }
    if rest >= 20 {
        let tens = TENS[(rest / 10) as usize];
        match rest % 10 {
            0 => words.push(tens.to_string()),
            unit => words.push(format!("{tens}-{}", ONES[unit as usize])),
        }
    } else if rest > 0 {
        words.push(ONES[rest as usize].to_string());
    }
}

/// Spell out a non-negative integer, e.g. `1042` as "one thousand forty-two".
pub fn number_to_words(n: u64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }
    let mut words = Vec::new();
    let mut rest = n;
    for (scale, name) in SCALES {
        if rest >= scale {
            below_thousand(rest / scale, &mut words);
            words.push(name.to_string());
            rest %= scale;
        }
    }
    below_thousand(rest, &mut words);
    words.join(" ")
}

/// Replaces standalone integers with their spelled-out form.
pub struct NumberToWord {
    pattern: Option<Regex>,
}

impl NumberToWord {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"\b\d+\b").ok(),
        }
    }
}

impl Default for NumberToWord {
    fn default() -> Self {
        Self::new()
    }
}

impl TextTransform for NumberToWord {
    fn id(&self) -> &'static str {
        "number_to_word"
    }

    fn transform(&self, texts: &[String], _rng: &mut dyn RngCore) -> Vec<String> {
        let Some(pattern) = &self.pattern else {
            return texts.to_vec();
        };
        texts
            .iter()
            .map(|t| {
                pattern
                    .replace_all(t, |caps: &Captures| match caps[0].parse::<u64>() {
                        Ok(n) => number_to_words(n),
                        Err(_) => caps[0].to_string(),
                    })
                    .into_owned()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_number_to_words() {
        assert_eq!(number_to_words(0), "zero");
        assert_eq!(number_to_words(7), "seven");
        assert_eq!(number_to_words(40), "forty");
        assert_eq!(number_to_words(42), "forty-two");
        assert_eq!(number_to_words(100), "one hundred");
        assert_eq!(number_to_words(1042), "one thousand forty-two");
        assert_eq!(
            number_to_words(2_000_315),
            "two million three hundred fifteen"
        );
        assert_eq!(
            number_to_words(u64::MAX),
            "eighteen quintillion four hundred forty-six quadrillion seven hundred forty-four \
             trillion seventy-three billion seven hundred nine million five hundred fifty-one \
             thousand six hundred fifteen"
        );
    }

    #[test]
    fn test_transform_standalone_digits_only() {
        let mut rng = StepRng::new(0, 1);
        let out = NumberToWord::new().transform(
            &["Room 12 on floor 3, code A7".into(), "99999999999999999999999".into()],
            &mut rng,
        );
        assert_eq!(out[0], "Room twelve on floor three, code A7");
        assert_eq!(out[1], "99999999999999999999999");
    }
}
