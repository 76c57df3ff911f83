//! Named-entity swapping.

use super::TextTransform;
use super::substitution::match_case;
use rand::seq::SliceRandom;
use rand::RngCore;
use regex::Regex;
use std::sync::LazyLock;

const PERSON: &[&str] = &[
    "John", "Mary", "Ahmed", "Priya", "Wei", "Fatima", "Carlos", "Olga", "Kwame", "Yuki",
];
const LOCATION: &[&str] = &[
    "London", "Paris", "Tokyo", "Lagos", "Mumbai", "Toronto", "Berlin", "Cairo", "New York",
    "Sao Paulo",
];
const ORGANIZATION: &[&str] = &[
    "Google", "Microsoft", "Amazon", "Siemens", "Toyota", "Samsung", "Unilever",
    "United Nations", "World Bank", "Red Cross",
];

const ENTITY_TABLES: [(&str, &[&str]); 3] =
    [("PER", PERSON), ("LOC", LOCATION), ("ORG", ORGANIZATION)];

static ENTITY_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    let mut terms: Vec<&str> = ENTITY_TABLES
        .iter()
        .flat_map(|(_, terms)| terms.iter().copied())
        .collect();
    terms.sort_by(|a, b| b.len().cmp(&a.len()));
    let alternation = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).ok()
});

fn table_for(term: &str) -> Option<&'static [&'static str]> {
    ENTITY_TABLES
        .iter()
        .find(|(_, terms)| terms.iter().any(|t| t.eq_ignore_ascii_case(term)))
        .map(|(_, terms)| *terms)
}

/// Replaces one known person, location or organization per text with a
/// different entity of the same kind.
pub struct SwapEntities;

impl SwapEntities {
    fn swap(text: &str, rng: &mut dyn RngCore) -> String {
        let Some(pattern) = ENTITY_PATTERN.as_ref() else {
            return text.to_string();
        };
        let found: Vec<_> = pattern.find_iter(text).collect();
        let Some(m) = found.choose(rng) else {
            return text.to_string();
        };
        let Some(table) = table_for(m.as_str()) else {
            return text.to_string();
        };
        let others: Vec<&str> = table
            .iter()
            .copied()
            .filter(|t| !t.eq_ignore_ascii_case(m.as_str()))
            .collect();
        let Some(replacement) = others.choose(rng) else {
            return text.to_string();
        };
        let cased = if m.as_str().chars().next().is_some_and(char::is_lowercase) {
            replacement.to_lowercase()
        } else {
            match_case(m.as_str(), replacement)
        };
        format!("{}{}{}", &text[..m.start()], cased, &text[m.end()..])
    }
}

impl TextTransform for SwapEntities {
    fn id(&self) -> &'static str {
        "swap_entities"
    }

    fn is_randomized(&self) -> bool {
        true
    }

    fn transform(&self, texts: &[String], rng: &mut dyn RngCore) -> Vec<String> {
        texts.iter().map(|t| Self::swap(t, rng)).collect()
    }
}
