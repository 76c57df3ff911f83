//! Gendered pronoun replacement.

use super::WordSubstitution;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PronounSet {
    Male,
    Female,
    Neutral,
}

/// Pronoun forms per set, ordered: subjective, possessive adjective,
/// objective, reflexive, possessive pronoun. Where one word fills two
/// slots ("her", "his") the earlier slot decides its replacement.
pub const GENDER_PRONOUNS: [(PronounSet, [&str; 5]); 3] = [
    (PronounSet::Male, ["he", "his", "him", "himself", "his"]),
    (PronounSet::Female, ["she", "her", "her", "herself", "hers"]),
    (PronounSet::Neutral, ["they", "their", "them", "themselves", "theirs"]),
];

impl PronounSet {
    pub fn forms(self) -> [&'static str; 5] {
        GENDER_PRONOUNS
            .iter()
            .find(|(set, _)| *set == self)
            .map(|(_, forms)| *forms)
            .unwrap_or(GENDER_PRONOUNS[2].1)
    }
}

/// Rewrite every pronoun of the other two sets into `target`'s form.
pub(crate) fn replace_to(id: &'static str, target: PronounSet) -> WordSubstitution {
    let target_forms = target.forms();
    let pairs = GENDER_PRONOUNS
        .iter()
        .filter(|(set, _)| *set != target)
        .flat_map(|(_, forms)| {
            forms
                .iter()
                .zip(target_forms)
                .map(|(from, to)| (from.to_string(), to.to_string()))
        });
    WordSubstitution::from_pairs(id, pairs)
}
