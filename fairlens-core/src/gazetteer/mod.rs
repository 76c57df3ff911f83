//! Gazetteer store: static, read-only term tables per demographic dimension.
//!
//! Dimensions are independent: a single token can match a category in more
//! than one dimension (a personal name may signal both ethnicity and religion).

mod economic;
mod ethnicity;
mod religion;

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::OnceLock;

/// A demographic dimension analysed by representation tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Ethnicity,
    Religion,
    CountryEconomic,
    Label,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Ethnicity,
        Dimension::Religion,
        Dimension::CountryEconomic,
        Dimension::Label,
    ];

    /// The default category template, in report order.
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            Self::Ethnicity => &[
                "black",
                "asian",
                "white",
                "native_american",
                "hispanic",
                "inter_racial",
            ],
            Self::Religion => &[
                "muslim",
                "hindu",
                "sikh",
                "christian",
                "jain",
                "buddhist",
                "parsi",
            ],
            Self::CountryEconomic => &[
                "high_income",
                "low_income",
                "lower_middle_income",
                "upper_middle_income",
            ],
            Self::Label => &["O", "LOC", "PER", "MISC", "ORG"],
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ethnicity => "ethnicity",
            Self::Religion => "religion",
            Self::CountryEconomic => "country_economic",
            Self::Label => "label",
        };
        f.write_str(name)
    }
}

struct CategoryTable {
    category: &'static str,
    terms: HashSet<&'static str>,
}

/// Read-only lookup tables for every dimension.
pub struct Gazetteer {
    tables: HashMap<Dimension, Vec<CategoryTable>>,
}

fn table(entries: &[(&'static str, &'static [&'static str])]) -> Vec<CategoryTable> {
    entries
        .iter()
        .map(|(category, terms)| CategoryTable {
            category,
            terms: terms.iter().copied().collect(),
        })
        .collect()
}

/// Strip punctuation glued to a token, keeping inner hyphens and apostrophes.
pub fn normalize_token(token: &str) -> String {
    token
        .trim_matches(|c: char| c.is_ascii_punctuation())
        .to_lowercase()
}

impl Gazetteer {
    /// The process-wide built-in gazetteer.
    pub fn builtin() -> &'static Gazetteer {
        static BUILTIN: OnceLock<Gazetteer> = OnceLock::new();
        BUILTIN.get_or_init(Gazetteer::build)
    }

    fn build() -> Self {
        let mut tables = HashMap::new();
        tables.insert(
            Dimension::Ethnicity,
            table(&[
                ("black", ethnicity::BLACK),
                ("asian", ethnicity::ASIAN),
                ("white", ethnicity::WHITE),
                ("native_american", ethnicity::NATIVE_AMERICAN),
                ("hispanic", ethnicity::HISPANIC),
                ("inter_racial", ethnicity::INTER_RACIAL),
            ]),
        );
        tables.insert(
            Dimension::Religion,
            table(&[
                ("muslim", religion::MUSLIM),
                ("hindu", religion::HINDU),
                ("sikh", religion::SIKH),
                ("christian", religion::CHRISTIAN),
                ("jain", religion::JAIN),
                ("buddhist", religion::BUDDHIST),
                ("parsi", religion::PARSI),
            ]),
        );
        tables.insert(
            Dimension::CountryEconomic,
            table(&[
                ("high_income", economic::HIGH_INCOME),
                ("low_income", economic::LOW_INCOME),
                ("lower_middle_income", economic::LOWER_MIDDLE_INCOME),
                ("upper_middle_income", economic::UPPER_MIDDLE_INCOME),
            ]),
        );
        tables.insert(
            Dimension::Label,
            table(&[
                ("O", &["o"]),
                ("LOC", &["loc"]),
                ("PER", &["per"]),
                ("MISC", &["misc"]),
                ("ORG", &["org"]),
            ]),
        );
        Self { tables }
    }

    /// Every category of `dimension` whose table contains `token`.
    pub fn matches(&self, dimension: Dimension, token: &str) -> Vec<&'static str> {
        let needle = normalize_token(token);
        if needle.is_empty() {
            return Vec::new();
        }
        self.tables
            .get(&dimension)
            .map(|tables| {
                tables
                    .iter()
                    .filter(|t| t.terms.contains(needle.as_str()))
                    .map(|t| t.category)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Case-insensitive exact membership test, first matching category.
    pub fn lookup(&self, dimension: Dimension, token: &str) -> Option<&'static str> {
        self.matches(dimension, token).into_iter().next()
    }

    /// Hits for `token` across every dimension.
    pub fn lookup_all(&self, token: &str) -> Vec<(Dimension, &'static str)> {
        Dimension::ALL
            .iter()
            .filter_map(|d| self.lookup(*d, token).map(|c| (*d, c)))
            .collect()
    }

    /// All terms of one category; multi-word entries (country names) stay whole.
    pub fn terms(&self, dimension: Dimension, category: &str) -> Vec<&'static str> {
        let mut terms: Vec<&'static str> = self
            .tables
            .get(&dimension)
            .and_then(|tables| tables.iter().find(|t| t.category == category))
            .map(|t| t.terms.iter().copied().collect())
            .unwrap_or_default();
        terms.sort_unstable();
        terms
    }

    /// Country names in an economic tier.
    pub fn countries(&self, category: &str) -> Vec<&'static str> {
        self.terms(Dimension::CountryEconomic, category)
    }
}
