//! Observed per-category counts and proportions.

use crate::dataset::DatasetSample;
use crate::gazetteer::{normalize_token, Dimension, Gazetteer};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Category counts for one dimension. Always holds every template key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepresentationCount {
    dimension: Dimension,
    counts: BTreeMap<String, usize>,
}

impl RepresentationCount {
    /// A zeroed count over the dimension's default template.
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            counts: dimension
                .categories()
                .iter()
                .map(|c| (c.to_string(), 0))
                .collect(),
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn increment(&mut self, category: &str) {
        *self.counts.entry(category.to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, category: &str) -> usize {
        self.counts.get(category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn as_map(&self) -> &BTreeMap<String, usize> {
        &self.counts
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Label counts. NER samples contribute base tags, classification samples
/// their labels. Labels outside the template are kept as extra keys.
pub fn get_label_representation(data: &[DatasetSample]) -> RepresentationCount {
    let mut counts = RepresentationCount::new(Dimension::Label);
    for sample in data {
        for label in sample.labels() {
            counts.increment(&label);
        }
    }
    counts
}

fn count_tokens(data: &[DatasetSample], dimension: Dimension) -> RepresentationCount {
    let gazetteer = Gazetteer::builtin();
    let mut counts = RepresentationCount::new(dimension);
    for sample in data {
        for token in sample.extract_text() {
            for category in gazetteer.matches(dimension, &token) {
                counts.increment(category);
            }
        }
    }
    counts
}

pub fn get_ethnicity_representation(data: &[DatasetSample]) -> RepresentationCount {
    count_tokens(data, Dimension::Ethnicity)
}

pub fn get_religion_representation(data: &[DatasetSample]) -> RepresentationCount {
    count_tokens(data, Dimension::Religion)
}

/// Economic tier counts. A country counts once per sample when every word
/// of its name appears in the sample's token set.
pub fn get_country_economic_representation(data: &[DatasetSample]) -> RepresentationCount {
    let gazetteer = Gazetteer::builtin();
    let mut counts = RepresentationCount::new(Dimension::CountryEconomic);
    for sample in data {
        let words: HashSet<String> = sample
            .extract_text()
            .iter()
            .map(|t| normalize_token(t))
            .filter(|t| !t.is_empty())
            .collect();
        if words.is_empty() {
            continue;
        }
        for category in Dimension::CountryEconomic.categories() {
            for country in gazetteer.countries(category) {
                if country.split_whitespace().all(|w| words.contains(w)) {
                    counts.increment(category);
                }
            }
        }
    }
    counts
}

/// Count dispatch by dimension.
pub fn get_representation(dimension: Dimension, data: &[DatasetSample]) -> RepresentationCount {
    match dimension {
        Dimension::Ethnicity => get_ethnicity_representation(data),
        Dimension::Religion => get_religion_representation(data),
        Dimension::CountryEconomic => get_country_economic_representation(data),
        Dimension::Label => get_label_representation(data),
    }
}

/// `count / total` per category; all zero when nothing was observed.
pub fn get_entity_representation_proportions(
    counts: &RepresentationCount,
) -> BTreeMap<String, f64> {
    let total = counts.total();
    counts
        .iter()
        .map(|(category, count)| {
            let proportion = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            };
            (category.to_string(), proportion)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::NerPrediction;

    fn classification(text: &str) -> DatasetSample {
        DatasetSample::Classification {
            text: text.into(),
            labels: vec!["positive".into()],
        }
    }

    #[test]
    fn test_new_count_has_full_template() {
        let counts = RepresentationCount::new(Dimension::Religion);
        assert_eq!(counts.as_map().len(), 7);
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_ethnicity_counts() {
        let data = vec![
            classification("Garcia met Tanaka and Jamal."),
            classification("Nobody here"),
        ];
        let counts = get_ethnicity_representation(&data);
        assert_eq!(counts.get("hispanic"), 1);
        assert_eq!(counts.get("asian"), 1);
        assert_eq!(counts.get("black"), 1);
        assert_eq!(counts.get("white"), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_name_free_sentence_counts_nothing() {
        let data = vec![classification(
            "The hunter walked through the park to the river banks and met a baker",
        )];
        assert_eq!(get_ethnicity_representation(&data).total(), 0);
        assert_eq!(get_religion_representation(&data).total(), 0);
    }

    #[test]
    fn test_one_token_counts_in_every_matching_dimension() {
        let data = vec![classification("Gurpreet Singh met Aisha Khan.")];
        let ethnicity = get_ethnicity_representation(&data);
        assert_eq!(ethnicity.get("asian"), 2);
        assert_eq!(ethnicity.total(), 2);

        let religion = get_religion_representation(&data);
        assert_eq!(religion.get("sikh"), 2);
        assert_eq!(religion.get("muslim"), 2);
        assert_eq!(religion.total(), 4);
    }

    #[test]
    fn test_religion_counts_from_ner_words() {
        let data = vec![DatasetSample::Ner {
            text: "Fatima and Gurpreet".into(),
            predictions: vec![
                NerPrediction::new("Fatima", "B-PER"),
                NerPrediction::new("and", "O"),
                NerPrediction::new("Gurpreet", "B-PER"),
            ],
        }];
        let counts = get_religion_representation(&data);
        assert_eq!(counts.get("muslim"), 1);
        assert_eq!(counts.get("sikh"), 1);
    }

    #[test]
    fn test_country_requires_all_words() {
        let data = vec![
            classification("Trade between the United States and Kenya grew."),
            classification("The states united against Chad."),
            classification("South of the border"),
        ];
        let counts = get_country_economic_representation(&data);
        // "united states" matches in both of the first two samples (word subset).
        assert_eq!(counts.get("high_income"), 2);
        assert_eq!(counts.get("lower_middle_income"), 1);
        assert_eq!(counts.get("low_income"), 1);
        assert_eq!(counts.get("upper_middle_income"), 0);
    }

    #[test]
    fn test_label_counts_strip_bio() {
        let data = vec![DatasetSample::Ner {
            text: "Jean Paul visited Paris".into(),
            predictions: vec![
                NerPrediction::new("Jean", "B-PER"),
                NerPrediction::new("Paul", "I-PER"),
                NerPrediction::new("visited", "O"),
                NerPrediction::new("Paris", "B-LOC"),
            ],
        }];
        let counts = get_label_representation(&data);
        assert_eq!(counts.get("PER"), 2);
        assert_eq!(counts.get("O"), 1);
        assert_eq!(counts.get("LOC"), 1);
        assert_eq!(counts.get("ORG"), 0);
    }

    #[test]
    fn test_classification_labels_extend_template() {
        let counts = get_label_representation(&[classification("fine")]);
        assert_eq!(counts.get("positive"), 1);
        assert_eq!(counts.as_map().len(), 6);
    }

    #[test]
    fn test_proportions() {
        let mut counts = RepresentationCount::new(Dimension::CountryEconomic);
        counts.increment("high_income");
        counts.increment("high_income");
        counts.increment("low_income");
        counts.increment("upper_middle_income");
        let proportions = get_entity_representation_proportions(&counts);
        assert_eq!(proportions["high_income"], 0.5);
        assert_eq!(proportions["low_income"], 0.25);
        assert_eq!(proportions["lower_middle_income"], 0.0);
        let sum: f64 = proportions.values().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_proportions_of_empty_counts_are_zero() {
        let counts = RepresentationCount::new(Dimension::Ethnicity);
        let proportions = get_entity_representation_proportions(&counts);
        assert_eq!(proportions.len(), 6);
        assert!(proportions.values().all(|p| *p == 0.0));
    }
}
