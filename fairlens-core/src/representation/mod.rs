//! Representation analyzer: demographic counts and proportions compared
//! against an expected baseline, one sample per category.

pub mod baseline;
pub mod counts;

pub use baseline::{default_expected, resolve_expected};
pub use counts::{
    get_country_economic_representation, get_entity_representation_proportions,
    get_ethnicity_representation, get_label_representation, get_religion_representation,
    get_representation, RepresentationCount,
};

use crate::config::RepresentationConfig;
use crate::dataset::DatasetSample;
use crate::error::HarnessError;
use crate::gazetteer::Dimension;
use crate::sample::Sample;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// What a representation test measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Count,
    Proportion,
}

impl Measure {
    /// Key under which params carry the baseline.
    pub fn param_key(&self) -> &'static str {
        match self {
            Self::Count => "min_count",
            Self::Proportion => "min_proportion",
        }
    }
}

/// The registered representation tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepresentationTest {
    EthnicityNameCount,
    EthnicityNameProportion,
    ReligionNameCount,
    ReligionNameProportion,
    CountryEconomicCount,
    CountryEconomicProportion,
    LabelCount,
    LabelProportion,
}

impl RepresentationTest {
    pub const ALL: [RepresentationTest; 8] = [
        Self::EthnicityNameCount,
        Self::EthnicityNameProportion,
        Self::ReligionNameCount,
        Self::ReligionNameProportion,
        Self::CountryEconomicCount,
        Self::CountryEconomicProportion,
        Self::LabelCount,
        Self::LabelProportion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EthnicityNameCount => "min_ethnicity_name_representation_count",
            Self::EthnicityNameProportion => "min_ethnicity_name_representation_proportion",
            Self::ReligionNameCount => "min_religion_name_representation_count",
            Self::ReligionNameProportion => "min_religion_name_representation_proportion",
            Self::CountryEconomicCount => "min_country_economic_representation_count",
            Self::CountryEconomicProportion => "min_country_economic_representation_proportion",
            Self::LabelCount => "min_label_representation_count",
            Self::LabelProportion => "min_label_representation_proportion",
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Self::EthnicityNameCount | Self::EthnicityNameProportion => Dimension::Ethnicity,
            Self::ReligionNameCount | Self::ReligionNameProportion => Dimension::Religion,
            Self::CountryEconomicCount | Self::CountryEconomicProportion => {
                Dimension::CountryEconomic
            }
            Self::LabelCount | Self::LabelProportion => Dimension::Label,
        }
    }

    pub fn measure(&self) -> Measure {
        match self {
            Self::EthnicityNameCount
            | Self::ReligionNameCount
            | Self::CountryEconomicCount
            | Self::LabelCount => Measure::Count,
            _ => Measure::Proportion,
        }
    }
}

impl fmt::Display for RepresentationTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepresentationTest {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| HarnessError::config(format!("unknown representation test '{s}'")))
    }
}

/// Observed values merged over the zeroed default template.
pub fn actual_representation(
    test: RepresentationTest,
    data: &[DatasetSample],
) -> BTreeMap<String, f64> {
    let mut actual: BTreeMap<String, f64> = test
        .dimension()
        .categories()
        .iter()
        .map(|c| (c.to_string(), 0.0))
        .collect();

    let counts = get_representation(test.dimension(), data);
    let observed: BTreeMap<String, f64> = match test.measure() {
        Measure::Count => counts
            .iter()
            .map(|(k, v)| (k.to_string(), v as f64))
            .collect(),
        Measure::Proportion => get_entity_representation_proportions(&counts),
    };
    actual.extend(observed);
    actual
}

/// Runs representation tests over a dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepresentationAnalyzer;

impl RepresentationAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate one test and emit one finished sample per expected category.
    ///
    /// The baseline is resolved and validated before any counting happens.
    pub fn transform(
        &self,
        test_identifier: &str,
        data: &[DatasetSample],
        params: Option<&Value>,
    ) -> Result<Vec<Sample>, HarnessError> {
        let test: RepresentationTest = test_identifier.parse()?;
        let expected = resolve_expected(test, params)?;

        let actual = actual_representation(test, data);
        debug!(
            test = %test,
            samples = data.len(),
            categories = expected.len(),
            "Computed representation"
        );

        Ok(expected
            .iter()
            .map(|(category, baseline)| {
                let observed = actual.get(category).copied().unwrap_or(0.0);
                Sample::representation(test.as_str(), category, *baseline, observed)
            })
            .collect())
    }

    /// Run every configured test in identifier order.
    pub fn run_configured(
        &self,
        config: &RepresentationConfig,
        data: &[DatasetSample],
    ) -> Result<Vec<Sample>, HarnessError> {
        // Resolve every baseline first so a bad entry fails before any counting.
        for (identifier, params) in &config.tests {
            let test: RepresentationTest = identifier.parse()?;
            resolve_expected(test, Some(params))?;
        }

        let mut samples = Vec::new();
        for (identifier, params) in &config.tests {
            samples.extend(self.transform(identifier, data, Some(params))?);
        }
        info!(
            tests = config.tests.len(),
            samples = samples.len(),
            "Representation tests complete"
        );
        Ok(samples)
    }
}
