//! Expected-representation baselines.

use super::{Measure, RepresentationTest};
use crate::error::HarnessError;
use serde_json::Value;
use std::collections::BTreeMap;

/// Default minimum count per category, for every dimension.
pub const DEFAULT_MIN_COUNT: f64 = 10.0;

/// Slack for floating-point sums of proportions that are exactly 1.0 on paper.
const PROPORTION_SUM_TOLERANCE: f64 = 1e-9;

/// Default per-category proportion for a test's dimension.
pub fn default_min_proportion(test: RepresentationTest) -> f64 {
    use crate::gazetteer::Dimension;
    match test.dimension() {
        Dimension::Ethnicity => 0.13,
        Dimension::Religion => 0.11,
        Dimension::CountryEconomic => 0.20,
        Dimension::Label => 0.20,
    }
}

fn broadcast(test: RepresentationTest, value: f64) -> BTreeMap<String, f64> {
    test.dimension()
        .categories()
        .iter()
        .map(|c| (c.to_string(), value))
        .collect()
}

/// The hardcoded baseline for a test.
pub fn default_expected(test: RepresentationTest) -> BTreeMap<String, f64> {
    match test.measure() {
        Measure::Count => broadcast(test, DEFAULT_MIN_COUNT),
        Measure::Proportion => broadcast(test, default_min_proportion(test)),
    }
}

fn non_negative(test: RepresentationTest, key: &str, value: f64) -> Result<f64, HarnessError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(HarnessError::type_validation(format!(
            "{test}: baseline for '{key}' must be a non-negative number, got {value}"
        )))
    }
}

/// Resolve the expected representation for `test`.
///
/// - no params, or params without the measure key: hardcoded defaults
/// - a mapping under `min_count` / `min_proportion`: used verbatim
/// - a number under that key: broadcast over the default template
/// - any other shape: [`HarnessError::TypeValidation`]
///
/// Proportion baselines summing above 1.0 fail with [`HarnessError::Config`].
pub fn resolve_expected(
    test: RepresentationTest,
    params: Option<&Value>,
) -> Result<BTreeMap<String, f64>, HarnessError> {
    let key = test.measure().param_key();
    let raw = match params {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) => map.get(key),
        Some(other) => {
            return Err(HarnessError::type_validation(format!(
                "{test}: params must be a mapping with a '{key}' entry, got {}",
                value_kind(other)
            )));
        }
    };

    let expected = match raw {
        None => default_expected(test),
        Some(Value::Object(entries)) => entries
            .iter()
            .map(|(category, value)| {
                let number = value.as_f64().ok_or_else(|| {
                    HarnessError::type_validation(format!(
                        "{test}: '{key}.{category}' must be a number, got {}",
                        value_kind(value)
                    ))
                })?;
                Ok((category.clone(), non_negative(test, category, number)?))
            })
            .collect::<Result<BTreeMap<_, _>, HarnessError>>()?,
        Some(Value::Number(number)) => {
            let value = number.as_f64().ok_or_else(|| {
                HarnessError::type_validation(format!("{test}: '{key}' is not representable"))
            })?;
            broadcast(test, non_negative(test, key, value)?)
        }
        Some(other) => {
            return Err(HarnessError::type_validation(format!(
                "{test}: '{key}' must be a mapping or a number, got {}",
                value_kind(other)
            )));
        }
    };

    if test.measure() == Measure::Proportion {
        validate_proportion_sum(test, &expected)?;
    }
    Ok(expected)
}

/// Proportion baselines for one dimension cannot exceed 1.0 in total.
pub fn validate_proportion_sum(
    test: RepresentationTest,
    expected: &BTreeMap<String, f64>,
) -> Result<(), HarnessError> {
    let sum: f64 = expected.values().sum();
    if sum > 1.0 + PROPORTION_SUM_TOLERANCE {
        return Err(HarnessError::config(format!(
            "{test}: sum of expected proportions is {sum:.6}, which exceeds 1.0"
        )));
    }
    Ok(())
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
