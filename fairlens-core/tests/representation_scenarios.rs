//! End-to-end representation scenarios over small datasets.

use pretty_assertions::assert_eq;
use serde_json::json;

use fairlens_core::dataset::{DatasetSample, NerPrediction};
use fairlens_core::{
    summarize_samples, HarnessError, RepresentationAnalyzer, RepresentationConfig,
    SampleState, ScoreOutput,
};

fn plain_dataset() -> Vec<DatasetSample> {
    vec![
        DatasetSample::Classification {
            text: "the weather was pleasant today".into(),
            labels: vec!["positive".into()],
        },
        DatasetSample::QuestionAnswering {
            question: "what time does the store open".into(),
            context: "the store opens at nine".into(),
            perturbs_context: false,
        },
    ]
}

#[test]
fn default_ethnicity_count_with_no_matching_names() {
    let samples = RepresentationAnalyzer::new()
        .transform("min_ethnicity_name_representation_count", &plain_dataset(), None)
        .unwrap();

    assert_eq!(samples.len(), 6);
    let cases: Vec<&str> = samples
        .iter()
        .filter_map(|s| s.test_case.as_deref())
        .collect();
    let mut expected_cases = vec![
        "asian",
        "black",
        "hispanic",
        "inter_racial",
        "native_american",
        "white",
    ];
    expected_cases.sort();
    let mut sorted_cases = cases.clone();
    sorted_cases.sort();
    assert_eq!(sorted_cases, expected_cases);

    for sample in &samples {
        assert_eq!(sample.category, "representation");
        assert_eq!(sample.test_type, "min_ethnicity_name_representation_count");
        assert_eq!(sample.state, SampleState::Done);
        assert_eq!(sample.expected_results, Some(ScoreOutput::new(10.0)));
        assert_eq!(sample.actual_results, Some(ScoreOutput::new(0.0)));
        assert!(!sample.is_pass());
    }
}

#[test]
fn label_proportion_over_one_fails_before_counting() {
    let params = json!({ "min_proportion": 0.21 });
    let err = RepresentationAnalyzer::new()
        .transform("min_label_representation_proportion", &plain_dataset(), Some(&params))
        .unwrap_err();
    assert!(matches!(err, HarnessError::Config(_)));
    assert!(err.is_configuration());
}

#[test]
fn invalid_params_shape_is_type_validation() {
    let params = json!({ "min_count": [1, 2, 3] });
    let err = RepresentationAnalyzer::new()
        .transform("min_religion_name_representation_count", &plain_dataset(), Some(&params))
        .unwrap_err();
    assert!(matches!(err, HarnessError::TypeValidation(_)));
}

#[test]
fn configured_run_with_summary() {
    let data = vec![DatasetSample::Ner {
        text: "Singh met Garcia in Kenya".into(),
        predictions: vec![
            NerPrediction::new("Singh", "B-PER"),
            NerPrediction::new("met", "O"),
            NerPrediction::new("Garcia", "B-PER"),
            NerPrediction::new("in", "O"),
            NerPrediction::new("Kenya", "B-LOC"),
        ],
    }];

    let mut config = RepresentationConfig::default();
    config.tests.insert(
        "min_label_representation_count".into(),
        json!({ "min_count": { "PER": 2, "O": 2, "LOC": 1 } }),
    );
    config.tests.insert(
        "min_country_economic_representation_count".into(),
        json!({ "min_count": 1 }),
    );

    let samples = RepresentationAnalyzer::new()
        .run_configured(&config, &data)
        .unwrap();
    assert_eq!(samples.len(), 4 + 3);

    let summaries = summarize_samples(&samples, config.min_pass_rate);
    assert_eq!(summaries.len(), 2);

    let economic = &summaries[0];
    assert_eq!(economic.test_type, "min_country_economic_representation_count");
    assert_eq!(economic.pass_count, 1);
    assert_eq!(economic.fail_count, 3);
    assert!(!economic.pass);

    let labels = &summaries[1];
    assert_eq!(labels.test_type, "min_label_representation_count");
    assert_eq!(labels.pass_count, 3);
    assert!(labels.pass);
}
