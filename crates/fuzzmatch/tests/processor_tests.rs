//! Routing tests for FuzzyMatchProcessor

use fuzzmatch::{
    Error, FlowRecord, FuzzyMatchProcessor, MatchError, ProcessorConfig, Record, Relationship,
    RATIO_ATTRIBUTE,
};
use pretty_assertions::assert_eq;

/// Processor comparing the `name` attribute against a fixed target
fn processor(match_type: &str, threshold: &str, target: &str) -> FuzzyMatchProcessor {
    let config = ProcessorConfig::new("${name}", target)
        .with_match_type(match_type)
        .with_threshold(threshold);
    FuzzyMatchProcessor::new(config).unwrap()
}

fn record(name: &str) -> FlowRecord {
    FlowRecord::new(format!("rec-{}", name))
        .with_attribute("name", name)
        .with_content("payload")
}

#[test]
fn test_low_score_routes_unmatched() {
    let processor = processor("ratio", "80", "Yankees");
    let routed = processor.on_trigger(record("New York Mets")).unwrap();

    assert_eq!(routed.relationship, Relationship::Unmatched);
    assert!(!routed.result.matched);
    assert_eq!(
        routed.record.attribute(RATIO_ATTRIBUTE),
        Some(routed.result.score.to_string().as_str())
    );
}

#[test]
fn test_reordered_words_route_matched() {
    let processor = processor("tokenSortRatio", "90", "wuzzy fuzzy was a bear");
    let routed = processor.on_trigger(record("fuzzy wuzzy was a bear")).unwrap();

    assert_eq!(routed.relationship, Relationship::Matched);
    assert_eq!(routed.record.attribute(RATIO_ATTRIBUTE), Some("100"));
}

#[test]
fn test_token_set_partial_routes_matched() {
    let processor = processor(
        "tokenSetPartialRatio",
        "70",
        "los angeles angels at seattle mariners",
    );
    let routed = processor.on_trigger(record("mariners vs angels")).unwrap();

    assert_eq!(routed.relationship, Relationship::Matched);
    assert!(routed.result.score >= 70);
}

#[test]
fn test_existing_attributes_and_content_preserved() {
    let processor = processor("ratio", "0", "anything");
    let input = record("something").with_attribute("other", "kept");
    let routed = processor.on_trigger(input).unwrap();

    assert_eq!(routed.record.attribute("other"), Some("kept"));
    assert_eq!(routed.record.attribute("name"), Some("something"));
    assert_eq!(routed.record.content, b"payload".to_vec());
    assert_eq!(routed.relationship, Relationship::Matched);
}

#[test]
fn test_threshold_from_attribute() {
    let config = ProcessorConfig::new("${name}", "hallo").with_threshold("${cutoff}");
    let processor = FuzzyMatchProcessor::new(config).unwrap();

    let strict = record("hello").with_attribute("cutoff", "81");
    assert_eq!(processor.on_trigger(strict).unwrap().relationship, Relationship::Unmatched);

    let lenient = record("hello").with_attribute("cutoff", "80");
    assert_eq!(processor.on_trigger(lenient).unwrap().relationship, Relationship::Matched);
}

#[test]
fn test_unparseable_threshold_attribute_fails() {
    let config = ProcessorConfig::new("${name}", "hallo").with_threshold("${cutoff}");
    let processor = FuzzyMatchProcessor::new(config).unwrap();

    let err = processor
        .on_trigger(record("hello").with_attribute("cutoff", "high"))
        .unwrap_err();
    assert!(matches!(err, Error::Match(MatchError::InvalidThreshold(ref t)) if t == "high"));

    let err = processor
        .on_trigger(record("hello").with_attribute("cutoff", "150"))
        .unwrap_err();
    assert!(matches!(err, Error::Match(MatchError::InvalidThreshold(_))));
}

#[test]
fn test_bogus_match_type_rejected_at_configuration() {
    let config = ProcessorConfig::new("a", "b").with_match_type("bogus");
    let err = FuzzyMatchProcessor::new(config).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_config_from_json() {
    let config = ProcessorConfig::from_json(
        r#"{
            "Match Type": "weightedRatio",
            "Match Threshold": "85",
            "Match Against": "this is a test",
            "Match Input": "${name}"
        }"#,
    )
    .unwrap();
    let processor = FuzzyMatchProcessor::new(config).unwrap();

    let routed = processor.on_trigger(record("test")).unwrap();
    assert_eq!(routed.record.attribute(RATIO_ATTRIBUTE), Some("90"));
    assert_eq!(routed.relationship, Relationship::Matched);
}

#[test]
fn test_every_match_type_scores_identical_names_100() {
    for key in fuzzmatch::AlgorithmKind::keys() {
        let processor = processor(key, "100", "Seattle Mariners");
        let routed = processor.on_trigger(record("Seattle Mariners")).unwrap();
        assert_eq!(routed.record.attribute(RATIO_ATTRIBUTE), Some("100"), "{}", key);
        assert_eq!(routed.relationship, Relationship::Matched);
    }
}
