// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end classification of whole titles

use lingo_triage::pipeline::Classifier;
use lingo_triage::registry::Registry;
use lingo_triage::types::{Directionality, TitleClassification};

fn classify(title: &str) -> TitleClassification {
    let registry = Registry::new();
    Classifier::new(&registry).classify(title).unwrap()
}

#[test]
fn test_tagged_pair_to_english() {
    let result = classify("[German > English] Hello");

    assert_eq!(result.source_languages, vec!["German"]);
    assert_eq!(result.target_languages, vec!["English"]);
    assert_eq!(result.final_code, "de");
    assert_eq!(result.final_text, "German");
    assert_eq!(result.actual_title, "Hello");
    assert_eq!(result.direction, Directionality::EnglishTo);
}

#[test]
fn test_untagged_pair_from_english() {
    let result = classify("English to Japanese - help");

    assert_eq!(result.source_languages, vec!["English"]);
    assert_eq!(result.target_languages, vec!["Japanese"]);
    assert_eq!(result.final_code, "ja");
    assert_eq!(result.direction, Directionality::EnglishFrom);
}

#[test]
fn test_reversed_arrow_is_normalized_not_swapped() {
    let result = classify("[English < Chinese] my friend sent this to me");

    assert_eq!(result.final_code, "zh");
    assert_eq!(result.direction, Directionality::EnglishFrom);
    assert!(result.processed_title.contains('>'));
    assert!(!result.processed_title.contains('<'));
}

#[test]
fn test_untagged_mention_salvages_a_language() {
    let result = classify("my friend sent this chinese to me");

    assert_eq!(result.source_languages, vec!["Chinese"]);
    assert_eq!(result.target_languages, vec!["Generic"]);
    assert_eq!(result.final_code, "zh");
    assert_eq!(result.final_text, "Chinese");
    assert_eq!(result.direction, Directionality::EnglishNone);
}

#[test]
fn test_unknown_tag_classification() {
    let result = classify("[Unknown] mystery text");

    assert_eq!(result.source_languages, vec!["Unknown"]);
    assert_eq!(result.target_languages, vec!["English"]);
    assert_eq!(result.final_code, "unknown");
    assert_eq!(result.final_text, "Unknown");
    assert_eq!(result.direction, Directionality::EnglishTo);
}

#[test]
fn test_question_marks_classify_as_unknown() {
    let result = classify("??? can anyone read this stamp");

    assert_eq!(result.final_code, "unknown");
    assert_eq!(result.final_text, "Unknown");
}

#[test]
fn test_defined_multiple_lists_codes_in_the_text() {
    let result = classify("[eng > zh, German, French] diaspora newsletter");

    assert_eq!(result.final_code, "multiple");
    assert_eq!(result.final_text, "Multiple Languages [DE, FR, ZH]");
    assert_eq!(result.direction, Directionality::EnglishFrom);

    let notify = result.notify_languages.expect("multiple targets notify");
    assert!(notify.contains(&"Chinese".to_string()));
    assert!(notify.contains(&"French".to_string()));
    assert!(notify.contains(&"German".to_string()));
}

#[test]
fn test_country_tag_rides_along_as_a_region() {
    let result = classify("[German {Austria} > English] grandfather's letter");

    assert_eq!(result.final_code, "de");
    assert_eq!(result.final_text, "German {AT}");
    assert_eq!(result.language_country.as_deref(), Some("de-AT"));
}

#[test]
fn test_sources_and_targets_are_sorted_and_deduplicated() {
    let result = classify("[German, french, German > English] twice over");

    assert_eq!(result.source_languages, vec!["French", "German"]);
    assert_eq!(result.target_languages, vec!["English"]);
}

#[test]
fn test_classification_never_returns_empty_language_lists() {
    for title in [
        "",
        "]][[",
        "> > > >",
        "12345",
        "[ > ] nothing here",
        "just some words",
    ] {
        let result = classify(title);
        assert!(!result.source_languages.is_empty(), "sources for {title:?}");
        assert!(!result.target_languages.is_empty(), "targets for {title:?}");
    }
}

#[test]
fn test_classification_is_deterministic_across_runs() {
    let registry = Registry::new();
    let classifier = Classifier::new(&registry);
    let title = "[Japanese > English] what does my tattoo say";

    let first = classifier.classify(title).unwrap();
    for _ in 0..5 {
        assert_eq!(classifier.classify(title).unwrap(), first);
    }
}
