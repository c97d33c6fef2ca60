// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end post lifecycle checks: classify, record, reclassify,
//! track statuses, render the flair at every step.

use lingo_triage::pipeline::Classifier;
use lingo_triage::registry::Registry;
use lingo_triage::state::{parse_flair_text, render, PostRecord, StatusField};
use lingo_triage::types::Status;

fn record_for(registry: &Registry, title: &str) -> PostRecord {
    let classification = Classifier::new(registry).classify(title).unwrap();
    PostRecord::new(
        registry,
        "t3_q4xw2p",
        "submitter",
        1_700_000_000,
        title,
        &classification,
    )
}

#[test]
fn test_unknown_post_identification_flow() {
    let registry = Registry::new();
    let mut record = record_for(&registry, "[?] letter my grandfather kept");

    let flair = render(&registry, &record);
    assert_eq!(flair.category, "unknown");
    assert_eq!(flair.text, "Unknown");
    assert!(!record.is_identified);

    record.identify(&registry, "chinese", false).unwrap();

    assert!(record.is_identified);
    assert_eq!(record.language_history, vec!["Unknown", "Chinese"]);
    let flair = render(&registry, &record);
    assert_eq!(flair.category, "zh");
    assert_eq!(flair.text, "Chinese (Identified)");
}

#[test]
fn test_multiple_flair_round_trips_through_parsing() {
    let registry = Registry::new();
    let mut record = record_for(&registry, "[English > German, French] company newsletter");

    let flair = render(&registry, &record);
    assert_eq!(flair.category, "multiple");
    assert_eq!(flair.text, "Multiple Languages [DE, FR]");

    let parsed = parse_flair_text(&flair.text).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed["de"], Status::Untranslated);
    assert_eq!(parsed["fr"], Status::Untranslated);

    record.set_status_multiple("de", Status::Translated);
    let flair = render(&registry, &record);
    assert_eq!(flair.text, "Multiple Languages [DE✔, FR]");

    let parsed = parse_flair_text(&flair.text).unwrap();
    assert_eq!(parsed["de"], Status::Translated);
    assert_eq!(parsed["fr"], Status::Untranslated);
}

#[test]
fn test_translation_lifecycle_records_first_timestamps() {
    let registry = Registry::new();
    let mut record = record_for(&registry, "[Japanese > English] letter from 1945");

    record.set_status(Status::InProgress);
    record.set_time(Status::InProgress, 120);
    let flair = render(&registry, &record);
    assert_eq!(flair.category, "inprogress");
    assert_eq!(flair.text, "In Progress [JA]");

    record.set_status(Status::DoubleCheck);
    record.set_time(Status::DoubleCheck, 300);
    record.set_status(Status::Translated);
    record.set_time(Status::Translated, 900);

    // Re-reaching a status keeps the first timestamp.
    record.set_time(Status::Translated, 2_000);

    assert_eq!(record.time_delta[&Status::InProgress], 120);
    assert_eq!(record.time_delta[&Status::DoubleCheck], 300);
    assert_eq!(record.time_delta[&Status::Translated], 900);

    let flair = render(&registry, &record);
    assert_eq!(flair.category, "translated");
    assert_eq!(flair.text, "Translated [JA]");
}

#[test]
fn test_reset_returns_to_the_submitted_classification() {
    let registry = Registry::new();
    let mut record = record_for(&registry, "[German > English] old war diary");

    record.identify(&registry, "french", false).unwrap();
    record.set_status(Status::InProgress);
    record.set_time(Status::InProgress, 60);
    record.add_contributor("helpful_stranger");
    record.set_long(true);
    assert_eq!(record.languages.name(), "French");

    record.reset(&registry).unwrap();

    assert_eq!(record.languages.name(), "German");
    assert_eq!(record.status, StatusField::Single(Status::Untranslated));
    assert!(!record.is_identified);
    assert!(record.time_delta.is_empty());
    assert_eq!(record.contributors, vec!["helpful_stranger"]);
    assert!(record.is_long);
    assert_eq!(record.language_history, vec!["German", "French"]);

    let flair = render(&registry, &record);
    assert_eq!(flair.category, "de");
    assert_eq!(flair.text, "German (Long)");
}

#[test]
fn test_translated_languages_hold_through_later_updates() {
    let registry = Registry::new();
    let mut record = record_for(&registry, "[English > Czech, Polish] fan subtitles");

    record.set_status_multiple("cs", Status::Translated);
    record.set_status_multiple("cs", Status::InProgress);
    record.set_status_multiple("pl", Status::InProgress);

    let flair = render(&registry, &record);
    assert_eq!(flair.text, "Multiple Languages [CS✔, PL¦]");
}

#[test]
fn test_identification_can_move_a_post_between_kinds() {
    let registry = Registry::new();
    let mut record = record_for(&registry, "[Spanish > English] recipe card");

    record.identify(&registry, "portuguese+spanish", false).unwrap();
    match &record.status {
        StatusField::PerLanguage(statuses) => {
            assert!(statuses.contains_key("es"));
            assert!(statuses.contains_key("pt"));
        }
        StatusField::Single(_) => panic!("defined multiple should track per-language status"),
    }

    record.identify(&registry, "catalan", false).unwrap();
    assert_eq!(record.languages.name(), "Catalan");
    assert_eq!(record.status, StatusField::Single(Status::Untranslated));
    assert_eq!(
        record.language_history,
        vec!["Spanish", "Multiple Languages", "Catalan"]
    );
}
