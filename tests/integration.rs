// SPDX-License-Identifier: PMPL-1.0-or-later

//! Whole-crate flow: filter a title, classify it, persist a record,
//! walk it through the translation workflow, render the flair.

use rayon::prelude::*;
use tempfile::TempDir;

use lingo_triage::pipeline::{check_title, Classifier};
use lingo_triage::registry::Registry;
use lingo_triage::state::{render, PostRecord};
use lingo_triage::storage::RecordStore;
use lingo_triage::types::Status;

#[test]
fn test_post_lifecycle_from_title_to_translated() {
    let registry = Registry::new();
    let classifier = Classifier::new(&registry);
    let dir = TempDir::new().unwrap();
    let store = RecordStore::new(dir.path());

    let title = "[Japanese > English] menu from my grandfather's restaurant";
    let verdict = check_title(&registry, title);
    assert!(verdict.is_accepted());

    let classification = classifier.classify(title).unwrap();
    assert_eq!(classification.final_code, "ja");

    let record = PostRecord::new(
        &registry,
        "t3_menu01",
        "diner",
        1_700_000_000,
        title,
        &classification,
    );
    store.save(&record).unwrap();

    let mut record = store.load("t3_menu01").unwrap();
    assert_eq!(render(&registry, &record).text, "Japanese");

    record.set_status(Status::InProgress);
    record.set_time(Status::InProgress, 600);
    record.add_contributor("kind_translator");
    store.save(&record).unwrap();

    let mut record = store.load("t3_menu01").unwrap();
    assert_eq!(render(&registry, &record).text, "In Progress [JA]");

    record.set_status(Status::Translated);
    record.set_time(Status::Translated, 5_400);
    store.save(&record).unwrap();

    let record = store.load("t3_menu01").unwrap();
    let flair = render(&registry, &record);
    assert_eq!(flair.category, "translated");
    assert_eq!(flair.text, "Translated [JA]");
    assert_eq!(record.contributors, vec!["kind_translator"]);
    assert_eq!(record.time_delta[&Status::InProgress], 600);
}

#[test]
fn test_misidentified_post_corrected_and_persisted() {
    let registry = Registry::new();
    let classifier = Classifier::new(&registry);
    let dir = TempDir::new().unwrap();
    let store = RecordStore::new(dir.path());

    let title = "[Unknown] pendant bought at a flea market";
    let classification = classifier.classify(title).unwrap();
    let mut record = PostRecord::new(&registry, "t3_pend01", "finder", 0, title, &classification);
    store.save(&record).unwrap();

    record.identify(&registry, "thai", false).unwrap();
    store.save(&record).unwrap();

    let record = store.load("t3_pend01").unwrap();
    assert!(record.is_identified);
    assert_eq!(record.languages.name(), "Thai");
    assert_eq!(record.language_history, vec!["Unknown", "Thai"]);
    assert_eq!(render(&registry, &record).text, "Thai (Identified)");
    // The classification at submission time stays on record.
    assert_eq!(record.original_source_languages, vec!["Unknown"]);
}

#[test]
fn test_parallel_classification_matches_serial() {
    let registry = Registry::new();
    let classifier = Classifier::new(&registry);
    let titles: Vec<String> = [
        "[German > English] a postcard",
        "[English > Japanese, Korean] fan letter",
        "[Unknown] carved box",
        "chinese tattoo help",
        "[Russian > English] grandmother's recipe",
    ]
    .iter()
    .cycle()
    .take(50)
    .map(|t| t.to_string())
    .collect();

    let serial: Vec<String> = titles
        .iter()
        .map(|t| classifier.classify(t).unwrap().final_code)
        .collect();
    let parallel: Vec<String> = titles
        .par_iter()
        .map(|t| classifier.classify(t).unwrap().final_code)
        .collect();

    assert_eq!(serial, parallel);
}
