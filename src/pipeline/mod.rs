// SPDX-License-Identifier: PMPL-1.0-or-later

//! Title classification pipeline.
//!
//! A raw post title passes through four stages: normalization (ordered
//! rewrite rules), extraction (source and target token lists),
//! disambiguation (code selection, multiples, regional varieties), and
//! finalization (flair text, app detection, salvage). The whole chain
//! is deterministic: the same title and registry always produce the
//! same classification.
//!
//! The [`filter`] module is the gatekeeper that runs before any of
//! this; [`mentions`] holds the shared helpers for spotting language
//! names in running text.

mod disambiguate;
mod extract;
pub mod filter;
mod finalize;
pub mod mentions;
mod normalize;

use std::panic::{self, AssertUnwindSafe};

use anyhow::{anyhow, Result};

use crate::convert::title_case;
use crate::registry::Registry;
use crate::types::{Directionality, TitleClassification};

pub use filter::check_title;
pub use mentions::{bad_title_reformat, split_language_list};
pub use normalize::{NormalizeRule, Normalizer};

/// First `n` characters of `text`.
pub(crate) fn char_prefix(text: &str, n: usize) -> String {
    text.chars().take(n).collect()
}

/// The full title pipeline bound to a registry.
pub struct Classifier<'r> {
    registry: &'r Registry,
    normalizer: Normalizer,
}

impl<'r> Classifier<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Classifier {
            registry,
            normalizer: Normalizer::new(),
        }
    }

    /// Classify one post title.
    ///
    /// Total over well-formed and malformed titles alike; a panic
    /// anywhere in the pipeline is caught and surfaced as an error
    /// instead of unwinding into the caller.
    pub fn classify(&self, title: &str) -> Result<TitleClassification> {
        panic::catch_unwind(AssertUnwindSafe(|| self.classify_inner(title)))
            .map_err(|_| anyhow!("classification panicked on title {title:?}"))
    }

    fn classify_inner(&self, title: &str) -> TitleClassification {
        let mut context = normalize::TitleContext::new(title);
        self.normalizer.apply(self.registry, &mut context);
        let title = context.title.clone();

        // A bare "[Unknown]" tag skips the rest of the pipeline.
        if title_case(&title).contains("[Unknown]") {
            let actual = title
                .split_once(']')
                .map(|(_, t)| t.to_string())
                .unwrap_or_default();
            return unknown_classification(actual, title);
        }
        // So does a title that opens with question marks.
        if char_prefix(&title, 5).contains("???")
            || char_prefix(&title, 4).contains("??")
            || char_prefix(&title, 3).contains('?')
        {
            let actual = title.split(']').nth(1).unwrap_or("").to_string();
            return unknown_classification(actual, title);
        }

        let extracted = extract::extract(self.registry, &title);
        let resolution = disambiguate::resolve(self.registry, &extracted, &context);
        finalize::finalize(self.registry, extracted, resolution)
    }
}

fn unknown_classification(actual_title: String, processed_title: String) -> TitleClassification {
    TitleClassification {
        source_languages: vec!["Unknown".to_string()],
        target_languages: vec!["English".to_string()],
        final_code: "unknown".to_string(),
        final_text: "Unknown".to_string(),
        actual_title,
        processed_title,
        notify_languages: None,
        language_country: None,
        direction: Directionality::EnglishTo,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tag_short_circuits() {
        let registry = Registry::new();
        let classifier = Classifier::new(&registry);
        let out = classifier.classify("[Unknown] mystery text").unwrap();
        assert_eq!(out.final_code, "unknown");
        assert_eq!(out.final_text, "Unknown");
        assert_eq!(out.source_languages, vec!["Unknown"]);
        assert_eq!(out.target_languages, vec!["English"]);
        assert_eq!(out.actual_title, " mystery text");
        assert_eq!(out.direction, Directionality::EnglishTo);
    }

    #[test]
    fn test_question_marks_mean_unknown() {
        let registry = Registry::new();
        let classifier = Classifier::new(&registry);
        let out = classifier.classify("??? what is this").unwrap();
        assert_eq!(out.final_code, "unknown");
        assert_eq!(out.actual_title, "");
    }

    #[test]
    fn test_classification_is_deterministic() {
        let registry = Registry::new();
        let classifier = Classifier::new(&registry);
        let first = classifier.classify("[Japanese > English] a menu").unwrap();
        let second = classifier.classify("[Japanese > English] a menu").unwrap();
        assert_eq!(first, second);
    }
}
