// SPDX-License-Identifier: PMPL-1.0-or-later

//! Flair rendering.
//!
//! Collapses a [`PostRecord`] into the category / text pair the
//! platform shows next to the post, e.g. `de` / `German (Identified)`
//! or `multiple` / `Multiple Languages [DE, FR✔]`.

use std::collections::BTreeMap;

use crate::registry::Registry;
use crate::types::Status;

use super::multiple::format_defined_tag;
use super::{LanguageInfo, MultipleLanguageInfo, PostRecord, SingleLanguageInfo, StatusField};

/// A rendered flair: the template category and its display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFlair {
    pub category: String,
    pub text: String,
}

/// Recompute the flair from the record's current state.
pub fn render(registry: &Registry, record: &PostRecord) -> RenderedFlair {
    match &record.languages {
        LanguageInfo::Single(info) => render_single(record, info),
        LanguageInfo::Multiple(info) => render_multiple(registry, record, info),
    }
}

fn render_single(record: &PostRecord, info: &SingleLanguageInfo) -> RenderedFlair {
    let plain = !matches!(info.language_name.as_str(), "Unknown" | "Generic" | "");
    let (code_tag, category) = if plain {
        // Codes without their own flair fall back to the generic one
        // but still show which language they are.
        let category = if info.is_supported {
            info.language_code.clone()
        } else {
            "generic".to_string()
        };
        (format!("[{}]", info.language_code.to_uppercase()), category)
    } else if info.language_name == "Unknown" {
        ("[?]".to_string(), "unknown".to_string())
    } else {
        ("[--]".to_string(), "generic".to_string())
    };

    // Workflow statuses take over the whole flair.
    let status = match &record.status {
        StatusField::Single(status) => *status,
        StatusField::PerLanguage(_) => Status::Untranslated,
    };
    if status != Status::Untranslated {
        return RenderedFlair {
            category: status.label().to_string(),
            text: format!("{} {}", status.description(), code_tag),
        };
    }

    let mut text = info.language_name.clone();
    if let Some(country) = &info.country_code {
        text = format!("{text} {{{country}}}");
    }
    if info.language_name != "Unknown" {
        if record.is_identified {
            text.push_str(" (Identified)");
        }
        if record.is_long {
            text.push_str(" (Long)");
        }
    } else if record.is_script {
        if let Some(script) = &info.script_name {
            text = format!("{script} (Script)");
        }
    }
    RenderedFlair { category, text }
}

fn render_multiple(
    registry: &Registry,
    record: &PostRecord,
    info: &MultipleLanguageInfo,
) -> RenderedFlair {
    let category = if info.language_name == "App" { "app" } else { "multiple" };
    if info.language_codes.is_empty() {
        // Catch-all request, no per-language tag to show.
        return RenderedFlair {
            category: category.to_string(),
            text: info.language_name.clone(),
        };
    }

    let tag = match &record.status {
        StatusField::PerLanguage(statuses) => format_defined_tag(registry, statuses),
        StatusField::Single(_) => {
            let untouched: BTreeMap<String, Status> = info
                .language_codes
                .iter()
                .map(|code| (code.clone(), Status::Untranslated))
                .collect();
            format_defined_tag(registry, &untouched)
        }
    };
    RenderedFlair {
        category: category.to_string(),
        text: format!("{} {}", info.language_name, tag),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Classifier;

    fn record_for(registry: &Registry, title: &str) -> PostRecord {
        let classification = Classifier::new(registry).classify(title).unwrap();
        PostRecord::new(registry, "t3_abc123", "sender", 0, title, &classification)
    }

    #[test]
    fn test_untranslated_single_shows_the_name() {
        let registry = Registry::new();
        let record = record_for(&registry, "[German > English] Hello");

        let flair = render(&registry, &record);
        assert_eq!(flair.category, "de");
        assert_eq!(flair.text, "German");
    }

    #[test]
    fn test_workflow_status_takes_over_the_text() {
        let registry = Registry::new();
        let mut record = record_for(&registry, "[German > English] Hello");

        record.set_status(Status::Translated);
        let flair = render(&registry, &record);
        assert_eq!(flair.category, "translated");
        assert_eq!(flair.text, "Translated [DE]");

        record.set_status(Status::DoubleCheck);
        let flair = render(&registry, &record);
        assert_eq!(flair.category, "doublecheck");
        assert_eq!(flair.text, "Needs Review [DE]");

        record.set_status(Status::InProgress);
        assert_eq!(render(&registry, &record).text, "In Progress [DE]");

        record.set_status(Status::MissingAssets);
        assert_eq!(render(&registry, &record).text, "Missing Assets [DE]");
    }

    #[test]
    fn test_identified_and_long_marks_append() {
        let registry = Registry::new();
        let mut record = record_for(&registry, "[Unknown] mystery text");
        record.identify(&registry, "zh", false).unwrap();
        record.set_long(true);

        let flair = render(&registry, &record);
        assert_eq!(flair.category, "zh");
        assert_eq!(flair.text, "Chinese (Identified) (Long)");
    }

    #[test]
    fn test_country_variant_rides_in_braces() {
        let registry = Registry::new();
        let mut record = record_for(&registry, "[German > English] Hello");
        record.set_country(Some("at"));

        let flair = render(&registry, &record);
        assert_eq!(flair.text, "German {AT}");
    }

    #[test]
    fn test_unknown_posts_render_the_question_tag() {
        let registry = Registry::new();
        let record = record_for(&registry, "[Unknown] mystery text");

        let flair = render(&registry, &record);
        assert_eq!(flair.category, "unknown");
        assert_eq!(flair.text, "Unknown");
    }

    #[test]
    fn test_scripted_unknown_renders_the_script_name() {
        let registry = Registry::new();
        let mut record = record_for(&registry, "[Unknown] worn inscription");
        record.identify(&registry, "cyrl", true).unwrap();

        let flair = render(&registry, &record);
        assert_eq!(flair.category, "unknown");
        assert_eq!(flair.text, "Cyrillic (Script)");
    }

    #[test]
    fn test_unsupported_languages_fall_back_to_generic_flair() {
        let registry = Registry::new();
        let mut record = record_for(&registry, "[Unknown] clay tablet");
        record.identify(&registry, "akk", true).unwrap();

        let flair = render(&registry, &record);
        assert_eq!(flair.category, "generic");
        assert_eq!(flair.text, "Akkadian (Identified)");
    }

    #[test]
    fn test_defined_multiple_tracks_each_language() {
        let registry = Registry::new();
        let mut record = record_for(&registry, "[German > English] Hello");
        record
            .set_defined_multiple(&registry, "czech+german+hungarian+italian+dutch")
            .unwrap();
        record.set_status_multiple("de", Status::Translated);
        record.set_status_multiple("nl", Status::Translated);
        record.set_status_multiple("hu", Status::DoubleCheck);

        let flair = render(&registry, &record);
        assert_eq!(flair.category, "multiple");
        assert_eq!(flair.text, "Multiple Languages [CS, DE✔, HU✓, IT, NL✔]");
    }
}
