// SPDX-License-Identifier: PMPL-1.0-or-later

//! Final assembly of a title classification.
//!
//! Turns a resolved code into flair text, fences off codes nobody has
//! flair for, recovers the post's real title, and makes two late
//! reclassifications: multiple-target requests that are really app
//! localizations, and all-generic results that still hold one usable
//! language name.

use crate::convert::convert;
use crate::registry::Registry;
use crate::types::TitleClassification;

use super::disambiguate::Resolution;
use super::extract::ExtractedLanguages;
use super::mentions::app_multiple_definer;

pub(crate) fn finalize(
    registry: &Registry,
    extracted: ExtractedLanguages,
    resolution: Resolution,
) -> TitleClassification {
    let Resolution {
        mut sources,
        mut targets,
        mut css,
        mut notify,
        mut language_country,
        type_o,
        direction,
    } = resolution;

    let mut text;
    if css.len() != 4 {
        text = convert(registry, &css).name;
        if let Some(ref pair) = language_country {
            // Pairs with a dedicated code already carry their region in
            // the name; the rest get the country appended.
            if !pair.is_empty() && registry.regional_code(pair).is_none() && css != "multiple" {
                let suffix = pair.get(pair.len().saturating_sub(2)..).unwrap_or("");
                text = format!("{text} {{{suffix}}}");
            }
        }
    } else {
        // Four letters is an ISO 15924 script, not a language.
        let script = registry.script_name(&css).unwrap_or("");
        text = format!("{script} (Script)");
        language_country = Some(format!("unknown-{css}"));
    }

    // Multiple requests list their codes in the flair text, trimmed to
    // fit the flair length limit.
    if let Some(ref notify_list) = notify {
        if notify_list.len() >= 2 && css == "multiple" {
            let mut codes: Vec<String> = Vec::new();
            let mut tag = String::new();
            for language in notify_list {
                codes.push(convert(registry, language).code.to_uppercase());
                codes.sort();
                codes.retain(|c| c != "MULTIPLE");
                codes.retain(|c| c != "UNKNOWN");
                if codes.join(", ").chars().count() > 34 {
                    let mut short: Vec<String> = Vec::new();
                    for code in &codes {
                        if short.join(", ").chars().count() <= 30 {
                            short.push(code.clone());
                        }
                    }
                    codes = short;
                }
                tag = format!(" [{}]", codes.join(", "));
            }
            text.push_str(&tag);
        }
    }

    if type_o && css == "multiple" {
        // Optional targets: settle on a single class. Notifications
        // stay when English is the source, since any target may answer.
        if sources.iter().any(|s| s == "English") {
            css = convert(registry, &targets[0]).code;
            text = targets[0].clone();
        } else {
            css = convert(registry, &sources[0]).code;
            text = sources[0].clone();
            notify = None;
        }
    }

    if !registry.is_supported_code(&css) && css.len() != 4 {
        // No flair exists for this code.
        css = "generic".to_string();
    } else if css.len() == 4 {
        css = "unknown".to_string();
    }

    let mut actual_title = String::new();
    if extracted.cut_title.contains(']') {
        actual_title = extracted
            .cut_title
            .split_once(']')
            .map(|(_, t)| t.trim().to_string())
            .unwrap_or_default();
    } else if extracted.cut_title.contains("English") {
        actual_title = extracted
            .cut_title
            .split_once("English")
            .map(|(_, t)| t.trim().to_string())
            .unwrap_or_default();
    }
    if let Some(first) = actual_title.chars().next() {
        if "])>,.:".contains(first) {
            actual_title = actual_title[first.len_utf8()..].trim().to_string();
        }
    }

    // Multiple requests that read like product localization become App.
    if css == "multiple" && app_multiple_definer(&actual_title) {
        css = "app".to_string();
        text = text.replace("Multiple Languages", "App");
        if targets.len() == 1 && targets[0] == "Multiple Languages" {
            targets = vec!["App".to_string()];
        }
    }

    if css == "generic" && text == "Generic" {
        if let Some((code, name)) = salvage(registry, &sources, &targets) {
            css = code;
            text = name;
        }
    }

    TitleClassification {
        source_languages: sources,
        target_languages: targets,
        final_code: css,
        final_text: text,
        actual_title,
        processed_title: extracted.processed_title,
        notify_languages: notify,
        language_country,
        direction,
    }
}

/// Last try at pulling something classifiable out of an all-generic
/// result.
fn salvage(
    registry: &Registry,
    sources: &[String],
    targets: &[String],
) -> Option<(String, String)> {
    let candidate = sources
        .iter()
        .chain(targets.iter())
        .find(|name| name.as_str() != "Generic" && name.as_str() != "English")?;
    let data = convert(registry, candidate);
    Some((data.code, data.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::disambiguate::resolve;
    use crate::pipeline::extract::extract;
    use crate::pipeline::normalize::TitleContext;

    fn run(title: &str) -> TitleClassification {
        let registry = Registry::new();
        let extracted = extract(&registry, title);
        let context = TitleContext::new(title);
        let resolution = resolve(&registry, &extracted, &context);
        finalize(&registry, extracted, resolution)
    }

    #[test]
    fn test_single_pair_gets_code_and_name() {
        let out = run("[German > English] Hello");
        assert_eq!(out.final_code, "de");
        assert_eq!(out.final_text, "German");
        assert_eq!(out.actual_title, "Hello");
    }

    #[test]
    fn test_multiple_targets_list_their_codes() {
        let out = run("[English > German, French, Dutch] flyer");
        assert_eq!(out.final_code, "multiple");
        assert_eq!(out.final_text, "Multiple Languages [DE, FR, NL]");
        assert_eq!(out.actual_title, "flyer");
    }

    #[test]
    fn test_long_code_lists_are_trimmed() {
        let out = run(
            "[English > German, French, Dutch, Italian, Spanish, Polish, Czech, Danish, Finnish, Swedish, Hungarian] huge flyer",
        );
        assert_eq!(out.final_code, "multiple");
        // Eleven targets, but only nine codes fit under the flair limit.
        assert_eq!(
            out.final_text,
            "Multiple Languages [CS, DA, DE, ES, FI, FR, HU, IT, NL]"
        );
    }

    #[test]
    fn test_optional_targets_collapse_to_one() {
        let out = run("[English > German or French] flyer");
        assert_eq!(out.final_code, "fr");
        assert_eq!(out.final_text, "French");
        // Notifications stay for the languages that were dropped.
        assert!(out.notify_languages.is_some());
    }

    #[test]
    fn test_unsupported_codes_fall_back_to_generic_flair() {
        // Akkadian converts but has no flair of its own.
        let out = run("[Akkadian > English] clay tablet");
        assert_eq!(out.final_code, "generic");
        assert_eq!(out.final_text, "Akkadian");
    }

    #[test]
    fn test_salvage_recovers_a_language_from_generic() {
        let out = run("my friend sent this chinese to me");
        assert_eq!(out.final_code, "zh");
        assert_eq!(out.final_text, "Chinese");
        assert_eq!(out.actual_title, "");
    }

    #[test]
    fn test_all_generic_titles_stay_generic() {
        let out = run("my friend sent this to me");
        assert_eq!(out.final_code, "generic");
        assert_eq!(out.final_text, "Generic");
        assert_eq!(out.source_languages, vec!["Generic"]);
        assert_eq!(out.notify_languages, None);
    }

    #[test]
    fn test_app_localization_is_reclassified() {
        let out = run("[English > Japanese, Korean, Chinese] strings for my app translation");
        assert_eq!(out.final_code, "app");
        assert!(out.final_text.starts_with("App ["));
    }
}
