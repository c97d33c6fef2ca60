// SPDX-License-Identifier: PMPL-1.0-or-later

//! Classification of the extracted language lists.
//!
//! Decides the primary code (the flair CSS class), whether this is a
//! multiple-target request, which languages deserve notifications, and
//! whether a regional variety like `ar-LB` is in play. Order matters
//! here: the multiple-target test can overrule the pairwise choice, and
//! the regional pass can overrule both.

use crate::convert::{convert, country_validator};
use crate::registry::Registry;
use crate::types::Directionality;

use super::extract::ExtractedLanguages;
use super::normalize::TitleContext;

/// Outcome of the disambiguation stage.
pub(crate) struct Resolution {
    pub sources: Vec<String>,
    pub targets: Vec<String>,
    pub css: String,
    pub notify: Option<Vec<String>>,
    pub language_country: Option<String>,
    /// An "or" appeared among the targets; the multiple choice is soft.
    pub type_o: bool,
    pub direction: Directionality,
}

/// Languages worth notifying when English is on neither side.
fn both_non_english(sources: &[String], targets: &[String]) -> Option<Vec<String>> {
    let mut combined: Vec<String> = Vec::new();
    for name in sources.iter().chain(targets.iter()) {
        if !combined.contains(name) {
            combined.push(name.clone());
        }
    }
    combined.sort();
    if combined.iter().any(|n| n == "English") || combined.len() <= 1 {
        None
    } else {
        Some(combined)
    }
}

fn remove_one(list: &mut Vec<String>, name: &str) {
    if let Some(pos) = list.iter().position(|x| x == name) {
        list.remove(pos);
    }
}

/// Which side of the request English is on, with allowances for titles
/// that put English on both sides by accident.
pub(crate) fn determine_direction(sources: &[String], targets: &[String]) -> Directionality {
    let mut sources = sources.to_vec();
    let mut targets = targets.to_vec();

    if sources.iter().all(|s| s.contains("English")) && sources.len() > 1 {
        remove_one(&mut sources, "English");
    } else if targets.iter().all(|t| t.contains("English")) && targets.len() > 1 {
        remove_one(&mut targets, "English");
    }

    let has = |list: &[String]| list.iter().any(|x| x == "English");
    if has(&sources) && has(&targets) && sources.len() + targets.len() >= 3 {
        if sources.len() >= 2 {
            remove_one(&mut sources, "English");
        } else if targets.len() >= 2 {
            remove_one(&mut targets, "English");
        }
    }

    match (has(&sources), has(&targets)) {
        (true, false) => Directionality::EnglishFrom,
        (false, true) => Directionality::EnglishTo,
        (true, true) => Directionality::EnglishBoth,
        (false, false) => Directionality::EnglishNone,
    }
}

pub(crate) fn resolve(
    registry: &Registry,
    extracted: &ExtractedLanguages,
    context: &TitleContext,
) -> Resolution {
    let mut sources = extracted.sources.clone();
    let mut targets = extracted.targets.clone();
    let mut css = String::from("generic");
    let mut notify = both_non_english(&sources, &targets);

    let has = |list: &[String], name: &str| list.iter().any(|x| x == name);

    if has(&targets, "English") && !has(&sources, "English") {
        // Target is English, pick a source-language class.
        if sources.len() >= 2 {
            let mut guesses: Vec<String> = if sources
                .iter()
                .any(|s| matches!(s.as_str(), "Unknown" | "English" | "Multiple Languages"))
            {
                sources
                    .iter()
                    .filter(|s| !matches!(s.as_str(), "Unknown" | "English" | "Multiple Languages"))
                    .cloned()
                    .collect()
            } else {
                sources.clone()
            };
            if guesses.is_empty() {
                guesses = sources.clone();
            }

            // A name matching the whole source phrase wins outright
            // (e.g. "Tunisian Arabic" over "Arabic").
            let mut complete_source: Option<&String> = None;
            if let Some(joined) = extracted.source_filtered.last() {
                for language in &guesses {
                    if language == joined {
                        complete_source = Some(language);
                    }
                }
            }
            css = match complete_source {
                Some(name) => convert(registry, name).code,
                None => convert(registry, &guesses[0]).code,
            };
        } else {
            css = convert(registry, &sources[0]).code;
        }
    } else if has(&sources, "English") && !has(&targets, "English") {
        // Source is English, pick a target-language class.
        css = convert(registry, &targets[0]).code;
        if targets.len() > 1 {
            // The whole target phrase may name one specific language.
            if let Some(joined) = extracted.target_filtered.last() {
                let data = convert(registry, joined);
                if !data.code.is_empty() {
                    css = data.code;
                    targets = vec![data.name];
                }
            }
        }
    } else if has(&sources, "English") && has(&targets, "English") {
        let mut combined: Vec<String> = Vec::new();
        for name in sources.iter().chain(targets.iter()) {
            if !combined.contains(name) {
                combined.push(name.clone());
            }
        }
        combined.sort();
        remove_one(&mut combined, "English");
        css = match combined.first() {
            Some(name) => convert(registry, name).code,
            None => "en".to_string(),
        };
    }

    // An "or" between targets means the poster will settle for any one.
    let tag_chunk = extracted
        .cut_title
        .split(']')
        .next()
        .unwrap_or("")
        .to_lowercase();
    let type_o = tag_chunk.contains(" or ") && targets.len() < 6;

    let direction = determine_direction(&sources, &targets);

    if targets.len() >= 2 {
        let mut probe = targets.clone();
        remove_one(&mut probe, "English");
        remove_one(&mut probe, "Multiple Languages");
        // Scripts are not real targets.
        probe.retain(|name| convert(registry, name).code.len() != 4);
        if probe.len() >= 2 && !has(&targets, "English") {
            css = "multiple".to_string();
            notify = Some(targets.clone());
        }
    }

    let mut language_country: Option<String> = None;
    if !context.has_country {
        let source_country = country_validator(registry, &extracted.source_tokens, &sources);
        let target_country = country_validator(registry, &extracted.target_tokens, &targets);

        if let Some((pair, iso)) = source_country {
            language_country = Some(pair.clone());
            if sources.len() == 1 && has(&targets, "English") {
                sources = vec![convert(registry, iso).name];
                css = iso.to_string();
            } else if !has(&targets, "English") {
                css = pair.split('-').next().unwrap_or("").to_string();
            }
        } else if let Some((pair, iso)) = target_country {
            language_country = Some(pair.clone());
            if targets.len() == 1 && has(&sources, "English") {
                targets = vec![convert(registry, iso).name];
                css = iso.to_string();
            } else if !has(&sources, "English") {
                css = pair.split('-').next().unwrap_or("").to_string();
            }
        }
    } else if !context.country_suffix.is_empty() && (css.len() == 2 || css.len() == 3) {
        language_country = Some(format!("{}-{}", css, context.country_suffix));
    }

    Resolution {
        sources,
        targets,
        css,
        notify,
        language_country,
        type_o,
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::extract::extract;

    fn resolve_title(title: &str) -> Resolution {
        let registry = Registry::new();
        let extracted = extract(&registry, title);
        let context = TitleContext::new(title);
        resolve(&registry, &extracted, &context)
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_direction_covers_all_four_cases() {
        use Directionality::*;
        assert_eq!(determine_direction(&names(&["English"]), &names(&["Chinese"])), EnglishFrom);
        assert_eq!(determine_direction(&names(&["German"]), &names(&["English"])), EnglishTo);
        assert_eq!(determine_direction(&names(&["English"]), &names(&["English"])), EnglishBoth);
        assert_eq!(determine_direction(&names(&["Korean"]), &names(&["Japanese"])), EnglishNone);
    }

    #[test]
    fn test_accidental_english_on_both_sides_resolves() {
        // Three names combined, so one English is dropped before deciding.
        assert_eq!(
            determine_direction(&names(&["English", "French"]), &names(&["English"])),
            Directionality::EnglishTo
        );
    }

    #[test]
    fn test_notify_only_when_english_absent() {
        assert_eq!(
            both_non_english(&names(&["Japanese"]), &names(&["Korean"])),
            Some(names(&["Japanese", "Korean"]))
        );
        assert_eq!(both_non_english(&names(&["Japanese"]), &names(&["English"])), None);
        assert_eq!(both_non_english(&names(&["Japanese"]), &names(&["Japanese"])), None);
    }

    #[test]
    fn test_source_class_when_target_is_english() {
        let res = resolve_title("[Chinese > English] a letter");
        assert_eq!(res.css, "zh");
        assert_eq!(res.sources, vec!["Chinese"]);
    }

    #[test]
    fn test_guesses_skip_unknown_when_alternatives_exist() {
        let res = resolve_title("[Russian or Unknown > English] postcard");
        assert_eq!(res.css, "ru");
    }

    #[test]
    fn test_target_class_when_source_is_english() {
        let res = resolve_title("[English > Hungarian] tattoo");
        assert_eq!(res.css, "hu");
    }

    #[test]
    fn test_multiple_targets_get_the_multiple_class() {
        let res = resolve_title("[English > German, French, Dutch] flyer");
        assert_eq!(res.css, "multiple");
        assert_eq!(res.notify, Some(names(&["Dutch", "French", "German"])));
    }

    #[test]
    fn test_or_between_targets_sets_the_soft_flag() {
        let res = resolve_title("[English > German or French] flyer");
        assert!(res.type_o);
        assert_eq!(res.css, "multiple");
    }

    #[test]
    fn test_regional_variety_upgrades_the_class() {
        let res = resolve_title("[Lebanese Arabic > English] a recipe");
        assert_eq!(res.css, "apc");
        assert_eq!(res.language_country.as_deref(), Some("ar-LB"));
        assert_eq!(res.sources, vec!["North Levantine Arabic"]);
    }

    #[test]
    fn test_country_tag_pairs_with_the_class() {
        let registry = Registry::new();
        let extracted = extract(&registry, "[German > English] menu");
        let mut context = TitleContext::new("[German > English] menu");
        context.has_country = true;
        context.country_suffix = "AT".to_string();
        let res = resolve(&registry, &extracted, &context);
        assert_eq!(res.css, "de");
        assert_eq!(res.language_country.as_deref(), Some("de-AT"));
    }
}
