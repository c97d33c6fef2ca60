// SPDX-License-Identifier: PMPL-1.0-or-later

//! Free-text language scanning.
//!
//! These helpers find language names buried in running text: capitalized
//! words are run through the converter and obscure reference-only codes
//! are filtered out, since far too many ISO 639-3 names collide with
//! ordinary English words.

use regex::Regex;

use crate::convert::{convert, english_fuzz, title_case};
use crate::registry::Registry;

/// Names that a reformatted title should never lead with.
const NON_TITLE_NAMES: &[&str] = &["English", "Multiple Languages", "Nonlanguage"];

/// Utility subscription keywords that pass through the list splitter.
const UTILITY_CODES: &[&str] = &["meta", "community"];

/// Keywords that mark a multiple-language request as app localization.
const APP_WORDS: &[&str] = &[
    " app ",
    "android",
    "game",
    "social network",
    " bot ",
    "crowdin",
    "localisation",
    "localize",
    "localise",
    "software",
    "crowdsourced",
    "localization",
    "addon",
    "add-on",
    "google play",
    "an app",
    "discord bot",
    "telegram bot",
    "chatbot",
    "my app",
    "firefox",
];

/// Scan text for capitalized words that resolve to language names.
/// Obscure three-letter reference languages are skipped. Returns the
/// names in first-mention order, deduplicated, or `None` when the text
/// mentions no language at all.
pub(crate) fn language_mention_search(registry: &Registry, text: &str) -> Option<Vec<String>> {
    let word = Regex::new(r"\b[A-Z][a-z]+").unwrap();
    let mut names: Vec<String> = Vec::new();
    for m in word.find_iter(text) {
        let candidate = m.as_str();
        if candidate.chars().count() <= 3 {
            // Short matches are too often ISO codes or noise.
            continue;
        }
        let result = convert(registry, candidate);
        let obscure = result.code.chars().count() == 3 && !registry.is_supported_code(&result.code);
        if !result.name.is_empty() && !obscure && !names.contains(&result.name) {
            names.push(result.name);
        }
    }
    if names.is_empty() {
        None
    } else {
        Some(names)
    }
}

/// Replace likely misspellings of "English" so a title can still pass
/// the submission filter.
pub(crate) fn replace_bad_english_typing(title: &str) -> String {
    let punctuation = Regex::new(r#"[,.;@#?!&$()“”’"•]+ *"#).unwrap();
    let cleaned = punctuation.replace_all(title, " ").to_string();
    let mut fixed = title.to_string();
    for word in cleaned.split(' ') {
        if english_fuzz(word) {
            fixed = fixed.replace(word, "English");
        }
    }
    fixed
}

/// Rebuild a rule-breaking title into one that follows the format
/// guidelines, e.g. `"Hello need help to translate this"` becomes
/// `"[Unknown > English] Hello need help to translate this"`.
pub fn bad_title_reformat(registry: &Registry, title: &str) -> String {
    let strip = Regex::new(r"[^\w\s]").unwrap();
    let search_text = title_case(&strip.replace_all(title, " "));

    let mentioned = language_mention_search(registry, &search_text).map(|names| {
        names
            .into_iter()
            .filter(|n| !NON_TITLE_NAMES.contains(&n.as_str()))
            .collect::<Vec<_>>()
    });

    let language = match &mentioned {
        Some(names) if !names.is_empty() => {
            if registry.supported_names().contains(&names[0].as_str()) {
                names[0].clone()
            } else {
                "Unknown".to_string()
            }
        }
        _ => "Unknown".to_string(),
    };

    let mut body = title.to_string();
    if body.contains('[') && body.contains(']') {
        // Already has a tag of some kind; keep only the part after it.
        body = body.split(']').nth(1).unwrap_or("").trim().to_string();
    }

    let tag = if body.contains(&format!("to {language}"))
        || body.contains(&format!("in {language}"))
        || body.contains("from English")
    {
        format!("[English > {language}] ")
    } else {
        format!("[{language} > English] ")
    };

    let new_title = format!("{tag}{}", body.trim());
    if new_title.chars().count() >= 300 {
        new_title.chars().take(299).collect()
    } else {
        new_title
    }
}

/// Split a free-form list of languages (`"ar, latin, yi"`, `"ko+lo"`)
/// into sorted language codes. Regional results come back as
/// `lang-COUNTRY` pairs. Returns `None` when nothing valid was named.
pub fn split_language_list(registry: &Registry, list: &str) -> Option<Vec<String>> {
    let mut text = match after_last(list, "LANGUAGES:") {
        Some(tail) => tail.trim().to_string(),
        None => list.trim().to_string(),
    };

    for delimiter in ['+', '\n', '/', ':', ';'] {
        if text.contains(delimiter) {
            text = text.replace(delimiter, ",");
        }
    }

    let items: Vec<String> = if !text.contains(',') && text.contains(' ') {
        // The whole thing may itself be a multi-word language name.
        let whole = convert(registry, &text);
        if whole.code.is_empty() {
            text.split_whitespace().map(str::to_string).collect()
        } else {
            vec![whole.code]
        }
    } else {
        text.split(',').map(str::to_string).collect()
    };

    let mut codes: Vec<String> = Vec::new();
    for item in items {
        let item = item.trim().to_lowercase();
        let converted = convert(registry, &item);
        let code = match &converted.country {
            Some(country) => format!("{}-{country}", converted.code),
            None => converted.code.clone(),
        };
        if !converted.code.is_empty() && item != "all" {
            codes.push(code);
        } else if item == "all" || UTILITY_CODES.contains(&item.as_str()) {
            codes.push(item);
        }
    }

    codes.sort_by_key(|c| c.to_lowercase());
    codes.dedup();
    if codes.is_empty() {
        None
    } else {
        Some(codes)
    }
}

/// Whether a title mentions app or software localization work.
pub(crate) fn app_multiple_definer(title: &str) -> bool {
    let lowered = title.to_lowercase();
    APP_WORDS.iter().any(|w| lowered.contains(w))
}

fn after_last<'a>(text: &'a str, separator: &str) -> Option<&'a str> {
    text.rfind(separator)
        .map(|index| &text[index + separator.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentions_are_found_in_order() {
        let registry = Registry::new();
        let found = language_mention_search(&registry, "Need Chinese And Korean Help");
        assert_eq!(
            found,
            Some(vec!["Chinese".to_string(), "Korean".to_string()])
        );
    }

    #[test]
    fn test_mentions_skip_short_and_obscure_words() {
        let registry = Registry::new();
        assert_eq!(language_mention_search(&registry, "The Cat Sat"), None);
        // "Akkadian" resolves to a reference-only code and is skipped.
        assert_eq!(language_mention_search(&registry, "Some Akkadian Text"), None);
    }

    #[test]
    fn test_english_typos_are_repaired() {
        let fixed = replace_bad_english_typing("translate this to enlgish please");
        assert!(fixed.contains("English"));
    }

    #[test]
    fn test_unplaceable_titles_get_the_unknown_tag() {
        let registry = Registry::new();
        assert_eq!(
            bad_title_reformat(&registry, "Hello need help to translate this"),
            "[Unknown > English] Hello need help to translate this"
        );
    }

    #[test]
    fn test_mentioned_languages_make_the_tag() {
        let registry = Registry::new();
        assert_eq!(
            bad_title_reformat(&registry, "what does this japanese say"),
            "[Japanese > English] what does this japanese say"
        );
    }

    #[test]
    fn test_direction_flips_when_target_is_named() {
        let registry = Registry::new();
        let result = bad_title_reformat(&registry, "please translate this to Japanese");
        assert_eq!(result, "[English > Japanese] please translate this to Japanese");
    }

    #[test]
    fn test_list_splitting_handles_delimiters() {
        let registry = Registry::new();
        assert_eq!(
            split_language_list(&registry, "ko+zh"),
            Some(vec!["ko".to_string(), "zh".to_string()])
        );
        assert_eq!(
            split_language_list(&registry, "ar, latin, yi"),
            Some(vec!["ar".to_string(), "la".to_string(), "yi".to_string()])
        );
        assert_eq!(split_language_list(&registry, ""), None);
    }

    #[test]
    fn test_list_splitting_keeps_multiword_names_whole() {
        let registry = Registry::new();
        assert_eq!(
            split_language_list(&registry, "scottish gaelic"),
            Some(vec!["gd".to_string()])
        );
    }

    #[test]
    fn test_list_splitting_passes_utility_codes() {
        let registry = Registry::new();
        assert_eq!(
            split_language_list(&registry, "all"),
            Some(vec!["all".to_string()])
        );
        assert_eq!(
            split_language_list(&registry, "meta, ja"),
            Some(vec!["ja".to_string(), "meta".to_string()])
        );
    }

    #[test]
    fn test_app_keywords_are_detected() {
        assert!(app_multiple_definer("Localization for my app needed"));
        assert!(app_multiple_definer("Strings for a Discord bot"));
        assert!(!app_multiple_definer("My grandmother's letter"));
    }
}
