// SPDX-License-Identifier: PMPL-1.0-or-later

//! Submission gatekeeping.
//!
//! Posts must name at least one language and a direction before the
//! pipeline will touch them. The required-keyword list is generated
//! from the registry so that a request written entirely in another
//! language ("目标语言 > 英語") still passes, and each rejection carries
//! the specific formatting rule it broke.

use super::char_prefix;
use super::mentions::{language_mention_search, replace_bad_english_typing};
use super::normalize::ENGLISH_DASHES;
use crate::convert::title_case;
use crate::registry::Registry;
use crate::types::{FilterReason, FilterVerdict};

/// Ways people write "English" in titles.
const ENGLISH_WORDS: &[&str] = &["english", "en", "eng", "englisch", "англи́йский", "英語", "英文"];

/// Connectors between a source and a target language.
const CONNECTORS: &[&str] = &[">", "to", "<", "〉", "›", "》", "»", "⟶", "→", "~"];

/// Generated phrases that match too much ordinary English.
const BAD_MATCHES: &[&str] = &[
    "ch to ", "en to ", " to en", " to me", " to mi", " to my", " to mr", " to kn",
];

/// Keyword lists the submission filter tests titles against.
///
/// `total` is every acceptable language-plus-connector phrase;
/// `to_phrases` is the subset built on the word "to", kept separately
/// because those are the ones writers bury at the end of a sentence.
pub(crate) struct FilterKeywords {
    total: Vec<String>,
    to_phrases: Vec<String>,
}

impl FilterKeywords {
    pub(crate) fn new(registry: &Registry) -> Self {
        let mut total: Vec<String> = Vec::new();
        let mut to_phrases: Vec<String> = Vec::new();

        for word in ENGLISH_WORDS {
            add_combinations(word, &mut total, &mut to_phrases);
        }
        for name in registry.supported_names() {
            add_combinations(&name.to_lowercase(), &mut total, &mut to_phrases);
        }

        let mut dashed: Vec<String> = ENGLISH_DASHES.iter().map(|d| d.to_lowercase()).collect();
        dashed.sort();

        for tag in [">", "[unknown]", "[community]", "[meta]"] {
            total.push(tag.to_string());
        }
        total.extend(dashed);

        to_phrases.retain(|p| !BAD_MATCHES.contains(&p.as_str()));
        total.retain(|p| !BAD_MATCHES.contains(&p.as_str()));

        FilterKeywords { total, to_phrases }
    }
}

fn add_combinations(word: &str, total: &mut Vec<String>, to_phrases: &mut Vec<String>) {
    for connector in CONNECTORS {
        let mut forms = vec![
            format!(" {connector} {word}"),
            format!("{word} {connector} "),
        ];
        if *connector == "to" {
            // Unspaced "to" forms would match inside too many words.
            to_phrases.extend(forms.iter().cloned());
        } else {
            forms.push(format!("{connector}{word}"));
            forms.push(format!("{word}{connector}"));
        }
        total.extend(forms);
    }
}

fn contains_any(lowered: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| lowered.contains(k.as_str()))
}

/// Decide whether a title follows the formatting guidelines.
///
/// An accepted title is returned as-is except that misspellings of
/// "English" may have been repaired when that was what saved it.
pub fn check_title(registry: &Registry, title: &str) -> FilterVerdict {
    let keywords = FilterKeywords::new(registry);
    let mut title = title.to_string();

    if !contains_any(&title.to_lowercase(), &keywords.total) {
        // Typos for "English" are common enough to warrant a retry.
        title = replace_bad_english_typing(&title);
        if !contains_any(&title.to_lowercase(), &keywords.total) {
            return FilterVerdict::Rejected {
                reason: FilterReason::NoKeywords,
            };
        }
    } else if !title.contains('>') && contains_any(&title.to_lowercase(), &keywords.to_phrases) {
        if !contains_any(&char_prefix(&title.to_lowercase(), 25), &keywords.to_phrases) {
            // The "to LANGUAGE" part sits at the end of the sentence.
            return FilterVerdict::Rejected {
                reason: FilterReason::BuriedLede,
            };
        }
        if title.chars().count() < 35 && !title.contains('[') {
            let mentioned = language_mention_search(registry, &title_case(&title)).map(|names| {
                names
                    .into_iter()
                    .filter(|name| name != "English")
                    .collect::<Vec<_>>()
            });
            if mentioned.map_or(true, |names| names.is_empty()) {
                // Short, bracketless, and naming no language at all.
                return FilterVerdict::Rejected {
                    reason: FilterReason::ShortGeneric,
                };
            }
        }
    }

    if title.contains('>') && !title.contains(']') && !char_prefix(&title, 50).contains('>') {
        // Languages tacked on as an afterthought are too hard to parse.
        return FilterVerdict::Rejected {
            reason: FilterReason::MisplacedArrow,
        };
    }

    FilterVerdict::Accepted { title }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_chatter_is_rejected() {
        let registry = Registry::new();
        assert_eq!(
            check_title(&registry, "hello"),
            FilterVerdict::Rejected {
                reason: FilterReason::NoKeywords
            }
        );
    }

    #[test]
    fn test_tagged_titles_pass_unchanged() {
        let registry = Registry::new();
        for title in ["[eng > zh] hi", "[eng to zh] hi", "[Unknown] weird sticker"] {
            assert_eq!(
                check_title(&registry, title),
                FilterVerdict::Accepted {
                    title: title.to_string()
                }
            );
        }
    }

    #[test]
    fn test_buried_requests_are_rejected() {
        let registry = Registry::new();
        let title = "I found this cool thing at a store, can someone translate to english";
        assert_eq!(
            check_title(&registry, title),
            FilterVerdict::Rejected {
                reason: FilterReason::BuriedLede
            }
        );
    }

    #[test]
    fn test_short_generic_requests_are_rejected() {
        let registry = Registry::new();
        assert_eq!(
            check_title(&registry, "translation to english"),
            FilterVerdict::Rejected {
                reason: FilterReason::ShortGeneric
            }
        );
    }

    #[test]
    fn test_short_requests_naming_a_language_pass() {
        let registry = Registry::new();
        assert_eq!(
            check_title(&registry, "russian to english please"),
            FilterVerdict::Accepted {
                title: "russian to english please".to_string()
            }
        );
    }

    #[test]
    fn test_afterthought_arrows_are_rejected() {
        let registry = Registry::new();
        let title = "Can someone help me with this old inscription on a ring I inherited > English";
        assert_eq!(
            check_title(&registry, title),
            FilterVerdict::Rejected {
                reason: FilterReason::MisplacedArrow
            }
        );
    }

    #[test]
    fn test_english_typos_are_repaired_on_the_way_through() {
        let registry = Registry::new();
        assert_eq!(
            check_title(&registry, "song lyrics enlgish to me"),
            FilterVerdict::Accepted {
                title: "song lyrics English to me".to_string()
            }
        );
    }
}
