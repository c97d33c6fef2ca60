// SPDX-License-Identifier: PMPL-1.0-or-later

//! Defined-multiple status tags.
//!
//! A defined multiple request tracks several target languages at once.
//! Its flair encodes one status per code, e.g.
//! `Multiple Languages [CS, DE✔, HU✓, IT, NL✔]`: a bare code is
//! untranslated and a trailing symbol marks the other states. These
//! helpers translate between that text and a per-language status map.

use std::collections::BTreeMap;

use crate::registry::Registry;
use crate::types::Status;

/// Parse the inside of a status tag (`CS, DE✔, HU✓`) into a map keyed
/// by lowercased code. A piece with no symbol is untranslated.
pub fn parse_defined_tag(tag: &str) -> BTreeMap<String, Status> {
    let mut statuses = BTreeMap::new();
    for piece in tag.to_lowercase().split(", ") {
        let code: String = piece.chars().filter(char::is_ascii_alphabetic).collect();
        if code.is_empty() {
            continue;
        }
        let status = piece
            .chars()
            .find_map(Status::from_symbol)
            .unwrap_or(Status::Untranslated);
        statuses.insert(code, status);
    }
    statuses
}

/// Parse a full flair text such as `Multiple Languages [DE, FR]` back
/// into its status map. `None` when there is no bracketed tag.
pub fn parse_flair_text(text: &str) -> Option<BTreeMap<String, Status>> {
    let (_, tail) = text.split_once('[')?;
    let inner = match tail.split_once(']') {
        Some((inner, _)) => inner,
        None => tail,
    };
    Some(parse_defined_tag(inner))
}

/// Render a status map as an alphabetized tag. Codes prefer their
/// two-letter form and are uppercased; every status except
/// untranslated appends its symbol.
pub fn format_defined_tag(registry: &Registry, statuses: &BTreeMap<String, Status>) -> String {
    let mut parts: Vec<String> = statuses
        .iter()
        .map(|(code, status)| {
            let short = registry
                .entry_by_code3(code)
                .map(|entry| entry.code)
                .unwrap_or(code.as_str());
            let mut part = short.to_uppercase();
            if let Some(symbol) = status.symbol() {
                part.push(symbol);
            }
            part
        })
        .collect();
    parts.sort();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_codes_parse_as_untranslated() {
        let statuses = parse_flair_text("Multiple Languages [DE, FR]").unwrap();
        assert_eq!(statuses.len(), 2);
        assert_eq!(statuses.get("de"), Some(&Status::Untranslated));
        assert_eq!(statuses.get("fr"), Some(&Status::Untranslated));
    }

    #[test]
    fn test_symbols_parse_into_their_statuses() {
        let statuses = parse_flair_text("Multiple Languages [CS, DE✔, HU✓, IT⍉, NL¦]").unwrap();
        assert_eq!(statuses.get("cs"), Some(&Status::Untranslated));
        assert_eq!(statuses.get("de"), Some(&Status::Translated));
        assert_eq!(statuses.get("hu"), Some(&Status::DoubleCheck));
        assert_eq!(statuses.get("it"), Some(&Status::MissingAssets));
        assert_eq!(statuses.get("nl"), Some(&Status::InProgress));
    }

    #[test]
    fn test_text_without_a_tag_is_not_defined() {
        assert!(parse_flair_text("Multiple Languages").is_none());
    }

    #[test]
    fn test_tag_formatting_sorts_and_marks() {
        let registry = Registry::new();
        let mut statuses = BTreeMap::new();
        statuses.insert("nl".to_string(), Status::Translated);
        statuses.insert("de".to_string(), Status::Translated);
        statuses.insert("hu".to_string(), Status::DoubleCheck);
        statuses.insert("cs".to_string(), Status::Untranslated);
        statuses.insert("it".to_string(), Status::Untranslated);

        let tag = format_defined_tag(&registry, &statuses);
        assert_eq!(tag, "[CS, DE✔, HU✓, IT, NL✔]");
    }

    #[test]
    fn test_three_letter_codes_shorten_where_possible() {
        let registry = Registry::new();
        let mut statuses = BTreeMap::new();
        statuses.insert("cmn".to_string(), Status::Untranslated);
        statuses.insert("akk".to_string(), Status::Untranslated);

        let tag = format_defined_tag(&registry, &statuses);
        assert_eq!(tag, "[AKK, ZH]");
    }

    #[test]
    fn test_tags_survive_a_parse_and_format_cycle() {
        let registry = Registry::new();
        let statuses = parse_defined_tag("CS, DE✔, HU✓, IT, NL✔");
        assert_eq!(format_defined_tag(&registry, &statuses), "[CS, DE✔, HU✓, IT, NL✔]");
    }
}
