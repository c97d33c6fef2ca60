// SPDX-License-Identifier: PMPL-1.0-or-later

//! Registry-wide converter and country resolver checks

use lingo_triage::convert::{convert, country};
use lingo_triage::registry::Registry;

#[test]
fn test_every_registry_entry_round_trips() {
    let registry = Registry::new();
    for entry in registry.entries() {
        let by_name = convert(&registry, entry.name);
        assert_eq!(
            by_name.code, entry.code,
            "name {:?} should resolve to its own code",
            entry.name
        );

        let by_code = convert(&registry, entry.code);
        assert_eq!(
            by_code.name, entry.name,
            "code {:?} should resolve to its own name",
            entry.code
        );
        assert_eq!(
            by_code.supported, entry.supported,
            "supported flag for {:?}",
            entry.code
        );
    }
}

#[test]
fn test_conversion_ignores_case() {
    let registry = Registry::new();
    for token in ["german", "GERMAN", "German", "gErMaN"] {
        let result = convert(&registry, token);
        assert_eq!(result.code, "de", "case variant {token:?}");
        assert_eq!(result.name, "German");
    }
}

#[test]
fn test_alternate_names_reach_the_same_entry() {
    let registry = Registry::new();
    assert_eq!(convert(&registry, "Mandarin").code, "zh");
    assert_eq!(convert(&registry, "Farsi").code, "fa");
    assert_eq!(convert(&registry, "Hangul").code, "ko");
}

#[test]
fn test_country_names_resolve() {
    let registry = Registry::new();
    assert_eq!(
        country(&registry, "china"),
        ("CN".to_string(), "China".to_string())
    );
    assert_eq!(country(&registry, "Austria").0, "AT");
    assert_eq!(country(&registry, "Brazil").0, "BR");
}

#[test]
fn test_country_codes_resolve_when_allowed() {
    let registry = Registry::new();
    assert_eq!(country(&registry, "cn").0, "CN");
    assert_eq!(country(&registry, "CHN").0, "CN");
    assert_eq!(country(&registry, "bra").0, "BR");
}

#[test]
fn test_country_nicknames_resolve() {
    let registry = Registry::new();
    assert_eq!(country(&registry, "Swiss").0, "CH");
}

#[test]
fn test_country_misses_come_back_empty() {
    let registry = Registry::new();
    assert_eq!(country(&registry, "Atlantis"), (String::new(), String::new()));
    assert_eq!(country(&registry, "q"), (String::new(), String::new()));
}

#[test]
fn test_official_long_names_shorten_to_the_head() {
    let registry = Registry::new();
    let (code, name) = country(&registry, "Taiwan");
    assert_eq!(code, "TW");
    assert_eq!(name, "Taiwan");
}
