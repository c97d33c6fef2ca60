// SPDX-License-Identifier: PMPL-1.0-or-later

//! Token conversion.
//!
//! [`convert`] is the workhorse of the whole crate: it takes any token
//! a human might use for a language (a code, a name, a misspelling, a
//! regional pair like `ar-LB`, a script reference like `unknown-cyrl`,
//! or a name with a country tag like `German {Austria}`) and resolves
//! it against the registry. Resolution is a strict cascade: exact code,
//! three-letter equivalents, exact names, fuzzy names, then the
//! extended reference tables. Everything that fails the cascade comes
//! back as an empty result rather than an error.

pub(crate) mod country;
pub(crate) mod fuzzy;

pub(crate) use country::{country_lookup, country_validator};
pub(crate) use fuzzy::{english_fuzz, fuzzy_text};

use crate::registry::Registry;
use crate::types::ConversionResult;

/// Upper-case the first letter of every run of cased letters.
/// "don't know" becomes "Don'T Know"; uncased scripts pass through.
pub(crate) fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_cased = false;
    for ch in text.chars() {
        let cased = ch.is_lowercase() || ch.is_uppercase();
        if cased && !prev_cased {
            out.extend(ch.to_uppercase());
        } else if cased {
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
        prev_cased = cased;
    }
    out
}

/// Resolve a language token to a code, name, supported flag, and an
/// optional detected country. Never fails; unresolvable input yields
/// [`ConversionResult::empty`].
pub fn convert(registry: &Registry, input: &str) -> ConversionResult {
    let mut supported = false;
    let mut code = String::new();
    let mut name = String::new();
    let mut country: Option<String> = None;
    let mut is_script = false;

    let mut text = input.to_string();
    let mut script_code: Option<String> = None;

    // Hyphenated tokens are special codes: unknown-cyrl is a script,
    // ar-LB is a regional variety. "Anglo-Saxon" is neither.
    let split = if input.contains('-') && !input.contains("Anglo") {
        input.split_once('-')
    } else {
        None
    };

    if let Some((broader, specific)) = split {
        if specific.chars().count() <= 1 {
            // A single trailing letter cannot be a valid qualifier.
            text = broader.to_string();
        } else if broader == "unknown" {
            if let Some(script) = registry.script_name(specific) {
                text = script.to_string();
                script_code = Some(specific.to_string());
                is_script = true;
            }
            // An invalid script code falls through with the full
            // hyphenated input, which resolves to nothing.
        } else {
            let cc = country_lookup(registry, specific, true).0.to_uppercase();
            let country_name = country_lookup(registry, &cc, true).1;
            text = broader.to_string();
            let default_pair =
                registry.is_default_pair(broader, &cc) || cc.eq_ignore_ascii_case(broader);
            if country_name.is_empty() {
                // Not a real country; undo the split entirely.
                text = input.to_string();
            } else if !default_pair {
                // Home regions (zh-CN, de-DE) fold back to the bare
                // language; anything else keeps the country.
                country = Some(cc);
            }
        }
    } else if text.contains('{') && text.chars().count() > 3 {
        // A name with a country tag, like "Portuguese {Brazil}".
        if let Some((head, tail)) = input.split_once('{') {
            let mut tag = tail.chars();
            tag.next_back();
            let tag = tag.as_str();
            let cc = country_lookup(registry, tag, true).0;
            if !cc.is_empty() {
                country = Some(cc);
            }
            text = head.trim().to_string();
        }
    }

    // People habitually type the country code of where a language is
    // spoken (jp, cn) or the bibliographic 639-2B code (ger, fre).
    if text.chars().count() == 2 {
        if let Some(fixed) = registry.mistake_code(&text) {
            text = fixed.to_string();
        }
    }
    if text.chars().count() == 3 {
        if let Some(fixed) = registry.bibliographic_code(&text) {
            text = fixed.to_string();
        }
    }

    // Reserved ISO 639-3 codes map onto our own categories.
    if text == "mul" {
        supported = true;
        text = "multiple".to_string();
    } else if text == "mis" || text == "und" || text == "qnp" {
        supported = true;
        text = "unknown".to_string();
    }

    let length = text.chars().count();
    let titled = title_case(&text);

    if length < 2 {
        // Too short to mean anything.
    } else if is_script {
        if let Some(spec) = &script_code {
            // The code stays exactly as the caller typed it.
            code = spec.clone();
            name = text.clone();
        }
    } else if let Some(entry) = registry.entry(&text) {
        code = entry.code.to_string();
        name = entry.name.to_string();
        supported = entry.supported;
    } else if length == 3 {
        if let Some(entry) = registry.entry_by_code3(&text) {
            code = entry.code.to_string();
            name = entry.name.to_string();
            supported = entry.supported;
        } else if let Some(entry) = registry.entry_by_name(&titled) {
            // Three-letter names like "Any". The supported flag is
            // deliberately left alone here.
            code = entry.code.to_string();
            name = entry.name.to_string();
        } else if let Some(ext) = registry.extended_name(&text) {
            code = text.to_lowercase();
            name = ext.to_string();
        }
    } else if length > 3 {
        if let Some(entry) = registry.entry_by_name(&titled) {
            code = entry.code.to_string();
            name = entry.name.to_string();
            supported = entry.supported;
        } else {
            let fuzzy_hit = if fuzzy::FUZZ_IGNORE_WORDS.contains(&titled.as_str()) {
                None
            } else {
                fuzzy_text(registry, titled.trim())
            };
            if let Some(hit) = fuzzy_hit {
                if let Some(entry) = registry.entry_by_name(hit) {
                    code = entry.code.to_string();
                    supported = entry.supported;
                }
                name = hit.to_string();
            } else if let Some((ref_code, ref_script)) = registry.reference_by_name(&text) {
                code = ref_code.to_string();
                name = if ref_script {
                    registry.script_name(ref_code).unwrap_or_default().to_string()
                } else {
                    registry
                        .extended_name(ref_code)
                        .unwrap_or_default()
                        .to_string()
                };
                if let Some(entry) = registry.entry(&code) {
                    supported = entry.supported;
                }
            } else if length == 4 {
                if let Some(script) = registry.script_name(&text) {
                    name = script.to_string();
                    code = registry
                        .script_code(script)
                        .unwrap_or_default()
                        .to_string();
                }
            }
        }
    }

    if code.is_empty() {
        country = None;
    }
    ConversionResult {
        code,
        name,
        supported,
        country,
    }
}

/// Resolve a country name, nickname, or alpha-2/alpha-3 code to an
/// `(alpha-2, name)` pair. Both strings are empty when nothing matches.
pub fn country(registry: &Registry, input: &str) -> (String, String) {
    country_lookup(registry, input, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(registry: &Registry, input: &str, code: &str, name: &str, supported: bool) {
        let result = convert(registry, input);
        assert_eq!(result.code, code, "code for {input:?}");
        assert_eq!(result.name, name, "name for {input:?}");
        assert_eq!(result.supported, supported, "supported for {input:?}");
    }

    #[test]
    fn test_codes_resolve_to_names() {
        let registry = Registry::new();
        check(&registry, "zh", "zh", "Chinese", true);
        check(&registry, "ja", "ja", "Japanese", true);
        check(&registry, "en", "en", "English", false);
        check(&registry, "multiple", "multiple", "Multiple Languages", true);
    }

    #[test]
    fn test_names_resolve_to_codes() {
        let registry = Registry::new();
        check(&registry, "Chinese", "zh", "Chinese", true);
        check(&registry, "chinese", "zh", "Chinese", true);
        check(&registry, "English", "en", "English", false);
        check(&registry, "Mandarin", "zh", "Chinese", true);
    }

    #[test]
    fn test_three_letter_equivalents() {
        let registry = Registry::new();
        check(&registry, "cmn", "zh", "Chinese", true);
        check(&registry, "jpn", "ja", "Japanese", true);
        // Bibliographic 639-2B codes.
        check(&registry, "ger", "de", "German", true);
        check(&registry, "fre", "fr", "French", true);
    }

    #[test]
    fn test_three_letter_names_leave_supported_unset() {
        let registry = Registry::new();
        check(&registry, "Any", "multiple", "Multiple Languages", false);
    }

    #[test]
    fn test_mistaken_country_codes() {
        let registry = Registry::new();
        check(&registry, "jp", "ja", "Japanese", true);
        check(&registry, "cn", "zh", "Chinese", true);
        check(&registry, "kh", "km", "Khmer", true);
    }

    #[test]
    fn test_reserved_codes_map_to_categories() {
        let registry = Registry::new();
        check(&registry, "mul", "multiple", "Multiple Languages", true);
        check(&registry, "und", "unknown", "Unknown", true);
        check(&registry, "qnp", "unknown", "Unknown", true);
    }

    #[test]
    fn test_scripts_from_unknown_prefix() {
        let registry = Registry::new();
        let result = convert(&registry, "unknown-bopo");
        assert_eq!(result.code, "bopo");
        assert_eq!(result.name, "Bopomofo");
        assert!(!result.supported);
        assert!(result.is_script());
        assert_eq!(result.country, None);
    }

    #[test]
    fn test_scripts_by_name_and_code() {
        let registry = Registry::new();
        check(&registry, "Cyrillic", "cyrl", "Cyrillic", false);
        check(&registry, "Cyrl", "cyrl", "Cyrillic", false);
    }

    #[test]
    fn test_regional_pairs_keep_their_country() {
        let registry = Registry::new();
        let result = convert(&registry, "ar-LB");
        assert_eq!(result.code, "ar");
        assert_eq!(result.name, "Arabic");
        assert_eq!(result.country.as_deref(), Some("LB"));
    }

    #[test]
    fn test_home_regions_fold_to_the_bare_language() {
        let registry = Registry::new();
        assert_eq!(convert(&registry, "zh-CN").country, None);
        assert_eq!(convert(&registry, "de-DE").country, None);
        assert_eq!(convert(&registry, "pt-BR").country.as_deref(), Some("BR"));
    }

    #[test]
    fn test_invalid_regions_resolve_to_nothing() {
        let registry = Registry::new();
        let result = convert(&registry, "ab-cdefg");
        assert!(result.is_empty());
        assert_eq!(result.country, None);
    }

    #[test]
    fn test_country_tags_in_braces() {
        let registry = Registry::new();
        let result = convert(&registry, "German {Austria}");
        assert_eq!(result.code, "de");
        assert_eq!(result.name, "German");
        assert_eq!(result.country.as_deref(), Some("AT"));
    }

    #[test]
    fn test_fuzzy_names_resolve() {
        let registry = Registry::new();
        check(&registry, "Chinnsse", "zh", "Chinese", true);
        check(&registry, "Japanees", "ja", "Japanese", true);
    }

    #[test]
    fn test_reference_languages_resolve_without_support() {
        let registry = Registry::new();
        check(&registry, "Akkadian", "akk", "Akkadian", false);
        check(&registry, "Hokkien", "nan", "Min Nan Chinese", false);
        check(&registry, "wuu", "wuu", "Wu Chinese", false);
    }

    #[test]
    fn test_noise_resolves_to_empty() {
        let registry = Registry::new();
        assert!(convert(&registry, "x").is_empty());
        assert!(convert(&registry, "Qwertyuiop").is_empty());
        assert!(convert(&registry, "").is_empty());
    }

    #[test]
    fn test_anglo_saxon_is_not_a_special_code() {
        let registry = Registry::new();
        let result = convert(&registry, "Anglo-Saxon");
        assert_eq!(result.code, "ang");
    }
}
