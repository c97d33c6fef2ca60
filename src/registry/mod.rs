// SPDX-License-Identifier: PMPL-1.0-or-later

//! The language/country registry.
//!
//! [`Registry::new`] joins the embedded catalog tables into one entry
//! per language and answers every identity question the rest of the
//! crate has: code to name, name to code, three-letter equivalents,
//! scripts, countries, and regional varieties. The registry is built
//! once and borrowed immutably everywhere; nothing mutates it after
//! construction, which is what keeps the pipeline deterministic.

pub mod catalog;
pub mod countries;
pub mod reference;

pub use countries::Country;
pub use reference::{ExtendedLanguage, Script};

/// One fully joined language entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Primary code: ISO 639-1 where one exists, otherwise ISO 639-3,
    /// or a sentinel like `multiple`.
    pub code: &'static str,
    /// ISO 639-3 equivalent. Same as `code` for three-letter entries.
    pub code3: &'static str,
    pub name: &'static str,
    pub supported: bool,
    pub alternates: &'static [&'static str],
    pub default_country: Option<&'static str>,
    pub associated_countries: &'static [&'static str],
}

/// Immutable language registry. Cheap to scan, never mutated.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<LanguageEntry>,
    supported_names: Vec<&'static str>,
}

impl Registry {
    pub fn new() -> Self {
        let mut entries = Vec::with_capacity(catalog::SUPPORTED.len() + catalog::UNSUPPORTED.len());
        for &(code, name) in catalog::SUPPORTED {
            entries.push(Self::join_entry(code, name, true));
        }
        for &(code, name) in catalog::UNSUPPORTED {
            entries.push(Self::join_entry(code, name, false));
        }
        let supported_names = entries
            .iter()
            .filter(|e| e.supported)
            .map(|e| e.name)
            .collect();
        Registry {
            entries,
            supported_names,
        }
    }

    fn join_entry(code: &'static str, name: &'static str, supported: bool) -> LanguageEntry {
        let code3 = catalog::CODE3
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, c3)| *c3)
            .unwrap_or(code);
        let alternates = catalog::ALTERNATE_NAMES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, names)| *names)
            .unwrap_or(&[]);
        let default_country = catalog::DEFAULT_COUNTRY
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, cc)| *cc);
        let associated_countries = catalog::ASSOCIATED_COUNTRIES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, ccs)| *ccs)
            .unwrap_or(&[]);
        LanguageEntry {
            code,
            code3,
            name,
            supported,
            alternates,
            default_country,
            associated_countries,
        }
    }

    // ─── Language Lookup ────────────────────────────────────────────

    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    /// Look up by primary code, e.g. `zh` or `multiple`.
    pub fn entry(&self, code: &str) -> Option<&LanguageEntry> {
        self.entries
            .iter()
            .find(|e| e.code.eq_ignore_ascii_case(code))
    }

    /// Look up by the ISO 639-3 equivalent, e.g. `cmn` -> Chinese.
    pub fn entry_by_code3(&self, code3: &str) -> Option<&LanguageEntry> {
        self.entries
            .iter()
            .find(|e| e.code3.eq_ignore_ascii_case(code3))
    }

    /// Look up by exact Title Case name or alternate name.
    pub fn entry_by_name(&self, name: &str) -> Option<&LanguageEntry> {
        self.entries
            .iter()
            .find(|e| e.name == name || e.alternates.contains(&name))
    }

    /// Names of supported languages, in catalog order. The fuzzy
    /// matcher relies on this order being stable.
    pub fn supported_names(&self) -> &[&'static str] {
        &self.supported_names
    }

    pub fn is_supported_code(&self, code: &str) -> bool {
        self.entry(code).map(|e| e.supported).unwrap_or(false)
    }

    /// Commonly confused country code -> intended language code.
    pub fn mistake_code(&self, code: &str) -> Option<&'static str> {
        catalog::MISTAKE_CODES
            .iter()
            .find(|(c, _)| c.eq_ignore_ascii_case(code))
            .map(|(_, lang)| *lang)
    }

    /// ISO 639-2B bibliographic code -> 639-1 code.
    pub fn bibliographic_code(&self, code: &str) -> Option<&'static str> {
        catalog::CODES_2B
            .iter()
            .find(|(c, _)| c.eq_ignore_ascii_case(code))
            .map(|(_, lang)| *lang)
    }

    // ─── Script And Extended Lookup ─────────────────────────────────

    pub fn script_name(&self, code: &str) -> Option<&'static str> {
        reference::SCRIPTS
            .iter()
            .find(|s| s.code.eq_ignore_ascii_case(code))
            .map(|s| s.name)
    }

    pub fn script_code(&self, name: &str) -> Option<&'static str> {
        reference::SCRIPTS
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .map(|s| s.code)
    }

    /// Name of an extended (no two-letter code) ISO 639-3 language.
    pub fn extended_name(&self, code3: &str) -> Option<&'static str> {
        reference::EXTENDED_LANGUAGES
            .iter()
            .find(|l| l.code3.eq_ignore_ascii_case(code3))
            .map(|l| l.name)
    }

    /// Search extended languages then scripts by name. Returns the
    /// code and whether it is a script.
    pub fn reference_by_name(&self, name: &str) -> Option<(&'static str, bool)> {
        for lang in reference::EXTENDED_LANGUAGES {
            if lang.name.eq_ignore_ascii_case(name)
                || lang
                    .alternates
                    .iter()
                    .any(|a| a.eq_ignore_ascii_case(name))
            {
                return Some((lang.code3, false));
            }
        }
        self.script_code(name).map(|code| (code, true))
    }

    // ─── Country Lookup ─────────────────────────────────────────────

    pub fn countries(&self) -> &'static [Country] {
        countries::COUNTRIES
    }

    /// Dedicated ISO 639-3 code for a `language-COUNTRY` pair, if any.
    pub fn regional_code(&self, pair: &str) -> Option<&'static str> {
        countries::REGIONAL_CODES
            .iter()
            .find(|(p, _)| p.eq_ignore_ascii_case(pair))
            .map(|(_, code)| *code)
    }

    /// Whether `country` is the home region of `code` (zh-CN, ja-JP).
    /// Default pairs are folded back to the bare language.
    pub fn is_default_pair(&self, code: &str, country: &str) -> bool {
        self.entry(code)
            .and_then(|e| e.default_country)
            .map(|cc| cc.eq_ignore_ascii_case(country))
            .unwrap_or(false)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
