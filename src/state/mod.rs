// SPDX-License-Identifier: PMPL-1.0-or-later

//! Post state tracking.
//!
//! A [`PostRecord`] is the durable counterpart of a classified post: it
//! remembers what the pipeline decided at submission time and then
//! follows the request through identification, claiming, and
//! translation. Records are created once from a classification and
//! mutated only through the operations here, so two rules hold
//! everywhere:
//!
//! 1. A per-language `translated` status never reverts (the ratchet).
//! 2. The language history never repeats itself back to back.
//!
//! Serialized records carry a schema version and reject fields they do
//! not recognize, so a record written by a different build fails loudly
//! instead of loading half-formed.

use std::collections::BTreeMap;

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};

use crate::convert::convert;
use crate::pipeline::Classifier;
use crate::registry::Registry;
use crate::types::{Directionality, Status, TitleClassification};

pub mod multiple;
pub mod render;

pub use multiple::{format_defined_tag, parse_defined_tag, parse_flair_text};
pub use render::{render, RenderedFlair};

/// Bumped whenever the serialized shape of [`PostRecord`] changes.
pub const SCHEMA_VERSION: u32 = 1;

/// Language data for a post aimed at one language (or at none that we
/// could pin down).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SingleLanguageInfo {
    /// Registry code, or a sentinel like `unknown` / `generic`.
    pub language_code: String,
    pub language_name: String,
    /// Whether the code has its own flair on the platform.
    pub is_supported: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_name: Option<String>,
}

/// Language data for a multiple-target or app-localization post.
///
/// `language_codes` is empty for a catch-all "Multiple Languages"
/// request and lists the individual codes for a defined one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MultipleLanguageInfo {
    /// `Multiple Languages` or `App`.
    pub language_name: String,
    pub language_codes: Vec<String>,
    pub language_names: Vec<String>,
}

/// The two shapes a post's language data can take. Tagged explicitly
/// so stored records state which shape they are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageInfo {
    Single(SingleLanguageInfo),
    Multiple(MultipleLanguageInfo),
}

impl LanguageInfo {
    /// Current display name, e.g. `German` or `Multiple Languages`.
    pub fn name(&self) -> &str {
        match self {
            LanguageInfo::Single(info) => &info.language_name,
            LanguageInfo::Multiple(info) => &info.language_name,
        }
    }
}

/// Post status: one status for the whole post, or one per language for
/// defined multiple requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusField {
    Single(Status),
    PerLanguage(BTreeMap<String, Status>),
}

/// Everything we track about one translation-request post.
///
/// The record is built once from a [`TitleClassification`] and then
/// changed only through its methods. `original_source_languages` and
/// `original_target_languages` keep the classification as it stood at
/// submission even after later reclassification; `language_history` is
/// an append-only log of display names with no consecutive duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PostRecord {
    pub schema_version: u32,
    pub id: String,
    pub author: String,
    pub created_utc: i64,
    /// Post title with the language tag removed; falls back to the
    /// original title when no tag could be split off.
    pub title: String,
    pub title_original: String,
    pub direction: Directionality,
    pub original_source_languages: Vec<String>,
    pub original_target_languages: Vec<String>,
    pub languages: LanguageInfo,
    pub language_history: Vec<String>,
    pub status: StatusField,
    /// Set when a person (rather than the title) named the language.
    pub is_identified: bool,
    pub is_long: bool,
    /// Unknown-language post whose script has been pinned down.
    pub is_script: bool,
    pub author_messaged: bool,
    /// Seconds from submission to each status, first transition only.
    pub time_delta: BTreeMap<Status, i64>,
    pub contributors: Vec<String>,
    pub notified: Vec<String>,
}

impl PostRecord {
    /// Build a fresh record from a classified title.
    pub fn new(
        registry: &Registry,
        id: &str,
        author: &str,
        created_utc: i64,
        original_title: &str,
        classification: &TitleClassification,
    ) -> Self {
        let title = if classification.actual_title.is_empty() {
            original_title.to_string()
        } else {
            classification.actual_title.clone()
        };

        let (languages, status, is_script) = derive_languages(registry, classification);
        let language_history = match &languages {
            LanguageInfo::Multiple(info) => vec![info.language_name.clone()],
            LanguageInfo::Single(_) => Vec::new(),
        };

        PostRecord {
            schema_version: SCHEMA_VERSION,
            id: id.to_string(),
            author: author.to_string(),
            created_utc,
            title,
            title_original: original_title.to_string(),
            direction: classification.direction,
            original_source_languages: classification.source_languages.clone(),
            original_target_languages: classification.target_languages.clone(),
            languages,
            language_history,
            status,
            is_identified: false,
            is_long: false,
            is_script,
            author_messaged: false,
            time_delta: BTreeMap::new(),
            contributors: Vec::new(),
            notified: Vec::new(),
        }
    }

    /// Reject records written under a different schema generation.
    pub fn check_schema(&self) -> Result<()> {
        if self.schema_version != SCHEMA_VERSION {
            bail!(
                "record schema version {} is not supported (expected {})",
                self.schema_version,
                SCHEMA_VERSION
            );
        }
        Ok(())
    }

    /// Reclassify the post's language from a user-supplied token.
    ///
    /// Regular tokens go through the converter. In advanced mode a
    /// three-letter code is taken at face value (no fuzzy matching)
    /// and a four-letter code names a script. A `+`-joined chain
    /// becomes a defined multiple. The record is untouched when the
    /// token matches nothing.
    pub fn identify(&mut self, registry: &Registry, token: &str, advanced: bool) -> Result<()> {
        let token = token.trim();
        if token.contains('+') {
            return self.set_defined_multiple(registry, token);
        }
        let lowered = token.to_lowercase();

        if advanced {
            match lowered.chars().count() {
                3 => {
                    let name = registry
                        .entry_by_code3(&lowered)
                        .map(|entry| entry.name.to_string())
                        .or_else(|| registry.extended_name(&lowered).map(str::to_string))
                        .ok_or_else(|| anyhow!("no language carries the code `{token}`"))?;
                    let supported = convert(registry, &lowered).supported;
                    self.apply_language(&lowered, &name, supported);
                    self.is_identified = true;
                    Ok(())
                }
                4 => self.set_script(registry, &lowered),
                _ => bail!("advanced identification takes a 3- or 4-letter code, got `{token}`"),
            }
        } else {
            let result = convert(registry, token);
            if result.is_empty() {
                bail!("`{token}` does not match any language in the registry");
            }
            if result.is_script() {
                return self.set_script(registry, &result.code);
            }
            let country = result.country.clone();
            self.apply_language(&result.code, &result.name, result.supported);
            self.set_country(country.as_deref());
            self.is_identified = true;
            Ok(())
        }
    }

    /// Replace the language data with a defined multiple built from a
    /// `+`-joined token list, e.g. `german+french`. Tokens that match
    /// nothing are dropped; the whole call fails if none match.
    pub fn set_defined_multiple(&mut self, registry: &Registry, tokens: &str) -> Result<()> {
        let mut raw: Vec<&str> = tokens.split('+').collect();
        raw.sort_by_key(|token| token.to_lowercase());

        let mut codes: Vec<String> = Vec::new();
        let mut names: Vec<String> = Vec::new();
        for token in raw {
            let result = convert(registry, token);
            if !result.code.is_empty() && !result.name.is_empty() {
                codes.push(result.code);
                names.push(result.name);
            }
        }
        if codes.is_empty() {
            bail!("no recognizable languages in `{tokens}`");
        }

        // Flair text tops out at 64 characters; drop trailing codes so
        // the bracketed list always fits.
        if codes.join(", ").chars().count() > 34 {
            let mut short_codes: Vec<String> = Vec::new();
            let mut short_names: Vec<String> = Vec::new();
            for (code, name) in codes.iter().zip(names.iter()) {
                if short_codes.join(", ").chars().count() > 30 {
                    break;
                }
                short_codes.push(code.clone());
                short_names.push(name.clone());
            }
            codes = short_codes;
            names = short_names;
        }

        let statuses: BTreeMap<String, Status> = codes
            .iter()
            .map(|code| (code.clone(), Status::Untranslated))
            .collect();

        let old_name = self.languages.name().to_string();
        self.languages = LanguageInfo::Multiple(MultipleLanguageInfo {
            language_name: "Multiple Languages".to_string(),
            language_codes: codes,
            language_names: names,
        });
        self.status = StatusField::PerLanguage(statuses);
        self.is_script = false;
        self.push_history(old_name);
        Ok(())
    }

    pub fn set_status(&mut self, new_status: Status) {
        self.status = StatusField::Single(new_status);
    }

    /// Set one language's status on a defined multiple. `translated`
    /// is terminal: once a language reaches it, this call will not
    /// move it again. Unknown codes and scalar-status posts are
    /// left alone.
    pub fn set_status_multiple(&mut self, code: &str, new_status: Status) {
        if let StatusField::PerLanguage(statuses) = &mut self.status {
            if let Some(entry) = statuses.get_mut(code) {
                if *entry != Status::Translated {
                    *entry = new_status;
                }
            }
        }
    }

    /// Record when a status was first reached. Later transitions to
    /// the same status keep the original timestamp.
    pub fn set_time(&mut self, status: Status, seconds_since_creation: i64) {
        self.time_delta.entry(status).or_insert(seconds_since_creation);
    }

    pub fn set_long(&mut self, long: bool) {
        self.is_long = long;
    }

    pub fn set_author_messaged(&mut self, messaged: bool) {
        self.author_messaged = messaged;
    }

    /// Attach or clear the country variant. Only single-language posts
    /// carry one.
    pub fn set_country(&mut self, country: Option<&str>) {
        if let LanguageInfo::Single(info) = &mut self.languages {
            info.country_code = country.map(|code| code.to_uppercase());
        }
    }

    /// Pin down the script of a post whose language stays unknown.
    pub fn set_script(&mut self, registry: &Registry, script_code: &str) -> Result<()> {
        let code = script_code.to_lowercase();
        let name = registry
            .script_name(&code)
            .ok_or_else(|| anyhow!("`{script_code}` is not a known ISO 15924 code"))?;

        let old_name = self.languages.name().to_string();
        self.languages = LanguageInfo::Single(SingleLanguageInfo {
            language_code: "unknown".to_string(),
            language_name: "Unknown".to_string(),
            is_supported: true,
            country_code: None,
            script_code: Some(code),
            script_name: Some(name.to_string()),
        });
        if matches!(self.status, StatusField::PerLanguage(_)) {
            self.status = StatusField::Single(Status::Untranslated);
        }
        self.is_script = true;
        self.push_history(old_name);
        Ok(())
    }

    pub fn add_contributor(&mut self, name: &str) {
        if !self.contributors.iter().any(|known| known == name) {
            self.contributors.push(name.to_string());
        }
    }

    pub fn add_notified(&mut self, names: &[String]) {
        for name in names {
            if !self.notified.iter().any(|known| known == name) {
                self.notified.push(name.clone());
            }
        }
    }

    /// Rebuild the language data from the original title, as if the
    /// post had just been submitted. The clock and identification
    /// marks are wiped; contributors, notified users, and the history
    /// log survive.
    pub fn reset(&mut self, registry: &Registry) -> Result<()> {
        let classification = Classifier::new(registry).classify(&self.title_original)?;
        let (languages, status, is_script) = derive_languages(registry, &classification);
        self.languages = languages;
        self.status = status;
        self.is_script = is_script;
        self.is_identified = false;
        self.time_delta.clear();
        Ok(())
    }

    /// Swap in a new language, resetting whatever the old one carried.
    fn apply_language(&mut self, code: &str, name: &str, supported: bool) {
        let old_name = self.languages.name().to_string();
        if code == "multiple" || code == "app" {
            self.languages = LanguageInfo::Multiple(MultipleLanguageInfo {
                language_name: name.to_string(),
                language_codes: Vec::new(),
                language_names: Vec::new(),
            });
            self.status = StatusField::Single(Status::Untranslated);
        } else {
            self.languages = LanguageInfo::Single(SingleLanguageInfo {
                language_code: code.to_string(),
                language_name: name.to_string(),
                is_supported: supported,
                country_code: None,
                script_code: None,
                script_name: None,
            });
            if matches!(self.status, StatusField::PerLanguage(_)) {
                self.status = StatusField::Single(Status::Untranslated);
            }
        }
        self.is_script = false;
        self.push_history(old_name);
    }

    /// First change seeds the log with both names; later changes
    /// append only when the name actually moved.
    fn push_history(&mut self, old_name: String) {
        let new_name = self.languages.name().to_string();
        if self.language_history.is_empty() {
            if old_name == new_name {
                self.language_history = vec![new_name];
            } else {
                self.language_history = vec![old_name, new_name];
            }
        } else if self.language_history.last().map(String::as_str) != Some(new_name.as_str()) {
            self.language_history.push(new_name);
        }
    }
}

/// Translate a classification into language info, an initial status,
/// and the script flag.
fn derive_languages(
    registry: &Registry,
    classification: &TitleClassification,
) -> (LanguageInfo, StatusField, bool) {
    let code = classification.final_code.as_str();

    if code == "multiple" || code == "app" {
        let kind_name = if code == "app" { "App" } else { "Multiple Languages" };
        let mut codes: Vec<String> = Vec::new();
        let mut names: Vec<String> = Vec::new();
        if let Some(notify) = &classification.notify_languages {
            for language in notify {
                // Sentinel names convert to codes longer than three
                // letters and drop out here.
                let result = convert(registry, language);
                if result.code.len() == 2 || result.code.len() == 3 {
                    codes.push(result.code);
                    names.push(result.name);
                }
            }
        }
        let status = if codes.len() >= 2 {
            StatusField::PerLanguage(
                codes
                    .iter()
                    .map(|code| (code.clone(), Status::Untranslated))
                    .collect(),
            )
        } else {
            StatusField::Single(Status::Untranslated)
        };
        let info = MultipleLanguageInfo {
            language_name: kind_name.to_string(),
            language_codes: codes,
            language_names: names,
        };
        return (LanguageInfo::Multiple(info), status, false);
    }

    // Script posts arrive as `unknown` with an `unknown-<script>` pair.
    let script_code = classification
        .language_country
        .as_deref()
        .and_then(|pair| pair.strip_prefix("unknown-"))
        .filter(|tail| tail.chars().count() == 4)
        .map(str::to_string);
    let script_name = script_code
        .as_deref()
        .and_then(|code| registry.script_name(code))
        .map(str::to_string);
    let is_script = script_code.is_some();

    let country_code = if is_script {
        None
    } else {
        classification
            .language_country
            .as_deref()
            .filter(|pair| pair.chars().count() <= 6)
            .and_then(|pair| pair.split_once('-'))
            .map(|(_, country)| country.to_string())
    };

    let result = convert(registry, code);
    let is_supported = match code {
        "generic" => false,
        "unknown" => true,
        _ => result.supported,
    };
    let info = SingleLanguageInfo {
        language_code: code.to_string(),
        language_name: result.name,
        is_supported,
        country_code,
        script_code,
        script_name,
    };
    (
        LanguageInfo::Single(info),
        StatusField::Single(Status::Untranslated),
        is_script,
    )
}
