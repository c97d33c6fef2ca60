// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for lingo-triage
//!
//! Everything the pipeline produces is expressed with these types:
//! conversion results, title classifications, filter verdicts, and the
//! status vocabulary shared with the post-state tracker.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a translation request.
///
/// `Translated` is terminal: the state tracker refuses to move a post
/// out of it (the "ratchet").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Untranslated,
    #[serde(rename = "missing")]
    MissingAssets,
    InProgress,
    DoubleCheck,
    Translated,
}

impl Status {
    pub fn all() -> Vec<Self> {
        vec![
            Status::Untranslated,
            Status::MissingAssets,
            Status::InProgress,
            Status::DoubleCheck,
            Status::Translated,
        ]
    }

    /// Wire name used in serialized records and flair CSS classes.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Untranslated => "untranslated",
            Status::MissingAssets => "missing",
            Status::InProgress => "inprogress",
            Status::DoubleCheck => "doublecheck",
            Status::Translated => "translated",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "untranslated" => Some(Status::Untranslated),
            "missing" => Some(Status::MissingAssets),
            "inprogress" => Some(Status::InProgress),
            "doublecheck" => Some(Status::DoubleCheck),
            "translated" => Some(Status::Translated),
            _ => None,
        }
    }

    /// Flair wording for a workflow status, e.g. `Needs Review [DE]`.
    pub fn description(&self) -> &'static str {
        match self {
            Status::Untranslated => "Untranslated",
            Status::MissingAssets => "Missing Assets",
            Status::InProgress => "In Progress",
            Status::DoubleCheck => "Needs Review",
            Status::Translated => "Translated",
        }
    }

    /// Tag symbol shown next to a language code in a defined-multiple
    /// flair, e.g. the checkmark in `[DE✔]`. Untranslated has none.
    pub fn symbol(&self) -> Option<char> {
        match self {
            Status::Untranslated => None,
            Status::MissingAssets => Some('⍉'),
            Status::InProgress => Some('¦'),
            Status::DoubleCheck => Some('✓'),
            Status::Translated => Some('✔'),
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '⍉' => Some(Status::MissingAssets),
            '¦' => Some(Status::InProgress),
            '✓' => Some(Status::DoubleCheck),
            '✔' => Some(Status::Translated),
            _ => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which side of the request English sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Directionality {
    EnglishFrom,
    EnglishTo,
    EnglishBoth,
    EnglishNone,
}

impl Directionality {
    pub fn label(&self) -> &'static str {
        match self {
            Directionality::EnglishFrom => "english_from",
            Directionality::EnglishTo => "english_to",
            Directionality::EnglishBoth => "english_both",
            Directionality::EnglishNone => "english_none",
        }
    }
}

impl std::fmt::Display for Directionality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome of converting one token to a language.
///
/// An unrecognized token yields the empty result: a blank code always
/// comes with a blank name and no country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub code: String,
    pub name: String,
    pub supported: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl ConversionResult {
    pub fn empty() -> Self {
        ConversionResult {
            code: String::new(),
            name: String::new(),
            supported: false,
            country: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Script results carry a four-letter ISO 15924 code.
    pub fn is_script(&self) -> bool {
        self.code.len() == 4
    }
}

impl Default for ConversionResult {
    fn default() -> Self {
        Self::empty()
    }
}

/// Full classification of one post title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleClassification {
    /// Deduplicated, alphabetized source language names. Never empty;
    /// falls back to `["Generic"]`.
    pub source_languages: Vec<String>,
    /// Deduplicated, alphabetized target language names. Never empty.
    pub target_languages: Vec<String>,
    /// Primary classification code (flair CSS class).
    pub final_code: String,
    /// Human-readable flair text, e.g. `Multiple Languages [DE, FR]`.
    pub final_text: String,
    /// The title with its language tag removed.
    pub actual_title: String,
    /// The normalized title as it stood after source extraction.
    pub processed_title: String,
    /// Languages to notify for non-English pairs or multiple requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_languages: Option<Vec<String>>,
    /// Regional variant, e.g. `ar-LB`, when a country was detected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_country: Option<String>,
    pub direction: Directionality,
}

/// Formatting rule a rejected title violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterReason {
    /// No required keyword anywhere in the title.
    #[serde(rename = "1")]
    NoKeywords,
    /// A "to LANGUAGE" phrase exists but only far past the start.
    #[serde(rename = "1A")]
    BuriedLede,
    /// Short generic title with no usable language mention.
    #[serde(rename = "1B")]
    ShortGeneric,
    /// The `>` symbol appears only deep inside an untagged title.
    #[serde(rename = "2")]
    MisplacedArrow,
}

impl FilterReason {
    /// One/two-character rule code used in moderation messages.
    pub fn rule(&self) -> &'static str {
        match self {
            FilterReason::NoKeywords => "1",
            FilterReason::BuriedLede => "1A",
            FilterReason::ShortGeneric => "1B",
            FilterReason::MisplacedArrow => "2",
        }
    }
}

impl std::fmt::Display for FilterReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rule())
    }
}

/// Verdict of the formatting filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "lowercase")]
pub enum FilterVerdict {
    /// The title passed, possibly with misspellings of "English"
    /// repaired along the way.
    Accepted { title: String },
    Rejected { reason: FilterReason },
}

impl FilterVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, FilterVerdict::Accepted { .. })
    }

    pub fn reason(&self) -> Option<FilterReason> {
        match self {
            FilterVerdict::Accepted { .. } => None,
            FilterVerdict::Rejected { reason } => Some(*reason),
        }
    }
}
