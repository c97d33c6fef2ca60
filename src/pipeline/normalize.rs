// SPDX-License-Identifier: PMPL-1.0-or-later

//! Title normalization.
//!
//! Incoming titles are rewritten by an ordered list of small named
//! rules before any language extraction happens. Each rule is a pure
//! string rewrite (plus an optional country side-channel), so rules can
//! be unit-tested on their own and the full pass stays idempotent:
//! running the normalizer twice never changes the result further.
//!
//! Rule order matters and mirrors how malformed titles actually fail:
//! exotic Unicode arrows first, then bracket repair, then the dash and
//! arrow fallbacks for people who never used brackets at all.

use regex::Regex;

use super::char_prefix;
use super::mentions::language_mention_search;
use crate::convert::{convert, country_lookup, title_case};
use crate::registry::Registry;

/// Characters people use instead of `>`.
const WRONG_DIRECTIONS: &[&str] = &["<", "〉", "›", "》", "»", "⟶", "&gt;", "→", "←", "~"];

/// Characters people use instead of `[`.
const WRONG_BRACKETS_LEFT: &[&str] = &["［", "〚", "【 ", "〔", "〖", "⟦", "｟", "《"];

/// Characters people use instead of `]`.
const WRONG_BRACKETS_RIGHT: &[&str] = &["］", "〛", "】", "〕", "〗", "⟧", "｠", "》"];

/// Dash-delimited English markers, e.g. `English - 日本語`.
pub(crate) const ENGLISH_DASHES: &[&str] = &[
    "English -",
    "English-",
    "-English",
    "- English",
    "-Eng",
    "Eng-",
    "- Eng",
    "Eng -",
    "ENGLISH-",
    "ENGLISH -",
    "EN-",
    "ENG-",
    "ENG -",
    "-ENG",
    "- ENG",
    "-ENGLISH",
    "- ENGLISH",
];

/// Working state threaded through the rule list.
pub(crate) struct TitleContext {
    pub title: String,
    /// Country code pulled out of a `{Country}` tag, if any.
    pub country_suffix: String,
    pub has_country: bool,
}

impl TitleContext {
    pub(crate) fn new(title: &str) -> Self {
        TitleContext {
            title: title.to_string(),
            country_suffix: String::new(),
            has_country: false,
        }
    }
}

/// One named rewrite step.
pub struct NormalizeRule {
    pub name: &'static str,
    apply: fn(&Registry, &mut TitleContext),
}

pub struct Normalizer {
    rules: Vec<NormalizeRule>,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            rules: Self::build_rules(),
        }
    }

    /// Build the ordered rule list.
    fn build_rules() -> Vec<NormalizeRule> {
        vec![
            NormalizeRule {
                name: "strip_crosspost",
                apply: strip_crosspost,
            },
            NormalizeRule {
                name: "fix_english_spelling",
                apply: fix_english_spelling,
            },
            NormalizeRule {
                name: "canonicalize_language_names",
                apply: canonicalize_language_names,
            },
            NormalizeRule {
                name: "replace_exotic_punctuation",
                apply: replace_exotic_punctuation,
            },
            NormalizeRule {
                name: "lowercase_to_connector",
                apply: lowercase_to_connector,
            },
            NormalizeRule {
                name: "promote_paren_tags",
                apply: promote_paren_tags,
            },
            NormalizeRule {
                name: "expand_kr_prefix",
                apply: expand_kr_prefix,
            },
            NormalizeRule {
                name: "reformat_bare_titles",
                apply: reformat_bare_titles,
            },
            NormalizeRule {
                name: "collapse_bracket_connectors",
                apply: collapse_bracket_connectors,
            },
            NormalizeRule {
                name: "extract_country_tag",
                apply: extract_country_tag,
            },
            NormalizeRule {
                name: "english_dash_to_arrow",
                apply: english_dash_to_arrow,
            },
            NormalizeRule {
                name: "transpose_trailing_tag",
                apply: transpose_trailing_tag,
            },
            NormalizeRule {
                name: "close_english_sentence",
                apply: close_english_sentence,
            },
            NormalizeRule {
                name: "underscores_to_spaces",
                apply: underscores_to_spaces,
            },
            NormalizeRule {
                name: "dashes_to_spaces",
                apply: dashes_to_spaces,
            },
            NormalizeRule {
                name: "pad_separators",
                apply: pad_separators,
            },
            NormalizeRule {
                name: "collapse_arrows",
                apply: collapse_arrows,
            },
            NormalizeRule {
                name: "bracket_arrow_english",
                apply: bracket_arrow_english,
            },
            NormalizeRule {
                name: "dash_arrow_fallbacks",
                apply: dash_arrow_fallbacks,
            },
        ]
    }

    pub fn rules(&self) -> &[NormalizeRule] {
        &self.rules
    }

    pub(crate) fn apply(&self, registry: &Registry, ctx: &mut TitleContext) {
        for rule in &self.rules {
            (rule.apply)(registry, ctx);
        }
    }

    /// Normalize a title and return only the rewritten string.
    pub fn normalize(&self, registry: &Registry, title: &str) -> String {
        let mut ctx = TitleContext::new(title);
        self.apply(registry, &mut ctx);
        ctx.title
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Rules ──────────────────────────────────────────────────────────

fn strip_crosspost(_registry: &Registry, ctx: &mut TitleContext) {
    if let Some((head, _)) = ctx.title.split_once("(x-post") {
        ctx.title = head.trim().to_string();
    }
}

fn fix_english_spelling(registry: &Registry, ctx: &mut TitleContext) {
    if let Some(entry) = registry.entry("en") {
        for spelling in entry.alternates {
            if title_case(&ctx.title).contains(spelling) {
                ctx.title = ctx.title.replace(spelling, "English");
            }
        }
    }
    if ctx.title.contains("english") {
        ctx.title = ctx.title.replace("english", "English");
    }
}

fn canonicalize_language_names(_registry: &Registry, ctx: &mut TitleContext) {
    if ctx.title.contains("Old English") {
        ctx.title = ctx.title.replace("Old English", "Anglosaxon");
    } else if ctx.title.contains("Anglo-Saxon") {
        ctx.title = ctx.title.replace("Anglo-Saxon", "Anglosaxon");
    } else if ctx.title.contains("Scots Gaelic") {
        ctx.title = ctx.title.replace("Scots Gaelic", "Scottish Gaelic");
    }
}

fn replace_exotic_punctuation(_registry: &Registry, ctx: &mut TitleContext) {
    for mark in WRONG_DIRECTIONS {
        if ctx.title.contains(mark) {
            ctx.title = ctx.title.replace(mark, " > ");
        }
    }
    for mark in WRONG_BRACKETS_LEFT {
        if ctx.title.contains(mark) {
            ctx.title = ctx.title.replace(mark, " [");
        }
    }
    for mark in WRONG_BRACKETS_RIGHT {
        if ctx.title.contains(mark) {
            ctx.title = ctx.title.replace(mark, "] ");
        }
    }
}

fn lowercase_to_connector(_registry: &Registry, ctx: &mut TitleContext) {
    if !ctx.title.contains('>') && ctx.title.to_lowercase().contains(" to ") {
        ctx.title = ctx
            .title
            .replace(" To ", " to ")
            .replace(" TO ", " to ")
            .replace(" tO ", " to ");
    }
}

fn promote_paren_tags(_registry: &Registry, ctx: &mut TitleContext) {
    if ctx.title.contains(']') || ctx.title.contains('[') {
        return;
    }
    let paren = Regex::new(r"^\((.+(>| to ).+)\)").unwrap();
    let brace = Regex::new(r"^\{(.+(>| to ).+)\}").unwrap();
    if paren.is_match(&ctx.title) {
        ctx.title = ctx.title.replacen('(', "[", 1).replacen(')', "]", 1);
    } else if brace.is_match(&ctx.title) {
        ctx.title = ctx.title.replacen('{', "[", 1).replacen('}', "]", 1);
    }
}

fn expand_kr_prefix(_registry: &Registry, ctx: &mut TitleContext) {
    // "KR" is a country code, not a language, but it always means Korean here.
    if char_prefix(&ctx.title.to_uppercase(), 10).contains("KR ") {
        ctx.title = ctx.title.replace("KR ", "Korean ");
    }
}

fn reformat_bare_titles(registry: &Registry, ctx: &mut TitleContext) {
    if !ctx.title.contains(']') && !ctx.title.contains('[') {
        if let Some(better) = detect_languages_reformat(registry, &ctx.title) {
            ctx.title = better;
        }
    }
}

fn collapse_bracket_connectors(_registry: &Registry, ctx: &mut TitleContext) {
    let connector = Regex::new(r"\]\s*[>\\-]\s*\[").unwrap();
    ctx.title = connector.replace_all(&ctx.title, " > ").to_string();
}

fn extract_country_tag(registry: &Registry, ctx: &mut TitleContext) {
    if ctx.title.contains('{') && ctx.title.contains('}') && ctx.title.contains('[') {
        ctx.has_country = true;
        let tag = Regex::new(r"\{(\D+)\}").unwrap();
        if let Some(captures) = tag.captures(&ctx.title) {
            let country_name = captures.get(1).map(|m| m.as_str()).unwrap_or("");
            let code = country_lookup(registry, country_name, true).0;
            ctx.country_suffix = code;
            if !ctx.country_suffix.is_empty() {
                let head = ctx
                    .title
                    .split_once('{')
                    .map(|(h, _)| h.trim().to_string())
                    .unwrap_or_default();
                let tail = ctx
                    .title
                    .split_once('}')
                    .map(|(_, t)| t.to_string())
                    .unwrap_or_default();
                ctx.title = format!("{head}{tail}");
            }
        }
    } else if ctx.title.contains('{') && !ctx.title.contains('[') {
        ctx.title = ctx.title.replace('{', "[").replace('}', "]");
    }
}

fn english_dash_to_arrow(_registry: &Registry, ctx: &mut TitleContext) {
    if char_prefix(&ctx.title, 20).contains('-') {
        let titled = title_case(&ctx.title);
        if ENGLISH_DASHES.iter().any(|k| titled.contains(k)) {
            ctx.title = ctx.title.replace('-', " > ");
        }
    }
}

fn transpose_trailing_tag(_registry: &Registry, ctx: &mut TitleContext) {
    if ctx.title.contains('[') && !char_prefix(&ctx.title, 10).contains('[') {
        ctx.title = transbrackets(ctx.title.trim());
    }
}

fn close_english_sentence(_registry: &Registry, ctx: &mut TitleContext) {
    if !ctx.title.contains(']') && ctx.title.contains("English.") {
        ctx.title = format!("[{}", ctx.title.replace("English.", "English] "));
    }
}

fn underscores_to_spaces(_registry: &Registry, ctx: &mut TitleContext) {
    if ctx.title.contains('_') {
        ctx.title = ctx.title.replace('_', " ");
    }
}

fn dashes_to_spaces(registry: &Registry, ctx: &mut TitleContext) {
    if !char_prefix(&ctx.title, 25).contains('-') {
        return;
    }
    // A hyphenated word may itself be a language (Puyo-Paekche).
    let hyphenated = Regex::new(r"(?:\w+-)+\w+").unwrap();
    if let Some(m) = hyphenated.find(&ctx.title) {
        if convert(registry, m.as_str()).name.is_empty() {
            ctx.title = ctx.title.replace('-', " ");
        }
    }
}

fn pad_separators(_registry: &Registry, ctx: &mut TitleContext) {
    let separator = Regex::new(r"\s*([&+/\\|])\s*").unwrap();
    ctx.title = separator.replace_all(&ctx.title, " $1 ").to_string();
}

fn collapse_arrows(_registry: &Registry, ctx: &mut TitleContext) {
    for compound in [">>>", ">>", "> >"] {
        if ctx.title.contains(compound) {
            ctx.title = ctx.title.replace(compound, " > ");
        }
    }
}

fn bracket_arrow_english(_registry: &Registry, ctx: &mut TitleContext) {
    if ctx.title.contains('>')
        && ctx.title.contains("English")
        && !ctx.title.contains(']')
        && !ctx.title.contains('[')
    {
        ctx.title = format!("[{}", ctx.title.replace("English", "English]"));
    }
}

fn dash_arrow_fallbacks(_registry: &Registry, ctx: &mut TitleContext) {
    if ctx.title.contains('>') {
        return;
    }
    let head = char_prefix(&ctx.title, 25);
    if head.contains("- Eng") || head.contains("-Eng") {
        ctx.title = ctx.title.replace('-', " > ");
    }
    if char_prefix(&ctx.title, 30).contains(" into ") {
        ctx.title = ctx.title.replace("into", ">");
    }
}

// ─── Helpers ────────────────────────────────────────────────────────

/// Move a bracketed tag from the middle or end of a title to the front.
fn transbrackets(title: &str) -> String {
    if title.contains(']') {
        let bracketed = Regex::new(r"\[(.+)\]").unwrap();
        if let Some(m) = bracketed.find(title) {
            let tag = m.as_str();
            let remainder = title.replace(tag, "");
            return format!("{tag} {remainder}");
        }
        title.to_string()
    } else if let Some((_, tail)) = title.split_once('[') {
        let mut remainder = title.replace(tail, "");
        remainder.pop();
        format!("[{tail}] {remainder}")
    } else {
        title.to_string()
    }
}

/// Try to build a bracketed tag out of a title that never had one, e.g.
/// `"English to Chinese Lorem Ipsum"` -> `"[English > Chinese]  Lorem Ipsum"`.
fn detect_languages_reformat(registry: &Registry, title: &str) -> Option<String> {
    let word_re = Regex::new(r"\w+").unwrap();
    let words: Vec<&str> = word_re.find_iter(title).map(|m| m.as_str()).collect();

    let mut selected: Vec<(String, String)> = Vec::new();
    for word in words.iter().take(7) {
        if word.to_lowercase() == "to" {
            continue;
        }
        if let Some(mentions) = language_mention_search(registry, &title_case(word)) {
            if !selected.iter().any(|(w, _)| w == word) {
                selected.push((word.to_string(), mentions[0].clone()));
            }
        }
    }

    // The last language among the leading words closes the tag.
    let mut last_language: Option<String> = None;
    for word in words.iter().take(7).rev() {
        if let Some(mentions) = language_mention_search(registry, &title_case(word)) {
            last_language = Some(mentions[0].clone());
            break;
        }
    }

    if last_language.is_none() || selected.is_empty() {
        return None;
    }

    let mut sorted_selected = selected.clone();
    sorted_selected.sort_by(|a, b| a.0.cmp(&b.0));

    let mut new_title = String::new();
    for (word, language) in &sorted_selected {
        if word.as_str() == words[0] {
            new_title = title.replace(word.as_str(), &format!("[{language}"));
        }
    }
    for (word, language) in &sorted_selected {
        if Some(language) == last_language.as_ref() {
            new_title = new_title.replace(word.as_str(), &format!("{language}] "));
        }
    }

    if new_title.contains(" to ") {
        new_title = new_title.replace(" to ", " > ");
    } else if new_title.contains(" into ") {
        new_title = new_title.replace(" into ", " > ");
    }

    if new_title.is_empty() {
        None
    } else {
        Some(new_title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(title: &str) -> String {
        let registry = Registry::new();
        Normalizer::new().normalize(&registry, title)
    }

    #[test]
    fn test_rule_order_is_stable() {
        let normalizer = Normalizer::new();
        let names: Vec<_> = normalizer.rules().iter().map(|r| r.name).collect();
        assert_eq!(names[0], "strip_crosspost");
        assert_eq!(names.last(), Some(&"dash_arrow_fallbacks"));
        assert_eq!(names.len(), 19);
        let kr = names.iter().position(|n| *n == "expand_kr_prefix");
        let bare = names.iter().position(|n| *n == "reformat_bare_titles");
        assert!(kr < bare, "KR expansion must run before bare-title reformat");
    }

    #[test]
    fn test_exotic_arrows_become_plain_ones() {
        assert_eq!(
            normalize("[English < Chinese] my friend sent this to me"),
            "[English  >  Chinese] my friend sent this to me"
        );
        assert_eq!(normalize("[日本語 → English] help"), "[日本語  >  English] help");
    }

    #[test]
    fn test_bare_titles_get_reformatted() {
        assert_eq!(
            normalize("English to Spanish please"),
            "[English > Spanish]  please"
        );
    }

    #[test]
    fn test_paren_tags_are_promoted() {
        assert_eq!(normalize("(English > German) help"), "[English > German] help");
    }

    #[test]
    fn test_country_tags_are_extracted() {
        let registry = Registry::new();
        let normalizer = Normalizer::new();
        let mut ctx = TitleContext::new("[German {Austria} > English] souvenir");
        normalizer.apply(&registry, &mut ctx);
        assert!(ctx.has_country);
        assert_eq!(ctx.country_suffix, "AT");
        assert_eq!(ctx.title, "[German > English] souvenir");
    }

    #[test]
    fn test_trailing_tags_move_to_the_front() {
        assert_eq!(
            normalize("What does this mean [Japanese > English]"),
            "[Japanese > English] What does this mean "
        );
    }

    #[test]
    fn test_misspelled_english_is_fixed() {
        assert!(normalize("[Engrish > Korean] menu").starts_with("[English > Korean]"));
    }

    #[test]
    fn test_kr_prefix_expands_to_korean() {
        assert_eq!(
            normalize("KR to English please"),
            "[Korean > English]  please"
        );
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let registry = Registry::new();
        let normalizer = Normalizer::new();
        let samples = [
            "[English < Chinese] my friend sent this to me",
            "english to spanish translation",
            "(English > German) help",
            "Translate this_puzzle to English",
            "[Japanese > English] what does A&B mean",
            "What does this mean [Japanese > English]",
            "KR to English please",
            "[Unknown] mystery text",
        ];
        for sample in samples {
            let once = normalizer.normalize(&registry, sample);
            let twice = normalizer.normalize(&registry, &once);
            assert_eq!(once, twice, "normalizer not idempotent for {sample:?}");
        }
    }
}
