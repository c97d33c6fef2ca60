// SPDX-License-Identifier: PMPL-1.0-or-later

//! Fuzzy matching for misspelled language names.
//!
//! Scoring is the classic indel ratio: `100 * 2 * lcs / (len_a + len_b)`,
//! computed over characters, so "Chinnsse" still resolves to Chinese.

use crate::registry::Registry;

/// Words that look close to a language name but never are one, or that
/// must bypass fuzzy matching to reach the reference tables instead.
pub(crate) const FUZZ_IGNORE_WORDS: &[&str] = &[
    "Javanese",
    "Japanese",
    "Romanization",
    "Romani",
    "Karen",
    "Morse",
    "Roman",
    "Scandinavian",
    "Latino",
    "Latina",
    "Romanji",
    "Romanized",
    "Guarani",
    "Here",
    "Chopstick",
    "Turks",
    "Romany",
    "Romanjin",
    "Serial",
    "Ancient Mayan",
    "Cheese",
    "Sorbian",
    "Green",
    "Orkish",
    "Peruvian",
    "Nurse",
    "Maay",
    "Canada",
    "Kanada",
    "Sumerian",
    "Classical Japanese",
    "Logo",
    "Sake",
    "Trail",
];

/// Indel similarity in the range 0.0 to 100.0.
pub(crate) fn indel_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for ch in &a {
        for (j, other) in b.iter().enumerate() {
            curr[j + 1] = if ch == other {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    let lcs = prev[b.len()];
    100.0 * (2 * lcs) as f64 / total as f64
}

/// First supported language name within fuzzy range of `word`, in
/// catalog order. Javanese is excluded: near-misses for it are almost
/// always Japanese, which the scan reaches on its own.
pub(crate) fn fuzzy_text(registry: &Registry, word: &str) -> Option<&'static str> {
    registry
        .supported_names()
        .iter()
        .find(|name| indel_ratio(name, word) > 75.0 && **name != "Javanese")
        .copied()
}

/// Whether `word` is probably a misspelling of "English".
pub(crate) fn english_fuzz(word: &str) -> bool {
    indel_ratio("English", &super::title_case(word)) > 70.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_extremes() {
        assert_eq!(indel_ratio("English", "English"), 100.0);
        assert_eq!(indel_ratio("", ""), 100.0);
        assert_eq!(indel_ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_fuzzy_resolves_misspellings() {
        let registry = Registry::new();
        assert_eq!(fuzzy_text(&registry, "Chinnsse"), Some("Chinese"));
        assert_eq!(fuzzy_text(&registry, "Spansih"), Some("Spanish"));
        assert_eq!(fuzzy_text(&registry, "Qwertyuiop"), None);
    }

    #[test]
    fn test_javanese_near_misses_go_to_japanese() {
        let registry = Registry::new();
        assert_eq!(fuzzy_text(&registry, "Javanes"), Some("Japanese"));
    }

    #[test]
    fn test_english_fuzz_detects_typos() {
        assert!(english_fuzz("english"));
        assert!(english_fuzz("Enlgish"));
        assert!(english_fuzz("Englsh"));
        assert!(!english_fuzz("Hello"));
        assert!(!english_fuzz("Spanish"));
    }
}
