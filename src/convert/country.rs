// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country detection. Resolves country names, codes, and nicknames to
//! ISO 3166 pairs, and pairs detected countries with languages to find
//! regional varieties like `ar-LB`.

use crate::registry::Registry;

/// Resolve `text` to `(alpha-2 code, country name)`. Both fields come
/// back empty when nothing matches. With `abbreviations_okay` the two
/// and three letter forms are tried against alpha-2/alpha-3 codes;
/// otherwise only names and keywords count, so short words in running
/// text do not false-positive.
pub(crate) fn country_lookup(
    registry: &Registry,
    text: &str,
    abbreviations_okay: bool,
) -> (String, String) {
    let mut code = String::new();
    let mut name = String::new();
    let length = text.chars().count();

    if length <= 1 {
        // Too short to mean anything.
    } else if length == 2 && abbreviations_okay {
        let upper = text.to_uppercase();
        for country in registry.countries() {
            if upper == country.alpha2 {
                code = upper.clone();
                name = country.name.to_string();
            }
        }
    } else if length == 3 && abbreviations_okay {
        let upper = text.to_uppercase();
        for country in registry.countries() {
            if upper == country.alpha3 {
                code = country.alpha2.to_string();
                name = country.name.to_string();
            }
        }
    } else {
        let titled = super::title_case(text);
        for country in registry.countries() {
            if titled == country.name {
                // Exact hit wins outright, comma and all.
                return (country.alpha2.to_string(), country.name.to_string());
            }
            if length >= 3 && country.name.contains(&titled) {
                code = country.alpha2.to_string();
                name = country.name.to_string();
            }
        }
        if code.is_empty() && name.is_empty() {
            for country in registry.countries() {
                if country.keywords.iter().any(|k| titled == *k) {
                    code = country.alpha2.to_string();
                    name = country.name.to_string();
                }
            }
        }
    }

    if let Some(first) = name.split(',').next() {
        // Take the head of official long forms (Taiwan, Province of China).
        name = first.trim().to_string();
    }
    (code, name)
}

/// Pair detected countries with languages to find a regional variety
/// that has its own ISO 639-3 code, e.g. `Arabic` + `Lebanon` gives
/// `("ar-LB", "apc")`. Returns `None` when no such pairing exists.
pub(crate) fn country_validator(
    registry: &Registry,
    word_list: &[String],
    language_list: &[String],
) -> Option<(String, &'static str)> {
    if word_list.is_empty() {
        return None;
    }
    let mut words = word_list;
    if words
        .last()
        .map(|w| w.contains(' '))
        .unwrap_or(false)
    {
        // The extraction step appends a joined phrase; its parts are
        // already in the list individually.
        words = &words[..words.len() - 1];
    }

    let mut candidates: Vec<String> = Vec::new();
    if words.len() > 2 && words.len() <= 4 {
        // Multi-word country names (Costa Rica) hide in combinations.
        for size in 2..=words.len() {
            for combo in index_combinations(words.len(), size) {
                let joined = combo
                    .iter()
                    .map(|&i| words[i].as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                candidates.push(joined);
            }
        }
    }
    candidates.extend(words.iter().cloned());

    let mut detected: Vec<String> = Vec::new();
    for word in &candidates {
        let (code, _) = country_lookup(registry, word, false);
        if !code.is_empty() {
            detected.push(code);
        }
    }
    if detected.is_empty() {
        return None;
    }

    for language in language_list {
        let code = super::convert(registry, language).code;
        let Some(entry) = registry.entry(&code) else {
            continue;
        };
        for country in entry.associated_countries {
            if detected.iter().any(|c| c == country) {
                let combined = format!("{code}-{country}");
                if let Some(iso) = registry.regional_code(&combined) {
                    return Some((combined, iso));
                }
            }
        }
    }
    None
}

/// Index combinations of `0..n` taken `size` at a time, in
/// lexicographic order.
fn index_combinations(n: usize, size: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    if size == 0 || size > n {
        return out;
    }
    let mut idx: Vec<usize> = (0..size).collect();
    loop {
        out.push(idx.clone());
        let mut i = size;
        loop {
            if i == 0 {
                return out;
            }
            i -= 1;
            if idx[i] < n - size + i {
                idx[i] += 1;
                for j in i + 1..size {
                    idx[j] = idx[j - 1] + 1;
                }
                break;
            }
            if i == 0 {
                return out;
            }
        }
    }
}
