// SPDX-License-Identifier: PMPL-1.0-or-later

//! Source and target language extraction.
//!
//! Works on a normalized title. The source side is whatever precedes
//! the first connector (`>`, ` to `, a dash), the target side whatever
//! follows it up to the closing bracket. Both sides are tokenized,
//! scrubbed of ordinary English words that look like ISO codes, and run
//! through the converter. The raw token lists are kept around because
//! the regional-variety detector wants them unconverted.

use regex::Regex;

use super::char_prefix;
use crate::convert::{convert, title_case};
use crate::registry::Registry;

/// Two-letter English words that collide with ISO 639-1 codes.
const ENGLISH_2_WORDS: &[&str] = &[
    "As", "He", "My", "It", "Be", "No", "Am", "So", "Is", "To", "An", "Or", "Se", "Br", "Tw", "El",
];

/// Three-letter English words that collide with ISO 639-2/3 codes.
const ENGLISH_3_WORDS: &[&str] = &[
    "Abs", "Abu", "Aby", "Ace", "Act", "Add", "Ado", "Ads", "Aft", "Age", "Ago", "Aid", "Ail",
    "Aim", "Air", "Ait", "Ale", "Amp", "And", "Ant", "Ape", "App", "Apt", "Arc", "Are", "Ark",
    "Arm", "Art", "Ash", "Ask", "Asp", "Ass", "Ate", "Auk", "Awe", "Awl", "Awn", "Axe", "Azo",
    "Baa", "Bad", "Bag", "Bah", "Bam", "Ban", "Bar", "Bat", "Bay", "Bed", "Bee", "Beg", "Bet",
    "Bey", "Bib", "Bid", "Big", "Bin", "Bio", "Bit", "Boa", "Bob", "Bod", "Bog", "Boo", "Bop",
    "Bot", "Bow", "Box", "Boy", "Bra", "Bro", "Bub", "Bud", "Bug", "Bum", "Bun", "Bus", "But",
    "Buy", "Bye", "Cab", "Cad", "Cam", "Can", "Cap", "Car", "Cat", "Caw", "Cee", "Cha", "Chi",
    "Cob", "Cod", "Cog", "Com", "Con", "Coo", "Cop", "Cot", "Cow", "Cox", "Coy", "Cry", "Cub",
    "Cud", "Cue", "Cup", "Cur", "Cut", "Dab", "Dad", "Dag", "Dam", "Day", "Dee", "Den", "Dew",
    "Dib", "Did", "Die", "Dig", "Dim", "Din", "Dip", "Doc", "Doe", "Dog", "Don", "Doo", "Dop",
    "Dot", "Dry", "Dub", "Dud", "Due", "Dug", "Duh", "Dun", "Duo", "Dux", "Dye", "Ear", "Eat",
    "Ebb", "Eel", "Egg", "Ego", "Eke", "Elf", "Elk", "Elm", "Emo", "Emu", "End", "Eon", "Era",
    "Erg", "Err", "Etc", "Eve", "Ewe", "Eye", "Fab", "Fad", "Fag", "Fan", "Far", "Fat", "Fax",
    "Fay", "Fed", "Fee", "Fen", "Few", "Fey", "Fez", "Fib", "Fie", "Fig", "Fin", "Fir", "Fit",
    "Fix", "Fly", "Fob", "Foe", "Fog", "Fon", "Fop", "For", "Fox", "Fry", "Fue", "Fun", "Fur",
    "Gab", "Gag", "Gak", "Gal", "Gap", "Gas", "Gaw", "Gay", "Gee", "Gel", "Gem", "Geo", "Get",
    "Gig", "Gil", "Gin", "Git", "Gnu", "Gob", "God", "Goo", "Got", "Gum", "Gun", "Gut", "Guy",
    "Gym", "Had", "Hag", "Hal", "Han", "Ham", "Has", "Hat", "Hay", "Hem", "Hen", "Her", "Hew",
    "Hex", "Hey", "Hid", "Him", "Hip", "His", "Hit", "Hoe", "Hog", "Hop", "Hot", "How", "Hoy",
    "Hub", "Hue", "Hug", "Huh", "Hum", "Hut", "Ice", "Ich", "Ick", "Icy", "Ilk", "Ill", "Imp",
    "Ink", "Inn", "Ion", "Ire", "Irk", "Ism", "Its", "Jab", "Jag", "Jah", "Jak", "Jam", "Jar",
    "Jav", "Jaw", "Jay", "Jem", "Jet", "Jew", "Jib", "Jig", "Job", "Joe", "Jog", "Jon", "Jot",
    "Joy", "Jug", "Jus", "Jut", "Keg", "Key", "Kid", "Kin", "Kit", "Koa", "Kob", "Koi", "Lab",
    "Lad", "Lag", "Lap", "Law", "Lax", "Lay", "Lea", "Led", "Lee", "Leg", "Lei", "Let", "Lew",
    "Lid", "Lie", "Lip", "Lit", "Lob", "Log", "Lol", "Loo", "Lop", "Los", "Lot", "Low", "Lug",
    "Lux", "Lye", "Mac", "Mad", "Mag", "Man", "Mao", "Map", "Mar", "Mat", "Maw", "Max", "May",
    "Men", "Met", "Mic", "Mid", "Min", "Mit", "Mix", "Mob", "Mod", "Mog", "Mom", "Mon", "Moo",
    "Mop", "Mow", "Mud", "Mug", "Mum", "Nab", "Nag", "Nap", "Nay", "Nee", "Neo", "Net", "New",
    "Nib", "Nil", "Nip", "Nit", "Nix", "Nob", "Nod", "Nog", "Non", "Nor", "Not", "Now", "Nub",
    "Nun", "Nut", "Oaf", "Oak", "Oar", "Oat", "Odd", "Ode", "Off", "Oft", "Ohm", "Oil", "Old",
    "Ole", "Oma", "One", "Opt", "Orb", "Ore", "Our", "Out", "Ova", "Owe", "Owl", "Own", "Pac",
    "Pad", "Pal", "Pan", "Pap", "Par", "Pas", "Pat", "Paw", "Pax", "Pay", "Pea", "Pee", "Peg",
    "Pen", "Pep", "Per", "Pet", "Pew", "Pls", "Plz", "Pic", "Pie", "Pig", "Pin", "Pip", "Pit",
    "Pix", "Ply", "Pod", "Poe", "Pog", "Poi", "Poo", "Pop", "Pot", "Pow", "Pox", "Pre", "Pro",
    "Pry", "Pub", "Pud", "Pug", "Pun", "Pup", "Pus", "Put", "Pyx", "Qat", "Qua", "Quo", "Rad",
    "Rag", "Ram", "Ran", "Rap", "Rat", "Raw", "Ray", "Red", "Rib", "Rid", "Rig", "Rim", "Rip",
    "Rob", "Roc", "Rod", "Roe", "Rot", "Row", "Rub", "Rue", "Rug", "Rum", "Run", "Rut", "Rye",
    "Sac", "Sad", "Sag", "Sap", "Sat", "Saw", "Sax", "Say", "Sea", "Sec", "See", "Set", "Sew",
    "Sex", "She", "Shh", "Shy", "Sic", "Sim", "Sin", "Sip", "Sir", "Sis", "Sit", "Six", "Ski",
    "Sky", "Sly", "Sob", "Sod", "Som", "Son", "Sop", "Sot", "Sow", "Soy", "Spa", "Spy", "Sty",
    "Sub", "Sue", "Sum", "Sun", "Sup", "Tab", "Tad", "Tag", "Tam", "Tan", "Tae", "Tap", "Tar",
    "Tat", "Tax", "Tea", "Tee", "Ten", "The", "Thx", "Tic", "Tie", "Til", "Tin", "Tip", "Tit",
    "Toe", "Tom", "Ton", "Too", "Top", "Tot", "Tow", "Toy", "Try", "Tub", "Tug", "Tui", "Tut",
    "Two", "Txt", "Ugh", "Uke", "Ump", "Urn", "Usa", "Use", "Van", "Vat", "Vee", "Vet", "Vex",
    "Via", "Vie", "Vig", "Vim", "Voe", "Vow", "Wad", "Wag", "Wan", "War", "Was", "Wax", "Way",
    "Web", "Wed", "Wee", "Wel", "Wen", "Wet", "Who", "Why", "Wig", "Win", "Wit", "Wiz", "Woe",
    "Wog", "Wok", "Won", "Woo", "Wow", "Wry", "Wwi", "Wye", "Yak", "Yam", "Yap", "Yaw", "Yay",
    "Yea", "Yen", "Yep", "Yes", "Yet", "Yew", "Yip", "You", "Yow", "Yum", "Yup", "Zag", "Zap",
    "Zed", "Zee", "Zen", "Zig", "Zip", "Zit", "Zoa", "Zoo",
];

/// Everything the extraction stage pulls out of a normalized title.
pub(crate) struct ExtractedLanguages {
    /// Converted source language names, deduplicated and alphabetized.
    /// Never empty; falls back to `["Generic"]`.
    pub sources: Vec<String>,
    pub targets: Vec<String>,
    /// Unfiltered source tokens plus their joined phrase.
    pub source_tokens: Vec<String>,
    pub target_tokens: Vec<String>,
    /// Source tokens after the English-word scrub.
    pub source_filtered: Vec<String>,
    pub target_filtered: Vec<String>,
    /// Remainder of the title after the target-side cut.
    pub cut_title: String,
    /// The normalized title as it stood before the cut.
    pub processed_title: String,
}

fn is_english_word(word: &str) -> bool {
    ENGLISH_2_WORDS.contains(&word) || ENGLISH_3_WORDS.contains(&word)
}

pub(crate) fn extract(registry: &Registry, title: &str) -> ExtractedLanguages {
    let mut title = title.to_string();

    let source_text = if title.contains('>') {
        title.split('>').next().unwrap_or("").to_string()
    } else if char_prefix(&title.to_lowercase(), 50).contains(" to ") {
        title.split(" to ").next().unwrap_or("").to_string()
    } else if title.contains('-') && !char_prefix(&title, 50).contains("to") {
        title.split('-').next().unwrap_or("").to_string()
    } else {
        // No usable connector, treat the whole title as the source side.
        title.clone()
    };

    let punct = Regex::new(r#"[,.;@#?!&$()\[\]/“”’"•]+ *"#).unwrap();
    let source_text = punct.replace_all(&source_text, " ").to_string();
    let source_text = title_case(&source_text);
    let mut source_tokens: Vec<String> = source_text
        .split_whitespace()
        .map(|w| w.to_string())
        .collect();

    // Multi-word names like "Old Norse" only resolve as a whole phrase.
    if source_tokens.len() >= 2 && source_tokens[1].trim() != "-" {
        source_tokens.push(source_tokens.join(" "));
    }

    let source_filtered: Vec<String> = source_tokens
        .iter()
        .filter(|w| !is_english_word(w))
        .cloned()
        .collect();

    let mut sources: Vec<String> = Vec::new();
    for token in &source_filtered {
        let token = if title_case(token).contains("Eng") && token.chars().count() <= 8 {
            "English"
        } else {
            token.as_str()
        };
        let name = convert(registry, token).name;
        if !name.is_empty() && !sources.contains(&name) {
            sources.push(name);
        }
    }
    sources.sort();
    if sources.is_empty() {
        sources.push("Generic".to_string());
    }

    let processed_title = title.clone();

    // Cut the title at the first connector and keep whatever precedes
    // the closing bracket as the target text.
    let mut target_text = String::new();
    let mut cut = false;
    for split_char in [">", " to ", "-", "<"] {
        if title.to_lowercase().contains(split_char) {
            title = match title.find(split_char) {
                Some(idx) => title[idx + split_char.len()..].to_string(),
                // Connector present only in another case, skip its width.
                None => title.chars().skip(split_char.len() - 1).collect(),
            };
            let mut chunk = title.split(']').next().unwrap_or("").to_string();
            for c in [',', '/', '+', ']', ')', '.', ':'] {
                if chunk.contains(c) {
                    chunk = chunk.replace(c, " ");
                }
            }
            target_text = chunk;
            cut = true;
            break;
        }
    }
    if !cut {
        target_text = title.split(']').next().unwrap_or("").to_string();
    }

    let punct_target = Regex::new(r#"[,.;@#?!&$()“”’"\[•]+ *"#).unwrap();
    let target_text = punct_target.replace_all(&target_text, " ").to_string();

    let mut target_tokens: Vec<String> = target_text
        .split_whitespace()
        .map(title_case)
        .collect();
    if target_tokens.len() >= 2 {
        target_tokens.push(target_tokens.join(" "));
    }
    let target_tokens: Vec<String> = target_tokens
        .iter()
        .map(|w| w.trim().to_string())
        .collect();

    let target_filtered: Vec<String> = target_tokens
        .iter()
        .filter(|w| !is_english_word(w))
        .cloned()
        .collect();

    let mut targets: Vec<String> = Vec::new();
    for token in &target_filtered {
        let name = convert(registry, token).name;
        if !name.is_empty() && !targets.contains(&name) {
            targets.push(name);
        }
    }
    targets.sort();
    if targets.is_empty() {
        targets.push("Generic".to_string());
    }

    if targets.len() >= 2
        && targets.iter().all(|t| t.contains("English"))
        && targets.iter().any(|t| t == "English")
    {
        targets.retain(|t| t != "English");
    }

    ExtractedLanguages {
        sources,
        targets,
        source_tokens,
        target_tokens,
        source_filtered,
        target_filtered,
        cut_title: title,
        processed_title,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(title: &str) -> ExtractedLanguages {
        let registry = Registry::new();
        extract(&registry, title)
    }

    #[test]
    fn test_bracketed_pair_extracts_both_sides() {
        let out = run("[Chinese > English] need help with this");
        assert_eq!(out.sources, vec!["Chinese"]);
        assert_eq!(out.targets, vec!["English"]);
        assert_eq!(out.processed_title, "[Chinese > English] need help with this");
        assert_eq!(out.cut_title, " English] need help with this");
    }

    #[test]
    fn test_to_connector_splits_sides() {
        let out = run("my friend sent this chinese to me");
        assert_eq!(out.sources, vec!["Chinese"]);
        assert_eq!(out.targets, vec!["Generic"]);
        assert_eq!(out.cut_title, "me");
    }

    #[test]
    fn test_english_words_are_not_codes() {
        // "Is" is an English word before it is Icelandic.
        let out = run("[Is this Japanese > English] page from a textbook");
        assert_eq!(out.sources, vec!["Japanese"]);
        assert!(out.source_filtered.iter().all(|w| w != "Is"));
    }

    #[test]
    fn test_multi_word_names_resolve_via_joined_phrase() {
        let out = run("[Old Norse > English] runestone");
        assert_eq!(out.sources, vec!["Norse"]);
        assert!(out
            .source_tokens
            .contains(&"Old Norse".to_string()));
    }

    #[test]
    fn test_eng_shorthand_becomes_english() {
        let out = run("[Eng > German] one word");
        assert_eq!(out.sources, vec!["English"]);
        assert_eq!(out.targets, vec!["German"]);
    }

    #[test]
    fn test_comma_separated_targets_all_resolve() {
        let out = run("[eng > zh, German, French] our club flyer");
        assert_eq!(out.sources, vec!["English"]);
        assert_eq!(out.targets, vec!["Chinese", "French", "German"]);
    }

    #[test]
    fn test_unparseable_sides_fall_back_to_generic() {
        let out = run("[??? > English] weird stamp");
        assert_eq!(out.sources, vec!["Generic"]);
        assert_eq!(out.targets, vec!["English"]);
    }
}
