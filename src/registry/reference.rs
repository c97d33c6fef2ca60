// SPDX-License-Identifier: PMPL-1.0-or-later

//! Reference tables past the core catalog: ISO 15924 scripts and the
//! ISO 639-3 languages without a two-letter code that still show up in
//! requests (regional Arabic varieties, Chinese topolects, ancient
//! languages). Scripts matter for posts where only the writing system
//! is recognizable; they classify as `unknown-<script>`.

/// One ISO 15924 script row. Codes are stored lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Script {
    pub code: &'static str,
    pub name: &'static str,
}

/// An ISO 639-3 language outside the core catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendedLanguage {
    pub code3: &'static str,
    pub name: &'static str,
    /// Alternate names, Title Case.
    pub alternates: &'static [&'static str],
}

const fn script(code: &'static str, name: &'static str) -> Script {
    Script { code, name }
}

const fn ext(code3: &'static str, name: &'static str) -> ExtendedLanguage {
    ExtendedLanguage {
        code3,
        name,
        alternates: &[],
    }
}

const fn ext_alias(
    code3: &'static str,
    name: &'static str,
    alternates: &'static [&'static str],
) -> ExtendedLanguage {
    ExtendedLanguage {
        code3,
        name,
        alternates,
    }
}

// ─── Scripts ────────────────────────────────────────────────────────

pub(crate) const SCRIPTS: &[Script] = &[
    script("arab", "Arabic"),
    script("armn", "Armenian"),
    script("avst", "Avestan"),
    script("bali", "Balinese"),
    script("batk", "Batak"),
    script("beng", "Bengali"),
    script("bopo", "Bopomofo"),
    script("brah", "Brahmi"),
    script("brai", "Braille"),
    script("bugi", "Buginese"),
    script("cans", "Canadian Aboriginal Syllabics"),
    script("cher", "Cherokee"),
    script("copt", "Coptic"),
    script("cprt", "Cypriot"),
    script("cyrl", "Cyrillic"),
    script("deva", "Devanagari"),
    script("dsrt", "Deseret"),
    script("egyp", "Egyptian Hieroglyphs"),
    script("ethi", "Ethiopic"),
    script("geor", "Georgian"),
    script("glag", "Glagolitic"),
    script("goth", "Gothic"),
    script("grek", "Greek"),
    script("gujr", "Gujarati"),
    script("guru", "Gurmukhi"),
    script("hang", "Hangul"),
    script("hani", "Han"),
    script("hans", "Simplified Han"),
    script("hant", "Traditional Han"),
    script("hebr", "Hebrew"),
    script("hira", "Hiragana"),
    script("ital", "Old Italic"),
    script("java", "Javanese"),
    script("jpan", "Japanese"),
    script("kana", "Katakana"),
    script("khar", "Kharoshthi"),
    script("khmr", "Khmer"),
    script("knda", "Kannada"),
    script("kore", "Korean"),
    script("lana", "Tai Tham"),
    script("laoo", "Lao"),
    script("latn", "Latin"),
    script("linb", "Linear B"),
    script("mlym", "Malayalam"),
    script("mong", "Mongolian"),
    script("mtei", "Meitei Mayek"),
    script("mymr", "Myanmar"),
    script("nkoo", "N'Ko"),
    script("ogam", "Ogham"),
    script("olck", "Ol Chiki"),
    script("orya", "Oriya"),
    script("phnx", "Phoenician"),
    script("runr", "Runic"),
    script("samr", "Samaritan"),
    script("shaw", "Shavian"),
    script("sinh", "Sinhala"),
    script("sund", "Sundanese"),
    script("sylo", "Syloti Nagri"),
    script("syrc", "Syriac"),
    script("tale", "Tai Le"),
    script("talu", "New Tai Lue"),
    script("taml", "Tamil"),
    script("telu", "Telugu"),
    script("tfng", "Tifinagh"),
    script("thaa", "Thaana"),
    script("thai", "Thai"),
    script("tibt", "Tibetan"),
    script("ugar", "Ugaritic"),
    script("vaii", "Vai"),
    script("xpeo", "Old Persian"),
    script("xsux", "Cuneiform"),
    script("yiii", "Yi"),
];

// ─── Extended Languages ─────────────────────────────────────────────

/// Regional varieties referenced by `REGIONAL_CODES` plus assorted
/// ISO 639-3 languages the community asks about.
pub(crate) const EXTENDED_LANGUAGES: &[ExtendedLanguage] = &[
    ext("abv", "Baharna Arabic"),
    ext("acm", "Mesopotamian Arabic"),
    ext("acw", "Hijazi Arabic"),
    ext("acx", "Omani Arabic"),
    ext("acy", "Cypriot Arabic"),
    ext("aeb", "Tunisian Arabic"),
    ext("afb", "Gulf Arabic"),
    ext_alias("ain", "Ainu", &["Aynu"]),
    ext("ajp", "South Levantine Arabic"),
    ext_alias("akk", "Akkadian", &["Assyrian Cuneiform", "Babylonian"]),
    ext_alias("aln", "Gheg Albanian", &["Gheg"]),
    ext_alias("apc", "North Levantine Arabic", &["Levantine Arabic"]),
    ext("apd", "Sudanese Arabic"),
    ext_alias("arn", "Mapudungun", &["Mapuche", "Araucanian"]),
    ext("arq", "Algerian Arabic"),
    ext("arz", "Egyptian Arabic"),
    ext("ayc", "Southern Aymara"),
    ext("ayl", "Libyan Arabic"),
    ext("ayr", "Central Aymara"),
    ext_alias("cdo", "Min Dong Chinese", &["Min Dong", "Fuzhounese"]),
    ext("cjy", "Jinyu Chinese"),
    ext_alias("crs", "Seychellois Creole", &["Seselwa"]),
    ext("czh", "Huizhou Chinese"),
    ext_alias("evn", "Evenki", &["Tungus"]),
    ext("ffm", "Maasina Fulfulde"),
    ext("fub", "Adamawa Fulfulde"),
    ext("fuc", "Pulaar"),
    ext("fue", "Borgu Fulfulde"),
    ext("fuf", "Pular"),
    ext("fuh", "Western Niger Fulfulde"),
    ext("fui", "Bagirmi Fulfulde"),
    ext("fuv", "Nigerian Fulfulde"),
    ext("gan", "Gan Chinese"),
    ext("gax", "Borana-Arsi-Guji Oromo"),
    ext_alias("gcf", "Guadeloupean Creole French", &["Antillean Creole"]),
    ext_alias("got", "Gothic", &["Visigothic"]),
    ext_alias("gsw", "Swiss German", &["Alemannic", "Schwyzerdutsch", "Schweizerdeutsch"]),
    ext("gui", "Eastern Bolivian Guarani"),
    ext_alias("hak", "Hakka Chinese", &["Hakka"]),
    ext_alias("hbo", "Ancient Hebrew", &["Biblical Hebrew", "Classical Hebrew"]),
    ext("hif", "Fiji Hindi"),
    ext("hsn", "Xiang Chinese"),
    ext_alias("jam", "Jamaican Patois", &["Patois", "Jamaican", "Patwa"]),
    ext("kxd", "Brunei Malay"),
    ext_alias("lad", "Ladino", &["Judeo-Spanish", "Judaeo-Spanish"]),
    ext_alias("mfe", "Morisyen", &["Mauritian Creole"]),
    ext_alias("mnc", "Manchu", &["Manchurian"]),
    ext("mnp", "Min Bei Chinese"),
    ext_alias("nan", "Min Nan Chinese", &["Hokkien", "Min Nan", "Teochew", "Taiwanese Hokkien"]),
    ext_alias("nci", "Classical Nahuatl", &["Nahuatl", "Aztec"]),
    ext_alias("pal", "Middle Persian", &["Pahlavi"]),
    ext_alias("pap", "Papiamento", &["Papiamentu"]),
    ext_alias("peo", "Old Persian", &["Achaemenid Persian"]),
    ext_alias("phn", "Phoenician", &["Punic"]),
    ext_alias("prs", "Dari", &["Afghan Persian"]),
    ext_alias("rom", "Romani", &["Romany", "Gypsy"]),
    ext_alias("ryu", "Okinawan", &["Ryukyuan", "Uchinaguchi"]),
    ext_alias("sco", "Scots", &["Lallans", "Doric Scots"]),
    ext_alias("srn", "Sranan Tongo", &["Sranan", "Surinamese Creole"]),
    ext_alias("sux", "Sumerian", &["Sumerian Cuneiform"]),
    ext("swc", "Congo Swahili"),
    ext_alias("tpi", "Tok Pisin", &["New Guinea Pidgin"]),
    ext_alias("uga", "Ugaritic", &["Ugarit"]),
    ext("uzs", "Southern Uzbek"),
    ext_alias("wuu", "Wu Chinese", &["Shanghainese", "Wu"]),
    ext_alias("xcl", "Classical Armenian", &["Grabar", "Old Armenian"]),
];
