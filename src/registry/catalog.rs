// SPDX-License-Identifier: PMPL-1.0-or-later

//! Embedded language catalog.
//!
//! These tables are the single source of truth for language identity:
//! which ISO 639-1/3 codes exist, what they are called, which ones the
//! community actively supports, and the misspellings people type for
//! them. [`crate::registry::Registry::new`] joins them into one entry
//! per language.
//!
//! Adding a new language:
//! 1. Append a `(code, name)` pair to `SUPPORTED` (or `UNSUPPORTED`).
//! 2. Append its `(code, code3)` pair to `CODE3`.
//! 3. Optionally add alternate spellings to `ALTERNATE_NAMES` and a
//!    home country to `DEFAULT_COUNTRY`.
//!
//! Entries must be Title Case for names and lowercase for codes; the
//! registry does no case folding when it loads them.

// ─── Supported Languages ────────────────────────────────────────────

/// Languages (and the four sentinel categories `multiple`, `app`,
/// `unknown`, `generic`) the community actively handles.
pub(crate) const SUPPORTED: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("sq", "Albanian"),
    ("am", "Amharic"),
    ("egy", "Ancient Egyptian"),
    ("ar", "Arabic"),
    ("arc", "Aramaic"),
    ("hy", "Armenian"),
    ("eu", "Basque"),
    ("be", "Belarusian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("bg", "Bulgarian"),
    ("my", "Burmese"),
    ("yue", "Cantonese"),
    ("ca", "Catalan"),
    ("zh", "Chinese"),
    ("hr", "Croatian"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("nl", "Dutch"),
    ("et", "Estonian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("de", "German"),
    ("ka", "Georgian"),
    ("el", "Greek"),
    ("gu", "Gujarati"),
    ("ht", "Haitian Creole"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hu", "Hungarian"),
    ("is", "Icelandic"),
    ("id", "Indonesian"),
    ("ga", "Irish"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("ko", "Korean"),
    ("ku", "Kurdish"),
    ("la", "Latin"),
    ("lv", "Latvian"),
    ("lt", "Lithuanian"),
    ("mg", "Malagasy"),
    ("ms", "Malay"),
    ("mr", "Marathi"),
    ("mn", "Mongolian"),
    ("non", "Norse"),
    ("no", "Norwegian"),
    ("ps", "Pashto"),
    ("fa", "Persian"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("pa", "Punjabi"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sa", "Sanskrit"),
    ("sc", "Sardinian"),
    ("gd", "Scottish Gaelic"),
    ("sr", "Serbian"),
    ("si", "Sinhalese"),
    ("sk", "Slovak"),
    ("sl", "Slovene"),
    ("so", "Somali"),
    ("es", "Spanish"),
    ("sw", "Swahili"),
    ("sv", "Swedish"),
    ("tl", "Tagalog"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("bo", "Tibetan"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("vi", "Vietnamese"),
    ("cy", "Welsh"),
    ("yi", "Yiddish"),
    ("zu", "Zulu"),
    ("multiple", "Multiple Languages"),
    ("app", "App"),
    ("unknown", "Unknown"),
    ("generic", "Generic"),
    ("art", "Conlang"),
    ("ang", "Anglo-Saxon"),
    ("ban", "Balinese"),
    ("ceb", "Cebuano"),
    ("haw", "Hawaiian"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mt", "Maltese"),
    ("ne", "Nepali"),
    ("zxx", "Nonlanguage"),
    ("chr", "Cherokee"),
    ("co", "Corsican"),
    ("cop", "Coptic"),
    ("cu", "Old Church Slavonic"),
    ("eo", "Esperanto"),
    ("grc", "Ancient Greek"),
    ("iu", "Inuktitut"),
    ("lo", "Lao"),
    ("nv", "Navajo"),
    ("qu", "Quechua"),
    ("xh", "Xhosa"),
    ("yo", "Yoruba"),
    ("az", "Azerbaijani"),
    ("br", "Breton"),
    ("dz", "Dzongkha"),
    ("fo", "Faroese"),
    ("jv", "Javanese"),
    ("kl", "Kalaallisut"),
    ("kn", "Kannada"),
    ("lb", "Luxembourgish"),
    ("li", "Limburgish"),
    ("ln", "Lingala"),
    ("lzh", "Classical Chinese"),
    ("mi", "Maori"),
    ("om", "Oromo"),
    ("ota", "Ottoman Turkish"),
    ("pi", "Pali"),
    ("syc", "Syriac"),
    ("tg", "Tajik"),
    ("tt", "Tatar"),
    ("tw", "Twi"),
    ("ug", "Uyghur"),
];

// ─── Recognized But Unsupported Languages ───────────────────────────

/// The rest of ISO 639-1. Convertible (code and name resolve) but not
/// supported: requests stay classifiable without community handling.
/// English lives here on purpose.
pub(crate) const UNSUPPORTED: &[(&str, &str)] = &[
    ("ab", "Abkhaz"),
    ("aa", "Afar"),
    ("ak", "Akan"),
    ("an", "Aragonese"),
    ("as", "Assamese"),
    ("av", "Avar"),
    ("ae", "Avestan"),
    ("ay", "Aymara"),
    ("bm", "Bambara"),
    ("ba", "Bashkir"),
    ("bh", "Bihari"),
    ("bi", "Bislama"),
    ("ch", "Chamorro"),
    ("ce", "Chechen"),
    ("ny", "Chichewa"),
    ("cv", "Chuvash"),
    ("kw", "Cornish"),
    ("cr", "Cree"),
    ("dv", "Dhivehi"),
    ("en", "English"),
    ("ee", "Ewe"),
    ("fj", "Fijian"),
    ("ff", "Fula"),
    ("gl", "Galician"),
    ("gn", "Guarani"),
    ("ha", "Hausa"),
    ("hz", "Herero"),
    ("ho", "Hiri Motu"),
    ("ia", "Interlingua"),
    ("ie", "Interlingue"),
    ("ig", "Igbo"),
    ("ik", "Inupiaq"),
    ("io", "Ido"),
    ("kr", "Kanuri"),
    ("ks", "Kashmiri"),
    ("ki", "Kikuyu"),
    ("rw", "Kinyarwanda"),
    ("ky", "Kyrgyz"),
    ("kv", "Komi"),
    ("kg", "Kongo"),
    ("kj", "Kwanyama"),
    ("lg", "Ganda"),
    ("lu", "Luba-Kasai"),
    ("gv", "Manx"),
    ("mh", "Marshallese"),
    ("na", "Nauruan"),
    ("nb", "Norwegian Bokmal"),
    ("nd", "North Ndebele"),
    ("ng", "Ndonga"),
    ("nn", "Norwegian Nynorsk"),
    ("ii", "Nuosu"),
    ("nr", "Southern Ndebele"),
    ("oc", "Occitan"),
    ("oj", "Ojibwe"),
    ("or", "Oriya"),
    ("os", "Ossetian"),
    ("rm", "Romansh"),
    ("rn", "Kirundi"),
    ("sd", "Sindhi"),
    ("se", "Northern Sami"),
    ("sm", "Samoan"),
    ("sg", "Sango"),
    ("sn", "Shona"),
    ("st", "Sotho"),
    ("su", "Sundanese"),
    ("ss", "Swati"),
    ("ti", "Tigrinya"),
    ("tk", "Turkmen"),
    ("tn", "Tswana"),
    ("to", "Tonga"),
    ("ts", "Tsonga"),
    ("ty", "Tahitian"),
    ("ve", "Venda"),
    ("vo", "Volapuk"),
    ("wa", "Walloon"),
    ("wo", "Wolof"),
    ("fy", "Frisian"),
    ("za", "Zhuang"),
];

// ─── ISO 639-3 Equivalents ──────────────────────────────────────────

/// Three-letter equivalent for every two-letter code. Macrolanguages
/// map to their most prominent constituent (zh -> cmn, not zho), which
/// is what people actually submit.
pub(crate) const CODE3: &[(&str, &str)] = &[
    ("ab", "abk"),
    ("aa", "aar"),
    ("af", "afr"),
    ("ak", "aka"),
    ("sq", "als"),
    ("am", "amh"),
    ("ar", "arb"),
    ("an", "arg"),
    ("hy", "hye"),
    ("as", "asm"),
    ("av", "ava"),
    ("ae", "ave"),
    ("ay", "ayr"),
    ("az", "azj"),
    ("bm", "bam"),
    ("ba", "bak"),
    ("eu", "eus"),
    ("be", "bel"),
    ("bn", "ben"),
    ("bh", "bho"),
    ("bi", "bis"),
    ("bs", "bos"),
    ("br", "bre"),
    ("bg", "bul"),
    ("my", "mya"),
    ("ca", "cat"),
    ("ch", "cha"),
    ("ce", "che"),
    ("ny", "nya"),
    ("zh", "cmn"),
    ("cv", "chv"),
    ("kw", "cor"),
    ("co", "cos"),
    ("cr", "crk"),
    ("hr", "hrv"),
    ("cs", "ces"),
    ("da", "dan"),
    ("dv", "div"),
    ("nl", "nld"),
    ("dz", "dzo"),
    ("en", "eng"),
    ("eo", "epo"),
    ("et", "ekk"),
    ("ee", "ewe"),
    ("fo", "fao"),
    ("fj", "fij"),
    ("fi", "fin"),
    ("fr", "fra"),
    ("ff", "fuf"),
    ("gl", "glg"),
    ("ka", "kat"),
    ("de", "deu"),
    ("el", "ell"),
    ("gn", "grn"),
    ("gu", "guj"),
    ("ht", "hat"),
    ("ha", "hau"),
    ("he", "heb"),
    ("hz", "her"),
    ("hi", "hin"),
    ("ho", "hmo"),
    ("hu", "hun"),
    ("ia", "ina"),
    ("id", "ind"),
    ("ie", "ile"),
    ("ga", "gle"),
    ("ig", "ibo"),
    ("ik", "ipk"),
    ("io", "ido"),
    ("is", "isl"),
    ("it", "ita"),
    ("iu", "ike"),
    ("ja", "jpn"),
    ("jv", "jav"),
    ("kl", "kal"),
    ("kn", "kan"),
    ("kr", "kau"),
    ("ks", "kas"),
    ("kk", "kaz"),
    ("km", "khm"),
    ("ki", "kik"),
    ("rw", "kin"),
    ("ky", "kir"),
    ("kv", "kom"),
    ("kg", "kon"),
    ("ko", "kor"),
    ("ku", "ckb"),
    ("kj", "kua"),
    ("la", "lat"),
    ("lb", "ltz"),
    ("lg", "lug"),
    ("li", "lim"),
    ("ln", "lin"),
    ("lo", "lao"),
    ("lt", "lit"),
    ("lu", "lub"),
    ("lv", "lvs"),
    ("gv", "glv"),
    ("mk", "mkd"),
    ("mg", "bhr"),
    ("ms", "zlm"),
    ("ml", "mal"),
    ("mt", "mlt"),
    ("mi", "mri"),
    ("mr", "mar"),
    ("mh", "mah"),
    ("mn", "khk"),
    ("na", "nau"),
    ("nv", "nav"),
    ("nb", "nob"),
    ("nd", "nde"),
    ("ne", "npi"),
    ("ng", "ndo"),
    ("nn", "nno"),
    ("no", "nor"),
    ("ii", "iii"),
    ("nr", "nbl"),
    ("oc", "oci"),
    ("oj", "oji"),
    ("cu", "chu"),
    ("om", "orm"),
    ("or", "ori"),
    ("os", "oss"),
    ("pa", "pan"),
    ("pi", "pli"),
    ("fa", "pes"),
    ("pl", "pol"),
    ("ps", "pst"),
    ("pt", "por"),
    ("qu", "que"),
    ("rm", "roh"),
    ("rn", "run"),
    ("ro", "ron"),
    ("ru", "rus"),
    ("sa", "san"),
    ("sc", "sro"),
    ("sd", "snd"),
    ("se", "sme"),
    ("sm", "smo"),
    ("sg", "sag"),
    ("sr", "srp"),
    ("gd", "gla"),
    ("sn", "sna"),
    ("si", "sin"),
    ("sk", "slk"),
    ("sl", "slv"),
    ("so", "som"),
    ("st", "sot"),
    ("es", "spa"),
    ("su", "sun"),
    ("sw", "swh"),
    ("ss", "ssw"),
    ("sv", "swe"),
    ("ta", "tam"),
    ("te", "tel"),
    ("tg", "tgk"),
    ("th", "tha"),
    ("ti", "tir"),
    ("bo", "bod"),
    ("tk", "tuk"),
    ("tl", "tgl"),
    ("tn", "tsn"),
    ("to", "ton"),
    ("tr", "tur"),
    ("ts", "tso"),
    ("tt", "tat"),
    ("tw", "twi"),
    ("ty", "tah"),
    ("ug", "uig"),
    ("uk", "ukr"),
    ("ur", "urd"),
    ("uz", "uzn"),
    ("ve", "ven"),
    ("vi", "vie"),
    ("vo", "vol"),
    ("wa", "wln"),
    ("cy", "cym"),
    ("wo", "wol"),
    ("fy", "fry"),
    ("xh", "xho"),
    ("yi", "yih"),
    ("yo", "yor"),
    ("za", "zyb"),
    ("zu", "zul"),
];

// ─── ISO 639-2B Codes ───────────────────────────────────────────────

/// Bibliographic three-letter codes and the 639-1 code they stand for.
pub(crate) const CODES_2B: &[(&str, &str)] = &[
    ("alb", "sq"),
    ("arm", "hy"),
    ("baq", "eu"),
    ("tib", "bo"),
    ("bur", "my"),
    ("cze", "cs"),
    ("chi", "zh"),
    ("wel", "cy"),
    ("ger", "de"),
    ("dut", "nl"),
    ("gre", "el"),
    ("per", "fa"),
    ("fre", "fr"),
    ("geo", "ka"),
    ("ice", "is"),
    ("mac", "mk"),
    ("mao", "mi"),
    ("may", "ms"),
    ("rum", "ro"),
    ("slo", "sk"),
];

// ─── Commonly Confused Country Codes ────────────────────────────────

/// ISO 3166 country codes people type where a language code belongs.
/// Only codes that do not collide with a real 639-1 code are listed.
pub(crate) const MISTAKE_CODES: &[(&str, &str)] = &[
    ("jp", "ja"),
    ("cz", "cs"),
    ("cn", "zh"),
    ("dk", "da"),
    ("gr", "el"),
    ("kh", "km"),
    ("tj", "tg"),
    ("ua", "uk"),
    ("vn", "vi"),
];

// ─── Alternate Names ────────────────────────────────────────────────

/// Misspellings, endonyms, and colloquial names, keyed by code.
/// Everything is Title Case.
pub(crate) const ALTERNATE_NAMES: &[(&str, &[&str])] = &[
    ("aa", &["Afaraf"]),
    ("ab", &["Abxazo", "Abkhazian"]),
    ("ae", &["Avesta"]),
    ("am", &[
        "Ethiopian", "Ethiopia", "Ethopian", "Ethiopic", "Abyssinian", "Amarigna", "Amarinya",
        "Amhara",
    ]),
    ("ang", &["Old English", "Anglo Saxon", "Anglosaxon", "Anglisc"]),
    ("ar", &[
        "Arab", "Arabian", "Arbic", "Aribic", "Arabe", "Levantine", "Arabish", "Arabiic",
        "Lebanese", "Syrian", "Yemeni", "3arabi", "Msarabic", "Moroccan", "Arabizi", "Tunisian",
    ]),
    ("art", &["Artificial", "Conlang", "Constructed", "Tengwar"]),
    ("as", &["Asamiya", "Asambe", "Asami"]),
    ("av", &["Avaro", "Avaric"]),
    ("az", &["Azeri"]),
    ("ban", &["Bali"]),
    ("be", &["Belarussian", "Belorusian", "Belorussian", "Bielorussian", "Byelorussian"]),
    ("bh", &["Bhojpuri", "Maithili", "Magahi"]),
    ("bi", &["Bichelamar"]),
    ("bn", &["Bangala", "Bangla"]),
    ("bo", &["Tibetic"]),
    ("br", &["Brezhoneg", "Berton"]),
    ("bs", &["Bosnien"]),
    ("ca", &["Catalonian", "Valencian", "Catalán"]),
    ("ceb", &["Cebu", "Visaya", "Bisaya", "Visayan"]),
    ("chr", &["Tsalagi"]),
    ("co", &["Corsu", "Corso", "Corse"]),
    ("cs", &["Bohemian", "Čeština", "Czechoslovakian"]),
    ("cu", &["Slavonic", "Church Slavonic", "Old Slavic"]),
    ("cv", &["Bulgar"]),
    ("cy", &["Wales", "Cymraeg", "Gymraeg"]),
    ("da", &["Dansk", "Denmark", "Rigsdansk"]),
    ("de", &[
        "Deutsch", "Deutsche", "Ger", "Deutch", "Bavarian", "Kurrent", "Austrian", "Sütterlin",
        "Plattdeutsch", "Suetterlin", "Tedesco",
    ]),
    ("dv", &["Divehi", "Maldivian", "Divehli"]),
    ("dz", &["Bhutanese", "Zongkhar"]),
    ("egy", &[
        "Hieroglyphs", "Hieroglyphic", "Hieroglyphics", "Hyroglifics", "Egyptian Hieroglyphs",
        "Egyptian Hieroglyph",
    ]),
    ("el", &["Hellenic", "Greece", "Hellas", "Cypriot"]),
    ("en", &[
        "Ingles", "Inggeris", "Englisch", "Inglese", "Inglesa", "Engrish", "Enlighs", "Engilsh",
        "Enlish", "Englishe", "Engish", "Engelish", "Engliah", "Englisg", "England", "Englsih",
        "Englkish", "Engilish", "Enlglish", "Englsh", "Enghlish", "Engligh", "Englist", "Engkish",
        "Ensglish", "Enhlish", "Английский", "английский", "Inggris", "Englische", "英語", "영어",
        "Anglais", "Engels", "Engelsk", "İngilizce", "英文",
    ]),
    ("es", &[
        "Espanol", "Spainish", "Mexican", "Castilian", "Español", "Spain", "Esp", "Chilean",
        "Castellano", "Españo",
    ]),
    ("et", &["Eesti"]),
    ("eu", &["Euska", "Euskera", "Euskerie", "Euskara"]),
    ("fa", &["Farsi", "Iranian", "Iran", "Parsi"]),
    ("ff", &["Fulah"]),
    ("fi", &["Finnic", "Suomi", "Finland"]),
    ("fo", &["Faeroese"]),
    ("fr", &["Francais", "Français", "Quebecois", "France", "Québécois"]),
    ("ga", &["Gaeilge", "Gaelic"]),
    ("gd", &["Gaidhlig", "Scottish Gaelic", "Scots Gaelic"]),
    ("gl", &["Gallego"]),
    ("grc", &[
        "Koine", "Doric", "Attic", "Byzantine Greek", "Medieval Greek", "Classic Greek",
        "Classical Greek",
    ]),
    ("gu", &["Gujerathi", "Gujerati", "Gujrathi"]),
    ("gv", &["Gailck", "Manx Gaelic"]),
    ("ha", &["Haoussa", "Hausawa"]),
    ("haw", &["Hawai'Ian", "Hawaii", "Hawai'I"]),
    ("he", &["Israeli", "Hebraic", "Jewish"]),
    ("hi", &["Hindustani", "Hindī"]),
    ("hr", &["Croation", "Serbo-Croatian"]),
    ("ht", &["Haitian", "Kreyòl Ayisyen", "Western Caribbean Creole", "Kreyol"]),
    ("hu", &["Magyar", "Hungary"]),
    ("id", &["Indonesia", "Indo"]),
    ("ig", &["Ibo"]),
    ("ik", &["Inupiat"]),
    ("it", &["Italiano", "Italiana", "Italia", "Italien", "Italy"]),
    ("iu", &["Inuit"]),
    ("ja", &[
        "Jap", "Jpn", "Japenese", "Japaneese", "Japanes", "Katakana", "Hiragana", "Japaness",
        "Romaji", "Japneese", "Japnese", "Kanji", "Japaese", "Japn", "Japonais", "Romajin",
        "Nihongo", "Kenji", "Romanji", "Rōmaji", "日本語",
    ]),
    ("ka", &["Common Kartvelian", "Kartvelian"]),
    ("kg", &["Kikongo"]),
    ("ki", &["Gikuyu"]),
    ("kj", &["Kuanyama"]),
    ("kk", &["Kazakhstan", "Kazak", "Kaisak", "Kosach"]),
    ("kl", &["Greenlandic"]),
    ("km", &["Cambodian", "Cambodia", "Kampuchea"]),
    ("ko", &["Korea", "Hangul", "Korian", "Kor", "Hanguk", "Guk-Eo"]),
    ("ks", &["Kacmiri", "Kaschemiri", "Keshur", "Koshur"]),
    ("ku", &["Kurdi", "Kurd"]),
    ("ky", &["Kirghiz", "Kirgiz"]),
    ("la", &["Latina", "Classical Roman"]),
    ("lb", &["Letzeburgesch", "Letzburgisch", "Luxembourgeois", "Luxemburgian", "Luxemburgish"]),
    ("lg", &["Kiganda"]),
    ("li", &["Limburgan", "Limburger", "Limburgs", "Limburgian", "Limburgic"]),
    ("lo", &["Laos", "Laotian"]),
    ("lt", &["Lithuania", "Lietuviu", "Litauische", "Litewski", "Litovskiy", "Lith"]),
    ("lzh", &["Literary Chinese", "Literary Sinitic", "Classical Sinitic", "文言文", "古文"]),
    ("mg", &["Madagascar"]),
    ("mi", &["Māori"]),
    ("mk", &["Macedonia"]),
    ("ms", &["Malaysia", "Melayu", "Malaysian"]),
    ("mt", &["Malti"]),
    ("multiple", &[
        "Various", "Any", "All", "Multi", "Multi-language", "Many", "Everything", "Anything",
        "Every Language", "Mul",
    ]),
    ("my", &["Myanmar", "Birmanie"]),
    ("ne", &["Nepalese", "Nepal"]),
    ("nl", &["Nederlands", "Holland", "Netherlands", "Flemish"]),
    ("no", &["Bokmal", "Norsk", "Nynorsk", "Norweigian"]),
    ("non", &["Nordic", "Futhark", "Viking"]),
    ("nr", &["Isindebele"]),
    ("nv", &["Navaho", "Diné", "Naabeehó"]),
    ("ny", &["Chewa", "Nyanja"]),
    ("oj", &["Ojibwa"]),
    ("om", &["Oromoo", "Oromiffa", "Oromifa", "Oromos"]),
    ("os", &["Ossetic"]),
    ("ota", &["Ottoman"]),
    ("pa", &["Panjabi", "Punjab", "Panjab"]),
    ("pi", &["Pāli"]),
    ("pl", &["Polnish", "Polnisch", "Poland", "Polisch", "Polski"]),
    ("ps", &["Pashtun", "Pushto", "Poshtu"]),
    ("pt", &[
        "Portugese", "Portugues", "Brazilian", "Portugais", "Brazil", "Brazilians", "Portugal",
        "Português",
    ]),
    ("qu", &["Kichwa"]),
    ("rn", &["Ikirundi"]),
    ("ru", &["Russain", "Russin", "Russion", "Rus", "Rusian", "Ruski", "ру́сский", "Русский"]),
    ("rw", &["Ikinyarwanda", "Orunyarwanda", "Ruanda", "Rwanda", "Rwandan", "Urunyaruanda"]),
    ("sa", &["Samskrit", "Sandskrit"]),
    ("sc", &["Sardu"]),
    ("si", &["Sinhala", "Sri Lanka", "Sri Lankan"]),
    ("sk", &["Slovakian", "Slovakia"]),
    ("sl", &["Slovenian", "Slovenski"]),
    ("so", &["Somalia", "Somalian"]),
    ("sq", &["Shqip", "Shqipe", "Tosk"]),
    ("sr", &["Yugoslavian"]),
    ("ss", &["Swazi"]),
    ("sv", &["Svenska", "Swede", "Sweedish", "Swedisch", "Swidish", "Gutnish", "Sweden"]),
    ("sw", &["Kiswahili"]),
    ("syc", &["Classical Syriac"]),
    ("th", &["Thailand", "Siamese", "Bangkok"]),
    ("tl", &[
        "Filipino", "Fillipino", "Philipino", "Philippines", "Philippine", "Phillipene",
        "Phillipenes",
    ]),
    ("tn", &["Setswana"]),
    ("to", &["Tongan"]),
    ("tr", &["Turkic", "Turkce", "Turkey", "Türkçe"]),
    ("ug", &["Uighur"]),
    ("uk", &["Ukranian", "Ukraine"]),
    ("unknown", &[
        "Unknown", "Unkown", "Unknow", "Uknown", "Unknon", "Unsure", "Asian", "Asiatic",
        "Not Sure", "Don'T Know", "Dont Know", "No Idea", "I Don'T Know", "Unk", "Idk",
        "Undefined", "Source Language", "Mystery", "Native American", "Uncertain", "Indian",
        "Unidentified",
    ]),
    ("ur", &["Pakistani", "Pakistan"]),
    ("vi", &["Vietnam", "Viet", "Chữ Nôm", "Annamese"]),
    ("vo", &["Volapük"]),
    ("xh", &["Isixhosa"]),
    ("yi", &["Yidish"]),
    ("yue", &["Cantonese Chinese", "Chinese Cantonese", "Canto", "Taishanese", "Guangzhou"]),
    ("zh", &[
        "Mandarin", "Taiwanese", "Chinease", "Manderin", "Zhongwen", "中文", "汉语", "漢語", "國語",
        "Chinise", "Chineese", "Hanzi", "Cinese", "Mandrin", "Mandarin Chinese", "Taiwan", "China",
        "Chn", "Pinyin", "Beijinghua", "Zhongguohua", "Putonghua", "Guanhua",
    ]),
    ("zxx", &["Null", "None", "Nothing", "Gibberish", "Nonsense", "Mojibake"]),
];

// ─── Home And Associated Countries ──────────────────────────────────

/// The one country treated as a language's default region. A pair like
/// `zh-CN` is collapsed back to plain `zh`; only non-default countries
/// survive as regional variants.
pub(crate) const DEFAULT_COUNTRY: &[(&str, &str)] = &[
    ("af", "ZA"),
    ("sq", "AL"),
    ("am", "ET"),
    ("hy", "AM"),
    ("eu", "ES"),
    ("be", "BY"),
    ("bn", "BD"),
    ("bs", "BA"),
    ("my", "MM"),
    ("yue", "HK"),
    ("ca", "ES"),
    ("zh", "CN"),
    ("cs", "CZ"),
    ("da", "DK"),
    ("et", "EE"),
    ("ka", "GE"),
    ("el", "GR"),
    ("gu", "IN"),
    ("he", "IL"),
    ("hi", "IN"),
    ("hu", "HU"),
    ("ga", "IE"),
    ("ja", "JP"),
    ("kk", "KZ"),
    ("km", "KH"),
    ("ko", "KR"),
    ("ku", "IQ"),
    ("ms", "MY"),
    ("mr", "IN"),
    ("ps", "AF"),
    ("fa", "IR"),
    ("pa", "PK"),
    ("sr", "RS"),
    ("si", "LK"),
    ("sl", "SI"),
    ("sv", "SE"),
    ("tl", "PH"),
    ("ta", "IN"),
    ("te", "IN"),
    ("uk", "UA"),
    ("ur", "PK"),
    ("vi", "VN"),
    ("zu", "ZA"),
];

/// Countries where a notable non-default variety of the language is
/// spoken. English is deliberately absent: regional English requests
/// are not treated as regional.
pub(crate) const ASSOCIATED_COUNTRIES: &[(&str, &[&str])] = &[
    ("af", &["NA"]),
    ("ar", &[
        "AE", "CY", "DZ", "BH", "DJ", "EG", "IL", "IQ", "JO", "KW", "LB", "LY", "MA", "ML", "OM",
        "PS", "SA", "SO", "SD", "SS", "SY", "TD", "TN", "YE",
    ]),
    ("ay", &["PE", "CL", "BO"]),
    ("de", &["AT", "BE", "CH"]),
    ("el", &["CY"]),
    ("es", &[
        "MX", "VE", "AR", "BO", "CL", "CO", "CR", "CU", "DO", "EC", "SV", "GQ", "GT", "HN", "NI",
        "PA", "PY", "PE", "PR", "UY",
    ]),
    ("fa", &["AF"]),
    ("ff", &[
        "SN", "GM", "MR", "SL", "GN", "GW", "ML", "GH", "TG", "BJ", "BF", "NE", "SD", "TD", "CM",
        "CF", "NG",
    ]),
    ("fr", &["BE", "CA", "CF", "CD", "DJ", "GQ", "HT", "ML", "NE", "SN", "CH", "TG"]),
    ("gn", &["PY", "AR", "BO"]),
    ("ha", &["NE", "NG", "TD"]),
    ("hi", &["FJ"]),
    ("kw", &["AO", "NA"]),
    ("ms", &["BN", "SG"]),
    ("nl", &["BE", "SR"]),
    ("om", &["ET", "KE"]),
    ("pt", &["AO", "BR", "MZ", "TL", "CV"]),
    ("ro", &["MD"]),
    ("sq", &["XK"]),
    ("sr", &["ME"]),
    ("sw", &["CD", "TZ", "KE", "UG"]),
    ("ta", &["SG"]),
    ("tr", &["CY"]),
    ("uz", &["AF"]),
    ("yue", &["HK", "MO"]),
    ("zh", &["TW"]),
];
