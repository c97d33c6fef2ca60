// SPDX-License-Identifier: PMPL-1.0-or-later

//! Embedded ISO 3166 country catalog.
//!
//! Used for detecting regional language varieties ("Brazilian
//! Portuguese", "ar-LB"). Keywords are demonyms and city names people
//! write instead of the country itself. The United Kingdom appears
//! twice so both `GB` and the colloquial `UK` resolve.

/// One ISO 3166 country row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub numeric: &'static str,
    /// Associated words, in Title Case.
    pub keywords: &'static [&'static str],
}

const fn plain(
    name: &'static str,
    alpha2: &'static str,
    alpha3: &'static str,
    numeric: &'static str,
) -> Country {
    Country {
        name,
        alpha2,
        alpha3,
        numeric,
        keywords: &[],
    }
}

const fn keyed(
    name: &'static str,
    alpha2: &'static str,
    alpha3: &'static str,
    numeric: &'static str,
    keywords: &'static [&'static str],
) -> Country {
    Country {
        name,
        alpha2,
        alpha3,
        numeric,
        keywords,
    }
}

// ─── Country List ───────────────────────────────────────────────────

pub(crate) const COUNTRIES: &[Country] = &[
    keyed("Afghanistan", "AF", "AFG", "004", &["Afghan", "Afghani"]),
    plain("Albania", "AL", "ALB", "008"),
    keyed("Algeria", "DZ", "DZA", "012", &["Algerian", "Algerien"]),
    keyed("Andorra", "AD", "AND", "020", &["Andorran"]),
    keyed("Angola", "AO", "AGO", "024", &["Angolan"]),
    plain("Anguilla", "AI", "AIA", "660"),
    plain("Antigua and Barbuda", "AG", "ATG", "028"),
    keyed("Argentina", "AR", "ARG", "032", &["Argentinian", "Argentine"]),
    plain("Armenia", "AM", "ARM", "051"),
    plain("Aruba", "AW", "ABW", "533"),
    keyed("Australia", "AU", "AUS", "036", &["Australian", "Straya"]),
    keyed("Austria", "AT", "AUT", "040", &["Austrian", "Vienna", "Osterreich"]),
    plain("Azerbaijan", "AZ", "AZE", "031"),
    plain("Bahamas", "BS", "BHS", "044"),
    keyed("Bahrain", "BH", "BHR", "048", &["Bahrani"]),
    plain("Bangladesh", "BD", "BGD", "050"),
    plain("Barbados", "BB", "BRB", "052"),
    plain("Belarus", "BY", "BLR", "112"),
    keyed("Belgium", "BE", "BEL", "056", &["Belgian", "Brussels", "Belgien"]),
    plain("Belize", "BZ", "BLZ", "084"),
    plain("Benin", "BJ", "BEN", "204"),
    plain("Bermuda", "BM", "BMU", "060"),
    plain("Bhutan", "BT", "BTN", "064"),
    keyed("Bolivia, Plurinational State of", "BO", "BOL", "068", &["Bolivian"]),
    plain("Bosnia and Herzegovina", "BA", "BIH", "070"),
    plain("Botswana", "BW", "BWA", "072"),
    keyed("Brazil", "BR", "BRA", "076", &["Brazilian", "Brasil", "Brazilien", "Brazillian"]),
    keyed("Brunei", "BN", "BRN", "096", &["Bruneian", "Darussalam"]),
    plain("Bulgaria", "BG", "BGR", "100"),
    plain("Burkina Faso", "BF", "BFA", "854"),
    plain("Burundi", "BI", "BDI", "108"),
    plain("Cambodia", "KH", "KHM", "116"),
    plain("Cameroon", "CM", "CMR", "120"),
    keyed("Canada", "CA", "CAN", "124", &["Canadian", "Quebec", "Quebecois"]),
    plain("Cabo Verde", "CV", "CPV", "132"),
    plain("Cayman Islands", "KY", "CYM", "136"),
    plain("Central African Republic", "CF", "CAF", "140"),
    plain("Chad", "TD", "TCD", "148"),
    keyed("Chile", "CL", "CHL", "152", &["Chilean"]),
    keyed("China", "CN", "CHN", "156", &["Zhongguo"]),
    keyed("Colombia", "CO", "COL", "170", &["Colombian"]),
    plain("Comoros", "KM", "COM", "174"),
    plain("Congo", "CG", "COG", "178"),
    keyed("Congo, Democratic Republic of the", "CD", "COD", "180", &["Congolese"]),
    plain("Cook Islands", "CK", "COK", "184"),
    keyed("Costa Rica", "CR", "CRI", "188", &["Costa Rican"]),
    keyed("Côte d'Ivoire", "CI", "CIV", "384", &["Ivory Coast"]),
    plain("Croatia", "HR", "HRV", "191"),
    keyed("Cuba", "CU", "CUB", "192", &["Cuban", "Havana"]),
    plain("Curaçao", "CW", "CUW", "531"),
    keyed("Cyprus", "CY", "CYP", "196", &["Cypriot"]),
    keyed("Czech Republic", "CZ", "CZE", "203", &["Czechia"]),
    plain("Denmark", "DK", "DNK", "208"),
    plain("Djibouti", "DJ", "DJI", "262"),
    plain("Dominica", "DM", "DMA", "212"),
    keyed("Dominican Republic", "DO", "DOM", "214", &["Dominican"]),
    keyed("Ecuador", "EC", "ECU", "218", &["Ecuadorian"]),
    keyed("Egypt", "EG", "EGY", "818", &["Egyptian"]),
    keyed("El Salvador", "SV", "SLV", "222", &["El Salvadorian"]),
    plain("Equatorial Guinea", "GQ", "GNQ", "226"),
    plain("Eritrea", "ER", "ERI", "232"),
    plain("Estonia", "EE", "EST", "233"),
    plain("Ethiopia", "ET", "ETH", "231"),
    plain("Faroe Islands", "FO", "FRO", "234"),
    keyed("Fiji", "FJ", "FJI", "242", &["Fijian"]),
    keyed("Finland", "FI", "FIN", "246", &["Finnish"]),
    plain("France", "FR", "FRA", "250"),
    plain("Gabon", "GA", "GAB", "266"),
    plain("Gambia", "GM", "GMB", "270"),
    plain("Georgia", "GE", "GEO", "268"),
    plain("Germany", "DE", "DEU", "276"),
    plain("Ghana", "GH", "GHA", "288"),
    plain("Greece", "GR", "GRC", "300"),
    plain("Greenland", "GL", "GRL", "304"),
    plain("Grenada", "GD", "GRD", "308"),
    plain("Guadeloupe", "GP", "GLP", "312"),
    plain("Guam", "GU", "GUM", "316"),
    keyed("Guatemala", "GT", "GTM", "320", &["Guatemalan"]),
    plain("Guernsey", "GG", "GGY", "831"),
    plain("Guinea", "GN", "GIN", "324"),
    plain("Guinea-Bissau", "GW", "GNB", "624"),
    keyed("Guyana", "GY", "GUY", "328", &["Guyanese"]),
    keyed("Haiti", "HT", "HTI", "332", &["Haitian"]),
    keyed("Holy See", "VA", "VAT", "336", &["Vatican"]),
    keyed("Honduras", "HN", "HND", "340", &["Honduran"]),
    plain("Hong Kong", "HK", "HKG", "344"),
    plain("Hungary", "HU", "HUN", "348"),
    plain("Iceland", "IS", "ISL", "352"),
    keyed("India", "IN", "IND", "356", &["Indian"]),
    plain("Indonesia", "ID", "IDN", "360"),
    plain("Iran, Islamic Republic of", "IR", "IRN", "364"),
    keyed("Iraq", "IQ", "IRQ", "368", &["Iraqi", "Baghdad"]),
    keyed("Ireland", "IE", "IRL", "372", &["Irish", "Hiberno"]),
    plain("Isle of Man", "IM", "IMN", "833"),
    keyed("Israel", "IL", "ISR", "376", &["Israeli"]),
    plain("Italy", "IT", "ITA", "380"),
    plain("Jamaica", "JM", "JAM", "388"),
    plain("Japan", "JP", "JPN", "392"),
    keyed("Jordan", "JO", "JOR", "400", &["Jordanian"]),
    plain("Kazakhstan", "KZ", "KAZ", "398"),
    keyed("Kenya", "KE", "KEN", "404", &["Kenyan"]),
    plain("Kiribati", "KI", "KIR", "296"),
    keyed("North Korea", "KP", "PRK", "408", &["North Korean", "Dprk"]),
    keyed("South Korea", "KR", "KOR", "410", &["South Korean"]),
    keyed("Kuwait", "KW", "KWT", "414", &["Kuwaiti"]),
    plain("Kyrgyzstan", "KG", "KGZ", "417"),
    keyed("Laos", "LA", "LAO", "418", &["Laotian"]),
    plain("Latvia", "LV", "LVA", "428"),
    keyed("Lebanon", "LB", "LBN", "422", &["Lebanese", "Beirut"]),
    plain("Lesotho", "LS", "LSO", "426"),
    plain("Liberia", "LR", "LBR", "430"),
    keyed("Libya", "LY", "LBY", "434", &["Libyan", "Tripoli"]),
    plain("Liechtenstein", "LI", "LIE", "438"),
    plain("Lithuania", "LT", "LTU", "440"),
    plain("Luxembourg", "LU", "LUX", "442"),
    keyed("Macao", "MO", "MAC", "446", &["Macau", "Aomen"]),
    plain("Macedonia, the former Yugoslav Republic of", "MK", "MKD", "807"),
    plain("Madagascar", "MG", "MDG", "450"),
    plain("Malawi", "MW", "MWI", "454"),
    keyed("Malaysia", "MY", "MYS", "458", &["Malaysian", "Malaysien"]),
    plain("Maldives", "MV", "MDV", "462"),
    plain("Mali", "ML", "MLI", "466"),
    keyed("Malta", "MT", "MLT", "470", &["Maltese"]),
    plain("Mauritania", "MR", "MRT", "478"),
    plain("Mauritius", "MU", "MUS", "480"),
    keyed("Mexico", "MX", "MEX", "484", &["Mexican"]),
    plain("Micronesia, Federated States of", "FM", "FSM", "583"),
    keyed("Moldova, Republic of", "MD", "MDA", "498", &["Moldovan"]),
    plain("Monaco", "MC", "MCO", "492"),
    plain("Mongolia", "MN", "MNG", "496"),
    plain("Montenegro", "ME", "MNE", "499"),
    keyed("Morocco", "MA", "MAR", "504", &["Moroccan"]),
    plain("Mozambique", "MZ", "MOZ", "508"),
    plain("Myanmar", "MM", "MMR", "104"),
    keyed("Namibia", "NA", "NAM", "516", &["Namibian"]),
    plain("Nauru", "NR", "NRU", "520"),
    plain("Nepal", "NP", "NPL", "524"),
    keyed("Netherlands", "NL", "NLD", "528", &["Holland"]),
    keyed("New Zealand", "NZ", "NZL", "554", &["Kiwi", "New Zealander", "Aotearoa"]),
    keyed("Nicaragua", "NI", "NIC", "558", &["Nicaraguan"]),
    keyed("Niger", "NE", "NER", "562", &["Nigerien"]),
    keyed("Nigeria", "NG", "NGA", "566", &["Nigerian"]),
    keyed("Norway", "NO", "NOR", "578", &["Norwegian"]),
    keyed("Oman", "OM", "OMN", "512", &["Omani"]),
    plain("Pakistan", "PK", "PAK", "586"),
    plain("Palau", "PW", "PLW", "585"),
    keyed("Palestine, State of", "PS", "PSE", "275", &["Palestinian", "West Bank", "Gaza"]),
    keyed("Panama", "PA", "PAN", "591", &["Panaman"]),
    plain("Papua New Guinea", "PG", "PNG", "598"),
    keyed("Paraguay", "PY", "PRY", "600", &["Paraguayan"]),
    keyed("Peru", "PE", "PER", "604", &["Peruvian", "Lima"]),
    plain("Philippines", "PH", "PHL", "608"),
    plain("Poland", "PL", "POL", "616"),
    plain("Portugal", "PT", "PRT", "620"),
    keyed("Puerto Rico", "PR", "PRI", "630", &["Puerto Rican", "Boriqua"]),
    keyed("Qatar", "QA", "QAT", "634", &["Qatari"]),
    plain("Romania", "RO", "ROU", "642"),
    keyed("Russia", "RU", "RUS", "643", &["Russian"]),
    keyed("Rwanda", "RW", "RWA", "646", &["Rwandan"]),
    plain("Samoa", "WS", "WSM", "882"),
    plain("San Marino", "SM", "SMR", "674"),
    plain("Sao Tome and Principe", "ST", "STP", "678"),
    keyed("Saudi Arbia", "SA", "SAU", "682", &["Saudi", "Riyadh", "Jeddah", "Saudia"]),
    plain("Senegal", "SN", "SEN", "686"),
    plain("Serbia", "RS", "SRB", "688"),
    plain("Seychelles", "SC", "SYC", "690"),
    plain("Sierra Leone", "SL", "SLE", "694"),
    keyed("Singapore", "SG", "SGP", "702", &["Singaporean"]),
    plain("Slovakia", "SK", "SVK", "703"),
    plain("Slovenia", "SI", "SVN", "705"),
    keyed("Somalia", "SO", "SOM", "706", &["Somali", "Mogadishu"]),
    plain("South Africa", "ZA", "ZAF", "710"),
    plain("South Sudan", "SS", "SSD", "728"),
    plain("Spain", "ES", "ESP", "724"),
    keyed("Sri Lanka", "LK", "LKA", "144", &["Ceylon"]),
    keyed("Sudan", "SD", "SDN", "729", &["Sudanese"]),
    keyed("Suriname", "SR", "SUR", "740", &["Surinamese"]),
    plain("Swaziland", "SZ", "SWZ", "748"),
    keyed("Sweden", "SE", "SWE", "752", &["Swedish", "Svedish"]),
    keyed("Switzerland", "CH", "CHE", "756", &["Swiss", "Schweiz"]),
    keyed("Syria", "SY", "SYR", "760", &["Syrian", "Levant", "Al-sham"]),
    keyed("Taiwan, Province of China", "TW", "TWN", "158", &["Taiwanese", "Taipei"]),
    plain("Tajikistan", "TJ", "TJK", "762"),
    keyed("Tanzania, United Republic of", "TZ", "TZA", "834", &["Tanzanian"]),
    plain("Thailand", "TH", "THA", "764"),
    keyed("Timor-Leste", "TL", "TLS", "626", &["East Timor"]),
    plain("Togo", "TG", "TGO", "768"),
    plain("Tokelau", "TK", "TKL", "772"),
    plain("Tonga", "TO", "TON", "776"),
    plain("Trinidad and Tobago", "TT", "TTO", "780"),
    keyed("Tunisia", "TN", "TUN", "788", &["Tunisian"]),
    plain("Turkey", "TR", "TUR", "792"),
    plain("Turkmenistan", "TM", "TKM", "795"),
    plain("Tuvalu", "TV", "TUV", "798"),
    keyed("Uganda", "UG", "UGA", "800", &["Ugandan"]),
    keyed("Ukraine", "UA", "UKR", "804", &["Ukrainian"]),
    keyed("United Arb Emirates", "AE", "ARE", "784", &["Dubai", "Abu Dhabi"]),
    keyed("United Kingdom", "GB", "GBR", "826", &["British", "England", "London"]),
    keyed("United Kingdom", "UK", "UKE", "826", &["British", "England", "London"]),
    keyed("United States", "US", "USA", "840", &["America", "Amerikaner", "American"]),
    keyed("Uruguay", "UY", "URY", "858", &["Uruguayan", "Montevideo"]),
    plain("Uzbekistan", "UZ", "UZB", "860"),
    plain("Vanuatu", "VU", "VUT", "548"),
    keyed("Venezuela", "VE", "VEN", "862", &["Venezuelan"]),
    keyed("Vietnam", "VN", "VNM", "704", &["Viet Nam"]),
    keyed("Kosovo", "XK", "XKK", "999", &["Kosovar"]),
    keyed("Yemen", "YE", "YEM", "887", &["Yemeni", "Sanaa"]),
    keyed("Zambia", "ZM", "ZMB", "894", &["Zambian"]),
    plain("Zimbabwe", "ZW", "ZWE", "716"),
];

// ─── Regional Variety Codes ─────────────────────────────────────────

/// `language-COUNTRY` pairs that have their own ISO 639-3 code. A
/// detected pair outside this table stays a plain regional tag.
pub(crate) const REGIONAL_CODES: &[(&str, &str)] = &[
    ("ar-CY", "acy"),
    ("ar-DZ", "arq"),
    ("ar-BH", "abv"),
    ("ar-TD", "shu"),
    ("ar-EG", "arz"),
    ("ar-KW", "afb"),
    ("ar-IQ", "acm"),
    ("ar-AE", "afb"),
    ("ar-LB", "apc"),
    ("ar-SY", "apc"),
    ("ar-LY", "ayl"),
    ("ar-SA", "acw"),
    ("ar-OM", "acx"),
    ("ar-IL", "ajp"),
    ("ar-PS", "ajp"),
    ("ar-JO", "ajp"),
    ("ar-SD", "apd"),
    ("ar-TN", "aeb"),
    ("ay-PE", "ayc"),
    ("ay-CL", "ayr"),
    ("ay-BO", "ayr"),
    ("de-CH", "gsw"),
    ("fa-AF", "prs"),
    ("ff-SN", "fuc"),
    ("ff-GM", "fuc"),
    ("ff-MR", "fuc"),
    ("ff-SL", "fuf"),
    ("ff-GN", "fuf"),
    ("ff-GH", "ffm"),
    ("ff-ML", "ffm"),
    ("ff-BJ", "fue"),
    ("ff-TG", "fue"),
    ("ff-BF", "fuh"),
    ("ff-NE", "fuh"),
    ("ff-NG", "fuv"),
    ("ff-CM", "fub"),
    ("ff-TD", "fub"),
    ("ff-SD", "fub"),
    ("ff-CF", "fui"),
    ("gn-BO", "gui"),
    ("hi-FJ", "hif"),
    ("om-KE", "gax"),
    ("ms-BN", "kxd"),
    ("sw-CD", "swc"),
    ("uz-AF", "uzs"),
    ("sq-XK", "aln"),
];
