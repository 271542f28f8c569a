//! Mapping from PMS country codes to guest languages.
//!
//! A country is not a language, but it is the only hint the PMS gives us.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Language stored on a guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Dutch,
    German,
    English,
    French,
    Spanish,
    Italian,
    Portuguese,
    Danish,
    Swedish,
    Norwegian,
    Finnish,
    Polish,
    Chinese,
    Japanese,
    /// A country code was given but is not in the table.
    Unknown,
    /// The PMS sent no country code at all.
    NoCountryCode,
}

impl Language {
    /// Text form as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Dutch => "Dutch",
            Language::German => "German",
            Language::English => "English",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
            Language::Danish => "Danish",
            Language::Swedish => "Swedish",
            Language::Norwegian => "Norwegian",
            Language::Finnish => "Finnish",
            Language::Polish => "Polish",
            Language::Chinese => "Chinese",
            Language::Japanese => "Japanese",
            Language::Unknown => "Unknown",
            Language::NoCountryCode => "No country code",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Country/locale keys checked in order; the first key contained in the
/// code wins. Three-letter codes come first so `"aut"` is not read as `"au"`.
pub const COUNTRY_LANGUAGES: &[(&str, Language)] = &[
    ("nld", Language::Dutch),
    ("bel", Language::Dutch),
    ("deu", Language::German),
    ("aut", Language::German),
    ("che", Language::German),
    ("gbr", Language::English),
    ("usa", Language::English),
    ("irl", Language::English),
    ("aus", Language::English),
    ("fra", Language::French),
    ("esp", Language::Spanish),
    ("mex", Language::Spanish),
    ("ita", Language::Italian),
    ("prt", Language::Portuguese),
    ("bra", Language::Portuguese),
    ("dnk", Language::Danish),
    ("swe", Language::Swedish),
    ("nor", Language::Norwegian),
    ("fin", Language::Finnish),
    ("pol", Language::Polish),
    ("chn", Language::Chinese),
    ("jpn", Language::Japanese),
    ("nl", Language::Dutch),
    ("be", Language::Dutch),
    ("de", Language::German),
    ("at", Language::German),
    ("ch", Language::German),
    ("gb", Language::English),
    ("uk", Language::English),
    ("us", Language::English),
    ("ie", Language::English),
    ("au", Language::English),
    ("fr", Language::French),
    ("es", Language::Spanish),
    ("mx", Language::Spanish),
    ("it", Language::Italian),
    ("pt", Language::Portuguese),
    ("br", Language::Portuguese),
    ("dk", Language::Danish),
    ("se", Language::Swedish),
    ("no", Language::Norwegian),
    ("fi", Language::Finnish),
    ("pl", Language::Polish),
    ("cn", Language::Chinese),
    ("jp", Language::Japanese),
];

/// Derive a guest language from a PMS country code.
///
/// Locale codes are matched part by part, so the language in `"de-BE"` wins
/// over the region. Never fails: a missing code yields
/// [`Language::NoCountryCode`] and an unmapped one [`Language::Unknown`].
pub fn language_for_country(country: Option<&str>) -> Language {
    let code = match country.map(str::trim) {
        Some(code) if !code.is_empty() => code.to_lowercase(),
        _ => return Language::NoCountryCode,
    };

    code.split(['-', '_'])
        .filter(|part| !part.is_empty())
        .find_map(lookup)
        .unwrap_or(Language::Unknown)
}

fn lookup(part: &str) -> Option<Language> {
    COUNTRY_LANGUAGES
        .iter()
        .find(|(key, _)| part.contains(key))
        .map(|(_, language)| *language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(language_for_country(Some("de")), Language::German);
        assert_eq!(language_for_country(Some("nl")), Language::Dutch);
        assert_eq!(language_for_country(Some("GB")), Language::English);
    }

    #[test]
    fn test_locale_codes_match_by_containment() {
        assert_eq!(language_for_country(Some("nl-NL")), Language::Dutch);
        assert_eq!(language_for_country(Some("de_AT")), Language::German);
        assert_eq!(language_for_country(Some("en-US")), Language::English);
        assert_eq!(language_for_country(Some("de-BE")), Language::German);
        assert_eq!(language_for_country(Some("fr-CH")), Language::French);
    }

    #[test]
    fn test_three_letter_codes() {
        assert_eq!(language_for_country(Some("AUT")), Language::German);
        assert_eq!(language_for_country(Some("aus")), Language::English);
        assert_eq!(language_for_country(Some("NLD")), Language::Dutch);
        assert_eq!(language_for_country(Some("CHE")), Language::German);
        assert_eq!(language_for_country(Some("bra")), Language::Portuguese);
    }

    #[test]
    fn test_unknown_and_absent() {
        assert_eq!(language_for_country(Some("xx")), Language::Unknown);
        assert_eq!(language_for_country(None), Language::NoCountryCode);
        assert_eq!(language_for_country(Some("  ")), Language::NoCountryCode);
    }

    #[test]
    fn test_display() {
        assert_eq!(Language::NoCountryCode.to_string(), "No country code");
        assert_eq!(Language::Unknown.to_string(), "Unknown");
    }
}
