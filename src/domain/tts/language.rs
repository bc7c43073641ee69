use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Language codes supported by the synthesis endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh-tw")]
    ChineseTraditional,
    #[serde(rename = "zh-cn")]
    ChineseSimplified,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
}

/// Every supported language, in the order shown to the user
pub const SUPPORTED_LANGUAGES: [Language; 8] = [
    Language::English,
    Language::ChineseTraditional,
    Language::ChineseSimplified,
    Language::Japanese,
    Language::Korean,
    Language::Spanish,
    Language::French,
    Language::German,
];

impl Language {
    /// Get the language code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::ChineseTraditional => "zh-tw",
            Language::ChineseSimplified => "zh-cn",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
        }
    }

    /// Resolve a code to a member of the supported set
    pub fn from_code(code: &str) -> Option<Self> {
        SUPPORTED_LANGUAGES
            .into_iter()
            .find(|language| language.as_str() == code)
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| {
            let codes: Vec<&str> = SUPPORTED_LANGUAGES.iter().map(|l| l.as_str()).collect();
            format!("unsupported language code '{s}' (supported: {})", codes.join(", "))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_round_trips_every_supported_code() {
        for language in SUPPORTED_LANGUAGES {
            assert_eq!(Language::from_code(language.as_str()), Some(language));
        }
    }

    #[test]
    fn test_from_code_rejects_unknown_codes() {
        assert_eq!(Language::from_code("xx"), None);
        assert_eq!(Language::from_code("EN"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn test_from_str_lists_supported_codes_on_failure() {
        let err = "pt".parse::<Language>().unwrap_err();
        assert!(err.contains("unsupported language code 'pt'"));
        assert!(err.contains("zh-tw"));
    }
}
