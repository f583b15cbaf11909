//! Display languages
//!
//! Scores are computed language-independently; the language only picks which
//! crop label a caller renders.

use serde::{Deserialize, Serialize};

/// Languages shipped with the reference deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "te")]
    Telugu,
    #[serde(rename = "hi")]
    Hindi,
}

impl Language {
    /// Parse a language code, falling back to English for anything unknown
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "te" | "telugu" => Language::Telugu,
            "hi" | "hindi" => Language::Hindi,
            _ => Language::English,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Telugu => "te",
            Language::Hindi => "hi",
        }
    }
}

/// One label per supported language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedNames {
    pub en: String,
    pub te: String,
    pub hi: String,
}

impl LocalizedNames {
    pub fn new(en: &str, te: &str, hi: &str) -> Self {
        Self {
            en: en.to_string(),
            te: te.to_string(),
            hi: hi.to_string(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::English => &self.en,
            Language::Telugu => &self.te,
            Language::Hindi => &self.hi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("te"), Language::Telugu);
        assert_eq!(Language::from_code(" HI "), Language::Hindi);
        assert_eq!(Language::from_code("en"), Language::English);
        assert_eq!(Language::from_code("fr"), Language::English);
    }

    #[test]
    fn test_localized_lookup() {
        let names = LocalizedNames::new("Rice", "వరి", "चावल");
        assert_eq!(names.get(Language::English), "Rice");
        assert_eq!(names.get(Language::Telugu), "వరి");
        assert_eq!(names.get(Language::Hindi), "चावल");
    }
}
