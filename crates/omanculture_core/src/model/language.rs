//! Interface language preference.

use serde::{Deserialize, Serialize};

/// Display language selected by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ar")]
    Arabic,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Arabic];

    /// Persisted two-letter code.
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Arabic => "ar",
        }
    }

    /// Resolves an exact language code (`en` or `ar`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::English),
            "ar" => Some(Self::Arabic),
            _ => None,
        }
    }

    pub fn is_arabic(self) -> bool {
        self == Self::Arabic
    }
}

#[cfg(test)]
mod tests {
    use super::Language;

    #[test]
    fn codes_resolve_exactly() {
        assert_eq!(Language::from_code("ar"), Some(Language::Arabic));
        assert_eq!(Language::from_code("en"), Some(Language::English));
        assert_eq!(Language::from_code("AR"), None);
        assert_eq!(Language::default(), Language::English);
    }
}
