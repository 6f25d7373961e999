//! Domain enums shared across the engine
//!
//! Language codes, drink types, and the canonical size ordering.

use serde::{Deserialize, Serialize};

/// UI language selected on the kiosk
///
/// Thai is the base language of the catalog feed; every other language
/// falls back to the generic English name when its own field is blank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Th,
    En,
    Zh,
    Ja,
    Ko,
    Fr,
    De,
    Es,
    Ru,
    Ms,
}

impl Language {
    /// Parse a BCP-47-ish code ("th", "en-US", "zh-TW"...), defaulting to Thai
    pub fn from_code(code: &str) -> Self {
        let primary = code
            .split(['-', '_'])
            .next()
            .unwrap_or(code)
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Self::En,
            "zh" => Self::Zh,
            "ja" => Self::Ja,
            "ko" => Self::Ko,
            "fr" => Self::Fr,
            "de" => Self::De,
            "es" => Self::Es,
            "ru" => Self::Ru,
            "ms" => Self::Ms,
            _ => Self::Th,
        }
    }

    /// Western-market languages prefer milder sweetness defaults
    pub fn is_western(&self) -> bool {
        matches!(self, Self::En | Self::Fr | Self::De | Self::Es | Self::Ru)
    }
}

/// Preparation style of a drink variant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DrinkType {
    Hot,
    Iced,
    Frappe,
}

impl DrinkType {
    /// Parse a feed type string, tolerant of casing and whitespace
    pub fn from_feed(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "hot" => Some(Self::Hot),
            "iced" | "ice" | "cold" => Some(Self::Iced),
            "frappe" | "blended" | "smoothie" => Some(Self::Frappe),
            _ => None,
        }
    }
}

/// Canonical size ordering, smallest first
pub const SIZE_ORDER: [&str; 4] = ["S", "Regular", "M", "L"];

/// Rank of a size label within [`SIZE_ORDER`].
///
/// Unknown labels compare as "not found" (-1) and therefore sort before
/// every known size, matching the source behavior.
pub fn size_rank(size: &str) -> i32 {
    SIZE_ORDER
        .iter()
        .position(|s| s.eq_ignore_ascii_case(size.trim()))
        .map(|i| i as i32)
        .unwrap_or(-1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_code_parsing() {
        assert_eq!(Language::from_code("th"), Language::Th);
        assert_eq!(Language::from_code("en-US"), Language::En);
        assert_eq!(Language::from_code("zh_TW"), Language::Zh);
        // Unknown codes fall back to the base language
        assert_eq!(Language::from_code("xx"), Language::Th);
    }

    #[test]
    fn western_language_set() {
        assert!(Language::En.is_western());
        assert!(Language::De.is_western());
        assert!(!Language::Th.is_western());
        assert!(!Language::Ja.is_western());
    }

    #[test]
    fn drink_type_from_feed() {
        assert_eq!(DrinkType::from_feed(" Hot "), Some(DrinkType::Hot));
        assert_eq!(DrinkType::from_feed("ICED"), Some(DrinkType::Iced));
        assert_eq!(DrinkType::from_feed("blended"), Some(DrinkType::Frappe));
        assert_eq!(DrinkType::from_feed("tea"), None);
    }

    #[test]
    fn size_rank_ordering() {
        assert!(size_rank("S") < size_rank("Regular"));
        assert!(size_rank("Regular") < size_rank("M"));
        assert!(size_rank("M") < size_rank("L"));
        // Unknown sizes compare as not-found, before S
        assert!(size_rank("XXL") < size_rank("S"));
        assert_eq!(size_rank("XXL"), -1);
    }
}
