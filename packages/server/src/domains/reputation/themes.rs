//! Qualitative theme extraction from review text.
//!
//! Pure keyword containment against a fixed vocabulary. No stemming, no
//! fuzzy matching; a theme matches when any of its keywords appears as a
//! case-insensitive substring.

use serde::{Deserialize, Serialize};

/// A qualitative tag derived from review text, distinct from the numeric
/// rating attributes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Punctual,
    Skilled,
    Polite,
    Clean,
    Price,
}

impl Theme {
    /// All themes in canonical order.
    pub const ALL: [Theme; 5] = [
        Theme::Punctual,
        Theme::Skilled,
        Theme::Polite,
        Theme::Clean,
        Theme::Price,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Punctual => "punctual",
            Theme::Skilled => "skilled",
            Theme::Polite => "polite",
            Theme::Clean => "clean",
            Theme::Price => "price",
        }
    }

    /// Keywords whose presence in a review marks this theme.
    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Theme::Punctual => &["time", "punctual", "late", "early", "schedule"],
            Theme::Skilled => &["skill", "expert", "professional", "quality", "experienced"],
            Theme::Polite => &["polite", "rude", "behavior", "attitude", "respectful"],
            Theme::Clean => &["clean", "mess", "tidy", "organized"],
            Theme::Price => &["cheap", "expensive", "reasonable", "cost", "price", "money"],
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tag review text with every theme whose keyword list matches.
///
/// Themes are independent: a review may match zero, one, or all five.
/// Returns themes in canonical order, each at most once. Empty input
/// yields the empty set.
pub fn tag_themes(text: &str) -> Vec<Theme> {
    if text.is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    Theme::ALL
        .into_iter()
        .filter(|theme| theme.keywords().iter().any(|word| lowered.contains(word)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_expected_themes() {
        let themes = tag_themes("Came on time, very polite and reasonable price");
        assert_eq!(themes, vec![Theme::Punctual, Theme::Polite, Theme::Price]);
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        assert!(tag_themes("").is_empty());
    }

    #[test]
    fn test_no_keywords_yields_empty_set() {
        assert!(tag_themes("did the job").is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(tag_themes("VERY PROFESSIONAL"), vec![Theme::Skilled]);
    }

    #[test]
    fn test_negative_keywords_still_mark_the_theme() {
        // "late" and "rude" tag the theme; polarity is not this module's job
        let themes = tag_themes("showed up late and was rude");
        assert_eq!(themes, vec![Theme::Punctual, Theme::Polite]);
    }

    #[test]
    fn test_substring_containment_not_word_match() {
        // "overtime" contains "time" - pure substring semantics
        assert_eq!(tag_themes("charged for overtime"), vec![Theme::Punctual]);
    }

    #[test]
    fn test_all_five_themes_can_match_one_review() {
        let themes =
            tag_themes("punctual, skilled, polite, clean work at a reasonable price");
        assert_eq!(themes, Theme::ALL.to_vec());
    }

    #[test]
    fn test_theme_matched_once_despite_multiple_keywords() {
        let themes = tag_themes("cheap and reasonable cost");
        assert_eq!(themes, vec![Theme::Price]);
    }
}
