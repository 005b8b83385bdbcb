//! Parsing of the stored `root` field
//!
//! Records store the root as `"<letters with niqqud> (<transliteration>)"`,
//! e.g. `"בָּרָא (ba-ra)"` or `"ש-ל-ם (sh-l-m)"`.

use serde::Serialize;

use crate::domain::extractor::ConsonantExtractor;
use crate::types::ConsonantSequence;

/// A parsed root field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootField {
    /// Root letters exactly as written
    pub written: String,
    /// Consonant units of the root letters
    pub letters: ConsonantSequence,
    /// Transliteration inside the parentheses
    pub transliteration: Option<String>,
}

impl RootField {
    /// Parse a root field. Blank input gives `None`; anything else parses,
    /// with missing parentheses leaving `transliteration` empty.
    pub fn parse(field: &str, extractor: &ConsonantExtractor) -> Option<Self> {
        let field = field.trim();
        if field.is_empty() {
            return None;
        }

        let (written, transliteration) = match field.strip_suffix(')') {
            Some(body) => match body.rfind('(') {
                Some(open) => {
                    let inside = body[open + 1..].trim();
                    (
                        body[..open].trim(),
                        (!inside.is_empty()).then(|| inside.to_string()),
                    )
                }
                None => (field, None),
            },
            None => (field, None),
        };

        Some(Self {
            written: written.to_string(),
            letters: extractor.extract(written),
            transliteration,
        })
    }

    /// Letters present and a transliteration given
    pub fn is_well_formed(&self) -> bool {
        !self.letters.is_empty() && self.transliteration.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(field: &str) -> Option<RootField> {
        RootField::parse(field, &ConsonantExtractor::new())
    }

    #[test]
    fn test_parse_letters_and_transliteration() {
        let root = parse("\u{05D1}\u{05BC}\u{05B8}\u{05E8}\u{05B8}\u{05D0} (ba-ra)").unwrap();
        assert_eq!(root.written, "\u{05D1}\u{05BC}\u{05B8}\u{05E8}\u{05B8}\u{05D0}");
        assert_eq!(root.letters.len(), 3);
        assert_eq!(root.transliteration.as_deref(), Some("ba-ra"));
        assert!(root.is_well_formed());
    }

    #[test]
    fn test_parse_hyphenated_root() {
        let root = parse("ש-ל-ם (sh-l-m)").unwrap();
        assert_eq!(root.letters.to_strings(), vec!["ש", "ל", "ם"]);
        assert_eq!(root.transliteration.as_deref(), Some("sh-l-m"));
    }

    #[test]
    fn test_parse_without_parentheses() {
        let root = parse("שלם").unwrap();
        assert_eq!(root.letters.len(), 3);
        assert_eq!(root.transliteration, None);
        assert!(!root.is_well_formed());
    }

    #[test]
    fn test_parse_empty_parentheses() {
        let root = parse("שלם ()").unwrap();
        assert_eq!(root.written, "שלם");
        assert_eq!(root.transliteration, None);
    }

    #[test]
    fn test_parse_unbalanced() {
        let root = parse("שלם sh-l-m)").unwrap();
        assert_eq!(root.written, "שלם sh-l-m)");
        assert_eq!(root.transliteration, None);
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
    }

    #[test]
    fn test_parse_transliteration_only() {
        let root = parse("(sh-l-m)").unwrap();
        assert!(root.letters.is_empty());
        assert!(!root.is_well_formed());
    }
}
