//! Notes on tolerated data-quality problems
//!
//! The pipeline always returns a best-effort result. When it had to fall
//! back, it says so here so content validation can report it.

use std::fmt;

use serde::Serialize;

use crate::domain::root_isolator::PrefixOutcome;

/// A fallback the pipeline took for one word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fallback {
    /// Consonant unit missing from the romanization table, passed through
    UnknownConsonant { unit: String },
    /// Combined form whose first letter is not a prefix letter
    NotAPrefixLetter { letter: Option<char> },
    /// Prefix letter found, but no prefix pattern matched the pronunciation
    PrefixPatternMismatch { letter: char },
    /// Pronunciation has no stress marker; treated as one syllable
    MissingStressMarker,
    /// Pronunciation is empty
    EmptyPronunciation,
    /// Root field present but without letters or transliteration
    UnparsedRootField { field: String },
}

impl Fallback {
    /// Fallback implied by a prefix outcome, if any
    pub fn from_prefix_outcome(outcome: &PrefixOutcome) -> Option<Self> {
        match outcome {
            PrefixOutcome::NotAPrefixLetter { letter } => {
                Some(Fallback::NotAPrefixLetter { letter: *letter })
            }
            PrefixOutcome::PronunciationMismatch { letter, .. } => {
                Some(Fallback::PrefixPatternMismatch { letter: *letter })
            }
            PrefixOutcome::NotCombined | PrefixOutcome::Stripped { .. } => None,
        }
    }
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::UnknownConsonant { unit } => {
                write!(f, "unknown consonant '{unit}' passed through unchanged")
            }
            Fallback::NotAPrefixLetter { letter: Some(letter) } => {
                write!(f, "combined form starts with '{letter}', which is not a prefix letter")
            }
            Fallback::NotAPrefixLetter { letter: None } => {
                write!(f, "combined form has no letters")
            }
            Fallback::PrefixPatternMismatch { letter } => write!(
                f,
                "pronunciation does not start with a known pattern for prefix '{letter}'"
            ),
            Fallback::MissingStressMarker => {
                write!(f, "no stress marker; whole pronunciation is one syllable")
            }
            Fallback::EmptyPronunciation => write!(f, "pronunciation is empty"),
            Fallback::UnparsedRootField { field } => {
                write!(f, "root field '{field}' is not '<letters> (<transliteration>)'")
            }
        }
    }
}
