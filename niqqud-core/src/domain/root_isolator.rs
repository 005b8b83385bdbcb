//! Attached-prefix isolation
//!
//! Removes a one-letter prefix particle (ו, ב, ל, מ, כ, ה) from both the
//! consonant sequence and the pronunciation of a combined form. Detection on
//! the letters and stripping on the IPA are best effort and may diverge
//! (assimilation can change the prefix vowel); neither side ever fails.

use serde::Serialize;

use crate::domain::extractor::ConsonantExtractor;
use crate::script::PrefixRules;
use crate::types::{ConsonantSequence, HebrewWord};

/// What happened to the prefix of a word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PrefixOutcome {
    /// Word is not a combined form; nothing was inspected
    NotCombined,
    /// Prefix letter and its IPA syllable were both removed
    Stripped {
        letter: char,
        name: String,
        ipa: String,
    },
    /// Prefix letter removed, but no pattern matched the pronunciation
    PronunciationMismatch { letter: char, name: String },
    /// Word is flagged combined but does not start with a prefix letter
    NotAPrefixLetter { letter: Option<char> },
}

impl PrefixOutcome {
    /// The prefix letter that was removed from the consonants
    pub fn removed_letter(&self) -> Option<char> {
        match self {
            PrefixOutcome::Stripped { letter, .. }
            | PrefixOutcome::PronunciationMismatch { letter, .. } => Some(*letter),
            _ => None,
        }
    }
}

/// Letters and pronunciation of the bare word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IsolatedRoot {
    pub letters: ConsonantSequence,
    pub pronunciation: String,
    pub outcome: PrefixOutcome,
}

/// Strips attached prefixes using an ordered rule table
#[derive(Debug, Clone, Copy)]
pub struct RootIsolator<'r> {
    rules: &'r PrefixRules,
    extractor: &'r ConsonantExtractor,
}

impl<'r> RootIsolator<'r> {
    pub fn new(rules: &'r PrefixRules, extractor: &'r ConsonantExtractor) -> Self {
        Self { rules, extractor }
    }

    /// Isolate the bare word. Words that are not combined forms come back
    /// with all their letters and the full pronunciation.
    pub fn isolate(&self, word: &HebrewWord) -> IsolatedRoot {
        if word.is_combined_form() {
            self.strip(word.surface_text(), word.pronunciation())
        } else {
            IsolatedRoot {
                letters: self.extractor.extract(word.surface_text()),
                pronunciation: word.pronunciation().to_string(),
                outcome: PrefixOutcome::NotCombined,
            }
        }
    }

    /// Strip the prefix of a word known to be a combined form
    pub fn strip(&self, surface_text: &str, pronunciation: &str) -> IsolatedRoot {
        let letters = self.extractor.extract(surface_text);
        let first = letters.first().map(|unit| unit.base());

        let Some(rule) = first.and_then(|letter| self.rules.rule_for(letter)) else {
            tracing::debug!(
                surface = surface_text,
                "combined form does not start with a prefix letter"
            );
            return IsolatedRoot {
                letters,
                pronunciation: pronunciation.to_string(),
                outcome: PrefixOutcome::NotAPrefixLetter { letter: first },
            };
        };

        let letters = letters.without_first();
        match rule.match_start(pronunciation) {
            Some(ipa) => IsolatedRoot {
                letters,
                pronunciation: pronunciation[ipa.len()..].to_string(),
                outcome: PrefixOutcome::Stripped {
                    letter: rule.letter(),
                    name: rule.name().to_string(),
                    ipa: ipa.to_string(),
                },
            },
            None => {
                tracing::debug!(
                    letter = %rule.letter(),
                    pronunciation,
                    "no prefix pattern matched; keeping full pronunciation"
                );
                IsolatedRoot {
                    letters,
                    pronunciation: pronunciation.to_string(),
                    outcome: PrefixOutcome::PronunciationMismatch {
                        letter: rule.letter(),
                        name: rule.name().to_string(),
                    },
                }
            }
        }
    }
}
