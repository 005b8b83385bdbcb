//! Output types for the decomposition API

use serde::{Deserialize, Serialize};

use crate::domain::{Fallback, IsolatedRoot, RootField};
use crate::types::{restore_stress_mark, ConsonantSequence, LetterGroup, Syllable};

/// Full decomposition of one word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Decomposition {
    /// Surface text as stored
    pub surface_text: String,
    /// Every consonant of the surface text
    pub consonants: ConsonantSequence,
    /// Romanization of `consonants`
    pub romanization: String,
    /// Letters and pronunciation after prefix isolation
    pub isolated: IsolatedRoot,
    /// Parsed root field, if the record had one
    pub root: Option<RootField>,
    /// Romanization of the root field letters
    pub root_romanization: Option<String>,
    /// Syllables of the isolated pronunciation
    pub syllables: Vec<Syllable>,
    /// Isolated letters grouped by syllable
    pub groups: Vec<LetterGroup>,
    /// Fallbacks taken, in pipeline order
    pub fallbacks: Vec<Fallback>,
}

/// One syllable as the flashcard UI renders it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySyllable {
    pub syllable_text: String,
    pub stressed: bool,
    pub letters: Vec<String>,
}

impl DisplaySyllable {
    /// Syllable text as IPA, with the stress marker restored
    pub fn ipa(&self) -> String {
        restore_stress_mark(&self.syllable_text, self.stressed)
    }
}

impl Decomposition {
    /// Display structure consumed by the UI
    pub fn display(&self) -> Vec<DisplaySyllable> {
        self.groups
            .iter()
            .map(|group| DisplaySyllable {
                syllable_text: group.syllable.text.clone(),
                stressed: group.syllable.stressed,
                letters: group.letters(),
            })
            .collect()
    }

    /// Concatenation of all group letters; equals `isolated.letters`
    pub fn aligned_letters(&self) -> ConsonantSequence {
        self.groups
            .iter()
            .flat_map(|group| group.units.iter().copied())
            .collect()
    }

    /// Pronunciation the syllables were cut from
    pub fn pronunciation(&self) -> &str {
        &self.isolated.pronunciation
    }

    /// True when any fallback was taken
    pub fn is_degraded(&self) -> bool {
        !self.fallbacks.is_empty()
    }
}
