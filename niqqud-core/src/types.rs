//! Value types shared by every stage of the decomposition pipeline
//!
//! Everything here is derived from a stored word record and recomputed on
//! each read; none of it is persisted.

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::RangeInclusive;

/// Hebrew consonant block (alef through tav, final forms included)
pub const CONSONANT_RANGE: RangeInclusive<char> = '\u{05D0}'..='\u{05EA}';

/// Dagesh / mappiq
pub const DAGESH: char = '\u{05BC}';

/// Shin dot
pub const SHIN_DOT: char = '\u{05C1}';

/// Sin dot
pub const SIN_DOT: char = '\u{05C2}';

/// IPA primary stress marker, placed before the stressed syllable
pub const STRESS_MARK: char = '\u{02C8}';

/// IPA explicit syllable break
pub const SYLLABLE_BREAK: char = '.';

/// Returns true for a base Hebrew consonant
#[inline]
pub fn is_consonant(ch: char) -> bool {
    CONSONANT_RANGE.contains(&ch)
}

/// Returns true for a combining point of the Hebrew block (niqqud,
/// cantillation, dagesh, shin/sin dots).
///
/// Maqaf, paseq, sof pasuq and nun hafukha live in the same block but are
/// punctuation, so they end a letter's cluster.
#[inline]
pub fn is_combining_point(ch: char) -> bool {
    matches!(ch,
        '\u{0591}'..='\u{05BD}'
        | '\u{05BF}'
        | '\u{05C1}'..='\u{05C2}'
        | '\u{05C4}'..='\u{05C5}'
        | '\u{05C7}')
}

/// One base consonant plus at most one identity-bearing mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConsonantUnit {
    base: char,
    mark: Option<char>,
}

impl ConsonantUnit {
    /// Create a unit from a base letter and an optional mark
    pub fn new(base: char, mark: Option<char>) -> Self {
        Self { base, mark }
    }

    /// Bare letter without a mark
    pub fn bare(base: char) -> Self {
        Self { base, mark: None }
    }

    /// The base consonant
    pub fn base(&self) -> char {
        self.base
    }

    /// The preserved mark, if any
    pub fn mark(&self) -> Option<char> {
        self.mark
    }

    /// Parse a unit written as a string (`"ש"`, `"שׁ"`). Returns `None`
    /// unless the string is a consonant followed by at most one mark.
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let base = chars.next().filter(|c| is_consonant(*c))?;
        let mark = chars.next();
        if chars.next().is_some() {
            return None;
        }
        match mark {
            Some(m) if !is_combining_point(m) => None,
            _ => Some(Self { base, mark }),
        }
    }
}

impl fmt::Display for ConsonantUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;
        if let Some(mark) = self.mark {
            write!(f, "{mark}")?;
        }
        Ok(())
    }
}

impl Serialize for ConsonantUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Ordered consonant units of a word, in reading order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ConsonantSequence(Vec<ConsonantUnit>);

impl ConsonantSequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of units
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the word had no consonants at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Units as a slice
    pub fn units(&self) -> &[ConsonantUnit] {
        &self.0
    }

    /// Iterate over the units
    pub fn iter(&self) -> std::slice::Iter<'_, ConsonantUnit> {
        self.0.iter()
    }

    /// First unit
    pub fn first(&self) -> Option<&ConsonantUnit> {
        self.0.first()
    }

    /// The sequence without its first unit
    pub fn without_first(&self) -> Self {
        Self(self.0.iter().skip(1).copied().collect())
    }

    /// Each unit rendered as its own string
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    pub(crate) fn push(&mut self, unit: ConsonantUnit) {
        self.0.push(unit);
    }
}

impl fmt::Display for ConsonantSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in &self.0 {
            write!(f, "{unit}")?;
        }
        Ok(())
    }
}

impl From<Vec<ConsonantUnit>> for ConsonantSequence {
    fn from(units: Vec<ConsonantUnit>) -> Self {
        Self(units)
    }
}

impl FromIterator<ConsonantUnit> for ConsonantSequence {
    fn from_iter<I: IntoIterator<Item = ConsonantUnit>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ConsonantSequence {
    type Item = ConsonantUnit;
    type IntoIter = std::vec::IntoIter<ConsonantUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConsonantSequence {
    type Item = &'a ConsonantUnit;
    type IntoIter = std::slice::Iter<'a, ConsonantUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One syllable of a pronunciation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Syllable {
    /// Syllable text without the stress marker
    pub text: String,
    /// Whether the syllable carries primary stress
    pub stressed: bool,
    /// Character length of `text`; a weighting proxy, not a phoneme count
    pub phoneme_count: usize,
}

impl Syllable {
    /// Create a syllable, stripping any stress marker from the text
    pub fn new(text: &str, stressed: bool) -> Self {
        let text: String = text.chars().filter(|c| *c != STRESS_MARK).collect();
        let phoneme_count = text.chars().count();
        Self {
            text,
            stressed,
            phoneme_count,
        }
    }

    /// The syllable as IPA, with the stress marker restored
    pub fn ipa(&self) -> String {
        restore_stress_mark(&self.text, self.stressed)
    }
}

pub(crate) fn restore_stress_mark(text: &str, stressed: bool) -> String {
    if stressed {
        format!("{STRESS_MARK}{text}")
    } else {
        text.to_string()
    }
}

/// A syllable together with the letters shown under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterGroup {
    pub syllable: Syllable,
    pub units: Vec<ConsonantUnit>,
}

impl LetterGroup {
    /// Letters of the group as display strings
    pub fn letters(&self) -> Vec<String> {
        self.units.iter().map(ToString::to_string).collect()
    }
}

/// A pointed Hebrew word as stored in the words table
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HebrewWord {
    surface_text: String,
    pronunciation: String,
    root_field: Option<String>,
    is_combined_form: bool,
}

impl HebrewWord {
    /// Create a word without root field that is not a combined form
    pub fn new(surface_text: impl Into<String>, pronunciation: impl Into<String>) -> Self {
        Self {
            surface_text: surface_text.into(),
            pronunciation: pronunciation.into(),
            root_field: None,
            is_combined_form: false,
        }
    }

    /// Attach the `"<letters> (<transliteration>)"` root field
    pub fn with_root_field(mut self, root_field: impl Into<String>) -> Self {
        self.root_field = Some(root_field.into());
        self
    }

    /// Mark the word as carrying an attached prefix particle
    pub fn combined_form(mut self, is_combined_form: bool) -> Self {
        self.is_combined_form = is_combined_form;
        self
    }

    pub fn surface_text(&self) -> &str {
        &self.surface_text
    }

    pub fn pronunciation(&self) -> &str {
        &self.pronunciation
    }

    pub fn root_field(&self) -> Option<&str> {
        self.root_field.as_deref()
    }

    pub fn is_combined_form(&self) -> bool {
        self.is_combined_form
    }
}
