//! Academic-style romanization of consonant units

use std::borrow::Cow;

use crate::script::RomanizationTable;
use crate::types::{ConsonantSequence, ConsonantUnit};

/// Table-driven romanizer
#[derive(Debug, Clone, Copy)]
pub struct Romanizer<'r> {
    table: &'r RomanizationTable,
}

impl<'r> Romanizer<'r> {
    pub fn new(table: &'r RomanizationTable) -> Self {
        Self { table }
    }

    /// Symbol for one unit. Units missing from the table pass through
    /// unchanged.
    pub fn romanize_unit(&self, unit: &ConsonantUnit) -> Cow<'r, str> {
        match self.table.get(unit) {
            Some(symbol) => Cow::Borrowed(symbol),
            None => Cow::Owned(unit.to_string()),
        }
    }

    /// Symbols for every unit, in order
    pub fn romanize_units(&self, sequence: &ConsonantSequence) -> Vec<String> {
        sequence
            .iter()
            .map(|unit| self.romanize_unit(unit).into_owned())
            .collect()
    }

    /// Romanize a sequence, joining symbols with the table separator
    /// (`b-r-ʾ`)
    pub fn romanize(&self, sequence: &ConsonantSequence) -> String {
        self.romanize_with(sequence, self.table.separator())
    }

    /// Romanize a sequence with an explicit separator
    pub fn romanize_with(&self, sequence: &ConsonantSequence, separator: &str) -> String {
        self.romanize_units(sequence).join(separator)
    }

    /// Units of `sequence` the table does not know, in order of appearance
    pub fn unknown_units(&self, sequence: &ConsonantSequence) -> Vec<ConsonantUnit> {
        let mut unknown: Vec<ConsonantUnit> = Vec::new();
        for unit in sequence {
            if !self.table.contains(unit) && !unknown.contains(unit) {
                unknown.push(*unit);
            }
        }
        unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::get_rules;
    use crate::types::{DAGESH, SHIN_DOT, SIN_DOT};

    fn romanize(units: &[ConsonantUnit]) -> String {
        let rules = get_rules("he").unwrap();
        let romanizer = Romanizer::new(rules.romanization());
        romanizer.romanize(&units.iter().copied().collect())
    }

    #[test]
    fn test_shin_sin_distinction() {
        assert_eq!(romanize(&[ConsonantUnit::new('ש', Some(SHIN_DOT))]), "sh");
        assert_eq!(romanize(&[ConsonantUnit::new('ש', Some(SIN_DOT))]), "s");
        assert_eq!(romanize(&[ConsonantUnit::bare('ש')]), "sh");
    }

    #[test]
    fn test_gutturals_and_emphatics() {
        let units: Vec<ConsonantUnit> = "אעחטצק".chars().map(ConsonantUnit::bare).collect();
        assert_eq!(romanize(&units), "ʾ-ʿ-ḥ-ṭ-ṣ-q");
    }

    #[test]
    fn test_root_notation() {
        let bara = [
            ConsonantUnit::new('ב', Some(DAGESH)),
            ConsonantUnit::bare('ר'),
            ConsonantUnit::bare('א'),
        ];
        assert_eq!(romanize(&bara), "b-r-ʾ");
    }

    #[test]
    fn test_identity_fallback() {
        let rules = get_rules("he").unwrap();
        let romanizer = Romanizer::new(rules.romanization());
        // Dagesh on a guttural is not in the table
        let odd = ConsonantUnit::new('ע', Some(DAGESH));
        assert_eq!(romanizer.romanize_unit(&odd), "\u{05E2}\u{05BC}");

        let seq: ConsonantSequence = vec![ConsonantUnit::bare('ל'), odd, odd].into();
        assert_eq!(romanizer.romanize_with(&seq, ""), "l\u{05E2}\u{05BC}\u{05E2}\u{05BC}");
        assert_eq!(romanizer.unknown_units(&seq), vec![odd]);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(romanize(&[]), "");
    }
}
