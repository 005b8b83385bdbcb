//! Romanization lookup table
//!
//! Keyed by the exact unit string, so `"שׁ"`, `"שׂ"` and a bare `"ש"` are
//! three distinct entries.

use std::collections::HashMap;

use crate::types::ConsonantUnit;

/// Immutable unit-to-symbol map
#[derive(Debug, Clone)]
pub struct RomanizationTable {
    symbols: HashMap<String, String>,
    separator: String,
}

impl RomanizationTable {
    /// Build from `(unit, symbol)` pairs
    pub fn new(entries: impl IntoIterator<Item = (String, String)>, separator: String) -> Self {
        Self {
            symbols: entries.into_iter().collect(),
            separator,
        }
    }

    /// Symbol for a unit, if the table knows it
    pub fn get(&self, unit: &ConsonantUnit) -> Option<&str> {
        self.symbols.get(unit.to_string().as_str()).map(String::as_str)
    }

    /// True when the unit has an entry
    pub fn contains(&self, unit: &ConsonantUnit) -> bool {
        self.get(unit).is_some()
    }

    /// Separator placed between symbols of a romanized sequence
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// All entries, sorted by unit
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .symbols
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort();
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SHIN_DOT, SIN_DOT};

    fn table() -> RomanizationTable {
        RomanizationTable::new(
            [
                ("ש".to_string(), "sh".to_string()),
                ("\u{05E9}\u{05C1}".to_string(), "sh".to_string()),
                ("\u{05E9}\u{05C2}".to_string(), "s".to_string()),
            ],
            "-".to_string(),
        )
    }

    #[test]
    fn test_lookup_by_exact_unit() {
        let table = table();
        assert_eq!(table.get(&ConsonantUnit::bare('ש')), Some("sh"));
        assert_eq!(table.get(&ConsonantUnit::new('ש', Some(SHIN_DOT))), Some("sh"));
        assert_eq!(table.get(&ConsonantUnit::new('ש', Some(SIN_DOT))), Some("s"));
        assert_eq!(table.get(&ConsonantUnit::bare('א')), None);
        assert!(!table.contains(&ConsonantUnit::bare('ת')));
    }

    #[test]
    fn test_entries_sorted() {
        let table = table();
        assert_eq!(table.len(), 3);
        let entries = table.entries();
        assert_eq!(entries[0].0, "ש");
        assert_eq!(table.separator(), "-");
    }
}
