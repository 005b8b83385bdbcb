//! Word records as stored in the `words` table

use serde::{Deserialize, Serialize};

use crate::api::Error;
use crate::types::HebrewWord;

/// One row of the words table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    /// Pointed surface text
    pub hebrew: String,
    /// IPA pronunciation
    pub ipa: String,
    /// `"<letters> (<transliteration>)"`
    #[serde(default)]
    pub root: Option<String>,
    /// True when `hebrew` starts with an attached prefix particle
    #[serde(default)]
    pub is_combined_form: bool,
    #[serde(default)]
    pub meaning: Option<String>,
}

impl WordRecord {
    /// The engine's view of the record
    pub fn to_word(&self) -> HebrewWord {
        let word = HebrewWord::new(self.hebrew.clone(), self.ipa.clone())
            .combined_form(self.is_combined_form);
        match &self.root {
            Some(root) => word.with_root_field(root.clone()),
            None => word,
        }
    }
}

impl From<&WordRecord> for HebrewWord {
    fn from(record: &WordRecord) -> Self {
        record.to_word()
    }
}

/// Parse records from either a JSON array or JSON Lines.
///
/// Blank lines in JSON Lines input are skipped.
pub fn parse_records(input: &str) -> Result<Vec<WordRecord>, Error> {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).map_err(|e| Error::InvalidRecord {
            location: "input".to_string(),
            message: e.to_string(),
        });
    }

    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|e| Error::InvalidRecord {
                location: format!("line {}", index + 1),
                message: e.to_string(),
            })
        })
        .collect()
}
