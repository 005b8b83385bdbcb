//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use niqqud_core::{Decomposition, DisplaySyllable, Fallback};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs words as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    words: Vec<WordData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordData {
    pub hebrew: String,
    pub romanization: String,
    /// Pronunciation after prefix isolation
    pub pronunciation: String,
    /// Prefix letter removed from the consonants, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_romanization: Option<String>,
    pub syllables: Vec<DisplaySyllable>,
    pub fallbacks: Vec<Fallback>,
}

impl From<&Decomposition> for WordData {
    fn from(word: &Decomposition) -> Self {
        Self {
            hebrew: word.surface_text.clone(),
            romanization: word.romanization.clone(),
            pronunciation: word.pronunciation().to_string(),
            prefix: word.isolated.outcome.removed_letter(),
            root_romanization: word.root_romanization.clone(),
            syllables: word.display(),
            fallbacks: word.fallbacks.clone(),
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            words: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_word(&mut self, word: &Decomposition) -> Result<()> {
        self.words.push(WordData::from(word));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.words)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.words)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support;

    fn render(words: &[Decomposition], pretty: bool) -> serde_json::Value {
        let mut formatter = JsonFormatter::new(Vec::new(), pretty);
        for word in words {
            formatter.format_word(word).unwrap();
        }
        formatter.finish().unwrap();
        serde_json::from_slice(&formatter.writer).unwrap()
    }

    #[test]
    fn test_display_structure() {
        let json = render(&[test_support::bereshit()], true);

        assert_eq!(json[0]["hebrew"], "בְּרֵאשִׁית");
        assert_eq!(json[0]["pronunciation"], "reˈʃit");
        assert_eq!(json[0]["prefix"], "ב");
        assert_eq!(json[0]["syllables"][0]["syllableText"], "re");
        assert_eq!(json[0]["syllables"][1]["stressed"], true);
        assert_eq!(json[0]["syllables"][1]["letters"][2], "ת");
        assert_eq!(json[0]["fallbacks"], serde_json::json!([]));
    }

    #[test]
    fn test_fallbacks_are_tagged() {
        let json = render(&[test_support::unstressed()], false);
        assert_eq!(json[0]["fallbacks"][0]["kind"], "missing_stress_marker");
        assert!(json[0].get("prefix").is_none());
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(render(&[], true), serde_json::json!([]));
    }
}
