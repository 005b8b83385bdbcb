//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use niqqud_core::Decomposition;
use std::io::Write;

/// Markdown formatter - one section and syllable table per word
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    show_fallbacks: bool,
    word_count: usize,
    degraded_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, show_fallbacks: bool) -> Self {
        Self {
            writer,
            show_fallbacks,
            word_count: 0,
            degraded_count: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_word(&mut self, word: &Decomposition) -> Result<()> {
        self.word_count += 1;
        if word.is_degraded() {
            self.degraded_count += 1;
        }

        writeln!(self.writer, "## {}. {}", self.word_count, word.surface_text)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- Romanization: `{}`", word.romanization)?;
        writeln!(self.writer, "- Pronunciation: /{}/", word.pronunciation())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Syllable | Letters |")?;
        writeln!(self.writer, "|----------|---------|")?;
        for syllable in word.display() {
            let label = if syllable.stressed {
                format!("**{}**", syllable.ipa())
            } else {
                syllable.ipa()
            };
            writeln!(self.writer, "| {} | {} |", label, syllable.letters.join(" "))?;
        }

        if self.show_fallbacks && word.is_degraded() {
            writeln!(self.writer)?;
            for fallback in &word.fallbacks {
                writeln!(self.writer, "> {fallback}")?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total words: {} ({} with fallbacks)*",
            self.word_count, self.degraded_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
