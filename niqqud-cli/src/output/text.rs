//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use niqqud_core::Decomposition;
use std::io::Write;

/// Plain text formatter
///
/// ```text
/// בְּרֵאשִׁית  b-r-ʾ-sh-y-t  reˈʃit
///   re      ר א
///   ˈʃit    שׁ י ת
/// ```
pub struct TextFormatter<W: Write> {
    writer: W,
    show_fallbacks: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, show_fallbacks: bool) -> Self {
        Self {
            writer,
            show_fallbacks,
        }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_word(&mut self, word: &Decomposition) -> Result<()> {
        writeln!(
            self.writer,
            "{}  {}  {}",
            word.surface_text,
            word.romanization,
            word.pronunciation()
        )?;

        for syllable in word.display() {
            writeln!(
                self.writer,
                "  {:<8}{}",
                syllable.ipa(),
                syllable.letters.join(" ")
            )?;
        }

        if self.show_fallbacks {
            for fallback in &word.fallbacks {
                writeln!(self.writer, "  ! {fallback}")?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
