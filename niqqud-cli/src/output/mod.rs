//! Output formatting module

use anyhow::Result;
use niqqud_core::Decomposition;
use std::io::Write;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output one decomposed word
    fn format_word(&mut self, word: &Decomposition) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per word followed by its syllables
    Text,
    /// JSON array of display structures
    Json,
    /// Markdown sections with a syllable table per word
    Markdown,
}

impl OutputFormat {
    /// All formats with a short description
    pub fn descriptions() -> [(&'static str, &'static str); 3] {
        [
            ("text", "Word, romanization and one line per syllable"),
            ("json", "Array of UI display structures with fallbacks"),
            ("markdown", "One section per word with a syllable table"),
        ]
    }
}

/// Formatter options shared by every format
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    pub pretty_json: bool,
    pub show_fallbacks: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            pretty_json: true,
            show_fallbacks: true,
        }
    }
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter<'w>(
    format: OutputFormat,
    writer: Box<dyn Write + 'w>,
    options: FormatOptions,
) -> Box<dyn OutputFormatter + 'w> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, options.show_fallbacks)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, options.pretty_json)),
        OutputFormat::Markdown => {
            Box::new(MarkdownFormatter::new(writer, options.show_fallbacks))
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use niqqud_core::{Decomposition, HebrewWord, WordDecomposer};

    pub fn bereshit() -> Decomposition {
        WordDecomposer::new()
            .unwrap()
            .decompose(&HebrewWord::new("בְּרֵאשִׁית", "bəreˈʃit").combined_form(true))
    }

    pub fn unstressed() -> Decomposition {
        WordDecomposer::new()
            .unwrap()
            .decompose(&HebrewWord::new("שִׁיר", "ʃiʁ"))
    }
}
