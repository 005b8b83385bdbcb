//! Word command implementation

use anyhow::Result;
use clap::Args;
use niqqud_core::HebrewWord;
use std::io::{self, Write};

use super::decompose::resolve_format;
use super::{init_logging, EngineArgs};
use crate::output::{create_formatter, FormatOptions, OutputFormat};

/// Arguments for the word command
#[derive(Debug, Args)]
pub struct WordArgs {
    /// Pointed surface text
    #[arg(long, value_name = "TEXT")]
    pub hebrew: String,

    /// IPA pronunciation, with ˈ before the stressed syllable
    #[arg(long, value_name = "IPA")]
    pub ipa: String,

    /// The word starts with an attached prefix particle
    #[arg(long)]
    pub combined: bool,

    /// Root field, "<letters> (<transliteration>)"
    #[arg(long, value_name = "FIELD")]
    pub root: Option<String>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub engine: EngineArgs,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl WordArgs {
    /// Execute the word command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let config = self.engine.load_config()?;
        let decomposer = self.engine.build_decomposer(&config)?;
        let format = resolve_format(self.format, &config)?;

        let result = decomposer.decompose(&self.to_word());

        let writer: Box<dyn Write> = Box::new(io::stdout().lock());
        let options = FormatOptions {
            pretty_json: config.output.pretty_json,
            show_fallbacks: config.output.show_fallbacks,
        };
        let mut formatter = create_formatter(format, writer, options);
        formatter.format_word(&result)?;
        formatter.finish()
    }

    fn to_word(&self) -> HebrewWord {
        let word = HebrewWord::new(self.hebrew.as_str(), self.ipa.as_str())
            .combined_form(self.combined);
        match &self.root {
            Some(root) => word.with_root_field(root.as_str()),
            None => word,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_word() {
        let args = WordArgs {
            hebrew: "בְּרֵאשִׁית".to_string(),
            ipa: "bəreˈʃit".to_string(),
            combined: true,
            root: Some("ר-א-ש (r-ʾ-sh)".to_string()),
            format: None,
            engine: EngineArgs::default(),
            verbose: 0,
        };

        let word = args.to_word();
        assert!(word.is_combined_form());
        assert_eq!(word.pronunciation(), "bəreˈʃit");
        assert_eq!(word.root_field(), Some("ר-א-ש (r-ʾ-sh)"));
    }
}
