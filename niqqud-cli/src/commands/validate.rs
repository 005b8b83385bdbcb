//! Validate command implementation
//!
//! Decomposes every record and reports the ones that needed fallbacks,
//! so content errors (missing stress markers, mislabelled combined forms,
//! malformed root fields) surface before they reach flashcards.

use anyhow::Result;
use clap::Args;

use super::{init_logging, EngineArgs};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Record files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    #[command(flatten)]
    pub engine: EngineArgs,

    /// Only print the summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let config = self.engine.load_config()?;
        let decomposer = self.engine.build_decomposer(&config)?;
        let files = resolve_patterns(&self.input)?;

        let mut total = 0;
        let mut degraded = 0;

        for path in &files {
            let records = FileReader::read_records(path)?;
            let results = decomposer.decompose_records(&records);
            total += results.len();

            for (index, (record, result)) in records.iter().zip(&results).enumerate() {
                if !result.is_degraded() {
                    continue;
                }
                degraded += 1;
                if self.quiet {
                    continue;
                }

                println!("{}#{} {} /{}/", path.display(), index + 1, record.hebrew, record.ipa);
                for fallback in &result.fallbacks {
                    println!("  ✗ {fallback}");
                }
            }
        }

        if degraded == 0 {
            println!("✓ All {total} words decomposed cleanly");
            Ok(())
        } else {
            println!("✗ {degraded} of {total} words needed fallbacks");
            Err(CliError::DegradedWords { degraded, total }.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn validate(content: &str) -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("words.json");
        fs::write(&input, content).unwrap();

        ValidateArgs {
            input: vec![input.display().to_string()],
            engine: EngineArgs::default(),
            quiet: true,
            verbose: 0,
        }
        .execute()
    }

    #[test]
    fn test_clean_records_pass() {
        let result = validate(
            r#"[
                {"hebrew": "בָּרָא", "ipa": "baˈra", "root": "בָּרָא (ba-ra)"},
                {"hebrew": "הַבַּיִת", "ipa": "haˈbajit", "is_combined_form": true}
            ]"#,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_degraded_records_fail() {
        let err = validate(
            r#"[
                {"hebrew": "בָּרָא", "ipa": "baˈra"},
                {"hebrew": "שִׁיר", "ipa": "ʃiʁ"},
                {"hebrew": "שָׁלוֹם", "ipa": "ʃaˈlom", "is_combined_form": true}
            ]"#,
        )
        .unwrap_err();

        match err.downcast_ref::<CliError>() {
            Some(CliError::DegradedWords { degraded, total }) => {
                assert_eq!(*degraded, 2);
                assert_eq!(*total, 3);
            }
            other => panic!("Expected DegradedWords, got {other:?}"),
        }
    }
}
