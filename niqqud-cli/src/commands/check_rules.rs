//! Check-rules command implementation

use anyhow::Result;
use clap::Args;
use niqqud_core::ScriptRules;
use std::path::PathBuf;

/// Arguments for the check-rules command
#[derive(Debug, Args)]
pub struct CheckRulesArgs {
    /// Path to the script rule file to check
    #[arg(short, long, value_name = "FILE", required = true)]
    pub rules: PathBuf,
}

impl CheckRulesArgs {
    /// Execute the check-rules command
    pub fn execute(&self) -> Result<()> {
        println!("Checking script rules: {}", self.rules.display());

        match ScriptRules::from_file(&self.rules) {
            Ok(rules) => {
                println!("✓ Rules are valid!");
                println!("  Script code: {}", rules.code());
                println!("  Script name: {}", rules.name());
                println!("  Romanization entries: {}", rules.romanization().len());
                println!("  Prefix rules: {}", rules.prefixes().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Rules are invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn check(content: &str) -> Result<()> {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();

        CheckRulesArgs {
            rules: temp_file.path().to_path_buf(),
        }
        .execute()
    }

    #[test]
    fn test_valid_rules() {
        let result = check(
            r#"
[metadata]
code = "he-min"
name = "Minimal Hebrew"

[romanization.table]
"ב" = "v"

[[prefixes]]
letter = "ב"
patterns = ["bə"]
"#,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_invalid_prefix_pattern() {
        let result = check(
            r#"
[metadata]
code = "he"
name = "Broken"

[romanization.table]
"ב" = "b"

[[prefixes]]
letter = "ב"
patterns = ["b(ə"]
"#,
        );
        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("Validation failed"));
    }

    #[test]
    fn test_empty_code() {
        let result = check(
            r#"
[metadata]
code = ""
name = "Test"

[romanization.table]
"ב" = "b"
"#,
        );
        assert!(result.is_err());
    }
}
