//! Runtime script rules
//!
//! Bridges the TOML configuration and the tables used by the pipeline.

use std::path::Path;

use crate::error::ConfigError;
use crate::script::config::ScriptConfig;
use crate::script::tables::{PrefixRules, RomanizationTable};

/// Compiled rules for one script
#[derive(Debug, Clone)]
pub struct ScriptRules {
    code: String,
    name: String,
    preserved_marks: Vec<char>,
    romanization: RomanizationTable,
    prefixes: PrefixRules,
}

impl ScriptRules {
    /// Create from configuration
    pub fn from_config(config: &ScriptConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let romanization = RomanizationTable::new(
            config
                .romanization
                .table
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
            config.romanization.separator.clone(),
        );
        let prefixes = PrefixRules::from_config(&config.prefixes)?;

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            preserved_marks: config.marks.preserved.clone(),
            romanization,
            prefixes,
        })
    }

    /// Create from a TOML string
    pub fn from_toml_str(source_name: &str, toml_str: &str) -> Result<Self, ConfigError> {
        let config = ScriptConfig::from_toml_str(source_name, toml_str)?;
        Self::from_config(&config)
    }

    /// Create from an external rules file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&path.display().to_string(), &content)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Marks kept attached to a consonant unit
    pub fn preserved_marks(&self) -> &[char] {
        &self.preserved_marks
    }

    pub fn romanization(&self) -> &RomanizationTable {
        &self.romanization
    }

    pub fn prefixes(&self) -> &PrefixRules {
        &self.prefixes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const RULES: &str = r#"
[metadata]
code = "test"
name = "Test Hebrew"

[romanization]
separator = "."

[romanization.table]
"ב" = "b"

[[prefixes]]
letter = "ו"
patterns = ["və"]
"#;

    #[test]
    fn test_from_toml_str() {
        let rules = ScriptRules::from_toml_str("test", RULES).unwrap();
        assert_eq!(rules.code(), "test");
        assert_eq!(rules.name(), "Test Hebrew");
        assert_eq!(rules.romanization().separator(), ".");
        assert_eq!(rules.prefixes().len(), 1);
        assert_eq!(rules.preserved_marks().len(), 3);
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{RULES}").unwrap();
        let rules = ScriptRules::from_file(file.path()).unwrap();
        assert_eq!(rules.code(), "test");
    }

    #[test]
    fn test_from_missing_file() {
        let err = ScriptRules::from_file(Path::new("/nonexistent/rules.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_invalid_pattern_surfaces() {
        let broken = RULES.replace("\"və\"", "\"(\"");
        let err = ScriptRules::from_toml_str("test", &broken).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
    }
}
