//! Script rules loader
//!
//! Manages the embedded rule sets with caching.

use std::sync::{Arc, OnceLock};

use crate::error::ConfigError;
use crate::script::runtime::ScriptRules;

macro_rules! embed_script_config {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

/// Embedded script rules, parsed on first access
static EMBEDDED: OnceLock<Result<Vec<Arc<ScriptRules>>, ConfigError>> = OnceLock::new();

fn load_embedded() -> Result<Vec<Arc<ScriptRules>>, ConfigError> {
    let embedded = [embed_script_config!("he", "../../configs/hebrew.toml")];

    embedded
        .into_iter()
        .map(|(code, toml_str)| {
            let rules = ScriptRules::from_toml_str(code, toml_str)?;
            if rules.code() != code {
                return Err(ConfigError::InvalidCode(format!(
                    "expected {code}, got {}",
                    rules.code()
                )));
            }
            Ok(Arc::new(rules))
        })
        .collect()
}

fn embedded() -> Result<&'static [Arc<ScriptRules>], ConfigError> {
    match EMBEDDED.get_or_init(load_embedded) {
        Ok(rules) => Ok(rules.as_slice()),
        Err(e) => Err(e.clone()),
    }
}

/// Load script rules by code (`"he"` or `"hebrew"`)
pub fn get_rules(code: &str) -> Result<Arc<ScriptRules>, ConfigError> {
    let wanted = code.to_lowercase();
    embedded()?
        .iter()
        .find(|r| r.code() == wanted || r.name().to_lowercase() == wanted)
        .cloned()
        .ok_or_else(|| ConfigError::UnsupportedScript(code.to_string()))
}

/// Codes of all embedded scripts
pub fn list_available_scripts() -> Vec<&'static str> {
    match embedded() {
        Ok(rules) => rules.iter().map(|r| r.code()).collect(),
        Err(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_rules_hebrew() {
        let rules = get_rules("he").expect("Hebrew rules should exist");
        assert_eq!(rules.code(), "he");
        assert_eq!(rules.name(), "Hebrew");
        assert_eq!(rules.prefixes().len(), 6);
    }

    #[test]
    fn test_get_rules_by_name() {
        let by_code = get_rules("he").unwrap();
        let by_name = get_rules("Hebrew").unwrap();
        assert!(Arc::ptr_eq(&by_code, &by_name));
    }

    #[test]
    fn test_get_rules_unsupported() {
        match get_rules("nonexistent") {
            Err(ConfigError::UnsupportedScript(code)) => assert_eq!(code, "nonexistent"),
            other => panic!("Expected UnsupportedScript error, got {other:?}"),
        }
    }

    #[test]
    fn test_list_available_scripts() {
        assert_eq!(list_available_scripts(), vec!["he"]);
    }

    #[test]
    fn test_embedded_table_covers_alphabet() {
        use crate::types::{ConsonantUnit, CONSONANT_RANGE};

        let rules = get_rules("he").unwrap();
        for letter in CONSONANT_RANGE {
            assert!(
                rules.romanization().contains(&ConsonantUnit::bare(letter)),
                "missing romanization for {letter}"
            );
        }
    }
}
