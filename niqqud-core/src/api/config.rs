//! Configuration API for word decomposition

use std::path::{Path, PathBuf};

use crate::api::Error;

/// Default configuration constants
pub mod defaults {
    /// Script code of the embedded rules
    pub const SCRIPT: &str = "he";

    /// Whether `.` and `ˌ` split syllables
    pub const EXPLICIT_BREAKS: bool = false;
}

/// Where script rules come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSource {
    /// Embedded rules, by script code
    Embedded(String),
    /// TOML rules file
    File(PathBuf),
}

impl Default for RuleSource {
    fn default() -> Self {
        RuleSource::Embedded(defaults::SCRIPT.to_string())
    }
}

/// Decomposition configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) rules: RuleSource,
    pub(crate) separator: Option<String>, // None = separator from the rules
    pub(crate) explicit_breaks: bool,
    pub(crate) threads: Option<usize>, // None = all available threads
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules: RuleSource::default(),
            separator: None,
            explicit_breaks: defaults::EXPLICIT_BREAKS,
            threads: None,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn rules(&self) -> &RuleSource {
        &self.rules
    }

    pub fn separator(&self) -> Option<&str> {
        self.separator.as_deref()
    }

    pub fn explicit_breaks(&self) -> bool {
        self.explicit_breaks
    }

    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if let RuleSource::Embedded(code) = &self.rules {
            if code.trim().is_empty() {
                return Err(Error::Configuration("script code must not be empty".into()));
            }
        }

        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(Error::Configuration(
                    "threads must be greater than 0".into(),
                ));
            }
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    rules: Option<RuleSource>,
    separator: Option<String>,
    explicit_breaks: Option<bool>,
    threads: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use embedded rules for a script code
    pub fn script(mut self, code: impl Into<String>) -> Self {
        self.rules = Some(RuleSource::Embedded(code.into()));
        self
    }

    /// Load rules from a TOML file
    pub fn rules_file(mut self, path: impl AsRef<Path>) -> Self {
        self.rules = Some(RuleSource::File(path.as_ref().to_path_buf()));
        self
    }

    /// Override the romanization separator
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Enable or disable explicit syllable breaks
    pub fn explicit_breaks(mut self, enabled: bool) -> Self {
        self.explicit_breaks = Some(enabled);
        self
    }

    /// Set the number of threads for batches (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(rules) = self.rules {
            config.rules = rules;
        }

        if self.separator.is_some() {
            config.separator = self.separator;
        }

        if let Some(enabled) = self.explicit_breaks {
            config.explicit_breaks = enabled;
        }

        if self.threads.is_some() {
            config.threads = self.threads;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.rules(), &RuleSource::Embedded("he".into()));
        assert_eq!(config.separator(), None);
        assert!(!config.explicit_breaks());
        assert_eq!(config.threads(), None);
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::builder()
            .rules_file("rules.toml")
            .separator("·")
            .explicit_breaks(true)
            .threads(Some(2))
            .build()
            .unwrap();
        assert_eq!(config.rules(), &RuleSource::File(PathBuf::from("rules.toml")));
        assert_eq!(config.separator(), Some("·"));
        assert!(config.explicit_breaks());
        assert_eq!(config.threads(), Some(2));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let result = Config::builder().threads(Some(0)).build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_empty_script_rejected() {
        let result = Config::builder().script("").build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
