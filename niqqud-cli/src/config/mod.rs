//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Processing-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Embedded script rules to use
    pub script: String,

    /// External rule file, replacing the embedded rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules_file: Option<PathBuf>,

    /// Romanization separator, overriding the rule file's
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,

    /// Also split syllables on explicit `.` / `ˌ` breaks
    pub explicit_breaks: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            script: "he".to_string(),
            rules_file: None,
            separator: None,
            explicit_breaks: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// List fallbacks under each word
    pub show_fallbacks: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
            show_fallbacks: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl PerformanceConfig {
    /// Thread count for the decomposer, `None` meaning the global pool
    pub fn threads(&self) -> Option<usize> {
        (self.worker_threads > 0).then_some(self.worker_threads)
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!("{}: {}", path.display(), e.message())).into()
        })
    }

    /// Load a configuration file if one was given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Commented template with every option at its default
    pub fn template() -> String {
        let defaults = Self::default();
        format!(
            r#"# niqqud CLI configuration

[processing]
# Embedded script rules
script = "{script}"

# External rule file (same schema as the embedded rules)
# rules_file = "rules/hebrew.toml"

# Romanization separator; defaults to the rule file's separator
# separator = "-"

# Also split syllables on explicit IPA breaks ("ja.ha.ˈdut");
# by default only the stress marker separates syllables
explicit_breaks = {breaks}

[output]
# text, json or markdown
default_format = "{format}"
pretty_json = {pretty}
show_fallbacks = {fallbacks}

[performance]
# Number of worker threads (0 = auto)
worker_threads = {threads}
"#,
            script = defaults.processing.script,
            breaks = defaults.processing.explicit_breaks,
            format = defaults.output.default_format,
            pretty = defaults.output.pretty_json,
            fallbacks = defaults.output.show_fallbacks,
            threads = defaults.performance.worker_threads,
        )
    }
}
