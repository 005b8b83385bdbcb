//! Configuration structures and validation
//!
//! This module defines the TOML schema for script rules.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{is_combining_point, is_consonant, ConsonantUnit, DAGESH, SHIN_DOT, SIN_DOT};

/// Root script configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub marks: Marks,
    pub romanization: Romanization,
    #[serde(default)]
    pub prefixes: Vec<PrefixRuleConfig>,
}

/// Script metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Marks that stay attached to a consonant unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marks {
    pub preserved: Vec<char>,
}

impl Default for Marks {
    fn default() -> Self {
        Self {
            preserved: vec![DAGESH, SHIN_DOT, SIN_DOT],
        }
    }
}

/// Romanization table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Romanization {
    #[serde(default = "default_separator")]
    pub separator: String,
    pub table: BTreeMap<String, String>,
}

fn default_separator() -> String {
    "-".to_string()
}

/// One attached-prefix rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefixRuleConfig {
    pub letter: String,
    #[serde(default)]
    pub name: String,
    pub patterns: Vec<String>,
}

impl ScriptConfig {
    /// Parse a TOML document
    pub fn from_toml_str(source_name: &str, toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.metadata.code.trim().is_empty() {
            return Err(ConfigError::InvalidCode(self.metadata.code.clone()));
        }

        if let Some(mark) = self
            .marks
            .preserved
            .iter()
            .find(|m| !is_combining_point(**m))
        {
            return Err(ConfigError::InvalidMark(*mark as u32));
        }

        if self.romanization.table.is_empty() {
            return Err(ConfigError::EmptyRomanizationTable);
        }

        if let Some(key) = self
            .romanization
            .table
            .keys()
            .find(|k| ConsonantUnit::parse(k).is_none())
        {
            return Err(ConfigError::InvalidRomanizationKey(key.clone()));
        }

        let mut seen = HashSet::new();
        for rule in &self.prefixes {
            let letter = rule.letter()?;
            if !seen.insert(letter) {
                return Err(ConfigError::DuplicatePrefixLetter(letter));
            }
            if rule.patterns.is_empty() {
                return Err(ConfigError::EmptyPrefixPatterns(letter));
            }
        }

        Ok(())
    }
}

impl PrefixRuleConfig {
    /// The prefix letter as a single consonant
    pub(crate) fn letter(&self) -> Result<char, ConfigError> {
        let mut chars = self.letter.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if is_consonant(ch) => Ok(ch),
            _ => Err(ConfigError::InvalidPrefixLetter(self.letter.clone())),
        }
    }
}
