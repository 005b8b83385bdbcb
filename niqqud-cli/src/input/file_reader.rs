//! Record file reading

use anyhow::{Context, Result};
use niqqud_core::{parse_records, WordRecord};
use std::fs;
use std::path::Path;

use crate::error::CliError;

/// Reads word record files (JSON array or JSON Lines)
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Read and parse the word records of a file
    pub fn read_records(path: &Path) -> Result<Vec<WordRecord>> {
        let content = Self::read_text(path)?;
        let records = parse_records(&content).map_err(|e| CliError::InvalidRecords {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        log::debug!("Read {} records from {}", records.len(), path.display());
        Ok(records)
    }
}
