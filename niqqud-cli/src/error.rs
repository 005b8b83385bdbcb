//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Record file could not be parsed
    InvalidRecords { path: String, message: String },
    /// Validation found degraded words
    DegradedWords { degraded: usize, total: usize },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InvalidRecords { path, message } => {
                write!(f, "Invalid records in {path}: {message}")
            }
            CliError::DegradedWords { degraded, total } => {
                write!(f, "{degraded} of {total} words needed fallbacks")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("words.json".to_string());
        assert_eq!(error.to_string(), "File not found: words.json");
    }

    #[test]
    fn test_invalid_records_display() {
        let error = CliError::InvalidRecords {
            path: "words.jsonl".to_string(),
            message: "line 3: expected value".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid records in words.jsonl: line 3: expected value"
        );
    }

    #[test]
    fn test_degraded_words_display() {
        let error = CliError::DegradedWords {
            degraded: 2,
            total: 10,
        };
        assert_eq!(error.to_string(), "2 of 10 words needed fallbacks");
    }

    #[test]
    fn test_error_converts_to_anyhow() {
        let failure: CliResult<()> = Err(CliError::ConfigError("bad".to_string()).into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert_eq!(err.to_string(), "Configuration error: bad");
    }

    #[test]
    fn test_error_with_hebrew_path() {
        let error = CliError::FileNotFound("מילים/שורשים.json".to_string());
        assert_eq!(error.to_string(), "File not found: מילים/שורשים.json");
    }
}
