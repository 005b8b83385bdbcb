//! Rule-table errors
//!
//! Word data never produces an error: every malformed-but-tolerable input
//! has a defined fallback. Only loading and validating script rules can fail.

use thiserror::Error;

/// Errors raised while loading or validating script rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// TOML could not be parsed
    #[error("failed to parse {source_name} rules: {message}")]
    Parse {
        /// Where the rules came from (script code or file path)
        source_name: String,
        /// Parser message
        message: String,
    },

    /// Rule file could not be read
    #[error("failed to read rules file '{path}': {message}")]
    Io {
        /// The file path
        path: String,
        /// The I/O error message
        message: String,
    },

    /// No script registered under this code
    #[error("unsupported script: {0}")]
    UnsupportedScript(String),

    /// Metadata code is empty or does not match the expected code
    #[error("invalid script code: {0}")]
    InvalidCode(String),

    /// Romanization table has no entries
    #[error("romanization table is empty")]
    EmptyRomanizationTable,

    /// Romanization key is not a consonant unit
    #[error("romanization key '{0}' is not a consonant with at most one mark")]
    InvalidRomanizationKey(String),

    /// Preserved mark outside the Hebrew combining points
    #[error("preserved mark U+{0:04X} is not a Hebrew combining point")]
    InvalidMark(u32),

    /// Prefix letter is not a single Hebrew consonant
    #[error("prefix letter '{0}' is not a single Hebrew consonant")]
    InvalidPrefixLetter(String),

    /// Same prefix letter configured twice
    #[error("prefix letter '{0}' is configured more than once")]
    DuplicatePrefixLetter(char),

    /// Prefix rule without patterns
    #[error("prefix rule for '{0}' has no patterns")]
    EmptyPrefixPatterns(char),

    /// Prefix pattern is not a valid regular expression
    #[error("invalid pattern '{pattern}' for prefix '{letter}': {message}")]
    InvalidPattern {
        /// Prefix letter the pattern belongs to
        letter: char,
        /// The offending pattern
        pattern: String,
        /// Regex compiler message
        message: String,
    },
}

/// Result type for rule loading
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConfigError::UnsupportedScript("xx".into()).to_string(),
            "unsupported script: xx"
        );
        assert_eq!(
            ConfigError::InvalidMark(0x0041).to_string(),
            "preserved mark U+0041 is not a Hebrew combining point"
        );
        let err = ConfigError::InvalidPattern {
            letter: 'ב',
            pattern: "(".into(),
            message: "unclosed group".into(),
        };
        assert!(err.to_string().contains("invalid pattern '(' for prefix 'ב'"));
    }
}
