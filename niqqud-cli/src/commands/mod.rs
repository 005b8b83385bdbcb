//! CLI command implementations

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use niqqud_core::{Config, WordDecomposer};
use std::path::{Path, PathBuf};

use crate::config::CliConfig;

pub mod check_rules;
pub mod decompose;
pub mod generate_config;
pub mod list;
pub mod validate;
pub mod word;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decompose word record files (JSON array or JSON Lines)
    Decompose(decompose::DecomposeArgs),

    /// Decompose a single word given on the command line
    Word(word::WordArgs),

    /// Report records whose decomposition needed fallbacks
    Validate(validate::ValidateArgs),

    /// Check an external script rule file
    CheckRules(check_rules::CheckRulesArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a CLI configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List attached prefix rules
    Prefixes,

    /// List the romanization table
    Romanization,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Decompose(args) => args.execute(),
            Commands::Word(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::CheckRules(args) => args.execute(),
            Commands::List { subcommand } => list::execute(*subcommand),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Rule and engine options shared by the commands that decompose words
#[derive(Debug, Clone, Default, Args)]
pub struct EngineArgs {
    /// External script rule file (replaces the embedded Hebrew rules)
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Number of worker threads (default: all cores)
    #[arg(short = 't', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "NIQQUD_CONFIG")]
    pub config: Option<PathBuf>,
}

impl EngineArgs {
    /// CLI configuration from `--config`, or defaults
    pub fn load_config(&self) -> Result<CliConfig> {
        CliConfig::load_or_default(self.config.as_deref())
    }

    /// Build a decomposer; flags override the configuration file
    pub fn build_decomposer(&self, config: &CliConfig) -> Result<WordDecomposer> {
        let mut builder = Config::builder()
            .explicit_breaks(config.processing.explicit_breaks)
            .threads(self.threads.or(config.performance.threads()));

        builder = match self.rules.as_deref().or(config.processing.rules_file.as_deref()) {
            Some(path) => builder.rules_file(path),
            None => builder.script(config.processing.script.as_str()),
        };
        if let Some(separator) = &config.processing.separator {
            builder = builder.separator(separator.as_str());
        }

        let engine_config = builder.build().context("Invalid engine configuration")?;
        let decomposer =
            WordDecomposer::with_config(engine_config).context("Failed to load script rules")?;

        log::info!(
            "Loaded {} rules ({} prefixes, {} romanization entries)",
            decomposer.rules().name(),
            decomposer.rules().prefixes().len(),
            decomposer.rules().romanization().len()
        );
        Ok(decomposer)
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let installed =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    // A second command in the same process keeps the first logger
    if let Err(e) = installed {
        log::debug!("Logger already initialised: {e}");
    }
}

/// Display name of a path for messages
pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_default_decomposer() {
        let decomposer = EngineArgs::default()
            .build_decomposer(&CliConfig::default())
            .unwrap();
        assert_eq!(decomposer.rules().code(), "he");
        assert!(!decomposer.config().explicit_breaks());
    }

    #[test]
    fn test_config_values_reach_decomposer() {
        let mut config = CliConfig::default();
        config.processing.explicit_breaks = true;
        config.processing.separator = Some(".".to_string());
        config.performance.worker_threads = 2;

        let decomposer = EngineArgs::default().build_decomposer(&config).unwrap();
        assert!(decomposer.config().explicit_breaks());
        assert_eq!(decomposer.config().separator(), Some("."));
        assert_eq!(decomposer.config().threads(), Some(2));
    }

    #[test]
    fn test_thread_flag_overrides_config() {
        let mut config = CliConfig::default();
        config.performance.worker_threads = 2;
        let args = EngineArgs {
            threads: Some(3),
            ..EngineArgs::default()
        };

        let decomposer = args.build_decomposer(&config).unwrap();
        assert_eq!(decomposer.config().threads(), Some(3));
    }

    #[test]
    fn test_missing_rules_file() {
        let args = EngineArgs {
            rules: Some(PathBuf::from("/nonexistent/rules.toml")),
            ..EngineArgs::default()
        };
        let err = args.build_decomposer(&CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to load script rules"));
    }

    #[test]
    fn test_repeated_logging_init() {
        init_logging(0, false);
        init_logging(2, false);
        init_logging(1, true);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(Path::new("data/words.json")), "words.json");
    }
}
