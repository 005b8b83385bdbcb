//! Decompose command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use super::{file_name, init_logging, EngineArgs};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, FormatOptions, OutputFormat};
use crate::progress::ProgressReporter;

/// Arguments for the decompose command
#[derive(Debug, Args)]
pub struct DecomposeArgs {
    /// Record files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub engine: EngineArgs,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl DecomposeArgs {
    /// Execute the decompose command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting word decomposition");
        log::debug!("Arguments: {:?}", self);

        let config = self.engine.load_config()?;
        let decomposer = self.engine.build_decomposer(&config)?;
        let format = resolve_format(self.format, &config)?;

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} files to process", files.len());

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            )),
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };
        let options = FormatOptions {
            pretty_json: config.output.pretty_json,
            show_fallbacks: config.output.show_fallbacks,
        };
        let mut formatter = create_formatter(format, writer, options);

        let mut progress = ProgressReporter::new(self.quiet || self.output.is_none());
        progress.init_files(files.len() as u64);

        for path in &files {
            let records = FileReader::read_records(path)?;
            let results = decomposer.decompose_records(&records);

            let degraded = results.iter().filter(|r| r.is_degraded()).count();
            if degraded > 0 {
                log::warn!(
                    "{}: {} of {} words needed fallbacks",
                    path.display(),
                    degraded,
                    results.len()
                );
            }

            for result in &results {
                formatter.format_word(result)?;
            }
            progress.file_completed(&file_name(path), results.len());
        }

        formatter.finish()?;
        progress.finish();

        log::info!(
            "Decomposed {} words from {} files",
            progress.words(),
            files.len()
        );
        Ok(())
    }
}

/// Flag first, then the configured default format
pub(crate) fn resolve_format(flag: Option<OutputFormat>, config: &CliConfig) -> Result<OutputFormat> {
    match flag {
        Some(format) => Ok(format),
        None => OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                config.output.default_format
            ))
            .into()
        }),
    }
}
