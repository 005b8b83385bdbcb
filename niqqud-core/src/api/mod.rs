//! Public API for niqqud-core
//!
//! Wraps the pipeline stages behind a single decomposer so the content
//! build and any rendering layer share one entry point.

mod config;
mod error;
mod output;
mod processor;
mod record;


pub use config::{defaults, Config, ConfigBuilder, RuleSource};
pub use error::{Error, Result};
pub use output::{Decomposition, DisplaySyllable};
pub use processor::WordDecomposer;
pub use record::{parse_records, WordRecord};
