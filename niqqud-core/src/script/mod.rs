//! Script rules for Hebrew word decomposition
//!
//! Romanization symbols and attached-prefix patterns are data, not code:
//! they live in TOML documents embedded at build time (or loaded from a
//! file) and are compiled once into immutable lookup tables.

pub mod config;
pub(crate) mod loader;
pub mod runtime;
pub mod tables;

pub use config::ScriptConfig;
pub use loader::{get_rules, list_available_scripts};
pub use runtime::ScriptRules;
pub use tables::{PrefixRule, PrefixRules, RomanizationTable};
