//! Runtime tables for script rules
//!
//! Built once from configuration; lookups never mutate.

pub mod prefix;
pub mod romanization;

pub use prefix::{PrefixRule, PrefixRules};
pub use romanization::RomanizationTable;
