//! Decomposition pipeline stages
//!
//! Each stage is pure and stateless: the same input always produces the same
//! output, and stages can run concurrently across words without coordination.

pub mod aligner;
pub mod extractor;
pub mod fallback;
pub mod romanizer;
pub mod root_field;
pub mod root_isolator;
pub mod segmenter;

pub use aligner::LetterSyllableAligner;
pub use extractor::ConsonantExtractor;
pub use fallback::Fallback;
pub use romanizer::Romanizer;
pub use root_field::RootField;
pub use root_isolator::{IsolatedRoot, PrefixOutcome, RootIsolator};
pub use segmenter::SyllableSegmenter;
