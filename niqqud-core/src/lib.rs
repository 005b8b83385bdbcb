//! Phonological decomposition of pointed Hebrew words
//!
//! This crate breaks a vocalized Hebrew word into the pieces a flashcard
//! renders: its consonant units (letters plus identity-bearing marks), a
//! romanization, the bare word with any attached prefix particle removed,
//! the syllables of its IPA pronunciation, and a grouping of letters under
//! those syllables.
//!
//! # Architecture
//!
//! - **Script layer**: romanization and prefix tables loaded from TOML
//! - **Domain layer**: pure pipeline stages (extract, romanize, isolate,
//!   segment, align)
//! - **API layer**: a single decomposer over those stages, with batch and
//!   record helpers
//!
//! # Example
//!
//! ```rust
//! use niqqud_core::{HebrewWord, WordDecomposer};
//!
//! let decomposer = WordDecomposer::new().unwrap();
//!
//! // בְּרֵאשִׁית with its attached "in" prefix
//! let word = HebrewWord::new("בְּרֵאשִׁית", "bəreˈʃit").combined_form(true);
//! let result = decomposer.decompose(&word);
//!
//! let display = result.display();
//! assert_eq!(display.len(), 2);
//! assert_eq!(display[0].syllable_text, "re");
//! assert_eq!(display[1].letters.len(), 3);
//! assert!(display[1].stressed);
//! ```

pub mod api;
pub mod domain;
pub mod error;
pub mod script;
pub mod types;

pub use api::{
    parse_records, Config, ConfigBuilder, Decomposition, DisplaySyllable, Error as ApiError,
    RuleSource, WordDecomposer, WordRecord,
};
pub use domain::{
    ConsonantExtractor, Fallback, IsolatedRoot, LetterSyllableAligner, PrefixOutcome, Romanizer,
    RootField, RootIsolator, SyllableSegmenter,
};
pub use error::ConfigError;
pub use script::{get_rules, list_available_scripts, ScriptConfig, ScriptRules};
pub use types::{ConsonantSequence, ConsonantUnit, HebrewWord, LetterGroup, Syllable};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stages_compose() {
        let rules = get_rules("he").unwrap();
        let extractor = ConsonantExtractor::new();
        let word = HebrewWord::new("בָּרָא", "baˈra");

        let isolated = RootIsolator::new(rules.prefixes(), &extractor).isolate(&word);
        let syllables = SyllableSegmenter::new().segment(&isolated.pronunciation);
        let groups = LetterSyllableAligner::new().align(&isolated.letters, &syllables);

        let letters: ConsonantSequence = groups
            .iter()
            .flat_map(|g| g.units.iter().copied())
            .collect();
        assert_eq!(letters, extractor.extract("בָּרָא"));
        assert_eq!(
            Romanizer::new(rules.romanization()).romanize(&letters),
            "b-r-ʾ"
        );
    }

    #[test]
    fn test_public_exports() {
        let _config: Config = Config::default();
        let _source = RuleSource::default();
        assert_eq!(list_available_scripts(), vec!["he"]);
    }
}
