//! Consonant extraction
//!
//! Strips vowel points and cantillation from Hebrew text while keeping the
//! marks that decide letter identity (shin dot, sin dot) or stop value
//! (dagesh) attached to their consonant.

use std::iter::Peekable;
use std::str::Chars;

use crate::types::{
    is_combining_point, is_consonant, ConsonantSequence, ConsonantUnit, DAGESH, SHIN_DOT,
    SIN_DOT,
};

/// Extracts ordered consonant units from pointed text
#[derive(Debug, Clone)]
pub struct ConsonantExtractor {
    preserved: Vec<char>,
}

impl Default for ConsonantExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsonantExtractor {
    /// Extractor preserving dagesh, shin dot and sin dot
    pub fn new() -> Self {
        Self::with_marks(vec![DAGESH, SHIN_DOT, SIN_DOT])
    }

    /// Extractor preserving a custom mark set
    pub fn with_marks(preserved: Vec<char>) -> Self {
        Self { preserved }
    }

    /// Marks this extractor keeps
    pub fn preserved_marks(&self) -> &[char] {
        &self.preserved
    }

    /// Extract the consonant sequence of `text`.
    ///
    /// Total over any input: characters outside the consonant block are
    /// skipped, and text without consonants yields an empty sequence.
    pub fn extract(&self, text: &str) -> ConsonantSequence {
        let mut sequence = ConsonantSequence::new();
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            if is_consonant(ch) {
                let mark = self.take_mark(&mut chars);
                sequence.push(ConsonantUnit::new(ch, mark));
            }
        }

        sequence
    }

    /// Consume the combining points attached to the current letter and
    /// return the preserved one, if any.
    ///
    /// Canonically ordered text places vowels before the shin/sin dot, so
    /// the whole cluster is scanned, not just the next code point. A
    /// shin/sin dot outranks a dagesh on the same letter.
    fn take_mark(&self, chars: &mut Peekable<Chars<'_>>) -> Option<char> {
        let mut kept: Option<char> = None;

        while let Some(&next) = chars.peek() {
            if !is_combining_point(next) {
                break;
            }
            chars.next();

            if !self.preserved.contains(&next) {
                continue;
            }
            kept = match kept {
                Some(current) if mark_rank(current) >= mark_rank(next) => Some(current),
                _ => Some(next),
            };
        }

        kept
    }
}

fn mark_rank(mark: char) -> u8 {
    match mark {
        SHIN_DOT | SIN_DOT => 2,
        _ => 1,
    }
}
