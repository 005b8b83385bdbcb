//! Letter-to-syllable alignment
//!
//! Distributes `N` consonant units over `K` syllables in proportion to each
//! syllable's phoneme count. This is a display heuristic for flashcards, not
//! a phonetic claim.
//!
//! Every syllable but the last receives `floor(N * count_i / total)` letters;
//! the last absorbs whatever is left. Because the first `K - 1` shares are
//! floored they can never over-claim, so concatenating the groups always
//! reproduces the input sequence exactly.

use crate::types::{ConsonantSequence, LetterGroup, Syllable};

/// Proportional letter aligner
#[derive(Debug, Clone, Copy, Default)]
pub struct LetterSyllableAligner;

impl LetterSyllableAligner {
    pub fn new() -> Self {
        Self
    }

    /// Letter count for each syllable, in order. Sums to `letters` whenever
    /// `syllables` is non-empty.
    pub fn shares(&self, letters: usize, syllables: &[Syllable]) -> Vec<usize> {
        let Some((_, leading)) = syllables.split_last() else {
            return Vec::new();
        };

        let total: usize = syllables.iter().map(|s| s.phoneme_count).sum();
        let mut shares = Vec::with_capacity(syllables.len());
        let mut assigned = 0;

        for syllable in leading {
            let share = if total == 0 {
                0
            } else {
                letters * syllable.phoneme_count / total
            };
            shares.push(share);
            assigned += share;
        }
        shares.push(letters - assigned);

        shares
    }

    /// Assign the letters of `sequence` to `syllables`.
    ///
    /// With no syllables there is nothing to attach letters to and the
    /// result is empty; the segmenter never produces that case.
    pub fn align(&self, sequence: &ConsonantSequence, syllables: &[Syllable]) -> Vec<LetterGroup> {
        let shares = self.shares(sequence.len(), syllables);
        let mut remaining = sequence.units();

        syllables
            .iter()
            .zip(shares)
            .map(|(syllable, share)| {
                let (taken, rest) = remaining.split_at(share);
                remaining = rest;
                LetterGroup {
                    syllable: syllable.clone(),
                    units: taken.to_vec(),
                }
            })
            .collect()
    }
}
