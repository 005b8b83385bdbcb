//! Syllable segmentation of IPA pronunciations
//!
//! The source pronunciations mark only primary stress, so the stress marker
//! is the one reliable boundary: everything before the first `ˈ` is the
//! unstressed syllable, everything from it onward the stressed one. Words of
//! three or more syllables segment correctly only when explicit IPA breaks
//! (`.`) are present and break splitting has been switched on.

use crate::types::{Syllable, STRESS_MARK, SYLLABLE_BREAK};

/// IPA secondary stress marker
const SECONDARY_STRESS_MARK: char = '\u{02CC}';

/// Splits a pronunciation into ordered syllables
#[derive(Debug, Clone, Copy)]
pub struct SyllableSegmenter {
    explicit_breaks: bool,
}

impl Default for SyllableSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyllableSegmenter {
    /// Segmenter that splits on the first stress marker only
    pub fn new() -> Self {
        Self::stress_only()
    }

    pub fn stress_only() -> Self {
        Self {
            explicit_breaks: false,
        }
    }

    /// Segmenter that also splits on explicit `.` / `ˌ` breaks
    pub fn with_breaks() -> Self {
        Self {
            explicit_breaks: true,
        }
    }

    /// Enable or disable explicit `.` / `ˌ` breaks
    pub fn with_explicit_breaks(mut self, enabled: bool) -> Self {
        self.explicit_breaks = enabled;
        self
    }

    pub fn explicit_breaks(&self) -> bool {
        self.explicit_breaks
    }

    /// True when the pronunciation carries a primary stress marker
    pub fn has_stress_mark(pronunciation: &str) -> bool {
        pronunciation.contains(STRESS_MARK)
    }

    /// Segment a pronunciation into ordered syllables.
    ///
    /// Exactly one syllable is stressed. Without break splitting the text
    /// before the first `ˈ` becomes the unstressed syllable and the rest,
    /// with any later `ˈ` removed, the stressed one; a pronunciation without
    /// `ˈ` is a single stressed syllable. An empty unstressed part (leading
    /// `ˈ`, as left behind by prefix stripping) produces no syllable, so
    /// `"ˈbajit"` yields just `["bajit"]`. Never returns an empty list: an
    /// empty pronunciation yields one empty stressed syllable.
    pub fn segment(&self, pronunciation: &str) -> Vec<Syllable> {
        if self.explicit_breaks {
            segment_at_breaks(pronunciation)
        } else {
            segment_at_stress(pronunciation)
        }
    }
}

fn segment_at_stress(pronunciation: &str) -> Vec<Syllable> {
    let Some((unstressed, rest)) = pronunciation.split_once(STRESS_MARK) else {
        return vec![Syllable::new(pronunciation, true)];
    };

    let mut syllables = Vec::with_capacity(2);
    if !unstressed.is_empty() {
        syllables.push(Syllable::new(unstressed, false));
    }
    // Later markers are dropped from the text
    syllables.push(Syllable::new(rest, true));
    syllables
}

/// Splits at every `.` and `ˌ` as well as at `ˈ`. Only the first `ˈ`
/// carries stress; later ones act as plain breaks.
fn segment_at_breaks(pronunciation: &str) -> Vec<Syllable> {
    let mut syllables = Vec::new();
    let mut current = String::new();
    let mut stressed = false;
    let mut saw_stress = false;

    for ch in pronunciation.chars() {
        match ch {
            STRESS_MARK => {
                flush(&mut syllables, &mut current, stressed);
                stressed = !saw_stress;
                saw_stress = true;
            }
            SYLLABLE_BREAK | SECONDARY_STRESS_MARK => {
                // A break right after a stress marker keeps the stress
                // pending for the syllable that follows.
                if !current.is_empty() {
                    flush(&mut syllables, &mut current, stressed);
                    stressed = false;
                }
            }
            _ => current.push(ch),
        }
    }
    flush(&mut syllables, &mut current, stressed);

    if syllables.iter().any(|s| s.stressed) {
        return syllables;
    }
    if saw_stress || syllables.is_empty() {
        // Marker with nothing after it
        syllables.push(Syllable::new("", true));
    } else if let Some(last) = syllables.last_mut() {
        // Unmarked words take ultimate stress
        last.stressed = true;
    }
    syllables
}

fn flush(syllables: &mut Vec<Syllable>, current: &mut String, stressed: bool) {
    if !current.is_empty() {
        syllables.push(Syllable::new(current, stressed));
        current.clear();
    }
}
