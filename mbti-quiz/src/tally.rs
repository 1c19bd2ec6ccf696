//! Per-letter counts and majority resolution.
use crate::axis::{Axis, Letter};
use crate::code::TypologyCode;
use serde::{Deserialize, Serialize};

/// How many times each letter was seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    counts: [u32; 8],
}

// Declaration order of `Letter` is axis-major, first pole then second.
const fn slot(letter: Letter) -> usize {
    letter as usize
}

impl Tally {
    #[must_use]
    pub fn from_letters<'a>(letters: impl IntoIterator<Item = &'a Letter>) -> Self {
        let mut tally = Self::default();
        for &letter in letters {
            tally.record(letter);
        }
        tally
    }

    pub fn record(&mut self, letter: Letter) {
        let idx = slot(letter);
        self.counts[idx] = self.counts[idx].saturating_add(1);
    }

    #[must_use]
    pub const fn count(&self, letter: Letter) -> u32 {
        self.counts[slot(letter)]
    }

    /// Total answers recorded on one axis.
    #[must_use]
    pub const fn axis_total(&self, axis: Axis) -> u32 {
        self.count(axis.first()) + self.count(axis.second())
    }

    /// Majority letter on `axis`; a tie goes to the first letter of the pair.
    #[must_use]
    pub fn resolve(&self, axis: Axis) -> Letter {
        axis.pick(self.count(axis.first()), self.count(axis.second()))
    }

    /// Reduce the whole tally to a code.
    #[must_use]
    pub fn to_code(&self) -> TypologyCode {
        TypologyCode::from_axes(|axis| self.resolve(axis))
    }
}
