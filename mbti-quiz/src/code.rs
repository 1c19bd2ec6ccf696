//! The four-letter typology code.
use crate::axis::{Axis, Letter};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

fn code_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(?i-u)^[EISNTFJP]{4}$").ok())
        .as_ref()
}

/// True when `s` is four ASCII letters from the code alphabet, in any case.
///
/// Letters are not checked against their axis position, so `"EEEE"` passes.
/// Use [`TypologyCode::from_str`] when the axis order matters.
#[must_use]
pub fn looks_like_code(s: &str) -> bool {
    code_pattern().is_some_and(|re| re.is_match(s))
}

/// One resolved letter per axis, in EI, SN, TF, JP order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypologyCode([Letter; 4]);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeParseError {
    #[error("expected four letters from EISNTFJP, got {0:?}")]
    Shape(String),
    #[error("letter {letter} cannot sit at the {axis} position")]
    AxisOrder { letter: Letter, axis: Axis },
}

impl TypologyCode {
    /// Build a code from one letter per axis.
    ///
    /// # Errors
    ///
    /// Returns [`CodeParseError::AxisOrder`] if a letter is placed on the wrong axis.
    pub fn new(letters: [Letter; 4]) -> Result<Self, CodeParseError> {
        for (axis, letter) in Axis::ALL.into_iter().zip(letters) {
            if letter.axis() != axis {
                return Err(CodeParseError::AxisOrder { letter, axis });
            }
        }
        Ok(Self(letters))
    }

    /// Build a code by asking `resolve` for each axis in order.
    pub fn from_axes(mut resolve: impl FnMut(Axis) -> Letter) -> Self {
        let mut letters = Axis::ALL.map(Axis::first);
        for axis in Axis::ALL {
            let letter = resolve(axis);
            // A resolver answering off-axis keeps the first-letter default.
            if letter.axis() == axis {
                letters[axis.index()] = letter;
            }
        }
        Self(letters)
    }

    /// All 16 codes, in binary order with first letters first.
    #[must_use]
    pub fn all() -> Vec<Self> {
        (0_u8..16)
            .map(|bits| {
                Self::from_axes(|axis| {
                    let shift = 3 - axis.index();
                    if (bits >> shift) & 1 == 0 {
                        axis.first()
                    } else {
                        axis.second()
                    }
                })
            })
            .collect()
    }

    #[must_use]
    pub const fn letters(&self) -> [Letter; 4] {
        self.0
    }

    #[must_use]
    pub const fn letter(&self, axis: Axis) -> Letter {
        self.0[axis.index()]
    }
}

impl FromStr for TypologyCode {
    type Err = CodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !looks_like_code(s) {
            return Err(CodeParseError::Shape(s.to_string()));
        }
        let mut letters = [Letter::E; 4];
        for (slot, c) in letters.iter_mut().zip(s.chars()) {
            *slot = Letter::from_char(c).ok_or_else(|| CodeParseError::Shape(s.to_string()))?;
        }
        Self::new(letters)
    }
}

impl fmt::Display for TypologyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.0 {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl Serialize for TypologyCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TypologyCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
