//! Letters and the four fixed axes they pair up on.
use serde::{Deserialize, Serialize};
use std::fmt;

/// One pole of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl Letter {
    pub const ALL: [Self; 8] = [
        Self::E,
        Self::I,
        Self::S,
        Self::N,
        Self::T,
        Self::F,
        Self::J,
        Self::P,
    ];

    /// Parse a single letter, ignoring ASCII case.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'E' => Some(Self::E),
            'I' => Some(Self::I),
            'S' => Some(Self::S),
            'N' => Some(Self::N),
            'T' => Some(Self::T),
            'F' => Some(Self::F),
            'J' => Some(Self::J),
            'P' => Some(Self::P),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::E => 'E',
            Self::I => 'I',
            Self::S => 'S',
            Self::N => 'N',
            Self::T => 'T',
            Self::F => 'F',
            Self::J => 'J',
            Self::P => 'P',
        }
    }

    /// Axis this letter belongs to.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::E | Self::I => Axis::EI,
            Self::S | Self::N => Axis::SN,
            Self::T | Self::F => Axis::TF,
            Self::J | Self::P => Axis::JP,
        }
    }

    /// The other pole on the same axis.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::E => Self::I,
            Self::I => Self::E,
            Self::S => Self::N,
            Self::N => Self::S,
            Self::T => Self::F,
            Self::F => Self::T,
            Self::J => Self::P,
            Self::P => Self::J,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The four binary dimensions, in code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    EI,
    SN,
    TF,
    JP,
}

impl Axis {
    /// Axes in the order their letters appear in a code.
    pub const ALL: [Self; 4] = [Self::EI, Self::SN, Self::TF, Self::JP];

    /// First letter of the pair; wins every tie.
    #[must_use]
    pub const fn first(self) -> Letter {
        match self {
            Self::EI => Letter::E,
            Self::SN => Letter::S,
            Self::TF => Letter::T,
            Self::JP => Letter::J,
        }
    }

    #[must_use]
    pub const fn second(self) -> Letter {
        self.first().opposite()
    }

    /// Position of this axis inside a code.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::EI => 0,
            Self::SN => 1,
            Self::TF => 2,
            Self::JP => 3,
        }
    }

    /// Pick between the two poles given their scores. Ties go to [`Axis::first`].
    #[must_use]
    pub fn pick<T: PartialOrd>(self, first_score: T, second_score: T) -> Letter {
        if second_score > first_score {
            self.second()
        } else {
            self.first()
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first(), self.second())
    }
}
