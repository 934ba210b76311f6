//! Line values produced by the three-coin toss.
//!
//! Each coin lands 0 or 1. The sum of three coins selects the line:
//! 0 is old yin (6), 1 young yang (7), 2 young yin (8), 3 old yang (9).
//! Old lines are "changing" and flip polarity in the relating hexagram.

use serde::{Deserialize, Serialize};

use crate::error::{IchingError, IchingResult};
use crate::rng::Lcg48;

/// Number of coins tossed per line.
pub const COINS_PER_LINE: usize = 3;

/// One line of a hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum LineValue {
    /// Broken line that changes to solid.
    OldYin = 6,
    /// Stable solid line.
    YoungYang = 7,
    /// Stable broken line.
    YoungYin = 8,
    /// Solid line that changes to broken.
    OldYang = 9,
}

impl LineValue {
    /// All four values in numeric order.
    pub const ALL: [Self; 4] = [Self::OldYin, Self::YoungYang, Self::YoungYin, Self::OldYang];

    /// Map a coin sum to a line. Sums outside 0..=3 fall back to young yang.
    pub fn from_coin_sum(sum: u8) -> Self {
        match sum {
            0 => Self::OldYin,
            1 => Self::YoungYang,
            2 => Self::YoungYin,
            3 => Self::OldYang,
            _ => Self::YoungYang,
        }
    }

    /// Toss three coins from `rng` and map their sum.
    pub fn toss(rng: &mut Lcg48) -> Self {
        let sum: u8 = (0..COINS_PER_LINE).map(|_| rng.next_coin()).sum();
        Self::from_coin_sum(sum)
    }

    /// The traditional numeric value (6, 7, 8 or 9).
    pub fn value(self) -> u8 {
        self as u8
    }

    /// True for solid lines (7 and 9).
    pub fn is_yang(self) -> bool {
        matches!(self, Self::YoungYang | Self::OldYang)
    }

    /// True for old lines (6 and 9), which are marked and flip.
    pub fn is_changing(self) -> bool {
        matches!(self, Self::OldYin | Self::OldYang)
    }

    /// The line after the change: old lines flip to the young line of the
    /// opposite polarity (6 to 7, 9 to 8), young lines stay.
    pub fn changed(self) -> Self {
        match self {
            Self::OldYin => Self::YoungYang,
            Self::OldYang => Self::YoungYin,
            young => young,
        }
    }

    /// Probability of drawing this value from three fair coins.
    pub fn probability(self) -> f64 {
        match self {
            Self::OldYin | Self::OldYang => 1.0 / 8.0,
            Self::YoungYang | Self::YoungYin => 3.0 / 8.0,
        }
    }
}

impl TryFrom<u8> for LineValue {
    type Error = IchingError;

    fn try_from(value: u8) -> IchingResult<Self> {
        match value {
            6 => Ok(Self::OldYin),
            7 => Ok(Self::YoungYang),
            8 => Ok(Self::YoungYin),
            9 => Ok(Self::OldYang),
            other => Err(IchingError::InvalidLineValue(other)),
        }
    }
}

impl From<LineValue> for u8 {
    fn from(line: LineValue) -> Self {
        line.value()
    }
}

impl std::fmt::Display for LineValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OldYin => write!(f, "old yin"),
            Self::YoungYang => write!(f, "young yang"),
            Self::YoungYin => write!(f, "young yin"),
            Self::OldYang => write!(f, "old yang"),
        }
    }
}
