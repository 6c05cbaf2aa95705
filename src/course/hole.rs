//! Hole numbering and per-hole layout data.

use serde::{Deserialize, Serialize};

/// Holes on a regulation course.
pub const HOLE_COUNT: usize = 18;

/// A hole number, always within 1..=18.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HoleNumber(u8);

impl HoleNumber {
    /// First hole of the round.
    pub const FIRST: HoleNumber = HoleNumber(1);
    /// Last hole of the round.
    pub const LAST: HoleNumber = HoleNumber(HOLE_COUNT as u8);

    /// Create a hole number, or `None` outside 1..=18.
    #[must_use]
    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && number as usize <= HOLE_COUNT {
            Some(Self(number))
        } else {
            None
        }
    }

    /// Hole number for a 0-based position on the card.
    ///
    /// Panics if `index >= 18`.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < HOLE_COUNT, "hole index {index} out of range");
        Self(index as u8 + 1)
    }

    /// The printed number (1..=18).
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// 0-based position on the card.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// All eighteen holes in playing order.
    pub fn all() -> impl Iterator<Item = HoleNumber> {
        (1..=HOLE_COUNT as u8).map(HoleNumber)
    }
}

impl TryFrom<u8> for HoleNumber {
    type Error = crate::core::ScorecardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        HoleNumber::new(value).ok_or(crate::core::ScorecardError::InvalidHole(value))
    }
}

impl From<HoleNumber> for u8 {
    fn from(hole: HoleNumber) -> Self {
        hole.0
    }
}

impl std::fmt::Display for HoleNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A span of holes that totals are reported over.
///
/// Nines are fixed by position: front is holes 1-9, back is 10-18.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NineRange {
    Front,
    Back,
    All,
}

impl NineRange {
    /// 0-based card positions covered by this range.
    #[must_use]
    pub const fn indices(self) -> std::ops::Range<usize> {
        match self {
            NineRange::Front => 0..9,
            NineRange::Back => 9..HOLE_COUNT,
            NineRange::All => 0..HOLE_COUNT,
        }
    }

    #[must_use]
    pub fn contains(self, hole: HoleNumber) -> bool {
        self.indices().contains(&hole.index())
    }

    /// Hole numbers in this range, in order.
    pub fn holes(self) -> impl Iterator<Item = HoleNumber> {
        self.indices().map(HoleNumber::from_index)
    }
}

/// Layout data for one hole.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hole {
    pub number: HoleNumber,
    /// Par, always 3, 4 or 5.
    pub par: u8,
    pub yardage: u32,
    /// Handicap rating: 1 is the hardest hole, 18 the easiest.
    pub stroke_index: u8,
}

impl Hole {
    /// Create a hole, clamping par to 3..=5 and yardage to at least 1.
    ///
    /// The stroke index is stored as given; `Course::validate` checks
    /// that the indices across the course form a permutation.
    #[must_use]
    pub fn new(number: HoleNumber, par: u8, yardage: u32, stroke_index: u8) -> Self {
        Self {
            number,
            par: par.clamp(3, 5),
            yardage: yardage.max(1),
            stroke_index,
        }
    }

    /// Difficulty score used to rank holes when stroke indices must be
    /// derived, in twentieths of a point (`par*10 + yardage*0.05` plus
    /// length bonuses, scaled by 20 so the ordering is exact).
    #[must_use]
    pub fn difficulty(&self) -> u64 {
        let bonus = match self.par {
            3 if self.yardage > 200 => 20,
            5 if self.yardage > 550 => 15,
            4 if self.yardage > 450 => 10,
            _ => 0,
        };
        u64::from(self.par) * 200 + u64::from(self.yardage) + bonus * 20
    }
}
