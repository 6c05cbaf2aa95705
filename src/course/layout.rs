//! Validated 18-hole course layouts.
//!
//! A `Course` always has exactly 18 holes whose stroke indices are a
//! permutation of 1..=18. Raw course data arrives as a `CourseDraft`;
//! `CourseDraft::validate` turns it into a `Course`, repairing or
//! replacing it as needed so a round always has a playable course:
//!
//! - 18 holes, indices a permutation: accepted as-is
//! - 18 holes, indices missing/duplicated: indices recomputed from hole
//!   difficulty (see `assign_stroke_indices`)
//! - any other hole count: replaced by a generated course

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::generator::generate_course;
use super::hole::{Hole, HoleNumber, NineRange, HOLE_COUNT};

/// Raw course data as supplied by the course source.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseDraft {
    pub name: String,
    pub location: String,
    pub holes: Vec<Hole>,
    /// Published total yardage, if the source had one.
    pub yardage: Option<u32>,
    pub rating: Option<f64>,
    pub slope: Option<u16>,
}

impl CourseDraft {
    /// Start a draft with a name and its holes.
    pub fn new(name: impl Into<String>, holes: Vec<Hole>) -> Self {
        Self {
            name: name.into(),
            holes,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    #[must_use]
    pub fn with_rating(mut self, rating: f64, slope: u16) -> Self {
        self.rating = Some(rating);
        self.slope = Some(slope);
        self
    }

    /// Validate into a playable course.
    ///
    /// Never fails: bad stroke indices are recomputed and a wrong hole
    /// count is replaced by a course generated from `fallback_seed`.
    #[must_use]
    pub fn validate(self, fallback_seed: u64) -> ValidatedCourse {
        if self.holes.len() != HOLE_COUNT {
            warn!(
                course = %self.name,
                holes = self.holes.len(),
                "course does not have 18 holes, substituting generated layout"
            );
            let mut course = generate_course(fallback_seed);
            if !self.location.is_empty() {
                course.location = self.location;
            }
            return ValidatedCourse {
                course,
                status: CourseStatus::Substituted,
            };
        }

        // Hole numbers follow card position.
        let mut holes = self.holes;
        for (i, hole) in holes.iter_mut().enumerate() {
            hole.number = HoleNumber::from_index(i);
        }

        let status = if is_stroke_index_permutation(&holes) {
            CourseStatus::Valid
        } else {
            warn!(course = %self.name, "stroke indices are not a permutation of 1-18, reassigning");
            assign_stroke_indices(&mut holes);
            CourseStatus::Repaired
        };

        ValidatedCourse {
            course: Course {
                name: self.name,
                location: self.location,
                holes,
                published_yardage: self.yardage,
                rating: self.rating,
                slope: self.slope,
            },
            status,
        }
    }
}

impl From<Course> for CourseDraft {
    fn from(course: Course) -> Self {
        Self {
            name: course.name,
            location: course.location,
            holes: course.holes,
            yardage: course.published_yardage,
            rating: course.rating,
            slope: course.slope,
        }
    }
}

/// What validation had to do to produce a course.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseStatus {
    /// Accepted unchanged.
    Valid,
    /// Stroke indices were recomputed.
    Repaired,
    /// Hole count was wrong; a generated course was used instead.
    Substituted,
}

/// Output of `CourseDraft::validate`.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedCourse {
    pub course: Course,
    pub status: CourseStatus,
}

/// A playable 18-hole course.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub(crate) name: String,
    pub(crate) location: String,
    pub(crate) holes: Vec<Hole>,
    pub(crate) published_yardage: Option<u32>,
    pub(crate) rating: Option<f64>,
    pub(crate) slope: Option<u16>,
}

impl Course {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn rating(&self) -> Option<f64> {
        self.rating
    }

    #[must_use]
    pub fn slope(&self) -> Option<u16> {
        self.slope
    }

    /// Whether the layout has 18 holes with a full set of stroke indices.
    ///
    /// Always true for courses built by `CourseDraft::validate`; a course
    /// deserialized from elsewhere may not be.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        is_stroke_index_permutation(&self.holes)
    }

    /// All 18 holes in playing order.
    #[must_use]
    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    #[must_use]
    pub fn hole(&self, number: HoleNumber) -> &Hole {
        &self.holes[number.index()]
    }

    /// Holes in a range, in playing order.
    #[must_use]
    pub fn nine(&self, range: NineRange) -> &[Hole] {
        &self.holes[range.indices()]
    }

    /// Holes 1-9.
    #[must_use]
    pub fn front_nine(&self) -> &[Hole] {
        self.nine(NineRange::Front)
    }

    /// Holes 10-18.
    #[must_use]
    pub fn back_nine(&self) -> &[Hole] {
        self.nine(NineRange::Back)
    }

    /// Sum of pars over a range.
    #[must_use]
    pub fn par_for(&self, range: NineRange) -> u32 {
        self.nine(range).iter().map(|h| u32::from(h.par)).sum()
    }

    #[must_use]
    pub fn front_par(&self) -> u32 {
        self.par_for(NineRange::Front)
    }

    #[must_use]
    pub fn back_par(&self) -> u32 {
        self.par_for(NineRange::Back)
    }

    #[must_use]
    pub fn total_par(&self) -> u32 {
        self.par_for(NineRange::All)
    }

    /// Published yardage when known, otherwise the sum of hole yardages.
    #[must_use]
    pub fn total_yardage(&self) -> u32 {
        self.published_yardage
            .unwrap_or_else(|| self.holes.iter().map(|h| h.yardage).sum())
    }
}

/// Whether the holes' stroke indices are exactly {1, ..., 18}.
#[must_use]
pub fn is_stroke_index_permutation(holes: &[Hole]) -> bool {
    let seen: FxHashSet<u8> = holes
        .iter()
        .map(|h| h.stroke_index)
        .filter(|si| (1..=HOLE_COUNT as u8).contains(si))
        .collect();
    holes.len() == HOLE_COUNT && seen.len() == HOLE_COUNT
}

/// Assign stroke indices 1 (hardest) through N (easiest) by difficulty.
///
/// Holes are ranked by `Hole::difficulty`, descending; equal difficulty
/// keeps card order. The holes themselves stay in card order.
pub fn assign_stroke_indices(holes: &mut [Hole]) {
    let mut ranking: Vec<usize> = (0..holes.len()).collect();
    ranking.sort_by(|&a, &b| holes[b].difficulty().cmp(&holes[a].difficulty()));

    for (rank, &pos) in ranking.iter().enumerate() {
        holes[pos].stroke_index = rank as u8 + 1;
    }
}
