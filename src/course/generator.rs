//! Synthetic fallback course.
//!
//! Used when course data is unusable. Pars follow a generic par-72 card,
//! yardages are drawn from par-dependent bands, and stroke indices come
//! from the same difficulty ranking used to repair real courses.

use crate::core::CourseRng;

use super::hole::{Hole, HoleNumber};
use super::layout::{assign_stroke_indices, Course};

/// Generic par-72 card: 36 out, 36 in.
const DEFAULT_PARS: [u8; 18] = [4, 4, 3, 5, 4, 4, 3, 4, 5, 4, 3, 4, 5, 4, 4, 3, 5, 4];

/// Inclusive yardage band for a par.
const fn yardage_band(par: u8) -> (u32, u32) {
    match par {
        3 => (140, 225),
        4 => (330, 470),
        _ => (480, 590),
    }
}

/// Build an 18-hole course deterministically from `seed`.
#[must_use]
pub fn generate_course(seed: u64) -> Course {
    let mut rng = CourseRng::new(seed).for_context("yardage");

    let mut holes: Vec<Hole> = DEFAULT_PARS
        .iter()
        .enumerate()
        .map(|(i, &par)| {
            let (lo, hi) = yardage_band(par);
            Hole::new(HoleNumber::from_index(i), par, rng.gen_range(lo..=hi), 0)
        })
        .collect();
    assign_stroke_indices(&mut holes);

    Course {
        name: "Generated Course".to_string(),
        location: String::new(),
        holes,
        published_yardage: None,
        rating: None,
        slope: None,
    }
}
