//! Course data: holes, stroke allocation, validation, and fallback layouts.

pub mod hole;
pub mod handicap;
pub mod layout;
pub mod generator;

pub use hole::{Hole, HoleNumber, NineRange, HOLE_COUNT};
pub use handicap::strokes_for;
pub use layout::{
    assign_stroke_indices, is_stroke_index_permutation, Course, CourseDraft, CourseStatus,
    ValidatedCourse,
};
pub use generator::generate_course;
