//! Handicap stroke allocation.

/// Strokes a player receives on a hole.
///
/// Every full 18 of handicap gives one stroke on every hole; the remainder
/// gives one more stroke on the holes whose stroke index is at most the
/// remainder.
///
/// ```
/// use golf_scorecard::course::strokes_for;
///
/// assert_eq!(strokes_for(20, 1), 2);
/// assert_eq!(strokes_for(20, 5), 1);
/// assert_eq!(strokes_for(0, 1), 0);
/// ```
#[must_use]
pub const fn strokes_for(handicap: u8, stroke_index: u8) -> u8 {
    if handicap == 0 {
        return 0;
    }
    let base = handicap / 18;
    let extra = if stroke_index <= handicap % 18 { 1 } else { 0 };
    base + extra
}
