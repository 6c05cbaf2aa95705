//! Side-game trait and the round snapshot engines evaluate.
//!
//! Side games implement `SideGame` to define:
//! - Whether the game applies to the current round
//! - How its outcome is derived from a `RoundView`
//!
//! Outcomes are never stored. The session layer builds a fresh
//! `RoundView` over its current inputs and re-evaluates on every read.

use serde::{Deserialize, Serialize};

use crate::core::RoundConfig;
use crate::games::tens::TensSelections;
use crate::games::wolf::WolfSelections;
use crate::scoring::ScoreLedger;

/// Identifies a side game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SideGameKind {
    Tens,
    Skins,
    Wolf,
}

impl std::fmt::Display for SideGameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SideGameKind::Tens => "Game of Tens",
            SideGameKind::Skins => "Skins",
            SideGameKind::Wolf => "Wolf",
        };
        f.write_str(name)
    }
}

/// Immutable snapshot of every input the engines read.
#[derive(Clone, Copy, Debug)]
pub struct RoundView<'a> {
    pub config: &'a RoundConfig,
    pub ledger: ScoreLedger<'a>,
    pub tens: &'a TensSelections,
    pub wolf: &'a WolfSelections,
}

impl RoundView<'_> {
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.ledger.players().player_count()
    }
}

/// A side game evaluated over a round snapshot.
///
/// ## Implementation Notes
///
/// - `evaluate` must be a pure function of the view
/// - Incomplete input (missing scores or selections) yields "no result
///   yet" entries, never a panic
pub trait SideGame {
    /// Derived result for the whole round.
    type Outcome;

    fn kind(&self) -> SideGameKind;

    /// Whether this game is being played in the round.
    fn is_active(&self, view: &RoundView<'_>) -> bool;

    /// Compute the outcome from scratch.
    fn evaluate(&self, view: &RoundView<'_>) -> Self::Outcome;

    /// Evaluate only when the game is active.
    fn evaluate_if_active(&self, view: &RoundView<'_>) -> Option<Self::Outcome> {
        if self.is_active(view) {
            Some(self.evaluate(view))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(SideGameKind::Tens.to_string(), "Game of Tens");
        assert_eq!(SideGameKind::Skins.to_string(), "Skins");
        assert_eq!(SideGameKind::Wolf.to_string(), "Wolf");
    }
}
