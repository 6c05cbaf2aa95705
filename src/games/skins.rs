//! Skins.
//!
//! Holes are resolved in order, 1 through 18, threading a carryover
//! counter. On each hole with at least two scorers the single lowest net
//! score wins the pot (`1 + carryover`) and the counter resets. A shared
//! low net is resolved by the round's `SkinsMode`:
//!
//! | mode        | winner | carryover after the hole |
//! |-------------|--------|--------------------------|
//! | `Push`      | none   | unchanged                |
//! | `Carryover` | none   | `+1`                     |
//! | `Null`      | none   | `0`                      |
//!
//! Holes with fewer than two scorers are skipped without touching the
//! counter. With a fixed mode for the round, `Push` and `Null` leave the
//! counter at zero throughout; they are reported as different outcomes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{PlayerId, PlayerMap, SkinsMode};
use crate::course::HoleNumber;
use crate::rules::{RoundView, SideGame, SideGameKind};

/// How a hole resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkinsHoleOutcome {
    /// Fewer than two players have scored the hole.
    Pending,
    /// A single player had the lowest net.
    Won,
    /// Tie under `Push`: the skin is lost.
    Pushed,
    /// Tie under `Carryover`: the skin moves to the next hole.
    CarriedOver,
    /// Tie under `Null`: the skin and any carryover are voided.
    Voided,
}

/// Result for one hole.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinsHoleResult {
    pub hole: HoleNumber,
    pub outcome: SkinsHoleOutcome,
    pub winner: Option<PlayerId>,
    /// Skins at stake on this hole (`1 + carryover_before`).
    pub value: u32,
    pub tied: bool,
    pub carryover_before: u32,
    /// Lowest net among scorers, when the hole had at least two.
    pub low_net: Option<i32>,
    /// Players sharing the lowest net (just the winner on a won hole).
    pub low_players: SmallVec<[PlayerId; 4]>,
}

/// Outcome of skins for the round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinsOutcome {
    pub mode: SkinsMode,
    pub holes: Vec<SkinsHoleResult>,
    /// Skins won per player.
    pub totals: PlayerMap<u32>,
    /// Skins still carrying after the last hole.
    pub final_carryover: u32,
}

impl SkinsOutcome {
    /// Skins awarded to anyone.
    #[must_use]
    pub fn skins_awarded(&self) -> u32 {
        self.totals.as_slice().iter().sum()
    }

    #[must_use]
    pub fn hole(&self, hole: HoleNumber) -> &SkinsHoleResult {
        &self.holes[hole.index()]
    }
}

/// Skins rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct SkinsEngine;

impl SkinsEngine {
    /// Resolve all holes under an explicit tie policy.
    #[must_use]
    pub fn resolve(&self, view: &RoundView<'_>, mode: SkinsMode) -> SkinsOutcome {
        let players = view.ledger.players();
        let mut totals = PlayerMap::with_value(players.player_count(), 0u32);
        let mut carryover = 0u32;
        let mut holes = Vec::with_capacity(crate::course::HOLE_COUNT);

        for hole in HoleNumber::all() {
            let nets: SmallVec<[(PlayerId, i32); 4]> = players
                .player_ids()
                .filter_map(|p| view.ledger.net(p, hole).map(|net| (p, net)))
                .collect();

            let carryover_before = carryover;
            let value = 1 + carryover_before;

            if nets.len() < 2 {
                holes.push(SkinsHoleResult {
                    hole,
                    outcome: SkinsHoleOutcome::Pending,
                    winner: None,
                    value,
                    tied: false,
                    carryover_before,
                    low_net: None,
                    low_players: SmallVec::new(),
                });
                continue;
            }

            let low = nets.iter().map(|&(_, net)| net).min().unwrap_or_default();
            let low_players: SmallVec<[PlayerId; 4]> = nets
                .iter()
                .filter(|&&(_, net)| net == low)
                .map(|&(p, _)| p)
                .collect();

            let (outcome, winner) = if let [only] = low_players.as_slice() {
                totals[*only] += value;
                carryover = 0;
                (SkinsHoleOutcome::Won, Some(*only))
            } else {
                match mode {
                    SkinsMode::Push => (SkinsHoleOutcome::Pushed, None),
                    SkinsMode::Carryover => {
                        carryover += 1;
                        (SkinsHoleOutcome::CarriedOver, None)
                    }
                    SkinsMode::Null => {
                        carryover = 0;
                        (SkinsHoleOutcome::Voided, None)
                    }
                }
            };
            trace!(%hole, ?outcome, value, carryover, "skins hole resolved");

            holes.push(SkinsHoleResult {
                hole,
                outcome,
                winner,
                value,
                tied: winner.is_none(),
                carryover_before,
                low_net: Some(low),
                low_players,
            });
        }

        SkinsOutcome {
            mode,
            holes,
            totals,
            final_carryover: carryover,
        }
    }
}

impl SideGame for SkinsEngine {
    type Outcome = SkinsOutcome;

    fn kind(&self) -> SideGameKind {
        SideGameKind::Skins
    }

    fn is_active(&self, view: &RoundView<'_>) -> bool {
        view.config.games.skins
    }

    fn evaluate(&self, view: &RoundView<'_>) -> SkinsOutcome {
        self.resolve(view, view.config.skins_mode)
    }
}
