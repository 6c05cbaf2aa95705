//! Wolf.
//!
//! Four-player game with a rotating "Wolf". On holes 1-16 the Wolf is
//! player `(hole - 1) % 4`. On holes 17 and 18 the Wolf is whoever has
//! the fewest points so far (lowest roster position on ties), so holes are
//! resolved as an ordered fold with the running points threaded forward.
//!
//! After the Wolf chooses, a hole resolves once all four players have
//! scored. Net scores decide:
//!
//! - **Lone**: Wolf net strictly below every opponent's net wins 4 points
//!   (6 when declared blind); otherwise each opponent gets 1.
//! - **Partner**: best net of Wolf and partner against best net of the
//!   other two. Wolf team wins 2 each, opponents win 3 each, equal best
//!   nets halve the hole with no points.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{PlayerId, PlayerMap};
use crate::course::{HoleNumber, HOLE_COUNT};
use crate::rules::{RoundView, SideGame, SideGameKind};

/// Players a Wolf game needs.
pub const WOLF_PLAYERS: usize = 4;

/// First hole on which the Wolf goes to the player trailing on points.
pub const TRAILER_WOLF_FROM: u8 = 17;

/// Points for a lone Wolf win.
pub const LONE_WIN_POINTS: u32 = 4;
/// Points for a blind lone Wolf win.
pub const BLIND_WIN_POINTS: u32 = 6;
/// Points each opponent gets when a lone Wolf fails.
pub const LONE_LOSS_POINTS: u32 = 1;
/// Points each member of a winning Wolf team gets.
pub const TEAM_WIN_POINTS: u32 = 2;
/// Points each opponent gets for beating a Wolf team.
pub const OPPONENT_WIN_POINTS: u32 = 3;

/// The Wolf's decision for a hole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum WolfChoice {
    /// Play alone against the other three.
    Lone {
        #[serde(rename = "isBlind")]
        is_blind: bool,
    },
    /// Team up with another player.
    Partner {
        #[serde(rename = "partnerIndex")]
        partner: PlayerId,
    },
}

/// Wolf decisions for every hole.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WolfSelections {
    choices: [Option<WolfChoice>; HOLE_COUNT],
}

impl WolfSelections {
    #[must_use]
    pub fn get(&self, hole: HoleNumber) -> Option<WolfChoice> {
        self.choices[hole.index()]
    }

    /// Record (or overwrite) the choice for a hole.
    pub fn set(&mut self, hole: HoleNumber, choice: WolfChoice) {
        self.choices[hole.index()] = Some(choice);
    }

    /// Undo the choice for a hole. Returns whether there was one.
    pub fn clear(&mut self, hole: HoleNumber) -> bool {
        self.choices[hole.index()].take().is_some()
    }
}

/// How a hole resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WolfHoleOutcome {
    /// The Wolf has not chosen yet.
    AwaitingChoice,
    /// Not every player has scored.
    AwaitingScores,
    /// The recorded partner is the Wolf or not in the game. Happens when
    /// edits to earlier holes move the hole-17/18 Wolf onto the partner.
    InvalidChoice,
    LoneWolfWon,
    LoneWolfLost,
    WolfTeamWon,
    OpponentsWon,
    /// Partner mode with equal best nets; nobody scores.
    Halved,
}

impl WolfHoleOutcome {
    /// Whether the hole produced a result (possibly zero points).
    #[must_use]
    pub fn is_resolved(self) -> bool {
        !matches!(
            self,
            WolfHoleOutcome::AwaitingChoice
                | WolfHoleOutcome::AwaitingScores
                | WolfHoleOutcome::InvalidChoice
        )
    }
}

/// Result for one hole.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WolfHoleResult {
    pub hole: HoleNumber,
    pub wolf: PlayerId,
    pub choice: Option<WolfChoice>,
    pub outcome: WolfHoleOutcome,
    /// Net scores in roster order, once every player has scored.
    pub net_scores: Option<[i32; WOLF_PLAYERS]>,
    /// Points awarded on this hole, in roster order.
    pub points: [u32; WOLF_PLAYERS],
}

/// A player's place in the Wolf standings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WolfStanding {
    pub player: PlayerId,
    pub points: u32,
}

/// Outcome of Wolf for the round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WolfOutcome {
    pub holes: Vec<WolfHoleResult>,
    /// Points per player.
    pub points: PlayerMap<u32>,
    /// Highest points first; ties keep roster order.
    pub standings: Vec<WolfStanding>,
}

impl WolfOutcome {
    #[must_use]
    pub fn hole(&self, hole: HoleNumber) -> &WolfHoleResult {
        &self.holes[hole.index()]
    }
}

/// Wolf rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct WolfEngine;

impl WolfEngine {
    /// Wolf by simple rotation, ignoring the late-round override.
    #[must_use]
    pub fn rotation_wolf(hole: HoleNumber) -> PlayerId {
        PlayerId(((hole.get() - 1) as usize % WOLF_PLAYERS) as u8)
    }

    /// Player with the fewest points; lowest roster position on ties.
    fn trailing_player(points: &[u32; WOLF_PLAYERS]) -> PlayerId {
        let mut trailer = 0;
        for (i, &p) in points.iter().enumerate() {
            if p < points[trailer] {
                trailer = i;
            }
        }
        PlayerId(trailer as u8)
    }

    /// Wolf for a hole given the points accumulated before it.
    fn wolf_given(hole: HoleNumber, points_before: &[u32; WOLF_PLAYERS]) -> PlayerId {
        if hole.get() >= TRAILER_WOLF_FROM {
            Self::trailing_player(points_before)
        } else {
            Self::rotation_wolf(hole)
        }
    }

    /// Wolf for a hole, or `None` when the round does not have four players.
    #[must_use]
    pub fn wolf_for_hole(&self, view: &RoundView<'_>, hole: HoleNumber) -> Option<PlayerId> {
        if view.player_count() != WOLF_PLAYERS {
            return None;
        }
        if hole.get() < TRAILER_WOLF_FROM {
            return Some(Self::rotation_wolf(hole));
        }
        let outcome = self.evaluate(view);
        Some(outcome.hole(hole).wolf)
    }

    /// Partners the hole's Wolf may pick: everyone but the Wolf.
    #[must_use]
    pub fn available_partners(
        &self,
        view: &RoundView<'_>,
        hole: HoleNumber,
    ) -> SmallVec<[PlayerId; 3]> {
        match self.wolf_for_hole(view, hole) {
            Some(wolf) => PlayerId::all(WOLF_PLAYERS).filter(|&p| p != wolf).collect(),
            None => SmallVec::new(),
        }
    }

    /// Score one hole from its nets and choice.
    fn score_hole(
        wolf: PlayerId,
        choice: WolfChoice,
        nets: &[i32; WOLF_PLAYERS],
    ) -> (WolfHoleOutcome, [u32; WOLF_PLAYERS]) {
        let mut points = [0u32; WOLF_PLAYERS];
        let w = wolf.index();

        match choice {
            WolfChoice::Lone { is_blind } => {
                let best_opponent = (0..WOLF_PLAYERS)
                    .filter(|&i| i != w)
                    .map(|i| nets[i])
                    .min()
                    .unwrap_or(i32::MAX);
                if nets[w] < best_opponent {
                    points[w] = if is_blind { BLIND_WIN_POINTS } else { LONE_WIN_POINTS };
                    (WolfHoleOutcome::LoneWolfWon, points)
                } else {
                    for (i, p) in points.iter_mut().enumerate() {
                        if i != w {
                            *p = LONE_LOSS_POINTS;
                        }
                    }
                    (WolfHoleOutcome::LoneWolfLost, points)
                }
            }
            WolfChoice::Partner { partner } => {
                let mate = partner.index();
                if mate == w || mate >= WOLF_PLAYERS {
                    return (WolfHoleOutcome::InvalidChoice, points);
                }
                let team = nets[w].min(nets[mate]);
                let opponents: SmallVec<[usize; 2]> =
                    (0..WOLF_PLAYERS).filter(|&i| i != w && i != mate).collect();
                let opposing = opponents.iter().map(|&i| nets[i]).min().unwrap_or(i32::MAX);

                if team < opposing {
                    points[w] = TEAM_WIN_POINTS;
                    points[mate] = TEAM_WIN_POINTS;
                    (WolfHoleOutcome::WolfTeamWon, points)
                } else if opposing < team {
                    for &i in &opponents {
                        points[i] = OPPONENT_WIN_POINTS;
                    }
                    (WolfHoleOutcome::OpponentsWon, points)
                } else {
                    (WolfHoleOutcome::Halved, points)
                }
            }
        }
    }

    /// Net scores for a hole once all four players have one.
    fn hole_nets(view: &RoundView<'_>, hole: HoleNumber) -> Option<[i32; WOLF_PLAYERS]> {
        let mut nets = [0i32; WOLF_PLAYERS];
        for (i, net) in nets.iter_mut().enumerate() {
            *net = view.ledger.net(PlayerId(i as u8), hole)?;
        }
        Some(nets)
    }
}

impl SideGame for WolfEngine {
    type Outcome = WolfOutcome;

    fn kind(&self) -> SideGameKind {
        SideGameKind::Wolf
    }

    fn is_active(&self, view: &RoundView<'_>) -> bool {
        view.config.games.wolf && view.player_count() == WOLF_PLAYERS
    }

    fn evaluate(&self, view: &RoundView<'_>) -> WolfOutcome {
        let mut running = [0u32; WOLF_PLAYERS];
        let mut holes = Vec::with_capacity(HOLE_COUNT);

        for hole in HoleNumber::all() {
            let wolf = Self::wolf_given(hole, &running);
            let choice = view.wolf.get(hole);
            let nets = if view.player_count() == WOLF_PLAYERS {
                Self::hole_nets(view, hole)
            } else {
                None
            };

            let (outcome, points) = match (choice, nets) {
                (None, _) => (WolfHoleOutcome::AwaitingChoice, [0; WOLF_PLAYERS]),
                (Some(_), None) => (WolfHoleOutcome::AwaitingScores, [0; WOLF_PLAYERS]),
                (Some(choice), Some(nets)) => Self::score_hole(wolf, choice, &nets),
            };
            for (total, p) in running.iter_mut().zip(points) {
                *total += p;
            }
            trace!(%hole, %wolf, ?outcome, "wolf hole resolved");

            holes.push(WolfHoleResult {
                hole,
                wolf,
                choice,
                outcome,
                net_scores: nets,
                points,
            });
        }

        let points = PlayerMap::new(view.player_count(), |p| {
            running.get(p.index()).copied().unwrap_or_default()
        });
        let mut standings: Vec<WolfStanding> = points
            .iter()
            .map(|(player, &points)| WolfStanding { player, points })
            .collect();
        standings.sort_by(|a, b| b.points.cmp(&a.points));

        WolfOutcome {
            holes,
            points,
            standings,
        }
    }
}
