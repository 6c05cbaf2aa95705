//! Game of Tens.
//!
//! Each player picks exactly ten holes during the round; only those holes
//! count. A player's Tens round is complete at ten picks, and complete
//! rounds are ranked by net score over the picked holes, lowest first.
//! Incomplete rounds are still reported with their progress but are not
//! ranked.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{PlayerId, PlayerMap};
use crate::course::{HoleNumber, HOLE_COUNT};
use crate::rules::{RoundView, SideGame, SideGameKind};
use crate::scoring::format_to_par;

/// Holes each player must pick.
pub const TENS_HOLES: u32 = 10;

/// A set of holes, one bit per hole.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HoleSet(u32);

impl HoleSet {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[must_use]
    pub fn contains(self, hole: HoleNumber) -> bool {
        self.0 & (1 << hole.index()) != 0
    }

    pub fn insert(&mut self, hole: HoleNumber) {
        self.0 |= 1 << hole.index();
    }

    pub fn remove(&mut self, hole: HoleNumber) {
        self.0 &= !(1 << hole.index());
    }

    #[must_use]
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every bit names a hole on the card.
    #[must_use]
    pub fn within_card(self) -> bool {
        self.0 >> HOLE_COUNT == 0
    }

    /// Holes in the set, in playing order.
    pub fn iter(self) -> impl Iterator<Item = HoleNumber> {
        HoleNumber::all().filter(move |h| self.contains(*h))
    }
}

impl FromIterator<HoleNumber> for HoleSet {
    fn from_iter<I: IntoIterator<Item = HoleNumber>>(iter: I) -> Self {
        let mut set = HoleSet::empty();
        for hole in iter {
            set.insert(hole);
        }
        set
    }
}

/// Whether `hole` may be toggled given the current picks.
///
/// Un-picking is always allowed; picking needs a free slot.
#[must_use]
pub fn can_select(current: HoleSet, hole: HoleNumber) -> bool {
    current.contains(hole) || current.len() < TENS_HOLES
}

/// Every player's Tens picks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TensSelections {
    picks: PlayerMap<HoleSet>,
}

impl TensSelections {
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            picks: PlayerMap::with_default(player_count),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.picks.player_count()
    }

    /// A player's picks; empty for an unknown player.
    #[must_use]
    pub fn picks(&self, player: PlayerId) -> HoleSet {
        self.picks.get(player).copied().unwrap_or_default()
    }

    /// Toggle a hole in a player's picks.
    ///
    /// Returns `false` (and changes nothing) when picking would exceed ten
    /// holes or the player is unknown.
    pub fn toggle(&mut self, player: PlayerId, hole: HoleNumber) -> bool {
        let Some(set) = self.picks.get_mut(player) else {
            return false;
        };
        if set.contains(hole) {
            set.remove(hole);
            true
        } else if can_select(*set, hole) {
            set.insert(hole);
            true
        } else {
            debug!(%player, %hole, "tens pick rejected, already at ten holes");
            false
        }
    }

    /// Set a hole's pick state explicitly, honouring the ten-hole cap.
    pub fn set(&mut self, player: PlayerId, hole: HoleNumber, selected: bool) -> bool {
        if self.picks(player).contains(hole) == selected {
            return self.picks.contains(player);
        }
        self.toggle(player, hole)
    }
}

/// A player's figures over their picked holes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TensTotals {
    pub player: PlayerId,
    pub selected_holes: u32,
    pub gross: u32,
    pub net: i32,
    /// Par of the picked holes.
    pub par: u32,
    /// Net relative to `par`.
    pub to_par: String,
    pub complete: bool,
}

/// A ranked, complete Tens round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TensRanking {
    /// 1-based position; players level on net share the lower position.
    pub rank: u32,
    pub player: PlayerId,
    pub net: i32,
}

/// Outcome of the Game of Tens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TensStandings {
    /// Every player, in roster order, complete or not.
    pub entries: Vec<TensTotals>,
    /// Complete rounds only, lowest net first; ties keep roster order.
    pub leaderboard: Vec<TensRanking>,
}

/// Game of Tens rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct TensEngine;

impl TensEngine {
    /// Totals for one player over their picked holes.
    #[must_use]
    pub fn totals(&self, view: &RoundView<'_>, player: PlayerId) -> TensTotals {
        let picks = view.tens.picks(player);
        let sums = view.ledger.sums_over(player, picks.iter());
        TensTotals {
            player,
            selected_holes: picks.len(),
            gross: sums.gross,
            net: sums.net,
            par: sums.par,
            to_par: format_to_par(i64::from(sums.net), i64::from(sums.par)),
            complete: picks.len() == TENS_HOLES,
        }
    }
}

impl SideGame for TensEngine {
    type Outcome = TensStandings;

    fn kind(&self) -> SideGameKind {
        SideGameKind::Tens
    }

    fn is_active(&self, view: &RoundView<'_>) -> bool {
        view.config.games.tens
    }

    fn evaluate(&self, view: &RoundView<'_>) -> TensStandings {
        let entries: Vec<TensTotals> = view
            .ledger
            .players()
            .player_ids()
            .map(|p| self.totals(view, p))
            .collect();

        let mut complete: Vec<&TensTotals> = entries.iter().filter(|e| e.complete).collect();
        // Stable sort keeps roster order among equal nets.
        complete.sort_by_key(|e| e.net);

        let mut leaderboard: Vec<TensRanking> = Vec::with_capacity(complete.len());
        for (i, entry) in complete.iter().enumerate() {
            let rank = match leaderboard.last() {
                Some(prev) if prev.net == entry.net => prev.rank,
                _ => i as u32 + 1,
            };
            leaderboard.push(TensRanking {
                rank,
                player: entry.player,
                net: entry.net,
            });
        }
        trace!(ranked = leaderboard.len(), "tens standings evaluated");

        TensStandings {
            entries,
            leaderboard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Player, RoundConfig};
    use crate::course::generate_course;
    use crate::games::wolf::WolfSelections;
    use crate::scoring::{ScoreCard, ScoreLedger};

    fn hole(n: u8) -> HoleNumber {
        HoleNumber::new(n).unwrap()
    }

    #[test]
    fn test_hole_set_basics() {
        let mut set = HoleSet::empty();
        assert!(set.is_empty());
        set.insert(hole(1));
        set.insert(hole(18));
        set.insert(hole(18));
        assert_eq!(set.len(), 2);
        assert!(set.contains(hole(18)));
        set.remove(hole(1));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![hole(18)]);
    }

    #[test]
    fn test_stray_bits_are_off_card() {
        let full: HoleSet = HoleNumber::all().collect();
        assert!(full.within_card());
        let stray: HoleSet = serde_json::from_str("268173312").unwrap();
        assert!(!stray.within_card());
        assert_eq!(stray.len(), 10);
        assert_eq!(stray.iter().count(), 0);
    }

    #[test]
    fn test_can_select_at_cap() {
        let full: HoleSet = (1..=10).map(hole).collect();
        assert!(!can_select(full, hole(11)));
        assert!(can_select(full, hole(5)));

        let nine: HoleSet = (1..=9).map(hole).collect();
        assert!(can_select(nine, hole(11)));
    }

    #[test]
    fn test_eleventh_pick_is_no_op() {
        let mut selections = TensSelections::new(1);
        for n in 1..=10 {
            assert!(selections.toggle(PlayerId(0), hole(n)));
        }
        assert!(!selections.toggle(PlayerId(0), hole(11)));
        assert_eq!(selections.picks(PlayerId(0)).len(), 10);
        assert!(!selections.picks(PlayerId(0)).contains(hole(11)));

        // Un-pick then pick again.
        assert!(selections.toggle(PlayerId(0), hole(3)));
        assert!(selections.toggle(PlayerId(0), hole(11)));
        assert_eq!(selections.picks(PlayerId(0)).len(), 10);
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut selections = TensSelections::new(2);
        assert!(selections.set(PlayerId(1), hole(4), true));
        assert!(selections.set(PlayerId(1), hole(4), true));
        assert_eq!(selections.picks(PlayerId(1)).len(), 1);
        assert!(selections.set(PlayerId(1), hole(4), false));
        assert!(selections.picks(PlayerId(1)).is_empty());
        assert!(!selections.set(PlayerId(3), hole(4), true));
    }

    #[test]
    fn test_leaderboard_excludes_incomplete() {
        let course = generate_course(8);
        let players = PlayerMap::new(3, |p| Player::new(format!("P{}", p.0), 0));
        let mut card = ScoreCard::new(3);
        let mut tens = TensSelections::new(3);
        for h in HoleNumber::all() {
            card.set(PlayerId(0), h, Some(5));
            card.set(PlayerId(1), h, Some(4));
            card.set(PlayerId(2), h, Some(3));
        }
        for n in 1..=10 {
            tens.toggle(PlayerId(0), hole(n));
            tens.toggle(PlayerId(1), hole(n));
        }
        for n in 1..=9 {
            tens.toggle(PlayerId(2), hole(n));
        }
        let config = RoundConfig::default().with_tens(true);
        let wolf = WolfSelections::default();
        let view = RoundView {
            config: &config,
            ledger: ScoreLedger::new(&course, &players, &card),
            tens: &tens,
            wolf: &wolf,
        };

        let standings = TensEngine.evaluate(&view);
        assert_eq!(standings.entries.len(), 3);
        assert!(!standings.entries[2].complete);
        assert_eq!(standings.entries[2].selected_holes, 9);

        let order: Vec<PlayerId> = standings.leaderboard.iter().map(|r| r.player).collect();
        assert_eq!(order, vec![PlayerId(1), PlayerId(0)]);
        assert_eq!(standings.leaderboard[0].net, 40);
        assert_eq!(standings.leaderboard[0].rank, 1);
        assert_eq!(standings.leaderboard[1].rank, 2);
    }
}
