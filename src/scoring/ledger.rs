//! Gross score storage and gross/net aggregation.
//!
//! ## ScoreCard
//!
//! One row of 18 optional gross scores per player. An absent entry means
//! the hole has not been scored yet; it is distinct from zero and counts
//! for nothing in any total.
//!
//! ## ScoreLedger
//!
//! Read-only view pairing a `ScoreCard` with the course and roster, so
//! net scores can be derived:
//!
//! ```text
//! net(hole) = gross(hole) - strokes_for(handicap, hole.stroke_index)
//! ```
//!
//! Totals only ever include scored holes, so a partial round produces
//! partial totals that grow as scores arrive.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId, PlayerMap, Result, ScorecardError};
use crate::course::{strokes_for, Course, Hole, HoleNumber, NineRange, HOLE_COUNT};

/// Lowest gross score accepted on a hole.
pub const MIN_SCORE: u8 = 1;
/// Highest gross score accepted on a hole.
pub const MAX_SCORE: u8 = 15;

/// Parse a score as typed into the card.
///
/// Blank input clears the hole (`Ok(None)`); whole numbers 1-15 are
/// accepted; anything else is rejected.
///
/// ```
/// use golf_scorecard::scoring::parse_score;
///
/// assert_eq!(parse_score(" 5 ").unwrap(), Some(5));
/// assert_eq!(parse_score("").unwrap(), None);
/// assert!(parse_score("16").is_err());
/// ```
pub fn parse_score(raw: &str) -> Result<Option<u8>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<u8>() {
        Ok(strokes) if (MIN_SCORE..=MAX_SCORE).contains(&strokes) => Ok(Some(strokes)),
        _ => Err(ScorecardError::InvalidScore(raw.to_string())),
    }
}

/// Format a total relative to par: `"E"`, `"+3"`, `"-2"`.
#[must_use]
pub fn format_to_par(total: i64, par: i64) -> String {
    match total - par {
        0 => "E".to_string(),
        diff if diff > 0 => format!("+{diff}"),
        diff => diff.to_string(),
    }
}

/// One player's gross scores, indexed by card position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRow([Option<u8>; HOLE_COUNT]);

impl ScoreRow {
    #[must_use]
    pub fn get(&self, hole: HoleNumber) -> Option<u8> {
        self.0[hole.index()]
    }

    /// Number of holes with a score.
    #[must_use]
    pub fn holes_played(&self) -> usize {
        self.0.iter().filter(|s| s.is_some()).count()
    }

    /// (hole, gross) for every scored hole.
    pub fn scored(&self) -> impl Iterator<Item = (HoleNumber, u8)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|g| (HoleNumber::from_index(i), g)))
    }
}

/// Gross scores for every player in the round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    rows: PlayerMap<ScoreRow>,
}

impl ScoreCard {
    /// An empty card for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            rows: PlayerMap::with_default(player_count),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.rows.player_count()
    }

    /// Gross score for a player on a hole, if entered.
    #[must_use]
    pub fn get(&self, player: PlayerId, hole: HoleNumber) -> Option<u8> {
        self.rows.get(player).and_then(|row| row.get(hole))
    }

    /// Set or clear a gross score.
    ///
    /// Returns `false` without changing anything for an unknown player or
    /// a score outside 1-15.
    pub fn set(&mut self, player: PlayerId, hole: HoleNumber, gross: Option<u8>) -> bool {
        if matches!(gross, Some(g) if !(MIN_SCORE..=MAX_SCORE).contains(&g)) {
            return false;
        }
        match self.rows.get_mut(player) {
            Some(row) => {
                row.0[hole.index()] = gross;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn row(&self, player: PlayerId) -> Option<&ScoreRow> {
        self.rows.get(player)
    }

    /// Whether every player has a score on `hole`.
    #[must_use]
    pub fn all_scored(&self, hole: HoleNumber) -> bool {
        self.rows.iter().all(|(_, row)| row.get(hole).is_some())
    }
}

/// How a hole score compares with par.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreLabel {
    /// Three or more under par.
    AlbatrossOrBetter,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleOrWorse,
}

impl ScoreLabel {
    /// Label for `gross` on a hole of `par`.
    #[must_use]
    pub fn classify(gross: u8, par: u8) -> Self {
        match i16::from(gross) - i16::from(par) {
            d if d <= -3 => ScoreLabel::AlbatrossOrBetter,
            -2 => ScoreLabel::Eagle,
            -1 => ScoreLabel::Birdie,
            0 => ScoreLabel::Par,
            1 => ScoreLabel::Bogey,
            2 => ScoreLabel::DoubleBogey,
            _ => ScoreLabel::TripleOrWorse,
        }
    }
}

/// Everything the card shows for one player on one hole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleDetail {
    pub hole: HoleNumber,
    pub par: u8,
    /// Handicap strokes received, shown even before the hole is scored.
    pub strokes_received: u8,
    pub gross: Option<u8>,
    pub net: Option<i32>,
    pub label: Option<ScoreLabel>,
}

/// Gross, net and par summed over a set of holes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleSums {
    pub gross: u32,
    pub net: i32,
    /// Par of every hole in the set, scored or not.
    pub par: u32,
    pub holes_scored: u32,
    /// Handicap strokes received on scored holes.
    pub strokes_received: u32,
}

/// Gross and net totals for one nine (or the full round).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeTotals {
    pub gross: u32,
    pub net: i32,
    pub par: u32,
    /// Gross relative to the range's par.
    pub gross_to_par: String,
    pub net_to_par: String,
}

/// Per-player totals for the front nine, back nine and full round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTotals {
    pub player: PlayerId,
    pub front: RangeTotals,
    pub back: RangeTotals,
    pub total: RangeTotals,
    pub holes_played: u32,
}

/// Read-only scoring view over a card, course and roster.
#[derive(Clone, Copy, Debug)]
pub struct ScoreLedger<'a> {
    course: &'a Course,
    players: &'a PlayerMap<Player>,
    card: &'a ScoreCard,
}

impl<'a> ScoreLedger<'a> {
    #[must_use]
    pub fn new(course: &'a Course, players: &'a PlayerMap<Player>, card: &'a ScoreCard) -> Self {
        Self {
            course,
            players,
            card,
        }
    }

    #[must_use]
    pub fn course(&self) -> &'a Course {
        self.course
    }

    #[must_use]
    pub fn players(&self) -> &'a PlayerMap<Player> {
        self.players
    }

    #[must_use]
    pub fn card(&self) -> &'a ScoreCard {
        self.card
    }

    /// Handicap strokes a player receives on a hole.
    #[must_use]
    pub fn strokes_received(&self, player: PlayerId, hole: &Hole) -> u8 {
        self.players
            .get(player)
            .map_or(0, |p| strokes_for(p.handicap, hole.stroke_index))
    }

    #[must_use]
    pub fn gross(&self, player: PlayerId, hole: HoleNumber) -> Option<u8> {
        self.card.get(player, hole)
    }

    /// Net score on a hole, if the hole is scored.
    #[must_use]
    pub fn net(&self, player: PlayerId, hole: HoleNumber) -> Option<i32> {
        let gross = self.card.get(player, hole)?;
        let strokes = self.strokes_received(player, self.course.hole(hole));
        Some(i32::from(gross) - i32::from(strokes))
    }

    /// Sum gross, net and par over an arbitrary set of holes.
    pub fn sums_over(&self, player: PlayerId, holes: impl IntoIterator<Item = HoleNumber>) -> HoleSums {
        holes.into_iter().fold(HoleSums::default(), |mut sums, number| {
            let hole = self.course.hole(number);
            sums.par += u32::from(hole.par);
            if let Some(gross) = self.card.get(player, number) {
                let strokes = self.strokes_received(player, hole);
                sums.gross += u32::from(gross);
                sums.net += i32::from(gross) - i32::from(strokes);
                sums.strokes_received += u32::from(strokes);
                sums.holes_scored += 1;
            }
            sums
        })
    }

    #[must_use]
    pub fn gross_total(&self, player: PlayerId, range: NineRange) -> u32 {
        self.sums_over(player, range.holes()).gross
    }

    #[must_use]
    pub fn net_total(&self, player: PlayerId, range: NineRange) -> i32 {
        self.sums_over(player, range.holes()).net
    }

    #[must_use]
    pub fn hole_detail(&self, player: PlayerId, number: HoleNumber) -> HoleDetail {
        let hole = self.course.hole(number);
        let gross = self.card.get(player, number);
        HoleDetail {
            hole: number,
            par: hole.par,
            strokes_received: self.strokes_received(player, hole),
            gross,
            net: self.net(player, number),
            label: gross.map(|g| ScoreLabel::classify(g, hole.par)),
        }
    }

    fn range_totals(&self, player: PlayerId, range: NineRange) -> RangeTotals {
        let sums = self.sums_over(player, range.holes());
        let par = i64::from(self.course.par_for(range));
        RangeTotals {
            gross: sums.gross,
            net: sums.net,
            par: sums.par,
            gross_to_par: format_to_par(i64::from(sums.gross), par),
            net_to_par: format_to_par(i64::from(sums.net), par),
        }
    }

    /// Front, back and total figures for a player.
    #[must_use]
    pub fn player_totals(&self, player: PlayerId) -> PlayerTotals {
        PlayerTotals {
            player,
            front: self.range_totals(player, NineRange::Front),
            back: self.range_totals(player, NineRange::Back),
            total: self.range_totals(player, NineRange::All),
            holes_played: self.card.row(player).map_or(0, |r| r.holes_played() as u32),
        }
    }
}
