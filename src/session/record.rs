//! Flat shared record of a round.
//!
//! A `GameRecord` is what participants exchange through the shared store:
//! the full set of round inputs keyed by a game identifier. Receiving a
//! record replaces local inputs wholesale; there is no per-field merge, so
//! the last record received wins.

use serde::{Deserialize, Serialize};

use crate::core::{
    Player, PlayerId, Result, RoundConfig, ScorecardError, MAX_HANDICAP, MAX_PLAYERS,
};
use crate::course::{Course, HOLE_COUNT};
use crate::games::{TensSelections, WolfSelections, TENS_HOLES};
use crate::scoring::{ScoreCard, MAX_SCORE, MIN_SCORE};

/// Every input of a round, as stored and synced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_id: String,
    pub config: RoundConfig,
    pub players: Vec<Player>,
    pub course: Course,
    pub scores: ScoreCard,
    pub tens: TensSelections,
    pub wolf: WolfSelections,
    /// Sequence number of the last event applied by the writer.
    pub revision: u64,
}

impl GameRecord {
    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ScorecardError::RecordEncode(e.to_string()))
    }

    /// Decode from JSON and check the record is internally consistent.
    pub fn from_json(json: &str) -> Result<Self> {
        let record: GameRecord = serde_json::from_str(json)?;
        record.check()?;
        Ok(record)
    }

    /// Check the record can be played as received.
    ///
    /// Covers the roster size, per-player tables matching the roster, the
    /// course layout, and every stored value lying in the range the round
    /// itself would have accepted.
    pub fn check(&self) -> Result<()> {
        let count = self.players.len();
        if count == 0 || count > MAX_PLAYERS {
            return Err(ScorecardError::InvalidRoster(count));
        }
        if self.scores.player_count() != count {
            return Err(ScorecardError::RecordDecode(format!(
                "score card has {} rows for {count} players",
                self.scores.player_count()
            )));
        }
        if self.tens.player_count() != count {
            return Err(ScorecardError::RecordDecode(format!(
                "tens table has {} rows for {count} players",
                self.tens.player_count()
            )));
        }
        if !self.course.is_playable() {
            return Err(ScorecardError::RecordDecode("course layout is not valid".to_string()));
        }
        for (player, entry) in PlayerId::all(count).zip(&self.players) {
            if entry.handicap > MAX_HANDICAP {
                return Err(ScorecardError::RecordDecode(format!(
                    "{player} has handicap {} above {MAX_HANDICAP}",
                    entry.handicap
                )));
            }
            let row = self.scores.row(player).ok_or(ScorecardError::UnknownPlayer(player.0))?;
            if let Some((hole, gross)) = row
                .scored()
                .find(|(_, gross)| !(MIN_SCORE..=MAX_SCORE).contains(gross))
            {
                return Err(ScorecardError::RecordDecode(format!(
                    "{player} has score {gross} on hole {hole}"
                )));
            }
            let picks = self.tens.picks(player);
            if !picks.within_card() {
                return Err(ScorecardError::RecordDecode(format!(
                    "{player} has tens picks outside holes 1-{HOLE_COUNT}"
                )));
            }
            if picks.len() > TENS_HOLES {
                return Err(ScorecardError::RecordDecode(format!(
                    "{player} has more than {TENS_HOLES} tens holes"
                )));
            }
        }
        Ok(())
    }
}
