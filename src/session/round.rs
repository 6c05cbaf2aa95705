//! A round in progress: roster, course, configuration, and all inputs.
//!
//! `Round` owns the score card and side-game selections and is the only
//! thing that mutates them. Local edits arrive as `ScorecardEvent`s and
//! apply immediately; remote state arrives as a `GameRecord` and replaces
//! the local inputs wholesale. Outputs are never cached: `summary()`
//! re-runs every engine over the current inputs.
//!
//! ## Rejected updates
//!
//! Updates that break a game rule are no-ops, reported as `Ok(false)`:
//! - an 11th Game of Tens pick
//! - a Wolf choice when Wolf is not being played
//! - a Wolf partner who is the hole's Wolf
//! - roster edits after scoring has started
//!
//! Inputs that cannot be interpreted at all (unknown player, hole outside
//! 1-18, unparseable score) are errors.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::event::{EventRecord, ScorecardEvent};
use super::record::GameRecord;
use crate::core::{Player, PlayerId, PlayerMap, Result, RoundConfig, ScorecardError, SkinsMode, MAX_PLAYERS};
use crate::course::{Course, CourseDraft, CourseStatus, HoleNumber, ValidatedCourse};
use crate::games::{
    SkinsEngine, SkinsOutcome, TensEngine, TensSelections, TensStandings, WolfChoice, WolfEngine,
    WolfOutcome, WolfSelections, WOLF_PLAYERS,
};
use crate::rules::{RoundView, SideGame};
use crate::scoring::{parse_score, PlayerTotals, ScoreCard, ScoreLedger};

/// Everything the round reports, computed from scratch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Gross/net totals per player, in roster order.
    pub totals: Vec<PlayerTotals>,
    pub tens: Option<TensStandings>,
    pub skins: Option<SkinsOutcome>,
    /// Present only when Wolf is enabled and there are four players.
    pub wolf: Option<WolfOutcome>,
}

/// A round's inputs and the operations that change them.
#[derive(Clone, Debug)]
pub struct Round {
    game_id: String,
    config: RoundConfig,
    players: PlayerMap<Player>,
    course: Course,
    course_status: CourseStatus,
    scores: ScoreCard,
    tens: TensSelections,
    wolf: WolfSelections,
    history: Vector<EventRecord>,
    revision: u64,
}

fn hole_number(hole: u8) -> Result<HoleNumber> {
    HoleNumber::new(hole).ok_or(ScorecardError::InvalidHole(hole))
}

impl Round {
    /// Start a round from raw course data.
    ///
    /// The course is validated (and repaired or replaced if needed) using
    /// `config.fallback_seed`.
    pub fn new(
        game_id: impl Into<String>,
        config: RoundConfig,
        players: Vec<Player>,
        draft: CourseDraft,
    ) -> Result<Self> {
        let validated = draft.validate(config.fallback_seed);
        Self::from_parts(game_id.into(), config, players, validated)
    }

    /// Start a round on an existing course.
    ///
    /// A course that is not playable (wrong hole count or stroke indices)
    /// goes through the same validation as raw course data.
    pub fn with_course(
        game_id: impl Into<String>,
        config: RoundConfig,
        players: Vec<Player>,
        course: Course,
    ) -> Result<Self> {
        let validated = if course.is_playable() {
            ValidatedCourse {
                course,
                status: CourseStatus::Valid,
            }
        } else {
            CourseDraft::from(course).validate(config.fallback_seed)
        };
        Self::from_parts(game_id.into(), config, players, validated)
    }

    fn from_parts(
        game_id: String,
        config: RoundConfig,
        players: Vec<Player>,
        validated: ValidatedCourse,
    ) -> Result<Self> {
        let count = players.len();
        if count == 0 || count > MAX_PLAYERS {
            return Err(ScorecardError::InvalidRoster(count));
        }
        let players = PlayerMap::new(count, |p| players[p.index()].clone().normalized());

        Ok(Self {
            game_id,
            config,
            players,
            course: validated.course,
            course_status: validated.status,
            scores: ScoreCard::new(count),
            tens: TensSelections::new(count),
            wolf: WolfSelections::default(),
            history: Vector::new(),
            revision: 0,
        })
    }

    #[must_use]
    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn course(&self) -> &Course {
        &self.course
    }

    /// What course validation had to do when the round started.
    #[must_use]
    pub fn course_status(&self) -> CourseStatus {
        self.course_status
    }

    #[must_use]
    pub fn scores(&self) -> &ScoreCard {
        &self.scores
    }

    #[must_use]
    pub fn tens_selections(&self) -> &TensSelections {
        &self.tens
    }

    #[must_use]
    pub fn wolf_selections(&self) -> &WolfSelections {
        &self.wolf
    }

    /// Events applied locally since the round started or was last
    /// replaced by a remote record.
    #[must_use]
    pub fn history(&self) -> &Vector<EventRecord> {
        &self.history
    }

    /// Sequence number of the latest applied event.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether Wolf is in play (enabled, and exactly four players).
    #[must_use]
    pub fn wolf_in_play(&self) -> bool {
        self.config.games.wolf && self.players.player_count() == WOLF_PLAYERS
    }

    fn scoring_started(&self) -> bool {
        self.players
            .player_ids()
            .any(|p| self.scores.row(p).is_some_and(|row| row.holes_played() > 0))
    }

    fn check_player(&self, player: PlayerId) -> Result<()> {
        if self.players.contains(player) {
            Ok(())
        } else {
            Err(ScorecardError::UnknownPlayer(player.0))
        }
    }

    /// Snapshot of the current inputs for the engines.
    #[must_use]
    pub fn view(&self) -> RoundView<'_> {
        RoundView {
            config: &self.config,
            ledger: self.ledger(),
            tens: &self.tens,
            wolf: &self.wolf,
        }
    }

    #[must_use]
    pub fn ledger(&self) -> ScoreLedger<'_> {
        ScoreLedger::new(&self.course, &self.players, &self.scores)
    }

    /// Replace a roster entry. Refused once any score has been entered.
    ///
    /// The entry is normalized as by `Player::new`.
    pub fn update_player(&mut self, id: PlayerId, player: Player) -> Result<bool> {
        self.check_player(id)?;
        if self.scoring_started() {
            debug!(%id, "roster edit refused, scoring has started");
            return Ok(false);
        }
        self.players[id] = player.normalized();
        Ok(true)
    }

    /// Apply an update. Returns whether it changed anything.
    pub fn apply(&mut self, event: ScorecardEvent) -> Result<bool> {
        let applied = match &event {
            ScorecardEvent::SetScore { player, hole, gross } => {
                self.check_player(*player)?;
                if let Some(g) = gross {
                    if !(crate::scoring::MIN_SCORE..=crate::scoring::MAX_SCORE).contains(g) {
                        return Err(ScorecardError::InvalidScore(g.to_string()));
                    }
                }
                self.scores.set(*player, *hole, *gross)
            }
            ScorecardEvent::ToggleTens { player, hole } => {
                self.check_player(*player)?;
                self.tens.toggle(*player, *hole)
            }
            ScorecardEvent::ChooseWolf { hole, choice } => self.choose_wolf_at(*hole, *choice),
            ScorecardEvent::UndoWolf { hole } => self.wolf.clear(*hole),
            ScorecardEvent::SetSkinsMode(mode) => {
                self.config.skins_mode = *mode;
                true
            }
        };

        if applied {
            self.revision += 1;
            debug!(game = %self.game_id, sequence = self.revision, ?event, "event applied");
            self.history.push_back(EventRecord {
                sequence: self.revision,
                event,
            });
        }
        Ok(applied)
    }

    fn choose_wolf_at(&mut self, hole: HoleNumber, choice: WolfChoice) -> bool {
        if !self.wolf_in_play() {
            debug!(%hole, "wolf choice ignored, wolf not in play");
            return false;
        }
        if let WolfChoice::Partner { partner } = choice {
            let wolf = WolfEngine.wolf_for_hole(&self.view(), hole);
            if Some(partner) == wolf || partner.index() >= WOLF_PLAYERS {
                debug!(%hole, %partner, "wolf partner choice rejected");
                return false;
            }
        }
        self.wolf.set(hole, choice);
        true
    }

    /// Enter a score as typed: blank clears, 1-15 sets.
    pub fn enter_score(&mut self, player: PlayerId, hole: u8, raw: &str) -> Result<bool> {
        let hole = hole_number(hole)?;
        let gross = parse_score(raw)?;
        self.apply(ScorecardEvent::SetScore { player, hole, gross })
    }

    /// Pick or un-pick a Game of Tens hole.
    pub fn toggle_tens(&mut self, player: PlayerId, hole: u8) -> Result<bool> {
        let hole = hole_number(hole)?;
        self.apply(ScorecardEvent::ToggleTens { player, hole })
    }

    /// Record the Wolf's decision for a hole.
    pub fn choose_wolf(&mut self, hole: u8, choice: WolfChoice) -> Result<bool> {
        let hole = hole_number(hole)?;
        self.apply(ScorecardEvent::ChooseWolf { hole, choice })
    }

    /// Undo the Wolf's decision for a hole.
    pub fn undo_wolf(&mut self, hole: u8) -> Result<bool> {
        let hole = hole_number(hole)?;
        self.apply(ScorecardEvent::UndoWolf { hole })
    }

    pub fn set_skins_mode(&mut self, mode: SkinsMode) -> Result<bool> {
        self.apply(ScorecardEvent::SetSkinsMode(mode))
    }

    /// Gross/net totals for one player.
    pub fn player_totals(&self, player: PlayerId) -> Result<PlayerTotals> {
        self.check_player(player)?;
        Ok(self.ledger().player_totals(player))
    }

    /// Recompute every output.
    #[must_use]
    pub fn summary(&self) -> RoundSummary {
        let view = self.view();
        RoundSummary {
            totals: self
                .players
                .player_ids()
                .map(|p| view.ledger.player_totals(p))
                .collect(),
            tens: TensEngine.evaluate_if_active(&view),
            skins: SkinsEngine.evaluate_if_active(&view),
            wolf: WolfEngine.evaluate_if_active(&view),
        }
    }

    /// Export the inputs as a shared record.
    #[must_use]
    pub fn to_record(&self) -> GameRecord {
        GameRecord {
            game_id: self.game_id.clone(),
            config: self.config.clone(),
            players: self.players.as_slice().to_vec(),
            course: self.course.clone(),
            scores: self.scores.clone(),
            tens: self.tens.clone(),
            wolf: self.wolf.clone(),
            revision: self.revision,
        }
    }

    /// Replace all inputs with a received record (last write wins).
    ///
    /// The local history is cleared because it no longer describes how the
    /// current inputs came about.
    pub fn apply_record(&mut self, record: GameRecord) -> Result<()> {
        record.check()?;
        debug!(
            game = %record.game_id,
            local = self.revision,
            remote = record.revision,
            "replacing round with received record"
        );
        let count = record.players.len();
        let players = record.players;

        self.game_id = record.game_id;
        self.config = record.config;
        self.players = PlayerMap::new(count, |p| players[p.index()].clone().normalized());
        self.course = record.course;
        self.course_status = CourseStatus::Valid;
        self.scores = record.scores;
        self.tens = record.tens;
        self.wolf = record.wolf;
        self.history = Vector::new();
        self.revision = record.revision;
        Ok(())
    }
}
