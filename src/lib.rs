//! # golf-scorecard
//!
//! Scoring and side-game rules engine for a multiplayer golf scorecard.
//!
//! ## Design Principles
//!
//! 1. **Pure Engines**: Every rule engine is a stateless function of a
//!    round snapshot. Results are recomputed on each read, never stored.
//!
//! 2. **Always Playable**: Bad course data is repaired (stroke indices) or
//!    replaced (wrong hole count) rather than rejected.
//!
//! 3. **No-op Rejection**: Moves a game forbids (an 11th Tens hole, a
//!    Wolf partnering themselves) leave state untouched instead of
//!    erroring.
//!
//! ## Modules
//!
//! - `core`: Player ids, per-player storage, RNG, configuration, errors
//! - `course`: Holes, stroke allocation, course validation and generation
//! - `scoring`: Score card and gross/net aggregation
//! - `rules`: `SideGame` trait and the `RoundView` snapshot
//! - `games`: Game of Tens, Skins, and Wolf
//! - `session`: `Round` state, update events, and the shared record
//!
//! ## Example
//!
//! ```
//! use golf_scorecard::{CourseDraft, Player, PlayerId, Round, RoundConfig};
//!
//! let players = vec![Player::new("Ann", 12), Player::new("Bo", 4)];
//! let mut round = Round::new("demo", RoundConfig::default(), players, CourseDraft::default()).unwrap();
//!
//! round.enter_score(PlayerId::new(0), 1, "5").unwrap();
//! round.enter_score(PlayerId::new(1), 1, "4").unwrap();
//!
//! let summary = round.summary();
//! assert_eq!(summary.totals[0].total.gross, 5);
//! assert!(summary.skins.is_some());
//! ```

pub mod core;
pub mod course;
pub mod scoring;
pub mod rules;
pub mod games;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerId, PlayerMap,
    CourseRng,
    RoundConfig, SideGameSet, SkinsMode,
    Result, ScorecardError,
};

pub use crate::course::{
    strokes_for, Course, CourseDraft, CourseStatus, Hole, HoleNumber, NineRange,
};

pub use crate::scoring::{format_to_par, parse_score, PlayerTotals, ScoreCard, ScoreLedger};

pub use crate::rules::{RoundView, SideGame, SideGameKind};

pub use crate::games::{
    SkinsEngine, SkinsOutcome, TensEngine, TensSelections, TensStandings, WolfChoice,
    WolfEngine, WolfOutcome, WolfSelections,
};

pub use crate::session::{EventRecord, GameRecord, Round, RoundSummary, ScorecardEvent};
