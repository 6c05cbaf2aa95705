//! Core types: players, per-player storage, RNG, configuration, errors.
//!
//! Everything here is independent of golf rules; the course, scoring, and
//! side-game modules build on these.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{Player, PlayerId, PlayerMap, MAX_HANDICAP, MAX_PLAYERS};
pub use rng::CourseRng;
pub use config::{RoundConfig, SideGameSet, SkinsMode};
pub use error::{Result, ScorecardError};
