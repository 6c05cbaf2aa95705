//! Session layer: owns a round's inputs and drives the engines.
//!
//! - `event`: the update vocabulary and history records
//! - `round`: the `Round` that applies updates and produces summaries
//! - `record`: the flat record exchanged with other participants

pub mod event;
pub mod round;
pub mod record;

pub use event::{EventRecord, ScorecardEvent};
pub use round::{Round, RoundSummary};
pub use record::GameRecord;
