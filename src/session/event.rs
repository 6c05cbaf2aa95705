//! Update vocabulary for a round.
//!
//! Every local mutation of a round goes through a `ScorecardEvent`. Events
//! that apply are appended to the round's history with a sequence number,
//! which hosts can use to replay or debounce outgoing sync.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, SkinsMode};
use crate::course::HoleNumber;
use crate::games::WolfChoice;

/// A single update to a round's inputs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScorecardEvent {
    /// Set (or clear, with `None`) a gross score.
    SetScore {
        player: PlayerId,
        hole: HoleNumber,
        gross: Option<u8>,
    },
    /// Pick or un-pick a Game of Tens hole.
    ToggleTens { player: PlayerId, hole: HoleNumber },
    /// Record the Wolf's decision for a hole.
    ChooseWolf { hole: HoleNumber, choice: WolfChoice },
    /// Undo the Wolf's decision for a hole.
    UndoWolf { hole: HoleNumber },
    /// Change the skins tie policy.
    SetSkinsMode(SkinsMode),
}

impl ScorecardEvent {
    /// The hole this event touches, if any.
    #[must_use]
    pub fn hole(&self) -> Option<HoleNumber> {
        match self {
            ScorecardEvent::SetScore { hole, .. }
            | ScorecardEvent::ToggleTens { hole, .. }
            | ScorecardEvent::ChooseWolf { hole, .. }
            | ScorecardEvent::UndoWolf { hole } => Some(*hole),
            ScorecardEvent::SetSkinsMode(_) => None,
        }
    }
}

/// An applied event with its position in the round's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Starts at 1, increases by one per applied event.
    pub sequence: u64,
    pub event: ScorecardEvent,
}
