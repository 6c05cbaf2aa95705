//! Side-game rule engines: Game of Tens, Skins, and Wolf.
//!
//! Each engine is a stateless unit struct implementing `SideGame`. All
//! outcomes are recomputed from the round's scores and selections.

pub mod tens;
pub mod skins;
pub mod wolf;

pub use tens::{can_select, HoleSet, TensEngine, TensRanking, TensSelections, TensStandings, TensTotals, TENS_HOLES};
pub use skins::{SkinsEngine, SkinsHoleOutcome, SkinsHoleResult, SkinsOutcome};
pub use wolf::{
    WolfChoice, WolfEngine, WolfHoleOutcome, WolfHoleResult, WolfOutcome, WolfSelections,
    WolfStanding, WOLF_PLAYERS,
};
