//! Gross score entry and gross/net aggregation.

pub mod ledger;

pub use ledger::{
    format_to_par, parse_score, HoleDetail, HoleSums, PlayerTotals, RangeTotals, ScoreCard,
    ScoreLabel, ScoreLedger, ScoreRow, MAX_SCORE, MIN_SCORE,
};
pub use crate::course::NineRange;
