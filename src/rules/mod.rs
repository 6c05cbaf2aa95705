//! Side-game trait for rule engines.
//!
//! Each side game implements `SideGame` over a `RoundView`. The session
//! layer calls into the trait but never interprets game rules itself.

pub mod engine;

pub use engine::{RoundView, SideGame, SideGameKind};
