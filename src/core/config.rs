//! Round configuration.
//!
//! A round is configured once during setup:
//! - `SkinsMode`: how tied skins holes are handled
//! - `SideGameSet`: which side games are being played
//! - `fallback_seed`: seed for the synthetic course used when course data
//!   is malformed
//!
//! The engines read the configuration but never modify it.

use serde::{Deserialize, Serialize};

/// Tie policy for a skins hole where two or more players share the low net.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinsMode {
    /// The skin is lost; the carryover counter is left as it was.
    #[default]
    Push,
    /// The skin carries, growing the next hole's pot by one.
    Carryover,
    /// The skin is void and the carryover counter is zeroed.
    Null,
}

impl SkinsMode {
    /// Wire label (`"push"`, `"carryover"`, `"null"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            SkinsMode::Push => "push",
            SkinsMode::Carryover => "carryover",
            SkinsMode::Null => "null",
        }
    }
}

impl std::str::FromStr for SkinsMode {
    type Err = crate::core::ScorecardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "push" => Ok(SkinsMode::Push),
            "carryover" => Ok(SkinsMode::Carryover),
            "null" => Ok(SkinsMode::Null),
            other => Err(crate::core::ScorecardError::InvalidSkinsMode(other.to_string())),
        }
    }
}

/// Which side games are enabled for the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideGameSet {
    pub tens: bool,
    pub skins: bool,
    /// Only takes effect with exactly four players.
    pub wolf: bool,
}

impl Default for SideGameSet {
    fn default() -> Self {
        Self {
            tens: false,
            skins: true,
            wolf: false,
        }
    }
}

/// Round configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Tie policy for skins.
    pub skins_mode: SkinsMode,

    /// Enabled side games.
    pub games: SideGameSet,

    /// Seed for the synthetic fallback course.
    /// Same seed produces the same course on every client.
    pub fallback_seed: u64,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            skins_mode: SkinsMode::Push,
            games: SideGameSet::default(),
            fallback_seed: 18,
        }
    }
}

impl RoundConfig {
    /// Set the skins tie policy.
    #[must_use]
    pub fn with_skins_mode(mut self, mode: SkinsMode) -> Self {
        self.skins_mode = mode;
        self
    }

    /// Enable or disable Game of Tens.
    #[must_use]
    pub fn with_tens(mut self, enabled: bool) -> Self {
        self.games.tens = enabled;
        self
    }

    /// Enable or disable skins.
    #[must_use]
    pub fn with_skins(mut self, enabled: bool) -> Self {
        self.games.skins = enabled;
        self
    }

    /// Enable or disable Wolf.
    #[must_use]
    pub fn with_wolf(mut self, enabled: bool) -> Self {
        self.games.wolf = enabled;
        self
    }

    /// Set the fallback course seed.
    #[must_use]
    pub fn with_fallback_seed(mut self, seed: u64) -> Self {
        self.fallback_seed = seed;
        self
    }
}
