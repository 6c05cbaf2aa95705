//! Player identification, roster entries, and per-player data storage.
//!
//! ## PlayerId
//!
//! Positional player identifier. A round holds 1-4 players and the id is
//! the 0-based position in the roster, stable for the whole round.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by `PlayerId`.
//! Every per-player input (score rows, Tens selections) and output
//! (totals, skins counts, wolf points) of the engines lives in one.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Most players a round supports.
pub const MAX_PLAYERS: usize = 4;

/// Highest course handicap the data model accepts.
pub const MAX_HANDICAP: u8 = 54;

/// Positional player identifier (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw roster position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a roster of `player_count` players.
    ///
    /// ```
    /// use golf_scorecard::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId(0), PlayerId(1), PlayerId(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(MAX_PLAYERS) as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// A roster entry: display name plus course handicap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Course handicap, always within `0..=MAX_HANDICAP`.
    pub handicap: u8,
}

impl Player {
    /// Create a player, trimming the name and clamping the handicap.
    ///
    /// Negative handicaps (plus-handicaps) are not modelled and clamp to 0.
    pub fn new(name: impl Into<String>, handicap: i32) -> Self {
        Self {
            name: name.into().trim().to_string(),
            handicap: handicap.clamp(0, MAX_HANDICAP as i32) as u8,
        }
    }

    /// Re-apply the `new` rules to an entry built field by field.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self::new(self.name, i32::from(self.handicap))
    }

    /// Name to show for this player, falling back to the seat label.
    #[must_use]
    pub fn display_name(&self, id: PlayerId) -> String {
        if self.name.is_empty() {
            id.to_string()
        } else {
            self.name.clone()
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use golf_scorecard::core::{PlayerId, PlayerMap};
///
/// let mut skins: PlayerMap<u32> = PlayerMap::with_value(2, 0);
/// skins[PlayerId::new(1)] += 3;
/// assert_eq!(skins[PlayerId::new(1)], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= MAX_PLAYERS, "At most 4 players supported");

        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Whether `player` has an entry in this map.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.data.len()
    }

    /// Get a player's entry, or `None` for an unknown player.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Mutable access to a player's entry, or `None` for an unknown player.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
    }

    /// Build a new map by transforming each entry.
    pub fn map<U>(&self, f: impl Fn(PlayerId, &T) -> U) -> PlayerMap<U> {
        PlayerMap {
            data: self.iter().map(|(p, v)| f(p, v)).collect(),
        }
    }

    /// Entries as a slice in roster order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_display_is_one_based() {
        assert_eq!(PlayerId::new(0).to_string(), "Player 1");
        assert_eq!(PlayerId::new(3).to_string(), "Player 4");
    }

    #[test]
    fn test_player_id_all_caps_at_roster_limit() {
        assert_eq!(PlayerId::all(4).count(), 4);
        assert_eq!(PlayerId::all(9).count(), MAX_PLAYERS);
    }

    #[test]
    fn test_player_new_clamps_handicap() {
        assert_eq!(Player::new("Ann", -3).handicap, 0);
        assert_eq!(Player::new("Ann", 12).handicap, 12);
        assert_eq!(Player::new("Ann", 80).handicap, MAX_HANDICAP);
    }

    #[test]
    fn test_player_normalized_clamps_literal() {
        let raw = Player {
            name: " Ed ".to_string(),
            handicap: 99,
        };
        let player = raw.normalized();
        assert_eq!(player.name, "Ed");
        assert_eq!(player.handicap, MAX_HANDICAP);
    }

    #[test]
    fn test_player_display_name_fallback() {
        let unnamed = Player::new("   ", 10);
        assert_eq!(unnamed.name, "");
        assert_eq!(unnamed.display_name(PlayerId::new(2)), "Player 3");

        let named = Player::new("  Bo ", 10);
        assert_eq!(named.display_name(PlayerId::new(0)), "Bo");
    }

    #[test]
    fn test_player_map_lookup() {
        let map: PlayerMap<i32> = PlayerMap::new(3, |p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::new(2)], 20);
        assert_eq!(map.get(PlayerId::new(1)), Some(&10));
        assert_eq!(map.get(PlayerId::new(3)), None);
        assert!(!map.contains(PlayerId::new(3)));
    }

    #[test]
    fn test_player_map_map_preserves_order() {
        let map: PlayerMap<i32> = PlayerMap::new(2, |p| p.index() as i32 + 1);
        let doubled = map.map(|_, v| v * 2);
        assert_eq!(doubled.as_slice(), &[2, 4]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u8> = PlayerMap::with_value(2, 7);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "At most 4 players supported")]
    fn test_player_map_too_many_players() {
        let _: PlayerMap<i32> = PlayerMap::with_value(5, 0);
    }
}
