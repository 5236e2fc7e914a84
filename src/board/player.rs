//! Players and their per-game counters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of players in a game.
pub const PLAYER_COUNT: usize = 2;

/// One of the two sides. Red moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Player {
    Red = 0,
    Blue = 1,
}

/// Both players in index order.
pub const ALL_PLAYERS: [Player; PLAYER_COUNT] = [Player::Red, Player::Blue];

impl Player {
    /// Returns the other player.
    pub const fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// Lowercase name used in protocol output.
    pub const fn name(self) -> &'static str {
        match self {
            Player::Red => "red",
            Player::Blue => "blue",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Score and titan bookkeeping for one player.
///
/// `titans_placed + titans_remaining + titans_captured` always equals the
/// configured titans per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PlayerStats {
    pub score: u32,
    pub titans_placed: u8,
    pub titans_remaining: u8,
    pub titans_captured: u8,
}

impl PlayerStats {
    /// Counters for a player who has not placed anything yet.
    pub fn fresh(titans: u8) -> Self {
        PlayerStats {
            score: 0,
            titans_placed: 0,
            titans_remaining: titans,
            titans_captured: 0,
        }
    }

    /// Every titan this player started with, wherever it is now.
    pub fn total_titans(&self) -> u8 {
        self.titans_placed + self.titans_remaining + self.titans_captured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_involution() {
        for p in ALL_PLAYERS {
            assert_ne!(p.opponent(), p);
            assert_eq!(p.opponent().opponent(), p);
        }
    }

    #[test]
    fn names_are_lowercase() {
        assert_eq!(Player::Red.to_string(), "red");
        assert_eq!(Player::Blue.name(), "blue");
    }

    #[test]
    fn fresh_stats_hold_all_titans_in_reserve() {
        let stats = PlayerStats::fresh(4);
        assert_eq!(stats.titans_remaining, 4);
        assert_eq!(stats.titans_placed, 0);
        assert_eq!(stats.total_titans(), 4);
    }
}
