//! Persisted score tallies.
//!
//! The engine reports each finished match here; front ends read the
//! tally for display. Scores are auxiliary state: every backend
//! degrades to zero counts on read failure rather than erroring.

mod error;
mod json;
mod memory;

pub use error::StoreError;
pub use json::JsonScoreStore;
pub use memory::MemoryScoreStore;

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A tallied match outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// X won.
    X,
    /// O won.
    O,
    /// Drawn match.
    Draw,
}

impl From<Player> for Outcome {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Outcome::X,
            Player::O => Outcome::O,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::X => write!(f, "X"),
            Outcome::O => write!(f, "O"),
            Outcome::Draw => write!(f, "D"),
        }
    }
}

/// Cumulative win/draw counts, persisted across sessions.
///
/// Serialized with the short keys `X`, `O`, `D`; each field defaults
/// to zero so a partial or missing document still loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreTally {
    /// Wins by X.
    #[serde(rename = "X", default)]
    pub x: u64,
    /// Wins by O.
    #[serde(rename = "O", default)]
    pub o: u64,
    /// Drawn matches.
    #[serde(rename = "D", default)]
    pub draws: u64,
}

impl ScoreTally {
    /// Returns the count for one outcome.
    pub fn get(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::X => self.x,
            Outcome::O => self.o,
            Outcome::Draw => self.draws,
        }
    }

    /// Bumps the count for one outcome.
    pub fn bump(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::X => self.x += 1,
            Outcome::O => self.o += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

impl std::fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {}  O: {}  Draws: {}", self.x, self.o, self.draws)
    }
}

/// Durable score storage consumed by the engine.
pub trait ScoreStore {
    /// Reads the persisted tally, defaulting to zeros when missing
    /// or unreadable.
    fn load(&self) -> ScoreTally;

    /// Bumps one counter and persists the full tally.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the tally cannot be written.
    fn increment(&mut self, outcome: Outcome) -> Result<(), StoreError>;

    /// Zeroes all counters and persists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the tally cannot be written.
    fn reset(&mut self) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_bump_and_get() {
        let mut tally = ScoreTally::default();
        tally.bump(Outcome::X);
        tally.bump(Outcome::X);
        tally.bump(Outcome::Draw);
        assert_eq!(tally.get(Outcome::X), 2);
        assert_eq!(tally.get(Outcome::O), 0);
        assert_eq!(tally.get(Outcome::Draw), 1);
    }

    #[test]
    fn test_tally_short_keys() {
        let tally = ScoreTally {
            x: 3,
            o: 1,
            draws: 2,
        };
        let json = serde_json::to_string(&tally).expect("serialize");
        assert_eq!(json, r#"{"X":3,"O":1,"D":2}"#);
    }

    #[test]
    fn test_tally_missing_fields_default_to_zero() {
        let tally: ScoreTally = serde_json::from_str(r#"{"X":7}"#).expect("parse");
        assert_eq!(tally.x, 7);
        assert_eq!(tally.o, 0);
        assert_eq!(tally.draws, 0);
    }

    #[test]
    fn test_outcome_from_player() {
        assert_eq!(Outcome::from(Player::X), Outcome::X);
        assert_eq!(Outcome::from(Player::O), Outcome::O);
    }
}
