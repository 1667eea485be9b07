//! Reward mapping from move results to scalar rewards.

use crate::outcome::MoveResult;
use serde::{Deserialize, Serialize};

/// Reward earned per result class.
///
/// Deserializes from partial tables; missing entries keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct RewardScheme {
    /// Reward for a matching pair.
    matching: f64,
    /// Reward for a non-matching pair.
    no_match: f64,
    /// Penalty for an out-of-range, repeated, or already-shown pick.
    invalid: f64,
    /// Penalty for an unparseable action.
    error: f64,
    /// Bonus for finishing the board (and for moves after it finished).
    game_over: f64,
}

impl RewardScheme {
    /// Creates a scheme with explicit values for every result class.
    pub fn new(matching: f64, no_match: f64, invalid: f64, error: f64, game_over: f64) -> Self {
        Self {
            matching,
            no_match,
            invalid,
            error,
            game_over,
        }
    }

    /// Reward for the given result.
    pub fn reward(&self, result: MoveResult) -> f64 {
        match result {
            MoveResult::Matching => self.matching,
            MoveResult::NoMatch => self.no_match,
            MoveResult::Invalid => self.invalid,
            MoveResult::Error => self.error,
            MoveResult::GameOver => self.game_over,
        }
    }
}

impl Default for RewardScheme {
    fn default() -> Self {
        Self::new(5.0, 0.0, -1.0, -5.0, 20.0)
    }
}
