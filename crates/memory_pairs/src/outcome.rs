//! Move results and rejection reasons.

use crate::board::Position;
use serde::{Deserialize, Serialize};

/// Outcome class of a single move attempt.
///
/// Classification precedence, first match wins:
/// 1. session already over: `GameOver`
/// 2. malformed input: `Error`
/// 3. out of range, already shown, or same cell twice: `Invalid`
/// 4. every cell shown after the move: `GameOver`
/// 5. labels equal: `Matching`
/// 6. labels differ: `NoMatch`
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MoveResult {
    /// The two revealed cells hold the same label.
    Matching,
    /// The two revealed cells differ; both are hidden again.
    NoMatch,
    /// Coordinates were out of range, already shown, or identical.
    Invalid,
    /// The action string was not four integers.
    Error,
    /// The game has ended, either by this move or before it.
    GameOver,
}

/// Why a move was rejected without touching the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum MoveRejection {
    /// The game was already over.
    #[display("Game is already over")]
    AlreadyOver,

    /// The action did not parse into exactly four integers.
    #[display("Expected four integers 'r1 c1 r2 c2', got {:?}", input)]
    Malformed {
        /// The raw action string.
        input: String,
    },

    /// A coordinate fell outside the board.
    #[display("Coordinate {} is outside the board (size {})", value, size)]
    OutOfRange {
        /// The offending coordinate.
        value: i64,
        /// Board side length.
        size: usize,
    },

    /// A target cell was already face-up.
    #[display("Cell {} is already shown", _0)]
    AlreadyShown(Position),

    /// Both targets named the same cell.
    #[display("Both picks name cell {}", _0)]
    DuplicateCell(Position),
}

impl MoveRejection {
    /// The result class this rejection maps to.
    pub fn result(&self) -> MoveResult {
        match self {
            MoveRejection::AlreadyOver => MoveResult::GameOver,
            MoveRejection::Malformed { .. } => MoveResult::Error,
            MoveRejection::OutOfRange { .. }
            | MoveRejection::AlreadyShown(_)
            | MoveRejection::DuplicateCell(_) => MoveResult::Invalid,
        }
    }
}

/// Everything a caller learns from one move attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct MoveOutcome {
    /// Result class.
    result: MoveResult,
    /// Reward earned by this move.
    reward: f64,
    /// Labels revealed by the move, when it was accepted.
    revealed: Option<(u32, u32)>,
    /// Reason the move was rejected, if it was.
    rejection: Option<MoveRejection>,
}

impl MoveOutcome {
    pub(crate) fn accepted(result: MoveResult, reward: f64, revealed: (u32, u32)) -> Self {
        Self {
            result,
            reward,
            revealed: Some(revealed),
            rejection: None,
        }
    }

    pub(crate) fn rejected(rejection: MoveRejection, reward: f64) -> Self {
        Self {
            result: rejection.result(),
            reward,
            revealed: None,
            rejection: Some(rejection),
        }
    }

    /// Whether the board was changed by this move.
    pub fn is_accepted(&self) -> bool {
        self.rejection.is_none()
    }
}
