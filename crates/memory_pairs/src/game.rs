//! The memory game session: board state, move execution, scoring.

use crate::action::PickAction;
use crate::board::{Board, Position, ShownMask};
use crate::error::ConfigurationError;
use crate::outcome::{MoveOutcome, MoveRejection, MoveResult};
use crate::reward::RewardScheme;
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Default board side length.
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// One memory game: a shuffled board, its face-up mask, and running totals.
///
/// Accepted moves reveal two face-down cells. A matching pair stays face-up;
/// a non-matching pair is turned face-down again before `make_move` returns,
/// so the face-up count is always even between calls.
#[derive(Debug, Clone)]
pub struct MemoryGame {
    board: Board,
    shown: ShownMask,
    score: u32,
    moves_made: u32,
    game_over: bool,
    accumulated_reward: f64,
    rewards: RewardScheme,
    last_result: Option<MoveResult>,
}

impl MemoryGame {
    /// Creates a game with a freshly shuffled board and default rewards.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if `size` cannot be tiled with pairs.
    #[instrument(skip(rng))]
    pub fn new(size: usize, rng: &mut dyn RandomSource) -> Result<Self, ConfigurationError> {
        Self::with_rewards(size, rng, RewardScheme::default())
    }

    /// Creates a game with a freshly shuffled board and the given rewards.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if `size` cannot be tiled with pairs.
    #[instrument(skip(rng, rewards))]
    pub fn with_rewards(
        size: usize,
        rng: &mut dyn RandomSource,
        rewards: RewardScheme,
    ) -> Result<Self, ConfigurationError> {
        let board = Board::generate(size, rng)?;
        info!(size, "Created memory game");
        Ok(Self::from_board(board, rewards))
    }

    /// Creates a game over an existing board layout.
    pub fn from_board(board: Board, rewards: RewardScheme) -> Self {
        let shown = ShownMask::hidden(board.size());
        Self {
            board,
            shown,
            score: 0,
            moves_made: 0,
            game_over: false,
            accumulated_reward: 0.0,
            rewards,
            last_result: None,
        }
    }

    /// Replaces this game with a new board of the given size.
    ///
    /// Counters and the accumulated reward start over; the reward scheme is
    /// kept. On error the current game is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if `size` cannot be tiled with pairs.
    #[instrument(skip(self, rng))]
    pub fn reset(&mut self, size: usize, rng: &mut dyn RandomSource) -> Result<(), ConfigurationError> {
        let board = Board::generate(size, rng).inspect_err(|e| {
            warn!(size, error = %e, "Rejected reset, keeping current game");
        })?;
        *self = Self::from_board(board, self.rewards);
        info!(size, "Game reset");
        Ok(())
    }

    /// Attempts a move given as `"r1 c1 r2 c2"`.
    ///
    /// Never fails: every input maps to a [`MoveResult`], and rejected moves
    /// leave the board as it was. The move's reward is added to the
    /// accumulated reward in every case.
    #[instrument(skip(self), fields(moves_made = self.moves_made))]
    pub fn make_move(&mut self, action: &str) -> MoveOutcome {
        let outcome = match self.validate(action) {
            Ok((first, second)) => self.apply(first, second),
            Err(rejection) => {
                warn!(%rejection, "Move rejected");
                let reward = self.rewards.reward(rejection.result());
                MoveOutcome::rejected(rejection, reward)
            }
        };

        self.accumulated_reward += outcome.reward();
        self.last_result = Some(*outcome.result());
        debug!(
            result = %outcome.result(),
            reward = outcome.reward(),
            accumulated_reward = self.accumulated_reward,
            "Move processed"
        );
        outcome
    }

    /// Checks an action against the current state without mutating it.
    fn validate(&self, action: &str) -> Result<(Position, Position), MoveRejection> {
        if self.game_over {
            return Err(MoveRejection::AlreadyOver);
        }

        let pick: PickAction = action.parse()?;

        let size = self.board.size();
        let mut coords = [0usize; 4];
        for (slot, value) in coords.iter_mut().zip(pick.coordinates()) {
            *slot = usize::try_from(value)
                .ok()
                .filter(|&v| v < size)
                .ok_or(MoveRejection::OutOfRange { value, size })?;
        }

        let first = Position::new(coords[0], coords[1]);
        let second = Position::new(coords[2], coords[3]);
        if first == second {
            return Err(MoveRejection::DuplicateCell(first));
        }
        for pos in [first, second] {
            if self.shown.is_shown(pos) {
                return Err(MoveRejection::AlreadyShown(pos));
            }
        }
        Ok((first, second))
    }

    /// Reveals two validated cells and classifies the result.
    fn apply(&mut self, first: Position, second: Position) -> MoveOutcome {
        // Both positions were bounds-checked by `validate`.
        let a = self.board.get(first).unwrap_or_default();
        let b = self.board.get(second).unwrap_or_default();

        self.shown.set(first, true);
        self.shown.set(second, true);
        self.moves_made += 1;

        let result = if a == b {
            self.score += 1;
            if self.check_game_over() {
                info!(score = self.score, moves = self.moves_made, "Board cleared");
                MoveResult::GameOver
            } else {
                MoveResult::Matching
            }
        } else {
            self.shown.set(first, false);
            self.shown.set(second, false);
            MoveResult::NoMatch
        };

        debug!(%first, %second, a, b, %result, "Cells revealed");
        MoveOutcome::accepted(result, self.rewards.reward(result), (a, b))
    }

    /// Recomputes the game-over flag from the shown mask and returns it.
    pub fn check_game_over(&mut self) -> bool {
        self.game_over = self.shown.all_shown();
        self.game_over
    }

    /// Renders the board as text; see [`crate::render`].
    pub fn render(&self, debug_reveal: bool) -> String {
        crate::render::render(self, debug_reveal)
    }

    /// Captures a serializable copy of the full state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            size: self.board.size(),
            board: self.board.rows(),
            shown: self.shown.rows(),
            score: self.score,
            moves_made: self.moves_made,
            game_over: self.game_over,
            accumulated_reward: self.accumulated_reward,
            last_result: self.last_result,
        }
    }

    /// The board layout.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The face-up mask.
    pub fn shown(&self) -> &ShownMask {
        &self.shown
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Matched pairs so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Accepted moves so far.
    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    /// Whether every cell is face-up.
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Sum of rewards over every move attempt since the last reset.
    pub fn accumulated_reward(&self) -> f64 {
        self.accumulated_reward
    }

    /// The reward scheme in use.
    pub fn rewards(&self) -> &RewardScheme {
        &self.rewards
    }

    /// Result of the most recent move attempt.
    pub fn last_result(&self) -> Option<MoveResult> {
        self.last_result
    }
}

/// Serializable copy of a game's state, for inspection only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board side length.
    pub size: usize,
    /// Labels, row-major.
    pub board: Vec<Vec<u32>>,
    /// Face-up flags, row-major.
    pub shown: Vec<Vec<bool>>,
    /// Matched pairs.
    pub score: u32,
    /// Accepted moves.
    pub moves_made: u32,
    /// Whether every cell is face-up.
    pub game_over: bool,
    /// Sum of rewards since the last reset.
    pub accumulated_reward: f64,
    /// Result of the most recent move attempt.
    pub last_result: Option<MoveResult>,
}
