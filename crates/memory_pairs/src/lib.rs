//! Memory pairs game engine.
//!
//! A square board hides pairs of labels. Each move names two face-down
//! cells as `"r1 c1 r2 c2"`; matching pairs stay face-up, others are turned
//! back over. The game ends when every cell is face-up.
//!
//! # Example
//!
//! ```
//! use memory_pairs::{MemoryGame, MoveResult, SeededRng};
//!
//! let mut rng = SeededRng::new(42);
//! let mut game = MemoryGame::new(4, &mut rng).unwrap();
//!
//! let outcome = game.make_move("0 0 0 0");
//! assert_eq!(*outcome.result(), MoveResult::Invalid);
//! assert_eq!(game.accumulated_reward(), -1.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod game;
mod outcome;
pub mod render;
mod reward;
mod rng;

pub use action::PickAction;
pub use board::{Board, MAX_BOARD_SIZE, Position, ShownMask};
pub use error::ConfigurationError;
pub use game::{DEFAULT_BOARD_SIZE, GameSnapshot, MemoryGame};
pub use outcome::{MoveOutcome, MoveRejection, MoveResult};
pub use reward::RewardScheme;
pub use rng::{RandomSource, SeededRng};
