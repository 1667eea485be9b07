//! Board grid and shown mask.

use crate::error::ConfigurationError;
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Largest accepted side length.
pub const MAX_BOARD_SIZE: usize = 64;

/// A cell coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Position {
    /// Creates a new position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square grid of pair labels, stored row-major.
///
/// Every label in `1..=size²/2` appears exactly twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
}

impl Board {
    /// Generates a shuffled board of the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if `size` is zero, exceeds
    /// [`MAX_BOARD_SIZE`], or `size²` is odd.
    #[instrument(skip(rng))]
    pub fn generate(size: usize, rng: &mut dyn RandomSource) -> Result<Self, ConfigurationError> {
        if size == 0 {
            return Err(ConfigurationError::new(size, "Board size must be positive"));
        }
        let total = checked_area(size)?;
        if total % 2 != 0 {
            return Err(ConfigurationError::new(
                size,
                format!("Board size must be even for pairs (got {})", size),
            ));
        }

        let pairs = pair_count(size, total)?;
        let mut cells: Vec<u32> = (1..=pairs).chain(1..=pairs).collect();
        rng.shuffle(&mut cells);

        debug!(size, pairs, "Generated board");
        Ok(Self { size, cells })
    }

    /// Builds a board from explicit rows.
    ///
    /// Used to replay a known layout. Rows must form a square of even side
    /// where every label appears exactly twice.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the rows are not a valid pairing.
    #[instrument(skip(rows))]
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, ConfigurationError> {
        let size = rows.len();
        if size == 0 || size % 2 != 0 {
            return Err(ConfigurationError::new(size, "Board size must be positive and even"));
        }
        checked_area(size)?;
        if rows.iter().any(|row| row.len() != size) {
            return Err(ConfigurationError::new(size, "Board rows must form a square"));
        }

        let cells: Vec<u32> = rows.into_iter().flatten().collect();
        let mut sorted = cells.clone();
        sorted.sort_unstable();
        let pairs = pair_count(size, cells.len())?;
        let expected: Vec<u32> = (1..=pairs).flat_map(|v| [v, v]).collect();
        if sorted != expected {
            return Err(ConfigurationError::new(
                size,
                format!("Board must hold labels 1..={} exactly twice each", pairs),
            ));
        }

        Ok(Self { size, cells })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Label at the given position, or `None` when out of bounds.
    pub fn get(&self, pos: Position) -> Option<u32> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Highest label on the board.
    pub fn max_label(&self) -> u32 {
        (self.cells.len() / 2) as u32
    }

    /// Labels as nested rows.
    pub fn rows(&self) -> Vec<Vec<u32>> {
        self.cells.chunks(self.size).map(<[u32]>::to_vec).collect()
    }

    /// Row-major index for a position within bounds.
    pub(crate) fn index(&self, pos: Position) -> Option<usize> {
        (pos.row < self.size && pos.col < self.size).then(|| pos.row * self.size + pos.col)
    }
}

/// Number of cells on a side-`size` board, bounded by [`MAX_BOARD_SIZE`].
fn checked_area(size: usize) -> Result<usize, ConfigurationError> {
    if size > MAX_BOARD_SIZE {
        return Err(ConfigurationError::new(
            size,
            format!("Board size must be at most {} (got {})", MAX_BOARD_SIZE, size),
        ));
    }
    size.checked_mul(size)
        .ok_or_else(|| ConfigurationError::new(size, "Board size overflows the cell count"))
}

fn pair_count(size: usize, total: usize) -> Result<u32, ConfigurationError> {
    u32::try_from(total / 2)
        .map_err(|_| ConfigurationError::new(size, "Board holds too many pairs to label"))
}

/// Face-up flags for every cell of a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShownMask {
    size: usize,
    cells: Vec<bool>,
}

impl ShownMask {
    /// Creates an all-hidden mask for a board of validated size.
    pub(crate) fn hidden(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Whether the cell is face-up. Out-of-bounds cells are never shown.
    pub fn is_shown(&self, pos: Position) -> bool {
        self.index(pos).is_some_and(|i| self.cells[i])
    }

    /// Sets the face-up flag of an in-bounds cell.
    pub(crate) fn set(&mut self, pos: Position, shown: bool) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = shown;
        }
    }

    /// Number of face-up cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&shown| shown).count()
    }

    /// True when every cell is face-up.
    pub fn all_shown(&self) -> bool {
        self.cells.iter().all(|&shown| shown)
    }

    /// Flags as nested rows.
    pub fn rows(&self) -> Vec<Vec<bool>> {
        self.cells.chunks(self.size).map(<[bool]>::to_vec).collect()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.row < self.size && pos.col < self.size).then(|| pos.row * self.size + pos.col)
    }
}
