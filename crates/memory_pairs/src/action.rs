//! Parsing of move action strings.
//!
//! An action names two cells as `"r1 c1 r2 c2"`, whitespace separated.
//! Parsing only checks shape; bounds are checked against the live board.

use crate::outcome::MoveRejection;
use std::str::FromStr;

/// Raw coordinates of a two-cell pick, before bounds checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickAction {
    /// Row and column of the first pick.
    pub first: (i64, i64),
    /// Row and column of the second pick.
    pub second: (i64, i64),
}

impl PickAction {
    /// The four coordinates in input order.
    pub fn coordinates(&self) -> [i64; 4] {
        [self.first.0, self.first.1, self.second.0, self.second.1]
    }
}

impl FromStr for PickAction {
    type Err = MoveRejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || MoveRejection::Malformed {
            input: s.to_string(),
        };

        let parts: Vec<&str> = s.split_whitespace().collect();
        let [r1, c1, r2, c2] = parts.as_slice() else {
            return Err(malformed());
        };

        let mut coords = [0i64; 4];
        for (slot, token) in coords.iter_mut().zip([r1, c1, r2, c2]) {
            *slot = token.parse().map_err(|_| malformed())?;
        }

        Ok(Self {
            first: (coords[0], coords[1]),
            second: (coords[2], coords[3]),
        })
    }
}
