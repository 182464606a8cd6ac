use std::str::FromStr;

use crate::error::InputError;
use crate::position::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Place(Position),
    Pass,
}

impl Move {
    pub fn place(row: i32, col: i32) -> Self {
        Move::Place(Position::new(row, col))
    }

    pub fn pass() -> Self {
        Move::Pass
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            Move::Place(pos) => Some(*pos),
            Move::Pass => None,
        }
    }
}

/// Parses one line of player input: `pass` (any case) or 1-indexed `row col`.
///
/// Coordinates are converted to 0-indexed but not bounds-checked; that is the engine's job.
impl FromStr for Move {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        if input == "pass" {
            return Ok(Move::Pass);
        }

        let tokens: Vec<&str> = input.split_whitespace().collect();
        let (row, col) = match tokens.as_slice() {
            [row, col] => (*row, *col),
            _ => {
                return Err(InputError::TokenCount {
                    found: tokens.len(),
                })
            }
        };

        let parse = |token: &str| {
            token
                .parse::<i32>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .ok_or_else(|| InputError::NotANumber {
                    token: token.to_string(),
                })
        };
        Ok(Move::place(parse(row)?, parse(col)?))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place(pos) => write!(f, "Place{}", pos),
            Move::Pass => write!(f, "Pass"),
        }
    }
}
