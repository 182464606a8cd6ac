use thiserror::Error;

use crate::engine::Capture;
use crate::position::Position;

/// Why the engine refused a placement.
///
/// Every variant is an ordinary rejection; the board is left valid in all cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Position out of bounds. Try again.")]
    OutOfBounds { position: Position },

    #[error("Position already occupied. Try again.")]
    CellOccupied { position: Position },

    /// The placed stone was removed again, but `captures` made on the way stay removed.
    #[error("Move at {position} is suicide. Move rejected.")]
    Suicide {
        position: Position,
        captures: Vec<Capture>,
    },

    #[error("The game is already over.")]
    GameOver,
}

impl MoveError {
    pub fn position(&self) -> Option<Position> {
        match self {
            MoveError::OutOfBounds { position }
            | MoveError::CellOccupied { position }
            | MoveError::Suicide { position, .. } => Some(*position),
            MoveError::GameOver => None,
        }
    }

    /// Opponent stones removed before the rejection was decided.
    pub fn captures(&self) -> &[Capture] {
        match self {
            MoveError::Suicide { captures, .. } => captures,
            _ => &[],
        }
    }
}

/// A line of player input that is neither `pass` nor two integers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid input. Please enter row and column numbers separated by a space.")]
    TokenCount { found: usize },

    #[error("Invalid input. Please enter numeric row and column numbers.")]
    NotANumber { token: String },
}
