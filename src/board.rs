use std::collections::HashSet;
use std::fmt;

use crate::cell::Cell;
use crate::error::MoveError;
use crate::player::Player;
use crate::position::Position;

pub const STANDARD_SIZE: usize = 9;
pub const MIN_SIZE: usize = 2;
pub const MAX_SIZE: usize = 25;

const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Square grid of cells. Every position in `0..size` on both axes is defined.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Vec<Cell>,
    size: usize,
}

impl Board {
    pub fn new(size: usize) -> Self {
        debug_assert!((MIN_SIZE..=MAX_SIZE).contains(&size));
        Board {
            cells: vec![Cell::Empty; size * size],
            size,
        }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_SIZE)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.is_valid(self.size)
    }

    pub fn cell_at(&self, pos: &Position) -> Result<Cell, MoveError> {
        if !self.contains(pos) {
            return Err(MoveError::OutOfBounds { position: *pos });
        }
        Ok(self.cells[pos.to_index(self.size)])
    }

    /// Direct write with no rule checking. Only the engine mutates boards.
    pub(crate) fn set_cell(&mut self, pos: &Position, cell: Cell) -> Result<(), MoveError> {
        if !self.contains(pos) {
            return Err(MoveError::OutOfBounds { position: *pos });
        }
        self.cells[pos.to_index(self.size)] = cell;
        Ok(())
    }

    /// Owner of the stone at `pos`; `None` for empty or off-board positions.
    pub fn get_piece(&self, pos: &Position) -> Option<Player> {
        self.cell_at(pos).ok().and_then(|cell| cell.player())
    }

    /// Distinct on-board orthogonal neighbors: 2 in a corner, 3 on an edge, 4 inside.
    pub fn neighbors(&self, pos: &Position) -> HashSet<Position> {
        if !self.contains(pos) {
            return HashSet::new();
        }
        DIRECTIONS
            .iter()
            .map(|&(d_row, d_col)| pos.offset(d_row, d_col))
            .filter(|neighbor| self.contains(neighbor))
            .collect()
    }

    /// Every occupied position with its owner, in row-major order.
    pub fn stones(&self) -> impl Iterator<Item = (Position, Player)> + '_ {
        self.cells.iter().enumerate().filter_map(|(idx, cell)| {
            cell.player()
                .map(|player| (Position::from_index(idx, self.size), player))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Column numbers
        write!(f, "  ")?;
        for col in 1..=self.size {
            write!(f, "{} ", col)?;
        }
        writeln!(f)?;

        for (row, cells) in self.cells.chunks(self.size).enumerate() {
            write!(f, "{} ", row + 1)?;
            for cell in cells {
                write!(f, "{} ", cell.to_char())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
