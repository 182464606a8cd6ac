//! Connected groups of stones and their liberties.
//!
//! Groups are never cached; each call recomputes from the current board.

use std::collections::HashSet;

use crate::board::Board;
use crate::player::Player;
use crate::position::Position;

/// A maximal set of same-colored stones joined by orthogonal adjacency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    color: Player,
    stones: HashSet<Position>,
}

impl Group {
    pub fn color(&self) -> Player {
        self.color
    }

    pub fn stones(&self) -> &HashSet<Position> {
        &self.stones
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.stones.contains(pos)
    }

    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }
}

/// Group containing the stone at `start`, or `None` when `start` holds no stone.
#[cfg_attr(feature = "hotpath", hotpath::measure)]
pub fn group(board: &Board, start: &Position) -> Option<Group> {
    let color = board.get_piece(start)?;
    let mut stones = HashSet::new();
    let mut stack = vec![*start];

    while let Some(pos) = stack.pop() {
        if !stones.insert(pos) {
            continue;
        }

        for neighbor in board.neighbors(&pos) {
            if !stones.contains(&neighbor) && board.get_piece(&neighbor) == Some(color) {
                stack.push(neighbor);
            }
        }
    }

    Some(Group { color, stones })
}

/// Distinct empty positions adjacent to any stone of `group`.
#[cfg_attr(feature = "hotpath", hotpath::measure)]
pub fn liberties(board: &Board, group: &Group) -> HashSet<Position> {
    group
        .stones
        .iter()
        .flat_map(|pos| board.neighbors(pos))
        .filter(|neighbor| matches!(board.cell_at(neighbor), Ok(cell) if cell.is_empty()))
        .collect()
}

/// Short-circuits on the first liberty found.
pub fn has_liberties(board: &Board, group: &Group) -> bool {
    group.stones.iter().any(|pos| {
        board
            .neighbors(pos)
            .iter()
            .any(|neighbor| matches!(board.cell_at(neighbor), Ok(cell) if cell.is_empty()))
    })
}
