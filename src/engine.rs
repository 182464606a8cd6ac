//! Capture-aware stone placement.
//!
//! A move attempt goes Proposed -> Placed -> CapturesResolved -> Accepted or Rejected.
//! Opponent groups left without liberties are removed before the mover's own group
//! is checked, so a capturing move always has at least the captured point as a liberty.

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, trace};

use crate::board::{Board, STANDARD_SIZE};
use crate::cell::Cell;
use crate::error::MoveError;
use crate::group::{group, has_liberties, liberties, Group};
use crate::player::Player;
use crate::position::Position;
use crate::score::{self, Score};

/// One opponent stone removed by a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Capture {
    pub color: Player,
    pub position: Position,
}

impl fmt::Display for Capture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Captured {} stone at {}",
            self.color.to_char(),
            self.position
        )
    }
}

/// `Ok` carries the captures made by an accepted move, in row-major order.
pub type MoveResult = Result<Vec<Capture>, MoveError>;

/// Sole owner of the board for one game.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    board: Board,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_size(STANDARD_SIZE)
    }

    pub fn with_size(size: usize) -> Self {
        Engine {
            board: Board::new(size),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn cell_at(&self, pos: &Position) -> Result<Cell, MoveError> {
        self.board.cell_at(pos)
    }

    pub fn group_at(&self, pos: &Position) -> Option<Group> {
        group(&self.board, pos)
    }

    pub fn liberties_at(&self, pos: &Position) -> Option<HashSet<Position>> {
        self.group_at(pos).map(|g| liberties(&self.board, &g))
    }

    pub fn score(&self) -> Score {
        score::score(&self.board)
    }

    /// Place a stone for `player`, resolving captures and rejecting suicide.
    ///
    /// Out-of-bounds and occupied targets leave the board untouched. On suicide the
    /// placed stone is taken back but any captures already applied remain.
    #[cfg_attr(feature = "hotpath", hotpath::measure)]
    pub fn attempt_move(&mut self, player: Player, pos: Position) -> MoveResult {
        trace!(%player, %pos, "proposed");
        if !self.board.cell_at(&pos)?.is_empty() {
            debug!(%player, %pos, "rejected: occupied");
            return Err(MoveError::CellOccupied { position: pos });
        }

        self.board.set_cell(&pos, Cell::stone(player))?;
        trace!(%player, %pos, "placed");

        let captures = self.resolve_captures(player.opposite(), &pos)?;
        trace!(%player, %pos, captured = captures.len(), "captures resolved");

        let alive = group(&self.board, &pos).is_some_and(|own| has_liberties(&self.board, &own));
        if !alive {
            self.board.set_cell(&pos, Cell::Empty)?;
            debug!(%player, %pos, captured = captures.len(), "rejected: suicide");
            return Err(MoveError::Suicide {
                position: pos,
                captures,
            });
        }

        debug!(%player, %pos, captured = captures.len(), "accepted");
        Ok(captures)
    }

    /// Remove every `opponent` group adjacent to `pos` that has no liberties left.
    fn resolve_captures(
        &mut self,
        opponent: Player,
        pos: &Position,
    ) -> Result<Vec<Capture>, MoveError> {
        let mut doomed: HashSet<Position> = HashSet::new();

        for neighbor in self.board.neighbors(pos) {
            if doomed.contains(&neighbor) || self.board.get_piece(&neighbor) != Some(opponent) {
                continue;
            }
            if let Some(g) = group(&self.board, &neighbor) {
                if !has_liberties(&self.board, &g) {
                    doomed.extend(g.stones().iter().copied());
                }
            }
        }

        let mut doomed: Vec<Position> = doomed.into_iter().collect();
        doomed.sort();

        let mut captures = Vec::with_capacity(doomed.len());
        for position in doomed {
            self.board.set_cell(&position, Cell::Empty)?;
            debug!(color = %opponent, %position, "captured");
            captures.push(Capture {
                color: opponent,
                position,
            });
        }
        Ok(captures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::GameOutcome;
    use rand::prelude::IndexedRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn play(engine: &mut Engine, moves: &[(Player, i32, i32)]) {
        for &(player, row, col) in moves {
            engine
                .attempt_move(player, Position::new(row, col))
                .expect("setup move should be legal");
        }
    }

    fn assert_every_group_breathes(engine: &Engine) {
        for (pos, _) in engine.board().stones() {
            let libs = engine.liberties_at(&pos).expect("stone present");
            assert!(!libs.is_empty(), "group at {} has no liberties", pos);
        }
    }

    #[test]
    fn test_corner_stone_has_two_liberties() {
        let mut engine = Engine::new();
        let pos = Position::new(0, 0);
        assert_eq!(engine.attempt_move(Player::Black, pos), Ok(vec![]));
        assert_eq!(engine.cell_at(&pos), Ok(Cell::Black));
        assert_eq!(engine.liberties_at(&pos).map(|l| l.len()), Some(2));
    }

    #[test]
    fn test_surrounded_stone_is_captured() {
        let mut engine = Engine::new();
        play(
            &mut engine,
            &[
                (Player::White, 4, 4),
                (Player::Black, 3, 4),
                (Player::Black, 5, 4),
                (Player::Black, 4, 3),
            ],
        );
        assert_eq!(engine.liberties_at(&Position::new(4, 4)).map(|l| l.len()), Some(1));

        let captures = engine
            .attempt_move(Player::Black, Position::new(4, 5))
            .expect("capturing move is legal");
        assert_eq!(
            captures,
            vec![Capture {
                color: Player::White,
                position: Position::new(4, 4),
            }]
        );
        assert_eq!(engine.cell_at(&Position::new(4, 4)), Ok(Cell::Empty));
        assert_eq!(captures[0].to_string(), "Captured W stone at (5, 5)");
        assert_every_group_breathes(&engine);
    }

    #[test]
    fn test_suicide_is_rejected_and_reverted() {
        let mut engine = Engine::new();
        play(
            &mut engine,
            &[
                (Player::Black, 3, 4),
                (Player::Black, 5, 4),
                (Player::Black, 4, 3),
                (Player::Black, 4, 5),
            ],
        );
        let before = engine.board().clone();

        let target = Position::new(4, 4);
        let result = engine.attempt_move(Player::White, target);
        assert_eq!(
            result,
            Err(MoveError::Suicide {
                position: target,
                captures: vec![],
            })
        );
        assert_eq!(engine.cell_at(&target), Ok(Cell::Empty));
        assert_eq!(engine.board(), &before);
        assert_eq!(
            result.map_err(|e| e.to_string()),
            Err("Move at (5, 5) is suicide. Move rejected.".to_string())
        );
    }

    #[test]
    fn test_corner_suicide() {
        let mut engine = Engine::new();
        play(&mut engine, &[(Player::Black, 0, 1), (Player::Black, 1, 0)]);
        let result = engine.attempt_move(Player::White, Position::new(0, 0));
        assert!(matches!(result, Err(MoveError::Suicide { .. })));
        assert_eq!(engine.cell_at(&Position::new(0, 0)), Ok(Cell::Empty));
    }

    #[test]
    fn test_multi_stone_suicide_keeps_existing_stones() {
        let mut engine = Engine::new();
        play(
            &mut engine,
            &[
                (Player::White, 1, 0),
                (Player::Black, 0, 0),
                (Player::White, 1, 1),
                (Player::White, 0, 2),
            ],
        );
        let result = engine.attempt_move(Player::Black, Position::new(0, 1));
        assert!(matches!(result, Err(MoveError::Suicide { .. })));
        assert_eq!(engine.cell_at(&Position::new(0, 1)), Ok(Cell::Empty));
        assert_eq!(engine.cell_at(&Position::new(0, 0)), Ok(Cell::Black));
    }

    #[test]
    fn test_capture_grants_liberty_to_otherwise_dead_stone() {
        // . W B
        // W B .
        // B . .
        let mut engine = Engine::new();
        play(
            &mut engine,
            &[
                (Player::White, 0, 1),
                (Player::White, 1, 0),
                (Player::Black, 0, 2),
                (Player::Black, 1, 1),
                (Player::Black, 2, 0),
            ],
        );

        // (0,0) has no empty neighbor before captures are resolved.
        let captures = engine
            .attempt_move(Player::Black, Position::new(0, 0))
            .expect("capture makes the move legal");
        let positions: Vec<Position> = captures.iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![Position::new(0, 1), Position::new(1, 0)]);
        assert!(captures.iter().all(|c| c.color == Player::White));
        assert_eq!(engine.cell_at(&Position::new(0, 0)), Ok(Cell::Black));
        assert_eq!(engine.liberties_at(&Position::new(0, 0)).map(|l| l.len()), Some(2));
        assert_every_group_breathes(&engine);
    }

    #[test]
    fn test_shared_group_is_captured_once() {
        // W W B
        // W . .
        // B . .
        let mut engine = Engine::new();
        play(
            &mut engine,
            &[
                (Player::White, 0, 0),
                (Player::White, 0, 1),
                (Player::White, 1, 0),
                (Player::Black, 0, 2),
                (Player::Black, 2, 0),
            ],
        );

        // (1,1) touches two stones of the same white group.
        let captures = engine
            .attempt_move(Player::Black, Position::new(1, 1))
            .expect("capturing move is legal");
        assert_eq!(captures.len(), 3);
        let unique: HashSet<Position> = captures.iter().map(|c| c.position).collect();
        assert_eq!(unique.len(), 3);
        assert_eq!(engine.score(), Score { black: 3, white: 0 });
    }

    #[test]
    fn test_group_with_liberty_survives() {
        let mut engine = Engine::new();
        play(
            &mut engine,
            &[
                (Player::White, 0, 0),
                (Player::White, 0, 1),
                (Player::Black, 1, 0),
            ],
        );
        let captures = engine
            .attempt_move(Player::Black, Position::new(1, 1))
            .expect("legal");
        assert!(captures.is_empty());
        assert_eq!(engine.cell_at(&Position::new(0, 0)), Ok(Cell::White));
    }

    #[test]
    fn test_occupied_and_out_of_bounds_do_not_mutate() {
        let mut engine = Engine::new();
        play(&mut engine, &[(Player::Black, 2, 2)]);
        let before = engine.board().clone();

        let occupied = Position::new(2, 2);
        assert_eq!(
            engine.attempt_move(Player::White, occupied),
            Err(MoveError::CellOccupied { position: occupied })
        );
        for pos in [Position::new(-1, 0), Position::new(0, 9), Position::new(9, -1)] {
            assert_eq!(
                engine.attempt_move(Player::White, pos),
                Err(MoveError::OutOfBounds { position: pos })
            );
        }
        assert_eq!(engine.board(), &before);
    }

    #[test]
    fn test_score_and_winner() {
        let mut engine = Engine::new();
        play(
            &mut engine,
            &[
                (Player::Black, 0, 0),
                (Player::Black, 0, 2),
                (Player::Black, 2, 0),
                (Player::Black, 4, 4),
                (Player::Black, 6, 6),
                (Player::White, 8, 8),
                (Player::White, 8, 6),
                (Player::White, 6, 8),
            ],
        );
        let score = engine.score();
        assert_eq!(<(usize, usize)>::from(score), (5, 3));
        assert_eq!(score.outcome(), GameOutcome::BlackWin);
    }

    #[test]
    fn test_random_games_keep_every_group_alive() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut engine = Engine::new();
            let mut player = Player::Black;
            for _ in 0..120 {
                let empties: Vec<Position> = (0..81)
                    .map(|idx| Position::from_index(idx, 9))
                    .filter(|pos| matches!(engine.cell_at(pos), Ok(Cell::Empty)))
                    .collect();
                let Some(&pos) = empties.choose(&mut rng) else {
                    break;
                };
                let before = engine.board().clone();
                match engine.attempt_move(player, pos) {
                    Ok(_) => {
                        assert_every_group_breathes(&engine);
                        player = player.opposite();
                    }
                    Err(MoveError::Suicide { captures, .. }) => {
                        assert!(captures.is_empty());
                        assert_eq!(engine.board(), &before);
                    }
                    Err(e) => panic!("unexpected rejection: {}", e),
                }
            }
        }
    }
}
