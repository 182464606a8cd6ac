use tracing::info;

use crate::board::{Board, STANDARD_SIZE};
use crate::engine::{Engine, MoveResult};
use crate::error::MoveError;
use crate::outcome::GameOutcome;
use crate::player::Player;
use crate::r#move::Move;
use crate::score::Score;

/// One session between two local players. Black moves first; a single pass ends the game.
#[derive(Clone, Debug)]
pub struct Game {
    engine: Engine,
    current_player: Player,
    move_count: usize,
    is_over: bool,
    outcome: Option<GameOutcome>,
}

impl Game {
    pub fn new() -> Self {
        Self::with_size(STANDARD_SIZE)
    }

    pub fn with_size(size: usize) -> Self {
        Game {
            engine: Engine::with_size(size),
            current_player: Player::Black,
            move_count: 0,
            is_over: false,
            outcome: None,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    pub fn size(&self) -> usize {
        self.engine.size()
    }

    pub fn turn(&self) -> Player {
        self.current_player
    }

    /// Accepted placements so far.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn score(&self) -> Score {
        self.engine.score()
    }

    /// Play `move_` for the side to move. The turn only passes on an accepted placement.
    /// A pass after the game has ended is a no-op.
    pub fn make_move(&mut self, move_: &Move) -> MoveResult {
        let pos = match move_ {
            Move::Pass => {
                self.finish();
                return Ok(Vec::new());
            }
            Move::Place(pos) => *pos,
        };

        if self.is_over {
            return Err(MoveError::GameOver);
        }

        let captures = self.engine.attempt_move(self.current_player, pos)?;
        self.move_count += 1;
        self.current_player = self.current_player.opposite();
        Ok(captures)
    }

    /// End the game and score the board.
    pub fn finish(&mut self) -> GameOutcome {
        if let Some(outcome) = self.outcome {
            return outcome;
        }
        let score = self.score();
        let outcome = score.outcome();
        info!(black = score.black, white = score.white, %outcome, "game over");
        self.is_over = true;
        self.outcome = Some(outcome);
        outcome
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Game(turn: {}, is_over: {}, outcome: {:?})\n{}",
            self.current_player,
            self.is_over,
            self.outcome,
            self.board()
        )
    }
}
