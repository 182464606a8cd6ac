pub mod board;
pub mod cell;
pub mod cli;
pub mod engine;
pub mod error;
pub mod game;
pub mod group;
pub mod r#move;
pub mod outcome;
pub mod player;
pub mod position;
pub mod score;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn stone_capture(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use player::Player;
    use python_bindings::*;
    m.add_class::<PyGame>()?;
    m.add("BLACK", Player::Black as i8)?;
    m.add("WHITE", Player::White as i8)?;
    m.add("STANDARD_SIZE", board::STANDARD_SIZE)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use crate::board::{MAX_SIZE, MIN_SIZE};
    use crate::game::Game;
    use crate::position::Position;
    use crate::r#move::Move;

    #[pyclass(name = "Game")]
    pub struct PyGame {
        game: Game,
    }

    #[pymethods]
    impl PyGame {
        #[new]
        #[pyo3(signature = (size = board::STANDARD_SIZE))]
        pub fn new(size: usize) -> PyResult<Self> {
            if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
                return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                    "Board size must be between {} and {}",
                    MIN_SIZE, MAX_SIZE
                )));
            }
            Ok(PyGame {
                game: Game::with_size(size),
            })
        }

        pub fn size(&self) -> usize {
            self.game.size()
        }

        pub fn turn(&self) -> i8 {
            self.game.turn() as i8
        }

        pub fn is_over(&self) -> bool {
            self.game.is_over()
        }

        /// 0 for empty, otherwise the owner as `BLACK`/`WHITE`.
        pub fn cell_at(&self, row: i32, col: i32) -> PyResult<i8> {
            self.game
                .engine()
                .cell_at(&Position::new(row, col))
                .map(|cell| cell.player().map_or(0, |p| p as i8))
                .map_err(|e| PyErr::new::<pyo3::exceptions::PyIndexError, _>(e.to_string()))
        }

        /// Returns the `(row, col)` of every captured stone.
        pub fn attempt_move(&mut self, row: i32, col: i32) -> PyResult<Vec<(i32, i32)>> {
            self.game
                .make_move(&Move::place(row, col))
                .map(|captures| {
                    captures
                        .iter()
                        .map(|c| (c.position.row, c.position.col))
                        .collect()
                })
                .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
        }

        pub fn pass_move(&mut self) {
            self.game.finish();
        }

        pub fn score(&self) -> (usize, usize) {
            self.game.score().into()
        }

        pub fn winner(&self) -> Option<i8> {
            self.game
                .outcome()
                .and_then(|o| o.winner())
                .map(|player| player as i8)
        }

        pub fn __str__(&self) -> String {
            self.game.board().to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Game(size={}, turn={:?}, over={})",
                self.game.size(),
                self.game.turn(),
                self.game.is_over()
            )
        }
    }
}
