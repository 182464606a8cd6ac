use crate::board::Board;
use crate::outcome::GameOutcome;
use crate::player::Player;

/// Stones on the board per color. Territory is not counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    pub fn for_player(&self, player: Player) -> usize {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// The strictly higher count wins; equal counts are a draw.
    pub fn outcome(&self) -> GameOutcome {
        use std::cmp::Ordering;

        match self.black.cmp(&self.white) {
            Ordering::Greater => GameOutcome::BlackWin,
            Ordering::Less => GameOutcome::WhiteWin,
            Ordering::Equal => GameOutcome::Draw,
        }
    }
}

impl From<Score> for (usize, usize) {
    fn from(score: Score) -> Self {
        (score.black, score.white)
    }
}

pub fn score(board: &Board) -> Score {
    board
        .stones()
        .fold(Score::default(), |mut score, (_, player)| {
            match player {
                Player::Black => score.black += 1,
                Player::White => score.white += 1,
            }
            score
        })
}
