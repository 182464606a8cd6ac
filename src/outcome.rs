use crate::player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    BlackWin,
    WhiteWin,
    Draw,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::BlackWin => Some(Player::Black),
            GameOutcome::WhiteWin => Some(Player::White),
            GameOutcome::Draw => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, GameOutcome::Draw)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::BlackWin => write!(f, "Black wins!"),
            GameOutcome::WhiteWin => write!(f, "White wins!"),
            GameOutcome::Draw => write!(f, "It's a tie!"),
        }
    }
}
