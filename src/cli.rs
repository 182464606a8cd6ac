//! Line-oriented text session: prompt, read a move, report, repeat.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::error::MoveError;
use crate::game::Game;
use crate::outcome::GameOutcome;
use crate::r#move::Move;

const PROMPT: &str = "Enter your move as 'row col' or 'pass' to end the game: ";

/// Drive `game` from `input` until a player passes or input runs out, then print the
/// final score. Malformed lines re-prompt without consuming a turn.
pub fn run<R: BufRead, W: Write>(
    game: &mut Game,
    mut input: R,
    mut output: W,
) -> io::Result<GameOutcome> {
    let mut line = String::new();

    while !game.is_over() {
        writeln!(output, "{}", game.board())?;
        writeln!(output, "Current Player: {}", game.turn())?;
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("input closed, ending game");
            writeln!(output)?;
            break;
        }

        let move_: Move = match line.parse() {
            Ok(move_) => move_,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        match game.make_move(&move_) {
            Ok(captures) => {
                for capture in &captures {
                    writeln!(output, "{}", capture)?;
                }
            }
            Err(e) => report_rejection(&mut output, &e)?,
        }
    }

    let outcome = game.finish();
    write_summary(game, outcome, &mut output)?;
    Ok(outcome)
}

fn report_rejection<W: Write>(output: &mut W, error: &MoveError) -> io::Result<()> {
    for capture in error.captures() {
        writeln!(output, "{}", capture)?;
    }
    writeln!(output, "{}", error)?;
    writeln!(output, "Move invalid. Try again.")
}

fn write_summary<W: Write>(game: &Game, outcome: GameOutcome, output: &mut W) -> io::Result<()> {
    let score = game.score();
    writeln!(output, "{}", game.board())?;
    writeln!(output, "Final Score:")?;
    writeln!(output, "Black: {}", score.black)?;
    writeln!(output, "White: {}", score.white)?;
    writeln!(output, "{}", outcome)?;
    output.flush()
}
