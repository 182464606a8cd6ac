//! Plays seeded random games to exercise the capture engine under a profiler.
//!
//! `cargo run --release --bin profile --features hotpath`

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use stone_capture::cell::Cell;
use stone_capture::engine::Engine;
use stone_capture::player::Player;
use stone_capture::position::Position;

const GAMES: u64 = 2_000;
const MOVES_PER_GAME: usize = 150;

fn play_random_game(seed: u64) -> (usize, usize) {
    let mut engine = Engine::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut player = Player::Black;
    let size = engine.size();

    for _ in 0..MOVES_PER_GAME {
        let empties: Vec<Position> = (0..size * size)
            .map(|idx| Position::from_index(idx, size))
            .filter(|pos| matches!(engine.cell_at(pos), Ok(Cell::Empty)))
            .collect();
        let Some(&pos) = empties.choose(&mut rng) else {
            break;
        };
        if engine.attempt_move(player, pos).is_ok() {
            player = player.opposite();
        }
    }

    engine.score().into()
}

#[cfg_attr(feature = "hotpath", hotpath::main)]
fn main() {
    let mut black_wins = 0;
    let mut white_wins = 0;
    for seed in 0..GAMES {
        let (black, white) = play_random_game(seed);
        if black > white {
            black_wins += 1;
        } else if white > black {
            white_wins += 1;
        }
    }
    println!(
        "{} games: black {} / white {} / tied {}",
        GAMES,
        black_wins,
        white_wins,
        GAMES - black_wins - white_wins
    );
}
