use anyhow::{bail, Context, Result};
use clap::Parser;
use stone_capture::board::{MAX_SIZE, MIN_SIZE, STANDARD_SIZE};
use stone_capture::cli;
use stone_capture::game::Game;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Two-player Go on a single terminal", long_about = None)]
struct Args {
    /// Board size (N for an N x N board)
    #[arg(short, long, default_value_t = STANDARD_SIZE)]
    size: usize,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if !(MIN_SIZE..=MAX_SIZE).contains(&args.size) {
        bail!(
            "Invalid board size {}. Must be between {} and {}.",
            args.size,
            MIN_SIZE,
            MAX_SIZE
        );
    }

    info!(size = args.size, "starting game");
    let mut game = Game::with_size(args.size);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    cli::run(&mut game, stdin.lock(), stdout.lock()).context("terminal session failed")?;

    Ok(())
}
