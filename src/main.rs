//! Strictly Othello - command-line match runner.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_othello::{Color, GameConfig, Turn};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            board_size,
            black,
            white,
            black_strategy,
            white_strategy,
            max_computation_time_ms,
            seed,
            show_moves,
        } => {
            let mut game_config = match config {
                Some(path) => GameConfig::from_file(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => GameConfig::default(),
            };
            if let Some(size) = board_size {
                game_config = game_config.with_board_size(size);
            }
            if let Some(millis) = max_computation_time_ms {
                game_config = game_config.with_max_computation_time_ms(millis);
            }
            if seed.is_some() {
                game_config = game_config.with_seed(seed);
            }
            game_config.override_player(Color::Black, black, black_strategy);
            game_config.override_player(Color::White, white, white_strategy);

            run_match(&game_config, show_moves)
        }
    }
}

/// Plays one match to the end and prints the result.
#[instrument(skip(config))]
fn run_match(config: &GameConfig, show_moves: bool) -> Result<()> {
    let mut game = config.to_builder()?.build(1)?;
    info!(size = game.state().board().size(), "Starting match");

    while !game.is_finished() {
        let turn = game.make_move()?;
        if show_moves {
            match &turn {
                Turn::Played(mov) => println!("{}", mov),
                Turn::Resigned { rejected, reason } => {
                    println!("{} rejected: {}", rejected, reason)
                }
            }
            println!("{}", game.state().board());
        }
    }

    println!("{}", game.state());
    for player in game.state().players() {
        println!(
            "{}: {}",
            player,
            game.state().player_state(player.name())?
        );
    }
    Ok(())
}
