#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

use anyhow::{Context, bail};
use arbiter::{
    Game, Move, Position, Square,
    fuzz::{FuzzConfig, fuzz},
    perft::{divide, perft},
};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "arbiter")]
#[command(about = "Check chess moves and positions given as FEN text")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List legal moves for the side to move, or for one square
    Moves { fen: String, square: Option<String> },
    /// Print whether the game goes on, or ended by checkmate or stalemate
    Status { fen: String },
    /// Validate and play a move, then print the resulting position
    Apply {
        fen: String,
        #[arg(value_name = "MOVE")]
        movement: String,
    },
    /// Count legal move paths
    Perft {
        fen: String,
        depth: u32,
        /// Print the count below each root move
        #[arg(long)]
        divide: bool,
    },
    /// Play random games and compare every position against the `chess` crate
    Fuzz {
        #[arg(long, default_value_t = FuzzConfig::default().games)]
        games: u32,
        #[arg(long, default_value_t = FuzzConfig::default().plies)]
        plies: u32,
        #[arg(long, default_value_t = FuzzConfig::default().seed)]
        seed: u64,
    },
}

fn parse_position(fen: &str) -> anyhow::Result<Position> {
    fen.parse::<Position>()
        .with_context(|| format!("cannot read position `{fen}`"))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    match args.command {
        Command::Moves { fen, square } => {
            let position = parse_position(&fen)?;
            let moves: Vec<Move> = match square {
                Some(square) => {
                    let origin: Square = square
                        .parse()
                        .with_context(|| format!("cannot read square `{square}`"))?;
                    position
                        .legal_destinations(origin)
                        .into_iter()
                        .map(|destination| Move::new(origin, destination))
                        .collect()
                }
                None => position.legal_moves(),
            };
            for movement in moves {
                println!("{movement}");
            }
        }
        Command::Status { fen } => {
            let position = parse_position(&fen)?;
            println!("{}", position.status());
        }
        Command::Apply { fen, movement } => {
            let mut game = Game::from_position(parse_position(&fen)?);
            let status = game
                .play(&movement)
                .with_context(|| format!("cannot play `{movement}`"))?;
            println!("{}", game.position());
            if status.is_over() {
                println!("{status}");
            }
        }
        Command::Perft { fen, depth, divide: split } => {
            let position = parse_position(&fen)?;
            if split {
                let mut total = 0;
                for (movement, nodes) in divide(&position, depth) {
                    println!("{movement}: {nodes}");
                    total += nodes;
                }
                println!();
                println!("{total}");
            } else {
                println!("{}", perft(&position, depth));
            }
        }
        Command::Fuzz { games, plies, seed } => {
            if games == 0 {
                bail!("at least one game is needed");
            }
            let report = fuzz(&FuzzConfig { games, plies, seed })?;
            println!(
                "{} games, {} plies, {} checkmates, {} stalemates",
                report.games, report.plies, report.checkmates, report.stalemates
            );
        }
    }
    Ok(())
}
