//! Random games cross-checked against the `chess` crate's move generator.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::{debug, info};

use crate::{arbiter::GameStatus, movement::Move, position::Position, square::Square};

impl From<chess::Square> for Square {
    fn from(value: chess::Square) -> Self {
        Square::new(
            (7 - value.get_rank().to_index()) as u8,
            value.get_file().to_index() as u8,
        )
    }
}
// Promotion pieces collapse, only queens exist on this side.
impl From<chess::ChessMove> for Move {
    fn from(value: chess::ChessMove) -> Self {
        Move::new(value.get_source().into(), value.get_dest().into())
    }
}
impl From<chess::BoardStatus> for GameStatus {
    fn from(value: chess::BoardStatus) -> Self {
        match value {
            chess::BoardStatus::Ongoing => GameStatus::Playing,
            chess::BoardStatus::Stalemate => GameStatus::Stalemate,
            chess::BoardStatus::Checkmate => GameStatus::Checkmate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzConfig {
    pub games: u32,
    /// Plies after which an unfinished game is abandoned.
    pub plies: u32,
    pub seed: u64,
}
impl Default for FuzzConfig {
    fn default() -> Self {
        FuzzConfig {
            games: 100,
            plies: 200,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FuzzReport {
    pub games: u32,
    pub plies: u64,
    pub checkmates: u32,
    pub stalemates: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Divergence {
    #[error("reference rejected `{fen}`: {message}")]
    Reference { fen: String, message: String },
    #[error("found {movement} but it's not a legal move in `{fen}`")]
    Extra { movement: Move, fen: String },
    #[error("{movement} not found in `{fen}`")]
    Missing { movement: Move, fen: String },
    #[error("status is {status} but should be {expected} in `{fen}`")]
    Status {
        status: GameStatus,
        expected: GameStatus,
        fen: String,
    },
}

/// Compares one position's moves and status with the reference.
fn cross_check(position: &Position, moves: &[Move]) -> Result<GameStatus, Divergence> {
    let fen = position.to_string();
    let reference = fen.parse::<chess::Board>().map_err(|err| Divergence::Reference {
        fen: fen.clone(),
        message: format!("{err:?}"),
    })?;
    let moves: FxHashSet<Move> = moves.iter().copied().collect();
    let expected_moves: FxHashSet<Move> = chess::MoveGen::new_legal(&reference)
        .map(Into::into)
        .collect();
    if let Some(movement) = moves.difference(&expected_moves).next() {
        return Err(Divergence::Extra {
            movement: *movement,
            fen,
        });
    }
    if let Some(movement) = expected_moves.difference(&moves).next() {
        return Err(Divergence::Missing {
            movement: *movement,
            fen,
        });
    }
    let status = position.status();
    let expected = reference.status().into();
    if status != expected {
        return Err(Divergence::Status {
            status,
            expected,
            fen,
        });
    }
    Ok(status)
}

/// Plays `config.games` random games and stops at the first divergence.
pub fn fuzz(config: &FuzzConfig) -> Result<FuzzReport, Divergence> {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut report = FuzzReport::default();
    for game in 0..config.games {
        let mut position = Position::starting();
        for _ in 0..config.plies {
            let moves = position.legal_moves();
            match cross_check(&position, &moves)? {
                GameStatus::Playing => {}
                GameStatus::Checkmate => {
                    report.checkmates += 1;
                    break;
                }
                GameStatus::Stalemate => {
                    report.stalemates += 1;
                    break;
                }
            }
            let movement = moves[rng.random_range(0..moves.len())];
            position = position.play_unchecked(movement);
            report.plies += 1;
        }
        debug!(game, fen = %position, "finished game");
        report.games += 1;
    }
    info!(?report, "fuzzing agreed with the reference");
    Ok(report)
}
