use thiserror::Error;
use tracing::debug;

use crate::{
    arbiter::GameStatus,
    color::Color,
    fen::FenError,
    movement::{Move, ParseMoveError},
    piece::Piece,
    position::Position,
    square::Square,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("invalid move: {0}")]
    Parse(#[from] ParseMoveError),
    #[error("there is no piece on {0}")]
    EmptySquare(Square),
    #[error("{piece} on {square} cannot move, it is {turn}'s turn")]
    NotYourPiece {
        square: Square,
        piece: Piece,
        turn: Color,
    },
    /// Carries the legal destinations from the same origin as corrective feedback.
    #[error("{movement} is an invalid move")]
    Illegal { movement: Move, legal: Vec<Square> },
    #[error("the game is over by {0}")]
    GameOver(GameStatus),
}

/// A game session: the current position plus every earlier one, for undo.
///
/// Only moves confirmed by the arbiter are applied. Moves coming from an
/// external engine go through [`Game::play`] exactly like a human's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    current: Position,
    previous: Vec<Position>,
}
impl Game {
    pub fn new() -> Self {
        Game::from_position(Position::starting())
    }
    pub fn from_position(position: Position) -> Self {
        Game {
            current: position,
            previous: Vec::new(),
        }
    }
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Game::from_position(fen.parse()?))
    }
    pub fn position(&self) -> &Position {
        &self.current
    }
    pub fn status(&self) -> GameStatus {
        self.current.status()
    }
    /// Legal destinations from `square`, for highlighting.
    pub fn legal_destinations(&self, square: Square) -> Vec<Square> {
        self.current.legal_destinations(square)
    }
    /// Parses a 4-character coordinate move and plays it.
    pub fn play(&mut self, text: &str) -> Result<GameStatus, PlayError> {
        let movement = text.parse::<Move>().inspect_err(|err| {
            debug!(text, %err, "rejected unparsable move");
        })?;
        self.play_move(movement)
    }
    /// Plays `movement` if it is legal and returns the resulting status.
    /// On error the game is unchanged.
    pub fn play_move(&mut self, movement: Move) -> Result<GameStatus, PlayError> {
        let status = self.status();
        if status.is_over() {
            return Err(PlayError::GameOver(status));
        }
        let piece = self.current.board[movement.origin]
            .ok_or(PlayError::EmptySquare(movement.origin))?;
        let turn = self.current.turn();
        if piece.color != turn {
            return Err(PlayError::NotYourPiece {
                square: movement.origin,
                piece,
                turn,
            });
        }
        let legal = self.legal_destinations(movement.origin);
        if !legal.contains(&movement.destination) {
            debug!(%movement, fen = %self.current, "rejected illegal move");
            return Err(PlayError::Illegal { movement, legal });
        }
        let next = self.current.play_unchecked(movement);
        self.previous.push(std::mem::replace(&mut self.current, next));
        let status = self.status();
        debug!(%movement, %status, fen = %self.current, "played move");
        Ok(status)
    }
    /// Returns to the position before the last move, or `None` at the start.
    pub fn undo(&mut self) -> Option<&Position> {
        self.current = self.previous.pop()?;
        debug!(fen = %self.current, "undid move");
        Some(&self.current)
    }
    /// Interchange text of every position so far, oldest first.
    pub fn history(&self) -> impl Iterator<Item = String> + '_ {
        self.previous
            .iter()
            .chain(std::iter::once(&self.current))
            .map(Position::to_string)
    }
}
impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
