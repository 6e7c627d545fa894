use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::{
    apply::apply,
    arbiter::{self, GameStatus},
    board::Board,
    castling_right::CastlingRights,
    color::Color,
    fen::{self, FenError},
    movement::Move,
    square::Square,
};

/// Everything about a position besides piece placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Metadata {
    pub turn: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    /// Half-moves since the last pawn move or capture.
    pub half_move: u32,
    /// Starts at 1 and increments after black moves.
    pub full_move: u32,
}
impl Default for Metadata {
    fn default() -> Self {
        Metadata {
            turn: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
            half_move: 0,
            full_move: 1,
        }
    }
}

/// An immutable snapshot. Applying a move yields a new `Position`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub board: Board,
    pub metadata: Metadata,
}
impl Position {
    pub fn starting() -> Self {
        Position {
            board: Board::starting(),
            metadata: Metadata::default(),
        }
    }
    pub fn turn(&self) -> Color {
        self.metadata.turn
    }
    /// Legal destinations for the piece on `square`, empty if there is none.
    pub fn legal_destinations(&self, square: Square) -> Vec<Square> {
        arbiter::legal_moves(
            &self.board,
            square,
            self.metadata.en_passant,
            self.metadata.castling,
        )
    }
    /// Every legal move of the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board
            .pieces_of(self.turn())
            .flat_map(|(origin, _)| {
                self.legal_destinations(origin)
                    .into_iter()
                    .map(move |destination| Move::new(origin, destination))
            })
            .collect()
    }
    pub fn is_check(&self) -> bool {
        arbiter::king_in_check(&self.board, self.turn())
    }
    pub fn status(&self) -> GameStatus {
        arbiter::game_status(
            &self.board,
            self.turn(),
            self.metadata.en_passant,
            self.metadata.castling,
        )
    }
    /// Applies `movement` without checking legality.
    ///
    /// An illegal move yields a position with undefined game semantics. Use
    /// [`crate::game::Game::play`] or check [`Position::legal_destinations`]
    /// first.
    pub fn play_unchecked(&self, movement: Move) -> Self {
        let (board, metadata) = apply(&self.board, &self.metadata, movement);
        Position { board, metadata }
    }
}
impl Default for Position {
    fn default() -> Self {
        Position::starting()
    }
}
impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", fen::encode(&self.board, &self.metadata))?;
        Ok(())
    }
}
impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (board, metadata) = fen::decode(s)?;
        Ok(Position { board, metadata })
    }
}

#[cfg(test)]
mod test {
    use crate::{arbiter::GameStatus, position::Position};

    #[test]
    fn twenty_moves_from_the_start() {
        let position = Position::starting();
        assert_eq!(position.legal_moves().len(), 20);
        assert!(!position.is_check());
        assert_eq!(position.status(), GameStatus::Playing);
    }
    #[test]
    fn black_to_move_after_e4() {
        let position = Position::starting().play_unchecked("e2e4".parse().unwrap());
        assert_eq!(position.legal_moves().len(), 20);
        assert!(
            position
                .legal_moves()
                .iter()
                .all(|movement| movement.origin.row() <= 1)
        );
    }
}
