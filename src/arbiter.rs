use std::fmt::{self, Display, Formatter};

use tracing::warn;

use crate::{
    attack::is_attacked,
    board::Board,
    castling_right::{CastlingRights, CastlingSide},
    color::Color,
    piece::{Piece, PieceKind},
    square::Square,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Checkmate,
    Stalemate,
}
impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Playing
    }
}
impl Display for GameStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Playing => write!(f, "playing")?,
            GameStatus::Checkmate => write!(f, "checkmate")?,
            GameStatus::Stalemate => write!(f, "stalemate")?,
        }
        Ok(())
    }
}

/// Destinations allowed by the geometry of whatever occupies `square`.
pub fn pseudo_moves(
    board: &Board,
    square: Square,
    en_passant: Option<Square>,
    castling: CastlingRights,
) -> Vec<Square> {
    match board[square] {
        Some(piece) => piece
            .kind
            .pseudo_moves(board, square, piece.color, en_passant, castling),
        None => Vec::new(),
    }
}
/// Whether `color`'s king is attacked. A board without that king counts as check.
pub fn king_in_check(board: &Board, color: Color) -> bool {
    match board.king_of(color) {
        Some(king) => is_attacked(board, king, color),
        None => {
            warn!(%color, "no king on the board, treating it as in check");
            true
        }
    }
}
/// Plays `piece` from `origin` to `destination` on a copy and reports whether
/// its king survives.
fn leaves_king_safe(
    board: &Board,
    piece: Piece,
    origin: Square,
    destination: Square,
    en_passant: Option<Square>,
) -> bool {
    let mut simulated = board.clone();
    if piece.kind == PieceKind::Pawn
        && en_passant == Some(destination)
        && origin.col() != destination.col()
        && board.is_empty_at(destination)
    {
        simulated[Square::new(origin.row(), destination.col())] = None;
    }
    simulated.relocate(origin, destination);
    !king_in_check(&simulated, piece.color)
}
/// A castling king may not start in check or cross an attacked square. The
/// landing square is covered by [`leaves_king_safe`].
fn castling_path_is_safe(board: &Board, piece: Piece, origin: Square, destination: Square) -> bool {
    match CastlingSide::from_king_move(origin, destination) {
        Some(side) if piece.kind == PieceKind::King => {
            !is_attacked(board, origin, piece.color)
                && !is_attacked(board, side.passing(piece.color), piece.color)
        }
        _ => true,
    }
}
/// Destinations for the piece on `square` that do not leave its own king in check.
pub fn legal_moves(
    board: &Board,
    square: Square,
    en_passant: Option<Square>,
    castling: CastlingRights,
) -> Vec<Square> {
    let Some(piece) = board[square] else {
        return Vec::new();
    };
    pseudo_moves(board, square, en_passant, castling)
        .into_iter()
        .filter(|destination| {
            castling_path_is_safe(board, piece, square, *destination)
                && leaves_king_safe(board, piece, square, *destination, en_passant)
        })
        .collect()
}
pub fn game_status(
    board: &Board,
    color: Color,
    en_passant: Option<Square>,
    castling: CastlingRights,
) -> GameStatus {
    let can_move = board
        .pieces_of(color)
        .any(|(square, _)| !legal_moves(board, square, en_passant, castling).is_empty());
    if can_move {
        GameStatus::Playing
    } else if king_in_check(board, color) {
        GameStatus::Checkmate
    } else {
        GameStatus::Stalemate
    }
}
