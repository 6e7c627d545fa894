//! Pseudo-legal destinations per piece kind, ignoring king safety.
//!
//! Every generator takes the color to move explicitly rather than reading it
//! off the origin square, so the attack oracle can probe from a square that
//! is empty or holds a piece of either side.

use crate::{
    board::Board,
    castling_right::CastlingRights,
    color::Color,
    piece::PieceKind,
    square::{Square, Vector},
};

pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;

/// Single-step destinations that are on the board and not held by `color`.
fn steps<'a>(
    board: &'a Board,
    origin: Square,
    color: Color,
    offsets: &'static [Vector],
) -> impl Iterator<Item = Square> + 'a {
    offsets
        .iter()
        .filter_map(move |offset| origin.move_by(*offset))
        .filter(move |square| board.color_at(*square) != Some(color))
}
/// Casts a ray per direction, stopping before a friendly piece or on an enemy one.
fn slide<'a>(
    board: &'a Board,
    origin: Square,
    color: Color,
    directions: &'static [Vector],
) -> impl Iterator<Item = Square> + 'a {
    directions.iter().flat_map(move |direction| {
        let mut blocked = false;
        origin.ray(*direction).take_while(move |square| {
            if blocked {
                return false;
            }
            match board.color_at(*square) {
                None => true,
                Some(occupant) if occupant == color => false,
                Some(_) => {
                    blocked = true;
                    true
                }
            }
        })
    })
}

impl PieceKind {
    /// Pseudo-legal destinations for a piece of this kind and `color` on `origin`.
    ///
    /// Only pawns read `en_passant` and only kings read `castling`.
    pub fn pseudo_moves(
        self,
        board: &Board,
        origin: Square,
        color: Color,
        en_passant: Option<Square>,
        castling: CastlingRights,
    ) -> Vec<Square> {
        match self {
            PieceKind::Pawn => pawn::pseudo_moves(board, origin, color, en_passant).collect(),
            PieceKind::Knight => knight::pseudo_moves(board, origin, color).collect(),
            PieceKind::Bishop => bishop::pseudo_moves(board, origin, color).collect(),
            PieceKind::Rook => rook::pseudo_moves(board, origin, color).collect(),
            PieceKind::Queen => queen::pseudo_moves(board, origin, color).collect(),
            PieceKind::King => king::pseudo_moves(board, origin, color, castling).collect(),
        }
    }
}
