//! Whether a square is attacked, answered by running each piece's geometry
//! backwards from the square itself.

use crate::{
    board::Board,
    color::Color,
    geometry::{bishop, king, knight, pawn, rook},
    piece::PieceKind,
    square::Square,
};

fn reaches(
    board: &Board,
    mut squares: impl Iterator<Item = Square>,
    attacker: Color,
    kinds: &[PieceKind],
) -> bool {
    squares.any(|square| {
        board[square].is_some_and(|piece| piece.color == attacker && kinds.contains(&piece.kind))
    })
}

/// Whether any piece of the side opposing `defender` attacks `square`.
///
/// `square` may be empty. It is probed as if a `defender` piece of each kind
/// stood on it: a knight that could land on an enemy knight is attacked by
/// that knight, a rook-shaped ray that first meets an enemy rook or queen is
/// attacked by it, and so on.
pub fn is_attacked(board: &Board, square: Square, defender: Color) -> bool {
    let attacker = !defender;
    reaches(
        board,
        knight::pseudo_moves(board, square, defender),
        attacker,
        &[PieceKind::Knight],
    ) || reaches(
        board,
        rook::pseudo_moves(board, square, defender),
        attacker,
        &[PieceKind::Rook, PieceKind::Queen],
    ) || reaches(
        board,
        bishop::pseudo_moves(board, square, defender),
        attacker,
        &[PieceKind::Bishop, PieceKind::Queen],
    ) || reaches(
        board,
        pawn::attacks(square, defender),
        attacker,
        &[PieceKind::Pawn],
    ) || reaches(
        board,
        king::steps_from(board, square, defender),
        attacker,
        &[PieceKind::King],
    )
}
