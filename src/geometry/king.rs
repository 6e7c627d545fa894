use crate::{
    board::Board,
    castling_right::{CastlingRights, CastlingSide},
    color::Color,
    geometry::steps,
    piece::PieceKind,
    square::{Square, Vector},
};

/// The adjacent squares, without castling.
pub fn steps_from(
    board: &Board,
    origin: Square,
    color: Color,
) -> impl Iterator<Item = Square> + '_ {
    steps(board, origin, color, &Vector::KING_MOVES)
}
/// King destinations for each castling side whose right is held, with the
/// king and rook on their home squares and nothing in between.
///
/// Whether the king is in check or passes through an attacked square is left
/// to the arbiter.
pub fn castling_destinations(
    board: &Board,
    origin: Square,
    color: Color,
    castling: CastlingRights,
) -> impl Iterator<Item = Square> + '_ {
    CastlingSide::ALL
        .into_iter()
        .filter(move |side| {
            castling.contains(side.right(color))
                && origin == CastlingSide::king_origin(color)
                && board.has(side.rook_origin(color), color, PieceKind::Rook)
                && side.between(color).all(|square| board.is_empty_at(square))
        })
        .map(move |side| side.king_destination(color))
}
pub fn pseudo_moves(
    board: &Board,
    origin: Square,
    color: Color,
    castling: CastlingRights,
) -> impl Iterator<Item = Square> + '_ {
    steps_from(board, origin, color).chain(castling_destinations(board, origin, color, castling))
}

#[cfg(test)]
mod test {
    use crate::{
        geometry::test::{destinations, set},
        square,
    };

    #[test]
    fn both_castles_on_open_back_rank() {
        assert_eq!(
            destinations("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", square!("e1")),
            set([
                square!("d1"),
                square!("d2"),
                square!("e2"),
                square!("f2"),
                square!("f1"),
                square!("g1"),
                square!("c1"),
            ])
        );
    }
    #[test]
    fn castling_needs_the_right() {
        assert_eq!(
            destinations("r3k2r/8/8/8/8/8/8/R3K2R b Kq - 0 1", square!("e8")),
            set([
                square!("d8"),
                square!("d7"),
                square!("e7"),
                square!("f7"),
                square!("f8"),
                square!("c8"),
            ])
        );
    }
    #[test]
    fn castling_needs_empty_squares_between() {
        // b1 is occupied, which only matters for the queenside
        assert_eq!(
            destinations("4k3/8/8/8/8/8/3PPP2/RN2K2R w KQ - 0 1", square!("e1")),
            set([square!("d1"), square!("f1"), square!("g1")])
        );
    }
    #[test]
    fn castling_needs_the_rook_home() {
        assert_eq!(
            destinations("4k3/8/8/8/8/8/3PPP2/4K1R1 w K - 0 1", square!("e1")),
            set([square!("d1"), square!("f1")])
        );
    }
}
