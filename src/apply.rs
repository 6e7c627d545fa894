use tracing::trace;

use crate::{
    board::Board,
    castling_right::{CastlingRights, CastlingSide},
    color::Color,
    fen,
    movement::Move,
    piece::{Piece, PieceKind},
    position::Metadata,
    square::Square,
};

/// Plays `movement` on copies of `board` and `metadata`.
///
/// Legality is not checked here. An illegal move gives a position with
/// undefined game semantics but never panics, and an empty origin square
/// leaves everything untouched.
pub fn apply(board: &Board, metadata: &Metadata, movement: Move) -> (Board, Metadata) {
    let Move {
        origin,
        destination,
    } = movement;
    let Some(piece) = board[origin] else {
        trace!(%movement, "no piece to move");
        return (board.clone(), *metadata);
    };
    let color = piece.color;
    let mut next = board.clone();

    let castled = match piece.kind {
        PieceKind::King => CastlingSide::from_king_move(origin, destination),
        _ => None,
    };
    if let Some(side) = castled {
        next.relocate(side.rook_origin(color), side.rook_destination(color));
    }

    let is_pawn = piece.kind == PieceKind::Pawn;
    let en_passant_capture =
        is_pawn && origin.col() != destination.col() && board.is_empty_at(destination);
    if en_passant_capture {
        next[Square::new(origin.row(), destination.col())] = None;
    }

    next.relocate(origin, destination);
    if is_pawn && destination.row() == color.promotion_row() {
        next[destination] = Some(Piece::new(color, PieceKind::Queen));
    }

    let mut castling = metadata.castling;
    if piece.kind == PieceKind::King {
        castling.remove(CastlingRights::of(color));
    }
    castling.remove(CastlingRights::for_rook_square(origin));
    castling.remove(CastlingRights::for_rook_square(destination));

    let en_passant = if is_pawn && origin.row().abs_diff(destination.row()) == 2 {
        Some(Square::new(
            (origin.row() + destination.row()) / 2,
            origin.col(),
        ))
    } else {
        None
    };

    let captured = board[destination].is_some() || en_passant_capture;
    let half_move = if is_pawn || captured {
        0
    } else {
        metadata.half_move.saturating_add(1)
    };
    let full_move = match color {
        Color::Black => metadata.full_move.saturating_add(1),
        Color::White => metadata.full_move,
    };
    let metadata = Metadata {
        turn: !color,
        castling,
        en_passant,
        half_move,
        full_move,
    };
    trace!(
        %movement,
        %piece,
        captured,
        castled = castled.is_some(),
        en_passant_capture,
        fen = %fen::encode(&next, &metadata),
        "applied move"
    );
    (next, metadata)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::{
        castling_right::CastlingRights,
        color::Color,
        piece::{Piece, PieceKind},
        position::Position,
        square,
    };

    fn play(fen: &str, moves: &[&str]) -> Position {
        let mut position: Position = fen.parse().unwrap();
        for movement in moves {
            position = position.play_unchecked(movement.parse().unwrap());
        }
        position
    }

    #[test]
    fn opening_moves_update_every_field() {
        let start = Position::starting();
        let position = play(&start.to_string(), &["e2e4"]);
        assert_eq!(
            position.to_string(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
        let position = play(&position.to_string(), &["g8f6"]);
        assert_eq!(
            position.to_string(),
            "rnbqkb1r/pppppppp/5n2/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 1 2"
        );
        // the input is left as it was
        assert_eq!(start, Position::starting());
    }
    #[test]
    fn kingside_castle_moves_rook_and_clears_rights() {
        let position = play("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 10", &["e1g1"]);
        assert_eq!(
            position.to_string(),
            "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 4 10"
        );
    }
    #[test]
    fn queenside_castle_for_black() {
        let position = play("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 7", &["e8c8"]);
        assert_eq!(
            position.to_string(),
            "2kr3r/8/8/8/8/8/8/R3K2R w KQ - 1 8"
        );
    }
    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let position = play(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            &["e2e4", "a7a6", "e4e5", "d7d5"],
        );
        assert_eq!(position.metadata.en_passant, Some(square!("d6")));
        assert!(position.legal_destinations(square!("e5")).contains(&square!("d6")));

        let position = position.play_unchecked("e5d6".parse().unwrap());
        assert_eq!(position.board[square!("d5")], None);
        assert_eq!(
            position.board[square!("d6")],
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(position.metadata.en_passant, None);
        assert_eq!(position.metadata.half_move, 0);
    }
    #[test]
    fn en_passant_target_expires_after_one_move() {
        let position = play(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            &["e2e4"],
        );
        assert_eq!(position.metadata.en_passant, Some(square!("e3")));
        let position = position.play_unchecked("b8c6".parse().unwrap());
        assert_eq!(position.metadata.en_passant, None);
    }
    #[test]
    fn pawn_promotes_to_queen() {
        let position = play("8/4P1k1/8/8/8/8/1p6/4K3 w - - 0 40", &["e7e8"]);
        assert_eq!(
            position.board[square!("e8")],
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        let position = position.play_unchecked("b2b1".parse().unwrap());
        assert_eq!(
            position.board[square!("b1")],
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(position.metadata.full_move, 41);
    }
    #[test]
    fn rook_moves_and_captures_clear_single_rights() {
        let position = play("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", &["h1h8"]);
        assert_eq!(
            position.metadata.castling,
            CastlingRights::WHITE_QUEENSIDE | CastlingRights::BLACK_QUEENSIDE
        );
        assert_eq!(position.metadata.half_move, 0);

        let position = play("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", &["a8a7"]);
        assert_eq!(
            position.metadata.castling,
            CastlingRights::WHITE_KINGSIDE
                | CastlingRights::WHITE_QUEENSIDE
                | CastlingRights::BLACK_KINGSIDE
        );
        assert_eq!(position.metadata.half_move, 1);
    }
    #[test]
    fn counters_stop_at_their_maximum() {
        let position = play("4k3/8/8/8/8/8/8/4K2R w - - 4294967295 1", &["h1h2"]);
        assert_eq!(position.metadata.half_move, u32::MAX);

        let position = play("4k2r/8/8/8/8/8/8/4K3 b - - 0 4294967295", &["h8h7"]);
        assert_eq!(position.metadata.full_move, u32::MAX);
        assert_eq!(position.metadata.half_move, 1);
    }
    #[test]
    fn empty_origin_changes_nothing() {
        let position = Position::starting();
        assert_eq!(position.play_unchecked("e4e5".parse().unwrap()), position);
    }
}
