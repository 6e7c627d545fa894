use crate::{
    board::Board,
    color::Color,
    square::{Square, Vector},
};

/// The two forward diagonals a pawn of `color` on `origin` attacks.
pub fn attacks(origin: Square, color: Color) -> impl Iterator<Item = Square> {
    [-1, 1].into_iter().filter_map(move |col| {
        origin.move_by(Vector {
            row: color.pawn_direction(),
            col,
        })
    })
}
/// Pushes onto empty squares, plus diagonal captures of enemies or onto the
/// en passant target.
pub fn pseudo_moves(
    board: &Board,
    origin: Square,
    color: Color,
    en_passant: Option<Square>,
) -> impl Iterator<Item = Square> + '_ {
    let forward = Vector {
        row: color.pawn_direction(),
        col: 0,
    };
    let reach = if origin.row() == color.pawn_home_row() {
        2
    } else {
        1
    };
    let pushes = origin
        .ray(forward)
        .take(reach)
        .take_while(move |square| board.is_empty_at(*square));
    let captures = attacks(origin, color).filter(move |square| {
        board.color_at(*square) == Some(!color) || en_passant == Some(*square)
    });
    pushes.chain(captures)
}

#[cfg(test)]
mod test {
    use crate::{
        color::Color,
        geometry::{
            pawn::attacks,
            test::{destinations, set},
        },
        square,
    };

    #[test]
    fn single_and_double_push_from_home() {
        let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert_eq!(
            destinations(start, square!("e2")),
            set([square!("e3"), square!("e4")])
        );
        assert_eq!(
            destinations(start, square!("d7")),
            set([square!("d6"), square!("d5")])
        );
    }
    #[test]
    fn double_push_needs_both_squares_empty() {
        assert_eq!(
            destinations("k7/8/8/8/8/4n3/4P3/K7 w - - 0 1", square!("e2")),
            set([])
        );
        assert_eq!(
            destinations("k7/8/8/8/4n3/8/4P3/K7 w - - 0 1", square!("e2")),
            set([square!("e3")])
        );
    }
    #[test]
    fn single_push_away_from_home() {
        assert_eq!(
            destinations("k7/8/8/8/8/4P3/8/K7 w - - 0 1", square!("e3")),
            set([square!("e4")])
        );
    }
    #[test]
    fn diagonal_needs_enemy_or_en_passant_target() {
        assert_eq!(
            destinations("k7/8/8/3pP3/8/8/8/K7 w - d6 0 1", square!("e5")),
            set([square!("e6"), square!("d6")])
        );
        assert_eq!(
            destinations("k7/8/8/3pP3/8/8/8/K7 w - - 0 1", square!("e5")),
            set([square!("e6")])
        );
        assert_eq!(
            destinations("k7/8/5r2/3pPN2/8/8/8/K7 w - - 0 1", square!("e5")),
            set([square!("e6"), square!("f6")])
        );
    }
    #[test]
    fn black_pawns_advance_down_the_board() {
        let attacked: Vec<_> = attacks(square!("a7"), Color::Black).collect();
        assert_eq!(attacked, [square!("b6")]);
        let attacked: Vec<_> = attacks(square!("e4"), Color::White).collect();
        assert_eq!(attacked, [square!("d5"), square!("f5")]);
    }
}
