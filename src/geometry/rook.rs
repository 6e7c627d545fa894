use crate::{
    board::Board,
    color::Color,
    geometry::slide,
    square::{Square, Vector},
};

pub fn pseudo_moves(
    board: &Board,
    origin: Square,
    color: Color,
) -> impl Iterator<Item = Square> + '_ {
    slide(board, origin, color, &Vector::ROOK_DIRECTIONS)
}

#[cfg(test)]
mod test {
    use crate::{
        geometry::test::{destinations, set},
        square,
    };

    #[test]
    fn hemmed_in_corner_rook() {
        assert_eq!(
            destinations("k7/8/8/8/8/8/P7/RN5K w - - 0 1", square!("a1")),
            set([])
        );
    }
    #[test]
    fn orthogonals_only() {
        assert_eq!(
            destinations("k7/8/8/8/8/p7/8/R1n4K w - - 0 1", square!("a1")),
            set([
                square!("a2"),
                square!("a3"),
                square!("b1"),
                square!("c1"),
            ])
        );
    }
}
