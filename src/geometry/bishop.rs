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
    slide(board, origin, color, &Vector::BISHOP_DIRECTIONS)
}
