use crate::{
    board::Board,
    color::Color,
    geometry::steps,
    square::{Square, Vector},
};

pub fn pseudo_moves(
    board: &Board,
    origin: Square,
    color: Color,
) -> impl Iterator<Item = Square> + '_ {
    steps(board, origin, color, &Vector::KNIGHT_MOVES)
}
