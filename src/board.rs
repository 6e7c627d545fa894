use std::ops::{Index, IndexMut};

use crate::{
    color::Color,
    piece::{Piece, PieceKind},
    square::Square,
};

/// The 8x8 grid. Row 0 is rank 8 and column 0 is file a.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board(pub [[Option<Piece>; 8]; 8]);

impl Board {
    pub fn empty() -> Self {
        Board::default()
    }
    pub fn starting() -> Self {
        let back_rank =
            |color| PieceKind::STARTING_CONFIGURATION.map(|kind| Some(Piece::new(color, kind)));
        let pawns = |color| [Some(Piece::new(color, PieceKind::Pawn)); 8];
        Board([
            back_rank(Color::Black),
            pawns(Color::Black),
            [None; 8],
            [None; 8],
            [None; 8],
            [None; 8],
            pawns(Color::White),
            back_rank(Color::White),
        ])
    }
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Piece>; 8]> {
        self.0.iter()
    }
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self[square].map(|piece| (square, piece)))
    }
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }
    pub fn king_of(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self[square].map(|piece| piece.color)
    }
    pub fn is_empty_at(&self, square: Square) -> bool {
        self[square].is_none()
    }
    pub fn has(&self, square: Square, color: Color, kind: PieceKind) -> bool {
        self[square].is_some_and(|piece| piece.is(color, kind))
    }
    /// Moves whatever stands on `origin` onto `destination`, capturing any occupant.
    pub fn relocate(&mut self, origin: Square, destination: Square) {
        self[destination] = self[origin].take();
    }
}
impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, index: Square) -> &Self::Output {
        &self.0[index.row() as usize][index.col() as usize]
    }
}
impl IndexMut<Square> for Board {
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self.0[index.row() as usize][index.col() as usize]
    }
}
