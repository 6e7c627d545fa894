use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use bitflags::bitflags;
use thiserror::Error;

use crate::{color::Color, square::Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("found `{0}`, expected one of `K`, `Q`, `k`, `q`, or `-`")]
pub struct InvalidCastlingCharacter(pub char);

bitflags! {
    /// The four independent castling permissions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CastlingRights: u8 {
        const WHITE_KINGSIDE = 1;
        const WHITE_QUEENSIDE = 2;
        const BLACK_KINGSIDE = 4;
        const BLACK_QUEENSIDE = 8;
    }
}
impl CastlingRights {
    pub fn of(color: Color) -> Self {
        CastlingSide::ALL
            .into_iter()
            .fold(CastlingRights::empty(), |rights, side| {
                rights | side.right(color)
            })
    }
    /// The right lost when a rook leaves or is captured on `square`.
    pub fn for_rook_square(square: Square) -> Self {
        [Color::White, Color::Black]
            .into_iter()
            .flat_map(|color| CastlingSide::ALL.map(|side| (color, side)))
            .find(|(color, side)| side.rook_origin(*color) == square)
            .map_or(CastlingRights::empty(), |(color, side)| side.right(color))
    }
}
impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::all()
    }
}
impl Display for CastlingRights {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "-")?;
            return Ok(());
        }
        for (flag, c) in [
            (CastlingRights::WHITE_KINGSIDE, 'K'),
            (CastlingRights::WHITE_QUEENSIDE, 'Q'),
            (CastlingRights::BLACK_KINGSIDE, 'k'),
            (CastlingRights::BLACK_QUEENSIDE, 'q'),
        ] {
            if self.contains(flag) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
impl FromStr for CastlingRights {
    type Err = InvalidCastlingCharacter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rights = CastlingRights::empty();
        for c in s.chars() {
            match c {
                'K' => rights |= CastlingRights::WHITE_KINGSIDE,
                'Q' => rights |= CastlingRights::WHITE_QUEENSIDE,
                'k' => rights |= CastlingRights::BLACK_KINGSIDE,
                'q' => rights |= CastlingRights::BLACK_QUEENSIDE,
                '-' => (),
                c => return Err(InvalidCastlingCharacter(c)),
            }
        }
        Ok(rights)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    Kingside,
    Queenside,
}
impl CastlingSide {
    pub const ALL: [Self; 2] = [CastlingSide::Kingside, CastlingSide::Queenside];

    pub fn right(self, color: Color) -> CastlingRights {
        match (color, self) {
            (Color::White, CastlingSide::Kingside) => CastlingRights::WHITE_KINGSIDE,
            (Color::White, CastlingSide::Queenside) => CastlingRights::WHITE_QUEENSIDE,
            (Color::Black, CastlingSide::Kingside) => CastlingRights::BLACK_KINGSIDE,
            (Color::Black, CastlingSide::Queenside) => CastlingRights::BLACK_QUEENSIDE,
        }
    }
    /// Side castled towards when a king moves from `origin` to `destination`.
    pub fn from_king_move(origin: Square, destination: Square) -> Option<Self> {
        if origin.row() != destination.row() {
            return None;
        }
        match i16::from(destination.col()) - i16::from(origin.col()) {
            2 => Some(CastlingSide::Kingside),
            -2 => Some(CastlingSide::Queenside),
            _ => None,
        }
    }
    fn rook_col(self) -> u8 {
        match self {
            CastlingSide::Kingside => 7,
            CastlingSide::Queenside => 0,
        }
    }
    pub fn king_origin(color: Color) -> Square {
        Square::new(color.home_row(), 4)
    }
    pub fn king_destination(self, color: Color) -> Square {
        let col = match self {
            CastlingSide::Kingside => 6,
            CastlingSide::Queenside => 2,
        };
        Square::new(color.home_row(), col)
    }
    pub fn rook_origin(self, color: Color) -> Square {
        Square::new(color.home_row(), self.rook_col())
    }
    pub fn rook_destination(self, color: Color) -> Square {
        let col = match self {
            CastlingSide::Kingside => 5,
            CastlingSide::Queenside => 3,
        };
        Square::new(color.home_row(), col)
    }
    /// Squares strictly between king and rook, which must all be empty.
    pub fn between(self, color: Color) -> impl Iterator<Item = Square> {
        let cols = match self {
            CastlingSide::Kingside => 5..7,
            CastlingSide::Queenside => 1..4,
        };
        cols.map(move |col| Square::new(color.home_row(), col))
    }
    /// Square the king crosses on its way, which must not be attacked.
    pub fn passing(self, color: Color) -> Square {
        self.rook_destination(color)
    }
}
