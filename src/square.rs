use std::{
    fmt::{self, Display, Formatter},
    ops::Mul,
    str::FromStr,
};

use thiserror::Error;

/// Builds a [`Square`] from constant algebraic text, e.g. `square!("e4")`.
#[macro_export]
macro_rules! square {
    ($name:literal) => {
        const { $crate::square::Square::from_algebraic($name) }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseSquareError {
    #[error("provided string have length of {0} characters, 2 were expected")]
    Length(usize),
    #[error("found `{0}`, characters from `a` to `h` were expected instead")]
    InvalidFile(char),
    #[error("found `{0}`, characters from `1` to `8` were expected instead")]
    InvalidRank(char),
}

// Row 0 is rank 8, column 0 is file a. Both fields are always < 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}
impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square out of bounds");
        Square { row, col }
    }
    pub const fn new_checked(row: i16, col: i16) -> Option<Self> {
        if row < 0 || row >= 8 || col < 0 || col >= 8 {
            None
        } else {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        }
    }
    /// Compile-time constructor backing [`square!`]. Panics on malformed text,
    /// so runtime text goes through [`FromStr`] instead.
    #[doc(hidden)]
    pub const fn from_algebraic(name: &str) -> Self {
        let bytes = name.as_bytes();
        assert!(bytes.len() == 2, "expected a file and a rank");
        assert!(bytes[0] >= b'a' && bytes[0] <= b'h', "file out of range");
        assert!(bytes[1] >= b'1' && bytes[1] <= b'8', "rank out of range");
        Square::new(b'8' - bytes[1], bytes[0] - b'a')
    }
    pub fn from_chars(file: char, rank: char) -> Result<Self, ParseSquareError> {
        let col = match file {
            'a'..='h' => file as u8 - b'a',
            _ => return Err(ParseSquareError::InvalidFile(file)),
        };
        let row = match rank {
            '1'..='8' => b'8' - rank as u8,
            _ => return Err(ParseSquareError::InvalidRank(rank)),
        };
        Ok(Square::new(row, col))
    }
    pub fn row(self) -> u8 {
        self.row
    }
    pub fn col(self) -> u8 {
        self.col
    }
    pub fn move_by(self, vector: Vector) -> Option<Self> {
        Square::new_checked(
            i16::from(self.row) + i16::from(vector.row),
            i16::from(self.col) + i16::from(vector.col),
        )
    }
    /// Squares walked from here along `direction`, excluding this one, until the edge.
    pub fn ray(self, direction: Vector) -> impl Iterator<Item = Self> {
        debug_assert_ne!(direction, Vector::ZERO);
        (1..).map_while(move |distance| self.move_by(direction * distance))
    }
    pub fn all() -> impl Iterator<Item = Self> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square::new(row, col)))
    }
}
impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let file = (self.col + b'a') as char;
        let rank = 8 - self.row;
        write!(f, "{file}{rank}")?;
        Ok(())
    }
}
impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => Square::from_chars(file, rank),
            _ => Err(ParseSquareError::Length(s.chars().count())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector {
    pub row: i8,
    pub col: i8,
}
impl Vector {
    pub const ZERO: Self = Vector { row: 0, col: 0 };

    pub const KNIGHT_MOVES: [Self; 8] = [
        Vector { row: -2, col: -1 },
        Vector { row: -2, col: 1 },
        Vector { row: 2, col: -1 },
        Vector { row: 2, col: 1 },
        Vector { row: -1, col: -2 },
        Vector { row: -1, col: 2 },
        Vector { row: 1, col: -2 },
        Vector { row: 1, col: 2 },
    ];
    pub const ROOK_DIRECTIONS: [Self; 4] = [
        Vector { row: -1, col: 0 },
        Vector { row: 1, col: 0 },
        Vector { row: 0, col: -1 },
        Vector { row: 0, col: 1 },
    ];
    pub const BISHOP_DIRECTIONS: [Self; 4] = [
        Vector { row: -1, col: -1 },
        Vector { row: -1, col: 1 },
        Vector { row: 1, col: -1 },
        Vector { row: 1, col: 1 },
    ];
    pub const KING_MOVES: [Self; 8] = [
        Vector { row: -1, col: -1 },
        Vector { row: -1, col: 0 },
        Vector { row: -1, col: 1 },
        Vector { row: 0, col: -1 },
        Vector { row: 0, col: 1 },
        Vector { row: 1, col: -1 },
        Vector { row: 1, col: 0 },
        Vector { row: 1, col: 1 },
    ];
    pub const QUEEN_DIRECTIONS: [Self; 8] = Vector::KING_MOVES;
}
impl Mul<i8> for Vector {
    type Output = Vector;

    fn mul(self, rhs: i8) -> Self::Output {
        Vector {
            row: self.row * rhs,
            col: self.col * rhs,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::square::{ParseSquareError, Square, Vector};

    #[test]
    fn row_zero_is_rank_eight() {
        assert_eq!(square!("a8"), Square::new(0, 0));
        assert_eq!(square!("h1"), Square::new(7, 7));
        assert_eq!(square!("e4").to_string(), "e4");
    }
    #[test]
    fn parse_rejects_off_board_coordinates() {
        assert_eq!("i1".parse::<Square>(), Err(ParseSquareError::InvalidFile('i')));
        assert_eq!("a9".parse::<Square>(), Err(ParseSquareError::InvalidRank('9')));
        assert_eq!("a".parse::<Square>(), Err(ParseSquareError::Length(1)));
        assert_eq!("a1b".parse::<Square>(), Err(ParseSquareError::Length(3)));
    }
    #[test]
    fn stepping_off_the_edge_is_none() {
        assert_eq!(square!("a1").move_by(Vector { row: 1, col: 0 }), None);
        assert_eq!(square!("h8").move_by(Vector { row: 0, col: 1 }), None);
        assert_eq!(
            square!("e4").move_by(Vector { row: -1, col: 0 }),
            Some(square!("e5"))
        );
    }
    #[test]
    fn ray_stops_at_the_edge() {
        let ray: Vec<_> = square!("f6").ray(Vector { row: -1, col: 1 }).collect();
        assert_eq!(ray, [square!("g7"), square!("h8")]);
    }
}
