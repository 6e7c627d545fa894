use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use thiserror::Error;

use crate::square::{ParseSquareError, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseMoveError {
    #[error("provided move have length of {0} characters, 4 were expected")]
    Length(usize),
    #[error(transparent)]
    Square(#[from] ParseSquareError),
    #[error("found `{0}`, only queen promotion `q` may follow the destination")]
    Promotion(char),
}

/// A source and destination pair. Pawns reaching the last rank always become queens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub origin: Square,
    pub destination: Square,
}
impl Move {
    pub fn new(origin: Square, destination: Square) -> Self {
        Move {
            origin,
            destination,
        }
    }
}
impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin, self.destination)?;
        Ok(())
    }
}
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        match chars[..] {
            [a, b, c, d] | [a, b, c, d, 'q'] => Ok(Move::new(
                Square::from_chars(a, b)?,
                Square::from_chars(c, d)?,
            )),
            [_, _, _, _, promotion] => Err(ParseMoveError::Promotion(promotion)),
            _ => Err(ParseMoveError::Length(chars.len())),
        }
    }
}
