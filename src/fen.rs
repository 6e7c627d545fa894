//! Position interchange text, modeled on Forsyth-Edwards Notation.
//!
//! Piece placement is mandatory and strictly checked. The five metadata
//! fields after it may be cut short, in which case the missing ones take
//! their [`Metadata::default`] values.

use std::{
    fmt::{self, Write},
    num::ParseIntError,
};

use thiserror::Error;

use crate::{
    board::Board,
    castling_right::InvalidCastlingCharacter,
    color::Color,
    piece::Piece,
    position::Metadata,
    square::ParseSquareError,
};

pub const STARTING: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("empty position text")]
    Empty,
    #[error("found {0} rows, 8 were expected")]
    RowCount(usize),
    #[error("row {row} expands to {width} squares, 8 were expected")]
    RowWidth { row: usize, width: usize },
    #[error("found `{0}`, expected a piece letter or a digit from `1` to `8`")]
    InvalidPiece(char),
    #[error("found `{0}`, expected `w` or `b`")]
    InvalidTurn(String),
    #[error("invalid castling rights: {0}")]
    Castling(#[from] InvalidCastlingCharacter),
    #[error("invalid en passant target: {0}")]
    EnPassant(#[from] ParseSquareError),
    #[error("invalid move counter: {0}")]
    Clock(#[from] ParseIntError),
    #[error("the full-move number starts at 1")]
    ZeroFullMove,
    #[error("unexpected trailing `{0}`")]
    Trailing(String),
}

fn decode_row(row: usize, text: &str) -> Result<[Option<Piece>; 8], FenError> {
    let mut cells = [None; 8];
    let mut width = 0;
    for c in text.chars() {
        match c {
            '1'..='8' => width += c as usize - '0' as usize,
            c => {
                let piece = Piece::from_fen(c).ok_or(FenError::InvalidPiece(c))?;
                if let Some(cell) = cells.get_mut(width) {
                    *cell = Some(piece);
                }
                width += 1;
            }
        }
        if width > 8 {
            return Err(FenError::RowWidth { row, width });
        }
    }
    if width != 8 {
        return Err(FenError::RowWidth { row, width });
    }
    Ok(cells)
}
pub fn decode(text: &str) -> Result<(Board, Metadata), FenError> {
    let mut fields = text.split_whitespace();
    let placement = fields.next().ok_or(FenError::Empty)?;
    let rows: Vec<_> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::RowCount(rows.len()));
    }
    let mut board = Board::empty();
    for (i, row) in rows.into_iter().enumerate() {
        board.0[i] = decode_row(i, row)?;
    }

    let mut metadata = Metadata::default();
    if let Some(turn) = fields.next() {
        metadata.turn =
            Color::from_fen(turn).ok_or_else(|| FenError::InvalidTurn(turn.to_owned()))?;
    }
    if let Some(castling) = fields.next() {
        metadata.castling = castling.parse()?;
    }
    if let Some(en_passant) = fields.next() {
        metadata.en_passant = match en_passant {
            "-" => None,
            square => Some(square.parse()?),
        };
    }
    if let Some(half_move) = fields.next() {
        metadata.half_move = half_move.parse()?;
    }
    if let Some(full_move) = fields.next() {
        metadata.full_move = match full_move.parse::<u32>()? {
            0 => return Err(FenError::ZeroFullMove),
            full_move => full_move,
        };
    }
    if let Some(extra) = fields.next() {
        return Err(FenError::Trailing(extra.to_owned()));
    }
    Ok((board, metadata))
}
fn encode_row(out: &mut String, row: &[Option<Piece>; 8]) -> fmt::Result {
    let mut empty = 0;
    for cell in row {
        match cell {
            Some(piece) => {
                if empty > 0 {
                    write!(out, "{empty}")?;
                    empty = 0;
                }
                out.push(piece.fen());
            }
            None => empty += 1,
        }
    }
    if empty > 0 {
        write!(out, "{empty}")?;
    }
    Ok(())
}
fn write_fen(out: &mut String, board: &Board, metadata: &Metadata) -> fmt::Result {
    for (i, row) in board.rows().enumerate() {
        if i > 0 {
            out.push('/');
        }
        encode_row(out, row)?;
    }
    write!(out, " {}", metadata.turn.lowercase())?;
    write!(out, " {}", metadata.castling)?;
    match metadata.en_passant {
        Some(square) => write!(out, " {square}")?,
        None => write!(out, " -")?,
    }
    write!(out, " {} {}", metadata.half_move, metadata.full_move)?;
    Ok(())
}
pub fn encode(board: &Board, metadata: &Metadata) -> String {
    let mut out = String::new();
    // writing into a `String` cannot fail
    let _ = write_fen(&mut out, board, metadata);
    out
}
