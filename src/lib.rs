//! Chess rules arbitration: move legality, move application, and game
//! termination for a two-player game on a mailbox board.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

pub mod apply;
pub mod arbiter;
pub mod attack;
pub mod board;
pub mod castling_right;
pub mod color;
pub mod fen;
pub mod fuzz;
pub mod game;
pub mod geometry;
pub mod movement;
pub mod perft;
pub mod piece;
pub mod position;
pub mod square;

pub use crate::{
    arbiter::GameStatus,
    board::Board,
    castling_right::CastlingRights,
    color::Color,
    fen::FenError,
    game::{Game, PlayError},
    movement::{Move, ParseMoveError},
    piece::{Piece, PieceKind},
    position::{Metadata, Position},
    square::{ParseSquareError, Square},
};
