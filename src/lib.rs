// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rules core for chess-like games on a square board of any size: the tiles
//! between two points, the destinations a piece may move to, and immutable
//! board snapshots that moves are applied to.
//!
//! ```
//! use tilechess::{legal_destinations, Board, Color, Move, Piece, PieceKind, Tile};
//!
//! let rook = Piece::new(PieceKind::Rook, Color::White, Tile::new(0, 0));
//! let board = Board::with_pieces(8, vec![rook.clone()]).unwrap();
//! assert_eq!(14, legal_destinations(&rook, &board).len());
//!
//! let next = board.apply_move(&Move::new(rook, Tile::new(0, 5)));
//! assert!(next.piece_at(Tile::new(0, 5)).is_some());
//! assert_eq!(1, next.history().len());
//! ```

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod board;
mod geometry;
mod history;
mod move_generator;
mod moves;
mod perft;
mod piece;
pub mod rays;
mod types;

pub use board::{Board, BoardError, PieceId};
pub use geometry::{tiles_between, TileRange};
pub use history::History;
pub use move_generator::{legal_destinations, MoveGenerator, Movement, TileVec, KNIGHT_OFFSETS};
pub use moves::Move;
pub use perft::{all_moves, perft};
pub use piece::Piece;
pub use types::{Color, Direction, PieceKind, Tile};
pub use types::{BISHOP_DIRECTIONS, COLORS, PIECE_KINDS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
