// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt::{self, Display, Write};

use crate::board::Board;
use crate::history::History;
use crate::moves::Move;
use crate::types::{Color, PieceKind, Tile};

/// A piece as it currently stands: what it is, whose it is, where it is and
/// every move it has made. Pieces are values; two pieces with equal fields
/// are the same piece, and moving a piece produces a new value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub tile: Tile,
    #[serde(default)]
    pub history: History,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, tile: Tile) -> Piece {
        Piece::with_history(kind, color, tile, History::new())
    }

    pub fn with_history(kind: PieceKind, color: Color, tile: Tile, history: History) -> Piece {
        Piece {
            kind,
            color,
            tile,
            history,
        }
    }

    /// Returns this piece relocated to the move's destination, with the move
    /// recorded in its history.
    pub fn moved(&self, mov: &Move) -> Piece {
        Piece {
            kind: self.kind,
            color: self.color,
            tile: mov.to,
            history: self.history.push(mov.clone()),
        }
    }

    /// True if the piece has never moved and sits on its color's pawn row:
    /// row 1 for White, `dimension - 2` for Black.
    pub fn on_starting_row(&self, board: &Board) -> bool {
        let starting_row = match self.color {
            Color::White => 1,
            Color::Black => board.max_index() - 1,
        };

        self.history.is_empty() && self.tile.row == starting_row
    }

    /// The letter for this piece, upper-case for White and lower-case for Black.
    pub fn symbol(&self) -> char {
        let chr = self.kind.as_char();
        match self.color {
            Color::White => chr.to_ascii_uppercase(),
            Color::Black => chr,
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(self.symbol())?;
        write!(f, "{}", self.tile)
    }
}
