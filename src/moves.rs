// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::piece::Piece;
use crate::types::Tile;

/// A request to relocate a piece. `piece` is the piece as it stood before
/// moving, including its history, so a move made against one board snapshot
/// is only applicable to snapshots where that exact piece still exists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub piece: Piece,
    pub to: Tile,
}

impl Move {
    pub fn new(piece: Piece, to: Tile) -> Move {
        Move { piece, to }
    }

    pub fn from(&self) -> Tile {
        self.piece.tile
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}->{}", self.piece, self.to)
    }
}
