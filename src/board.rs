// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt::{self, Write};

use crate::history::History;
use crate::moves::Move;
use crate::piece::Piece;
use crate::types::Tile;

/// Possible errors that can arise when assembling a `Board`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    InvalidDimension(i32),
    OutOfBounds(Tile),
    OccupiedTile(Tile),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoardError::InvalidDimension(dimension) => {
                write!(f, "invalid board dimension {}", dimension)
            }
            BoardError::OutOfBounds(tile) => write!(f, "tile {} is off the board", tile),
            BoardError::OccupiedTile(tile) => write!(f, "tile {} is already occupied", tile),
        }
    }
}

impl Error for BoardError {}

/// Index of a piece slot on a board. Ids are only meaningful for the board
/// that produced them: `apply_move` re-slots the moved piece at the end, so
/// later slots shift down by one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PieceId(usize);

impl PieceId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// An immutable snapshot of a square board of side `dimension`, the pieces
/// on it and every move applied to reach it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    dimension: i32,
    pieces: Vec<Piece>,
    #[serde(default)]
    history: History,
}

impl Default for Board {
    fn default() -> Board {
        Board {
            dimension: 8,
            pieces: vec![],
            history: History::new(),
        }
    }
}

//
// Construction
//

impl Board {
    /// Constructs an empty board with the given side length.
    pub fn new(dimension: i32) -> Result<Board, BoardError> {
        if dimension < 1 {
            return Err(BoardError::InvalidDimension(dimension));
        }

        Ok(Board {
            dimension,
            pieces: vec![],
            history: History::new(),
        })
    }

    /// Constructs a board holding the given pieces, in order. Fails if a
    /// piece lies off the board or shares a tile with an earlier piece.
    pub fn with_pieces<I>(dimension: i32, pieces: I) -> Result<Board, BoardError>
    where
        I: IntoIterator<Item = Piece>,
    {
        let mut board = Board::new(dimension)?;
        for piece in pieces {
            board.check_placement(piece.tile)?;
            board.pieces.push(piece);
        }

        Ok(board)
    }

    /// Returns a new board with `piece` added to it.
    pub fn add_piece(&self, piece: Piece) -> Result<Board, BoardError> {
        self.check_placement(piece.tile)?;
        let mut board = self.clone();
        board.pieces.push(piece);
        Ok(board)
    }

    fn check_placement(&self, tile: Tile) -> Result<(), BoardError> {
        if !self.in_bounds(tile) {
            return Err(BoardError::OutOfBounds(tile));
        }

        if self.piece_at(tile).is_some() {
            return Err(BoardError::OccupiedTile(tile));
        }

        Ok(())
    }
}

//
// Board state getters
//

impl Board {
    pub fn dimension(&self) -> i32 {
        self.dimension
    }

    pub fn max_index(&self) -> i32 {
        self.dimension - 1
    }

    pub fn in_bounds(&self, tile: Tile) -> bool {
        let range = 0..self.dimension;
        range.contains(&tile.row) && range.contains(&tile.column)
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the piece standing on `tile`, if there is one.
    pub fn piece_at(&self, tile: Tile) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.tile == tile)
    }

    /// Resolves a piece value to the slot holding exactly that piece.
    pub fn find(&self, piece: &Piece) -> Option<PieceId> {
        self.pieces
            .iter()
            .position(|candidate| candidate == piece)
            .map(PieceId)
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0)
    }
}

//
// Move application
//

impl Board {
    /// Applies a move, producing the next board. The move is rejected, and an
    /// identical board returned, if its piece is not on this board or its
    /// destination is off the board. Nothing else is checked: the destination
    /// need not be one the piece could legally reach.
    ///
    /// The moved piece is placed after every other piece, so a piece already
    /// standing on the destination keeps answering `piece_at` for that tile.
    pub fn apply_move(&self, mov: &Move) -> Board {
        let id = match self.find(&mov.piece) {
            Some(id) => id,
            None => {
                debug!("rejecting move {}: piece is not on the board", mov);
                return self.clone();
            }
        };

        if !self.in_bounds(mov.to) {
            debug!("rejecting move {}: destination is off the board", mov);
            return self.clone();
        }

        let mut pieces = self.pieces.clone();
        let piece = pieces.remove(id.0);
        pieces.push(piece.moved(mov));
        Board {
            dimension: self.dimension,
            pieces,
            history: self.history.push(mov.clone()),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in (0..self.dimension).rev() {
            for column in 0..self.dimension {
                let chr = self
                    .piece_at(Tile::new(row, column))
                    .map(Piece::symbol)
                    .unwrap_or('.');
                f.write_char(chr)?;
            }
            f.write_char('\n')?;
        }

        Ok(())
    }
}
