// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use arrayvec::ArrayVec;
use hashbrown::HashSet;

use crate::board::Board;
use crate::piece::Piece;
use crate::rays;
use crate::types::{Direction, PieceKind, Tile};
use crate::types::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};

pub type TileVec = Vec<Tile>;

pub static KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

/// How a kind of piece travels across the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Movement {
    /// Slides any distance along each direction until blocked.
    Slide(&'static [Direction]),

    /// Jumps to each `(rows, columns)` offset, ignoring anything in between.
    Leap(&'static [(i32, i32); 8]),

    /// Pushes forward onto empty tiles and captures diagonally forward.
    Pawn,

    /// Not moved by this generator.
    Stationary,
}

impl PieceKind {
    pub fn movement(self) -> Movement {
        match self {
            PieceKind::Rook => Movement::Slide(&ROOK_DIRECTIONS),
            PieceKind::Bishop => Movement::Slide(&BISHOP_DIRECTIONS),
            PieceKind::Queen => Movement::Slide(&QUEEN_DIRECTIONS),
            PieceKind::Knight => Movement::Leap(&KNIGHT_OFFSETS),
            PieceKind::Pawn => Movement::Pawn,
            PieceKind::King => Movement::Stationary,
        }
    }
}

/// Generates the tiles a piece may move to given the occupancy of a board.
/// Check, castling, en passant and promotion are not considered, nor is
/// whose turn it is.
#[derive(Copy, Clone, Debug, Default)]
pub struct MoveGenerator;

impl MoveGenerator {
    pub fn new() -> MoveGenerator {
        MoveGenerator
    }

    /// Appends every legal destination of `piece` to `tiles`. Destinations
    /// appear once each, in generation order.
    pub fn generate_destinations(&self, piece: &Piece, board: &Board, tiles: &mut TileVec) {
        if !board.in_bounds(piece.tile) {
            warn!("piece {} is off the board, generating no moves", piece);
            return;
        }

        let start = tiles.len();
        match piece.kind.movement() {
            Movement::Slide(directions) => self.generate_slides(piece, board, directions, tiles),
            Movement::Leap(offsets) => self.generate_leaps(piece, board, offsets, tiles),
            Movement::Pawn => self.generate_pawn_moves(piece, board, tiles),
            Movement::Stationary => {}
        }

        dedup_from(tiles, start);
        trace!(
            "generated {} destinations for {}",
            tiles.len() - start,
            piece
        );
    }

    /// Appends the destinations of `piece` sliding along the given
    /// directions only, regardless of the piece's kind.
    pub fn generate_slides(
        &self,
        piece: &Piece,
        board: &Board,
        directions: &[Direction],
        tiles: &mut TileVec,
    ) {
        rays::scan_rays(piece, board, directions, tiles);
    }

    fn generate_leaps(
        &self,
        piece: &Piece,
        board: &Board,
        offsets: &[(i32, i32); 8],
        tiles: &mut TileVec,
    ) {
        let targets: ArrayVec<[Tile; 8]> = offsets
            .iter()
            .map(|&(rows, columns)| piece.tile.offset(rows, columns))
            .filter(|&target| board.in_bounds(target))
            .filter(|&target| {
                board
                    .piece_at(target)
                    .map_or(true, |occupant| occupant.color != piece.color)
            })
            .collect();
        tiles.extend(targets);
    }

    fn generate_pawn_moves(&self, piece: &Piece, board: &Board, tiles: &mut TileVec) {
        let forward = piece.color.forward();
        let steps = if piece.on_starting_row(board) { 2 } else { 1 };

        // Pawns never capture forward. Each forward tile is judged on its own.
        let mut targets: ArrayVec<[Tile; 4]> = piece
            .tile
            .range_to(piece.tile.offset(forward * steps, 0))
            .filter(|&target| board.in_bounds(target) && board.piece_at(target).is_none())
            .collect();

        for &side in &[1, -1] {
            let target = piece.tile.offset(forward, side);
            if !board.in_bounds(target) {
                continue;
            }

            let enemy = piece.color.opposite();
            if board.piece_at(target).map(|occupant| occupant.color) == Some(enemy) {
                targets.push(target);
            }
        }

        tiles.extend(targets);
    }
}

/// Removes repeated tiles from `tiles[start..]`, keeping first occurrences.
fn dedup_from(tiles: &mut TileVec, start: usize) {
    let mut seen = HashSet::new();
    let mut index = start;
    while index < tiles.len() {
        if seen.insert(tiles[index]) {
            index += 1;
        } else {
            tiles.remove(index);
        }
    }
}

/// Convenience wrapper collecting the legal destinations of `piece`.
pub fn legal_destinations(piece: &Piece, board: &Board) -> TileVec {
    let mut tiles = TileVec::new();
    MoveGenerator::new().generate_destinations(piece, board, &mut tiles);
    tiles
}
