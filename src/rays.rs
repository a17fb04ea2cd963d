// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Ray scanning for sliding pieces. A ray is the line of tiles running from
//! a piece to the edge of the board in one direction. A sliding piece may
//! travel along a ray up to the first occupied tile; it may stop on that tile
//! only if the occupant is an enemy.
use crate::board::Board;
use crate::geometry::TileRange;
use crate::piece::Piece;
use crate::types::{Direction, Tile};

/// An iterator adapter yielding items while a predicate holds, and then the
/// first item for which it does not.
#[derive(Clone, Debug)]
pub struct TakeThrough<I, P> {
    iter: I,
    predicate: P,
    done: bool,
}

impl<I, P> Iterator for TakeThrough<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }

        let item = self.iter.next()?;
        if !(self.predicate)(&item) {
            self.done = true;
        }

        Some(item)
    }
}

pub trait TakeThroughExt: Iterator + Sized {
    fn take_through<P>(self, predicate: P) -> TakeThrough<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        TakeThrough {
            iter: self,
            predicate,
            done: false,
        }
    }
}

impl<I: Iterator> TakeThroughExt for I {}

/// The ray from `tile` in direction `dir`, stopping at the last tile on the
/// board. Empty if `tile` already sits on the edge being travelled towards.
pub fn ray_to_edge(tile: Tile, dir: Direction, board: &Board) -> TileRange {
    let max = board.max_index();
    let room = |position: i32, step: i32| match step {
        1 => max - position,
        -1 => position,
        _ => i32::MAX,
    };

    let (rows, columns) = dir.as_vector();
    let length = room(tile.row, rows).min(room(tile.column, columns)).max(0);
    tile.range_to(tile.towards(dir, length))
}

/// Drops the final tile of `tiles` if it holds a piece of `piece`'s color.
pub fn drop_friendly_tail(piece: &Piece, board: &Board, tiles: &mut Vec<Tile>) {
    let friendly = tiles
        .last()
        .and_then(|&tile| board.piece_at(tile))
        .map_or(false, |occupant| occupant.color == piece.color);
    if friendly {
        tiles.pop();
    }
}

/// Walks `ray` away from `piece`, producing the tiles it may legally move to:
/// every empty tile up to the first occupied one, plus that tile if it holds
/// an enemy piece.
pub fn scan_ray<R>(piece: &Piece, board: &Board, ray: R) -> Vec<Tile>
where
    R: IntoIterator<Item = Tile>,
{
    let mut tiles: Vec<Tile> = ray
        .into_iter()
        .take_through(|&tile| board.piece_at(tile).is_none())
        .collect();
    drop_friendly_tail(piece, board, &mut tiles);
    tiles
}

/// Scans each of `directions` from `piece` to the edge of the board and
/// appends the results to `out`, in direction order.
pub fn scan_rays(piece: &Piece, board: &Board, directions: &[Direction], out: &mut Vec<Tile>) {
    for &dir in directions {
        let ray = ray_to_edge(piece.tile, dir, board);
        out.extend(scan_ray(piece, board, ray));
    }
}
