// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Straight-line geometry between tiles. Sliding pieces move along ranks,
//! files and diagonals; a `TileRange` walks such a line one tile at a time,
//! starting next to its origin and ending exactly on its destination.
//!
//! Ranges are total: asking for the range between two tiles that do not
//! share a line produces an empty range rather than an error.
use std::iter::{ExactSizeIterator, FusedIterator, Iterator};

use crate::types::Tile;

impl Tile {
    // Deltas are taken in i64 so that tiles at the far ends of the i32 range
    // still compare without overflowing.
    fn delta(self, other: Tile) -> (i64, i64) {
        (
            i64::from(other.row) - i64::from(self.row),
            i64::from(other.column) - i64::from(self.column),
        )
    }

    /// Returns true if the two tiles share a row, a column or a diagonal.
    /// A tile is aligned with itself.
    pub fn is_aligned_with(self, other: Tile) -> bool {
        let (rows, columns) = self.delta(other);
        let (rows, columns) = (rows.abs(), columns.abs());
        rows == 0 || columns == 0 || rows == columns
    }

    /// The number of king steps between the two tiles.
    pub fn chebyshev_distance(self, other: Tile) -> u32 {
        let (rows, columns) = self.delta(other);
        rows.abs().max(columns.abs()) as u32
    }

    /// Produces the tiles on the line from this tile to `to`, nearest first.
    /// The range never contains `self` and always ends on `to`, unless the
    /// two tiles are not aligned (or are equal), in which case it is empty.
    pub fn range_to(self, to: Tile) -> TileRange {
        if !self.is_aligned_with(to) || self == to {
            return TileRange::empty(self);
        }

        let (rows, columns) = self.delta(to);
        let step = (rows.signum() as i32, columns.signum() as i32);
        TileRange {
            next: self.offset(step.0, step.1),
            step,
            remaining: self.chebyshev_distance(to),
        }
    }
}

/// Collects the tiles strictly after `from` up to and including `to`.
pub fn tiles_between(from: Tile, to: Tile) -> Vec<Tile> {
    from.range_to(to).collect()
}

/// An iterator over the tiles of a straight line, in unit steps.
#[derive(Clone, Debug)]
pub struct TileRange {
    next: Tile,
    step: (i32, i32),
    remaining: u32,
}

impl TileRange {
    fn empty(at: Tile) -> TileRange {
        TileRange {
            next: at,
            step: (0, 0),
            remaining: 0,
        }
    }
}

impl Iterator for TileRange {
    type Item = Tile;

    fn next(&mut self) -> Option<Tile> {
        if self.remaining == 0 {
            return None;
        }

        let tile = self.next;
        self.remaining -= 1;
        // never step past the final tile, which may sit on the edge of i32.
        if self.remaining > 0 {
            self.next = tile.offset(self.step.0, self.step.1);
        }
        Some(tile)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for TileRange {}

impl FusedIterator for TileRange {}
