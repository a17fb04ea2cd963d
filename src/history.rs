// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! An append-only log of moves with structural sharing. Boards and pieces
//! each carry one; applying a move pushes onto the log and produces a new
//! log that shares every earlier entry with the old one, so snapshots are
//! never deep-copied.
use std::fmt;
use std::iter::FromIterator;
use std::sync::Arc;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::moves::Move;

struct Entry {
    mov: Move,
    prev: Option<Arc<Entry>>,
}

#[derive(Clone, Default)]
pub struct History {
    head: Option<Arc<Entry>>,
    len: usize,
}

impl History {
    pub fn new() -> History {
        History { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The most recently recorded move, if any.
    pub fn last(&self) -> Option<&Move> {
        self.head.as_ref().map(|entry| &entry.mov)
    }

    /// Returns a new history with `mov` appended. `self` is left untouched
    /// and shares all of its entries with the result.
    pub fn push(&self, mov: Move) -> History {
        History {
            head: Some(Arc::new(Entry {
                mov,
                prev: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Iterates the recorded moves in the order they were made.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Move> + ExactSizeIterator {
        let mut moves = Vec::with_capacity(self.len);
        let mut cursor = self.head.as_ref();
        while let Some(entry) = cursor {
            moves.push(&entry.mov);
            cursor = entry.prev.as_ref();
        }

        moves.into_iter().rev()
    }

    pub fn to_vec(&self) -> Vec<Move> {
        self.iter().cloned().collect()
    }

    /// Returns true if `self` was produced by pushing zero or more moves onto
    /// `older`, sharing its storage.
    pub fn extends(&self, older: &History) -> bool {
        let target = match older.head {
            Some(ref head) => head,
            None => return true,
        };

        let mut cursor = self.head.as_ref();
        while let Some(entry) = cursor {
            if Arc::ptr_eq(entry, target) {
                return true;
            }
            cursor = entry.prev.as_ref();
        }

        false
    }
}

// Unlink iteratively so that dropping a long log can't overflow the stack.
impl Drop for History {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(entry) = cursor {
            match Arc::try_unwrap(entry) {
                Ok(mut entry) => cursor = entry.prev.take(),
                Err(_) => break,
            }
        }
    }
}

impl PartialEq for History {
    fn eq(&self, other: &History) -> bool {
        if self.len != other.len {
            return false;
        }

        if let (Some(a), Some(b)) = (&self.head, &other.head) {
            if Arc::ptr_eq(a, b) {
                return true;
            }
        }

        self.iter().eq(other.iter())
    }
}

impl Eq for History {}

impl fmt::Debug for History {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl FromIterator<Move> for History {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> History {
        iter.into_iter()
            .fold(History::new(), |history, mov| history.push(mov))
    }
}

impl Serialize for History {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for History {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<History, D::Error> {
        let moves = Vec::<Move>::deserialize(deserializer)?;
        Ok(moves.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::History;
    use crate::moves::Move;
    use crate::piece::Piece;
    use crate::types::{Color, PieceKind, Tile};

    fn rook_move(column: i32) -> Move {
        let rook = Piece::new(PieceKind::Rook, Color::White, Tile::new(0, 0));
        Move::new(rook, Tile::new(0, column))
    }

    #[test]
    fn push_leaves_original_untouched() {
        let empty = History::new();
        let one = empty.push(rook_move(1));
        let two = one.push(rook_move(2));

        assert!(empty.is_empty());
        assert_eq!(1, one.len());
        assert_eq!(2, two.len());
        assert_eq!(Some(&rook_move(2)), two.last());
        assert_eq!(Some(&rook_move(1)), one.last());
    }

    #[test]
    fn iterates_chronologically() {
        let history: History = (1..=4).map(rook_move).collect();
        let columns: Vec<_> = history.iter().map(|mov| mov.to.column).collect();
        assert_eq!(vec![1, 2, 3, 4], columns);
    }

    #[test]
    fn structural_equality() {
        let a = History::new().push(rook_move(1)).push(rook_move(2));
        let b: History = vec![rook_move(1), rook_move(2)].into_iter().collect();
        let c: History = vec![rook_move(2), rook_move(1)].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, History::new());
    }

    #[test]
    fn pushes_share_storage() {
        let base = History::new().push(rook_move(1));
        let left = base.push(rook_move(2));
        let right = base.push(rook_move(3));
        assert!(left.extends(&base));
        assert!(right.extends(&base));
        assert!(!left.extends(&right));
        assert!(base.extends(&History::new()));
    }

    #[test]
    fn long_history_drops() {
        let history: History = (0..100_000).map(|i| rook_move(i % 8)).collect();
        assert_eq!(100_000, history.len());
        drop(history);
    }
}
