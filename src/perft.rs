// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use rayon::prelude::*;

use crate::board::Board;
use crate::move_generator::{MoveGenerator, TileVec};
use crate::moves::Move;

/// Every move available on `board`: each legal destination of each piece,
/// pieces taken in board order. There is no side to move, so both colors'
/// moves are included.
pub fn all_moves(board: &Board) -> Vec<Move> {
    let movegen = MoveGenerator::new();
    let mut moves = vec![];
    let mut tiles = TileVec::new();
    for piece in board.pieces() {
        tiles.clear();
        movegen.generate_destinations(piece, board, &mut tiles);
        moves.extend(tiles.iter().map(|&to| Move::new(piece.clone(), to)));
    }

    moves
}

/// Counts the boards reachable from `board` in exactly `depth` moves.
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    all_moves(board)
        .par_iter()
        .map(|mov| perft(&board.apply_move(mov), depth - 1))
        .sum()
}
