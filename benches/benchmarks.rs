// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate criterion;

use criterion::black_box;
use criterion::Criterion;
use tilechess::{legal_destinations, perft, Board, Color, Move, Piece, PieceKind, Tile};

fn lone(kind: PieceKind, tile: Tile) -> (Piece, Board) {
    let piece = Piece::new(kind, Color::White, tile);
    let board = Board::with_pieces(8, vec![piece.clone()]).unwrap();
    (piece, board)
}

fn criterion_benchmark(c: &mut Criterion) {
    let _ = env_logger::try_init();

    c.bench_function("queen destinations d4 empty board", |b| {
        let (queen, board) = lone(PieceKind::Queen, Tile::new(3, 3));
        b.iter(|| legal_destinations(black_box(&queen), black_box(&board)))
    });

    c.bench_function("knight destinations d4", |b| {
        let (knight, board) = lone(PieceKind::Knight, Tile::new(3, 3));
        b.iter(|| legal_destinations(black_box(&knight), black_box(&board)))
    });

    c.bench_function("apply move", |b| {
        let (rook, board) = lone(PieceKind::Rook, Tile::new(0, 0));
        let mov = Move::new(rook, Tile::new(0, 7));
        b.iter(|| black_box(&board).apply_move(black_box(&mov)))
    });

    c.bench_function("perft 2 two rooks and a knight", |b| {
        let board = Board::with_pieces(
            8,
            vec![
                Piece::new(PieceKind::Rook, Color::White, Tile::new(0, 0)),
                Piece::new(PieceKind::Rook, Color::Black, Tile::new(7, 7)),
                Piece::new(PieceKind::Knight, Color::White, Tile::new(3, 3)),
            ],
        )
        .unwrap();
        b.iter(|| perft(black_box(&board), 2))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
