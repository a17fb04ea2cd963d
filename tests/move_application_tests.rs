// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::thread;

use tilechess::{legal_destinations, Board, Color, Move, Piece, PieceKind, Tile};

fn start_board() -> Board {
    Board::with_pieces(
        8,
        vec![
            Piece::new(PieceKind::Rook, Color::White, Tile::new(0, 0)),
            Piece::new(PieceKind::Knight, Color::White, Tile::new(0, 1)),
            Piece::new(PieceKind::Pawn, Color::White, Tile::new(1, 0)),
            Piece::new(PieceKind::Rook, Color::Black, Tile::new(7, 7)),
            Piece::new(PieceKind::Pawn, Color::Black, Tile::new(6, 7)),
        ],
    )
    .unwrap()
}

#[test]
fn smoke_test_moving_a_pawn() {
    let _ = env_logger::try_init();
    let board = start_board();
    let pawn = board.piece_at(Tile::new(1, 0)).unwrap().clone();
    let mov = Move::new(pawn.clone(), Tile::new(3, 0));
    let next = board.apply_move(&mov);

    // one more move on the board, and one more on the pawn.
    assert_eq!(board.history().len() + 1, next.history().len());
    assert_eq!(Some(&mov), next.history().last());

    let moved = next.piece_at(Tile::new(3, 0)).unwrap();
    assert_eq!(PieceKind::Pawn, moved.kind);
    assert_eq!(Color::White, moved.color);
    assert_eq!(pawn.history.len() + 1, moved.history.len());

    // nothing left behind, nothing else touched.
    assert!(next.piece_at(Tile::new(1, 0)).is_none());
    assert_eq!(board.pieces().len(), next.pieces().len());
    for piece in board.pieces().iter().filter(|&p| p != &pawn) {
        assert!(next.find(piece).is_some(), "{} went missing", piece);
    }
}

#[test]
fn original_board_is_untouched() {
    let board = start_board();
    let before = board.clone();
    let rook = board.piece_at(Tile::new(0, 0)).unwrap().clone();
    let _ = board.apply_move(&Move::new(rook, Tile::new(5, 0)));
    assert_eq!(before, board);
}

#[test]
fn rejected_moves_return_an_equal_board() {
    let board = start_board();
    let rook = board.piece_at(Tile::new(0, 0)).unwrap().clone();
    let ghost = Piece::new(PieceKind::Queen, Color::White, Tile::new(4, 4));

    let rejected = vec![
        Move::new(ghost, Tile::new(4, 5)),
        Move::new(rook.clone(), Tile::new(0, 8)),
        Move::new(rook.clone(), Tile::new(-1, 0)),
        Move::new(rook.clone(), Tile::new(8, 8)),
    ];

    for mov in &rejected {
        let next = board.apply_move(mov);
        assert_eq!(board, next, "{} should have been rejected", mov);
        assert!(next.history().is_empty());
    }
}

#[test]
fn legality_is_not_checked_on_application() {
    // the rook cannot reach (5,5), and (0,1) holds a friendly knight that
    // blocks it, but application only checks existence and bounds.
    let board = start_board();
    let rook = board.piece_at(Tile::new(0, 0)).unwrap().clone();
    assert!(!legal_destinations(&rook, &board).contains(&Tile::new(5, 5)));

    let next = board.apply_move(&Move::new(rook, Tile::new(5, 5)));
    assert_eq!(PieceKind::Rook, next.piece_at(Tile::new(5, 5)).unwrap().kind);
}

#[test]
fn capture_leaves_other_pieces_unchanged() {
    let board = start_board();
    let rook = board.piece_at(Tile::new(7, 7)).unwrap().clone();
    let pawn = board.piece_at(Tile::new(1, 0)).unwrap().clone();
    let mov = Move::new(rook.clone(), Tile::new(1, 0));
    let next = board.apply_move(&mov);

    assert_eq!(board.pieces().len(), next.pieces().len());
    assert!(next.find(&pawn).is_some());

    // the pawn was there first, so it still answers for the tile.
    assert_eq!(Some(&pawn), next.piece_at(Tile::new(1, 0)));
    assert_eq!(Some(&rook.moved(&mov)), next.pieces().last());
}

#[test]
fn capture_result_does_not_depend_on_piece_order() {
    let rook = Piece::new(PieceKind::Rook, Color::White, Tile::new(0, 0));
    let pawn = Piece::new(PieceKind::Pawn, Color::Black, Tile::new(0, 3));
    let mov = Move::new(rook.clone(), Tile::new(0, 3));

    let orders = vec![vec![rook.clone(), pawn.clone()], vec![pawn.clone(), rook]];
    for pieces in orders {
        let board = Board::with_pieces(8, pieces).unwrap();
        let next = board.apply_move(&mov);
        assert_eq!(PieceKind::Pawn, next.piece_at(Tile::new(0, 3)).unwrap().kind);
    }
}

#[test]
fn moves_chain_through_history() {
    let board = start_board();
    let knight = board.piece_at(Tile::new(0, 1)).unwrap().clone();
    let first = Move::new(knight, Tile::new(2, 2));
    let board = board.apply_move(&first);

    let knight = board.piece_at(Tile::new(2, 2)).unwrap().clone();
    let second = Move::new(knight, Tile::new(4, 3));
    let board = board.apply_move(&second);

    assert_eq!(vec![first.clone(), second.clone()], board.history().to_vec());
    let knight = board.piece_at(Tile::new(4, 3)).unwrap();
    assert_eq!(vec![first, second], knight.history.to_vec());
}

#[test]
fn boards_are_shareable_across_threads() {
    let board = start_board();
    let handles: Vec<_> = board
        .pieces()
        .iter()
        .cloned()
        .map(|piece| {
            let board = board.clone();
            thread::spawn(move || legal_destinations(&piece, &board).len())
        })
        .collect();

    let counts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let expected: Vec<_> = board
        .pieces()
        .iter()
        .map(|piece| legal_destinations(piece, &board).len())
        .collect();
    assert_eq!(expected, counts);
}
