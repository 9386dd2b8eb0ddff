//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Legal move tree counts
//! - `draw.rs` - Draw detection (fifty-move, repetition, insufficient material)
//! - `make_unmake.rs` - Apply/undo correctness
//! - `edge_cases.rs` - Special positions, castling, checkmate and stalemate
//! - `proptest.rs` - Property-based tests

mod proptest;

use crate::board::{parse_coordinate_move, Color, Game, GameBuilder, Piece, Square};
use rand::prelude::*;

/// Build a game from the piece-placement field of a FEN string.
pub(super) fn position(placement: &str, side_to_move: Color) -> Game {
    let mut builder = GameBuilder::new().side_to_move(side_to_move);
    for (row, rank_text) in placement.split('/').enumerate() {
        let rank = 7 - row;
        let mut file = 0;
        for c in rank_text.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as usize;
                continue;
            }
            let piece = Piece::from_char(c).expect("bad piece letter");
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            builder = builder.piece(Square(rank, file), color, piece);
            file += 1;
        }
    }
    builder.build().expect("invalid test position")
}

/// Play coordinate moves, panicking on the first illegal one.
pub(super) fn play(game: &mut Game, moves: &[&str]) {
    for text in moves {
        let mv = parse_coordinate_move(text).expect("bad notation");
        game.apply_move(mv.from, mv.to, mv.promotion)
            .unwrap_or_else(|e| panic!("{text} rejected: {e}"));
    }
}

pub(super) fn sq(text: &str) -> Square {
    text.parse().expect("bad square")
}

/// Play up to `plies` random legal moves, stopping early if the game is over.
pub(super) fn random_playout(game: &mut Game, rng: &mut StdRng, plies: usize) -> usize {
    let mut played = 0;
    for _ in 0..plies {
        let moves = game.legal_plies();
        if moves.is_empty() {
            break;
        }
        let (from, to) = moves[rng.gen_range(0..moves.len())];
        let promotion = crate::board::PROMOTION_PIECES[rng.gen_range(0..4)];
        game.apply_move(from, to, Some(promotion))
            .expect("generated move must be legal");
        played += 1;
    }
    played
}
