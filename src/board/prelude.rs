//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let mut game = Game::new();
//! assert_eq!(game.legal_plies().len(), 20);
//! ```

pub use super::{
    parse_coordinate_move, Board, Color, DrawReason, Game, GameBuilder, GameStatus, MoveError,
    MoveRecord, Piece, SpecialMove, Square, SquareList,
};
