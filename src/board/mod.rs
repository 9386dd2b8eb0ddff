//! Chess board representation and game rules.
//!
//! `Game` owns the board, the side to move and the move history. It lists
//! legal destinations, applies and undoes moves (castling, en passant and
//! promotion included) and classifies finished games.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Game, Square};
//!
//! let mut game = Game::new();
//! let targets = game.legal_destinations(Square(1, 4));
//! assert_eq!(targets.len(), 2);
//!
//! game.apply_move(Square(1, 4), Square(3, 4), None).unwrap();
//! assert_eq!(game.side_to_move(), Color::Black);
//! game.undo_move().unwrap();
//! assert_eq!(game, Game::new());
//! ```

mod builder;
mod error;
mod history;
mod make_unmake;
mod movegen;
mod notation;
pub mod prelude;
mod state;
mod terminal;
mod types;

#[cfg(test)]
mod tests;

pub use builder::GameBuilder;
pub use error::{IllegalMoveReason, MoveError, MoveParseError, PositionError, SquareError};
pub use history::{History, FIFTY_MOVE_PLIES};
pub use notation::{parse_coordinate_move, CoordinateMove};
pub use state::{Board, Game, Slot};
pub use terminal::{DrawReason, GameStatus};
pub use types::{
    CastleSide, Color, MoveRecord, Piece, SpecialMove, Square, SquareList, SquareListIntoIter,
    PROMOTION_PIECES,
};
