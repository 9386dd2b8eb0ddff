pub mod board;
pub mod console;

pub use board::{
    parse_coordinate_move, Board, Color, DrawReason, Game, GameBuilder, GameStatus, MoveError,
    MoveRecord, Piece, Square,
};
