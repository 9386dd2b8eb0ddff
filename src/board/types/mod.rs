//! Core chess types.
//!
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - (rank, file) board coordinate
//! - `MoveRecord`, `SpecialMove`, `CastleSide` - move history entries
//! - `SquareList` - fixed-capacity destination list

mod moves;
mod piece;
mod square;

pub use moves::{CastleSide, MoveRecord, SpecialMove, SquareList, SquareListIntoIter};
pub use piece::{Color, Piece, PROMOTION_PIECES};
pub use square::Square;
