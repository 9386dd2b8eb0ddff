//! Fluent builder for constructing games from custom positions.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, GameBuilder, Piece, Square};
//!
//! let game = GameBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(game.board().occupied().count(), 3);
//! ```

use super::history::History;
use super::{Board, Color, Game, MoveRecord, Piece, PositionError, Square};

/// A fluent builder for constructing `Game` positions.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    board: Board,
    side_to_move: Color,
    history: Vec<MoveRecord>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    /// Create a builder with an empty board.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            history: Vec::new(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        GameBuilder {
            board: Board::standard(),
            ..Self::new()
        }
    }

    /// Place a piece on the board, replacing anything already there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board.set_piece(square, Some((color, piece)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.set_piece(square, None);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Seed the move log, e.g. to mark a king or rook as already moved or to
    /// make an en passant capture available.
    #[must_use]
    pub fn history(mut self, records: impl IntoIterator<Item = MoveRecord>) -> Self {
        self.history.extend(records);
        self
    }

    /// Validate and build the game.
    ///
    /// Each side needs exactly one king and no pawn may stand on the first or
    /// last rank.
    pub fn build(self) -> Result<Game, PositionError> {
        for color in Color::BOTH {
            let count = self
                .board
                .occupied()
                .filter(|&(_, c, p)| c == color && p == Piece::King)
                .count();
            match count {
                0 => return Err(PositionError::MissingKing { color }),
                1 => {}
                _ => return Err(PositionError::MultipleKings { color, count }),
            }
        }
        if let Some((square, _, _)) = self
            .board
            .occupied()
            .find(|&(sq, _, p)| p == Piece::Pawn && (sq.0 == 0 || sq.0 == 7))
        {
            return Err(PositionError::PawnOnBackRank { square });
        }

        #[cfg(feature = "logging")]
        log::info!(
            "built custom game, {} to move, {} logged plies",
            self.side_to_move,
            self.history.len()
        );

        Ok(Game {
            board: self.board,
            side_to_move: self.side_to_move,
            history: History::from_records(self.history),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kings() -> GameBuilder {
        GameBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .piece(Square(7, 4), Color::Black, Piece::King)
    }

    #[test]
    fn test_starting_position() {
        let built = GameBuilder::starting_position().build().unwrap();
        assert_eq!(built, Game::new());
    }

    #[test]
    fn test_kings_only() {
        let game = kings().build().unwrap();
        assert!(game.board().piece_at(Square(0, 4)).is_some());
        assert!(game.board().piece_at(Square(7, 4)).is_some());
        assert!(game.board().piece_at(Square(0, 0)).is_none());
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_side_to_move() {
        let game = kings().side_to_move(Color::Black).build().unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn test_clear_square() {
        let game = GameBuilder::starting_position()
            .clear(Square(0, 0))
            .build()
            .unwrap();
        assert!(game.board().piece_at(Square(0, 0)).is_none());
        assert!(game.board().piece_at(Square(0, 1)).is_some());
    }

    #[test]
    fn test_missing_king_rejected() {
        let err = GameBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            PositionError::MissingKing {
                color: Color::Black
            }
        );
    }

    #[test]
    fn test_extra_king_rejected() {
        let err = kings()
            .piece(Square(3, 3), Color::White, Piece::King)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            PositionError::MultipleKings {
                color: Color::White,
                count: 2
            }
        );
    }

    #[test]
    fn test_pawn_on_back_rank_rejected() {
        let err = kings()
            .piece(Square(7, 0), Color::White, Piece::Pawn)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            PositionError::PawnOnBackRank {
                square: Square(7, 0)
            }
        );
    }
}
