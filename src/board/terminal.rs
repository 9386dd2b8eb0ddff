//! Game-over detection: checkmate, stalemate and draws.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, Game, Piece};

/// Why a position is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DrawReason {
    /// The same ply was played three times, four plies apart
    Repetition,
    /// Fifty plies with no pawn move and no capture
    FiftyMoveRule,
    /// Neither side can possibly deliver mate
    InsufficientMaterial,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawReason::Repetition => write!(f, "repetition"),
            DrawReason::FiftyMoveRule => write!(f, "fifty-move rule"),
            DrawReason::InsufficientMaterial => write!(f, "insufficient material"),
        }
    }
}

/// Classification of the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
}

impl GameStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "game in progress"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::Draw(reason) => write!(f, "draw by {reason}"),
        }
    }
}

impl Board {
    /// Bare kings, a lone minor piece against a bare king or another lone
    /// minor, or two knights against a bare king.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let white: Vec<Piece> = self.material(Color::White).collect();
        let black: Vec<Piece> = self.material(Color::Black).collect();

        let at_most_one_minor = |pieces: &[Piece]| match pieces {
            [] => true,
            [only] => only.is_minor(),
            _ => false,
        };
        let two_knights = |pieces: &[Piece]| matches!(pieces, [Piece::Knight, Piece::Knight]);

        (at_most_one_minor(&white) && at_most_one_minor(&black))
            || (two_knights(&white) && black.is_empty())
            || (two_knights(&black) && white.is_empty())
    }
}

impl Game {
    /// The winner if the side to move is checkmated.
    pub fn checkmate_winner(&mut self) -> Option<Color> {
        let color = self.side_to_move;
        (self.is_in_check(color) && !self.has_legal_move()).then_some(color.opponent())
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.checkmate_winner().is_some()
    }

    pub fn is_stalemate(&mut self) -> bool {
        let color = self.side_to_move;
        !self.is_in_check(color) && !self.has_legal_move()
    }

    /// First applicable draw rule, independent of whether anyone can move.
    #[must_use]
    pub fn draw_reason(&self) -> Option<DrawReason> {
        if self.history.is_repetition() {
            Some(DrawReason::Repetition)
        } else if self.history.is_fifty_move_draw() {
            Some(DrawReason::FiftyMoveRule)
        } else if self.board.is_insufficient_material() {
            Some(DrawReason::InsufficientMaterial)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.draw_reason().is_some()
    }

    /// Checkmate and stalemate take precedence over the draw rules.
    pub fn status(&mut self) -> GameStatus {
        let color = self.side_to_move;
        if !self.has_legal_move() {
            return if self.is_in_check(color) {
                GameStatus::Checkmate {
                    winner: color.opponent(),
                }
            } else {
                GameStatus::Stalemate
            };
        }
        match self.draw_reason() {
            Some(reason) => GameStatus::Draw(reason),
            None => GameStatus::Ongoing,
        }
    }
}
