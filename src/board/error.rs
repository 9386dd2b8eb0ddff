//! Error types for chess board operations.

use std::fmt;

use super::{Color, Piece, Square};

/// Why a move was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// No piece on the origin square
    EmptyOrigin,
    /// The origin holds a piece of the side not on move
    WrongColor { expected: Color, found: Color },
    /// Destination is not among the legal destinations of the origin
    UnreachableDestination,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveReason::EmptyOrigin => write!(f, "origin square is empty"),
            IllegalMoveReason::WrongColor { expected, found } => {
                write!(f, "{expected} to move, but the piece is {found}")
            }
            IllegalMoveReason::UnreachableDestination => {
                write!(f, "destination is not a legal target")
            }
        }
    }
}

/// Error type for applying and undoing moves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The move is not legal in the current position
    IllegalMove {
        from: Square,
        to: Square,
        reason: IllegalMoveReason,
    },
    /// Promotion choice is not one of queen, rook, bishop, knight
    InvalidPromotion { piece: Piece },
    /// Undo requested with no moves in the history
    EmptyHistory,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::IllegalMove { from, to, reason } => {
                write!(f, "Illegal move {from}{to}: {reason}")
            }
            MoveError::InvalidPromotion { piece } => {
                write!(f, "Cannot promote to {piece}")
            }
            MoveError::EmptyHistory => write!(f, "No moves to undo"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for coordinate move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for building a custom position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// A side has no king
    MissingKing { color: Color },
    /// A side has more than one king
    MultipleKings { color: Color, count: usize },
    /// A pawn placed on the first or last rank
    PawnOnBackRank { square: Square },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::MissingKing { color } => write!(f, "{color} has no king"),
            PositionError::MultipleKings { color, count } => {
                write!(f, "{color} has {count} kings, expected exactly one")
            }
            PositionError::PawnOnBackRank { square } => {
                write!(f, "Pawn on back rank square {square}")
            }
        }
    }
}

impl std::error::Error for PositionError {}
