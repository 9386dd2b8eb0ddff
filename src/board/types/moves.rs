//! Move records and destination lists.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

/// Upper bound on destinations from one square (a centralized queen has 27).
pub(crate) const MAX_DESTINATIONS: usize = 32;

/// Which side of the board a castle goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// File the king lands on.
    #[inline]
    #[must_use]
    pub const fn king_to_file(self) -> usize {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// Corner file the rook starts from.
    #[inline]
    #[must_use]
    pub const fn rook_from_file(self) -> usize {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// File the rook is relocated to.
    #[inline]
    #[must_use]
    pub const fn rook_to_file(self) -> usize {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    /// Identify the castle a king move from the e-file would be.
    #[must_use]
    pub(crate) fn from_king_destination(from: Square, to: Square) -> Option<CastleSide> {
        if from.0 != to.0 || from.1 != 4 {
            return None;
        }
        match to.1 {
            6 => Some(CastleSide::Kingside),
            2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}

/// Side effect attached to a move beyond "piece goes from A to B".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpecialMove {
    #[default]
    None,
    /// The captured pawn sat beside the origin, not on the destination.
    EnPassant,
    /// The matching rook was relocated next to the king.
    Castle(CastleSide),
}

/// One entry of the move history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    /// The piece that left `from`, as it was before any promotion.
    pub piece: (Color, Piece),
    pub from: Square,
    /// Whatever occupied `to` before the move. `None` for en passant.
    pub captured: Option<(Color, Piece)>,
    pub to: Square,
    pub special: SpecialMove,
    /// Kind placed on `to` when a pawn reached the last rank.
    pub promotion: Option<Piece>,
}

impl MoveRecord {
    #[inline]
    #[must_use]
    pub fn color(&self) -> Color {
        self.piece.0
    }

    #[inline]
    #[must_use]
    pub fn is_pawn_move(&self) -> bool {
        self.piece.1 == Piece::Pawn
    }

    #[inline]
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some() || self.special == SpecialMove::EnPassant
    }

    /// Square of the pawn removed by an en passant capture.
    #[must_use]
    pub fn en_passant_victim(&self) -> Option<Square> {
        match self.special {
            SpecialMove::EnPassant => Some(Square(self.from.0, self.to.1)),
            _ => None,
        }
    }

    /// True when this record is a pawn advancing two squares from its start rank.
    #[must_use]
    pub fn is_double_pawn_push(&self) -> bool {
        let (color, piece) = self.piece;
        piece == Piece::Pawn
            && self.from.0 == color.pawn_start_rank()
            && self.from.1 == self.to.1
            && self.to.0 as isize == self.from.0 as isize + 2 * color.pawn_direction()
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.special {
            SpecialMove::Castle(CastleSide::Kingside) => write!(f, "O-O"),
            SpecialMove::Castle(CastleSide::Queenside) => write!(f, "O-O-O"),
            _ => {
                write!(f, "{}{}", self.from, self.to)?;
                if let Some(promo) = self.promotion {
                    write!(f, "{}", promo.to_char())?;
                }
                Ok(())
            }
        }
    }
}

/// Fixed-size list of destination squares to avoid heap allocation.
#[derive(Clone, Copy)]
pub struct SquareList {
    squares: [Square; MAX_DESTINATIONS],
    len: usize,
}

impl SquareList {
    #[must_use]
    pub const fn new() -> Self {
        SquareList {
            squares: [Square(0, 0); MAX_DESTINATIONS],
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, sq: Square) {
        debug_assert!(self.len < MAX_DESTINATIONS, "SquareList overflow");
        self.squares[self.len] = sq;
        self.len += 1;
    }

    /// Keep only the squares for which `keep` returns true, preserving order.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(Square) -> bool) {
        let mut write = 0;
        for read in 0..self.len {
            let sq = self.squares[read];
            if keep(sq) {
                self.squares[write] = sq;
                write += 1;
            }
        }
        self.len = write;
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Square> {
        self.as_slice().to_vec()
    }
}

impl Default for SquareList {
    fn default() -> Self {
        SquareList::new()
    }
}

impl fmt::Debug for SquareList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl PartialEq for SquareList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for SquareList {}

impl<'a> IntoIterator for &'a SquareList {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Owning iterator over a `SquareList`
pub struct SquareListIntoIter {
    list: SquareList,
    idx: usize,
}

impl Iterator for SquareListIntoIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let sq = self.list.squares[self.idx];
            self.idx += 1;
            Some(sq)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SquareListIntoIter {}

impl IntoIterator for SquareList {
    type Item = Square;
    type IntoIter = SquareListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        SquareListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for SquareList {
    type Output = Square;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "SquareList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.squares[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(piece: Piece, from: Square, to: Square) -> MoveRecord {
        MoveRecord {
            piece: (Color::White, piece),
            from,
            captured: None,
            to,
            special: SpecialMove::None,
            promotion: None,
        }
    }

    #[test]
    fn test_double_push_detection() {
        assert!(record(Piece::Pawn, Square(1, 4), Square(3, 4)).is_double_pawn_push());
        assert!(!record(Piece::Pawn, Square(1, 4), Square(2, 4)).is_double_pawn_push());
        assert!(!record(Piece::Rook, Square(1, 4), Square(3, 4)).is_double_pawn_push());
    }

    #[test]
    fn test_en_passant_victim_square() {
        let mut rec = record(Piece::Pawn, Square(4, 4), Square(5, 3));
        assert_eq!(rec.en_passant_victim(), None);
        rec.special = SpecialMove::EnPassant;
        assert_eq!(rec.en_passant_victim(), Some(Square(4, 3)));
        assert!(rec.is_capture());
    }

    #[test]
    fn test_record_display() {
        let mut rec = record(Piece::Pawn, Square(6, 0), Square(7, 0));
        rec.promotion = Some(Piece::Knight);
        assert_eq!(rec.to_string(), "a7a8n");

        let mut castle = record(Piece::King, Square(0, 4), Square(0, 2));
        castle.special = SpecialMove::Castle(CastleSide::Queenside);
        assert_eq!(castle.to_string(), "O-O-O");
    }

    #[test]
    fn test_square_list_retain_keeps_order() {
        let mut list = SquareList::new();
        for f in 0..6 {
            list.push(Square(0, f));
        }
        list.retain(|sq| sq.1 % 2 == 0);
        assert_eq!(list.to_vec(), vec![Square(0, 0), Square(0, 2), Square(0, 4)]);
        assert_eq!(list[1], Square(0, 2));
    }

    #[test]
    fn test_castle_side_from_king_move() {
        assert_eq!(
            CastleSide::from_king_destination(Square(0, 4), Square(0, 6)),
            Some(CastleSide::Kingside)
        );
        assert_eq!(
            CastleSide::from_king_destination(Square(7, 4), Square(7, 2)),
            Some(CastleSide::Queenside)
        );
        assert_eq!(
            CastleSide::from_king_destination(Square(0, 4), Square(0, 5)),
            None
        );
    }
}
