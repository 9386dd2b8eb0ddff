//! Move history and the rules derived from it.
//!
//! The log is the only record of whether a king or rook has left its home
//! square and of which pawn may be taken en passant. Nothing is cached, so
//! popping an entry on undo is all it takes to roll those facts back.

use super::{Color, MoveRecord, Piece, Square};

/// Plies without a pawn move or capture that end the game in a draw.
pub const FIFTY_MOVE_PLIES: usize = 50;

/// Distance between identical records for the repetition check.
const REPETITION_STRIDE: usize = 4;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    records: Vec<MoveRecord>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        History {
            records: Vec::new(),
        }
    }

    pub(crate) fn from_records(records: Vec<MoveRecord>) -> Self {
        History { records }
    }

    pub(crate) fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    pub(crate) fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recent ply, which alone decides en passant eligibility.
    #[must_use]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MoveRecord> {
        self.records.iter()
    }

    /// Whether `piece` has ever moved away from `square`.
    ///
    /// Linear in the length of the game.
    #[must_use]
    pub fn has_moved_from(&self, piece: (Color, Piece), square: Square) -> bool {
        self.records
            .iter()
            .any(|r| r.piece == piece && r.from == square)
    }

    /// The last ply repeats the plies four and eight back.
    ///
    /// Compares move records, not positions, so transpositions into the same
    /// position are not detected.
    #[must_use]
    pub fn is_repetition(&self) -> bool {
        let n = self.records.len();
        if n < 2 * REPETITION_STRIDE + 1 {
            return false;
        }
        let last = &self.records[n - 1];
        *last == self.records[n - 1 - REPETITION_STRIDE]
            && *last == self.records[n - 1 - 2 * REPETITION_STRIDE]
    }

    /// The last `FIFTY_MOVE_PLIES` plies contain no pawn move and no capture.
    #[must_use]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.plies_since_progress() >= FIFTY_MOVE_PLIES
    }

    /// Consecutive trailing plies with no pawn move and no capture.
    #[must_use]
    pub fn plies_since_progress(&self) -> usize {
        self.records
            .iter()
            .rev()
            .take_while(|r| !r.is_pawn_move() && !r.is_capture())
            .count()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a MoveRecord;
    type IntoIter = std::slice::Iter<'a, MoveRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SpecialMove;

    fn quiet(piece: Piece, from: Square, to: Square) -> MoveRecord {
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
    fn test_has_moved_from() {
        let mut history = History::new();
        history.push(quiet(Piece::King, Square(0, 4), Square(0, 5)));
        assert!(history.has_moved_from((Color::White, Piece::King), Square(0, 4)));
        assert!(!history.has_moved_from((Color::Black, Piece::King), Square(0, 4)));
        assert!(!history.has_moved_from((Color::White, Piece::Rook), Square(0, 7)));
    }

    #[test]
    fn test_repetition_needs_nine_plies() {
        let out = quiet(Piece::Knight, Square(0, 6), Square(2, 5));
        let back = quiet(Piece::Knight, Square(2, 5), Square(0, 6));
        let mut history = History::new();
        for i in 0..8 {
            history.push(if i % 2 == 0 { out } else { back });
            assert!(!history.is_repetition());
        }
        history.push(out);
        assert!(history.is_repetition());
    }

    #[test]
    fn test_fifty_move_counter_resets_on_pawn_move() {
        let mut history = History::new();
        for _ in 0..49 {
            history.push(quiet(Piece::Rook, Square(0, 0), Square(0, 1)));
        }
        assert!(!history.is_fifty_move_draw());
        history.push(quiet(Piece::Rook, Square(0, 1), Square(0, 0)));
        assert!(history.is_fifty_move_draw());

        history.push(quiet(Piece::Pawn, Square(1, 0), Square(2, 0)));
        assert_eq!(history.plies_since_progress(), 0);
        assert!(!history.is_fifty_move_draw());
    }

    #[test]
    fn test_capture_resets_progress() {
        let mut history = History::new();
        history.push(quiet(Piece::Rook, Square(0, 0), Square(0, 1)));
        let mut capture = quiet(Piece::Rook, Square(0, 1), Square(5, 1));
        capture.captured = Some((Color::Black, Piece::Knight));
        history.push(capture);
        assert_eq!(history.plies_since_progress(), 0);
    }
}
