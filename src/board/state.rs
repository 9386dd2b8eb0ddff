//! Board grid and game state.

use std::fmt;

use super::history::History;
use super::{Color, Piece, Square};

/// Contents of a single square.
pub type Slot = Option<(Color, Piece)>;

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// The 8x8 grid. Pure data: no rule knowledge beyond coordinate bounds.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Slot; 64],
}

#[inline]
fn slot_index(sq: Square) -> usize {
    assert!(sq.is_valid(), "square {sq:?} is off the board");
    sq.as_index()
}

impl Board {
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// The standard initial position.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            board.set_piece(Square(0, file), Some((Color::White, *piece)));
            board.set_piece(Square(7, file), Some((Color::Black, *piece)));
            board.set_piece(Square(1, file), Some((Color::White, Piece::Pawn)));
            board.set_piece(Square(6, file), Some((Color::Black, Piece::Pawn)));
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Slot {
        self.squares[slot_index(sq)]
    }

    /// Get just the piece kind on a square
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Place (or clear) a square, returning what was there before.
    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, slot: Slot) -> Slot {
        std::mem::replace(&mut self.squares[slot_index(sq)], slot)
    }

    /// Every occupied square, a1 first.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.map(|(c, p)| (Square::from_index(idx), c, p)))
    }

    /// Squares holding a piece of `color`.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.occupied()
            .filter(move |&(_, c, _)| c == color)
            .map(|(sq, _, _)| sq)
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.occupied()
            .find(|&(_, c, p)| c == color && p == Piece::King)
            .map(|(sq, _, _)| sq)
    }

    /// Non-king pieces of `color`.
    pub(crate) fn material(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.occupied()
            .filter(move |&(_, c, p)| c == color && p != Piece::King)
            .map(|(_, _, p)| p)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = match self.piece_at(Square(rank, file)) {
                    Some((color, piece)) => piece.to_colored_char(color),
                    None => '.',
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board")?;
        fmt::Display::fmt(self, f)
    }
}

const MAX_PROVISIONAL_EDITS: usize = 4;

/// A scoped set of trial edits on a board.
///
/// Every edit is rolled back when the guard is dropped, whichever way the
/// enclosing scope is left.
pub(crate) struct ProvisionalEdit<'a> {
    board: &'a mut Board,
    saved: [(Square, Slot); MAX_PROVISIONAL_EDITS],
    len: usize,
}

impl<'a> ProvisionalEdit<'a> {
    pub(crate) fn new(board: &'a mut Board) -> Self {
        ProvisionalEdit {
            board,
            saved: [(Square(0, 0), None); MAX_PROVISIONAL_EDITS],
            len: 0,
        }
    }

    pub(crate) fn set(&mut self, sq: Square, slot: Slot) {
        assert!(
            self.len < MAX_PROVISIONAL_EDITS,
            "too many provisional edits"
        );
        let previous = self.board.set_piece(sq, slot);
        self.saved[self.len] = (sq, previous);
        self.len += 1;
    }

    /// Move whatever is on `from` to `to`.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) {
        let moving = self.board.piece_at(from);
        self.set(from, None);
        self.set(to, moving);
    }

    pub(crate) fn board(&self) -> &Board {
        self.board
    }
}

impl Drop for ProvisionalEdit<'_> {
    fn drop(&mut self) {
        while self.len > 0 {
            self.len -= 1;
            let (sq, slot) = self.saved[self.len];
            self.board.set_piece(sq, slot);
        }
    }
}

/// The rules engine: board, side to move and move history, always changed together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) history: History,
}

impl Game {
    /// Standard starting position, White to move, empty history.
    #[must_use]
    pub fn new() -> Self {
        Game {
            board: Board::standard(),
            side_to_move: Color::White,
            history: History::new(),
        }
    }

    /// Reinitialize board, history and turn to the starting position.
    pub fn reset(&mut self) {
        self.board = Board::standard();
        self.side_to_move = Color::White;
        self.history.clear();
        #[cfg(feature = "logging")]
        log::info!("game reset to the starting position");
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether `color`'s king is attacked.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
