use super::super::state::ProvisionalEdit;
use super::super::{Board, CastleSide, Color, Game, Piece, Square, SquareList};
use super::sliders::{DIAGONAL, ORTHOGONAL};

impl Board {
    pub(crate) fn push_king_steps(&self, from: Square, color: Color, out: &mut SquareList) {
        self.push_ray_destinations(from, color, &ORTHOGONAL, 1, out);
        self.push_ray_destinations(from, color, &DIAGONAL, 1, out);
    }

    /// Whether `color`'s king is attacked by any enemy piece.
    ///
    /// A board without a king of that color is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king_sq) = self.find_king(color) else {
            return false;
        };
        self.squares_of(color.opponent())
            .any(|sq| self.basic_destinations(sq).contains(king_sq))
    }
}

impl Game {
    /// Castling targets for the king on `from`, checked against the history,
    /// the squares in between, and every square the king stands on or crosses.
    pub(crate) fn push_castling_destinations(
        &mut self,
        from: Square,
        color: Color,
        out: &mut SquareList,
    ) {
        let rank = color.back_rank();
        let home = Square(rank, 4);
        if from != home || self.history.has_moved_from((color, Piece::King), home) {
            return;
        }

        let mut in_check = None;
        for side in CastleSide::BOTH {
            let corner = Square(rank, side.rook_from_file());
            if self.board.piece_at(corner) != Some((color, Piece::Rook))
                || self.history.has_moved_from((color, Piece::Rook), corner)
            {
                continue;
            }

            let (lo, hi) = if corner.1 < home.1 {
                (corner.1 + 1, home.1)
            } else {
                (home.1 + 1, corner.1)
            };
            if !(lo..hi).all(|file| self.board.is_empty(Square(rank, file))) {
                continue;
            }

            let board = &self.board;
            if *in_check.get_or_insert_with(|| board.is_in_check(color)) {
                return;
            }

            if self.castle_path_is_safe(color, side) {
                out.push(Square(rank, side.king_to_file()));
            }
        }
    }

    /// Walk the king one square at a time toward its castled square and test
    /// for check at each stop. The board is restored before returning.
    fn castle_path_is_safe(&mut self, color: Color, side: CastleSide) -> bool {
        let rank = color.back_rank();
        let home = Square(rank, 4);
        let step: isize = match side {
            CastleSide::Kingside => 1,
            CastleSide::Queenside => -1,
        };

        for distance in 1..=2 {
            let Some(stop) = home.offset(0, step * distance) else {
                return false;
            };
            let mut edit = ProvisionalEdit::new(&mut self.board);
            edit.relocate(home, stop);
            if edit.board().is_in_check(color) {
                #[cfg(feature = "logging")]
                log::trace!("{color} cannot castle {side:?}: {stop} is attacked");
                return false;
            }
        }
        true
    }
}
