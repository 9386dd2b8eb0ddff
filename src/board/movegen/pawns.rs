use super::super::{Board, Color, Game, MoveRecord, Piece, Square, SquareList};

impl Board {
    /// Pushes and diagonal captures. En passant needs the history and is added by `Game`.
    pub(crate) fn push_pawn_destinations(&self, from: Square, color: Color, out: &mut SquareList) {
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                out.push(one);
                if from.0 == color.pawn_start_rank() {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.is_empty(two) {
                            out.push(two);
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            if let Some(target) = from.offset(dir, df) {
                if matches!(self.color_on(target), Some(c) if c != color) {
                    out.push(target);
                }
            }
        }
    }
}

/// Destination of an en passant capture by the pawn on `from`, judged from
/// the single ply `last`.
pub(crate) fn en_passant_destination(
    board: &Board,
    from: Square,
    color: Color,
    last: Option<&MoveRecord>,
) -> Option<Square> {
    let last = last?;
    let enemy_pawn = (color.opponent(), Piece::Pawn);
    if last.piece != enemy_pawn || !last.is_double_pawn_push() {
        return None;
    }
    // The enemy pawn must have landed right beside us.
    if last.to.0 != from.0 || last.to.1.abs_diff(from.1) != 1 {
        return None;
    }
    if board.piece_at(last.to) != Some(enemy_pawn) {
        return None;
    }
    let target = Square((from.0 as isize + color.pawn_direction()) as usize, last.to.1);
    board.is_empty(target).then_some(target)
}

impl Game {
    pub(crate) fn pawn_destinations(&self, from: Square, color: Color) -> SquareList {
        let mut out = SquareList::new();
        self.board.push_pawn_destinations(from, color, &mut out);
        if let Some(target) = en_passant_destination(&self.board, from, color, self.history.last())
        {
            out.push(target);
        }
        out
    }

    /// Square of the pawn that moving `from -> to` would capture en passant.
    pub(crate) fn en_passant_victim(&self, from: Square, to: Square) -> Option<Square> {
        let (color, piece) = self.board.piece_at(from)?;
        if piece != Piece::Pawn {
            return None;
        }
        let target = en_passant_destination(&self.board, from, color, self.history.last())?;
        (target == to).then_some(Square(from.0, to.1))
    }
}
