use super::super::{Board, Color, Square, SquareList};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
    (2, 1),
    (-2, 1),
    (2, -1),
    (-2, -1),
];

impl Board {
    pub(crate) fn push_knight_destinations(
        &self,
        from: Square,
        color: Color,
        out: &mut SquareList,
    ) {
        for (dr, df) in KNIGHT_OFFSETS {
            if let Some(to) = from.offset(dr, df) {
                if self.color_on(to) != Some(color) {
                    out.push(to);
                }
            }
        }
    }
}
