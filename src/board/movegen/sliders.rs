use super::super::{Board, Color, Square, SquareList};

pub(crate) const ORTHOGONAL: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONAL: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Board {
    /// Cast rays from `from` along `directions`, at most `max_steps` squares each.
    ///
    /// A ray stops on the board edge, before a piece of `color`, or on an
    /// enemy piece (which is included).
    pub(crate) fn push_ray_destinations(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
        max_steps: usize,
        out: &mut SquareList,
    ) {
        for &(dr, df) in directions {
            let mut current = from;
            for _ in 0..max_steps {
                let Some(next) = current.offset(dr, df) else {
                    break;
                };
                match self.piece_at(next) {
                    None => out.push(next),
                    Some((occupant, _)) => {
                        if occupant != color {
                            out.push(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }
    }
}
