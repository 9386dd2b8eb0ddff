//! Coordinate move notation: `e2e4`, `e7e8q`.

use super::{MoveParseError, Piece, Square};

/// A move as typed by a user, before it is checked against the rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoordinateMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

/// Parse `e2e4` or `e7e8q` (promotion letter in either case).
pub fn parse_coordinate_move(text: &str) -> Result<CoordinateMove, MoveParseError> {
    let text = text.trim();
    let len = text.chars().count();
    if !(4..=5).contains(&len) {
        return Err(MoveParseError::InvalidLength { len });
    }
    if !text.is_ascii() {
        return Err(MoveParseError::InvalidSquare {
            notation: text.to_string(),
        });
    }

    let square = |part: &str| {
        part.parse::<Square>()
            .map_err(|_| MoveParseError::InvalidSquare {
                notation: text.to_string(),
            })
    };
    let from = square(&text[0..2])?;
    let to = square(&text[2..4])?;

    let promotion = match text[4..].chars().next() {
        None => None,
        Some(c) => match Piece::from_char(c) {
            Some(piece) if piece.is_promotable() => Some(piece),
            _ => return Err(MoveParseError::InvalidPromotion { char: c }),
        },
    };

    Ok(CoordinateMove {
        from,
        to,
        promotion,
    })
}
