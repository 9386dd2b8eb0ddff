//! Applying and undoing moves.
//!
//! `apply_move` validates everything before touching the board, so a rejected
//! move leaves the game exactly as it was. `undo_move` is its exact inverse for
//! every kind of record.

use super::{
    CastleSide, Color, Game, IllegalMoveReason, MoveError, MoveRecord, Piece, SpecialMove, Square,
};

impl Game {
    fn illegal(from: Square, to: Square, reason: IllegalMoveReason) -> MoveError {
        #[cfg(feature = "logging")]
        log::debug!("rejected {from}{to}: {reason}");
        MoveError::IllegalMove { from, to, reason }
    }

    /// Apply `from -> to` for the side to move.
    ///
    /// `promotion` is only consulted when the move promotes; it defaults to a
    /// queen. Returns the record appended to the history.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<MoveRecord, MoveError> {
        if let Some(piece) = promotion {
            if !piece.is_promotable() {
                return Err(MoveError::InvalidPromotion { piece });
            }
        }

        let Some((color, piece)) = self.board.piece_at(from) else {
            return Err(Self::illegal(from, to, IllegalMoveReason::EmptyOrigin));
        };
        if color != self.side_to_move {
            return Err(Self::illegal(
                from,
                to,
                IllegalMoveReason::WrongColor {
                    expected: self.side_to_move,
                    found: color,
                },
            ));
        }
        if !self.legal_destinations(from).contains(to) {
            return Err(Self::illegal(
                from,
                to,
                IllegalMoveReason::UnreachableDestination,
            ));
        }

        // Classify before mutating: both depend on the pre-move board.
        let promotes = self.is_promotion_move(from, to);
        let en_passant_victim = self.en_passant_victim(from, to);
        let castle = match piece {
            Piece::King => CastleSide::from_king_destination(from, to),
            _ => None,
        };

        let mut special = SpecialMove::None;
        if let Some(victim) = en_passant_victim {
            self.board.set_piece(victim, None);
            special = SpecialMove::EnPassant;
        }

        let captured = self.board.set_piece(to, Some((color, piece)));
        self.board.set_piece(from, None);

        let mut promoted = None;
        if let Some(side) = castle {
            let rank = from.0;
            let rook = self
                .board
                .set_piece(Square(rank, side.rook_from_file()), None);
            self.board.set_piece(Square(rank, side.rook_to_file()), rook);
            special = SpecialMove::Castle(side);
        } else if promotes {
            let kind = promotion.unwrap_or(Piece::Queen);
            self.board.set_piece(to, Some((color, kind)));
            promoted = Some(kind);
        }

        let record = MoveRecord {
            piece: (color, piece),
            from,
            captured,
            to,
            special,
            promotion: promoted,
        };
        self.history.push(record);
        self.side_to_move = color.opponent();

        #[cfg(feature = "logging")]
        log::debug!("{color} played {record} ({special:?})");

        Ok(record)
    }

    /// Take back the last move, restoring board, history and turn.
    pub fn undo_move(&mut self) -> Result<MoveRecord, MoveError> {
        let record = self.history.pop().ok_or(MoveError::EmptyHistory)?;
        let color: Color = record.color();

        self.board.set_piece(record.from, Some(record.piece));
        self.board.set_piece(record.to, record.captured);

        match record.special {
            SpecialMove::None => {}
            SpecialMove::EnPassant => {
                if let Some(victim) = record.en_passant_victim() {
                    self.board
                        .set_piece(victim, Some((color.opponent(), Piece::Pawn)));
                }
            }
            SpecialMove::Castle(side) => {
                let rank = record.from.0;
                let rook = self
                    .board
                    .set_piece(Square(rank, side.rook_to_file()), None);
                self.board
                    .set_piece(Square(rank, side.rook_from_file()), rook);
            }
        }

        self.side_to_move = self.side_to_move.opponent();

        #[cfg(feature = "logging")]
        log::debug!("undid {record}");

        Ok(record)
    }
}
