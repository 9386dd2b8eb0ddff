//! Move generation.
//!
//! Pseudo-legal destinations come from per-kind geometry in the submodules.
//! `Game::legal_destinations` then drops every destination that would leave
//! the mover's own king attacked.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::state::ProvisionalEdit;
use super::{Board, Color, Game, Piece, Square, SquareList, PROMOTION_PIECES};
use pawns::en_passant_destination;
use sliders::{DIAGONAL, ORTHOGONAL};

const UNLIMITED: usize = 7;

impl Board {
    /// Squares the piece on `from` reaches by its own geometry, pawn pushes
    /// included. No castling or en passant. Empty list for an empty square.
    ///
    /// Pawn pushes only land on empty squares, so a king is only ever found
    /// in this list through a capture.
    #[must_use]
    pub fn basic_destinations(&self, from: Square) -> SquareList {
        let mut out = SquareList::new();
        let Some((color, piece)) = self.piece_at(from) else {
            return out;
        };
        match piece {
            Piece::Pawn => self.push_pawn_destinations(from, color, &mut out),
            Piece::Knight => self.push_knight_destinations(from, color, &mut out),
            Piece::Bishop => self.push_ray_destinations(from, color, &DIAGONAL, UNLIMITED, &mut out),
            Piece::Rook => self.push_ray_destinations(from, color, &ORTHOGONAL, UNLIMITED, &mut out),
            Piece::Queen => {
                self.push_ray_destinations(from, color, &DIAGONAL, UNLIMITED, &mut out);
                self.push_ray_destinations(from, color, &ORTHOGONAL, UNLIMITED, &mut out);
            }
            Piece::King => self.push_king_steps(from, color, &mut out),
        }
        out
    }

    /// Trial-move `from -> to` (removing `victim` too, for en passant) and
    /// report whether `color`'s king ends up attacked. The board is unchanged
    /// on return.
    pub(crate) fn move_exposes_king(
        &mut self,
        from: Square,
        to: Square,
        victim: Option<Square>,
        color: Color,
    ) -> bool {
        let mut edit = ProvisionalEdit::new(self);
        edit.relocate(from, to);
        if let Some(victim) = victim {
            edit.set(victim, None);
        }
        edit.board().is_in_check(color)
    }
}

impl Game {
    /// Destinations for the piece on `from` ignoring self-check, including
    /// en passant and castling. Empty for an empty square.
    pub fn pseudo_destinations(&mut self, from: Square) -> SquareList {
        let Some((color, piece)) = self.board.piece_at(from) else {
            return SquareList::new();
        };
        match piece {
            Piece::Pawn => self.pawn_destinations(from, color),
            Piece::King => {
                let mut out = self.board.basic_destinations(from);
                self.push_castling_destinations(from, color, &mut out);
                out
            }
            Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen => {
                self.board.basic_destinations(from)
            }
        }
    }

    /// Legal destinations for the piece on `from`, in generation order.
    ///
    /// Empty if the square is empty or holds a piece of the side not on move.
    pub fn legal_destinations(&mut self, from: Square) -> SquareList {
        match self.board.piece_at(from) {
            Some((color, _)) if color == self.side_to_move => self.legal_destinations_for(from),
            _ => SquareList::new(),
        }
    }

    /// Legality filter for whichever color occupies `from`.
    pub(crate) fn legal_destinations_for(&mut self, from: Square) -> SquareList {
        let Some((color, piece)) = self.board.piece_at(from) else {
            return SquareList::new();
        };
        let mut destinations = self.pseudo_destinations(from);
        let en_passant = match piece {
            Piece::Pawn => en_passant_destination(&self.board, from, color, self.history.last())
                .map(|target| (target, Square(from.0, target.1))),
            _ => None,
        };
        let board = &mut self.board;
        destinations.retain(|to| {
            let victim = en_passant.and_then(|(target, victim)| (target == to).then_some(victim));
            !board.move_exposes_king(from, to, victim, color)
        });
        destinations
    }

    /// A pawn move onto its last rank that the pawn's geometry allows.
    #[must_use]
    pub fn is_promotion_move(&self, from: Square, to: Square) -> bool {
        match self.board.piece_at(from) {
            Some((color, Piece::Pawn)) => {
                to.0 == color.pawn_promotion_rank()
                    && self.pawn_destinations(from, color).contains(to)
            }
            _ => false,
        }
    }

    /// Every legal `(from, to)` pair for the side to move.
    pub fn legal_plies(&mut self) -> Vec<(Square, Square)> {
        let own: Vec<Square> = self.board.squares_of(self.side_to_move).collect();
        let mut plies = Vec::new();
        for from in own {
            for to in self.legal_destinations_for(from) {
                plies.push((from, to));
            }
        }
        plies
    }

    /// Whether the side to move has at least one legal move.
    pub fn has_legal_move(&mut self) -> bool {
        let own: Vec<Square> = self.board.squares_of(self.side_to_move).collect();
        own.into_iter()
            .any(|from| !self.legal_destinations_for(from).is_empty())
    }

    /// Count leaf nodes of the legal move tree to `depth` plies, one node per
    /// promotion kind.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut nodes = 0;
        for (from, to) in self.legal_plies() {
            let choices: &[Piece] = if self.is_promotion_move(from, to) {
                &PROMOTION_PIECES
            } else {
                &[Piece::Queen]
            };
            for &choice in choices {
                if depth == 1 {
                    nodes += 1;
                    continue;
                }
                if self.apply_move(from, to, Some(choice)).is_ok() {
                    nodes += self.perft(depth - 1);
                    let undone = self.undo_move();
                    debug_assert!(undone.is_ok(), "undo after apply");
                }
            }
        }
        nodes
    }
}
