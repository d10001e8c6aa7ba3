//! A single move and its square-array side effects.
//!
//! `Move` carries enough state to apply itself to a board and to fully
//! revert that application: the captured piece (if any) and the en-passant
//! victim are recorded during `apply`. An internal applied flag makes
//! double-apply and double-revert guarded no-ops.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{is_valid_index, Piece, Square};
use crate::utils::algebraic::index_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveFlag {
    Quiet,
    EnPassant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub flag: MoveFlag,

    captured: Option<Piece>,
    en_passant_victim: Option<(Square, Piece)>,
    applied: bool,
}

impl Move {
    pub fn new(piece: Piece, from: Square, to: Square) -> Self {
        Self::with_flag(piece, from, to, MoveFlag::Quiet)
    }

    pub fn en_passant(piece: Piece, from: Square, to: Square) -> Self {
        Self::with_flag(piece, from, to, MoveFlag::EnPassant)
    }

    fn with_flag(piece: Piece, from: Square, to: Square, flag: MoveFlag) -> Self {
        debug_assert!(is_valid_index(from) && is_valid_index(to));
        Self {
            piece,
            from,
            to,
            flag,
            captured: None,
            en_passant_victim: None,
            applied: false,
        }
    }

    /// Coordinate notation, from-square then to-square (for example
    /// `"e2e4"`).
    pub fn notation(&self) -> String {
        let from = index_to_algebraic(self.from).unwrap_or_else(|_| "-".to_owned());
        let to = index_to_algebraic(self.to).unwrap_or_else(|_| "-".to_owned());
        format!("{from}{to}")
    }

    /// Mutate the board's squares: move the piece, clear the origin, and on
    /// an en-passant move also clear the square of the captured pawn (the
    /// board's en-passant target, not the destination).
    pub(crate) fn apply(&mut self, board: &mut Board) {
        if self.applied {
            return;
        }

        self.captured = board.squares[self.to as usize];
        board.squares[self.to as usize] = board.squares[self.from as usize];
        board.squares[self.from as usize] = None;

        if self.flag == MoveFlag::EnPassant {
            if let Some(target) = board.en_passant_square {
                self.en_passant_victim = board.squares[target as usize]
                    .take()
                    .map(|pawn| (target, pawn));
            }
        }

        self.applied = true;
    }

    /// Exact inverse of `apply`, restoring the captured piece and any
    /// en-passant victim.
    pub(crate) fn revert(&mut self, board: &mut Board) {
        if !self.applied {
            return;
        }

        board.squares[self.from as usize] = board.squares[self.to as usize];
        board.squares[self.to as usize] = self.captured.take();

        if let Some((target, pawn)) = self.en_passant_victim.take() {
            board.squares[target as usize] = Some(pawn);
        }

        self.applied = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::utils::algebraic::algebraic_to_index;

    fn square(name: &str) -> Square {
        algebraic_to_index(name).expect("test square should parse")
    }

    #[test]
    fn apply_then_revert_restores_the_squares() {
        let mut board = Board::new_empty();
        let rook = Piece::new(Color::Light, PieceKind::Rook);
        let pawn = Piece::new(Color::Dark, PieceKind::Pawn);
        board.place(rook, square("a1"));
        board.place(pawn, square("a7"));

        let mut mv = Move::new(rook, square("a1"), square("a7"));
        mv.apply(&mut board);
        assert_eq!(board.piece_at(square("a1")), None);
        assert_eq!(board.piece_at(square("a7")), Some(rook));

        mv.revert(&mut board);
        assert_eq!(board.piece_at(square("a1")), Some(rook));
        assert_eq!(board.piece_at(square("a7")), Some(pawn));
    }

    #[test]
    fn double_apply_and_double_revert_are_noops() {
        let mut board = Board::new_empty();
        let rook = Piece::new(Color::Light, PieceKind::Rook);
        board.place(rook, square("a1"));

        let mut mv = Move::new(rook, square("a1"), square("a2"));
        mv.apply(&mut board);
        mv.apply(&mut board);
        assert_eq!(board.piece_at(square("a2")), Some(rook));
        assert_eq!(board.piece_at(square("a1")), None);

        mv.revert(&mut board);
        mv.revert(&mut board);
        assert_eq!(board.piece_at(square("a1")), Some(rook));
        assert_eq!(board.piece_at(square("a2")), None);
    }

    #[test]
    fn en_passant_apply_clears_the_victim_square() {
        let mut board = Board::new_empty();
        let light_pawn = Piece::new(Color::Light, PieceKind::Pawn);
        let dark_pawn = Piece::new(Color::Dark, PieceKind::Pawn);
        board.place(light_pawn, square("e5"));
        board.place(dark_pawn, square("d5"));
        board.en_passant_square = Some(square("d5"));

        let mut mv = Move::en_passant(light_pawn, square("e5"), square("d6"));
        mv.apply(&mut board);
        assert_eq!(board.piece_at(square("d5")), None);
        assert_eq!(board.piece_at(square("d6")), Some(light_pawn));

        mv.revert(&mut board);
        assert_eq!(board.piece_at(square("d5")), Some(dark_pawn));
        assert_eq!(board.piece_at(square("d6")), None);
        assert_eq!(board.piece_at(square("e5")), Some(light_pawn));
    }

    #[test]
    fn notation_concatenates_square_names() {
        let pawn = Piece::new(Color::Light, PieceKind::Pawn);
        let mv = Move::new(pawn, square("e2"), square("e4"));
        assert_eq!(mv.notation(), "e2e4");
    }
}
