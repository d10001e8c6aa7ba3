//! Core mutable board state.
//!
//! `Board` is the central model of the library. It owns the 128-slot 0x88
//! square array, side/state flags, clocks, and the history stack used by the
//! do/undo workflow. Chess legality is not enforced here; move generation
//! and the legality filter live in `move_generation`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{
    is_valid_index, CastlingRights, Color, GameStatus, Piece, PieceKind, Square, CASTLE_ALL,
};
use crate::game_state::history::HistoryEntry;
use crate::move_generation::attack_checks::{is_square_attacked, king_square};
use crate::move_generation::move_generator;
use crate::moves::chess_move::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// 0x88 board state with a LIFO history stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Only the 64 valid indices are ever populated; invalid indices stay
    /// permanently empty.
    pub squares: [Option<Piece>; 128],

    pub side_to_move: Color,
    /// Informational only: never consulted by move generation and never
    /// cleared on king or rook movement.
    pub castling_rights: CastlingRights,
    /// Square occupied by the pawn that may be captured en passant this
    /// ply (not the skipped square).
    pub en_passant_square: Option<Square>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    pub history: Vec<HistoryEntry>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            squares: [None; 128],
            side_to_move: Color::Light,
            castling_rights: CASTLE_ALL,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 0,
            history: Vec::new(),
        }
    }
}

impl Board {
    /// Empty board with light to move, full castling rights, no en-passant
    /// target, and zeroed clocks.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Restore the empty-board defaults, dropping all history.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Piece on a square; `None` for empty squares and for off-board
    /// indices (off-board reads are a defined no-op, never a panic).
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !is_valid_index(square) {
            return None;
        }
        self.squares[square as usize]
    }

    /// Unconditional overwrite of a valid square. Construction and FEN
    /// loading only; off-board indices are ignored.
    #[inline]
    pub fn place(&mut self, piece: Piece, square: Square) {
        if is_valid_index(square) {
            self.squares[square as usize] = Some(piece);
        }
    }

    /// Moves for `side`: the raw pseudo-legal union, or only moves that do
    /// not leave `side`'s own king attacked.
    pub fn generate_moves(&mut self, side: Color, pseudo_legal: bool) -> Vec<Move> {
        move_generator::generate_moves(self, side, pseudo_legal)
    }

    /// Legal moves for the side to move.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let side = self.side_to_move;
        self.generate_moves(side, false)
    }

    /// Classify the position for the side to move.
    ///
    /// A side with legal moves is active. With none, one extra attack query
    /// on its king separates checkmate from stalemate.
    pub fn state(&mut self) -> GameStatus {
        if !self.legal_moves().is_empty() {
            return GameStatus::Active;
        }

        let side = self.side_to_move;
        let in_check = match king_square(self, side) {
            Some(king) => is_square_attacked(self, king, side.opposite()),
            None => false,
        };

        if in_check {
            GameStatus::Checkmate {
                winner: side.opposite(),
            }
        } else {
            GameStatus::Stalemate
        }
    }

    /// Commit a move: snapshot the current state onto the history stack,
    /// mutate the squares, roll the en-passant target, flip the turn, and
    /// report the resulting game status.
    ///
    /// Fails with `ChessError::GameOver` on a terminal position, in which
    /// case nothing is mutated.
    pub fn do_move(&mut self, mut mv: Move) -> ChessResult<GameStatus> {
        if self.state().is_game_over() {
            return Err(ChessError::GameOver);
        }

        self.history.push(HistoryEntry {
            mv: mv.clone(),
            side_to_move: self.side_to_move,
            squares: self.squares,
            castling_rights: self.castling_rights,
            en_passant_square: self.en_passant_square,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        });

        mv.apply(self);

        // The en-passant target lives for exactly one ply after a double
        // push; every other committed move clears it.
        self.en_passant_square = if is_double_pawn_push(&mv) {
            Some(mv.to)
        } else {
            None
        };

        if self.side_to_move == Color::Dark {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.opposite();

        Ok(self.state())
    }

    /// Roll back the most recent committed move, restoring every field from
    /// the snapshot. Strict last-in-first-out only.
    pub fn undo(&mut self) -> ChessResult<()> {
        let entry = self.history.pop().ok_or(ChessError::EmptyHistory)?;

        self.side_to_move = entry.side_to_move;
        self.squares = entry.squares;
        self.castling_rights = entry.castling_rights;
        self.en_passant_square = entry.en_passant_square;
        self.halfmove_clock = entry.halfmove_clock;
        self.fullmove_number = entry.fullmove_number;

        Ok(())
    }
}

#[inline]
fn is_double_pawn_push(mv: &Move) -> bool {
    mv.piece.kind() == Some(PieceKind::Pawn) && (mv.to as i16 - mv.from as i16).abs() == 32
}
