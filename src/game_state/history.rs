use crate::game_state::chess_types::{CastlingRights, Color, Piece, Square};
use crate::moves::chess_move::Move;

/// Single rollback record for `do_move` / `undo`.
///
/// The squares array is stored by value so that later board mutation can
/// never corrupt a snapshot already on the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub mv: Move,
    pub side_to_move: Color,
    pub squares: [Option<Piece>; 128],
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}
