//! Attack detection and the legality filter.
//!
//! Attack queries reuse the pseudo-legal move generator rather than a
//! specialized attack table: a square is attacked by a color when any of
//! that color's pseudo-legal moves lands on it. Legality of a candidate
//! move is decided by trial-applying it, querying the mover's king square,
//! and reverting before returning. Attack detection calls move generation,
//! never legality filtering, so the recursion bottoms out.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{is_valid_index, Color, PieceKind, Square};
use crate::move_generation::move_generator::pseudo_legal_moves;
use crate::moves::chess_move::Move;

/// King square of `color`, by board scan. `None` when the side has no king
/// (legal for sparse test positions; king placement is the caller's
/// responsibility).
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    (0..128u8).filter(|&index| is_valid_index(index)).find(|&index| {
        board.squares[index as usize]
            .is_some_and(|piece| piece.color() == color && piece.kind() == Some(PieceKind::King))
    })
}

/// Whether any of `attacker`'s pseudo-legal moves lands on `square`.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    let (moves, _) = pseudo_legal_moves(board, attacker);
    moves.iter().any(|mv| mv.to == square)
}

/// Keep only candidates that do not leave `side`'s king attacked.
///
/// `king` is the king square recorded during the generation scan; a king
/// move is re-checked at its destination instead. Every trial application
/// is reverted before the next candidate, whatever the outcome.
pub(crate) fn filter_legal(
    board: &mut Board,
    moves: Vec<Move>,
    king: Option<Square>,
    side: Color,
) -> Vec<Move> {
    let mut legal = Vec::with_capacity(moves.len());

    for mut mv in moves {
        mv.apply(board);

        let king_after = if mv.piece.kind() == Some(PieceKind::King) {
            Some(mv.to)
        } else {
            king
        };
        let exposed = match king_after {
            Some(king_square) => is_square_attacked(board, king_square, side.opposite()),
            None => false,
        };

        mv.revert(board);
        if !exposed {
            legal.push(mv);
        }
    }

    legal
}
