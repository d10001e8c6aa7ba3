//! Pseudo-legal move generation over the 0x88 board.
//!
//! Stepping pieces (king, knight) apply each fixed offset once; sliding
//! pieces (bishop, rook, queen) walk their offsets until leaving the board
//! or meeting a piece. Pawns get the special forward/double/diagonal rules.
//! The 0x88 layout makes every off-board test a single bitwise check on the
//! candidate index.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{is_valid_index, Color, Piece, PieceKind, Square};
use crate::move_generation::attack_checks::filter_legal;
use crate::moves::chess_move::Move;

pub const ROOK_OFFSETS: [i16; 4] = [-1, -16, 1, 16];
pub const BISHOP_OFFSETS: [i16; 4] = [-15, -17, 15, 17];
pub const KNIGHT_OFFSETS: [i16; 8] = [31, 33, 14, 18, -18, -14, -33, -31];
pub const KING_OFFSETS: [i16; 8] = [-1, -16, 1, 16, -15, -17, 15, 17];
pub const QUEEN_OFFSETS: [i16; 8] = KING_OFFSETS;

/// Apply a directional offset; `None` when the result leaves the board.
#[inline]
pub fn offset_index(from: Square, delta: i16) -> Option<Square> {
    let target = from as i16 + delta;
    if target & 0x88 == 0 {
        Some(target as Square)
    } else {
        None
    }
}

/// Moves for `side`. With `pseudo_legal` the raw per-square union is
/// returned as-is; otherwise each candidate is trial-applied and kept only
/// if it does not leave `side`'s king attacked.
pub fn generate_moves(board: &mut Board, side: Color, pseudo_legal: bool) -> Vec<Move> {
    let (moves, king) = pseudo_legal_moves(board, side);
    if pseudo_legal || moves.is_empty() {
        return moves;
    }
    filter_legal(board, moves, king, side)
}

/// Scan all 64 valid squares, dispatching by piece kind. Also reports the
/// king square of `side` found during the scan, for the legality filter.
pub(crate) fn pseudo_legal_moves(board: &Board, side: Color) -> (Vec<Move>, Option<Square>) {
    let mut moves = Vec::new();
    let mut king = None;

    for index in 0..128u8 {
        if !is_valid_index(index) {
            continue;
        }
        let Some(piece) = board.squares[index as usize] else {
            continue;
        };
        if piece.color() != side {
            continue;
        }

        match piece.kind() {
            Some(PieceKind::Pawn) => pawn_moves(board, piece, index, side, &mut moves),
            Some(PieceKind::Knight) => {
                offset_moves(board, piece, index, side, &KNIGHT_OFFSETS, true, &mut moves)
            }
            Some(PieceKind::King) => {
                king = Some(index);
                offset_moves(board, piece, index, side, &KING_OFFSETS, true, &mut moves)
            }
            Some(PieceKind::Bishop) => {
                offset_moves(board, piece, index, side, &BISHOP_OFFSETS, false, &mut moves)
            }
            Some(PieceKind::Rook) => {
                offset_moves(board, piece, index, side, &ROOK_OFFSETS, false, &mut moves)
            }
            Some(PieceKind::Queen) => {
                offset_moves(board, piece, index, side, &QUEEN_OFFSETS, false, &mut moves)
            }
            None => {}
        }
    }

    (moves, king)
}

/// Shared offset walker for stepping and sliding pieces.
///
/// Own-color squares block without emitting; opponent squares emit a
/// capture and stop; empty squares emit a quiet move and, for sliders,
/// continue the walk.
fn offset_moves(
    board: &Board,
    piece: Piece,
    from: Square,
    side: Color,
    offsets: &[i16],
    single: bool,
    moves: &mut Vec<Move>,
) {
    for &delta in offsets {
        let mut next = offset_index(from, delta);

        while let Some(to) = next {
            let occupant = board.squares[to as usize];
            if occupant.is_some_and(|p| p.color() == side) {
                break;
            }

            moves.push(Move::new(piece, from, to));
            if occupant.is_some() || single {
                break;
            }
            next = offset_index(to, delta);
        }
    }
}

/// Pawn rules: single step onto an empty square; double step only from the
/// starting rank (stepping two rank-increments backward from the origin
/// leaves the board) and only through/onto empty squares; diagonal
/// captures; en-passant captures matched against the board's target.
fn pawn_moves(board: &Board, piece: Piece, from: Square, side: Color, moves: &mut Vec<Move>) {
    let direction: i16 = match side {
        Color::Light => 16,
        Color::Dark => -16,
    };

    if let Some(forward) = offset_index(from, direction) {
        if board.squares[forward as usize].is_none() {
            moves.push(Move::new(piece, from, forward));

            let on_starting_rank = offset_index(from, -2 * direction).is_none();
            if on_starting_rank {
                if let Some(double) = offset_index(forward, direction) {
                    if board.squares[double as usize].is_none() {
                        moves.push(Move::new(piece, from, double));
                    }
                }
            }
        }
    }

    for delta in [direction - 1, direction + 1] {
        let Some(to) = offset_index(from, delta) else {
            continue;
        };

        match board.squares[to as usize] {
            Some(occupant) if occupant.color() != side => {
                moves.push(Move::new(piece, from, to));
            }
            Some(_) => {}
            None => {
                if let Some(target) = board.en_passant_square {
                    if to as i16 - direction == target as i16 {
                        moves.push(Move::en_passant(piece, from, to));
                    }
                }
            }
        }
    }
}
