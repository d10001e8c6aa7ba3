//! Board-to-FEN serializer.
//!
//! Emits the six-field FEN form of a board. A position that was imported
//! and not mutated round-trips byte-exactly, including the `KQkq` ordering
//! of the castling field.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{
    CastlingRights, Color, Square, CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE,
    CASTLE_LIGHT_KINGSIDE, CASTLE_LIGHT_QUEENSIDE,
};
use crate::utils::algebraic::{index_to_algebraic, square_index};

pub fn generate_fen(board: &Board) -> String {
    let placement = generate_board_field(board);
    let side_to_move = match board.side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let castling = generate_castling_field(board.castling_rights);
    let en_passant = generate_en_passant_field(board.en_passant_square);

    format!(
        "{} {} {} {} {} {}",
        placement,
        side_to_move,
        castling,
        en_passant,
        board.halfmove_clock,
        board.fullmove_number
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0..8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8 {
            let square = square_index(rank, file);
            match board.piece_at(square).and_then(|piece| piece.fen_char()) {
                Some(ch) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(ch);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if rights & CASTLE_LIGHT_KINGSIDE != 0 {
        out.push('K');
    }
    if rights & CASTLE_LIGHT_QUEENSIDE != 0 {
        out.push('Q');
    }
    if rights & CASTLE_DARK_KINGSIDE != 0 {
        out.push('k');
    }
    if rights & CASTLE_DARK_QUEENSIDE != 0 {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }
    out
}

fn generate_en_passant_field(square: Option<Square>) -> String {
    let Some(square) = square else {
        return "-".to_owned();
    };

    index_to_algebraic(square).unwrap_or_else(|_| "-".to_owned())
}
