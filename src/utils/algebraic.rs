//! Square conversions for algebraic coordinates.
//!
//! Free functions with no board dependency, converting between
//! human-readable square names (e.g. `e4`) and 0x88 indices. Reused by the
//! FEN codecs, move notation, and the renderer.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{is_valid_index, Square};

/// 0x88 index of a rank/file pair (both `0..=7`).
#[inline]
pub const fn square_index(rank: u8, file: u8) -> Square {
    rank << 4 | file
}

/// Convert a square name (for example `"e4"`) to a 0x88 index.
#[inline]
pub fn algebraic_to_index(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::OutOfRange(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::OutOfRange(square.to_owned()));
    }

    Ok(square_index(rank - b'1', file - b'a'))
}

/// Convert a 0x88 index to its square name. Defined only for valid
/// indices; off-board indices fail with `OutOfRange`.
#[inline]
pub fn index_to_algebraic(index: Square) -> ChessResult<String> {
    if !is_valid_index(index) {
        return Err(ChessError::OutOfRange(format!("{index:#04x}")));
    }

    let file = char::from(b'a' + (index & 7));
    let rank = char::from(b'1' + (index >> 4));
    Ok(format!("{file}{rank}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_index("a1").expect("a1 should parse"), 0x00);
        assert_eq!(algebraic_to_index("b2").expect("b2 should parse"), 0x11);
        assert_eq!(algebraic_to_index("e4").expect("e4 should parse"), 0x34);
        assert_eq!(algebraic_to_index("h8").expect("h8 should parse"), 0x77);

        assert_eq!(index_to_algebraic(0x00).expect("0x00 should convert"), "a1");
        assert_eq!(index_to_algebraic(0x11).expect("0x11 should convert"), "b2");
        assert_eq!(index_to_algebraic(0x77).expect("0x77 should convert"), "h8");
    }

    #[test]
    fn rank_and_file_compose_the_index() {
        assert_eq!(square_index(2, 4), 0x24); // e3
        assert_eq!(square_index(7, 7), 0x77); // h8
    }

    #[test]
    fn malformed_names_are_rejected() {
        for name in ["", "e", "e44", "i4", "a9", "44", "ee"] {
            assert!(matches!(
                algebraic_to_index(name),
                Err(ChessError::OutOfRange(_))
            ));
        }
    }

    #[test]
    fn off_board_indices_are_rejected() {
        for index in [0x08u8, 0x88, 0x7F, 0xFF] {
            assert!(matches!(
                index_to_algebraic(index),
                Err(ChessError::OutOfRange(_))
            ));
        }
    }
}
