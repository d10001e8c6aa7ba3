//! FEN-to-board parser.
//!
//! Builds a fully-populated `Board` from a Forsyth-Edwards Notation string:
//! piece placement, side to move, castling rights, en-passant target, and
//! clocks. Structural problems fail with `ChessError::InvalidFen`.

use log::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{
    CastlingRights, Color, Piece, Square, CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE,
    CASTLE_LIGHT_KINGSIDE, CASTLE_LIGHT_QUEENSIDE,
};
use crate::utils::algebraic::{algebraic_to_index, square_index};

pub fn parse_fen(fen: &str) -> ChessResult<Board> {
    let mut parts = fen.split_whitespace();

    let board_part = next_field(&mut parts, "board layout")?;
    let side_part = next_field(&mut parts, "side to move")?;
    let castling_part = next_field(&mut parts, "castling rights")?;
    let en_passant_part = next_field(&mut parts, "en-passant square")?;
    let halfmove_part = next_field(&mut parts, "halfmove clock")?;
    let fullmove_part = next_field(&mut parts, "fullmove number")?;

    if parts.next().is_some() {
        return Err(ChessError::InvalidFen("extra trailing fields".to_owned()));
    }

    let mut board = Board::new_empty();

    parse_board(board_part, &mut board)?;
    board.side_to_move = parse_side_to_move(side_part)?;
    board.castling_rights = parse_castling_rights(castling_part)?;
    board.en_passant_square = parse_en_passant_square(en_passant_part)?;
    board.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| ChessError::InvalidFen(format!("invalid halfmove clock: {halfmove_part}")))?;
    board.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| ChessError::InvalidFen(format!("invalid fullmove number: {fullmove_part}")))?;

    debug!("loaded position: {fen}");
    Ok(board)
}

fn next_field<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    name: &str,
) -> ChessResult<&'a str> {
    parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen(format!("missing {name}")))
}

fn parse_board(board_part: &str, board: &mut Board) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFen(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    // FEN lists rank 8 first.
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as u8;
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or_else(|| {
                ChessError::InvalidFen(format!("invalid piece character '{ch}'"))
            })?;

            if file >= 8 {
                return Err(ChessError::InvalidFen(
                    "board rank has too many files".to_owned(),
                ));
            }

            board.place(piece, square_index(rank, file));
            file += 1;
        }

        if file != 8 {
            return Err(ChessError::InvalidFen(
                "board rank does not sum to 8 files".to_owned(),
            ));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessError::InvalidFen(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_LIGHT_KINGSIDE,
            'Q' => rights |= CASTLE_LIGHT_QUEENSIDE,
            'k' => rights |= CASTLE_DARK_KINGSIDE,
            'q' => rights |= CASTLE_DARK_QUEENSIDE,
            _ => {
                return Err(ChessError::InvalidFen(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_index(en_passant_part).map(Some).map_err(|_| {
        ChessError::InvalidFen(format!("invalid en-passant square: {en_passant_part}"))
    })
}
