//! Terminal-oriented ASCII board renderer.
//!
//! Read-only debug view: an 8x8 grid with rank digits on the left, file
//! letters below, and a `*` marking the border row on the side to move.
//! There is no parsing counterpart.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::utils::algebraic::square_index;

const BORDER: &str = "+ ------------------------ +";

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push(turn_marker(board, Color::Dark));
    out.push(' ');
    out.push_str(BORDER);
    out.push('\n');

    for rank in (0..8).rev() {
        out.push(char::from(b'1' + rank));
        out.push_str(" |");

        for file in 0..8 {
            out.push_str("  ");
            match board
                .piece_at(square_index(rank, file))
                .and_then(|piece| piece.fen_char())
            {
                Some(ch) => out.push(ch),
                None => out.push('.'),
            }
        }

        out.push_str("  |\n");
    }

    out.push(turn_marker(board, Color::Light));
    out.push(' ');
    out.push_str(BORDER);
    out.push('\n');
    out.push_str("     A  B  C  D  E  F  G  H");

    out
}

fn turn_marker(board: &Board, side: Color) -> char {
    if board.side_to_move == side {
        '*'
    } else {
        ' '
    }
}
