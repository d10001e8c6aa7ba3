//! Perft and divide traversal for move-generator validation.
//!
//! Perft counts the leaf nodes of the full legal-move tree to a fixed
//! depth; divide breaks the count down by root move so discrepancies
//! against reference engines can be localized to one subtree.

use std::collections::BTreeMap;

use log::debug;

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;

/// Count leaf nodes of the legal-move tree at `depth`.
///
/// Every committed move is undone before the next sibling and before any
/// error propagates, so the board is left exactly as it was found.
pub fn perft(board: &mut Board, depth: u32) -> ChessResult<usize> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = board.legal_moves();
    if depth == 1 {
        return Ok(moves.len());
    }

    let mut nodes = 0;
    for mv in moves {
        board.do_move(mv)?;
        let subtree = perft(board, depth - 1);
        board.undo()?;
        nodes += subtree?;
    }

    Ok(nodes)
}

/// Perft broken down by root move: each legal move's coordinate notation
/// mapped to its `perft(depth - 1)` subtree count.
pub fn divide(board: &mut Board, depth: u32) -> ChessResult<BTreeMap<String, usize>> {
    let mut results = BTreeMap::new();
    if depth == 0 {
        return Ok(results);
    }

    for mv in board.legal_moves() {
        let name = mv.notation();
        board.do_move(mv)?;
        let subtree = perft(board, depth - 1);
        board.undo()?;

        let nodes = subtree?;
        debug!("divide {name}: {nodes}");
        results.insert(name, nodes);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_reference_counts() {
        let mut board = Board::new_game();

        assert_eq!(perft(&mut board, 1), Ok(20));
        assert_eq!(perft(&mut board, 2), Ok(400));

        // The traversal must leave the board untouched.
        assert_eq!(board, Board::new_game());
    }

    #[test]
    fn perft_depth_zero_counts_one_leaf() {
        let mut board = Board::new_game();
        assert_eq!(perft(&mut board, 0), Ok(1));
    }

    #[test]
    fn perft_of_a_terminal_position_is_zero() {
        let mut board = Board::from_fen("k6R/2K5/8/8/8/8/8/6B1 b - - 0 1").expect("FEN");
        assert_eq!(perft(&mut board, 1), Ok(0));
        assert_eq!(perft(&mut board, 3), Ok(0));
    }

    #[test]
    fn divide_partitions_the_perft_total() {
        let mut board = Board::new_game();

        let results = divide(&mut board, 2).expect("divide should run");
        assert_eq!(results.len(), 20);
        assert_eq!(results.values().sum::<usize>(), 400);
        assert_eq!(results.get("e2e4"), Some(&20));
        assert_eq!(results.get("b1c3"), Some(&20));

        assert_eq!(board, Board::new_game());
    }

    #[test]
    fn divide_depth_zero_is_empty() {
        let mut board = Board::new_game();
        assert!(divide(&mut board, 0).expect("divide should run").is_empty());
    }
}
