//! Crate root module declarations for the ox88 board library.
//!
//! This file exposes all top-level subsystems (game state, moves, move
//! generation, and utility codecs) so tests, benches, and external tooling
//! can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod history;
}

pub mod moves {
    pub mod chess_move;
}

pub mod move_generation {
    pub mod attack_checks;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_board;
}
