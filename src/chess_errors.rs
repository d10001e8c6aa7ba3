//! Errors used throughout the board library.
//!
//! `ChessError` is the single error type returned by parsing, conversion,
//! and move-application code paths. All variants signal synchronous
//! programmer or input errors; none of them is recoverable by retry.

use thiserror::Error;

pub type ChessResult<T> = Result<T, ChessError>;

/// Unified error type for the board library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A FEN string was structurally malformed. The payload names the
    /// offending field or token.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// An algebraic conversion was attempted on an off-board square index
    /// or a malformed square name.
    #[error("square out of range: {0}")]
    OutOfRange(String),

    /// `do_move` was invoked on a position that is already terminal.
    #[error("the game is already over")]
    GameOver,

    /// `undo` was invoked with no previous state to roll back to.
    #[error("there are no previous states to roll back to")]
    EmptyHistory,
}
