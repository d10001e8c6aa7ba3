//! Core value types for the 0x88 board representation.
//!
//! Squares are indices into a padded 8x16 layout where the low nibble is the
//! file and the high nibble is the rank; an index is on the board exactly
//! when `index & 0x88 == 0`. Pieces are packed bytes combining a one-hot
//! kind code with a color bit.

pub use crate::game_state::board::Board;
pub use crate::game_state::history::HistoryEntry;

/// Board square index in the padded 0x88 layout (`0x00 == a1`, `0x77 == h8`).
pub type Square = u8;

/// An index addresses one of the 64 real squares iff this test passes.
#[inline]
pub const fn is_valid_index(index: Square) -> bool {
    index & 0x88 == 0
}

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// High bit used by the packed piece encoding (`0x80` for light).
    #[inline]
    pub const fn color_bit(self) -> u8 {
        match self {
            Color::Light => COLOR_LIGHT_BIT,
            Color::Dark => 0,
        }
    }
}

/// Piece kind; color is carried by the packed `Piece` byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    King,
    Bishop,
    Rook,
    Queen,
}

impl PieceKind {
    /// One-hot kind code within the low six bits of a piece byte.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            PieceKind::Pawn => 0x01,
            PieceKind::Knight => 0x02,
            PieceKind::King => 0x04,
            PieceKind::Bishop => 0x08,
            PieceKind::Rook => 0x10,
            PieceKind::Queen => 0x20,
        }
    }

    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0x01 => Some(PieceKind::Pawn),
            0x02 => Some(PieceKind::Knight),
            0x04 => Some(PieceKind::King),
            0x08 => Some(PieceKind::Bishop),
            0x10 => Some(PieceKind::Rook),
            0x20 => Some(PieceKind::Queen),
            _ => None,
        }
    }
}

pub const COLOR_LIGHT_BIT: u8 = 0x80;
pub const KIND_MASK: u8 = 0x3F;

/// Packed piece byte: `kind_code | color_bit`.
///
/// An empty square is represented as `Option::<Piece>::None` on the board,
/// never as a piece code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece(u8);

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self(kind.code() | color.color_bit())
    }

    /// Wrap a raw byte without validating the kind code.
    #[inline]
    pub const fn from_code(code: u8) -> Self {
        Self(code)
    }

    #[inline]
    pub const fn code(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn color(self) -> Color {
        if self.0 & COLOR_LIGHT_BIT != 0 {
            Color::Light
        } else {
            Color::Dark
        }
    }

    /// Kind lookup against the six known codes. Total: unrecognized codes
    /// yield `None` rather than an error.
    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        PieceKind::from_code(self.0 & KIND_MASK)
    }

    /// Parse a FEN piece letter (uppercase = light).
    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::Light
        } else if ch.is_ascii_lowercase() {
            Color::Dark
        } else {
            return None;
        };

        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };

        Some(Self::new(color, kind))
    }

    /// FEN piece letter, or `None` for an unrecognized kind code.
    pub fn fen_char(self) -> Option<char> {
        let base = match self.kind()? {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };

        Some(match self.color() {
            Color::Light => base.to_ascii_uppercase(),
            Color::Dark => base,
        })
    }
}

/// Compact castling rights bitmask.
///
/// Parsed from and serialized back to FEN only: move application neither
/// consults nor clears these bits, and no castling moves are generated.
pub const CASTLE_DARK_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_DARK_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_LIGHT_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_LIGHT_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights = CASTLE_DARK_KINGSIDE
    | CASTLE_DARK_QUEENSIDE
    | CASTLE_LIGHT_KINGSIDE
    | CASTLE_LIGHT_QUEENSIDE;
pub type CastlingRights = u8;

/// Outcome of classifying a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_game_over(self) -> bool {
        !matches!(self, GameStatus::Active)
    }

    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}
