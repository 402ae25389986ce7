//! Core data model for the rules engine.
//!
//! The board is an 8x8 mailbox grid indexed by `(row, col)`, where row 0 is
//! rank 8 (black's back rank), row 7 is rank 1 (white's back rank), and
//! column 0 is file `a`.

pub use crate::game_state::game_state::GameState;

/// Piece color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A colored piece occupying one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// 8x8 mailbox board. `board[row][col]`, row 0 = rank 8, col 0 = file `a`.
pub type BoardGrid = [[Option<Piece>; 8]; 8];

/// Board coordinate as `(row, col)`.
pub type SquareCoord = (usize, usize);

/// Game outcome. Transitions away from `InProgress` exactly once and never
/// reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameResult {
    /// External result code: `""` in progress, `"w"`/`"b"` win, `"d"` draw.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameResult::InProgress => "",
            GameResult::WhiteWins => "w",
            GameResult::BlackWins => "b",
            GameResult::Draw => "d",
        }
    }

    #[inline]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }
}

/// Compact castling rights bitmask.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights = CASTLE_WHITE_KINGSIDE
    | CASTLE_WHITE_QUEENSIDE
    | CASTLE_BLACK_KINGSIDE
    | CASTLE_BLACK_QUEENSIDE;

/// Both castling right bits for one color.
#[inline]
pub const fn castle_rights_for(color: Color) -> CastlingRights {
    match color {
        Color::White => CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
        Color::Black => CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
    }
}
