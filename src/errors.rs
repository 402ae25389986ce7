//! Rejection reasons used throughout the rules engine.
//!
//! This module defines the canonical error type returned by move validation.
//! Every failure mode of a submitted move maps to exactly one variant, and
//! nothing propagates past the submission entry point: the public
//! `submit_move` collapses any variant to the empty string, while `try_move`
//! surfaces the variant for callers that want diagnostics.

/// Why a submitted move was rejected.
///
/// All variants are non-fatal. The board and every other field of the game
/// state are left untouched when any of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// The move string is not exactly four characters, or a file/rank
    /// character is outside `a`-`h` / `1`-`8`.
    MalformedInput,

    /// The origin square is empty.
    NoPieceAtSource,

    /// The movement geometry is invalid for the piece on the origin square.
    IllegalPattern,

    /// A square strictly between origin and destination is occupied.
    /// Applies to every piece except the knight.
    BlockedPath,

    /// The destination square holds a piece of the mover's own color.
    FriendlyCapture,

    /// A diagonal pawn move onto an empty square without a qualifying
    /// preceding two-square pawn advance.
    InvalidEnPassant,

    /// A castling precondition is unmet: missing castling right, no rook of
    /// the mover's color on the corner square, blocked path between king and
    /// rook, or the king's destination is not adjacent to the rook's column.
    InvalidCastling,

    /// The move would leave the mover's own king attacked. All tentative
    /// mutation is rolled back before this is reported.
    SelfCheck,
}
