//! Special-move handling: en passant, castling, and pawn promotion.
//!
//! Each behavior validates all of its preconditions before any board
//! mutation. Castling short-circuits the normal submission pipeline and
//! reports algebraic castling notation instead of coordinate notation.

use crate::errors::MoveRejection;
use crate::game_state::chess_rules::{
    KINGSIDE_ROOK_COL, KINGSIDE_ROOK_DEST_COL, QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_DEST_COL,
    promotion_row,
};
use crate::game_state::chess_types::{
    castle_rights_for, CastlingRights, Piece, PieceKind, SquareCoord, CASTLE_BLACK_KINGSIDE,
    CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE, Color,
};
use crate::game_state::game_state::GameState;
use crate::move_rules::path_clearance::is_path_clear;
use crate::utils::coordinate::ParsedMove;

pub const KINGSIDE_CASTLE_NOTATION: &str = "O-O";
pub const QUEENSIDE_CASTLE_NOTATION: &str = "O-O-O";

/// Resolve a candidate en-passant capture.
///
/// Triggers when a pawn moves diagonally onto an empty square. Returns the
/// square of the passed pawn to remove, `None` when the move is not an
/// en-passant candidate at all, and an error when the diagonal step lacks a
/// qualifying preceding double move. The pattern checker already gates on
/// the same condition; revalidating here keeps the handler self-contained.
pub fn en_passant_capture_square(
    state: &GameState,
    piece: Piece,
    mv: &ParsedMove,
) -> Result<Option<SquareCoord>, MoveRejection> {
    if piece.kind != PieceKind::Pawn
        || mv.from_col == mv.to_col
        || state.board[mv.to_row][mv.to_col].is_some()
    {
        return Ok(None);
    }

    if state.last_pawn_double_move != Some((mv.from_row, mv.to_col)) {
        return Err(MoveRejection::InvalidEnPassant);
    }

    Ok(Some((mv.from_row, mv.to_col)))
}

/// True when a pawn move's destination reaches the far rank and the moved
/// pawn auto-promotes to a queen.
#[inline]
pub fn promotion_applies(piece: Piece, to_row: usize) -> bool {
    piece.kind == PieceKind::Pawn && to_row == promotion_row(piece.color)
}

#[inline]
fn castle_right_bit(color: Color, kingside: bool) -> CastlingRights {
    match (color, kingside) {
        (Color::White, true) => CASTLE_WHITE_KINGSIDE,
        (Color::White, false) => CASTLE_WHITE_QUEENSIDE,
        (Color::Black, true) => CASTLE_BLACK_KINGSIDE,
        (Color::Black, false) => CASTLE_BLACK_QUEENSIDE,
    }
}

/// Validate and perform a castling move (king moving two columns).
///
/// Preconditions, in order: the matching castling right is still held, a
/// rook of the mover's color sits on the corner column of the king's row,
/// every square strictly between king and rook is empty, and the king's
/// destination is directly adjacent to the rook's column. Any failure
/// leaves the board untouched.
///
/// On success the king and rook are relocated, both origin squares are
/// cleared, the mover's castling rights are spent, and the algebraic
/// notation (`O-O` / `O-O-O`) is returned.
pub fn handle_castling(
    state: &mut GameState,
    piece: Piece,
    mv: &ParsedMove,
) -> Result<String, MoveRejection> {
    let kingside = mv.to_col > mv.from_col;
    let rook_col = if kingside {
        KINGSIDE_ROOK_COL
    } else {
        QUEENSIDE_ROOK_COL
    };
    let rook_dest_col = if kingside {
        KINGSIDE_ROOK_DEST_COL
    } else {
        QUEENSIDE_ROOK_DEST_COL
    };

    if state.castling_rights & castle_right_bit(piece.color, kingside) == 0 {
        return Err(MoveRejection::InvalidCastling);
    }

    match state.board[mv.from_row][rook_col] {
        Some(corner) if corner.kind == PieceKind::Rook && corner.color == piece.color => {}
        _ => return Err(MoveRejection::InvalidCastling),
    }

    if !is_path_clear(&state.board, mv.from_row, mv.from_col, mv.from_row, rook_col) {
        return Err(MoveRejection::InvalidCastling);
    }

    if rook_col.abs_diff(mv.to_col) != 1 {
        return Err(MoveRejection::InvalidCastling);
    }

    let rook = state.board[mv.from_row][rook_col];
    state.board[mv.to_row][mv.to_col] = Some(piece);
    state.board[mv.from_row][mv.from_col] = None;
    state.board[mv.from_row][rook_dest_col] = rook;
    state.board[mv.from_row][rook_col] = None;
    state.castling_rights &= !castle_rights_for(piece.color);

    let notation = if kingside {
        KINGSIDE_CASTLE_NOTATION
    } else {
        QUEENSIDE_CASTLE_NOTATION
    };
    Ok(notation.to_string())
}
