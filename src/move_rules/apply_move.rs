//! The move-submission pipeline.
//!
//! A submitted coordinate move flows pattern check -> path check -> friendly
//! capture check -> special-move resolution -> tentative application ->
//! king-safety gate -> commit -> terminal-state evaluation of the opponent.
//! Rejection at any stage leaves the game state exactly as it was,
//! including en-passant side effects and the double-move marker.

use crate::errors::MoveRejection;
use crate::game_state::chess_rules::back_row;
use crate::game_state::chess_types::{
    castle_rights_for, GameResult, Piece, PieceKind, CASTLE_BLACK_KINGSIDE,
    CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE, Color,
};
use crate::game_state::game_state::GameState;
use crate::move_rules::king_safety::{is_checkmate, is_king_in_check, is_stalemate};
use crate::move_rules::path_clearance::is_path_clear;
use crate::move_rules::piece_patterns::is_pattern_legal;
use crate::move_rules::special_moves::{
    en_passant_capture_square, handle_castling, promotion_applies,
};
use crate::utils::coordinate::{parse_move_text, ParsedMove};

/// Validate `move_text`, apply it, and update the game result.
///
/// Returns the accepted notation: the original 4-character text for an
/// ordinary move, or `O-O` / `O-O-O` for castling.
pub fn apply_coordinate_move(
    state: &mut GameState,
    move_text: &str,
) -> Result<String, MoveRejection> {
    let mv = parse_move_text(move_text)?;

    let piece = state.board[mv.from_row][mv.from_col].ok_or(MoveRejection::NoPieceAtSource)?;

    if !is_pattern_legal(
        &state.board,
        piece,
        mv.from_row,
        mv.from_col,
        mv.to_row,
        mv.to_col,
        state.last_pawn_double_move,
    ) {
        return Err(MoveRejection::IllegalPattern);
    }

    // Knights jump; everything else walks a line to its destination.
    if piece.kind != PieceKind::Knight
        && !is_path_clear(&state.board, mv.from_row, mv.from_col, mv.to_row, mv.to_col)
    {
        return Err(MoveRejection::BlockedPath);
    }

    let target = state.board[mv.to_row][mv.to_col];
    if let Some(occupant) = target {
        if occupant.color == piece.color {
            return Err(MoveRejection::FriendlyCapture);
        }
    }

    let en_passant_capture = en_passant_capture_square(state, piece, &mv)?;

    // Castling resolves entirely inside the special-move handler and
    // reports its own notation.
    if piece.kind == PieceKind::King && mv.from_col.abs_diff(mv.to_col) == 2 {
        let notation = handle_castling(state, piece, &mv)?;
        state.last_pawn_double_move = None;
        state.move_history.push(notation.clone());
        return Ok(notation);
    }

    let placed = if promotion_applies(piece, mv.to_row) {
        Piece::new(piece.color, PieceKind::Queen)
    } else {
        piece
    };

    // Tentative application on a scratch copy; the committed board is only
    // replaced once the mover's king is known to be safe.
    let mut tentative = state.board;
    tentative[mv.to_row][mv.to_col] = Some(placed);
    tentative[mv.from_row][mv.from_col] = None;
    if let Some((row, col)) = en_passant_capture {
        tentative[row][col] = None;
    }

    if is_king_in_check(&tentative, piece.color, state.last_pawn_double_move) {
        return Err(MoveRejection::SelfCheck);
    }

    state.board = tentative;
    state.last_pawn_double_move = if piece.kind == PieceKind::Pawn
        && mv.from_row.abs_diff(mv.to_row) == 2
    {
        Some((mv.to_row, mv.to_col))
    } else {
        None
    };
    update_castling_rights(state, piece, &mv, target);
    state.move_history.push(move_text.to_string());

    evaluate_terminal_state(state, piece.color);

    Ok(move_text.to_string())
}

/// Spend castling rights on king moves, rook moves off their corners, and
/// captures landing on an enemy rook's corner.
fn update_castling_rights(
    state: &mut GameState,
    piece: Piece,
    mv: &ParsedMove,
    captured: Option<Piece>,
) {
    if piece.kind == PieceKind::King {
        state.castling_rights &= !castle_rights_for(piece.color);
    }

    if piece.kind == PieceKind::Rook {
        state.castling_rights &= !corner_right(piece.color, mv.from_row, mv.from_col);
    }

    if let Some(victim) = captured {
        if victim.kind == PieceKind::Rook {
            state.castling_rights &= !corner_right(victim.color, mv.to_row, mv.to_col);
        }
    }
}

/// The castling right tied to a rook corner square, or 0 for any other
/// square.
fn corner_right(color: Color, row: usize, col: usize) -> u8 {
    if row != back_row(color) {
        return 0;
    }
    match (color, col) {
        (Color::White, 7) => CASTLE_WHITE_KINGSIDE,
        (Color::White, 0) => CASTLE_WHITE_QUEENSIDE,
        (Color::Black, 7) => CASTLE_BLACK_KINGSIDE,
        (Color::Black, 0) => CASTLE_BLACK_QUEENSIDE,
        _ => 0,
    }
}

/// After a committed move by `mover`, decide whether the opponent is mated
/// or stalemated. The result transitions away from in-progress at most
/// once.
fn evaluate_terminal_state(state: &mut GameState, mover: Color) {
    let opponent = mover.opposite();
    let last_double = state.last_pawn_double_move;

    if is_checkmate(&mut state.board, opponent, last_double) {
        state.set_result_once(GameResult::win_for(mover));
    } else if is_stalemate(&mut state.board, opponent, last_double) {
        state.set_result_once(GameResult::Draw);
    }
}
