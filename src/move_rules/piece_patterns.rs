//! Movement pattern checker.
//!
//! Decides whether a move's geometry is permitted for a piece in isolation,
//! ignoring path obstruction and king safety. Pawns are the one exception to
//! purity: their diagonal step consults the destination cell (ordinary
//! capture) and the last two-square pawn advance (en passant geometry).
//!
//! The king-safety evaluator reuses this function as a coarse attack map, so
//! a "pattern legal" sliding move toward a square does not imply the slider
//! could actually reach it.

use crate::game_state::chess_rules::{pawn_direction, pawn_home_row};
use crate::game_state::chess_types::{BoardGrid, Piece, PieceKind, SquareCoord};

/// True if the geometry of `from -> to` is permitted for `piece`.
///
/// Zero-length moves are rejected for every piece kind.
pub fn is_pattern_legal(
    board: &BoardGrid,
    piece: Piece,
    from_row: usize,
    from_col: usize,
    to_row: usize,
    to_col: usize,
    last_pawn_double_move: Option<SquareCoord>,
) -> bool {
    let row_diff = from_row.abs_diff(to_row);
    let col_diff = from_col.abs_diff(to_col);

    if row_diff == 0 && col_diff == 0 {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => {
            let direction = pawn_direction(piece.color);
            let signed_row_step = to_row as i32 - from_row as i32;

            // Forward one.
            if col_diff == 0 && signed_row_step == direction {
                return true;
            }

            // Forward two from the home rank.
            if col_diff == 0
                && signed_row_step == 2 * direction
                && from_row == pawn_home_row(piece.color)
            {
                return true;
            }

            // Diagonal one: ordinary capture onto an enemy piece, or the
            // en-passant geometry onto an empty square beside the pawn that
            // just advanced two.
            if col_diff == 1 && signed_row_step == direction {
                return match board[to_row][to_col] {
                    Some(target) => target.color != piece.color,
                    None => last_pawn_double_move == Some((from_row, to_col)),
                };
            }

            false
        }
        PieceKind::Knight => matches!((row_diff, col_diff), (2, 1) | (1, 2)),
        PieceKind::Bishop => row_diff == col_diff,
        PieceKind::Rook => from_row == to_row || from_col == to_col,
        PieceKind::Queen => {
            row_diff == col_diff || from_row == to_row || from_col == to_col
        }
        PieceKind::King => {
            // One step in any direction, or the two-column castling
            // candidate (validated fully by the special-move handler).
            (row_diff <= 1 && col_diff <= 1) || (row_diff == 0 && col_diff == 2)
        }
    }
}
