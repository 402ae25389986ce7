//! Path/occupancy validator for sliding moves.
//!
//! Applies to bishop, rook, queen, and the castling king-step. Knight moves
//! jump and never consult this check. The destination square itself is
//! excluded; whether landing there is a capture or a friendly collision is
//! decided by the caller.

use crate::game_state::chess_types::BoardGrid;

/// True if every square strictly between `from` and `to` is empty.
///
/// `from -> to` must lie on a straight or diagonal line; adjacent moves are
/// trivially clear.
pub fn is_path_clear(
    board: &BoardGrid,
    from_row: usize,
    from_col: usize,
    to_row: usize,
    to_col: usize,
) -> bool {
    let row_step = (to_row as i32 - from_row as i32).signum();
    let col_step = (to_col as i32 - from_col as i32).signum();
    let distance = from_row.abs_diff(to_row).max(from_col.abs_diff(to_col)) as i32;

    for step in 1..distance {
        let row = (from_row as i32 + row_step * step) as usize;
        let col = (from_col as i32 + col_step * step) as usize;
        if board[row][col].is_some() {
            return false;
        }
    }

    true
}
