//! King-safety and terminal-state evaluation.
//!
//! Check detection scans the whole board and asks the pattern checker
//! whether any opposing piece could reach the king's square. This is a
//! coarse attack map by design: path obstruction is deliberately ignored,
//! so a sliding attacker behind a blocker still counts as checking.
//!
//! Checkmate and stalemate are decided by exhaustive simulation: every
//! pattern-legal candidate move for the color is applied to the board,
//! king safety is queried, and the probe is unconditionally reverted. The
//! first candidate that leaves the king safe proves a legal reply exists
//! and short-circuits the search.

use crate::game_state::chess_types::{BoardGrid, Color, Piece, PieceKind, SquareCoord};
use crate::move_rules::piece_patterns::is_pattern_legal;

/// Locate the king of `color`, scanning top-left to bottom-right.
pub fn find_king(board: &BoardGrid, color: Color) -> Option<SquareCoord> {
    for row in 0..8 {
        for col in 0..8 {
            if board[row][col] == Some(Piece::new(color, PieceKind::King)) {
                return Some((row, col));
            }
        }
    }
    None
}

/// True if the king of `color` is attacked under the coarse attack map.
///
/// A board with no king of `color` reports not-in-check; that is a
/// defensive fallback for constructed positions, not a real game state.
pub fn is_king_in_check(
    board: &BoardGrid,
    color: Color,
    last_pawn_double_move: Option<SquareCoord>,
) -> bool {
    let Some((king_row, king_col)) = find_king(board, color) else {
        return false;
    };

    for row in 0..8 {
        for col in 0..8 {
            let Some(piece) = board[row][col] else {
                continue;
            };
            if piece.color == color {
                continue;
            }
            if is_pattern_legal(
                board,
                piece,
                row,
                col,
                king_row,
                king_col,
                last_pawn_double_move,
            ) {
                return true;
            }
        }
    }

    false
}

/// Scoped two-square board mutation that restores both touched cells when
/// dropped, so a probe cannot leak onto the board on any exit path.
struct SquareProbe<'a> {
    board: &'a mut BoardGrid,
    from: SquareCoord,
    to: SquareCoord,
    saved_from: Option<Piece>,
    saved_to: Option<Piece>,
}

impl<'a> SquareProbe<'a> {
    fn apply(board: &'a mut BoardGrid, from: SquareCoord, to: SquareCoord) -> Self {
        let saved_from = board[from.0][from.1];
        let saved_to = board[to.0][to.1];
        board[to.0][to.1] = saved_from;
        board[from.0][from.1] = None;
        Self {
            board,
            from,
            to,
            saved_from,
            saved_to,
        }
    }

    fn board(&self) -> &BoardGrid {
        self.board
    }
}

impl Drop for SquareProbe<'_> {
    fn drop(&mut self) {
        self.board[self.from.0][self.from.1] = self.saved_from;
        self.board[self.to.0][self.to.1] = self.saved_to;
    }
}

/// True if any pattern-legal candidate move for `color` leaves its king
/// safe. Candidates are not filtered for path obstruction or friendly
/// occupancy; the probe-and-test settles each one.
fn has_escape_move(
    board: &mut BoardGrid,
    color: Color,
    last_pawn_double_move: Option<SquareCoord>,
) -> bool {
    for from_row in 0..8 {
        for from_col in 0..8 {
            let Some(piece) = board[from_row][from_col] else {
                continue;
            };
            if piece.color != color {
                continue;
            }

            for to_row in 0..8 {
                for to_col in 0..8 {
                    if !is_pattern_legal(
                        board,
                        piece,
                        from_row,
                        from_col,
                        to_row,
                        to_col,
                        last_pawn_double_move,
                    ) {
                        continue;
                    }

                    let probe =
                        SquareProbe::apply(board, (from_row, from_col), (to_row, to_col));
                    let escapes = !is_king_in_check(probe.board(), color, last_pawn_double_move);
                    drop(probe);

                    if escapes {
                        return true;
                    }
                }
            }
        }
    }

    false
}

/// True if `color` is in check and no simulated reply leaves its king safe.
pub fn is_checkmate(
    board: &mut BoardGrid,
    color: Color,
    last_pawn_double_move: Option<SquareCoord>,
) -> bool {
    is_king_in_check(board, color, last_pawn_double_move)
        && !has_escape_move(board, color, last_pawn_double_move)
}

/// True if `color` is not in check and no simulated reply leaves its king
/// safe.
pub fn is_stalemate(
    board: &mut BoardGrid,
    color: Color,
    last_pawn_double_move: Option<SquareCoord>,
) -> bool {
    !is_king_in_check(board, color, last_pawn_double_move)
        && !has_escape_move(board, color, last_pawn_double_move)
}
