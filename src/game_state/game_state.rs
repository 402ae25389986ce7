//! Central mutable game state and the public rules-engine API.
//!
//! One `GameState` value owns one board. All mutation flows through
//! `submit_move`; every query is read-only. Nothing here is global: each
//! game is independently constructed and a concurrent host is expected to
//! serialize access to a single instance.

use crate::errors::MoveRejection;
use crate::game_state::chess_rules::starting_board;
use crate::game_state::chess_types::{
    BoardGrid, CastlingRights, GameResult, Piece, SquareCoord, CASTLE_ALL,
};
use crate::move_rules::apply_move::apply_coordinate_move;

/// A single chess game: board, en-passant marker, move audit trail, result,
/// and castling rights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// 8x8 mailbox grid. Row 0 is rank 8, column 0 is file `a`.
    pub board: BoardGrid,

    /// Destination of the most recent two-square pawn advance; cleared and
    /// recomputed on every committed move. Authorizes en passant on the
    /// immediately following move only.
    pub last_pawn_double_move: Option<SquareCoord>,

    /// Accepted moves in the notation they were reported with, append-only.
    pub move_history: Vec<String>,

    /// Game outcome; write-once transition away from `InProgress`.
    pub result: GameResult,

    /// Remaining castling rights, spent by king moves, rook moves off their
    /// corners, and corner-rook captures.
    pub castling_rights: CastlingRights,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// A fresh game with the standard starting arrangement.
    pub fn new_game() -> Self {
        Self {
            board: starting_board(),
            last_pawn_double_move: None,
            move_history: Vec::new(),
            result: GameResult::InProgress,
            castling_rights: CASTLE_ALL,
        }
    }

    /// An empty board with full castling rights; test and analysis setups
    /// place pieces directly.
    pub fn new_empty() -> Self {
        Self {
            board: [[None; 8]; 8],
            last_pawn_double_move: None,
            move_history: Vec::new(),
            result: GameResult::InProgress,
            castling_rights: CASTLE_ALL,
        }
    }

    /// Submit a move in 4-character coordinate notation.
    ///
    /// Returns the accepted notation (`e2e4`, or `O-O` / `O-O-O` for
    /// castling) and the empty string on any rejection. The empty string is
    /// the sole failure signal on this interface; see [`Self::try_move`]
    /// for the structured reason.
    pub fn submit_move(&mut self, move_text: &str) -> String {
        self.try_move(move_text).unwrap_or_default()
    }

    /// Like [`Self::submit_move`] but surfaces the rejection reason.
    pub fn try_move(&mut self, move_text: &str) -> Result<String, MoveRejection> {
        apply_coordinate_move(self, move_text)
    }

    /// Read-only view of the board for rendering and inspection.
    #[inline]
    pub fn get_board(&self) -> &BoardGrid {
        &self.board
    }

    /// External result code: `""` in progress, `"w"`/`"b"` win, `"d"` draw.
    #[inline]
    pub fn get_result(&self) -> &'static str {
        self.result.as_str()
    }

    /// Accepted moves in submission order.
    #[inline]
    pub fn get_move_history(&self) -> &[String] {
        &self.move_history
    }

    /// The piece on `(row, col)`, if any.
    #[inline]
    pub fn piece_at(&self, row: usize, col: usize) -> Option<Piece> {
        self.board[row][col]
    }

    /// Record a terminal result. Only the first terminal transition sticks;
    /// the result never reverts or changes once set.
    pub(crate) fn set_result_once(&mut self, result: GameResult) {
        if self.result == GameResult::InProgress {
            self.result = result;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_types::{Color, GameResult, Piece, PieceKind, CASTLE_ALL};

    #[test]
    fn new_game_starts_in_progress_with_full_rights() {
        let game = GameState::new_game();

        assert_eq!(game.get_result(), "");
        assert_eq!(game.result, GameResult::InProgress);
        assert_eq!(game.castling_rights, CASTLE_ALL);
        assert!(game.get_move_history().is_empty());
        assert_eq!(game.last_pawn_double_move, None);
        assert_eq!(
            game.piece_at(7, 4),
            Some(Piece::new(Color::White, PieceKind::King))
        );
    }

    #[test]
    fn result_transition_is_write_once() {
        let mut game = GameState::new_empty();

        game.set_result_once(GameResult::WhiteWins);
        assert_eq!(game.get_result(), "w");

        game.set_result_once(GameResult::Draw);
        assert_eq!(game.get_result(), "w");
    }

    #[test]
    fn each_game_instance_is_independent() {
        let mut first = GameState::new_game();
        let second = GameState::new_game();

        assert_eq!(first.submit_move("e2e4"), "e2e4");
        assert!(first.piece_at(6, 4).is_none());
        assert!(second.piece_at(6, 4).is_some());
    }
}
