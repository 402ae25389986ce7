//! Canonical chess-rule constants.
//!
//! Rank/row conventions, the standard starting arrangement, and castling
//! geometry shared by the pattern checker and the special-move handler.

use crate::game_state::chess_types::{BoardGrid, Color, Piece, PieceKind};

/// Back-rank piece order, file `a` through file `h`.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const WHITE_BACK_ROW: usize = 7;
pub const BLACK_BACK_ROW: usize = 0;

pub const KINGSIDE_ROOK_COL: usize = 7;
pub const QUEENSIDE_ROOK_COL: usize = 0;
pub const KINGSIDE_ROOK_DEST_COL: usize = 5;
pub const QUEENSIDE_ROOK_DEST_COL: usize = 2;

/// Row delta of a forward pawn step. White advances toward row 0.
#[inline]
pub const fn pawn_direction(color: Color) -> i32 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// Row a pawn starts on and may advance two squares from.
#[inline]
pub const fn pawn_home_row(color: Color) -> usize {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Far rank a pawn promotes on.
#[inline]
pub const fn promotion_row(color: Color) -> usize {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

#[inline]
pub const fn back_row(color: Color) -> usize {
    match color {
        Color::White => WHITE_BACK_ROW,
        Color::Black => BLACK_BACK_ROW,
    }
}

/// Standard starting arrangement.
pub fn starting_board() -> BoardGrid {
    let mut board: BoardGrid = [[None; 8]; 8];

    for (col, &kind) in BACK_RANK_ORDER.iter().enumerate() {
        board[BLACK_BACK_ROW][col] = Some(Piece::new(Color::Black, kind));
        board[WHITE_BACK_ROW][col] = Some(Piece::new(Color::White, kind));
    }
    for col in 0..8 {
        board[pawn_home_row(Color::Black)][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        board[pawn_home_row(Color::White)][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
    }

    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_board_has_standard_arrangement() {
        let board = starting_board();

        assert_eq!(
            board[7][4],
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board[0][3],
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(
            board[6][0],
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(
            board[1][7],
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );

        for row in 2..6 {
            for col in 0..8 {
                assert!(board[row][col].is_none(), "({row},{col}) should be empty");
            }
        }
    }

    #[test]
    fn pawn_geometry_is_color_symmetric() {
        assert_eq!(pawn_direction(Color::White), -1);
        assert_eq!(pawn_direction(Color::Black), 1);
        assert_eq!(pawn_home_row(Color::White), 6);
        assert_eq!(pawn_home_row(Color::Black), 1);
        assert_eq!(promotion_row(Color::White), 0);
        assert_eq!(promotion_row(Color::Black), 7);
    }
}
