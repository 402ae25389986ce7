//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the demo binary, tests, and
//! diagnostics. Consumes only the read-only board view.

use crate::game_state::chess_types::{BoardGrid, Color, Piece, PieceKind};

/// Render the board to a Unicode string for terminal output.
///
/// Row 0 of the grid (rank 8) prints on top.
pub fn render_game_state(board: &BoardGrid) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8 {
        let rank_char = char::from(b'8' - row as u8);
        out.push(rank_char);
        out.push(' ');

        for col in 0..8 {
            match board[row][col] {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
