//! Coordinate-notation parsing and formatting.
//!
//! Moves arrive as 4-character strings `<file><rank><file><rank>` (for
//! example `e2e4`). Files map to columns (`a` = 0) and ranks map to rows
//! top-down (rank 8 = row 0).

use crate::errors::MoveRejection;
use crate::game_state::chess_types::SquareCoord;

/// A parsed 4-character coordinate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedMove {
    pub from_row: usize,
    pub from_col: usize,
    pub to_row: usize,
    pub to_col: usize,
}

impl ParsedMove {
    #[inline]
    pub const fn from(&self) -> SquareCoord {
        (self.from_row, self.from_col)
    }

    #[inline]
    pub const fn to(&self) -> SquareCoord {
        (self.to_row, self.to_col)
    }
}

/// Convert one coordinate pair (for example `e2`) to `(row, col)`.
#[inline]
pub fn coordinate_to_square(square: &str) -> Result<SquareCoord, MoveRejection> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(MoveRejection::MalformedInput);
    }
    square_from_bytes(bytes[0], bytes[1])
}

#[inline]
fn square_from_bytes(file: u8, rank: u8) -> Result<SquareCoord, MoveRejection> {
    if !(b'a'..=b'h').contains(&file) {
        return Err(MoveRejection::MalformedInput);
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(MoveRejection::MalformedInput);
    }

    let col = (file - b'a') as usize;
    let row = (b'8' - rank) as usize;
    Ok((row, col))
}

/// Convert `(row, col)` back to a coordinate pair such as `e2`.
///
/// Both indices must be `0..8`.
#[inline]
pub fn square_to_coordinate(row: usize, col: usize) -> String {
    debug_assert!(row < 8 && col < 8);

    let file_char = char::from(b'a' + col as u8);
    let rank_char = char::from(b'8' - row as u8);
    format!("{file_char}{rank_char}")
}

/// Parse a full 4-character move string.
pub fn parse_move_text(move_text: &str) -> Result<ParsedMove, MoveRejection> {
    let bytes = move_text.as_bytes();
    if bytes.len() != 4 {
        return Err(MoveRejection::MalformedInput);
    }

    let (from_row, from_col) = square_from_bytes(bytes[0], bytes[1])?;
    let (to_row, to_col) = square_from_bytes(bytes[2], bytes[3])?;

    Ok(ParsedMove {
        from_row,
        from_col,
        to_row,
        to_col,
    })
}

#[cfg(test)]
mod tests {
    use super::{coordinate_to_square, parse_move_text, square_to_coordinate};
    use crate::errors::MoveRejection;

    #[test]
    fn corner_squares_map_to_grid_corners() {
        assert_eq!(coordinate_to_square("a8").expect("a8 should parse"), (0, 0));
        assert_eq!(coordinate_to_square("h8").expect("h8 should parse"), (0, 7));
        assert_eq!(coordinate_to_square("a1").expect("a1 should parse"), (7, 0));
        assert_eq!(coordinate_to_square("h1").expect("h1 should parse"), (7, 7));
        assert_eq!(coordinate_to_square("e2").expect("e2 should parse"), (6, 4));
    }

    #[test]
    fn round_trip_square_conversions() {
        for row in 0..8 {
            for col in 0..8 {
                let text = square_to_coordinate(row, col);
                assert_eq!(
                    coordinate_to_square(&text).expect("formatted square should parse"),
                    (row, col)
                );
            }
        }
    }

    #[test]
    fn parse_move_text_splits_into_from_and_to() {
        let mv = parse_move_text("e2e4").expect("e2e4 should parse");
        assert_eq!(mv.from(), (6, 4));
        assert_eq!(mv.to(), (4, 4));
    }

    #[test]
    fn malformed_move_strings_are_rejected() {
        for text in ["", "e2", "e2e", "e2e44", "i2e4", "e9e4", "e2i4", "e2e9", "22e4"] {
            assert_eq!(
                parse_move_text(text),
                Err(MoveRejection::MalformedInput),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn multibyte_input_is_rejected_not_panicked_on() {
        // "€4" is four bytes long but not four ASCII characters.
        assert_eq!(parse_move_text("€4"), Err(MoveRejection::MalformedInput));
        assert_eq!(parse_move_text("é2e4"), Err(MoveRejection::MalformedInput));
    }
}
