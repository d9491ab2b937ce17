//! This module contains the text input boundary of the solver: reading a
//! clue grid from a one-line puzzle presentation.
//!
//! A puzzle file holds one puzzle per line, with the squares of the grid
//! listed in row-major order and separated by a configurable delimiter. An
//! empty delimiter means that every character stands for one square, which
//! is the common presentation for 9x9 puzzle collections such as
//! `4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......`.
//!
//! Errors raised here are operator errors, see [InputError]; a puzzle that
//! reads fine but has no solution is *not* an input error.
//!
//! ```
//! use std::io::Cursor;
//! use sudoku_propagate::input::read_one_line;
//!
//! let file = Cursor::new("first line is skipped\n1..2.34......1.2\n");
//! let grid = read_one_line(file, 2, "", ".", 2, 2).unwrap();
//!
//! assert_eq!(6, grid.count_clues());
//! ```

use crate::PuzzleGrid;
use crate::error::InputError;

use std::io::BufRead;

fn split_tokens<'a>(text: &'a str, delimiter: &str) -> Vec<&'a str> {
    if delimiter.is_empty() {
        text.char_indices()
            .map(|(start, character)| &text[start..start
                + character.len_utf8()])
            .collect()
    }
    else {
        text.split(delimiter).collect()
    }
}

/// Reads the puzzle on the given (1-based) line of the input, which holds
/// the entire grid in row-major order with squares separated by
/// `delimiter`. An empty `delimiter` reads every character as one square.
/// Tokens equal to `empty`, as well as tokens naming no digit of the
/// puzzle's alphabet, are read as empty squares (see
/// [PuzzleGrid::from_tokens]).
///
/// # Errors
///
/// * `InputError::Io` if the input cannot be read.
/// * `InputError::LineNotFound` if the input has fewer lines than `line`.
/// * `InputError::Puzzle` if the selected line does not hold exactly one
/// token per square of a grid with the given block dimensions.
pub fn read_one_line<R: BufRead>(reader: R, line: usize, delimiter: &str,
        empty: &str, block_width: usize, block_height: usize)
        -> Result<PuzzleGrid, InputError> {
    for (number, text) in reader.lines().enumerate() {
        let text = text?;

        if number + 1 == line {
            let tokens = split_tokens(text.as_str(), delimiter);
            let grid = PuzzleGrid::from_tokens(block_width, block_height,
                &tokens, empty)?;
            return Ok(grid);
        }
    }

    Err(InputError::LineNotFound(line))
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::error::PuzzleError;

    use std::io::Cursor;

    #[test]
    fn reads_character_tokens() {
        let file = Cursor::new("12.4.......2.3..");
        let grid = read_one_line(file, 1, "", ".", 2, 2).unwrap();

        assert_eq!(Some(1), grid.get_cell(0, 0).unwrap());
        assert_eq!(Some(2), grid.get_cell(1, 0).unwrap());
        assert_eq!(None, grid.get_cell(2, 0).unwrap());
        assert_eq!(Some(4), grid.get_cell(3, 0).unwrap());
        assert_eq!(Some(2), grid.get_cell(3, 2).unwrap());
        assert_eq!(Some(3), grid.get_cell(1, 3).unwrap());
        assert_eq!(5, grid.count_clues());
    }

    #[test]
    fn reads_delimited_tokens() {
        // Multi-digit entries require a delimiter; this is how grids larger
        // than 9x9 are presented.
        let mut tokens = vec!["-"; 100];
        tokens[0] = "10";
        tokens[1] = "2";
        tokens[99] = "7";

        let file = Cursor::new(tokens.join(" "));
        let grid = read_one_line(file, 1, " ", "-", 5, 2).unwrap();

        assert_eq!(10, grid.size());
        assert_eq!(Some(10), grid.get_cell(0, 0).unwrap());
        assert_eq!(Some(2), grid.get_cell(1, 0).unwrap());
        assert_eq!(None, grid.get_cell(2, 0).unwrap());
        assert_eq!(Some(7), grid.get_cell(9, 9).unwrap());
    }

    #[test]
    fn selects_the_requested_line() {
        let file = Cursor::new("1...............\n2...............\n");
        let grid = read_one_line(file, 2, "", ".", 2, 2).unwrap();

        assert_eq!(Some(2), grid.get_cell(0, 0).unwrap());
    }

    #[test]
    fn missing_line_is_an_error() {
        let file = Cursor::new("1...............\n");
        let result = read_one_line(file, 3, "", ".", 2, 2);

        assert!(matches!(result, Err(InputError::LineNotFound(3))));
    }

    #[test]
    fn wrong_token_count_is_an_error() {
        let file = Cursor::new("1...\n");
        let result = read_one_line(file, 1, "", ".", 2, 2);

        assert!(matches!(result,
            Err(InputError::Puzzle(PuzzleError::WrongTokenCount))));
    }
}
