// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements a solver for generalized Sudoku puzzles: square
//! grids of side `N = block_width · block_height` tiled by rectangular
//! blocks, not limited to the classic 9x9 case with 3x3 blocks. It supports
//! the following key features:
//!
//! * Parsing and printing puzzle grids of arbitrary block dimensions
//! * Constraint propagation over candidate sets (naked and hidden singles)
//! * Depth-first backtracking search guided by a minimum-remaining-values
//! heuristic, completing what propagation alone cannot resolve
//! * Reading puzzles from a one-line text presentation, as used by the
//! accompanying command-line interface
//!
//! Note in this introduction we will mostly be using 4x4 puzzles, which are
//! divided in 4 2x2 blocks, each with the digits 1 to 4, just like each row
//! and column.
//!
//! # Parsing and printing puzzles
//!
//! See [PuzzleGrid::parse] for the exact format of a puzzle code.
//!
//! ```
//! use sudoku_propagate::PuzzleGrid;
//!
//! let grid = PuzzleGrid::parse("2x2;1, , ,2, ,3, , , , ,4, ,2, , , ")
//!     .unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Solving puzzles
//!
//! The [solve](solver::solve) facade builds the topology for the grid's
//! block dimensions, initializes a candidate store from the clues, and
//! searches the remaining ambiguity. It returns the first solution found by
//! its (deterministic) search order, or a [Contradiction](error::Contradiction)
//! if no solution exists.
//!
//! ```
//! use sudoku_propagate::PuzzleGrid;
//! use sudoku_propagate::solver;
//!
//! // ╔═══╤═══╦═══╤═══╗
//! // ║   │   ║   │   ║
//! // ╟───┼───╫───┼───╢
//! // ║   │ 4 ║ 3 │   ║
//! // ╠═══╪═══╬═══╪═══╣
//! // ║   │ 3 ║   │ 1 ║
//! // ╟───┼───╫───┼───╢
//! // ║ 4 │   ║   │   ║
//! // ╚═══╧═══╩═══╧═══╝
//! let puzzle = PuzzleGrid::parse("2x2; , , , , ,4,3, , ,3, ,1,4, , , ")
//!     .unwrap();
//! let solution = solver::solve(&puzzle).unwrap();
//!
//! let expected =
//!     PuzzleGrid::parse("2x2;3,2,1,4,1,4,3,2,2,3,4,1,4,1,2,3").unwrap();
//! assert_eq!(expected, solution);
//! ```
//!
//! The staged interface behind the facade ([topology::Topology],
//! [propagation::CandidateStore] and [solver::search]) is public as well,
//! for callers that want to inspect candidate sets or drive propagation
//! step by step.
//!
//! # Reading puzzles from text
//!
//! The [input] module reads a puzzle from a selected line of a text input,
//! with a configurable square delimiter and empty-square token. Tokens that
//! name no digit of the puzzle's alphabet are read as empty squares rather
//! than rejected.
//!
//! # Note regarding performance
//!
//! Propagation operates on copy-on-write snapshots of the candidate store,
//! which keeps backtracking correct without any bookkeeping, at the price of
//! one store clone per attempted assignment. For large block dimensions it
//! is strongly recommended to use at least `opt-level = 2`, even in tests.

pub mod error;
pub mod input;
pub mod propagation;
pub mod solver;
pub mod topology;
pub mod util;

use error::{
    PuzzleError,
    PuzzleParseError,
    PuzzleParseResult,
    PuzzleResult
};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// A puzzle grid is composed of cells that are organized into blocks of a
/// given width and height in a way that makes the entire grid a square.
/// Consequently, the grid is tiled by `block_height` blocks horizontally and
/// `block_width` blocks vertically. Each cell may or may not be occupied by
/// a digit of the alphabet `1..=size`.
///
/// In ordinary Sudoku, the block width and height are both 3. Here more
/// exotic configurations are permitted, for example 3x2 blocks, which
/// result in a 6x6 grid.
///
/// A grid serves two roles: as the *clue grid* handed to the solver, where
/// empty cells mark the squares to be filled in, and as the *solved grid*
/// the solver produces, where every cell is occupied.
///
/// `PuzzleGrid` implements `Display` for grids of any size; every cell is
/// padded to the decimal width of the largest digit.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct PuzzleGrid {
    block_width: usize,
    block_height: usize,
    size: usize,
    cells: Vec<Option<usize>>
}

pub(crate) fn index(column: usize, row: usize, size: usize) -> usize {
    row * size + column
}

fn decimal_width(mut number: usize) -> usize {
    let mut width = 1;

    while number >= 10 {
        number /= 10;
        width += 1;
    }

    width
}

fn cell_text(cell: Option<usize>, width: usize) -> String {
    if let Some(digit) = cell {
        format!("{:>width$}", digit, width = width)
    }
    else {
        " ".repeat(width)
    }
}

fn line(grid: &PuzzleGrid, start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> String, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..grid.size {
        if x == 0 {
            result.push(start);
        }
        else if x % grid.block_width == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push_str(segment(x).as_str());
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn separator_line(grid: &PuzzleGrid, width: usize, start: char,
        thick_sep: char, thin_sep: char, pad: char, end: char, newline: bool)
        -> String {
    let segment = pad.to_string().repeat(width + 2);
    line(grid, start, thick_sep, thin_sep, |_| segment.clone(), end, newline)
}

fn content_row(grid: &PuzzleGrid, y: usize, width: usize) -> String {
    line(grid, '║', '║', '│',
        |x| format!(" {} ", cell_text(grid.cells[index(x, y, grid.size)],
            width)),
        '║', true)
}

impl Display for PuzzleGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = decimal_width(self.size);

        let top_row =
            separator_line(self, width, '╔', '╦', '╤', '═', '╗', true);
        let thin_separator =
            separator_line(self, width, '╟', '╫', '┼', '─', '╢', true);
        let thick_separator =
            separator_line(self, width, '╠', '╬', '╪', '═', '╣', true);
        let bottom_row =
            separator_line(self, width, '╚', '╩', '╧', '═', '╝', false);

        for y in 0..self.size {
            if y == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if y % self.block_height == 0 {
                f.write_str(thick_separator.as_str())?;
            }
            else {
                f.write_str(thin_separator.as_str())?;
            }

            f.write_str(content_row(self, y, width).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

fn parse_dimensions(code: &str) -> PuzzleParseResult<(usize, usize)> {
    let parts: Vec<&str> = code.split('x').collect();

    if parts.len() != 2 {
        return Err(PuzzleParseError::MalformedDimensions);
    }

    Ok((parts[0].trim().parse()?, parts[1].trim().parse()?))
}

impl PuzzleGrid {

    /// Creates a new, empty puzzle grid where the blocks have the given
    /// dimensions. The total width and height of the grid will be equal to
    /// the product of `block_width` and `block_height`.
    ///
    /// # Arguments
    ///
    /// * `block_width`: The horizontal dimension of one block of the grid.
    /// For an ordinary Sudoku grid, this is 3. Must be greater than 0.
    /// * `block_height`: The vertical dimension of one block of the grid.
    /// For an ordinary Sudoku grid, this is 3. Must be greater than 0.
    ///
    /// # Errors
    ///
    /// If `block_width` or `block_height` is invalid (zero).
    pub fn new(block_width: usize, block_height: usize)
            -> PuzzleResult<PuzzleGrid> {
        if block_width == 0 || block_height == 0 {
            return Err(PuzzleError::InvalidDimensions);
        }

        let size = block_width * block_height;
        Ok(PuzzleGrid::from_parts(block_width, block_height,
            vec![None; size * size]))
    }

    pub(crate) fn from_parts(block_width: usize, block_height: usize,
            cells: Vec<Option<usize>>) -> PuzzleGrid {
        PuzzleGrid {
            block_width,
            block_height,
            size: block_width * block_height,
            cells
        }
    }

    /// Parses a code encoding a puzzle grid. The code has to be of the
    /// format `<block_width>x<block_height>;<cells>` where `<cells>` is a
    /// comma-separated list of entries, which are either empty or a digit in
    /// the range `1..=size`. The entries are assigned left-to-right,
    /// top-to-bottom, where each row is completed before the next one is
    /// started. Whitespace in the entries is ignored to allow for more
    /// intuitive formatting. The number of entries must be
    /// `(block_width · block_height)²`.
    ///
    /// As an example, the code `2x2;1, , ,2, ,3, , , , ,4, ,2, , , ` parses
    /// to the following grid:
    ///
    /// ```text
    /// ╔═══╤═══╦═══╤═══╗
    /// ║ 1 │   ║   │ 2 ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 3 ║   │   ║
    /// ╠═══╪═══╬═══╪═══╣
    /// ║   │   ║ 4 │   ║
    /// ╟───┼───╫───┼───╢
    /// ║ 2 │   ║   │   ║
    /// ╚═══╧═══╩═══╧═══╝
    /// ```
    ///
    /// This format is strict: a malformed entry is an error. For the
    /// permissive token interpretation used at the text-input boundary, see
    /// [PuzzleGrid::from_tokens].
    ///
    /// # Errors
    ///
    /// Any specialization of [PuzzleParseError] (see that documentation).
    pub fn parse(code: &str) -> PuzzleParseResult<PuzzleGrid> {
        let parts: Vec<&str> = code.split(';').collect();

        if parts.len() != 2 {
            return Err(PuzzleParseError::WrongNumberOfParts);
        }

        let (block_width, block_height) = parse_dimensions(parts[0])?;

        if block_width == 0 || block_height == 0 {
            return Err(PuzzleParseError::InvalidDimensions);
        }

        let size = block_width * block_height;
        let tokens: Vec<&str> = parts[1].split(',').collect();

        if tokens.len() != size * size {
            return Err(PuzzleParseError::WrongNumberOfCells);
        }

        let mut cells = vec![None; size * size];

        for (i, token) in tokens.iter().enumerate() {
            let token = token.trim();

            if token.is_empty() {
                continue;
            }

            let digit = token.parse::<usize>()?;

            if digit == 0 || digit > size {
                return Err(PuzzleParseError::InvalidDigit);
            }

            cells[i] = Some(digit);
        }

        Ok(PuzzleGrid::from_parts(block_width, block_height, cells))
    }

    /// Creates a clue grid from a sequence of raw cell tokens in row-major
    /// order, as produced by splitting a line of puzzle text. A token equal
    /// to `empty` marks an empty square. Every other token that does not
    /// name a digit of the alphabet `1..=size` (unparsable text, `0`, or a
    /// number greater than the size) is *also* read as an empty square
    /// rather than rejected. Only a wrong token count is an error.
    ///
    /// # Arguments
    ///
    /// * `block_width`: The horizontal dimension of one block of the grid.
    /// Must be greater than 0.
    /// * `block_height`: The vertical dimension of one block of the grid.
    /// Must be greater than 0.
    /// * `tokens`: The raw cell tokens, row by row. There must be exactly
    /// `(block_width · block_height)²` of them.
    /// * `empty`: The token that marks an empty square.
    ///
    /// # Errors
    ///
    /// * `PuzzleError::InvalidDimensions` if `block_width` or `block_height`
    /// is zero.
    /// * `PuzzleError::WrongTokenCount` if the number of tokens does not
    /// match the number of cells.
    pub fn from_tokens(block_width: usize, block_height: usize,
            tokens: &[&str], empty: &str) -> PuzzleResult<PuzzleGrid> {
        if block_width == 0 || block_height == 0 {
            return Err(PuzzleError::InvalidDimensions);
        }

        let size = block_width * block_height;

        if tokens.len() != size * size {
            return Err(PuzzleError::WrongTokenCount);
        }

        let mut cells = vec![None; size * size];

        for (i, &token) in tokens.iter().enumerate() {
            if token == empty {
                continue;
            }

            if let Ok(digit) = token.trim().parse::<usize>() {
                if digit >= 1 && digit <= size {
                    cells[i] = Some(digit);
                }
            }
        }

        Ok(PuzzleGrid::from_parts(block_width, block_height, cells))
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [PuzzleGrid::parse]. That is, a grid that is converted to a string
    /// and parsed again will not change.
    ///
    /// ```
    /// use sudoku_propagate::PuzzleGrid;
    ///
    /// let mut grid = PuzzleGrid::new(3, 2).unwrap();
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(4, 0, 6).unwrap();
    ///
    /// let code = grid.to_parseable_string();
    /// assert_eq!(grid, PuzzleGrid::parse(code.as_str()).unwrap());
    /// ```
    pub fn to_parseable_string(&self) -> String {
        let cells = self.cells.iter()
            .map(|cell| match cell {
                Some(digit) => digit.to_string(),
                None => String::new()
            })
            .collect::<Vec<String>>()
            .join(",");
        format!("{}x{};{}", self.block_width, self.block_height, cells)
    }

    /// Gets the width (number of columns) of one block of the grid.
    pub fn block_width(&self) -> usize {
        self.block_width
    }

    /// Gets the height (number of rows) of one block of the grid.
    pub fn block_height(&self) -> usize {
        self.block_height
    }

    /// Gets the total size of the grid on one axis (horizontally or
    /// vertically). Since a square grid is enforced at construction time,
    /// this is guaranteed to be valid for both axes.
    pub fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn cell(&self, square: usize) -> Option<usize> {
        self.cells[square]
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `PuzzleError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> PuzzleResult<Option<usize>> {
        if column >= self.size || row >= self.size {
            Err(PuzzleError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row, self.size)])
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// digit. If the cell was not empty, the old digit will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, size[`.
    /// * `digit`: The digit to assign to the specified cell. Must be in the
    /// range `[1, size]`.
    ///
    /// # Errors
    ///
    /// * `PuzzleError::OutOfBounds` if either `column` or `row` are not in
    /// the specified range.
    /// * `PuzzleError::InvalidDigit` if `digit` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, digit: usize)
            -> PuzzleResult<()> {
        if column >= self.size || row >= self.size {
            return Err(PuzzleError::OutOfBounds);
        }

        if digit == 0 || digit > self.size {
            return Err(PuzzleError::InvalidDigit);
        }

        self.cells[index(column, row, self.size)] = Some(digit);
        Ok(())
    }

    /// Counts the number of clues given by this grid, i.e. the number of
    /// non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with
    /// a digit. A solved grid is always full.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }
}

impl From<PuzzleGrid> for String {
    fn from(grid: PuzzleGrid) -> String {
        grid.to_parseable_string()
    }
}

impl TryFrom<String> for PuzzleGrid {
    type Error = PuzzleParseError;

    fn try_from(code: String) -> PuzzleParseResult<PuzzleGrid> {
        PuzzleGrid::parse(code.as_str())
    }
}
