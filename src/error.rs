//! This module contains the error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::io;
use std::num::ParseIntError;

/// The single failure kind of the solving core: the constraint store has
/// become unsatisfiable because some square lost its last candidate digit, or
/// some unit has no remaining square for a digit. A contradiction is an
/// expected, recoverable outcome of a single search branch and triggers
/// backtracking; only when every branch has failed does it surface as the
/// overall result of the solver.
///
/// A contradiction is deliberately distinct from the input errors in
/// [InputError]: "this puzzle has no solution from this state" is not the
/// same statement as "the operator supplied unusable input".
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Contradiction;

impl Display for Contradiction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "no consistent completion of the puzzle is reachable")
    }
}

/// Syntactic sugar for `Result<V, Contradiction>`.
pub type SolveResult<V> = Result<V, Contradiction>;

/// Miscellaneous errors that can occur when constructing or manipulating
/// grids and topologies. This does not include errors that occur when
/// parsing a grid code, see [PuzzleParseError] for that.
#[derive(Debug, Eq, PartialEq)]
pub enum PuzzleError {

    /// Indicates that the block dimensions specified for a grid or topology
    /// are invalid. This is the case if at least one of them is zero.
    InvalidDimensions,

    /// Indicates that some digit is invalid for the size of the grid in
    /// question. This is the case if it is less than 1 or greater than the
    /// size.
    InvalidDigit,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the grid in question. This is the case if they are greater than or
    /// equal to the size.
    OutOfBounds,

    /// Indicates that the number of provided cell tokens does not match the
    /// number of cells of a grid with the given dimensions.
    WrongTokenCount
}

impl Display for PuzzleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::InvalidDimensions =>
                write!(f, "block dimensions must both be at least 1"),
            PuzzleError::InvalidDigit =>
                write!(f, "digit out of range for the grid size"),
            PuzzleError::OutOfBounds =>
                write!(f, "cell coordinates lie outside the grid"),
            PuzzleError::WrongTokenCount =>
                write!(f, "wrong number of cell tokens for the grid size")
        }
    }
}

/// Syntactic sugar for `Result<V, PuzzleError>`.
pub type PuzzleResult<V> = Result<V, PuzzleError>;

/// An enumeration of the errors that may occur when parsing a [PuzzleGrid]
/// code (see [PuzzleGrid::parse](crate::PuzzleGrid::parse)).
#[derive(Debug, Eq, PartialEq)]
pub enum PuzzleParseError {

    /// Indicates that the code has the wrong number of parts, which are
    /// separated by semicolons. The code should have two parts: dimensions
    /// and cells.
    WrongNumberOfParts,

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal the number deduced from the dimensions.
    WrongNumberOfCells,

    /// Indicates that the dimensions have the wrong format. They should be
    /// of the form `<block_width>x<block_height>`.
    MalformedDimensions,

    /// Indicates that the provided dimensions are invalid (i.e. at least one
    /// is zero).
    InvalidDimensions,

    /// Indicates that one of the numbers (dimension or cell content) could
    /// not be parsed.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid digit (0 or more than
    /// the grid size).
    InvalidDigit
}

impl Display for PuzzleParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleParseError::WrongNumberOfParts =>
                write!(f, "expected exactly one ';' separating dimensions \
                    and cells"),
            PuzzleParseError::WrongNumberOfCells =>
                write!(f, "wrong number of cells for the given dimensions"),
            PuzzleParseError::MalformedDimensions =>
                write!(f, "dimensions must be of the form WIDTHxHEIGHT"),
            PuzzleParseError::InvalidDimensions =>
                write!(f, "block dimensions must both be at least 1"),
            PuzzleParseError::NumberFormatError =>
                write!(f, "could not parse a number in the code"),
            PuzzleParseError::InvalidDigit =>
                write!(f, "cell digit out of range for the grid size")
        }
    }
}

impl From<ParseIntError> for PuzzleParseError {
    fn from(_: ParseIntError) -> Self {
        PuzzleParseError::NumberFormatError
    }
}

/// Syntactic sugar for `Result<V, PuzzleParseError>`.
pub type PuzzleParseResult<V> = Result<V, PuzzleParseError>;

/// An enumeration of the errors that may occur while reading a puzzle from
/// text input. These are operator errors reported at the boundary of the
/// program and are never conflated with a [Contradiction].
#[derive(Debug)]
pub enum InputError {

    /// Indicates that the puzzle file could not be read.
    Io(io::Error),

    /// Indicates that the input ended before the requested (1-based) line
    /// was reached.
    LineNotFound(usize),

    /// Indicates that the selected line does not constitute a well-formed
    /// puzzle, e.g. because it holds the wrong number of tokens.
    Puzzle(PuzzleError)
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Io(error) =>
                write!(f, "could not read the puzzle input: {}", error),
            InputError::LineNotFound(line) =>
                write!(f, "the input contains no line {}", line),
            InputError::Puzzle(error) =>
                write!(f, "malformed puzzle line: {}", error)
        }
    }
}

impl std::error::Error for InputError {}

impl From<io::Error> for InputError {
    fn from(error: io::Error) -> Self {
        InputError::Io(error)
    }
}

impl From<PuzzleError> for InputError {
    fn from(error: PuzzleError) -> Self {
        InputError::Puzzle(error)
    }
}
