//! Command-line interface for the generalized Sudoku solver.
//!
//! Reads a puzzle from a selected line of a text file, prints it, solves
//! it, and prints the solution (or a message that none exists) together
//! with the elapsed wall time. All solving happens through the library's
//! [solve](sudoku_propagate::solver::solve) entry point.

use clap::{Parser, ValueEnum};

use log::debug;

use sudoku_propagate::PuzzleGrid;
use sudoku_propagate::error::InputError;
use sudoku_propagate::input;
use sudoku_propagate::solver;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

/// The supported interpretations of the puzzle file.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum InputMode {

    /// The selected line holds the entire puzzle in row-major order.
    OneLine
}

/// Solves generalized Sudoku puzzles of arbitrary block dimensions using
/// constraint propagation and backtracking search.
#[derive(Parser)]
#[command(name = "sudoku-propagate", version)]
struct Cli {

    /// The input mode used to interpret the puzzle file.
    #[arg(short, long, value_enum, default_value = "one-line")]
    mode: InputMode,

    /// The delimiter separating the squares of the puzzle; if empty, every
    /// character is read as one square.
    #[arg(long, default_value = "")]
    delimiter: String,

    /// The token marking an empty square.
    #[arg(short, long, default_value = ".")]
    empty: String,

    /// The dimensions of one puzzle block as WIDTHxHEIGHT, e.g. 3x3 for
    /// standard Sudoku.
    #[arg(short, long, default_value = "3x3",
        value_parser = parse_block_dimensions)]
    dimensions: (usize, usize),

    /// The puzzle file to read.
    #[arg(short, long, default_value = "puzzles.txt")]
    file: PathBuf,

    /// The line of the file holding the puzzle, starting at 1.
    #[arg(short, long, default_value_t = 1)]
    line: usize
}

fn parse_block_dimensions(text: &str) -> Result<(usize, usize), String> {
    let parts: Vec<&str> = text.split('x').collect();

    if parts.len() != 2 {
        return Err(String::from("expected dimensions as WIDTHxHEIGHT"));
    }

    let block_width = parts[0].parse::<usize>()
        .map_err(|error| error.to_string())?;
    let block_height = parts[1].parse::<usize>()
        .map_err(|error| error.to_string())?;

    if block_width == 0 || block_height == 0 {
        return Err(String::from("block dimensions must both be at least 1"));
    }

    Ok((block_width, block_height))
}

fn read_puzzle(cli: &Cli) -> Result<PuzzleGrid, InputError> {
    let (block_width, block_height) = cli.dimensions;
    let file = File::open(&cli.file)?;
    let reader = BufReader::new(file);

    match cli.mode {
        InputMode::OneLine => input::read_one_line(reader, cli.line,
            &cli.delimiter, &cli.empty, block_width, block_height)
    }
}

fn run(cli: &Cli) -> Result<(), InputError> {
    let start = Instant::now();
    let puzzle = read_puzzle(cli)?;

    debug!("read a {0}x{0} puzzle with {1} clues", puzzle.size(),
        puzzle.count_clues());

    println!();
    println!("Original puzzle:");
    println!("{}", puzzle);

    match solver::solve(&puzzle) {
        Ok(solution) => {
            println!();
            println!("Solved puzzle:");
            println!("{}", solution);
        }
        Err(_) => {
            println!();
            println!("No viable solution to the puzzle was found.");
        }
    }

    println!();
    println!("Execution completed in {:?}", start.elapsed());
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        eprintln!("{}", error);
        process::exit(1);
    }
}
