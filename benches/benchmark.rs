use criterion::{
    criterion_group,
    criterion_main,
    Criterion
};

use sudoku_propagate::PuzzleGrid;
use sudoku_propagate::solver;

// Explanation of benchmark classes:
//
// classic: A standard 9x9 puzzle that propagation alone nearly finishes,
//          measuring mostly the propagation engine.
// empty: An entirely unconstrained grid, measuring the search with maximal
//        branching.
// rectangular: A 6x6 puzzle with 3x2 blocks, covering the non-square
//              topology construction.

const CLASSIC: &str = "3x3;\
     , , , ,8,1, , , ,\
     , ,2, , ,7,8, , ,\
     ,5,3, , , ,1,7, ,\
    3,7, , , , , , , ,\
    6, , , , , , , ,3,\
     , , , , , , ,2,4,\
     ,6,9, , , ,2,3, ,\
     , ,5,9, , ,4, , ,\
     , , ,6,5, , , , ";

const RECTANGULAR: &str = "2x3;\
    1, ,3, ,5, ,\
     ,4, ,6, ,2,\
    5, ,1, ,3, ,\
     ,3, ,5, ,1,\
    4, ,6, ,2, ,\
     ,1, ,3, ,5";

fn solve_grid(code: &str) {
    let puzzle = PuzzleGrid::parse(code).unwrap();
    solver::solve(&puzzle).unwrap();
}

fn benchmark_classic(c: &mut Criterion) {
    c.bench_function("classic 9x9", |b| b.iter(|| solve_grid(CLASSIC)));
}

fn benchmark_empty(c: &mut Criterion) {
    c.bench_function("empty 9x9", |b| b.iter(|| {
        let puzzle = PuzzleGrid::new(3, 3).unwrap();
        solver::solve(&puzzle).unwrap();
    }));
}

fn benchmark_rectangular(c: &mut Criterion) {
    c.bench_function("rectangular 6x6",
        |b| b.iter(|| solve_grid(RECTANGULAR)));
}

criterion_group!(benches, benchmark_classic, benchmark_empty,
    benchmark_rectangular);
criterion_main!(benches);
