use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sudoku_solver::sudoku::engine::Backtracker;
use sudoku_solver::sudoku::grid::{Coord, EXAMPLE_PUZZLE, Grid};
use sudoku_solver::sudoku::peers::PeerTable;

fn bench_solve(c: &mut Criterion) {
    let classic = Grid::from_clues(EXAMPLE_PUZZLE);

    c.bench_function("solve - classic puzzle", |b| {
        let mut solver = Backtracker::new();
        b.iter(|| {
            let mut grid = classic.clone();
            black_box(solver.solve(&mut grid));
        })
    });

    c.bench_function("solve - empty grid", |b| {
        let mut solver = Backtracker::new();
        b.iter(|| {
            let mut grid = Grid::empty();
            black_box(solver.solve(&mut grid));
        })
    });

    c.bench_function("solve - classic puzzle, cold peer table", |b| {
        b.iter(|| {
            let mut solver = Backtracker::new();
            let mut grid = classic.clone();
            black_box(solver.solve(&mut grid));
        })
    });
}

fn bench_peer_table(c: &mut Criterion) {
    c.bench_function("peer table construction", |b| {
        b.iter(|| {
            black_box(PeerTable::new());
        })
    });

    let table = PeerTable::new();
    c.bench_function("peer lookup", |b| {
        b.iter(|| {
            for index in 0..81 {
                black_box(table.peers(Coord::from_index(index)));
            }
        })
    });
}

criterion_group!(benches, bench_solve, bench_peer_table);

criterion_main!(benches);
