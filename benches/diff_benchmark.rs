//! Diffing engine benchmark: measure grid diff performance.
//!
//! The diff walk is the per-frame hot path; it runs once per rendered
//! frame over the full grid.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gridloop::buffer::diff::{render_diff, CursorTracker};
use gridloop::{Cell, Color, Grid};

/// Create a grid with deterministic patterned content.
fn create_test_grid(width: u16, height: u16, seed: u8) -> Grid {
    let mut grid = Grid::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let c = ((x + y + u16::from(seed)) % 26 + 65) as u8 as char; // A-Z
            let cell = Cell::new(c).with_fg(Color::Rgb(
                ((x * 3 + u16::from(seed)) % 256) as u8,
                ((y * 7 + u16::from(seed)) % 256) as u8,
                ((x + y + u16::from(seed)) % 256) as u8,
            ));
            grid.set(x, y, cell);
        }
    }
    grid
}

fn diff_identical_grids(c: &mut Criterion) {
    let grid = create_test_grid(200, 50, 0);
    let grid_clone = grid.clone();

    c.bench_function("diff_200x50_identical", |b| {
        b.iter(|| {
            let mut output = Vec::with_capacity(4096);
            let mut cursor = CursorTracker::new();
            render_diff(
                black_box(&grid),
                black_box(&grid_clone),
                &mut output,
                &mut cursor,
            )
        })
    });
}

fn diff_single_cell_change(c: &mut Criterion) {
    let grid_a = create_test_grid(200, 50, 0);
    let mut grid_b = grid_a.clone();
    // Change a single cell in the middle (a typical moving sprite)
    grid_b.set(100, 25, Cell::new('X').with_fg(Color::BrightRed));

    c.bench_function("diff_200x50_single_change", |b| {
        b.iter(|| {
            let mut output = Vec::with_capacity(4096);
            let mut cursor = CursorTracker::new();
            render_diff(
                black_box(&grid_a),
                black_box(&grid_b),
                &mut output,
                &mut cursor,
            )
        })
    });
}

fn diff_full_change(c: &mut Criterion) {
    let grid_a = create_test_grid(200, 50, 0);
    let grid_b = create_test_grid(200, 50, 1); // Different seed = different content

    c.bench_function("diff_200x50_full_change", |b| {
        b.iter(|| {
            let mut output = Vec::with_capacity(65536);
            let mut cursor = CursorTracker::new();
            render_diff(
                black_box(&grid_a),
                black_box(&grid_b),
                &mut output,
                &mut cursor,
            )
        })
    });
}

fn diff_line_change(c: &mut Criterion) {
    let grid_a = create_test_grid(200, 50, 0);
    let mut grid_b = grid_a.clone();
    for x in 0..200 {
        grid_b.set(x, 25, Cell::new('*').with_fg(Color::BrightYellow));
    }

    c.bench_function("diff_200x50_line_change", |b| {
        b.iter(|| {
            let mut output = Vec::with_capacity(4096);
            let mut cursor = CursorTracker::new();
            render_diff(
                black_box(&grid_a),
                black_box(&grid_b),
                &mut output,
                &mut cursor,
            )
        })
    });
}

fn diff_various_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff_by_size");

    for (width, height) in [(40, 20), (80, 24), (120, 40), (200, 50)] {
        let grid_a = create_test_grid(width, height, 0);
        let grid_b = create_test_grid(width, height, 1);

        group.bench_with_input(
            BenchmarkId::new("full_change", format!("{width}x{height}")),
            &(grid_a, grid_b),
            |b, (a, bb)| {
                b.iter(|| {
                    let mut output = Vec::with_capacity(65536);
                    let mut cursor = CursorTracker::new();
                    render_diff(black_box(a), black_box(bb), &mut output, &mut cursor)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    diff_identical_grids,
    diff_single_cell_change,
    diff_full_change,
    diff_line_change,
    diff_various_sizes,
);
criterion_main!(benches);
