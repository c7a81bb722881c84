// src/grid/tests.rs

use super::*;

#[test]
fn new_grid_is_zero_filled() {
    let grid = Grid::new(28, 28);
    for row in 0..28 {
        for col in 0..28 {
            assert_eq!(grid.get(row, col), 0.0);
        }
    }
    assert!(grid.is_blank());
}

#[test]
fn set_then_get_round_trips_in_bounds() {
    let mut grid = Grid::new(28, 28);
    grid.set(3, 7, 0.5);
    assert_eq!(grid.get(3, 7), 0.5);
    assert!(!grid.is_blank());
}

#[test]
fn out_of_bounds_writes_are_dropped_silently() {
    let mut grid = Grid::new(28, 28);
    grid.set(-1, 0, 1.0);
    grid.set(0, -1, 1.0);
    grid.set(28, 0, 1.0);
    grid.set(0, 28, 1.0);
    assert!(grid.is_blank());
    assert_eq!(grid.version(), 0);
}

#[test]
fn out_of_bounds_reads_return_zero() {
    let mut grid = Grid::new(28, 28);
    grid.set(27, 27, 1.0);
    assert_eq!(grid.get(28, 27), 0.0);
    assert_eq!(grid.get(27, 28), 0.0);
    assert_eq!(grid.get(-1, 5), 0.0);
}

#[test]
fn last_valid_cell_is_writable() {
    let mut grid = Grid::new(28, 28);
    grid.set(27, 27, 0.9);
    assert_eq!(grid.get(27, 27), 0.9);
}

#[test]
fn values_are_clamped_to_unit_range() {
    let mut grid = Grid::new(4, 4);
    grid.set(0, 0, 1.5);
    grid.set(0, 1, -0.5);
    assert_eq!(grid.get(0, 0), 1.0);
    assert_eq!(grid.get(0, 1), 0.0);
}

#[test]
fn reset_zero_fills_every_cell() {
    let mut grid = Grid::new(28, 28);
    for col in 0..28 {
        grid.set(5, col, 0.8);
    }
    grid.reset();
    for row in 0..28 {
        for col in 0..28 {
            assert_eq!(grid.get(row, col), 0.0);
        }
    }
}

#[test]
fn mutations_bump_the_version() {
    let mut grid = Grid::new(28, 28);
    let v0 = grid.version();
    grid.set(1, 1, 0.5);
    let v1 = grid.version();
    assert!(v1 > v0);
    grid.reset();
    assert!(grid.version() > v1);
}

#[test]
fn dropped_writes_do_not_bump_the_version() {
    let mut grid = Grid::new(28, 28);
    grid.set(1, 1, 0.5);
    let v = grid.version();
    grid.set(99, 99, 0.5);
    assert_eq!(grid.version(), v);
}
