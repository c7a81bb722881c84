// src/rasterizer/tests.rs

use super::*;
use crate::grid::Grid;
use crate::pixels::GridPoint;

fn inked_cells(grid: &Grid) -> Vec<(i32, i32, f32)> {
    let mut cells = Vec::new();
    for row in 0..grid.rows() as i32 {
        for col in 0..grid.cols() as i32 {
            let v = grid.get(row, col);
            if v > 0.0 {
                cells.push((row, col, v));
            }
        }
    }
    cells
}

#[test]
fn point_stamps_the_full_kernel() {
    let mut grid = Grid::new(28, 28);
    draw_point(&mut grid, GridPoint::new(5, 5));

    assert_eq!(grid.get(5, 5), INK_CENTER);
    assert_eq!(grid.get(6, 5), INK_EDGE);
    assert_eq!(grid.get(5, 6), INK_EDGE);
    assert_eq!(grid.get(6, 6), INK_CORNER);
    assert_eq!(inked_cells(&grid).len(), 4);
}

#[test]
fn point_at_the_last_cell_keeps_only_the_center() {
    let mut grid = Grid::new(28, 28);
    draw_point(&mut grid, GridPoint::new(27, 27));

    assert_eq!(grid.get(27, 27), INK_CENTER);
    assert_eq!(inked_cells(&grid).len(), 1);
}

#[test]
fn point_on_the_right_edge_keeps_its_column_neighbors() {
    let mut grid = Grid::new(28, 28);
    draw_point(&mut grid, GridPoint::new(5, 27));

    assert_eq!(grid.get(5, 27), INK_CENTER);
    assert_eq!(grid.get(6, 27), INK_EDGE);
    assert_eq!(inked_cells(&grid).len(), 2);
}

#[test]
fn fully_out_of_bounds_point_is_a_no_op() {
    let mut grid = Grid::new(28, 28);
    draw_point(&mut grid, GridPoint::new(-5, -5));
    draw_point(&mut grid, GridPoint::new(40, 3));
    assert!(grid.is_blank());
}

#[test]
fn degenerate_segment_equals_a_single_point() {
    let mut by_segment = Grid::new(28, 28);
    let mut by_point = Grid::new(28, 28);

    draw_segment(&mut by_segment, GridPoint::new(9, 4), GridPoint::new(9, 4));
    draw_point(&mut by_point, GridPoint::new(9, 4));

    assert_eq!(inked_cells(&by_segment), inked_cells(&by_point));
}

#[test]
fn horizontal_segment_covers_every_column() {
    let mut grid = Grid::new(28, 28);
    draw_segment(&mut grid, GridPoint::new(5, 5), GridPoint::new(5, 10));

    for col in 5..=10 {
        assert!(grid.get(5, col) > 0.0, "gap at column {}", col);
        assert!(grid.get(6, col) > 0.0, "gap below at column {}", col);
    }
    assert_eq!(grid.get(4, 7), 0.0);
    assert_eq!(grid.get(7, 7), 0.0);
}

/// Collects the stamp centers a segment produces, in order.
fn stamp_centers(from: GridPoint, to: GridPoint) -> Vec<GridPoint> {
    let distance = (to.row - from.row).abs().max((to.col - from.col).abs());
    if distance == 0 {
        return vec![to];
    }
    (0..=distance)
        .map(|step| {
            let t = step as f32 / distance as f32;
            GridPoint::new(
                (from.row as f32 + (to.row - from.row) as f32 * t).round() as i32,
                (from.col as f32 + (to.col - from.col) as f32 * t).round() as i32,
            )
        })
        .collect()
}

#[test]
fn consecutive_stamps_stay_within_chebyshev_distance_one() {
    let segments = [
        (GridPoint::new(0, 0), GridPoint::new(27, 27)),
        (GridPoint::new(3, 20), GridPoint::new(15, 2)),
        (GridPoint::new(10, 10), GridPoint::new(11, 25)),
        (GridPoint::new(25, 4), GridPoint::new(1, 6)),
        (GridPoint::new(7, 7), GridPoint::new(7, 7)),
    ];

    for (from, to) in segments {
        let centers = stamp_centers(from, to);
        assert_eq!(*centers.first().unwrap(), from);
        assert_eq!(*centers.last().unwrap(), to);
        for pair in centers.windows(2) {
            let dr = (pair[1].row - pair[0].row).abs();
            let dc = (pair[1].col - pair[0].col).abs();
            assert!(
                dr.max(dc) <= 1,
                "gap between {:?} and {:?} for segment {:?} -> {:?}",
                pair[0],
                pair[1],
                from,
                to
            );
        }
    }
}

#[test]
fn shallow_segment_restamps_without_accumulating() {
    let mut grid = Grid::new(28, 28);
    // 15 columns, 1 row: many steps revisit the same row.
    draw_segment(&mut grid, GridPoint::new(5, 5), GridPoint::new(6, 20));

    for (_, _, v) in inked_cells(&grid) {
        assert!(v <= INK_CENTER, "cell exceeded kernel maximum: {}", v);
    }
}

#[test]
fn segment_through_out_of_bounds_territory_keeps_the_in_bounds_part() {
    let mut grid = Grid::new(28, 28);
    draw_segment(&mut grid, GridPoint::new(5, -3), GridPoint::new(5, 3));

    assert!(grid.get(5, 0) > 0.0);
    assert!(grid.get(5, 3) > 0.0);
}

#[test]
fn self_crossing_stroke_never_saturates_past_center_weight() {
    let mut grid = Grid::new(28, 28);
    draw_segment(&mut grid, GridPoint::new(2, 2), GridPoint::new(20, 20));
    draw_segment(&mut grid, GridPoint::new(20, 2), GridPoint::new(2, 20));

    for (_, _, v) in inked_cells(&grid) {
        assert!(v <= INK_CENTER);
    }
}
