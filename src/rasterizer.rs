// src/rasterizer.rs

//! Converts continuous pointer motion into discrete ink writes on the grid.
//!
//! A stroke arrives as a sequence of grid coordinates, one per input poll.
//! Consecutive samples can be several cells apart when the pointer moves
//! quickly, so each pair is rasterized as a line segment: the segment is
//! stepped in `max(|Δrow|, |Δcol|)` increments (Chebyshev distance), which
//! guarantees consecutive stamps land within one cell of each other on both
//! axes. Each stamp is a fixed 2x2-ish brush kernel with a soft edge.
//!
//! All writes are plain overwrites. Restamping a cell, whether from a shallow
//! segment or a self-crossing stroke, never accumulates past the kernel's
//! maximum weight.

use crate::grid::Grid;
use crate::pixels::GridPoint;

/// Ink weight written at the stamped cell.
pub const INK_CENTER: f32 = 250.0 / 255.0;
/// Ink weight written one cell right and one cell below.
pub const INK_EDGE: f32 = 220.0 / 255.0;
/// Ink weight written at the down-right diagonal.
pub const INK_CORNER: f32 = 190.0 / 255.0;

/// Stamps the brush kernel at `(row, col)`.
///
/// The kernel biases down-and-right rather than centering on the cell; it is
/// a cheap approximation of a soft two-pixel-wide tip. Writes that fall
/// outside the grid are dropped by the canvas bounds check.
pub fn draw_point(grid: &mut Grid, p: GridPoint) {
    grid.set(p.row, p.col, INK_CENTER);
    grid.set(p.row + 1, p.col, INK_EDGE);
    grid.set(p.row, p.col + 1, INK_EDGE);
    grid.set(p.row + 1, p.col + 1, INK_CORNER);
}

/// Rasterizes the segment from `from` to `to`, endpoints inclusive.
///
/// Both coordinates are interpolated independently over the Chebyshev
/// distance and rounded, so no two consecutive stamps are more than one cell
/// apart on either axis. A degenerate segment (`from == to`) still stamps a
/// single point.
pub fn draw_segment(grid: &mut Grid, from: GridPoint, to: GridPoint) {
    let distance = (to.row - from.row).abs().max((to.col - from.col).abs());

    if distance == 0 {
        draw_point(grid, to);
        return;
    }

    for step in 0..=distance {
        let t = step as f32 / distance as f32;
        let row = lerp(from.row as f32, to.row as f32, t).round() as i32;
        let col = lerp(from.col as f32, to.col as f32, t).round() as i32;
        draw_point(grid, GridPoint::new(row, col));
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests;
