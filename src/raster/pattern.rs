// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Fixed demonstration image: the letters "FEEP" in four gray levels on a
//! 7×24 canvas with intensity ceiling 15.

use super::error::Result;
use super::grid::PixelGrid;

pub const PATTERN_ROWS: usize = 7;
pub const PATTERN_COLS: usize = 24;
pub const PATTERN_MAX: u16 = 15;

#[rustfmt::skip]
const PATTERN: [[u8; PATTERN_COLS]; PATTERN_ROWS] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,  0,  0,  0,  0, 0, 0,  0,  0,  0,  0, 0],
    [0, 3, 3, 3, 3, 0, 0, 7, 7, 7, 7, 0, 0, 11, 11, 11, 11, 0, 0, 15, 15, 15, 15, 0],
    [0, 3, 0, 0, 0, 0, 0, 7, 0, 0, 0, 0, 0, 11,  0,  0,  0, 0, 0, 15,  0,  0, 15, 0],
    [0, 3, 3, 3, 0, 0, 0, 7, 7, 7, 0, 0, 0, 11, 11, 11,  0, 0, 0, 15, 15, 15, 15, 0],
    [0, 3, 0, 0, 0, 0, 0, 7, 0, 0, 0, 0, 0, 11,  0,  0,  0, 0, 0, 15,  0,  0,  0, 0],
    [0, 3, 0, 0, 0, 0, 0, 7, 7, 7, 7, 0, 0, 11, 11, 11, 11, 0, 0, 15,  0,  0,  0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,  0,  0,  0,  0, 0, 0,  0,  0,  0,  0, 0],
];

/// Paint the pattern into the top-left corner of `grid` through
/// [`PixelGrid::set`]. Cells beyond either extent are left alone, and values
/// above the grid's ceiling are clamped.
pub fn paint(grid: &mut PixelGrid) {
    let rows = grid.rows().min(PATTERN_ROWS);
    let cols = grid.cols().min(PATTERN_COLS);
    for (r, line) in PATTERN.iter().enumerate().take(rows) {
        for (c, &v) in line.iter().enumerate().take(cols) {
            grid.set(r as isize, c as isize, v as i64);
        }
    }
}

/// A fresh 7×24 grid (ceiling 15) with the pattern painted in.
pub fn feep() -> Result<PixelGrid> {
    let mut grid = PixelGrid::new(PATTERN_ROWS, PATTERN_COLS, PATTERN_MAX)?;
    paint(&mut grid);
    Ok(grid)
}
