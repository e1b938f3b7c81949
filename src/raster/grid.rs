// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Bounded grayscale pixel storage.
//!
//! Provides [`PixelGrid`], a `rows × cols` buffer of intensities in
//! `[0, max_intensity]`, stored row-major in a single flat vector.
//! Reads outside the grid return 0 and writes outside it are ignored, so
//! callers walking past an edge (rotation, pattern painting) never fault.

use std::fmt;

use super::error::{RasterError, Result};

/// Dimensions and intensity range of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub rows: usize,
    pub cols: usize,
    pub max_intensity: u16,
}

impl fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rows x {} cols, max {}", self.rows, self.cols, self.max_intensity)
    }
}

/// Grayscale image with a fixed size and intensity ceiling.
///
/// Cloning produces an independent deep copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    rows: usize,
    cols: usize,
    max_intensity: u16,
    /// Flat storage: `rows * cols` values, index = row * cols + col.
    pixels: Vec<u16>,
}

impl PixelGrid {
    /// Create a zero-filled grid.
    ///
    /// # Errors
    /// [`RasterError::AllocationFailed`] if `rows * cols` overflows or the
    /// buffer cannot be reserved. No grid is produced in that case.
    pub fn new(rows: usize, cols: usize, max_intensity: u16) -> Result<Self> {
        let len = rows
            .checked_mul(cols)
            .ok_or(RasterError::AllocationFailed { rows, cols })?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| RasterError::AllocationFailed { rows, cols })?;
        pixels.resize(len, 0);
        Ok(Self { rows, cols, max_intensity, pixels })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn max_intensity(&self) -> u16 {
        self.max_intensity
    }

    /// Total number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn info(&self) -> ImageInfo {
        ImageInfo {
            rows: self.rows,
            cols: self.cols,
            max_intensity: self.max_intensity,
        }
    }

    /// Whether `(row, col)` addresses a stored pixel.
    ///
    /// Every other component goes through this check.
    #[inline]
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Intensity at `(row, col)`, or 0 outside the grid.
    #[inline]
    pub fn get(&self, row: isize, col: isize) -> u16 {
        if self.in_bounds(row, col) {
            self.pixels[row as usize * self.cols + col as usize]
        } else {
            0
        }
    }

    /// Store `value` clamped to `[0, max_intensity]`. Ignored outside the grid.
    #[inline]
    pub fn set(&mut self, row: isize, col: isize, value: i64) {
        if self.in_bounds(row, col) {
            let idx = row as usize * self.cols + col as usize;
            self.pixels[idx] = value.clamp(0, self.max_intensity as i64) as u16;
        }
    }

    /// Row-major view of all intensities.
    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    /// Borrow one row, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[u16]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.pixels[start..start + self.cols])
    }

    /// Raw mutable access for whole-buffer transforms.
    ///
    /// Callers must keep every value within `[0, max_intensity]`.
    pub(crate) fn pixels_mut(&mut self) -> &mut [u16] {
        &mut self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_zeroed() {
        let g = PixelGrid::new(3, 4, 255).unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.len(), 12);
        assert!(g.pixels().iter().all(|&v| v == 0));
    }

    #[test]
    fn overflowing_dimensions_fail() {
        match PixelGrid::new(usize::MAX, 2, 15) {
            Err(RasterError::AllocationFailed { rows, cols }) => {
                assert_eq!((rows, cols), (usize::MAX, 2));
            }
            other => panic!("expected AllocationFailed, got {other:?}"),
        }
    }

    #[test]
    fn set_clamps_to_range() {
        let mut g = PixelGrid::new(2, 2, 15).unwrap();
        g.set(0, 0, 99);
        g.set(0, 1, -7);
        g.set(1, 0, 15);
        g.set(1, 1, 8);
        assert_eq!(g.pixels(), &[15, 0, 15, 8]);
    }

    #[test]
    fn out_of_bounds_is_silent() {
        let mut g = PixelGrid::new(2, 3, 9).unwrap();
        g.set(-1, 0, 5);
        g.set(0, 3, 5);
        g.set(2, 0, 5);
        assert!(g.pixels().iter().all(|&v| v == 0));
        assert_eq!(g.get(-1, -1), 0);
        assert_eq!(g.get(2, 0), 0);
        assert_eq!(g.get(0, isize::MAX), 0);
        assert_eq!(g.get(isize::MIN, 0), 0);
    }

    #[test]
    fn empty_grid_reads_zero() {
        let g = PixelGrid::new(0, 0, 15).unwrap();
        assert!(g.is_empty());
        assert!(!g.in_bounds(0, 0));
        assert_eq!(g.get(0, 0), 0);
    }

    #[test]
    fn clone_is_independent() {
        let mut a = PixelGrid::new(2, 2, 10).unwrap();
        a.set(1, 1, 4);
        let mut b = a.clone();
        b.set(1, 1, 9);
        assert_eq!(a.get(1, 1), 4);
        assert_eq!(b.get(1, 1), 9);
    }

    #[test]
    fn row_slices() {
        let mut g = PixelGrid::new(2, 3, 10).unwrap();
        g.set(1, 2, 7);
        assert_eq!(g.row(0).unwrap(), &[0, 0, 0]);
        assert_eq!(g.row(1).unwrap(), &[0, 0, 7]);
        assert!(g.row(2).is_none());
        assert!(g.row(usize::MAX).is_none());
    }

    #[test]
    fn info_display() {
        let g = PixelGrid::new(7, 24, 15).unwrap();
        assert_eq!(g.info().to_string(), "7 rows x 24 cols, max 15");
    }
}
