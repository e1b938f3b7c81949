// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Rotation about the image centre by inverse mapping.
//!
//! For each destination pixel `(x, y)` the source position is
//!
//! ```text
//! src_x = (x - cx)·cos θ - (y - cy)·sin θ + cx
//! src_y = (x - cx)·sin θ + (y - cy)·cos θ + cy
//! ```
//!
//! with `(cx, cy) = (cols / 2, rows / 2)` in integer division. The source is
//! sampled nearest-neighbour; positions that land outside the input become 0.
//! The output always has the input's dimensions, so corners are cropped.

use log::debug;

use crate::det_math::det_sincos;
use crate::raster::PixelGrid;

/// How a fractional source coordinate is turned into a pixel index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampling {
    /// Drop the fractional part (round toward zero). Matches the classic
    /// integer-cast behaviour, including its staircase edges and the
    /// occasional off-by-one at exact multiples of π/2.
    #[default]
    Truncate,
    /// Round half away from zero. Gives exact quarter turns.
    Nearest,
}

impl Sampling {
    #[inline]
    fn index(self, v: f64) -> Option<isize> {
        let v = match self {
            Self::Truncate => v.trunc(),
            Self::Nearest => v.round(),
        };
        v.is_finite().then_some(v as isize)
    }
}

/// Precomputed transform shared by every row.
#[derive(Clone, Copy)]
struct InverseMap {
    sin: f64,
    cos: f64,
    cx: isize,
    cy: isize,
    sampling: Sampling,
}

impl InverseMap {
    /// Source `(row, col)` for destination `(y, x)`, if representable.
    #[inline]
    fn source(&self, y: usize, x: usize) -> Option<(isize, isize)> {
        let dx = (x as isize - self.cx) as f64;
        let dy = (y as isize - self.cy) as f64;
        let sx = dx * self.cos - dy * self.sin + self.cx as f64;
        let sy = dx * self.sin + dy * self.cos + self.cy as f64;
        Some((self.sampling.index(sy)?, self.sampling.index(sx)?))
    }

    fn fill_row(&self, src: &PixelGrid, y: usize, out: &mut [u16]) {
        for (x, dst) in out.iter_mut().enumerate() {
            *dst = match self.source(y, x) {
                Some((row, col)) => src.get(row, col),
                None => 0,
            };
        }
    }
}

/// Rotate by `theta` radians with [`Sampling::Truncate`].
///
/// `rotate(g, 0.0) == g`. For odd dimensions the centre pixel stays put for
/// any angle. The angle is not normalised.
pub fn rotate(grid: &PixelGrid, theta: f64) -> PixelGrid {
    rotate_with(grid, theta, Sampling::default())
}

/// Rotate by `theta` radians with an explicit sampling rule.
///
/// A non-finite `theta` yields an all-background image.
pub fn rotate_with(grid: &PixelGrid, theta: f64, sampling: Sampling) -> PixelGrid {
    let (sin, cos) = det_sincos(theta);
    let map = InverseMap {
        sin,
        cos,
        cx: (grid.cols() / 2) as isize,
        cy: (grid.rows() / 2) as isize,
        sampling,
    };

    let mut out = grid.clone();
    let cols = grid.cols();
    if cols > 0 {
        fill(&map, grid, out.pixels_mut(), cols);
    }
    debug!("rotated {} by {theta} rad ({sampling:?})", grid.info());
    out
}

#[cfg(not(feature = "parallel"))]
use self::fill_serial as fill;
#[cfg(feature = "parallel")]
use self::fill_parallel as fill;

#[cfg_attr(feature = "parallel", allow(dead_code))]
fn fill_serial(map: &InverseMap, src: &PixelGrid, dst: &mut [u16], cols: usize) {
    for (y, row) in dst.chunks_mut(cols).enumerate() {
        map.fill_row(src, y, row);
    }
}

#[cfg(feature = "parallel")]
fn fill_parallel(map: &InverseMap, src: &PixelGrid, dst: &mut [u16], cols: usize) {
    use rayon::prelude::*;
    dst.par_chunks_mut(cols)
        .enumerate()
        .for_each(|(y, row)| map.fill_row(src, y, row));
}
