// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Photographic negative: `v → max_intensity - v`.

use log::debug;

use crate::raster::PixelGrid;

/// Invert every intensity against the grid's ceiling.
///
/// Applying it twice returns the original grid.
pub fn negate(grid: &PixelGrid) -> PixelGrid {
    let max = grid.max_intensity();
    let mut out = grid.clone();
    invert(out.pixels_mut(), max);
    debug!("negated {}", grid.info());
    out
}

#[cfg(not(feature = "parallel"))]
use self::invert_serial as invert;
#[cfg(feature = "parallel")]
use self::invert_parallel as invert;

// Stored values never exceed `max`, so the subtraction cannot underflow.
#[cfg_attr(feature = "parallel", allow(dead_code))]
fn invert_serial(pixels: &mut [u16], max: u16) {
    for v in pixels.iter_mut() {
        *v = max - *v;
    }
}

#[cfg(feature = "parallel")]
fn invert_parallel(pixels: &mut [u16], max: u16) {
    use rayon::prelude::*;
    pixels.par_iter_mut().for_each(|v| *v = max - *v);
}
