// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! How much text a grid can hide.
//!
//! One bit per pixel, and every message is followed by a one-byte
//! terminator.

use crate::raster::PixelGrid;

/// Number of payload bits the grid can hold, terminator included.
pub fn capacity_bits(grid: &PixelGrid) -> usize {
    if grid.max_intensity() == 0 {
        return 0;
    }
    grid.len()
}

/// Longest message (in bytes, terminator excluded) that [`super::embed`]
/// will accept.
pub fn max_payload_len(grid: &PixelGrid) -> usize {
    (capacity_bits(grid) / 8).saturating_sub(1)
}
