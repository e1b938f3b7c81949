// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Bit-plane-0 message embedding and extraction.
//!
//! The message is followed by a single [`TERMINATOR`] byte. Each byte is
//! spread over 8 consecutive pixels in row-major order, least significant
//! bit first; only bit 0 of a pixel is ever changed.
//!
//! ```text
//! pixel:   p0 p1 p2 p3 p4 p5 p6 p7 | p8 ...
//! bit:     b0 b1 b2 b3 b4 b5 b6 b7 | next byte b0 ...
//! ```

use log::debug;

use super::error::StegoError;
use crate::raster::PixelGrid;

/// Marks the end of the hidden message.
pub const TERMINATOR: u8 = 0;

/// Maximum number of bytes [`decode`] returns.
pub const DECODE_LIMIT: usize = 1023;

/// Replace bit 0 of `v`, staying within `[0, max]`.
///
/// Only when `max` is even and `v == max` would a one bit overshoot; the
/// value then drops to `max - 1`, which still carries the bit.
#[inline]
fn with_lsb(v: u16, bit: u16, max: u16) -> u16 {
    let w = (v & !1) | bit;
    if w > max {
        w - 2
    } else {
        w
    }
}

/// Hide `payload` (plus terminator) in the low bit of the grid's pixels.
///
/// # Errors
/// - [`StegoError::NoBitDepth`] if the grid's ceiling is 0.
/// - [`StegoError::MessageTooLarge`] if `(payload.len() + 1) * 8` exceeds the
///   pixel count.
///
/// The grid is untouched on error.
pub fn embed(grid: &mut PixelGrid, payload: &[u8]) -> Result<(), StegoError> {
    let max = grid.max_intensity();
    if max == 0 {
        return Err(StegoError::NoBitDepth);
    }

    let available_bits = grid.len();
    let required_bits = payload
        .len()
        .checked_add(1)
        .and_then(|n| n.checked_mul(8))
        .unwrap_or(usize::MAX);
    if required_bits > available_bits {
        return Err(StegoError::MessageTooLarge { required_bits, available_bits });
    }

    let bytes = payload.iter().copied().chain(std::iter::once(TERMINATOR));
    for (chunk, byte) in grid.pixels_mut().chunks_exact_mut(8).zip(bytes) {
        for (bit, px) in chunk.iter_mut().enumerate() {
            *px = with_lsb(*px, ((byte >> bit) & 1) as u16, max);
        }
    }

    debug!("embedded {} bytes into {} bits", payload.len() + 1, available_bits);
    Ok(())
}

/// Recover a message hidden by [`embed`].
///
/// Stops at the first terminator (not included), when fewer than 8 pixels
/// remain, or after [`DECODE_LIMIT`] bytes. Grids that never held a message
/// decode to whatever their low bits spell.
pub fn decode(grid: &PixelGrid) -> Vec<u8> {
    let message: Vec<u8> = grid
        .pixels()
        .chunks_exact(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u8, |byte, (bit, &px)| byte | (((px & 1) as u8) << bit))
        })
        .take_while(|&byte| byte != TERMINATOR)
        .take(DECODE_LIMIT)
        .collect();
    debug!("decoded {} bytes", message.len());
    message
}

/// [`embed`] for text.
pub fn embed_text(grid: &mut PixelGrid, text: &str) -> Result<(), StegoError> {
    embed(grid, text.as_bytes())
}

/// [`decode`] and interpret the bytes as UTF-8.
pub fn decode_text(grid: &PixelGrid) -> Result<String, StegoError> {
    String::from_utf8(decode(grid)).map_err(|_| StegoError::InvalidUtf8)
}
