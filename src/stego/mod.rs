// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Least-significant-bit steganography over a [`PixelGrid`].
//!
//! A message is written into bit 0 of consecutive pixels and closed by a zero
//! byte. There is no framing, checksum or encryption: [`decode`] returns
//! whatever the low bit-plane spells up to the first zero byte.
//!
//! ```rust
//! use pgmkit::raster::PixelGrid;
//! use pgmkit::stego::{embed, decode};
//!
//! let mut grid = PixelGrid::new(8, 8, 255).unwrap();
//! embed(&mut grid, b"HELLO").unwrap();
//! assert_eq!(decode(&grid), b"HELLO");
//! ```
//!
//! [`PixelGrid`]: crate::raster::PixelGrid

pub mod capacity;
pub mod error;
pub mod lsb;

pub use capacity::{capacity_bits, max_payload_len};
pub use error::StegoError;
pub use lsb::{decode, decode_text, embed, embed_text, DECODE_LIMIT, TERMINATOR};
