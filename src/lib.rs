// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! # pgmkit
//!
//! Grayscale raster toolkit built around a bounded pixel grid:
//!
//! - **raster**: [`PixelGrid`] storage with clamped, bounds-safe access, the
//!   plain PGM (`P2`) text codec and a demonstration test pattern.
//! - **transform**: negation and centre rotation (inverse mapping,
//!   nearest-neighbour sampling, zero background).
//! - **stego**: hide a zero-terminated message in bit 0 of each pixel.
//!
//! Out-of-bounds reads return 0 and out-of-bounds writes are ignored; neither
//! is an error anywhere in the crate.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use pgmkit::{pgm, rotate, negate, embed_text, decode_text};
//!
//! let img = pgm::load("input.pgm").unwrap();
//! pgm::save(&rotate(&img, std::f64::consts::FRAC_PI_2), "rotated.pgm").unwrap();
//! pgm::save(&negate(&img), "negated.pgm").unwrap();
//!
//! let mut secret = img.clone();
//! embed_text(&mut secret, "meet at noon").unwrap();
//! assert_eq!(decode_text(&secret).unwrap(), "meet at noon");
//! ```

pub mod det_math;
pub mod raster;
pub mod stego;
pub mod transform;

pub use raster::{pattern, pgm, ImageInfo, PixelGrid, RasterError};
pub use stego::{decode, decode_text, embed, embed_text, StegoError};
pub use transform::{negate, rotate, rotate_with, Sampling};
