// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Grayscale raster storage and the plain PGM text format.
//!
//! [`PixelGrid`] is the single image type used throughout the crate.
//! The [`pgm`] module converts grids to and from `P2` text, and
//! [`pattern`] paints a fixed demonstration image.

pub mod error;
pub mod grid;
pub mod pattern;
pub mod pgm;

pub use error::RasterError;
pub use grid::{ImageInfo, PixelGrid};
pub use pgm::MAGIC;
