// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Whole-image geometric and tonal transforms.
//!
//! Every transform takes a borrowed grid and returns a new one; the input is
//! never modified. With the `parallel` feature, rows are processed on the
//! rayon pool. Output is identical to the serial path.

pub mod negate;
pub mod rotate;

pub use negate::negate;
pub use rotate::{rotate, rotate_with, Sampling};
