// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use pgmkit::PixelGrid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

pub fn vector_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("test-vectors").join(name)
}

/// Scratch file path unique to this process and test.
pub fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pgmkit-{}-{name}", std::process::id()))
}

/// Deterministic pseudo-random grid.
pub fn random_grid(seed: u64, rows: usize, cols: usize, max: u16) -> PixelGrid {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut grid = PixelGrid::new(rows, cols, max).unwrap();
    for r in 0..rows as isize {
        for c in 0..cols as isize {
            grid.set(r, c, rng.gen_range(0..=max as i64));
        }
    }
    grid
}
