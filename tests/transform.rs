// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Negation and rotation properties on pseudo-random grids.

mod common;

use common::random_grid;
use pgmkit::det_math::det_sincos;
use pgmkit::{negate, pattern, pgm, rotate, rotate_with, PixelGrid, Sampling};
use std::f64::consts::FRAC_PI_2;

#[test]
fn negate_is_an_involution() {
    for seed in 0..8 {
        let g = random_grid(seed, 13, 21, 255);
        assert_eq!(negate(&negate(&g)), g);
    }
}

#[test]
fn negate_sums_to_ceiling() {
    let g = random_grid(99, 9, 9, 4095);
    let n = negate(&g);
    for (a, b) in g.pixels().iter().zip(n.pixels()) {
        assert_eq!(a + b, 4095);
    }
}

#[test]
fn rotate_zero_reproduces_input() {
    for seed in 0..4 {
        let g = random_grid(seed, 11, 6, 15);
        assert_eq!(rotate(&g, 0.0), g);
    }
}

#[test]
fn odd_centre_survives_any_angle() {
    let g = random_grid(5, 9, 15, 255);
    let centre = g.get(4, 7);
    for step in -40..=40 {
        let theta = step as f64 * 0.173;
        assert_eq!(rotate(&g, theta).get(4, 7), centre, "θ = {theta}");
    }
}

#[test]
fn four_quarter_turns_return_home() {
    let g = random_grid(17, 7, 7, 255);
    let mut r = g.clone();
    for _ in 0..4 {
        r = rotate_with(&r, FRAC_PI_2, Sampling::Nearest);
    }
    assert_eq!(r, g);
}

#[test]
fn rotated_pattern_keeps_format() {
    // 7×24 rotated a quarter turn: most of the canvas is background.
    let feep = pattern::feep().unwrap();
    let rotated = rotate(&feep, 1.5708);
    assert_eq!(rotated.info(), feep.info());
    let background = rotated.pixels().iter().filter(|&&v| v == 0).count();
    assert!(background > feep.pixels().iter().filter(|&&v| v == 0).count());
    let reparsed = pgm::parse(&pgm::serialize(&rotated)).unwrap();
    assert_eq!(reparsed, rotated);
}

/// Per-pixel evaluation of the inverse rotation, independent of the row
/// scheduling used by the library (serial or rayon).
fn rotate_reference(g: &PixelGrid, theta: f64, sampling: Sampling) -> PixelGrid {
    let (sin, cos) = det_sincos(theta);
    let cx = (g.cols() / 2) as isize;
    let cy = (g.rows() / 2) as isize;
    let mut out = PixelGrid::new(g.rows(), g.cols(), g.max_intensity()).unwrap();
    for y in 0..g.rows() as isize {
        for x in 0..g.cols() as isize {
            let dx = (x - cx) as f64;
            let dy = (y - cy) as f64;
            let sx = dx * cos - dy * sin + cx as f64;
            let sy = dx * sin + dy * cos + cy as f64;
            let (sx, sy) = match sampling {
                Sampling::Truncate => (sx.trunc(), sy.trunc()),
                Sampling::Nearest => (sx.round(), sy.round()),
            };
            out.set(y, x, g.get(sy as isize, sx as isize) as i64);
        }
    }
    out
}

#[test]
fn rotate_matches_reference_formula() {
    for seed in 0..3 {
        let g = random_grid(seed, 19, 26, 255);
        for step in 0..10 {
            let theta = step as f64 * 0.7 - 3.1;
            for sampling in [Sampling::Truncate, Sampling::Nearest] {
                assert_eq!(
                    rotate_with(&g, theta, sampling),
                    rotate_reference(&g, theta, sampling),
                    "seed {seed}, θ = {theta}, {sampling:?}"
                );
            }
        }
    }
}

#[test]
fn negate_matches_reference_formula() {
    let g = random_grid(42, 31, 17, 1023);
    let n = negate(&g);
    for y in 0..31isize {
        for x in 0..17isize {
            assert_eq!(n.get(y, x), 1023 - g.get(y, x));
        }
    }
}
