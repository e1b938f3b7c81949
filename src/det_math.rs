// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Platform-independent sine and cosine.
//!
//! Rotation truncates transformed coordinates to integers, so a one-ULP
//! difference in `cos(θ)` between two libms can move a sample across a pixel
//! boundary. These kernels use only add/mul/floor, giving bit-identical
//! rotated images on every target.
//!
//! Polynomials are the FDLIBM `k_sin`/`k_cos` kernels (< 1 ULP on
//! `[-π/4, π/4]`) with two-part Cody-Waite reduction by π/2.

use std::f64::consts::PI;

// π/2 split into high and low parts (~70 bits together).
const PIO2_HI: f64 = f64::from_bits(0x3FF921FB54442D18);
const PIO2_LO: f64 = f64::from_bits(0x3C91A62633145C07);

// sin(x) ≈ x + x³·(S1 + x²·(S2 + … + x²·S6))
const S1: f64 = f64::from_bits(0xBFC5555555555549);
const S2: f64 = f64::from_bits(0x3F8111111110F8A6);
const S3: f64 = f64::from_bits(0xBF2A01A019C161D5);
const S4: f64 = f64::from_bits(0x3EC71DE357B1FE7D);
const S5: f64 = f64::from_bits(0xBE5AE5E68A2B9CEB);
const S6: f64 = f64::from_bits(0x3DE5D93A5ACFD57C);

// cos(x) ≈ 1 - x²/2 + x⁴·(C1 + x²·(C2 + … + x²·C6))
const C1: f64 = f64::from_bits(0x3FA5555555555549);
const C2: f64 = f64::from_bits(0xBF56C16C16C15177);
const C3: f64 = f64::from_bits(0x3EFA01A019CB1590);
const C4: f64 = f64::from_bits(0xBE927E4F809C52AD);
const C5: f64 = f64::from_bits(0x3E21EE9EBDB4B1C4);
const C6: f64 = f64::from_bits(0xBDA8FAE9BE8838D4);

#[inline]
fn sin_poly(x: f64) -> f64 {
    let z = x * x;
    let r = S2 + z * (S3 + z * (S4 + z * (S5 + z * S6)));
    x + z * x * (S1 + z * r)
}

#[inline]
fn cos_poly(x: f64) -> f64 {
    let z = x * x;
    let r = z * (C1 + z * (C2 + z * (C3 + z * (C4 + z * (C5 + z * C6)))));
    1.0 - (0.5 * z - z * r)
}

/// Reduce `x` to `r ∈ [-π/4, π/4]` and the quadrant `n mod 4`.
#[inline]
fn reduce(x: f64) -> (f64, u8) {
    let n = (x * (2.0 / PI) + 0.5).floor();
    let r = (x - n * PIO2_HI) - n * PIO2_LO;
    (r, (n as i64 & 3) as u8)
}

/// `(sin x, cos x)` with a shared range reduction. NaN for non-finite input.
pub fn det_sincos(x: f64) -> (f64, f64) {
    if !x.is_finite() {
        return (f64::NAN, f64::NAN);
    }
    let (r, q) = reduce(x);
    let s = sin_poly(r);
    let c = cos_poly(r);
    match q {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    }
}

pub fn det_sin(x: f64) -> f64 {
    det_sincos(x).0
}

pub fn det_cos(x: f64) -> f64 {
    det_sincos(x).1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4, FRAC_PI_6};

    #[test]
    fn zero_is_exact() {
        let (s, c) = det_sincos(0.0);
        assert_eq!(s, 0.0);
        assert_eq!(c, 1.0);
    }

    #[test]
    fn known_angles() {
        let tol = 1e-15;
        assert!((det_sin(FRAC_PI_6) - 0.5).abs() < tol);
        assert!((det_cos(FRAC_PI_4) - FRAC_1_SQRT_2).abs() < tol);
        assert!((det_sin(FRAC_PI_2) - 1.0).abs() < tol);
        assert!(det_cos(FRAC_PI_2).abs() < tol);
        assert!((det_cos(PI) + 1.0).abs() < tol);
        assert!((det_sin(-FRAC_PI_2) + 1.0).abs() < tol);
    }

    #[test]
    fn close_to_std() {
        for i in 0..400 {
            let x = (i as f64 - 200.0) * 0.041;
            let (s, c) = det_sincos(x);
            assert!((s - x.sin()).abs() < 5e-13, "sin({x}) = {s}, std {}", x.sin());
            assert!((c - x.cos()).abs() < 5e-13, "cos({x}) = {c}, std {}", x.cos());
        }
    }

    #[test]
    fn non_finite_input() {
        assert!(det_sin(f64::NAN).is_nan());
        assert!(det_cos(f64::INFINITY).is_nan());
        assert!(det_sincos(f64::NEG_INFINITY).0.is_nan());
    }
}
