// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Degree-domain angle helpers.
//!
//! The ephemeris formulas in this crate keep their published degree form and
//! only drop into radians inside trig calls, so the helpers here work on
//! plain `f64` degrees.

/// Map any real angle into `[0, 360)` degrees.
///
/// Uses truncating `%` plus a negative-branch correction rather than
/// `rem_euclid` so that the wrap matches the element tables' convention
/// exactly (a zero result stays `+0.0`).
#[inline]
pub fn wrap_360(degrees: f64) -> f64 {
    let wrapped = degrees % 360.0;
    if wrapped < 0.0 {
        // A tiny negative remainder rounds to exactly 360.0 when wrapped
        // forward; fold it back so the result stays inside [0, 360).
        let forward = wrapped + 360.0;
        if forward == 360.0 {
            0.0
        } else {
            forward
        }
    } else {
        wrapped
    }
}

/// Map any real cycle fraction into `[0, 1)`.
///
/// Negative fractions wrap forward, so an instant *before* a reference epoch
/// still lands inside the current cycle.
#[inline]
pub fn wrap_unit(fraction: f64) -> f64 {
    let wrapped = fraction % 1.0;
    if wrapped < 0.0 {
        // Same upper-bound fold as wrap_360.
        let forward = wrapped + 1.0;
        if forward == 1.0 {
            0.0
        } else {
            forward
        }
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_360_identity_inside_range() {
        assert_eq!(wrap_360(0.0), 0.0);
        assert_eq!(wrap_360(168.6562), 168.6562);
        assert_eq!(wrap_360(359.999), 359.999);
    }

    #[test]
    fn wrap_360_folds_overflow() {
        assert!((wrap_360(360.0)).abs() < 1e-12);
        assert!((wrap_360(725.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn wrap_360_wraps_negative_forward() {
        assert!((wrap_360(-10.0) - 350.0).abs() < 1e-12);
        assert!((wrap_360(-730.0) - 350.0).abs() < 1e-12);
    }

    #[test]
    fn wrap_unit_keeps_fraction_in_cycle() {
        assert_eq!(wrap_unit(0.25), 0.25);
        assert!((wrap_unit(3.75) - 0.75).abs() < 1e-12);
        assert!((wrap_unit(-0.25) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn wrap_never_returns_the_upper_bound() {
        // Tiny negative inputs whose forward wrap rounds to the modulus.
        assert_eq!(wrap_360(-1e-15), 0.0);
        assert_eq!(wrap_360(-2.8e-14), 0.0);
        assert_eq!(wrap_unit(-1e-17), 0.0);
        assert!(wrap_360(-1e-13) < 360.0);
        assert!(wrap_unit(-1e-16) < 1.0);
    }

    #[test]
    fn wrap_results_stay_in_range() {
        for k in -1000..1000 {
            let d = wrap_360(k as f64 * 7.31);
            assert!((0.0..360.0).contains(&d), "wrap_360 escaped: {d}");
            let u = wrap_unit(k as f64 * 0.137);
            assert!((0.0..1.0).contains(&u), "wrap_unit escaped: {u}");
        }
    }
}
