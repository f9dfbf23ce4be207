// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Lunar phase from the mean synodic cycle.
//!
//! The model is deliberately simple: the moon's position in its cycle is the
//! fractional part of the days elapsed since a reference new moon divided by
//! the mean synodic month.  From that single `progress ∈ [0, 1)` everything
//! else follows:
//!
//! * the **phase bucket** is `floor(progress × 8)` over eight equal-width
//!   bins (New, Waxing Crescent, …, Waning Crescent);
//! * the **illumination** is the continuous sinusoid
//!   `(sin(progress·2π − π/2) + 1) · 50`, in percent.
//!
//! The bucket and the sinusoid are independent read-outs of the same
//! progress, so they may disagree slightly near bucket edges.  That is the
//! model, not a defect.
//!
//! # Quick example
//! ```rust
//! use synodic::{moon_phase, Moment, Phase};
//!
//! // The reference new moon itself.
//! let phase = synodic::MoonPhase::from_julian(synodic::JulianDate::new(2_451_549.5));
//! assert_eq!(phase.phase, Phase::New);
//! assert!(phase.illumination < 1e-9);
//! # let _ = moon_phase(Moment::new(0, 0));
//! ```

use crate::angle::wrap_unit;
use crate::julian::{JulianDate, Moment};
use qtty::Days;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// JD of the reference new moon the cycle is counted from (2000-01-06).
pub const NEW_MOON_EPOCH: JulianDate = JulianDate::new(2_451_549.5);

/// Mean synodic month: the period between successive new moons.
pub const SYNODIC_MONTH: Days = Days::new(29.530_588_67);

/// Rounded month length used for the displayed age, per the model's tables.
const AGE_MONTH: f64 = 29.53;

/// Number of equal-width phase buckets.
const BUCKETS: f64 = 8.0;

// ═══════════════════════════════════════════════════════════════════════════
// Phase
// ═══════════════════════════════════════════════════════════════════════════

/// One of the eight named phase buckets.
///
/// Each bucket covers 12.5 % of the synodic cycle; `New` starts at the
/// reference new moon.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// All buckets in cycle order.
const PHASES: [Phase; 8] = [
    Phase::New,
    Phase::WaxingCrescent,
    Phase::FirstQuarter,
    Phase::WaxingGibbous,
    Phase::Full,
    Phase::WaningGibbous,
    Phase::LastQuarter,
    Phase::WaningCrescent,
];

impl Phase {
    /// The bucket containing a cycle progress value.
    ///
    /// Accepts any finite fraction; it is wrapped into `[0, 1)` first.
    pub fn from_progress(progress: f64) -> Self {
        let index = (wrap_unit(progress) * BUCKETS) as usize;
        PHASES[index.min(7)]
    }

    /// Bucket index in `[0, 7]`, `New` = 0.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// English phase name.
    pub const fn name(self) -> &'static str {
        match self {
            Phase::New => "New Moon",
            Phase::WaxingCrescent => "Waxing Crescent",
            Phase::FirstQuarter => "First Quarter",
            Phase::WaxingGibbous => "Waxing Gibbous",
            Phase::Full => "Full Moon",
            Phase::WaningGibbous => "Waning Gibbous",
            Phase::LastQuarter => "Last Quarter",
            Phase::WaningCrescent => "Waning Crescent",
        }
    }

    /// Display glyph for the bucket.
    pub const fn glyph(self) -> char {
        match self {
            Phase::New => '🌑',
            Phase::WaxingCrescent => '🌒',
            Phase::FirstQuarter => '🌓',
            Phase::WaxingGibbous => '🌔',
            Phase::Full => '🌕',
            Phase::WaningGibbous => '🌖',
            Phase::LastQuarter => '🌗',
            Phase::WaningCrescent => '🌘',
        }
    }

    /// Nominal lit percentage of the bucket (0, 25, 50, 75, 100, 75, 50, 25).
    ///
    /// A coarse display figure only; the continuous value is
    /// [`MoonPhase::illumination`].
    pub const fn nominal_lighting(self) -> u8 {
        match self {
            Phase::New => 0,
            Phase::WaxingCrescent | Phase::WaningCrescent => 25,
            Phase::FirstQuarter | Phase::LastQuarter => 50,
            Phase::WaxingGibbous | Phase::WaningGibbous => 75,
            Phase::Full => 100,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// MoonPhase
// ═══════════════════════════════════════════════════════════════════════════

/// The moon's state at one instant: bucket, illumination, age, progress.
///
/// A plain value record, freshly built on every call; nothing is cached
/// between invocations.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoonPhase {
    /// Named phase bucket.
    pub phase: Phase,
    /// Continuous lit fraction in percent, `[0, 100]`.
    pub illumination: f64,
    /// Days since the last new moon, `[0, 29.53)`.
    #[cfg_attr(feature = "serde", serde(with = "crate::julian::days_serde"))]
    pub age: Days,
    /// Position in the synodic cycle in percent, `[0, 100)`.
    pub cycle_progress: f64,
}

impl MoonPhase {
    /// Compute the lunar phase at a civil moment.
    pub fn at(moment: Moment) -> Self {
        Self::from_julian(moment.julian_date())
    }

    /// Compute the lunar phase at an exact Julian Date.
    pub fn from_julian(jd: JulianDate) -> Self {
        let since_new = (jd - NEW_MOON_EPOCH).value();
        let progress = wrap_unit(since_new / SYNODIC_MONTH.value());

        Self {
            phase: Phase::from_progress(progress),
            illumination: (f64::sin(progress * std::f64::consts::TAU - std::f64::consts::FRAC_PI_2)
                + 1.0)
                * 50.0,
            age: Days::new(progress * AGE_MONTH),
            cycle_progress: progress * 100.0,
        }
    }

    /// English name of the bucket.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.phase.name()
    }

    /// Display glyph of the bucket.
    #[inline]
    pub const fn glyph(&self) -> char {
        self.phase.glyph()
    }
}

impl std::fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({:.1}% lit, age {:.1} d)",
            self.glyph(),
            self.name(),
            self.illumination,
            self.age.value()
        )
    }
}

/// Compute the lunar phase at a civil moment.
///
/// Free-function alias for [`MoonPhase::at`].
#[inline]
pub fn moon_phase(moment: Moment) -> MoonPhase {
    MoonPhase::at(moment)
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_new_moon_is_new_and_dark() {
        let phase = MoonPhase::from_julian(NEW_MOON_EPOCH);
        assert_eq!(phase.phase, Phase::New);
        assert!(phase.cycle_progress.abs() < 1e-12);
        assert!(phase.age.value().abs() < 1e-12);
        assert!(
            phase.illumination.abs() < 1e-9,
            "new moon illumination = {}",
            phase.illumination
        );
    }

    #[test]
    fn half_cycle_is_full_and_bright() {
        let half = MoonPhase::from_julian(NEW_MOON_EPOCH + SYNODIC_MONTH * 0.5);
        assert!(
            (half.illumination - 100.0).abs() < 1e-6,
            "full moon illumination = {}",
            half.illumination
        );
        // The exact half-cycle JD sits on the bucket edge, where the day
        // count's representation error can flip the floor; the bucket is
        // asserted mid-bucket instead.
        let mid_full = MoonPhase::from_julian(NEW_MOON_EPOCH + SYNODIC_MONTH * 0.5625);
        assert_eq!(mid_full.phase, Phase::Full);
    }

    #[test]
    fn bucket_boundaries_at_eighths() {
        for (eighth, expected) in [
            (0, Phase::New),
            (1, Phase::WaxingCrescent),
            (2, Phase::FirstQuarter),
            (3, Phase::WaxingGibbous),
            (4, Phase::Full),
            (5, Phase::WaningGibbous),
            (6, Phase::LastQuarter),
            (7, Phase::WaningCrescent),
        ] {
            assert_eq!(Phase::from_progress(eighth as f64 / 8.0), expected);
        }
    }

    #[test]
    fn progress_just_below_one_is_waning_crescent() {
        assert_eq!(Phase::from_progress(0.999_999), Phase::WaningCrescent);
    }

    #[test]
    fn instants_before_reference_epoch_wrap_forward() {
        // Nine days before the reference new moon.
        let phase = MoonPhase::from_julian(JulianDate::new(2_451_540.5));
        assert!(
            (phase.cycle_progress / 100.0 - 0.695_231_270_172_983).abs() < 1e-12,
            "progress = {}",
            phase.cycle_progress
        );
        assert_eq!(phase.phase, Phase::WaningGibbous);
        assert!(phase.age.value() >= 0.0);
    }

    #[test]
    fn golden_2024_06_01() {
        // JD 2 460 462.5 = 2024-06-01T00:00:00Z.
        let phase = MoonPhase::at(Moment::new(1_717_200_000_000, 0));
        assert_eq!(phase.phase, Phase::LastQuarter);
        assert!((phase.cycle_progress - 82.263_210_535_585_77).abs() < 1e-6);
        assert!((phase.illumination - 27.965_779_039_509_42).abs() < 1e-6);
        assert!((phase.age.value() - 24.292_326_071_158_48).abs() < 1e-6);
    }

    #[test]
    fn ranges_hold_across_a_wide_span() {
        // ±40 years around J2000 in ~11-day steps.
        for k in -1300..1300 {
            let jd = JulianDate::J2000 + Days::new(k as f64 * 11.25);
            let phase = MoonPhase::from_julian(jd);
            assert!((0.0..100.0).contains(&phase.cycle_progress));
            assert!((0.0..AGE_MONTH).contains(&phase.age.value()));
            assert!((0.0..=100.0).contains(&phase.illumination));
        }
    }

    #[test]
    fn periodic_over_whole_synodic_months() {
        let base = JulianDate::new(2_455_000.25);
        let reference = MoonPhase::from_julian(base);
        for k in [1.0, 7.0, 120.0, -13.0] {
            let shifted = MoonPhase::from_julian(base + SYNODIC_MONTH * k);
            assert!(
                (shifted.cycle_progress - reference.cycle_progress).abs() < 1e-6,
                "k = {k}: {} vs {}",
                shifted.cycle_progress,
                reference.cycle_progress
            );
            assert_eq!(shifted.phase, reference.phase);
        }
    }

    #[test]
    fn deterministic_for_identical_moments() {
        let moment = Moment::new(1_717_200_000_000, 480);
        assert_eq!(moon_phase(moment), moon_phase(moment));
    }

    #[test]
    fn nominal_lighting_table() {
        let expected = [0u8, 25, 50, 75, 100, 75, 50, 25];
        for (phase, lighting) in PHASES.iter().zip(expected) {
            assert_eq!(phase.nominal_lighting(), lighting);
        }
    }

    #[test]
    fn display_mentions_bucket_name() {
        let phase = MoonPhase::from_julian(NEW_MOON_EPOCH);
        let s = phase.to_string();
        assert!(s.contains("New Moon"), "display = {s}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip_preserves_fields() {
        // serde_json's default float parsing may land one ulp off the
        // serialized value, so the float fields compare with a tolerance.
        let phase = MoonPhase::at(Moment::new(1_717_200_000_000, 0));
        let json = serde_json::to_string(&phase).unwrap();
        let back: MoonPhase = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, phase.phase);
        assert!((back.illumination - phase.illumination).abs() < 1e-12);
        assert!((back.age - phase.age).abs() < Days::new(1e-12));
        assert!((back.cycle_progress - phase.cycle_progress).abs() < 1e-12);
    }
}
