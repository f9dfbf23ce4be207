// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil timestamps and their Julian Date image.
//!
//! [`Moment`] is the crate's input type: an absolute instant (milliseconds
//! since the Unix epoch) paired with the UTC offset of the civil clock that
//! produced it.  [`JulianDate`] is the continuous day count every ephemeris
//! routine in this crate actually works on.
//!
//! The conversion is a single affine map:
//!
//! ```text
//! JD = millis / 86 400 000  −  offset_min / 1440  +  2 440 587.5
//! ```
//!
//! The offset term shifts the day count onto the *local* civil axis, which is
//! the axis the phase/zodiac model is calibrated against.  It is stored as
//! the number of minutes **UTC is ahead of local time** (positive west of
//! Greenwich); the chrono constructors flip the sign of chrono's
//! east-positive convention at the boundary.
//!
//! # Quick example
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use synodic::Moment;
//!
//! let m = Moment::from_utc(Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap());
//! let jd = m.julian_date();
//! assert!((jd.value() - 2_451_545.0).abs() < 1e-9);
//! ```

use chrono::{DateTime, FixedOffset, Utc};
use qtty::Days;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Milliseconds per day.
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Minutes per day.
const MINUTES_PER_DAY: f64 = 1_440.0;

// ═══════════════════════════════════════════════════════════════════════════
// Moment
// ═══════════════════════════════════════════════════════════════════════════

/// An absolute instant together with the UTC offset of its civil clock.
///
/// `Moment` is `Copy` and value-equal; nothing in the crate holds on to one
/// beyond the call that receives it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Moment {
    unix_millis: i64,
    utc_offset_min: i32,
}

impl Moment {
    /// Create from raw parts.
    ///
    /// `utc_offset_min` is the number of minutes UTC is ahead of the local
    /// civil clock (positive west of Greenwich, e.g. `480` for UTC−8).
    #[inline]
    pub const fn new(unix_millis: i64, utc_offset_min: i32) -> Self {
        Self {
            unix_millis,
            utc_offset_min,
        }
    }

    /// Create from a UTC timestamp (offset 0).
    #[inline]
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self::new(datetime.timestamp_millis(), 0)
    }

    /// Create from a fixed-offset civil timestamp.
    ///
    /// chrono reports offsets as seconds *east* of Greenwich; this crate
    /// stores minutes of UTC-minus-local, so the sign flips here.
    #[inline]
    pub fn from_local(datetime: DateTime<FixedOffset>) -> Self {
        let east_secs = datetime.offset().local_minus_utc();
        Self::new(datetime.timestamp_millis(), -(east_secs / 60))
    }

    /// Milliseconds since 1970-01-01T00:00:00Z.
    #[inline]
    pub const fn unix_millis(&self) -> i64 {
        self.unix_millis
    }

    /// Minutes by which UTC leads the local civil clock.
    #[inline]
    pub const fn utc_offset_minutes(&self) -> i32 {
        self.utc_offset_min
    }

    /// The continuous Julian Date of this moment on the local civil axis.
    #[inline]
    pub fn julian_date(&self) -> JulianDate {
        let epoch_days = self.unix_millis as f64 / MILLIS_PER_DAY;
        let offset_days = self.utc_offset_min as f64 / MINUTES_PER_DAY;
        JulianDate::new(epoch_days - offset_days + JulianDate::UNIX_EPOCH.value())
    }
}

impl From<DateTime<Utc>> for Moment {
    #[inline]
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_utc(datetime)
    }
}

impl From<DateTime<FixedOffset>> for Moment {
    #[inline]
    fn from(datetime: DateTime<FixedOffset>) -> Self {
        Self::from_local(datetime)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// JulianDate
// ═══════════════════════════════════════════════════════════════════════════

/// A continuous Julian Date, stored as a [`Days`] quantity.
///
/// Purely an intermediate value in this crate: every operation derives one
/// from a [`Moment`] (or accepts one directly in the `*_at` entry points),
/// uses it, and drops it.  Monotonic in the moment it came from.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDate(Days);

impl JulianDate {
    /// JD of the Unix epoch, 1970-01-01T00:00:00Z.
    pub const UNIX_EPOCH: Self = Self::new(2_440_587.5);

    /// J2000.0 epoch, 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// Create from a raw Julian Day number.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(Days::new(value))
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self(days)
    }

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.0
    }

    /// The raw Julian Day number.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0.value()
    }
}

impl std::fmt::Display for JulianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {}", self.0)
    }
}

impl Add<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl Sub<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl Sub for JulianDate {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

impl From<Days> for JulianDate {
    #[inline]
    fn from(days: Days) -> Self {
        Self(days)
    }
}

impl From<JulianDate> for Days {
    #[inline]
    fn from(jd: JulianDate) -> Self {
        jd.0
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for JulianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

/// Serde adapter for [`Days`]-typed fields (serialized as a plain `f64`).
#[cfg(feature = "serde")]
pub(crate) mod days_serde {
    use qtty::Days;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(days: &Days, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(days.value())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Days, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Days::new(v))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn unix_epoch_maps_to_reference_jd() {
        let jd = Moment::new(0, 0).julian_date();
        assert_eq!(jd, JulianDate::UNIX_EPOCH);
    }

    #[test]
    fn j2000_noon_utc() {
        // 2000-01-01T12:00:00Z = 946_728_000 s
        let datetime = DateTime::from_timestamp(946_728_000, 0).unwrap();
        let jd = Moment::from_utc(datetime).julian_date();
        assert!((jd.value() - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn offset_shifts_onto_local_axis() {
        // UTC−8 civil clock: UTC leads local by 480 min, JD moves back ⅓ day.
        let jd = Moment::new(0, 480).julian_date();
        assert!((jd.value() - (2_440_587.5 - 480.0 / 1_440.0)).abs() < 1e-12);
    }

    #[test]
    fn from_local_flips_chrono_sign() {
        // +02:00 east of Greenwich → UTC-minus-local = −120 minutes.
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let datetime = tz.with_ymd_and_hms(2024, 6, 1, 2, 0, 0).unwrap();
        let m = Moment::from_local(datetime);
        assert_eq!(m.utc_offset_minutes(), -120);
        assert_eq!(m.unix_millis(), 1_717_200_000_000);
    }

    #[test]
    fn julian_date_is_monotonic_in_moment() {
        let a = Moment::new(1_000_000, 0).julian_date();
        let b = Moment::new(2_000_000, 0).julian_date();
        assert!(a < b);
    }

    #[test]
    fn jd_arithmetic() {
        let jd = JulianDate::new(2_451_545.0);
        assert_eq!((jd + Days::new(1.5)).value(), 2_451_546.5);
        assert_eq!((jd - Days::new(0.5)).value(), 2_451_544.5);
        assert_eq!(jd - JulianDate::new(2_451_544.0), Days::new(1.0));
    }

    #[test]
    fn jd_display_carries_label() {
        let jd = JulianDate::J2000;
        assert!(format!("{jd}").starts_with("JD "));
    }

    #[test]
    fn jd_into_days_roundtrip() {
        let jd = JulianDate::new(2_460_462.5);
        let days: Days = jd.into();
        assert_eq!(JulianDate::from(days), jd);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_jd_is_a_bare_number() {
        let jd = JulianDate::new(2_451_545.0);
        let json = serde_json::to_string(&jd).unwrap();
        assert_eq!(json, "2451545.0");
        let back: JulianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, jd);
    }
}
