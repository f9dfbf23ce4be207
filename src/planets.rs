// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Approximate planetary ecliptic longitudes and zodiac signs.
//!
//! Five bodies (Mercury, Venus, Mars, Jupiter, Saturn) are tracked through a
//! fixed table of mean orbital elements referred to the epoch
//! JD 2 451 543.5.  Per body the pipeline is:
//!
//! 1. mean anomaly `M = wrap360(M₀ + n·D)`;
//! 2. a **single-step** eccentric-anomaly approximation
//!    `E = M + (180/π)·e·sin M·(1 + e·cos M)` — Kepler's equation is
//!    deliberately *not* iterated to convergence;
//! 3. orbital-plane coordinates, `v = atan2(yv, xv)`, true longitude
//!    `v + w`;
//! 4. geocentric longitude taken equal to heliocentric longitude (no
//!    Earth-relative correction);
//! 5. wrap into `[0°, 360°)` and map to the 30° zodiac sector.
//!
//! Steps 2 and 4 are explicit display-grade simplifications; the element
//! table drifts linearly, so results degrade gracefully for instants more
//! than a few millennia from J2000.  Retrograde motion is never detected:
//! the model computes no angular velocity, so [`PlanetPosition::retrograde`]
//! is always `false`.
//!
//! # Quick example
//! ```rust
//! use synodic::{planet_positions_at, JulianDate, Planet};
//!
//! let positions = planet_positions_at(JulianDate::new(2_451_543.5));
//! assert_eq!(positions[0].planet, Planet::Mercury);
//! assert!((positions[0].longitude - 201.412).abs() < 0.01);
//! ```

use crate::angle::wrap_360;
use crate::julian::{JulianDate, Moment};
use crate::zodiac::Zodiac;
use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Epoch of the mean-element table.
pub const ELEMENT_EPOCH: JulianDate = JulianDate::new(2_451_543.5);

/// Degrees per radian, used by the first-order Kepler correction term.
const DEG_PER_RAD: f64 = 180.0 / PI;

// ═══════════════════════════════════════════════════════════════════════════
// Orbital elements
// ═══════════════════════════════════════════════════════════════════════════

/// Mean orbital elements of one body at [`ELEMENT_EPOCH`].
///
/// Static configuration: the table below is the only instance source.
/// Angles in degrees, the semi-major axis in AU.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrbitalElements {
    /// Longitude of the ascending node (N).
    pub ascending_node: f64,
    /// Inclination to the ecliptic (i).
    pub inclination: f64,
    /// Argument of perihelion (w).
    pub arg_perihelion: f64,
    /// Semi-major axis in AU (a).
    pub semi_major_axis: f64,
    /// Eccentricity (e).
    pub eccentricity: f64,
    /// Mean anomaly at the epoch (M₀).
    pub mean_anomaly_epoch: f64,
    /// Mean daily motion in degrees per day (n).
    pub daily_motion: f64,
}

// ═══════════════════════════════════════════════════════════════════════════
// Planet
// ═══════════════════════════════════════════════════════════════════════════

/// A tracked body, in the fixed reporting order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl Planet {
    /// All tracked bodies in reporting order.
    pub const ALL: [Planet; 5] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
    ];

    /// English body name.
    pub const fn name(self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
        }
    }

    /// Display color tag associated with the body.
    pub const fn color(self) -> &'static str {
        match self {
            Planet::Mercury => "slate",
            Planet::Venus => "yellow",
            Planet::Mars => "red",
            Planet::Jupiter => "orange",
            Planet::Saturn => "amber",
        }
    }

    /// The body's mean orbital elements at [`ELEMENT_EPOCH`].
    pub const fn elements(self) -> &'static OrbitalElements {
        match self {
            Planet::Mercury => &OrbitalElements {
                ascending_node: 48.3313,
                inclination: 7.0047,
                arg_perihelion: 29.1241,
                semi_major_axis: 0.387098,
                eccentricity: 0.205635,
                mean_anomaly_epoch: 168.6562,
                daily_motion: 4.092_334_436_8,
            },
            Planet::Venus => &OrbitalElements {
                ascending_node: 76.6799,
                inclination: 3.3946,
                arg_perihelion: 54.8910,
                semi_major_axis: 0.723330,
                eccentricity: 0.006773,
                mean_anomaly_epoch: 48.0052,
                daily_motion: 1.602_130_224_4,
            },
            Planet::Mars => &OrbitalElements {
                ascending_node: 49.5574,
                inclination: 1.8497,
                arg_perihelion: 286.5016,
                semi_major_axis: 1.523688,
                eccentricity: 0.093405,
                mean_anomaly_epoch: 18.6021,
                daily_motion: 0.524_020_776_6,
            },
            Planet::Jupiter => &OrbitalElements {
                ascending_node: 100.4542,
                inclination: 1.3030,
                arg_perihelion: 273.8777,
                semi_major_axis: 5.20256,
                eccentricity: 0.048498,
                mean_anomaly_epoch: 19.8950,
                daily_motion: 0.083_085_300_1,
            },
            Planet::Saturn => &OrbitalElements {
                ascending_node: 113.6634,
                inclination: 2.4886,
                arg_perihelion: 339.3939,
                semi_major_axis: 9.55475,
                eccentricity: 0.055546,
                mean_anomaly_epoch: 316.9670,
                daily_motion: 0.033_444_228_2,
            },
        }
    }

    /// Ecliptic longitude of the body at an exact Julian Date, in `[0°, 360°)`.
    pub fn longitude_at(self, jd: JulianDate) -> f64 {
        let el = self.elements();
        let d = (jd - ELEMENT_EPOCH).value();

        let mean_anomaly = wrap_360(el.mean_anomaly_epoch + el.daily_motion * d);
        let ecc_anomaly = eccentric_anomaly(mean_anomaly, el.eccentricity).to_radians();

        let xv = el.semi_major_axis * (ecc_anomaly.cos() - el.eccentricity);
        let yv = el.semi_major_axis
            * ((1.0 - el.eccentricity * el.eccentricity).sqrt() * ecc_anomaly.sin());

        let true_anomaly = yv.atan2(xv) * DEG_PER_RAD;
        // Geocentric ≈ heliocentric: no Earth-relative correction applied.
        wrap_360(true_anomaly + el.arg_perihelion)
    }

    /// Position record for the body at an exact Julian Date.
    pub fn position_at(self, jd: JulianDate) -> PlanetPosition {
        let longitude = self.longitude_at(jd);
        PlanetPosition {
            planet: self,
            longitude,
            sign: Zodiac::from_longitude(longitude),
            retrograde: false,
        }
    }
}

impl std::fmt::Display for Planet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// First-order solution of Kepler's equation, degrees in and out.
///
/// `E = M + (180/π)·e·sin M·(1 + e·cos M)`.  One step only; the residual is
/// acceptable for zodiac-sector accuracy and the non-convergence is part of
/// the pinned model.
fn eccentric_anomaly(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let m_rad = mean_anomaly.to_radians();
    mean_anomaly + DEG_PER_RAD * eccentricity * m_rad.sin() * (1.0 + eccentricity * m_rad.cos())
}

// ═══════════════════════════════════════════════════════════════════════════
// PlanetPosition
// ═══════════════════════════════════════════════════════════════════════════

/// One body's computed position: longitude, sign, and the (always-false)
/// retrograde flag.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanetPosition {
    /// Which body.
    pub planet: Planet,
    /// Ecliptic longitude in degrees, `[0, 360)`.
    pub longitude: f64,
    /// Zodiac sector containing the longitude.
    pub sign: Zodiac,
    /// Always `false`: the model computes no angular velocity.
    pub retrograde: bool,
}

impl PlanetPosition {
    /// Longitude rounded to the tenth of a degree used for display.
    #[inline]
    pub fn degree(&self) -> f64 {
        (self.longitude * 10.0).round() / 10.0
    }
}

impl std::fmt::Display for PlanetPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:.1}° {}", self.planet, self.longitude, self.sign)
    }
}

/// Positions of all tracked bodies at a civil moment, in reporting order.
pub fn planet_positions(moment: Moment) -> [PlanetPosition; 5] {
    planet_positions_at(moment.julian_date())
}

/// Positions of all tracked bodies at an exact Julian Date, in reporting order.
pub fn planet_positions_at(jd: JulianDate) -> [PlanetPosition; 5] {
    Planet::ALL.map(|planet| planet.position_at(jd))
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
