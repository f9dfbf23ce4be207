// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Approximate solar ecliptic longitude.
//!
//! Unlike the planets, the Sun's elements are not constant: perihelion
//! longitude, eccentricity, and mean anomaly all drift linearly with the day
//! count `D` from the element epoch.  The true longitude then comes from a
//! two-term equation of center instead of the orbital-plane construction:
//!
//! ```text
//! L = w + M + 1.9146·sin M + 0.01996·sin 2M
//! ```
//!
//! Same accuracy class as the planet pipeline: good to the zodiac sector,
//! not to the arcminute.

use crate::angle::wrap_360;
use crate::julian::{JulianDate, Moment};
use crate::planets::ELEMENT_EPOCH;
use crate::zodiac::Zodiac;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The Sun's computed position: true ecliptic longitude and zodiac sector.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SunPosition {
    /// True ecliptic longitude in degrees, `[0, 360)`.
    pub longitude: f64,
    /// Zodiac sector containing the longitude.
    pub sign: Zodiac,
}

impl SunPosition {
    /// Compute the Sun's position at a civil moment.
    pub fn at(moment: Moment) -> Self {
        Self::from_julian(moment.julian_date())
    }

    /// Compute the Sun's position at an exact Julian Date.
    pub fn from_julian(jd: JulianDate) -> Self {
        let d = (jd - ELEMENT_EPOCH).value();

        // Linearly drifting mean elements.
        let perihelion = 282.9404 + 4.70935e-5 * d;
        let mean_anomaly = wrap_360(356.0470 + 0.985_600_258_5 * d);

        let m_rad = mean_anomaly.to_radians();
        let center = 1.9146 * m_rad.sin() + 0.01996 * (2.0 * m_rad).sin();
        let longitude = wrap_360(perihelion + mean_anomaly + center);

        Self {
            longitude,
            sign: Zodiac::from_longitude(longitude),
        }
    }
}

impl std::fmt::Display for SunPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sun {:.1}° {}", self.longitude, self.sign)
    }
}

/// Compute the Sun's position at a civil moment.
///
/// Free-function alias for [`SunPosition::at`].
#[inline]
pub fn sun_position(moment: Moment) -> SunPosition {
    SunPosition::at(moment)
}
