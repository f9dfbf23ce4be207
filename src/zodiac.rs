// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The twelve fixed 30°-wide sectors of ecliptic longitude.

use crate::angle::wrap_360;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A zodiac sign: one of twelve 30° sectors, starting at Aries = `[0°, 30°)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Zodiac {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All signs in sector order.
const SIGNS: [Zodiac; 12] = [
    Zodiac::Aries,
    Zodiac::Taurus,
    Zodiac::Gemini,
    Zodiac::Cancer,
    Zodiac::Leo,
    Zodiac::Virgo,
    Zodiac::Libra,
    Zodiac::Scorpio,
    Zodiac::Sagittarius,
    Zodiac::Capricorn,
    Zodiac::Aquarius,
    Zodiac::Pisces,
];

impl Zodiac {
    /// The sign whose sector contains the given ecliptic longitude.
    ///
    /// The longitude is wrapped into `[0°, 360°)` first, so any finite value
    /// is accepted.
    pub fn from_longitude(degrees: f64) -> Self {
        let index = (wrap_360(degrees) / 30.0) as usize;
        SIGNS[index.min(11)]
    }

    /// Sector index in `[0, 11]`, Aries = 0.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// English sign name.
    pub const fn name(self) -> &'static str {
        match self {
            Zodiac::Aries => "Aries",
            Zodiac::Taurus => "Taurus",
            Zodiac::Gemini => "Gemini",
            Zodiac::Cancer => "Cancer",
            Zodiac::Leo => "Leo",
            Zodiac::Virgo => "Virgo",
            Zodiac::Libra => "Libra",
            Zodiac::Scorpio => "Scorpio",
            Zodiac::Sagittarius => "Sagittarius",
            Zodiac::Capricorn => "Capricorn",
            Zodiac::Aquarius => "Aquarius",
            Zodiac::Pisces => "Pisces",
        }
    }
}

impl std::fmt::Display for Zodiac {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
