// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Synodic — approximate lunar-phase and planetary-zodiac ephemeris.
//!
//! Everything in this crate is a pure function of an instant: a [`Moment`]
//! (Unix milliseconds plus the UTC offset of the civil clock) is projected
//! onto a continuous [`JulianDate`], and from that day count the crate
//! derives
//!
//! - the moon's phase bucket, illumination, age, and cycle progress
//!   ([`MoonPhase`]),
//! - the zodiac positions of Mercury, Venus, Mars, Jupiter, and Saturn
//!   ([`PlanetPosition`]), and
//! - the Sun's ecliptic longitude ([`SunPosition`]).
//!
//! # Core types
//!
//! | Type | Role |
//! |------|------|
//! | [`Moment`] | input instant with its local UTC offset |
//! | [`JulianDate`] | continuous day count, the internal axis |
//! | [`MoonPhase`] / [`Phase`] | lunar state and its 8 named buckets |
//! | [`PlanetPosition`] / [`Planet`] | per-body longitude and zodiac sign |
//! | [`SunPosition`] | solar longitude and zodiac sign |
//! | [`Zodiac`] | the 12 fixed 30° sectors |
//!
//! # Operations
//!
//! - [`moon_phase`] / [`MoonPhase::at`] — lunar phase at a moment.
//! - [`planet_positions`] — all five bodies, in fixed order.
//! - [`sun_position`] — solar longitude.
//! - `*_at` / `from_julian` variants take a [`JulianDate`] directly.
//!
//! # Model accuracy
//!
//! This is a display-grade model, calibrated to the zodiac sector rather
//! than the arcminute, and its simplifications are pinned behavior:
//!
//! - Kepler's equation is solved with a **single** first-order step, never
//!   iterated to convergence;
//! - geocentric longitude is taken equal to heliocentric longitude;
//! - retrograde motion is never reported (no angular velocity is computed);
//! - element tables drift linearly, so accuracy degrades for instants more
//!   than a few millennia from J2000.
//!
//! Every operation is total over finite instants: no I/O, no shared state,
//! no error paths.  Calls may run concurrently without coordination.
//!
//! # Quick example
//! ```rust
//! use chrono::Utc;
//! use synodic::{moon_phase, planet_positions, Moment};
//!
//! let now = Moment::from_utc(Utc::now());
//! let moon = moon_phase(now);
//! println!("{moon}");
//! for position in planet_positions(now) {
//!     println!("{position}");
//! }
//! ```

mod angle;
mod julian;
mod moon;
mod planets;
mod sun;
mod zodiac;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use angle::{wrap_360, wrap_unit};
pub use julian::{JulianDate, Moment};
pub use moon::{moon_phase, MoonPhase, Phase, NEW_MOON_EPOCH, SYNODIC_MONTH};
pub use planets::{
    planet_positions, planet_positions_at, OrbitalElements, Planet, PlanetPosition, ELEMENT_EPOCH,
};
pub use sun::{sun_position, SunPosition};
pub use zodiac::Zodiac;
