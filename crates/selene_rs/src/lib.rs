//! Convenience wrapper for the selene engine and place catalog.
//!
//! Provides a global read-only context and plain-number functions for a
//! UI layer: surface distances between points or catalogued places, and
//! the Moon's altitude/azimuth for an observer.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use selene_rs::*;
//!
//! let km = place_distance_km("Tranquility Base", "Tycho", DistanceMethod::ExactSpherical)?;
//! let t: UtcTime = "2024-03-20T12:00:00Z".parse()?;
//! let (alt, az) = moon_alt_az(37.5665, 126.978, 38.0, t)?;
//! ```

pub mod convenience;
pub mod error;
pub mod global;

pub use convenience::{
    alt_az, compare_distance_km, moon_alt_az, moon_alt_az_default_observer, moon_alt_az_now,
    place, place_comparison, place_distance_km, sun_alt_az, surface_distance_km,
};
pub use error::SeleneError;
pub use global::{catalog, engine, init, is_initialized, settings};

// Re-export the types the functions above take and return.
pub use selene_config::Settings;
pub use selene_core::{Body, HorizontalCoords, UtcTime};
pub use selene_geo::{
    DistanceComparison, DistanceMethod, EARTH_MEAN_RADIUS_KM, MOON_MEAN_RADIUS_KM, NamedPlace,
    SurfaceBody,
};
