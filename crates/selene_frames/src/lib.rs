//! Frame conversion helpers for position computations.
//!
//! Provides coordinate rotations (ecliptic ↔ equatorial of date), nutation
//! and obliquity, topocentric parallax for a WGS-84 observer, the
//! equatorial → horizontal transform, and spherical geometry helpers.

pub mod horizontal;
pub mod nutation;
pub mod obliquity;
pub mod rotation;
pub mod spherical;
pub mod topocentric;

pub use horizontal::{HorizontalCoords, RefractionModel, equatorial_to_horizontal};
pub use nutation::{delaunay_arguments, nutation_arcsec};
pub use obliquity::{OBLIQUITY_J2000_ARCSEC, mean_obliquity_deg, true_obliquity_deg};
pub use rotation::{ecliptic_to_equatorial, equatorial_to_ecliptic};
pub use spherical::{
    SphericalCoords, angular_separation_deg, angular_separation_rad, cartesian_to_spherical,
    spherical_to_cartesian,
};
pub use topocentric::{
    EARTH_EQUATORIAL_RADIUS_KM, EARTH_FLATTENING, geocentric_factors, horizontal_parallax_deg,
    observer_equatorial_km, topocentric,
};
