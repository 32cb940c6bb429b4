//! Surface geometry for lunar and terrestrial places.
//!
//! - [`GeoPoint`] and [`SurfaceBody`] with the bodies' mean radii
//! - Surface distance with two selectable strategies ([`DistanceMethod`])
//!   and a side-by-side [`DistanceComparison`]
//! - [`NamedPlace`] records and the read-only [`Catalog`]

pub mod catalog;
pub mod distance;
pub mod place;
pub mod point;

pub use catalog::{Catalog, CatalogError};
pub use distance::{
    DistanceComparison, DistanceMethod, compare, great_circle_distance_km,
    planar_chord_distance_km, surface_distance,
};
pub use place::{NamedPlace, slugify};
pub use point::{EARTH_MEAN_RADIUS_KM, GeoPoint, MOON_MEAN_RADIUS_KM, SurfaceBody};
