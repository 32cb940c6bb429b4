use selene_core::{Body, GeoLocation, Observer, UtcTime};
use selene_geo::{DistanceComparison, DistanceMethod, GeoPoint, NamedPlace, compare, surface_distance};

use crate::error::SeleneError;
use crate::global::{catalog, context, engine};

/// Surface distance between two lat/lon pairs (degrees) on a sphere of
/// `radius_km`.
///
/// Inputs are not validated; NaN propagates to the result.
pub fn surface_distance_km(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    radius_km: f64,
    method: DistanceMethod,
) -> f64 {
    surface_distance(
        &GeoPoint::new(lat1, lon1),
        &GeoPoint::new(lat2, lon2),
        radius_km,
        method,
    )
}

/// Both distance strategies for one pair of lat/lon points.
pub fn compare_distance_km(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    radius_km: f64,
) -> DistanceComparison {
    compare(&GeoPoint::new(lat1, lon1), &GeoPoint::new(lat2, lon2), radius_km)
}

/// `(altitude, azimuth)` in degrees of `body` for an observer at `time`.
pub fn alt_az(
    body: Body,
    lat: f64,
    lon: f64,
    height_m: f64,
    time: UtcTime,
) -> Result<(f64, f64), SeleneError> {
    let observer = Observer::new(GeoLocation::new(lat, lon, height_m), time);
    let h = engine()?.horizontal(body, &observer)?;
    Ok((h.altitude_deg, h.azimuth_deg))
}

/// Moon `(altitude, azimuth)` in degrees.
pub fn moon_alt_az(
    lat: f64,
    lon: f64,
    height_m: f64,
    time: UtcTime,
) -> Result<(f64, f64), SeleneError> {
    alt_az(Body::Moon, lat, lon, height_m, time)
}

/// Moon `(altitude, azimuth)` at the current system time.
pub fn moon_alt_az_now(lat: f64, lon: f64, height_m: f64) -> Result<(f64, f64), SeleneError> {
    let now = UtcTime::now().map_err(selene_core::EngineError::from)?;
    moon_alt_az(lat, lon, height_m, now)
}

/// Sun `(altitude, azimuth)` in degrees.
pub fn sun_alt_az(
    lat: f64,
    lon: f64,
    height_m: f64,
    time: UtcTime,
) -> Result<(f64, f64), SeleneError> {
    alt_az(Body::Sun, lat, lon, height_m, time)
}

/// Moon `(altitude, azimuth)` for the configured default observer.
pub fn moon_alt_az_default_observer(time: UtcTime) -> Result<(f64, f64), SeleneError> {
    let loc = context()?.settings.observer_location();
    moon_alt_az(loc.latitude_deg, loc.longitude_deg, loc.height_m, time)
}

/// Look up a catalogued place by name or slug.
pub fn place(name_or_slug: &str) -> Result<&'static NamedPlace, SeleneError> {
    Ok(catalog()?.require(name_or_slug)?)
}

/// Distance between two catalogued places on the same body.
pub fn place_distance_km(from: &str, to: &str, method: DistanceMethod) -> Result<f64, SeleneError> {
    Ok(catalog()?.distance_between(from, to, method)?)
}

/// Both strategies for two catalogued places on the same body.
pub fn place_comparison(from: &str, to: &str) -> Result<DistanceComparison, SeleneError> {
    let catalog = catalog()?;
    let a = catalog.require(from)?;
    let b = catalog.require(to)?;
    if a.body != b.body {
        return Err(selene_geo::CatalogError::CrossBody {
            from: a.name.clone(),
            to: b.name.clone(),
        }
        .into());
    }
    Ok(compare(&a.point, &b.point, a.radius_km()))
}
