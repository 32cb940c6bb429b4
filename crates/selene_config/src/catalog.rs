//! Place catalog files.
//!
//! ```toml
//! [[place]]
//! name = "Tycho"
//! body = "moon"            # "moon" or "earth"
//! lat = -43.43
//! lon = -11.21
//! diameter_km = 85.0       # optional
//! description = "..."      # optional
//! images = ["tycho.jpg"]   # optional
//! slug = "tycho"           # optional, derived from name
//! ```

use std::path::Path;

use log::debug;
use serde::Deserialize;

use selene_geo::{Catalog, GeoPoint, NamedPlace, SurfaceBody};

use crate::error::ConfigError;

/// Catalog shipped with the crate: Apollo/crater sites and Icelandic landmarks.
pub const BUILTIN_CATALOG_TOML: &str = include_str!("../data/places.toml");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogToml {
    #[serde(default)]
    place: Vec<PlaceToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlaceToml {
    name: String,
    slug: Option<String>,
    body: String,
    lat: f64,
    lon: f64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    images: Vec<String>,
    diameter_km: Option<f64>,
}

impl PlaceToml {
    fn into_place(self) -> Result<NamedPlace, ConfigError> {
        let body: SurfaceBody = self
            .body
            .parse()
            .map_err(|e: String| ConfigError::Invalid(format!("place '{}': {e}", self.name)))?;
        let mut place = NamedPlace::new(self.name, body, GeoPoint::new(self.lat, self.lon))
            .with_description(self.description);
        place.images = self.images;
        place.diameter_km = self.diameter_km;
        if let Some(slug) = self.slug {
            place.slug = slug;
        }
        Ok(place)
    }
}

/// Parse catalog TOML text into a validated [`Catalog`].
pub fn parse_catalog(text: &str) -> Result<Catalog, ConfigError> {
    let raw: CatalogToml = toml::from_str(text)?;
    let places = raw
        .place
        .into_iter()
        .map(PlaceToml::into_place)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Catalog::new(places)?)
}

/// Read and parse a catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let catalog = parse_catalog(&text)?;
    debug!("loaded {} places from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// The embedded catalog.
pub fn builtin_catalog() -> Result<Catalog, ConfigError> {
    parse_catalog(BUILTIN_CATALOG_TOML)
}

#[cfg(test)]
mod tests {
    use super::*;
    use selene_geo::DistanceMethod;

    #[test]
    fn builtin_parses() {
        let c = builtin_catalog().unwrap();
        assert_eq!(c.on_body(SurfaceBody::Moon).count(), 5);
        assert_eq!(c.on_body(SurfaceBody::Earth).count(), 7);
        let tycho = c.get("tycho").unwrap();
        assert_eq!(tycho.diameter_km, Some(85.0));
        assert_eq!(tycho.images.len(), 1);
        assert!(!tycho.description.is_empty());
        assert!(c.get("jokulsarlon").is_some());
    }

    #[test]
    fn builtin_distances() {
        let c = builtin_catalog().unwrap();
        let d = c
            .distance_between("Tranquility Base", "Tycho", DistanceMethod::ExactSpherical)
            .unwrap();
        assert!((d - 1_634.749_956).abs() < 1e-5);
    }

    #[test]
    fn explicit_slug_wins() {
        let c = parse_catalog(
            r#"
            [[place]]
            name = "Apollo 11"
            slug = "a11"
            body = "moon"
            lat = 0.67408
            lon = 23.47297
            "#,
        )
        .unwrap();
        assert_eq!(c.get("a11").unwrap().name, "Apollo 11");
        assert!(c.get("apollo 11").is_some());
    }

    #[test]
    fn empty_file_is_empty_catalog() {
        assert!(parse_catalog("").unwrap().is_empty());
    }

    #[test]
    fn unknown_body_is_invalid() {
        let err = parse_catalog(
            r#"
            [[place]]
            name = "Olympus Mons"
            body = "mars"
            lat = 18.65
            lon = -133.8
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{err}");
    }

    #[test]
    fn missing_field_is_toml_error() {
        let err = parse_catalog("[[place]]\nname = \"x\"\nbody = \"moon\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn duplicates_surface_as_catalog_error() {
        let entry = "[[place]]\nname = \"Tycho\"\nbody = \"moon\"\nlat = -43.43\nlon = -11.21\n";
        let err = parse_catalog(&format!("{entry}{entry}")).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Catalog(selene_geo::CatalogError::DuplicatePlace("Tycho".into()))
        );
    }

    #[test]
    fn out_of_range_coordinates_rejected() {
        let err = parse_catalog("[[place]]\nname = \"x\"\nbody = \"earth\"\nlat = 91.0\nlon = 0.0\n")
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Catalog(selene_geo::CatalogError::InvalidCoordinates(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_catalog(Path::new("/nonexistent/places.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
