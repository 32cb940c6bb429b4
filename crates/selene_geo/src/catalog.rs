//! Read-only registry of named places.
//!
//! Built once, then only queried. Lookup accepts the display name or the
//! slug, case-insensitively; iteration keeps insertion order.

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::distance::{DistanceMethod, surface_distance};
use crate::place::{NamedPlace, slugify};
use crate::point::SurfaceBody;

/// Catalog construction and lookup errors.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CatalogError {
    EmptyName,
    /// Latitude or longitude missing, non-finite, or out of range.
    InvalidCoordinates(String),
    InvalidDiameter(String),
    /// Two entries share a name or slug.
    DuplicatePlace(String),
    UnknownPlace(String),
    /// Distance requested between places on different bodies.
    CrossBody { from: String, to: String },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "place name must not be empty"),
            Self::InvalidCoordinates(name) => {
                write!(f, "place '{name}' has invalid coordinates")
            }
            Self::InvalidDiameter(name) => write!(f, "place '{name}' has an invalid diameter"),
            Self::DuplicatePlace(name) => write!(f, "duplicate place '{name}'"),
            Self::UnknownPlace(name) => write!(f, "unknown place '{name}'"),
            Self::CrossBody { from, to } => {
                write!(f, "'{from}' and '{to}' are on different bodies")
            }
        }
    }
}

impl Error for CatalogError {}

/// Immutable set of [`NamedPlace`]s.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    places: Vec<NamedPlace>,
    /// Lowercased name and slug → index into `places`.
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Validate and index `places`.
    pub fn new(places: Vec<NamedPlace>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(places.len() * 2);
        for (i, place) in places.iter().enumerate() {
            validate_place(place)?;
            let name_key = place.name.trim().to_lowercase();
            let slug_key = if place.slug.is_empty() {
                slugify(&place.name)
            } else {
                place.slug.to_lowercase()
            };
            for key in [name_key, slug_key] {
                match index.get(&key) {
                    Some(&j) if j != i => {
                        return Err(CatalogError::DuplicatePlace(place.name.clone()));
                    }
                    _ => {
                        index.insert(key, i);
                    }
                }
            }
        }
        Ok(Self { places, index })
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedPlace> {
        self.places.iter()
    }

    /// Places on one body, in catalog order.
    pub fn on_body(&self, body: SurfaceBody) -> impl Iterator<Item = &NamedPlace> {
        self.places.iter().filter(move |p| p.body == body)
    }

    /// Look up by display name or slug, ignoring case.
    pub fn get(&self, name_or_slug: &str) -> Option<&NamedPlace> {
        let key = name_or_slug.trim().to_lowercase();
        self.index
            .get(&key)
            .or_else(|| self.index.get(&slugify(&key)))
            .map(|&i| &self.places[i])
    }

    pub fn require(&self, name_or_slug: &str) -> Result<&NamedPlace, CatalogError> {
        self.get(name_or_slug)
            .ok_or_else(|| CatalogError::UnknownPlace(name_or_slug.to_string()))
    }

    /// Surface distance between two catalogued places on the same body.
    pub fn distance_between(
        &self,
        from: &str,
        to: &str,
        method: DistanceMethod,
    ) -> Result<f64, CatalogError> {
        let a = self.require(from)?;
        let b = self.require(to)?;
        if a.body != b.body {
            return Err(CatalogError::CrossBody {
                from: a.name.clone(),
                to: b.name.clone(),
            });
        }
        Ok(surface_distance(&a.point, &b.point, a.radius_km(), method))
    }
}

fn validate_place(place: &NamedPlace) -> Result<(), CatalogError> {
    if place.name.trim().is_empty() || slugify(&place.name).is_empty() {
        return Err(CatalogError::EmptyName);
    }
    if !place.point.is_valid() {
        return Err(CatalogError::InvalidCoordinates(place.name.clone()));
    }
    if let Some(d) = place.diameter_km
        && !(d.is_finite() && d > 0.0)
    {
        return Err(CatalogError::InvalidDiameter(place.name.clone()));
    }
    Ok(())
}
