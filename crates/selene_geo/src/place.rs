//! Named places on a surface body.

use crate::point::{GeoPoint, SurfaceBody};

/// A catalogued point of interest.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedPlace {
    pub name: String,
    /// Lowercase ASCII identifier derived from the name.
    pub slug: String,
    pub body: SurfaceBody,
    pub point: GeoPoint,
    pub description: String,
    /// Image URLs or paths, in display order.
    pub images: Vec<String>,
    /// Crater or feature diameter, when known.
    pub diameter_km: Option<f64>,
}

impl NamedPlace {
    /// Place with no description, images or diameter.
    pub fn new(name: impl Into<String>, body: SurfaceBody, point: GeoPoint) -> Self {
        let name = name.into();
        Self {
            slug: slugify(&name),
            name,
            body,
            point,
            description: String::new(),
            images: Vec::new(),
            diameter_km: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.images.push(image.into());
        self
    }

    pub fn with_diameter_km(mut self, diameter_km: f64) -> Self {
        self.diameter_km = Some(diameter_km);
        self
    }

    pub fn radius_km(&self) -> f64 {
        self.body.radius_km()
    }
}

/// Lowercase ASCII slug: Icelandic and common Latin letters are folded,
/// runs of anything else collapse to a single `-`.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars().flat_map(char::to_lowercase) {
        let folded = match c {
            'a'..='z' | '0'..='9' => Some(c.to_string()),
            'á' | 'à' | 'â' | 'ä' | 'å' => Some("a".into()),
            'é' | 'è' | 'ê' | 'ë' => Some("e".into()),
            'í' | 'ì' | 'î' | 'ï' => Some("i".into()),
            'ó' | 'ò' | 'ô' | 'ö' | 'ø' => Some("o".into()),
            'ú' | 'ù' | 'û' | 'ü' => Some("u".into()),
            'ý' | 'ÿ' => Some("y".into()),
            'ð' => Some("d".into()),
            'þ' => Some("th".into()),
            'æ' => Some("ae".into()),
            _ => None,
        };
        match folded {
            Some(s) => {
                if pending_dash && !out.is_empty() {
                    out.push('-');
                }
                pending_dash = false;
                out.push_str(&s);
            }
            None => pending_dash = true,
        }
    }
    out
}
