//! Ecliptic ↔ equatorial rotation about the equinox direction.
//!
//! The obliquity is a parameter so the same rotation serves mean-of-date,
//! true-of-date, and J2000 frames.

/// Rotate an ecliptic vector into the equatorial frame.
pub fn ecliptic_to_equatorial(v: &[f64; 3], obliquity_rad: f64) -> [f64; 3] {
    let (s, c) = obliquity_rad.sin_cos();
    [v[0], c * v[1] - s * v[2], s * v[1] + c * v[2]]
}

/// Rotate an equatorial vector into the ecliptic frame.
pub fn equatorial_to_ecliptic(v: &[f64; 3], obliquity_rad: f64) -> [f64; 3] {
    let (s, c) = obliquity_rad.sin_cos();
    [v[0], c * v[1] + s * v[2], -s * v[1] + c * v[2]]
}
