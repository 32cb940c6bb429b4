//! Application settings.
//!
//! Every table and key is optional; missing values take the defaults
//! below. Lookup order when no path is given explicitly: the
//! `SELENE_CONFIG` environment variable, then `selene.toml` and
//! `configs/selene.toml` relative to the working directory, then
//! built-in defaults.
//!
//! ```toml
//! [observer]
//! name = "Seoul"
//! lat = 37.5665
//! lon = 126.978
//! height_m = 38.0
//!
//! [engine]
//! dut1_s = 0.0
//! refraction = false
//! pressure_mbar = 1010.0
//! temperature_c = 10.0
//!
//! [distance]
//! method = "exact"          # or "planar"
//!
//! [catalog]
//! path = "places.toml"      # relative to this file
//! ```

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;

use selene_core::{EngineConfig, GeoLocation, RefractionModel};
use selene_geo::{Catalog, DistanceMethod};

use crate::catalog::{builtin_catalog, load_catalog};
use crate::error::ConfigError;

/// Environment variable naming a settings file.
pub const CONFIG_ENV_VAR: &str = "SELENE_CONFIG";

const CANDIDATE_PATHS: [&str; 2] = ["selene.toml", "configs/selene.toml"];

/// Default observer: Seoul City Hall.
const DEFAULT_OBSERVER: (&str, f64, f64, f64) = ("Seoul", 37.5665, 126.978, 38.0);

#[derive(Debug, Clone, PartialEq)]
pub struct ObserverSettings {
    pub name: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub height_m: f64,
}

impl Default for ObserverSettings {
    fn default() -> Self {
        let (name, lat, lon, height) = DEFAULT_OBSERVER;
        Self {
            name: name.to_string(),
            latitude_deg: lat,
            longitude_deg: lon,
            height_m: height,
        }
    }
}

impl ObserverSettings {
    pub fn location(&self) -> GeoLocation {
        GeoLocation::new(self.latitude_deg, self.longitude_deg, self.height_m)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSettings {
    pub dut1_s: f64,
    pub refraction: bool,
    pub pressure_mbar: f64,
    pub temperature_c: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        let model = RefractionModel::default();
        Self {
            dut1_s: 0.0,
            refraction: false,
            pressure_mbar: model.pressure_mbar,
            temperature_c: model.temperature_c,
        }
    }
}

impl EngineSettings {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            dut1_s: self.dut1_s,
            refraction: self.refraction.then_some(RefractionModel {
                pressure_mbar: self.pressure_mbar,
                temperature_c: self.temperature_c,
            }),
        }
    }
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    pub observer: ObserverSettings,
    pub engine: EngineSettings,
    pub distance_method: DistanceMethod,
    /// Catalog file; `None` selects the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    /// File these settings were read from, if any.
    pub source: Option<PathBuf>,
}

impl Settings {
    pub fn engine_config(&self) -> EngineConfig {
        self.engine.engine_config()
    }

    pub fn observer_location(&self) -> GeoLocation {
        self.observer.location()
    }

    /// Load the configured catalog, or the built-in one.
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog_path {
            Some(path) => load_catalog(path),
            None => builtin_catalog(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SettingsToml {
    observer: ObserverToml,
    engine: EngineToml,
    distance: DistanceToml,
    catalog: CatalogPathToml,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ObserverToml {
    name: String,
    lat: f64,
    lon: f64,
    height_m: f64,
}

impl Default for ObserverToml {
    fn default() -> Self {
        let d = ObserverSettings::default();
        Self {
            name: d.name,
            lat: d.latitude_deg,
            lon: d.longitude_deg,
            height_m: d.height_m,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct EngineToml {
    dut1_s: f64,
    refraction: bool,
    pressure_mbar: f64,
    temperature_c: f64,
}

impl Default for EngineToml {
    fn default() -> Self {
        let d = EngineSettings::default();
        Self {
            dut1_s: d.dut1_s,
            refraction: d.refraction,
            pressure_mbar: d.pressure_mbar,
            temperature_c: d.temperature_c,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DistanceToml {
    method: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CatalogPathToml {
    path: Option<PathBuf>,
}

impl SettingsToml {
    fn into_settings(self, base_dir: Option<&Path>) -> Result<Settings, ConfigError> {
        let distance_method = match self.distance.method {
            Some(m) => m.parse::<DistanceMethod>().map_err(ConfigError::Invalid)?,
            None => DistanceMethod::default(),
        };
        let catalog_path = self.catalog.path.map(|p| match base_dir {
            Some(dir) if p.is_relative() => dir.join(p),
            _ => p,
        });
        let settings = Settings {
            observer: ObserverSettings {
                name: self.observer.name,
                latitude_deg: self.observer.lat,
                longitude_deg: self.observer.lon,
                height_m: self.observer.height_m,
            },
            engine: EngineSettings {
                dut1_s: self.engine.dut1_s,
                refraction: self.engine.refraction,
                pressure_mbar: self.engine.pressure_mbar,
                temperature_c: self.engine.temperature_c,
            },
            distance_method,
            catalog_path,
            source: None,
        };
        settings
            .observer_location()
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("observer: {e}")))?;
        settings
            .engine_config()
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("engine: {e}")))?;
        Ok(settings)
    }
}

/// Parse settings TOML. Relative catalog paths resolve against `base_dir`.
pub fn parse_settings(text: &str, base_dir: Option<&Path>) -> Result<Settings, ConfigError> {
    let raw: SettingsToml = toml::from_str(text)?;
    raw.into_settings(base_dir)
}

/// Read settings from a specific file.
pub fn load_settings_file(path: &Path) -> Result<Settings, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let mut settings = parse_settings(&text, path.parent())?;
    settings.source = Some(path.to_path_buf());
    info!("loaded settings from {}", path.display());
    Ok(settings)
}

/// Resolve and load settings.
///
/// An explicit path or `SELENE_CONFIG` must point at a readable file;
/// the candidate paths are only used when they exist.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, ConfigError> {
    let env = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    match settings_path(explicit, env, |p| p.is_file()) {
        Some(path) => load_settings_file(&path),
        None => {
            debug!("no settings file found, using defaults");
            Ok(Settings::default())
        }
    }
}

fn settings_path(
    explicit: Option<&Path>,
    env: Option<PathBuf>,
    exists: impl Fn(&Path) -> bool,
) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }
    if let Some(p) = env.filter(|p| !p.as_os_str().is_empty()) {
        return Some(p);
    }
    CANDIDATE_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|p| exists(p))
}
