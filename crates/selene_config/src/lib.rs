//! Configuration for selene.
//!
//! - [`Settings`]: observer, engine and distance defaults from a TOML file
//! - Place catalogs in TOML, including the embedded [`builtin_catalog`]

pub mod catalog;
pub mod error;
pub mod settings;

pub use catalog::{BUILTIN_CATALOG_TOML, builtin_catalog, load_catalog, parse_catalog};
pub use error::ConfigError;
pub use settings::{
    CONFIG_ENV_VAR, EngineSettings, ObserverSettings, Settings, load_settings,
    load_settings_file, parse_settings,
};
