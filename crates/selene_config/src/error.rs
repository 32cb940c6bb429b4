//! Configuration loading errors.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use selene_geo::CatalogError;

/// Failure to read, parse or validate a configuration file.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// File could not be read.
    Io { path: PathBuf, message: String },
    /// File is not valid TOML or does not match the expected shape.
    Toml(String),
    /// Well-formed but semantically invalid value.
    Invalid(String),
    /// Catalog entries failed validation.
    Catalog(CatalogError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "cannot read {}: {message}", path.display()),
            Self::Toml(msg) => write!(f, "malformed TOML: {msg}"),
            Self::Invalid(msg) => write!(f, "invalid configuration: {msg}"),
            Self::Catalog(e) => write!(f, "invalid catalog: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Catalog(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CatalogError> for ConfigError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e.to_string())
    }
}
