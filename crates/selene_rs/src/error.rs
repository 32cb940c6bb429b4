//! Error type for the convenience API.

use std::error::Error;
use std::fmt::{Display, Formatter};

use selene_config::ConfigError;
use selene_core::EngineError;
use selene_geo::CatalogError;

/// Errors from the global context or the wrapped crates.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SeleneError {
    /// `init` was called after the context already existed.
    AlreadyInitialized,
    UnknownPlace(String),
    Engine(EngineError),
    Config(ConfigError),
    Catalog(CatalogError),
}

impl Display for SeleneError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyInitialized => write!(f, "selene context already initialized"),
            Self::UnknownPlace(name) => write!(f, "unknown place '{name}'"),
            Self::Engine(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
            Self::Catalog(e) => write!(f, "{e}"),
        }
    }
}

impl Error for SeleneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Engine(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Catalog(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EngineError> for SeleneError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

impl From<ConfigError> for SeleneError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<CatalogError> for SeleneError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::UnknownPlace(name) => Self::UnknownPlace(name),
            other => Self::Catalog(other),
        }
    }
}
