//! Process-wide context: settings, engine and place catalog.
//!
//! Built once and never mutated. Functions that need it build the default
//! context on first use when [`init`] was never called.

use std::sync::OnceLock;

use log::info;
use selene_config::Settings;
use selene_core::Engine;
use selene_geo::Catalog;

use crate::error::SeleneError;

pub(crate) struct Context {
    pub(crate) settings: Settings,
    pub(crate) engine: Engine,
    pub(crate) catalog: Catalog,
}

impl Context {
    fn from_settings(settings: Settings) -> Result<Self, SeleneError> {
        let engine = Engine::new(settings.engine_config())?;
        let catalog = settings.catalog()?;
        info!(
            "selene context: {} places, observer {}",
            catalog.len(),
            settings.observer.name
        );
        Ok(Self {
            settings,
            engine,
            catalog,
        })
    }
}

static CONTEXT: OnceLock<Context> = OnceLock::new();

/// Initialize the global context from `settings`.
///
/// Fails with [`SeleneError::AlreadyInitialized`] if a context exists,
/// including one created implicitly by an earlier call.
pub fn init(settings: Settings) -> Result<(), SeleneError> {
    let ctx = Context::from_settings(settings)?;
    CONTEXT
        .set(ctx)
        .map_err(|_| SeleneError::AlreadyInitialized)
}

pub fn is_initialized() -> bool {
    CONTEXT.get().is_some()
}

pub(crate) fn context() -> Result<&'static Context, SeleneError> {
    if let Some(ctx) = CONTEXT.get() {
        return Ok(ctx);
    }
    let ctx = Context::from_settings(Settings::default())?;
    Ok(CONTEXT.get_or_init(|| ctx))
}

/// The global place catalog.
pub fn catalog() -> Result<&'static Catalog, SeleneError> {
    Ok(&context()?.catalog)
}

/// The global engine.
pub fn engine() -> Result<&'static Engine, SeleneError> {
    Ok(&context()?.engine)
}

/// Settings the global context was built from.
pub fn settings() -> Result<&'static Settings, SeleneError> {
    Ok(&context()?.settings)
}
