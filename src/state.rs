//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the module store behind a trait object so the same router runs on
//! Postgres or on the in-memory store.

use std::sync::Arc;

use crate::services::module::{MemoryModuleStore, ModuleStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ModuleStore>,
    /// Lowercased deployment name, reported by `/healthz`.
    pub environment: String,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn ModuleStore>, environment: impl Into<String>) -> Self {
        Self { store, environment: environment.into() }
    }

    /// State backed by a fresh [`MemoryModuleStore`].
    #[must_use]
    pub fn in_memory(environment: impl Into<String>) -> Self {
        Self::new(Arc::new(MemoryModuleStore::new()), environment)
    }
}
