pub mod catalog;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::state::catalog::Catalog;

/// Handle shared by every resolver invocation.
pub type SharedState = Arc<AppState>;

/// Central application state owning the in-memory catalog.
///
/// Resolvers receive this through the GraphQL schema data instead of reaching
/// for process-wide globals, so tests can each build an isolated instance.
pub struct AppState {
    catalog: RwLock<Catalog>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(catalog: Catalog) -> SharedState {
        Arc::new(Self {
            catalog: RwLock::new(catalog),
        })
    }

    /// The catalog guarded by its lock.
    ///
    /// Mutations hold the write half across their whole read-modify-install
    /// step, so two concurrent updates cannot overwrite each other.
    pub fn catalog(&self) -> &RwLock<Catalog> {
        &self.catalog
    }
}
