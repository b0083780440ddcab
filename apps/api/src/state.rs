use std::sync::Arc;

use crate::companies::StaticCompanyDirectory;
use crate::config::Config;
use crate::documents::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only company catalog, loaded once at startup.
    pub directory: Arc<StaticCompanyDirectory>,
    /// Pluggable document store. Redis when configured, in-memory otherwise.
    pub documents: Arc<dyn DocumentStore>,
    pub config: Config,
}
