pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::companies::handlers as companies;
use crate::compare::handlers as compare;
use crate::documents::handlers as documents;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Compare API
        .route("/api/v1/compare", post(compare::handle_compare))
        .route("/api/v1/compare/preview", post(compare::handle_preview))
        // Documents API
        .route("/api/v1/documents", get(documents::handle_list_documents))
        .route("/api/v1/documents/:id", get(documents::handle_get_document))
        // Company Directory API
        .route("/api/v1/companies", get(companies::handle_list_companies))
        .route("/api/v1/companies/:id", get(companies::handle_get_company))
        .with_state(state)
}
