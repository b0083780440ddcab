//! Axum route handlers for the Compare API.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::compare::validation::validate_offer;
use crate::documents::Document;
use crate::errors::AppError;
use crate::reality::{generate_report, ContentBlock, Offer, OfferPriorities};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub offer_a: Offer,
    pub offer_b: Offer,
    #[serde(default)]
    pub priorities: OfferPriorities,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResponse {
    pub document_id: Uuid,
    pub document: Document,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub blocks: Vec<ContentBlock>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

fn run_engine(state: &AppState, request: &CompareRequest) -> Result<Vec<ContentBlock>, AppError> {
    validate_offer("offerA", &request.offer_a)?;
    validate_offer("offerB", &request.offer_b)?;

    Ok(generate_report(
        &request.offer_a,
        &request.offer_b,
        &request.priorities,
        state.directory.as_ref(),
        &state.config.reality,
    ))
}

/// POST /api/v1/compare
///
/// Generates the reality-check page for two offers and stores it as a document
/// titled "{A} vs {B}".
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<(StatusCode, Json<CompareResponse>), AppError> {
    let blocks = run_engine(&state, &request)?;

    let title = format!("{} vs {}", request.offer_a.company, request.offer_b.company);
    let document = Document::new(title, blocks);
    state.documents.put(&document).await?;

    info!(
        "Stored comparison document {} ({} blocks, backend={})",
        document.id,
        document.blocks.len(),
        state.documents.backend()
    );

    Ok((
        StatusCode::CREATED,
        Json(CompareResponse {
            document_id: document.id,
            document,
        }),
    ))
}

/// POST /api/v1/compare/preview
///
/// Same pipeline as `/compare` but nothing is persisted.
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<PreviewResponse>, AppError> {
    let blocks = run_engine(&state, &request)?;
    Ok(Json(PreviewResponse { blocks }))
}
