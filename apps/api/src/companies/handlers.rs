//! Axum route handlers for the Company Directory.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::companies::directory::CompanyFilter;
use crate::companies::models::{CompanyRecord, CompanyType, Tier};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CompanyQuery {
    pub tier: Option<Tier>,
    #[serde(rename = "type")]
    pub company_type: Option<CompanyType>,
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CompanyListResponse {
    pub total: usize,
    pub companies: Vec<CompanyRecord>,
}

/// GET /api/v1/companies
///
/// Lists catalog entries, optionally filtered by tier, company type and a name/domain query.
pub async fn handle_list_companies(
    State(state): State<AppState>,
    Query(query): Query<CompanyQuery>,
) -> Result<Json<CompanyListResponse>, AppError> {
    let filter = CompanyFilter {
        tier: query.tier,
        company_type: query.company_type,
        query: query.q,
    };
    let companies: Vec<CompanyRecord> = state
        .directory
        .filter(&filter)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(CompanyListResponse {
        total: companies.len(),
        companies,
    }))
}

/// GET /api/v1/companies/:id
pub async fn handle_get_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CompanyRecord>, AppError> {
    state
        .directory
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Company {id} not found")))
}
