use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use fra_core::models::{ClaimCollection, ClaimDetails, FilterCriteria};
use fra_core::FraError;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_claims(
    State(state): State<Arc<AppState>>,
    Query(criteria): Query<FilterCriteria>,
) -> Result<Json<ClaimCollection>, ApiError> {
    tracing::info!(filters = ?criteria.applied(), "Filtering claims");

    let collection = state.store.filter(&criteria)?;
    Ok(Json(collection))
}

pub async fn export_claims(
    State(state): State<Arc<AppState>>,
    Query(criteria): Query<FilterCriteria>,
) -> Result<Json<ClaimCollection>, ApiError> {
    tracing::info!(filters = ?criteria.applied(), "Exporting claims");

    let collection = state.store.export(&criteria)?;
    Ok(Json(collection))
}

pub async fn get_claim(
    State(state): State<Arc<AppState>>,
    Path(claim_id): Path<String>,
) -> Result<Json<ClaimDetails>, ApiError> {
    let record = state
        .store
        .get(&claim_id)
        .ok_or_else(|| FraError::ClaimNotFound { claim_id: claim_id.clone() })?;

    Ok(Json(record.details()))
}
