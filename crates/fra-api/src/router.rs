use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))

        // Claims
        .route("/api/claims", get(handlers::list_claims))
        .route("/api/claim/{claim_id}", get(handlers::get_claim))
        .route("/api/export", get(handlers::export_claims))
        .route("/api/filter-options", get(handlers::filter_options))

        // Aggregates
        .route("/api/analytics", get(handlers::get_analytics))
        .route("/api/state-summary", get(handlers::state_summary))
        .route("/api/tribal-analysis", get(handlers::tribal_analysis))
        .route("/api/timeline", get(handlers::timeline))
        .route("/api/performance", get(handlers::performance))

        .with_state(state)
}
