use std::sync::Arc;

use axum::{extract::State, Json};
use fra_core::models::FilterOptions;

use crate::state::AppState;

pub async fn filter_options(State(state): State<Arc<AppState>>) -> Json<FilterOptions> {
    Json(state.store.filter_options())
}
