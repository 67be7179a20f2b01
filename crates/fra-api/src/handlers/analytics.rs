use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, Json};
use fra_core::models::{Analytics, GroupSummary, PerformanceMetrics, Timeline};

use crate::state::AppState;

pub async fn get_analytics(State(state): State<Arc<AppState>>) -> Json<Analytics> {
    Json(state.store.analytics())
}

pub async fn state_summary(
    State(state): State<Arc<AppState>>,
) -> Json<BTreeMap<String, GroupSummary>> {
    Json(state.store.state_summary())
}

pub async fn tribal_analysis(
    State(state): State<Arc<AppState>>,
) -> Json<BTreeMap<String, GroupSummary>> {
    Json(state.store.tribal_summary())
}

pub async fn timeline(State(state): State<Arc<AppState>>) -> Json<Timeline> {
    Json(state.store.timeline())
}

pub async fn performance(State(state): State<Arc<AppState>>) -> Json<PerformanceMetrics> {
    Json(state.store.performance())
}
