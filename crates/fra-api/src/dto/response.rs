use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub claims_loaded: usize,
}

impl HealthResponse {
    pub fn ok(claims_loaded: usize) -> Self {
        Self { status: "ok", service: "fra-api", claims_loaded }
    }
}
