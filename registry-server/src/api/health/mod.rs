//! Health routes
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | / | GET | plain-text liveness confirmation |
//! | /health | GET | store check, 503 when the store is unreachable |
//!
//! ```json
//! { "status": "ok", "version": "0.1.0", "store": "sqlite" }
//! ```

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    /// ok | unavailable
    status: &'static str,
    version: &'static str,
    /// Store backend name
    store: &'static str,
}

async fn index() -> &'static str {
    "Employee Registration API is running. POST employee data to /register."
}

async fn health(State(state): State<ServerState>) -> (StatusCode, Json<HealthResponse>) {
    let (status_code, status) = match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::error!(error = %e, "Store health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    (
        status_code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            store: state.store.backend(),
        }),
    )
}
