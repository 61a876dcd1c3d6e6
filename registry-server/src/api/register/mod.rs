//! Registration API Module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// Registration router
pub fn router() -> Router<ServerState> {
    Router::new().route("/register", post(handler::register))
}
