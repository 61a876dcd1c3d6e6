//! API routes
//!
//! # Structure
//!
//! - [`health`] - liveness text and store health check
//! - [`register`] - employee registration
//! - [`employees`] - listing, live feed and deletion
//!
//! [`build_app`] assembles the routers with CORS, timeout and access logging.

pub mod employees;
pub mod health;
pub mod register;

use std::time::{Duration, Instant};

use axum::error_handling::HandleErrorLayer;
use axum::{Router, middleware};
use http::{HeaderName, HeaderValue, Method, header};
use tower::timeout::TimeoutLayer;
use tower::timeout::error::Elapsed;
use tower::{BoxError, ServiceBuilder};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::auth::USER_ID_HEADER;
use crate::core::{ServerError, ServerState};
use crate::utils::{AppError, ErrorCode};

/// HTTP access log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        target: "http_access",
        "{} {} {} {}ms",
        method,
        uri,
        response.status(),
        started.elapsed().as_millis()
    );

    response
}

/// Turn middleware failures into the usual error body
async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        AppError::with_message(ErrorCode::TimeoutError, "Request timed out")
    } else {
        tracing::error!(error = %err, "Unhandled middleware error");
        AppError::new(ErrorCode::InternalError)
    }
}

/// Route table without state
pub fn routes() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(register::router())
        .merge(employees::router())
}

/// Build the complete application for `state`
pub fn build_app(state: ServerState) -> Result<Router, ServerError> {
    let origin = HeaderValue::from_str(&state.config.allowed_origin).map_err(|_| {
        ServerError::Config(format!(
            "ALLOWED_ORIGIN is not a valid origin: '{}'",
            state.config.allowed_origin
        ))
    })?;

    // List mode: foreign origins get no allow-origin header at all
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(USER_ID_HEADER)]);

    let timeout = Duration::from_millis(state.config.request_timeout_ms);

    // Outermost first: access log, CORS, timeout
    let layers = ServiceBuilder::new()
        .layer(middleware::from_fn(log_request))
        .layer(cors)
        .layer(HandleErrorLayer::new(handle_middleware_error))
        .layer(TimeoutLayer::new(timeout));

    Ok(routes().with_state(state).layer(layers))
}
