//! Registration Handler

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use shared::models::RegisterResponse;

use crate::auth::CurrentOwner;
use crate::core::ServerState;
use crate::live::RosterAction;
use crate::utils::AppResult;

/// Register a new employee
///
/// The body is taken raw so that empty and malformed submissions get the
/// registration error messages instead of axum's extractor rejections.
pub async fn register(
    State(state): State<ServerState>,
    owner: CurrentOwner,
    body: Bytes,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    let scope = state.scope_for(&owner);
    let registration = state.registration.register(&scope, &body).await?;

    state.broadcast_roster(&scope, RosterAction::Created, registration.employee.id);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: registration.message,
            employee: registration.employee,
        }),
    ))
}
