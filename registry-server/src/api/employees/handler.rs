//! Employee API Handlers

use std::convert::Infallible;

use axum::{
    Json,
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
};
use futures::Stream;
use shared::models::{DeleteResponse, Employee};

use crate::auth::CurrentOwner;
use crate::core::ServerState;
use crate::live::RosterAction;
use crate::utils::{AppError, AppResult};

/// SSE event name for roster snapshots
const ROSTER_EVENT: &str = "roster";

/// List the caller's employees, sorted by name
pub async fn list(
    State(state): State<ServerState>,
    owner: CurrentOwner,
) -> AppResult<Json<Vec<Employee>>> {
    let scope = state.scope_for(&owner);
    let employees = state.store.list(&scope).await?;
    Ok(Json(employees))
}

/// Live roster feed
///
/// Sends the current set first, then the full set again after every change
/// in the caller's collection.
pub async fn stream(
    State(state): State<ServerState>,
    owner: CurrentOwner,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let scope = state.scope_for(&owner);
    let subscription = state.roster.subscribe(scope, state.store.clone());

    let events = futures::stream::unfold(subscription, |mut subscription| async move {
        let Some(next) = subscription.next().await else {
            return None;
        };
        let event = match next {
            Ok(snapshot) => Event::default()
                .event(ROSTER_EVENT)
                .json_data(&snapshot)
                .unwrap_or_else(|e| {
                    tracing::error!(error = %e, "Failed to encode roster snapshot");
                    error_event()
                }),
            Err(e) => {
                tracing::error!(
                    collection = %subscription.scope(),
                    error = %e,
                    "Roster refresh failed"
                );
                error_event()
            }
        };
        Some((Ok::<_, Infallible>(event), subscription))
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}

fn error_event() -> Event {
    Event::default()
        .event("error")
        .data("Could not load employees. Retrying on the next change.")
}

/// Delete one of the caller's employees
pub async fn delete(
    State(state): State<ServerState>,
    owner: CurrentOwner,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::invalid_request(format!("Invalid employee id: {}", id)))?;

    let scope = state.scope_for(&owner);
    if !state.store.delete(&scope, id).await? {
        return Err(AppError::employee_not_found(id));
    }

    state.broadcast_roster(&scope, RosterAction::Deleted, id);
    tracing::info!(collection = %scope, id, "Employee deleted");

    Ok(Json(DeleteResponse {
        message: format!("Employee {} deleted.", id),
        id,
    }))
}
