//! `/api/workout-sessions` handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use fitlog_core::ids::SessionId;
use fitlog_core::models::{NewWorkoutSession, WorkoutSession};
use fitlog_core::patch::WorkoutSessionPatch;

use crate::error::ApiError;
use crate::server::AppState;

const DEFAULT_RECENT_LIMIT: usize = 10;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Raw string so a non-numeric value falls back to the default instead
    /// of rejecting the request.
    pub recent: Option<String>,
}

/// GET /api/workout-sessions[?recent=N]
///
/// With `recent`, returns the N most recently started sessions, newest
/// first. An unparsable or zero N falls back to 10.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<WorkoutSession>> {
    match query.recent {
        Some(raw) => {
            let limit = raw
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_RECENT_LIMIT);
            Json(state.store.recent_workout_sessions(limit))
        }
        None => Json(state.store.list_workout_sessions()),
    }
}

/// GET /api/workout-sessions/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> Result<Json<WorkoutSession>, ApiError> {
    state
        .store
        .get_workout_session(id)
        .map(Json)
        .ok_or(ApiError::NotFound("Workout session"))
}

/// POST /api/workout-sessions
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewWorkoutSession>, JsonRejection>,
) -> Result<(StatusCode, Json<WorkoutSession>), ApiError> {
    let Json(new) =
        payload.map_err(|e| ApiError::BadRequest(format!("Invalid workout session data: {e}")))?;
    Ok((
        StatusCode::CREATED,
        Json(state.store.create_workout_session(new)),
    ))
}

/// PUT /api/workout-sessions/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
    payload: Result<Json<WorkoutSessionPatch>, JsonRejection>,
) -> Result<Json<WorkoutSession>, ApiError> {
    let Json(patch) =
        payload.map_err(|e| ApiError::BadRequest(format!("Invalid workout session data: {e}")))?;
    state
        .store
        .update_workout_session(id, patch)
        .map(Json)
        .ok_or(ApiError::NotFound("Workout session"))
}

/// DELETE /api/workout-sessions/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete_workout_session(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Workout session"))
    }
}
