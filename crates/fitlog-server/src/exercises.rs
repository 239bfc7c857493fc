//! `/api/exercises` handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use fitlog_core::ids::ExerciseId;
use fitlog_core::models::{Exercise, NewExercise};
use fitlog_core::patch::ExercisePatch;

use crate::error::ApiError;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

/// GET /api/exercises[?category=]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Exercise>> {
    match query.category {
        Some(category) => Json(state.store.list_exercises_by_category(&category)),
        None => Json(state.store.list_exercises()),
    }
}

/// GET /api/exercises/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<ExerciseId>,
) -> Result<Json<Exercise>, ApiError> {
    state
        .store
        .get_exercise(id)
        .map(Json)
        .ok_or(ApiError::NotFound("Exercise"))
}

/// POST /api/exercises
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewExercise>, JsonRejection>,
) -> Result<(StatusCode, Json<Exercise>), ApiError> {
    let Json(new) = payload.map_err(|e| ApiError::BadRequest(format!("Invalid exercise data: {e}")))?;
    if new.name.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Invalid exercise data: name must not be empty".into(),
        ));
    }
    Ok((StatusCode::CREATED, Json(state.store.create_exercise(new))))
}

/// PUT /api/exercises/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ExerciseId>,
    payload: Result<Json<ExercisePatch>, JsonRejection>,
) -> Result<Json<Exercise>, ApiError> {
    let Json(patch) =
        payload.map_err(|e| ApiError::BadRequest(format!("Invalid exercise data: {e}")))?;
    if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(ApiError::BadRequest(
            "Invalid exercise data: name must not be empty".into(),
        ));
    }
    state
        .store
        .update_exercise(id, patch)
        .map(Json)
        .ok_or(ApiError::NotFound("Exercise"))
}

/// DELETE /api/exercises/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<ExerciseId>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete_exercise(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Exercise"))
    }
}
