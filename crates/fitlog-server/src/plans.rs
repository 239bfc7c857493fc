//! `/api/workout-plans` handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use fitlog_core::ids::PlanId;
use fitlog_core::models::{NewWorkoutPlan, WorkoutPlan};
use fitlog_core::patch::WorkoutPlanPatch;

use crate::error::ApiError;
use crate::server::AppState;

/// GET /api/workout-plans
pub async fn list(State(state): State<AppState>) -> Json<Vec<WorkoutPlan>> {
    Json(state.store.list_workout_plans())
}

/// GET /api/workout-plans/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<PlanId>,
) -> Result<Json<WorkoutPlan>, ApiError> {
    state
        .store
        .get_workout_plan(id)
        .map(Json)
        .ok_or(ApiError::NotFound("Workout plan"))
}

/// POST /api/workout-plans
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewWorkoutPlan>, JsonRejection>,
) -> Result<(StatusCode, Json<WorkoutPlan>), ApiError> {
    let Json(new) =
        payload.map_err(|e| ApiError::BadRequest(format!("Invalid workout plan data: {e}")))?;
    if new.name.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Invalid workout plan data: name must not be empty".into(),
        ));
    }
    Ok((StatusCode::CREATED, Json(state.store.create_workout_plan(new))))
}

/// PUT /api/workout-plans/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<PlanId>,
    payload: Result<Json<WorkoutPlanPatch>, JsonRejection>,
) -> Result<Json<WorkoutPlan>, ApiError> {
    let Json(patch) =
        payload.map_err(|e| ApiError::BadRequest(format!("Invalid workout plan data: {e}")))?;
    if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(ApiError::BadRequest(
            "Invalid workout plan data: name must not be empty".into(),
        ));
    }
    state
        .store
        .update_workout_plan(id, patch)
        .map(Json)
        .ok_or(ApiError::NotFound("Workout plan"))
}

/// DELETE /api/workout-plans/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<PlanId>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete_workout_plan(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Workout plan"))
    }
}
