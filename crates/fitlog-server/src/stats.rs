//! `/api/statistics` handlers.

use axum::extract::State;
use axum::Json;

use fitlog_core::stats::WeeklyStats;

use crate::server::AppState;

/// GET /api/statistics/weekly
pub async fn weekly(State(state): State<AppState>) -> Json<WeeklyStats> {
    Json(state.store.weekly_stats())
}
