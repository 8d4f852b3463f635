//! Read-only record endpoints backed by the cached view state.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use store::WaterRecord;

use crate::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<WaterRecord>> {
    Json(state.monitor.view().await.history)
}

pub async fn latest(
    State(state): State<AppState>,
) -> Result<Json<WaterRecord>, StatusCode> {
    match state.monitor.view().await.latest {
        Some(record) => Ok(Json(record)),
        None => Err(StatusCode::NOT_FOUND),
    }
}
