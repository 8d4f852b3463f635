//! Manual refresh trigger.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use monitor::{MonitorError, RefreshOutcome};
use store::{StoreError, WaterRecord};

use crate::AppState;

pub async fn trigger(
    State(state): State<AppState>,
) -> Result<Json<WaterRecord>, (StatusCode, String)> {
    match state.monitor.refresh().await {
        Ok(RefreshOutcome::Completed(record)) => Ok(Json(record)),
        Ok(RefreshOutcome::AlreadyRunning) => Err((
            StatusCode::CONFLICT,
            "a refresh cycle is already in flight".into(),
        )),
        Err(e) => Err((error_status(&e), e.to_string())),
    }
}

fn error_status(err: &MonitorError) -> StatusCode {
    match err {
        MonitorError::Transport(_) => StatusCode::BAD_GATEWAY,
        MonitorError::Extract(_) | MonitorError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        MonitorError::Store(StoreError::AccessDenied { .. }) => StatusCode::FORBIDDEN,
        MonitorError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
