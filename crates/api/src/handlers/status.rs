//! In-flight status for the dashboard header.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct StatusDto {
    pub loading: bool,
    pub updating: bool,
    pub last_error: Option<String>,
}

pub async fn get(State(state): State<AppState>) -> Json<StatusDto> {
    let view = state.monitor.view().await;
    Json(StatusDto {
        loading: view.loading,
        updating: view.updating,
        last_error: view.last_error,
    })
}
