//! Presence handlers.

use axum::Json;
use axum::extract::{Path, State};

use occ_core::error::AppError;
use occ_realtime::presence::PresenceEntry;

use crate::dto::response::{ApiResponse, PresenceResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/presence
pub async fn list_presence(State(state): State<AppState>) -> Json<ApiResponse<PresenceResponse>> {
    let view = state.realtime.presence_view();

    Json(ApiResponse::ok(PresenceResponse {
        users: view.into_entries(),
        connections: state.realtime.connections.connection_count(),
    }))
}

/// GET /api/presence/{user_name}
pub async fn get_user_presence(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
) -> Result<Json<ApiResponse<PresenceEntry>>, ApiError> {
    let status = state
        .realtime
        .presence_view()
        .status_of(&user_name)
        .ok_or_else(|| AppError::not_found(format!("User '{user_name}' is not connected")))?;

    Ok(Json(ApiResponse::ok(PresenceEntry { user_name, status })))
}
