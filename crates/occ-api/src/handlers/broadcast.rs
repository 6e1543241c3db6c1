//! Notification and broadcast relay handlers.

use axum::Json;
use axum::extract::State;
use tracing::info;
use validator::Validate;

use crate::dto::request::{BroadcastRequest, NotificationRequest};
use crate::dto::response::{ApiResponse, DeliveryResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/notifications
pub async fn send_notification(
    State(state): State<AppState>,
    Json(req): Json<NotificationRequest>,
) -> Result<Json<ApiResponse<DeliveryResponse>>, ApiError> {
    req.validate()?;

    let report = state
        .realtime
        .broadcaster
        .send_notification(&req.message)
        .await?;

    info!(delivered = report.delivered, "Notification relayed");

    Ok(Json(ApiResponse::ok(DeliveryResponse {
        delivered: report.delivered,
        failed: report.failed,
    })))
}

/// POST /api/broadcast
pub async fn send_broadcast(
    State(state): State<AppState>,
    Json(req): Json<BroadcastRequest>,
) -> Result<Json<ApiResponse<DeliveryResponse>>, ApiError> {
    req.validate()?;

    let report = state
        .realtime
        .broadcaster
        .send_broadcast(&req.sender, &req.message)
        .await?;

    info!(
        sender = %req.sender,
        delivered = report.delivered,
        "Broadcast relayed"
    );

    Ok(Json(ApiResponse::ok(DeliveryResponse {
        delivered: report.delivered,
        failed: report.failed,
    })))
}
