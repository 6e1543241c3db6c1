//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Notification relay request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NotificationRequest {
    /// Notification text.
    #[validate(length(min = 1, max = 4000))]
    pub message: String,
}

/// Named broadcast relay request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BroadcastRequest {
    /// Display name of the sender.
    #[validate(length(min = 1, max = 64))]
    pub sender: String,
    /// Broadcast text.
    #[validate(length(min = 1, max = 4000))]
    pub message: String,
}

/// Query parameters accepted on WebSocket upgrade.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WsQuery {
    /// Display name hint; unresolvable or missing names connect anonymously.
    pub user: Option<String>,
}
