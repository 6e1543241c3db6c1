//! Response DTOs.

use serde::{Deserialize, Serialize};

use occ_realtime::metrics::MetricsSnapshot;
use occ_realtime::presence::PresenceEntry;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Current presence view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceResponse {
    /// Visible users sorted by name.
    pub users: Vec<PresenceEntry>,
    /// Registered connections, including anonymous ones.
    pub connections: usize,
}

/// Result of a relay to all clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryResponse {
    /// Clients the message was queued for.
    pub delivered: usize,
    /// Clients that could not accept it.
    pub failed: usize,
}

/// Basic health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Seconds since startup.
    pub uptime_seconds: u64,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Registered hub connections.
    pub ws_connections: usize,
    /// Users visible in the presence view.
    pub online_users: usize,
    /// Hub counters.
    pub metrics: MetricsSnapshot,
}
