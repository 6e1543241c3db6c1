//! Inbound and outbound hub message type definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::presence::view::PresenceEntry;

/// Messages sent by a client to the hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundMessage {
    /// Change the presence status of the sending connection.
    UpdateStatus {
        /// Requested status (`"Online"` or `"Away"`).
        status: String,
    },
    /// Relay a notification to every client.
    SendNotification {
        /// Notification text.
        message: String,
    },
    /// Relay a named broadcast to every client.
    SendBroadcast {
        /// Display name of the sender.
        sender: String,
        /// Broadcast text.
        message: String,
    },
}

/// Messages sent by the hub to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundMessage {
    /// Current presence view, sorted by user name.
    UserListUpdate {
        /// One entry per visible user.
        users: Vec<PresenceEntry>,
    },
    /// Relayed notification.
    Notification {
        /// Notification text.
        message: String,
        /// When the hub relayed it.
        timestamp: DateTime<Utc>,
    },
    /// Relayed broadcast.
    Broadcast {
        /// Display name of the sender.
        sender: String,
        /// Broadcast text.
        message: String,
        /// When the hub relayed it.
        timestamp: DateTime<Utc>,
    },
    /// Error reported to the offending connection only.
    Error {
        /// Error code.
        code: String,
        /// Error description.
        message: String,
    },
}
