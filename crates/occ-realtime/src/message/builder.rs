//! Builder helpers for constructing outbound messages.

use chrono::Utc;

use crate::presence::view::PresenceView;

use super::types::OutboundMessage;

/// Build a user list update from a presence view
pub fn build_user_list(view: PresenceView) -> OutboundMessage {
    OutboundMessage::UserListUpdate {
        users: view.into_entries(),
    }
}

/// Build a relayed notification
pub fn build_notification(message: &str) -> OutboundMessage {
    OutboundMessage::Notification {
        message: message.to_string(),
        timestamp: Utc::now(),
    }
}

/// Build a relayed broadcast
pub fn build_broadcast(sender: &str, message: &str) -> OutboundMessage {
    OutboundMessage::Broadcast {
        sender: sender.to_string(),
        message: message.to_string(),
        timestamp: Utc::now(),
    }
}

/// Build an error message
pub fn build_error(code: &str, message: &str) -> OutboundMessage {
    OutboundMessage::Error {
        code: code.to_string(),
        message: message.to_string(),
    }
}
