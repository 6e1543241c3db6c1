//! Real-time hub configuration.

use serde::{Deserialize, Serialize};

/// Real-time (WebSocket) hub configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Outbound buffer size per client before messages are dropped.
    #[serde(default = "default_client_buffer")]
    pub client_buffer_size: usize,
    /// Maximum accepted inbound message size in bytes.
    #[serde(default = "default_max_message_bytes")]
    pub max_message_bytes: usize,
    /// Display names longer than this resolve to the anonymous user.
    #[serde(default = "default_max_display_name")]
    pub max_display_name_length: usize,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            client_buffer_size: default_client_buffer(),
            max_message_bytes: default_max_message_bytes(),
            max_display_name_length: default_max_display_name(),
        }
    }
}

fn default_client_buffer() -> usize {
    256
}

fn default_max_message_bytes() -> usize {
    65_536
}

fn default_max_display_name() -> usize {
    64
}
