//! JSON serialization for hub messages.

use occ_core::result::AppResult;

use super::types::{InboundMessage, OutboundMessage};

/// Serialize an outbound message
pub fn serialize_outbound(msg: &OutboundMessage) -> AppResult<String> {
    Ok(serde_json::to_string(msg)?)
}

/// Deserialize an inbound message from JSON
pub fn deserialize_inbound(text: &str) -> AppResult<InboundMessage> {
    Ok(serde_json::from_str(text)?)
}
