//! Outbound delivery seam between the hub and the network transport.

use async_trait::async_trait;

use occ_core::result::AppResult;

use crate::message::types::OutboundMessage;

use super::handle::ConnectionId;

/// Outcome of a fan-out send.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    /// Clients the message was queued for.
    pub delivered: usize,
    /// Clients whose queue was full or closed.
    pub failed: usize,
}

/// Delivers outbound messages to connected clients.
///
/// Delivery is fire-and-forget: a client that misses a message simply gets
/// the next one.
#[async_trait]
pub trait ClientTransport: Send + Sync + std::fmt::Debug {
    /// Sends a message to every connected client.
    async fn send_all(&self, message: &OutboundMessage) -> AppResult<DeliveryReport>;

    /// Sends a message to a single client. Returns `false` if it is unknown
    /// or could not accept the message.
    async fn send_to(&self, conn_id: &ConnectionId, message: &OutboundMessage) -> AppResult<bool>;
}
