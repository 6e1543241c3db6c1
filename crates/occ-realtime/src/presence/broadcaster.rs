//! Presence broadcaster: publishes the presence view and relays broadcasts.

use std::sync::Arc;

use tracing::debug;

use occ_core::result::AppResult;

use crate::connection::registry::ConnectionRegistry;
use crate::connection::transport::{ClientTransport, DeliveryReport};
use crate::message::builder;
use crate::message::types::OutboundMessage;
use crate::metrics::RealtimeMetrics;

use super::view::PresenceView;

/// Derives the presence view from the registry and pushes it to all clients.
#[derive(Debug)]
pub struct PresenceBroadcaster {
    registry: Arc<ConnectionRegistry>,
    transport: Arc<dyn ClientTransport>,
    metrics: Arc<RealtimeMetrics>,
}

impl PresenceBroadcaster {
    /// Creates a broadcaster over the given registry and transport.
    pub fn new(
        registry: Arc<ConnectionRegistry>,
        transport: Arc<dyn ClientTransport>,
        metrics: Arc<RealtimeMetrics>,
    ) -> Self {
        Self {
            registry,
            transport,
            metrics,
        }
    }

    /// Computes the presence view from the current registry contents.
    pub fn current_view(&self) -> PresenceView {
        PresenceView::project(&self.registry.snapshot())
    }

    /// Sends the current presence view to every connected client.
    ///
    /// The view is snapshotted before the fan-out and the two steps are not
    /// atomic. When lifecycle events race on different workers, an older
    /// snapshot can reach a client after a newer one, and the client keeps
    /// that list until the next presence change triggers another broadcast.
    pub async fn broadcast_user_list(&self) -> AppResult<DeliveryReport> {
        let view = self.current_view();
        let users = view.len();
        let report = self.send(&builder::build_user_list(view)).await?;
        self.metrics.user_list_broadcast();

        debug!(
            users,
            delivered = report.delivered,
            failed = report.failed,
            "User list broadcast"
        );
        Ok(report)
    }

    /// Relays a notification verbatim to every connected client.
    pub async fn send_notification(&self, message: &str) -> AppResult<DeliveryReport> {
        self.send(&builder::build_notification(message)).await
    }

    /// Relays a named broadcast verbatim to every connected client.
    pub async fn send_broadcast(&self, sender: &str, message: &str) -> AppResult<DeliveryReport> {
        self.send(&builder::build_broadcast(sender, message)).await
    }

    async fn send(&self, message: &OutboundMessage) -> AppResult<DeliveryReport> {
        let report = self.transport.send_all(message).await?;
        self.metrics
            .record_delivery(report.delivered, report.failed);
        Ok(report)
    }
}
