//! Connection manager: hub lifecycle (connect, disconnect, status, inbound routing).

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use occ_core::config::RealtimeConfig;
use occ_core::result::AppResult;

use crate::message::builder;
use crate::message::serializer;
use crate::message::types::InboundMessage;
use crate::message::validator;
use crate::metrics::RealtimeMetrics;
use crate::presence::broadcaster::PresenceBroadcaster;
use crate::presence::status::PresenceStatus;
use crate::presence::view::ANONYMOUS_USER;

use super::authenticator::IdentityResolver;
use super::handle::{ClientHandle, ConnectionId};
use super::pool::ClientPool;
use super::registry::{ConnectionRecord, ConnectionRegistry};
use super::transport::ClientTransport;

/// Manages the lifecycle of every hub connection.
///
/// Connect and disconnect bookkeeping never fails from the caller's point of
/// view: broadcast errors are logged and dropped so a transport session is
/// never aborted by presence plumbing.
#[derive(Debug)]
pub struct ConnectionManager {
    /// Presence registry.
    registry: Arc<ConnectionRegistry>,
    /// Live client handles.
    pool: Arc<ClientPool>,
    /// Presence broadcaster.
    broadcaster: Arc<PresenceBroadcaster>,
    /// Display name resolution.
    resolver: Arc<dyn IdentityResolver>,
    /// Metrics.
    metrics: Arc<RealtimeMetrics>,
    /// Configuration.
    config: RealtimeConfig,
}

impl ConnectionManager {
    /// Creates a new connection manager.
    pub fn new(
        config: RealtimeConfig,
        registry: Arc<ConnectionRegistry>,
        pool: Arc<ClientPool>,
        broadcaster: Arc<PresenceBroadcaster>,
        resolver: Arc<dyn IdentityResolver>,
        metrics: Arc<RealtimeMetrics>,
    ) -> Self {
        Self {
            registry,
            pool,
            broadcaster,
            resolver,
            metrics,
            config,
        }
    }

    /// Registers a new transport connection.
    ///
    /// The client joins the pool before the presence update goes out, so it
    /// receives the user list that includes itself.
    pub async fn register(
        &self,
        user_hint: Option<&str>,
    ) -> (Arc<ClientHandle>, mpsc::Receiver<String>) {
        // tokio rejects zero-capacity channels
        let (tx, rx) = mpsc::channel(self.config.client_buffer_size.max(1));
        let handle = Arc::new(ClientHandle::new(ConnectionId::new(), tx));

        self.pool.add(handle.clone());
        self.on_connected(handle.id.clone(), user_hint).await;

        (handle, rx)
    }

    /// Unregisters a transport connection.
    pub async fn unregister(&self, conn_id: &ConnectionId) {
        if let Some(handle) = self.pool.remove(conn_id) {
            handle.mark_closed();
        }
        self.on_disconnected(conn_id).await;
    }

    /// Records a connection as Online under its resolved display name and
    /// broadcasts the new user list. Returns the resolved name.
    pub async fn on_connected(&self, conn_id: ConnectionId, user_hint: Option<&str>) -> String {
        let user_name = self
            .resolver
            .resolve(user_hint)
            .await
            .unwrap_or_else(|| ANONYMOUS_USER.to_string());

        if self
            .registry
            .insert(ConnectionRecord::online(conn_id.clone(), user_name.clone()))
            .is_some()
        {
            warn!(conn_id = %conn_id, "Connection id reused, previous record replaced");
        }
        self.metrics.connection_opened();

        info!(conn_id = %conn_id, user = %user_name, "Hub connection registered");

        self.broadcast_user_list_quietly(&conn_id).await;
        user_name
    }

    /// Removes a connection and broadcasts the new user list.
    ///
    /// Returns whether the connection was registered. Absent ids are a no-op
    /// apart from the broadcast.
    pub async fn on_disconnected(&self, conn_id: &ConnectionId) -> bool {
        let removed = self.registry.remove(conn_id);
        if let Some(record) = &removed {
            self.metrics.connection_closed();
            info!(
                conn_id = %conn_id,
                user = %record.user_name,
                "Hub connection unregistered"
            );
        } else {
            debug!(conn_id = %conn_id, "Disconnect for unknown connection ignored");
        }

        self.broadcast_user_list_quietly(conn_id).await;
        removed.is_some()
    }

    /// Updates the presence status of one connection.
    ///
    /// Unknown status strings are rejected without touching the registry.
    /// Returns `Ok(false)` when the connection is not registered.
    pub async fn update_status(&self, conn_id: &ConnectionId, status: &str) -> AppResult<bool> {
        let status: PresenceStatus = status.parse()?;

        if !self.registry.set_status(conn_id, status) {
            debug!(conn_id = %conn_id, "Status update for unknown connection ignored");
            return Ok(false);
        }

        debug!(conn_id = %conn_id, status = %status, "Presence status updated");
        self.broadcast_user_list_quietly(conn_id).await;
        Ok(true)
    }

    /// Processes a raw inbound message from a client.
    pub async fn handle_inbound(&self, conn_id: &ConnectionId, raw: &str) {
        self.metrics.message_received();

        if let Err(e) = validator::validate_inbound(raw, self.config.max_message_bytes) {
            self.reply_error(conn_id, "INVALID_MESSAGE", &e.message).await;
            return;
        }

        let msg = match serializer::deserialize_inbound(raw) {
            Ok(m) => m,
            Err(e) => {
                self.reply_error(
                    conn_id,
                    "INVALID_MESSAGE",
                    &format!("Failed to parse message: {}", e.message),
                )
                .await;
                return;
            }
        };

        match msg {
            InboundMessage::UpdateStatus { status } => {
                if let Err(e) = self.update_status(conn_id, &status).await {
                    self.reply_error(conn_id, "INVALID_STATUS", &e.message).await;
                }
            }
            InboundMessage::SendNotification { message } => {
                if let Err(e) = self.broadcaster.send_notification(&message).await {
                    warn!(conn_id = %conn_id, error = %e, "Notification relay failed");
                }
            }
            InboundMessage::SendBroadcast { sender, message } => {
                if let Err(e) = self.broadcaster.send_broadcast(&sender, &message).await {
                    warn!(conn_id = %conn_id, error = %e, "Broadcast relay failed");
                }
            }
        }
    }

    /// Closes every client handle (used during shutdown).
    pub async fn close_all(&self) {
        let all = self.pool.all_clients();
        for client in &all {
            client.mark_closed();
            self.pool.remove(&client.id);
            self.registry.remove(&client.id);
            self.metrics.connection_closed();
        }
        info!(count = all.len(), "All hub connections closed");
    }

    /// Returns the number of registered connections.
    pub fn connection_count(&self) -> usize {
        self.registry.len()
    }

    /// Returns a reference to the connection registry.
    pub fn registry(&self) -> &Arc<ConnectionRegistry> {
        &self.registry
    }

    /// Returns a reference to the client pool.
    pub fn pool(&self) -> &Arc<ClientPool> {
        &self.pool
    }

    async fn broadcast_user_list_quietly(&self, conn_id: &ConnectionId) {
        if let Err(e) = self.broadcaster.broadcast_user_list().await {
            warn!(conn_id = %conn_id, error = %e, "User list broadcast failed");
        }
    }

    async fn reply_error(&self, conn_id: &ConnectionId, code: &str, message: &str) {
        let error = builder::build_error(code, message);
        match self.pool.send_to(conn_id, &error).await {
            Ok(true) => {}
            Ok(false) => debug!(conn_id = %conn_id, code, "Error reply not delivered"),
            Err(e) => warn!(conn_id = %conn_id, error = %e, "Failed to send error reply"),
        }
    }
}
