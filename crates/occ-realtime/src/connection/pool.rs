//! Client pool: the live client handles that broadcasts fan out to.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use occ_core::result::AppResult;

use crate::message::serializer;
use crate::message::types::OutboundMessage;

use super::handle::{ClientHandle, ConnectionId};
use super::transport::{ClientTransport, DeliveryReport};

/// Thread-safe pool of connected client handles.
#[derive(Debug, Default)]
pub struct ClientPool {
    /// Connection ID → client handle.
    by_id: DashMap<ConnectionId, Arc<ClientHandle>>,
}

impl ClientPool {
    /// Creates a new empty client pool.
    pub fn new() -> Self {
        Self {
            by_id: DashMap::new(),
        }
    }

    /// Adds a client to the pool.
    pub fn add(&self, handle: Arc<ClientHandle>) {
        self.by_id.insert(handle.id.clone(), handle);
    }

    /// Removes a client from the pool.
    pub fn remove(&self, conn_id: &ConnectionId) -> Option<Arc<ClientHandle>> {
        self.by_id.remove(conn_id).map(|(_, handle)| handle)
    }

    /// Gets a specific client by ID.
    pub fn get(&self, conn_id: &ConnectionId) -> Option<Arc<ClientHandle>> {
        self.by_id.get(conn_id).map(|entry| entry.value().clone())
    }

    /// Returns all client handles.
    pub fn all_clients(&self) -> Vec<Arc<ClientHandle>> {
        self.by_id
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Returns total number of clients.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[async_trait]
impl ClientTransport for ClientPool {
    async fn send_all(&self, message: &OutboundMessage) -> AppResult<DeliveryReport> {
        let payload = serializer::serialize_outbound(message)?;

        // Snapshot first so no shard lock is held while queueing.
        let clients = self.all_clients();
        let mut report = DeliveryReport::default();
        for client in &clients {
            if client.send(payload.clone()) {
                report.delivered += 1;
            } else {
                report.failed += 1;
            }
        }
        Ok(report)
    }

    async fn send_to(&self, conn_id: &ConnectionId, message: &OutboundMessage) -> AppResult<bool> {
        let Some(client) = self.get(conn_id) else {
            return Ok(false);
        };
        let payload = serializer::serialize_outbound(message)?;
        Ok(client.send(payload))
    }
}
