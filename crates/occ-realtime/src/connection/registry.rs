//! Connection registry: live connections and their transient presence status.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::presence::status::PresenceStatus;

use super::handle::ConnectionId;

/// One live connection as seen by the presence subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    /// Transport-assigned connection ID
    pub connection_id: ConnectionId,
    /// Resolved display name
    pub user_name: String,
    /// When the connection was registered
    pub connected_at: DateTime<Utc>,
    /// Current presence status of this connection
    pub status: PresenceStatus,
}

impl ConnectionRecord {
    /// Create a record for a freshly connected client (status Online).
    pub fn online(connection_id: ConnectionId, user_name: impl Into<String>) -> Self {
        Self {
            connection_id,
            user_name: user_name.into(),
            connected_at: Utc::now(),
            status: PresenceStatus::Online,
        }
    }
}

/// Thread-safe map of connection ID → connection record.
///
/// Each operation is atomic per entry; there is no lock spanning the whole
/// registry, so a [`snapshot`](Self::snapshot) may race with concurrent
/// mutations.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    records: DashMap<ConnectionId, ConnectionRecord>,
}

impl ConnectionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Inserts a record, returning the one it replaced (if the id was reused).
    pub fn insert(&self, record: ConnectionRecord) -> Option<ConnectionRecord> {
        self.records.insert(record.connection_id.clone(), record)
    }

    /// Removes a record. Absent ids are ignored.
    pub fn remove(&self, conn_id: &ConnectionId) -> Option<ConnectionRecord> {
        self.records.remove(conn_id).map(|(_, record)| record)
    }

    /// Overwrites the status of an existing connection.
    ///
    /// Returns `false` when the connection is not registered.
    pub fn set_status(&self, conn_id: &ConnectionId, status: PresenceStatus) -> bool {
        match self.records.get_mut(conn_id) {
            Some(mut record) => {
                record.status = status;
                true
            }
            None => false,
        }
    }

    /// Returns a copy of one record.
    pub fn get(&self, conn_id: &ConnectionId) -> Option<ConnectionRecord> {
        self.records.get(conn_id).map(|r| r.value().clone())
    }

    /// Point-in-time copy of every record.
    pub fn snapshot(&self) -> Vec<ConnectionRecord> {
        self.records.iter().map(|r| r.value().clone()).collect()
    }

    /// Number of connections registered under a display name.
    pub fn user_connection_count(&self, user_name: &str) -> usize {
        self.records
            .iter()
            .filter(|r| r.value().user_name == user_name)
            .count()
    }

    /// Total number of registered connections.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no connections are registered.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
