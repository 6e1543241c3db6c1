//! Presence view: the per-user projection of the connection registry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::connection::registry::ConnectionRecord;

use super::status::PresenceStatus;

/// Display name given to connections whose identity could not be resolved.
/// Never shown in the presence view.
pub const ANONYMOUS_USER: &str = "Anonymous";

/// One user in the presence view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceEntry {
    /// Display name
    pub user_name: String,
    /// Aggregated status across the user's connections
    pub status: PresenceStatus,
}

/// Deduplicated, sorted list of visible users.
///
/// A user is Online if any of their connections is Online. Otherwise the
/// status comes from their earliest connection (ties broken by connection
/// id), which keeps the result stable across evaluations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresenceView {
    entries: Vec<PresenceEntry>,
}

impl PresenceView {
    /// Projects a set of connection records into a view.
    pub fn project<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ConnectionRecord>,
    {
        let mut candidates: Vec<&ConnectionRecord> = records
            .into_iter()
            .filter(|r| r.user_name != ANONYMOUS_USER)
            .collect();
        candidates.sort_by(|a, b| {
            a.connected_at
                .cmp(&b.connected_at)
                .then_with(|| a.connection_id.cmp(&b.connection_id))
        });

        // BTreeMap over &str orders by bytes, i.e. ordinal comparison.
        let mut by_user: BTreeMap<&str, PresenceStatus> = BTreeMap::new();
        for record in candidates {
            by_user
                .entry(record.user_name.as_str())
                .and_modify(|status| {
                    if record.status.is_online() {
                        *status = PresenceStatus::Online;
                    }
                })
                .or_insert(record.status);
        }

        let entries = by_user
            .into_iter()
            .map(|(user_name, status)| PresenceEntry {
                user_name: user_name.to_string(),
                status,
            })
            .collect();

        Self { entries }
    }

    /// Entries in user-name order.
    pub fn entries(&self) -> &[PresenceEntry] {
        &self.entries
    }

    /// Consumes the view, returning its entries.
    pub fn into_entries(self) -> Vec<PresenceEntry> {
        self.entries
    }

    /// Status of a single user, if visible.
    pub fn status_of(&self, user_name: &str) -> Option<PresenceStatus> {
        self.entries
            .iter()
            .find(|e| e.user_name == user_name)
            .map(|e| e.status)
    }

    /// Number of visible users.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no users are visible.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
