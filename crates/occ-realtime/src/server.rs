//! Top-level real-time engine that ties together all hub subsystems.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::info;

use occ_core::config::RealtimeConfig;
use occ_core::error::AppError;

use crate::connection::authenticator::{DisplayNameResolver, IdentityResolver};
use crate::connection::manager::ConnectionManager;
use crate::connection::pool::ClientPool;
use crate::connection::registry::ConnectionRegistry;
use crate::connection::transport::ClientTransport;
use crate::metrics::RealtimeMetrics;
use crate::presence::broadcaster::PresenceBroadcaster;
use crate::presence::view::PresenceView;

/// Central real-time engine that owns the presence hub.
///
/// Every component is created here and shared by `Arc`; nothing lives in
/// process-wide statics.
#[derive(Clone)]
pub struct RealtimeEngine {
    /// Connection manager.
    pub connections: Arc<ConnectionManager>,
    /// Connection registry.
    pub registry: Arc<ConnectionRegistry>,
    /// Presence broadcaster.
    pub broadcaster: Arc<PresenceBroadcaster>,
    /// Metrics collector.
    pub metrics: Arc<RealtimeMetrics>,
    /// Shutdown signal sender.
    shutdown_tx: broadcast::Sender<()>,
}

impl std::fmt::Debug for RealtimeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RealtimeEngine")
            .field("connections", &self.registry.len())
            .finish()
    }
}

impl RealtimeEngine {
    /// Creates a new engine that trusts the client-supplied display name.
    pub fn new(config: &RealtimeConfig) -> Self {
        let resolver = Arc::new(DisplayNameResolver::new(config.max_display_name_length));
        Self::with_resolver(config, resolver)
    }

    /// Creates a new engine with a custom identity resolver.
    pub fn with_resolver(config: &RealtimeConfig, resolver: Arc<dyn IdentityResolver>) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);

        let metrics = Arc::new(RealtimeMetrics::new());
        let registry = Arc::new(ConnectionRegistry::new());
        let pool = Arc::new(ClientPool::new());
        let transport: Arc<dyn ClientTransport> = pool.clone();
        let broadcaster = Arc::new(PresenceBroadcaster::new(
            registry.clone(),
            transport,
            metrics.clone(),
        ));
        let connections = Arc::new(ConnectionManager::new(
            config.clone(),
            registry.clone(),
            pool,
            broadcaster.clone(),
            resolver,
            metrics.clone(),
        ));

        info!("Real-time engine initialized");

        Self {
            connections,
            registry,
            broadcaster,
            metrics,
            shutdown_tx,
        }
    }

    /// Current presence view.
    pub fn presence_view(&self) -> PresenceView {
        self.broadcaster.current_view()
    }

    /// Returns a shutdown receiver for graceful shutdown coordination.
    pub fn shutdown_receiver(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    /// Initiates a graceful shutdown of the real-time engine.
    pub async fn shutdown(&self) -> Result<(), AppError> {
        info!("Shutting down real-time engine");

        // Signal all connection tasks to stop
        let _ = self.shutdown_tx.send(());

        self.connections.close_all().await;

        info!("Real-time engine shut down");
        Ok(())
    }
}
