//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use occ_core::config::AppConfig;
use occ_realtime::server::RealtimeEngine;

/// Shared state handed to every handler through Axum's `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Real-time presence engine.
    pub realtime: Arc<RealtimeEngine>,
    /// Process start time, for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    /// Builds the state, creating a fresh real-time engine from configuration.
    pub fn new(config: AppConfig) -> Self {
        let realtime = Arc::new(RealtimeEngine::new(&config.realtime));
        Self {
            config: Arc::new(config),
            realtime,
            started_at: Instant::now(),
        }
    }
}
