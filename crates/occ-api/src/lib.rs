//! # occ-api
//!
//! HTTP API layer for the OCC presence service built on Axum.
//!
//! Provides the WebSocket hub endpoint, presence and broadcast REST
//! endpoints, health checks, middleware (logging, CORS, tracing) and error
//! mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_app;
pub use state::AppState;
