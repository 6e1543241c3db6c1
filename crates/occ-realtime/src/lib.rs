//! # occ-realtime
//!
//! Real-time presence hub for OCC. Provides:
//!
//! - A concurrent connection registry keyed by transport connection id
//! - The derived presence view (one entry per user, Online wins)
//! - Broadcast of the user list, notifications and free-form broadcasts
//! - Connection lifecycle management for the WebSocket transport

pub mod connection;
pub mod message;
pub mod metrics;
pub mod presence;
pub mod server;

pub use connection::manager::ConnectionManager;
pub use connection::registry::ConnectionRegistry;
pub use presence::broadcaster::PresenceBroadcaster;
pub use presence::view::PresenceView;
pub use server::RealtimeEngine;
