//! Connection management: registry, client pool, handles, identity, lifecycle.

pub mod authenticator;
pub mod handle;
pub mod manager;
pub mod pool;
pub mod registry;
pub mod transport;

pub use handle::{ClientHandle, ConnectionId};
pub use manager::ConnectionManager;
pub use pool::ClientPool;
pub use registry::{ConnectionRecord, ConnectionRegistry};
pub use transport::{ClientTransport, DeliveryReport};
