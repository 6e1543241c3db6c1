//! User presence: status, derived view, and broadcast.

pub mod broadcaster;
pub mod status;
pub mod view;

pub use broadcaster::PresenceBroadcaster;
pub use status::PresenceStatus;
pub use view::{ANONYMOUS_USER, PresenceEntry, PresenceView};
