//! Identity resolution: maps a connect-time hint to a display name.

use async_trait::async_trait;

use crate::message::validator;

/// Resolves the display name a connection is registered under.
///
/// Returning `None` registers the connection as the anonymous user.
#[async_trait]
pub trait IdentityResolver: Send + Sync + std::fmt::Debug {
    /// Resolves a display name from the hint supplied by the transport.
    async fn resolve(&self, hint: Option<&str>) -> Option<String>;
}

/// Accepts the client-supplied display name after trimming and validation.
#[derive(Debug, Clone)]
pub struct DisplayNameResolver {
    max_length: usize,
}

impl DisplayNameResolver {
    /// Creates a resolver that rejects names longer than `max_length` chars.
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }
}

#[async_trait]
impl IdentityResolver for DisplayNameResolver {
    async fn resolve(&self, hint: Option<&str>) -> Option<String> {
        let name = hint?.trim();
        match validator::validate_display_name(name, self.max_length) {
            Ok(()) => Some(name.to_string()),
            Err(e) => {
                tracing::debug!(error = %e, "Unresolvable display name");
                None
            }
        }
    }
}
