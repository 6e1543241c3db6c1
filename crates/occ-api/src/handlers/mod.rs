//! Request handlers.

pub mod broadcast;
pub mod health;
pub mod presence;
pub mod ws;
