pub mod access;
pub mod auth;
pub mod guest;
pub mod landing;
pub mod trial;
pub mod union;

use crate::types::decision::Decision;
use crate::types::session::Session;

/// A route guard decides, from a session snapshot alone, whether the route
/// it wraps may mount, must wait, or must redirect.
///
/// Implementations are pure: no clock, no randomness, no I/O, and identical
/// snapshots always produce identical decisions.
pub trait Guard: Send + Sync {
    fn decide(&self, session: &Session) -> Decision;
}
