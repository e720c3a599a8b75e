//! Login sessions and role-based visibility

mod access;
mod auth;

pub use access::{can_view, ensure_visible, visible_resources, Resource};
pub use auth::{authenticate, AuthTokens, Session, SessionManager, SessionState};
