//! Session, authentication, and identity-resolution middleware.

pub mod auth;
pub mod identity;
pub mod session;

pub use auth::{OptionalAuth, clear_current_user, set_current_user};
pub use session::create_session_layer;
