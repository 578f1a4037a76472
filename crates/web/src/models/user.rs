//! User domain types.
//!
//! These types represent validated domain objects separate from
//! database row types. Users are created on signup and never mutated
//! or deleted afterwards.

use chrono::{DateTime, Utc};

use tasty_core::{Email, UserId};

/// A registered user (domain type).
///
/// The password hash stays inside the repository layer; it is not part
/// of the domain object.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name chosen at signup.
    pub username: String,
    /// User's email address (unique key).
    pub email: Email,
    /// When the user signed up.
    pub created_at: DateTime<Utc>,
}
