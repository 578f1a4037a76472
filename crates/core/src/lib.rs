//! Shared domain types for Tasty.
//!
//! Validated newtypes used across the workspace: email addresses,
//! type-safe entity IDs, and prices.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::email::{Email, EmailError};
pub use types::id::{MenuItemId, RestaurantId, UserId};
pub use types::price::{CurrencyCode, Price};
