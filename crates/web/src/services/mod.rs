//! Application services: the order and auth workflows plus the Google
//! OAuth client.

pub mod auth;
pub mod google;
pub mod orders;
