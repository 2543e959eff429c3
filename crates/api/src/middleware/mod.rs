//! Request extractors.
//!
//! - [`auth::AuthUser`] -- the authenticated user, from the access-token
//!   cookie or a Bearer token.

pub mod auth;
