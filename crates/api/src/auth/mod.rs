//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- HS256 access-token generation and validation.
//! - [`cookies`] -- `Set-Cookie` construction and `Cookie` header parsing.

pub mod cookies;
pub mod jwt;
pub mod password;
