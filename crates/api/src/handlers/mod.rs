//! Request handlers.
//!
//! Catalog handlers delegate to the search aggregator and detail composer
//! in `cinedex_core` over `AppState::catalog`; account handlers use the
//! `cinedex_db` repositories directly. Errors map through [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod auth;
pub mod lookups;
pub mod movies;
pub mod people;
pub mod profile;
pub mod search;
