//! Row structs and DTOs.
//!
//! Catalog rows convert into the `cinedex_core` view models; account rows
//! stay local to this crate and the API.

pub mod movie;
pub mod person;
pub mod user;
