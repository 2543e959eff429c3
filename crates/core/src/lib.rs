//! Cinedex domain core.
//!
//! Pure domain logic with no database dependencies: shared types, the
//! error taxonomy, search helpers, and the catalog components (search
//! aggregation and detail composition) that run against any
//! [`catalog::CatalogSource`].

pub mod catalog;
pub mod error;
pub mod search;
pub mod types;
