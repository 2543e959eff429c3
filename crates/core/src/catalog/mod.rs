//! Movie catalog: read models, the storage seam, and the two request-scoped
//! components built on it.
//!
//! - [`search`] -- the search aggregator (tiered ranking, pagination).
//! - [`detail`] -- the detail composer (movie / actor / director pages).
//! - [`gender`] -- dominant credited gender resolution for actor pages.
//! - [`source`] -- the [`CatalogSource`] trait the store implements.

pub mod detail;
pub mod gender;
pub mod model;
pub mod search;
pub mod source;

pub use source::{CatalogError, CatalogSource};

#[cfg(test)]
pub(crate) mod test_support;
