//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument. User-supplied text is always
//! bound as a parameter; `ILIKE` patterns come from `cinedex_core::search`.

pub mod lookup_repo;
pub mod movie_repo;
pub mod person_repo;
pub mod user_repo;

pub use lookup_repo::LookupRepo;
pub use movie_repo::MovieRepo;
pub use person_repo::PersonRepo;
pub use user_repo::UserRepo;
