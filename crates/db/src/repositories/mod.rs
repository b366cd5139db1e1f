//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Alongside the plain read
//! paths, both repos carry the sync-specific operations: provenance
//! -scoped bulk delete and single-statement bulk insert.

pub mod character_repo;
pub mod movie_repo;

pub use character_repo::CharacterRepo;
pub use movie_repo::MovieRepo;
