//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct
//! matching the database row, plus the thin read DTOs the API serves.
//! Sync inserts take the transfer records from `holocron_core::ingest`
//! directly, so there are no separate create DTOs here.

pub mod character;
pub mod movie;
pub mod provenance;
