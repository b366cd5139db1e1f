//! Domain logic for the Holocron movie catalog.
//!
//! This crate is pure: no database, no HTTP, no async I/O. It defines the
//! shared types, the error taxonomy, the upstream catalog contract, the
//! movie admission policy, and the relationship reconciler. Everything
//! here is exercised by the `holocron-sync` coordinator and the
//! persistence layer in `holocron-db`.

pub mod catalog;
pub mod error;
pub mod ingest;
pub mod reconcile;
pub mod types;
