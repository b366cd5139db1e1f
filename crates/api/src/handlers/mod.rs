//! HTTP handlers, one module per resource.

pub mod character;
pub mod movie;
pub mod sync;
