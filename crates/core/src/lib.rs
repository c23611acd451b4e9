//! Domain-level building blocks shared by the CitySync backend crates.
//!
//! Contains the error type surfaced to the API layer, shared type aliases,
//! and the field validators for the directory entities.

pub mod directory;
pub mod error;
pub mod types;
