//! Persistence layer for the client manager.
//!
//! This crate contains:
//! - Database connection setup
//! - Schema definition
//! - Entity definitions (database row mappings)
//! - The client repository (person and phone operations)

pub mod db;
pub mod entities;
pub mod error;
pub mod metrics;
pub mod repositories;
pub mod schema;

pub use error::{ConstraintKind, StoreError, StoreResult};
