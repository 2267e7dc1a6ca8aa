//! Domain layer for the client manager.
//!
//! This crate contains:
//! - Domain models (Person, PhoneOwner, ClientRecord)
//! - The partial-update change set and its column allow-list
//! - Search criteria for person lookups

pub mod models;
