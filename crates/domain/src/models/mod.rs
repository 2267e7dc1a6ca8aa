//! Domain models for the client manager.

pub mod person;
pub mod phone;
pub mod search;

pub use person::{Person, PersonChanges, PersonField, UnknownPersonField};
pub use phone::{ClientRecord, PhoneOwner};
pub use search::PersonFilter;
