//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod person;
pub mod phone;

pub use person::PersonEntity;
pub use phone::{ClientRecordEntity, PhoneOwnerEntity};
