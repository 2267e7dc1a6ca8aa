//! Phone entities (database row mappings).

use domain::models::{ClientRecord, PhoneOwner};
use sqlx::FromRow;

/// Row returned by phone inserts: the number and its owner.
#[derive(Debug, Clone, FromRow)]
pub struct PhoneOwnerEntity {
    pub phone: String,
    pub person_id: i32,
}

impl From<PhoneOwnerEntity> for PhoneOwner {
    fn from(entity: PhoneOwnerEntity) -> Self {
        Self {
            phone: entity.phone,
            person_id: entity.person_id,
        }
    }
}

/// Row of the persons/phones join used by person search.
#[derive(Debug, Clone, FromRow)]
pub struct ClientRecordEntity {
    pub person_id: i32,
    pub first_name: String,
    pub second_name: String,
    pub email: String,
    pub phone_id: i32,
    pub phone: Option<String>,
}

impl From<ClientRecordEntity> for ClientRecord {
    fn from(entity: ClientRecordEntity) -> Self {
        Self {
            person_id: entity.person_id,
            first_name: entity.first_name,
            second_name: entity.second_name,
            email: entity.email,
            phone_id: entity.phone_id,
            phone: entity.phone,
        }
    }
}
