//! Person entity (database row mapping).

use domain::models::Person;
use sqlx::FromRow;

/// Database row mapping for the persons table.
#[derive(Debug, Clone, FromRow)]
pub struct PersonEntity {
    pub id: i32,
    pub first_name: String,
    pub second_name: String,
    pub email: String,
}

impl From<PersonEntity> for Person {
    fn from(entity: PersonEntity) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            second_name: entity.second_name,
            email: entity.email,
        }
    }
}
