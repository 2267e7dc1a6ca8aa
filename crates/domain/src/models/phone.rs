//! Phone domain models.

use serde::{Deserialize, Serialize};

use super::person::Person;

/// A phone number together with the person that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneOwner {
    pub phone: String,
    pub person_id: i32,
}

/// One row of a person search: a person joined with one of their phones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub person_id: i32,
    pub first_name: String,
    pub second_name: String,
    pub email: String,
    pub phone_id: i32,
    pub phone: Option<String>,
}

impl ClientRecord {
    /// The person half of the joined row.
    pub fn person(&self) -> Person {
        Person {
            id: self.person_id,
            first_name: self.first_name.clone(),
            second_name: self.second_name.clone(),
            email: self.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record() -> ClientRecord {
        ClientRecord {
            person_id: 1,
            first_name: "Vadim".to_string(),
            second_name: "Vlasov".to_string(),
            email: "iwlasov@gmail.com".to_string(),
            phone_id: 7,
            phone: Some("89119315985".to_string()),
        }
    }

    #[test]
    fn test_client_record_person() {
        let record = create_test_record();
        let person = record.person();

        assert_eq!(person.id, 1);
        assert_eq!(person.first_name, "Vadim");
        assert_eq!(person.second_name, "Vlasov");
        assert_eq!(person.email, "iwlasov@gmail.com");
    }

    #[test]
    fn test_client_record_serialization() {
        let json = serde_json::to_value(create_test_record()).unwrap();
        assert_eq!(json["personId"], 1);
        assert_eq!(json["phoneId"], 7);
        assert_eq!(json["phone"], "89119315985");
    }

    #[test]
    fn test_phone_owner_serialization() {
        let owner = PhoneOwner {
            phone: "89119315985".to_string(),
            person_id: 1,
        };
        let json = serde_json::to_string(&owner).unwrap();
        assert_eq!(json, r#"{"phone":"89119315985","personId":1}"#);
    }
}
