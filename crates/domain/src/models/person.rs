//! Person domain models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Represents a client person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: i32,
    pub first_name: String,
    pub second_name: String,
    pub email: String,
}

/// Person columns that may be changed by a partial update.
///
/// Update statements take their column names from this enum only, so a
/// caller can never inject an arbitrary identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonField {
    FirstName,
    SecondName,
    Email,
}

impl PersonField {
    /// All updatable fields, in the order updates are applied.
    pub const ALL: [PersonField; 3] = [
        PersonField::FirstName,
        PersonField::SecondName,
        PersonField::Email,
    ];

    /// Column name in the `persons` table.
    pub fn column(&self) -> &'static str {
        match self {
            PersonField::FirstName => "first_name",
            PersonField::SecondName => "second_name",
            PersonField::Email => "email",
        }
    }
}

/// Error returned when parsing a column name outside the allow-list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown person field: {0}")]
pub struct UnknownPersonField(pub String);

impl FromStr for PersonField {
    type Err = UnknownPersonField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PersonField::ALL
            .into_iter()
            .find(|field| field.column() == s)
            .ok_or_else(|| UnknownPersonField(s.to_string()))
    }
}

impl fmt::Display for PersonField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

/// Set of person fields to change, keyed by allow-listed column.
///
/// Fields that are absent are left untouched by the update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonChanges {
    fields: BTreeMap<PersonField, String>,
}

impl PersonChanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a change set from optional values, skipping `None`s.
    pub fn from_options(
        first_name: Option<&str>,
        second_name: Option<&str>,
        email: Option<&str>,
    ) -> Self {
        let mut changes = Self::new();
        let values = [first_name, second_name, email];
        for (field, value) in PersonField::ALL.into_iter().zip(values) {
            if let Some(value) = value {
                changes.set(field, value);
            }
        }
        changes
    }

    pub fn first_name(self, value: impl Into<String>) -> Self {
        self.with(PersonField::FirstName, value)
    }

    pub fn second_name(self, value: impl Into<String>) -> Self {
        self.with(PersonField::SecondName, value)
    }

    pub fn email(self, value: impl Into<String>) -> Self {
        self.with(PersonField::Email, value)
    }

    /// Sets a field, replacing any value already present for it.
    pub fn set(&mut self, field: PersonField, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    pub fn get(&self, field: PersonField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Iterates present fields in update order.
    pub fn iter(&self) -> impl Iterator<Item = (PersonField, &str)> {
        self.fields.iter().map(|(field, value)| (*field, value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    fn with(mut self, field: PersonField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}
