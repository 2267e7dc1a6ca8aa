//! Person search criteria.

use serde::{Deserialize, Serialize};

/// Optional exact-match criteria for a person search.
///
/// A `None` criterion places no constraint on the result; all present
/// criteria must match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonFilter {
    pub first_name: Option<String>,
    pub second_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl PersonFilter {
    /// A filter that matches every person/phone row.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn second_name(mut self, value: impl Into<String>) -> Self {
        self.second_name = Some(value.into());
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn phone(mut self, value: impl Into<String>) -> Self {
        self.phone = Some(value.into());
        self
    }

    /// Returns true when no criterion is set.
    pub fn is_unconstrained(&self) -> bool {
        self.first_name.is_none()
            && self.second_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }
}
