use std::fmt;

use super::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn all_fields_req() -> String {
        "All fields are required.".to_string()
    }
}

impl Contact {
    pub fn new(name: String, phone: String, email: String) -> Self {
        Contact { name, phone, email }
    }

    /// Builds a contact from user input.
    ///
    /// Every field is trimmed and must be non-empty afterwards; nothing else
    /// about the phone number or email address is checked.
    pub fn from_input(name: &str, phone: &str, email: &str) -> Result<Self, AppError> {
        let (name, phone, email) = (name.trim(), phone.trim(), email.trim());

        if name.is_empty() || phone.is_empty() || email.is_empty() {
            return Err(AppError::Validation(ValidationReq::all_fields_req()));
        }

        Ok(Contact::new(
            name.to_string(),
            phone.to_string(),
            email.to_string(),
        ))
    }

    /// Key under which this contact is stored.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Phone: {}, Email: {}",
            self.name, self.phone, self.email
        )
    }
}

/// Normalizes a name typed at the search prompt into a store key.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}
