//! Contact info entity model and DTOs.

use citysync_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `contact_info` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactInfo {
    pub id: DbId,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl std::fmt::Display for ContactInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.email.is_empty() {
            return write!(f, "{} - {}", self.phone, self.email);
        }
        let address: String = self.address.chars().take(30).collect();
        write!(f, "{} - {}...", self.phone, address)
    }
}

/// DTO for creating a new contact record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContactInfo {
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// DTO for updating an existing contact record. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContactInfo {
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefers_email() {
        let contact = ContactInfo {
            id: 1,
            address: "1 Town Hall Square".to_string(),
            phone: "555-0100".to_string(),
            email: "info@city.example".to_string(),
        };
        assert_eq!(contact.to_string(), "555-0100 - info@city.example");
    }

    #[test]
    fn display_falls_back_to_truncated_address() {
        let contact = ContactInfo {
            id: 1,
            address: "A very long address that keeps going well past thirty characters"
                .to_string(),
            phone: "555-0100".to_string(),
            email: String::new(),
        };
        assert_eq!(
            contact.to_string(),
            "555-0100 - A very long address that keeps..."
        );
    }
}
