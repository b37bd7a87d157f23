use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;

/// Integer identifier of an emergency contact. Assigned by the contact
/// store, never reused while the store lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub u32);

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person to reach when something goes wrong on the road.
///
/// Field order and names match the on-disk JSON layout, including the
/// `"phone number"` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub id: ContactId,
    pub name: String,
    #[serde(rename = "phone number")]
    pub phone: String,
    pub email: String,
    pub relationship: Category,
    pub address: String,
    pub primary: bool,
}

impl EmergencyContact {
    /// Builds a contact that has not been assigned an id yet. The store
    /// overwrites `id` when the contact is added.
    pub fn create(
        name: String,
        phone: String,
        email: String,
        address: String,
        relationship: Category,
        primary: bool,
    ) -> Self {
        Self {
            id: ContactId(0),
            name,
            phone,
            email,
            relationship,
            address,
            primary,
        }
    }
}

/// Raw form input for a contact, before trimming and validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub relationship: Category,
    pub primary: bool,
}

impl ContactForm {
    /// Pre-fills a form from an existing contact, for editing.
    pub fn from_contact(contact: &EmergencyContact) -> Self {
        Self {
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
            address: contact.address.clone(),
            relationship: contact.relationship,
            primary: contact.primary,
        }
    }
}
