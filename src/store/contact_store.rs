use tracing::{debug, warn};

use crate::error::{TravelError, TravelResult};
use crate::model::{Category, ContactId, EmergencyContact};
use crate::queries::contact_queries;

/// Number of primary contacts a single category may hold.
pub const PRIMARY_SLOTS: usize = 2;

/// Whether a category can take another primary contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryCapacity {
    Available,
    Full { oldest: ContactId },
}

/// Offered to the caller when a category already holds its primaries.
#[derive(Debug, Clone)]
pub struct PrimaryConflict {
    pub category: Category,
    pub current: Vec<EmergencyContact>,
}

impl PrimaryConflict {
    /// The primary that a replacement would demote.
    pub fn oldest(&self) -> &EmergencyContact {
        &self.current[0]
    }
}

/// The caller's answer to a [`PrimaryConflict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryChoice {
    /// Demote the oldest primary and take its slot.
    ReplaceOldest,
    /// Leave the existing primaries alone; the new contact is not primary.
    KeepExisting,
}

/// In-memory emergency contacts with id assignment.
#[derive(Debug, Clone)]
pub struct ContactStore {
    contacts: Vec<EmergencyContact>,
    next_id: u32,
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore {
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
            next_id: 1,
        }
    }

    /// Builds a store from persisted contacts. The id counter resumes after
    /// the highest id present.
    pub fn from_contacts(contacts: Vec<EmergencyContact>) -> Self {
        let mut store = Self::new();
        store.replace_all(contacts);
        store
    }

    /// Replaces the whole collection, as on load.
    pub fn replace_all(&mut self, contacts: Vec<EmergencyContact>) {
        let max_id = contacts.iter().map(|c| c.id.0).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_id.saturating_add(1));
        self.contacts = contacts;
        for category in Category::ALL {
            let count = contact_queries::primaries_in(&self.contacts, category, None).len();
            if count > PRIMARY_SLOTS {
                warn!(%category, count, "loaded more primary contacts than slots");
            }
        }
    }

    pub fn contacts(&self) -> &[EmergencyContact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// The id the next added contact will receive.
    pub fn next_id(&self) -> ContactId {
        ContactId(self.next_id)
    }

    /// Assigns the next id and appends. Uniqueness is the caller's concern.
    /// Fails once the id space is used up.
    pub fn add(&mut self, mut contact: EmergencyContact) -> TravelResult<ContactId> {
        let following = self.next_id.checked_add(1).ok_or(TravelError::IdExhausted)?;
        let id = ContactId(self.next_id);
        contact.id = id;
        self.next_id = following;
        debug!(%id, name = %contact.name, "contact added");
        self.contacts.push(contact);
        Ok(id)
    }

    /// Removes the contact with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: ContactId) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.id != id);
        let removed = self.contacts.len() != before;
        if removed {
            debug!(%id, "contact removed");
        }
        removed
    }

    pub fn find(&self, id: ContactId) -> Option<&EmergencyContact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn find_mut(&mut self, id: ContactId) -> Option<&mut EmergencyContact> {
        self.contacts.iter_mut().find(|c| c.id == id)
    }

    /// True when any contact other than `ignore_id` shares the name, the
    /// phone number or the email. A single matching field is enough.
    pub fn is_duplicate(
        &self,
        name: &str,
        phone: &str,
        email: &str,
        ignore_id: Option<ContactId>,
    ) -> bool {
        self.contacts
            .iter()
            .filter(|c| Some(c.id) != ignore_id)
            .any(|c| c.name == name || c.phone == phone || c.email == email)
    }

    /// Reports whether `category` has room for one more primary, not
    /// counting the contact being edited.
    pub fn primary_capacity(
        &self,
        category: Category,
        editing_id: Option<ContactId>,
    ) -> PrimaryCapacity {
        let current = contact_queries::primaries_in(&self.contacts, category, editing_id);
        if current.len() >= PRIMARY_SLOTS {
            PrimaryCapacity::Full {
                oldest: current[0].id,
            }
        } else {
            PrimaryCapacity::Available
        }
    }

    /// Makes room for a new primary in `category`. When the category is
    /// full, `decide` is asked whether to demote the oldest primary.
    /// Returns whether the new or edited contact may be primary.
    pub fn set_primary_with_capacity_check<F>(
        &mut self,
        category: Category,
        editing_id: Option<ContactId>,
        decide: F,
    ) -> bool
    where
        F: FnOnce(&PrimaryConflict) -> PrimaryChoice,
    {
        let current: Vec<EmergencyContact> =
            contact_queries::primaries_in(&self.contacts, category, editing_id)
                .into_iter()
                .cloned()
                .collect();
        if current.len() < PRIMARY_SLOTS {
            return true;
        }

        let excess = current.len() + 1 - PRIMARY_SLOTS;
        let conflict = PrimaryConflict { category, current };
        match decide(&conflict) {
            PrimaryChoice::ReplaceOldest => {
                for demoted in conflict.current.iter().take(excess) {
                    if let Some(c) = self.find_mut(demoted.id) {
                        c.primary = false;
                        debug!(id = %demoted.id, %category, "primary contact demoted");
                    }
                }
                true
            }
            PrimaryChoice::KeepExisting => false,
        }
    }
}
