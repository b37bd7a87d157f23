use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::db::contact_file;
use crate::error::{TravelError, TravelResult};
use crate::model::{ContactForm, ContactId, EmergencyContact};
use crate::store::{ContactStore, PrimaryChoice, PrimaryConflict};
use crate::validation;

/// Whether a submission created a contact or changed an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction {
    Saved,
    Updated,
}

impl SubmitAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitAction::Saved => "saved",
            SubmitAction::Updated => "updated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub id: ContactId,
    pub action: SubmitAction,
    /// Final primary flag, which is false when the caller declined to
    /// replace an existing primary.
    pub primary: bool,
}

/// Trimmed and checked form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// Checks required fields and phone format. Does not look at other
/// contacts.
pub fn validate_form(form: &ContactForm) -> TravelResult<ValidContact> {
    let name = validation::non_blank(&form.name, "name")?;
    let phone = validation::non_blank(&form.phone, "phone number")?;
    let email = validation::non_blank(&form.email, "email")?;
    let address = validation::non_blank(&form.address, "address")?;
    validation::digits_only(&phone)?;
    Ok(ValidContact {
        name,
        phone,
        email,
        address,
    })
}

/// An open contact book: the store, where it lives on disk, and which
/// contact (if any) the form is currently editing.
#[derive(Debug)]
pub struct ContactSession {
    store: ContactStore,
    path: PathBuf,
    editing: Option<ContactId>,
}

impl ContactSession {
    /// Loads contacts from `path`. A missing file gives an empty book.
    pub fn open(path: impl Into<PathBuf>) -> TravelResult<Self> {
        let path = path.into();
        let contacts = contact_file::load(&path)?;
        Ok(Self {
            store: ContactStore::from_contacts(contacts),
            path,
            editing: None,
        })
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn contacts(&self) -> &[EmergencyContact] {
        self.store.contacts()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn editing(&self) -> Option<ContactId> {
        self.editing
    }

    pub fn find(&self, id: ContactId) -> TravelResult<&EmergencyContact> {
        self.store.find(id).ok_or_else(|| not_found(id))
    }

    /// Marks `id` as the contact the form edits and returns it so the form
    /// can be pre-filled.
    pub fn begin_edit(&mut self, id: ContactId) -> TravelResult<&EmergencyContact> {
        let contact = self.store.find(id).ok_or_else(|| not_found(id))?;
        self.editing = Some(id);
        debug!(%id, "editing contact");
        Ok(contact)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Validates the form and commits it as a new contact, or as an update
    /// of the contact being edited, then saves the file.
    ///
    /// When the form asks for primary and the category is already full,
    /// `decide` chooses between demoting the oldest primary and committing
    /// the contact as non-primary. Validation failures leave everything
    /// untouched, and so does a failed save.
    pub fn submit<F>(&mut self, form: &ContactForm, decide: F) -> TravelResult<SubmitOutcome>
    where
        F: FnOnce(&PrimaryConflict) -> PrimaryChoice,
    {
        let valid = validate_form(form)?;

        if self
            .store
            .is_duplicate(&valid.name, &valid.phone, &valid.email, self.editing)
        {
            return Err(TravelError::DuplicateContact);
        }

        if let Some(id) = self.editing {
            if self.store.find(id).is_none() {
                self.editing = None;
                return Err(not_found(id));
            }
        }

        let editing = self.editing;
        let (id, action, primary) = self.commit(|session| {
            let primary = form.primary
                && session
                    .store
                    .set_primary_with_capacity_check(form.relationship, editing, decide);

            let (id, action) = match editing {
                Some(id) => {
                    if let Some(contact) = session.store.find_mut(id) {
                        contact.name = valid.name;
                        contact.phone = valid.phone;
                        contact.email = valid.email;
                        contact.address = valid.address;
                        contact.relationship = form.relationship;
                        contact.primary = primary;
                    }
                    (id, SubmitAction::Updated)
                }
                None => {
                    let contact = EmergencyContact::create(
                        valid.name,
                        valid.phone,
                        valid.email,
                        valid.address,
                        form.relationship,
                        primary,
                    );
                    (session.store.add(contact)?, SubmitAction::Saved)
                }
            };
            session.editing = None;
            Ok((id, action, primary))
        })?;

        info!(%id, action = action.as_str(), primary, "contact submitted");
        Ok(SubmitOutcome {
            id,
            action,
            primary,
        })
    }

    /// Deletes a contact and saves. Deleting an unknown id is not an error.
    pub fn delete(&mut self, id: ContactId) -> TravelResult<bool> {
        self.commit(|session| {
            let removed = session.store.remove(id);
            if session.editing == Some(id) {
                session.editing = None;
            }
            Ok(removed)
        })
    }

    /// Re-reads the file, dropping unsaved changes and any edit in progress.
    /// On a read error the current contacts are kept.
    pub fn reload(&mut self) -> TravelResult<()> {
        let contacts = contact_file::load(&self.path)?;
        self.store.replace_all(contacts);
        self.editing = None;
        Ok(())
    }

    pub fn save(&self) -> TravelResult<()> {
        contact_file::save(&self.path, self.store.contacts())
    }

    /// Applies `change` and saves. If either step fails, the store and the
    /// edit in progress go back to how they were.
    fn commit<T, F>(&mut self, change: F) -> TravelResult<T>
    where
        F: FnOnce(&mut Self) -> TravelResult<T>,
    {
        let store = self.store.clone();
        let editing = self.editing;
        let result = change(self).and_then(|value| self.save().map(|()| value));
        if result.is_err() {
            warn!(path = %self.path.display(), "contact change rolled back");
            self.store = store;
            self.editing = editing;
        }
        result
    }
}

fn not_found(id: ContactId) -> TravelError {
    TravelError::NotFound {
        entity_type: "Contact".into(),
        id: id.to_string(),
    }
}
