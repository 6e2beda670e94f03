use super::*;

use tracing::{debug, info, warn};

/// What became of a mutation that needed the caller's go-ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Committed,
    Declined,
}

/// Owns the in-memory contact list and writes it back after every change.
///
/// A change whose save fails is rolled back, so memory always matches the
/// last successful save.
pub struct ContactManager {
    mem: Vec<Contact>,
    storage: Box<dyn ContactStore>,
}

impl ContactManager {
    /// An empty manager over `storage`. Call [`ContactManager::load`] to read
    /// the persisted contacts.
    pub fn new(storage: Box<dyn ContactStore>) -> Self {
        Self {
            mem: Vec::new(),
            storage,
        }
    }

    /// Replace the in-memory list with the persisted one.
    ///
    /// On failure the list is left empty and the error is returned; the
    /// medium itself is not touched.
    pub fn load(&mut self) -> Result<usize, AppError> {
        match self.storage.load() {
            Ok(contacts) => {
                self.mem = contacts;
                info!(
                    medium = self.storage.get_medium(),
                    count = self.mem.len(),
                    "contact book loaded"
                );
                Ok(self.mem.len())
            }
            Err(e) => {
                self.mem.clear();
                warn!(error = %e, "starting with an empty contact book");
                Err(e)
            }
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.mem)
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.mem
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    /// Contacts ordered by first then last name, for display.
    pub fn sorted(&self) -> Vec<&Contact> {
        let mut contacts: Vec<&Contact> = self.mem.iter().collect();
        contacts.sort_by(|a, b| {
            (&a.first_name, &a.last_name).cmp(&(&b.first_name, &b.last_name))
        });
        contacts
    }

    pub fn search(&self, query: &str) -> Vec<&Contact> {
        search::search(query, &self.mem)
    }

    /// Find the position of the contact `query` designates.
    ///
    /// No match is `NotFound`. One match is taken as is. Several matches are
    /// handed to `source` for a choice; `Ok(None)` means it gave none.
    pub fn locate(
        &self,
        query: &str,
        source: &mut dyn IndexSource,
    ) -> Result<Option<usize>, AppError> {
        let positions = search::search_positions(query, &self.mem);
        if positions.is_empty() {
            return Err(AppError::NotFound("Contact".to_string()));
        }

        let results: Vec<&Contact> = positions.iter().map(|&idx| &self.mem[idx]).collect();
        Ok(select::select(&results, source).map(|choice| positions[choice]))
    }

    pub fn get(&self, position: usize) -> Result<&Contact, AppError> {
        self.mem
            .get(position)
            .ok_or_else(|| AppError::NotFound("Contact".to_string()))
    }

    /// Append `contact` and persist.
    ///
    /// Every field must pass its rule. An exact duplicate is only added when
    /// `allow_duplicate` agrees.
    pub fn add_contact<F>(&mut self, contact: Contact, allow_duplicate: F) -> Result<Outcome, AppError>
    where
        F: FnOnce(&Contact) -> bool,
    {
        ensure_valid(&contact)?;

        if contact.already_exist(&self.mem) && !allow_duplicate(&contact) {
            debug!(%contact, "duplicate not added");
            return Ok(Outcome::Declined);
        }

        self.mem.push(contact);
        if let Err(e) = self.save() {
            self.mem.pop();
            return Err(e);
        }
        debug!(count = self.mem.len(), "contact added");
        Ok(Outcome::Committed)
    }

    /// Apply `updates` to the contact at `position` and persist.
    ///
    /// Blank or missing updates keep the current value. The resulting contact
    /// is checked against the rest of the book for an exact duplicate, which
    /// `allow_duplicate` must accept.
    pub fn modify_contact<F>(
        &mut self,
        position: usize,
        updates: &FieldUpdates,
        allow_duplicate: F,
    ) -> Result<Outcome, AppError>
    where
        F: FnOnce(&Contact) -> bool,
    {
        let updated = self.get(position)?.updated_with(updates);
        ensure_valid(&updated)?;

        let others = self
            .mem
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != position)
            .map(|(_, contact)| contact);

        if updated.already_exist(others) && !allow_duplicate(&updated) {
            debug!(contact = %updated, "modification would duplicate, not applied");
            return Ok(Outcome::Declined);
        }

        let previous = std::mem::replace(&mut self.mem[position], updated);
        if let Err(e) = self.save() {
            self.mem[position] = previous;
            return Err(e);
        }
        debug!(position, "contact modified");
        Ok(Outcome::Committed)
    }

    /// Remove the contact at `position` once `confirm` agrees, then persist.
    pub fn delete_contact<F>(&mut self, position: usize, confirm: F) -> Result<Outcome, AppError>
    where
        F: FnOnce(&Contact) -> bool,
    {
        if !confirm(self.get(position)?) {
            return Ok(Outcome::Declined);
        }

        let removed = self.mem.remove(position);
        if let Err(e) = self.save() {
            self.mem.insert(position, removed);
            return Err(e);
        }
        debug!(contact = %removed, "contact deleted");
        Ok(Outcome::Committed)
    }
}

fn ensure_valid(contact: &Contact) -> Result<(), AppError> {
    match contact.invalid_field() {
        Some(field) => Err(AppError::Validation(field.requirement().to_string())),
        None => Ok(()),
    }
}
