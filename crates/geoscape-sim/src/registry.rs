//! Contact registry: the bounded, dense roster of hostile aircraft.
//!
//! Valid ids are always `0..len()`. Destroying a contact compacts the
//! roster, so every id above it shifts down by one. Callers must run the
//! radar removal notification in the same step (see
//! `systems::radar::notify::notify_contact_removed_all`).

use geoscape_core::components::Contact;
use geoscape_core::constants::MAX_UFO_ON_GEOSCAPE;
use geoscape_core::error::GeoscapeError;
use geoscape_core::types::ContactId;

#[derive(Debug, Clone, Default)]
pub struct ContactRegistry {
    contacts: Vec<Contact>,
}

impl ContactRegistry {
    pub fn new() -> Self {
        Self {
            contacts: Vec::with_capacity(MAX_UFO_ON_GEOSCAPE),
        }
    }

    /// Build a registry from stored contacts, rejecting more than capacity.
    pub fn from_contacts(contacts: Vec<Contact>) -> Result<Self, GeoscapeError> {
        if contacts.len() > MAX_UFO_ON_GEOSCAPE {
            return Err(GeoscapeError::RegistryFull {
                capacity: MAX_UFO_ON_GEOSCAPE,
            });
        }
        Ok(Self { contacts })
    }

    /// Add a contact at the end of the roster.
    pub fn spawn(&mut self, contact: Contact) -> Result<ContactId, GeoscapeError> {
        if self.contacts.len() >= MAX_UFO_ON_GEOSCAPE {
            return Err(GeoscapeError::RegistryFull {
                capacity: MAX_UFO_ON_GEOSCAPE,
            });
        }
        self.contacts.push(contact);
        Ok(ContactId(self.contacts.len() as u32 - 1))
    }

    /// Remove a contact and shift every later one down by one slot.
    pub fn remove(&mut self, id: ContactId) -> Result<Contact, GeoscapeError> {
        self.check(id)?;
        Ok(self.contacts.remove(id.index()))
    }

    /// Error if `id` is outside `0..len()`.
    pub fn check(&self, id: ContactId) -> Result<(), GeoscapeError> {
        if id.index() < self.contacts.len() {
            Ok(())
        } else {
            Err(GeoscapeError::ContactOutOfBounds {
                id,
                count: self.contacts.len(),
            })
        }
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.get(id.index())
    }

    pub fn get_mut(&mut self, id: ContactId) -> Option<&mut Contact> {
        self.contacts.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.contacts.len() >= MAX_UFO_ON_GEOSCAPE
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactId, &Contact)> {
        self.contacts
            .iter()
            .enumerate()
            .map(|(i, c)| (ContactId(i as u32), c))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ContactId, &mut Contact)> {
        self.contacts
            .iter_mut()
            .enumerate()
            .map(|(i, c)| (ContactId(i as u32), c))
    }
}
