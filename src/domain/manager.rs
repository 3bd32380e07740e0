use super::*;

use crate::domain::contact::{Contact, name_key};
use crate::prelude::HashMap;
use crate::store::ContactStore;
use std::collections::hash_map::Entry;
use tracing::debug;

/// The in-memory contact book.
///
/// Contacts are keyed by their lowercased name, so two names that differ only
/// in case share one entry and the most recent add wins.
pub struct ContactManager {
    pub mem: HashMap<String, Contact>,
    pub storage: Box<dyn ContactStore>,
}

impl ContactManager {
    /// Creates an empty book backed by `storage`. Nothing is read until
    /// [`ContactManager::load`] is called.
    pub fn new(storage: Box<dyn ContactStore>) -> Self {
        Self {
            mem: HashMap::new(),
            storage,
        }
    }

    pub fn load(&mut self) -> Result<(), AppError> {
        self.mem = self.storage.load()?;
        Ok(())
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.mem)
    }

    pub fn add_contact(
        &mut self,
        name: &str,
        phone: &str,
        email: &str,
    ) -> Result<&Contact, AppError> {
        let contact = Contact::from_input(name, phone, email)?;

        match self.mem.entry(contact.key()) {
            Entry::Occupied(mut entry) => {
                debug!(name = %entry.get().name, "replacing existing contact");
                entry.insert(contact);
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => Ok(entry.insert(contact)),
        }
    }

    pub fn search(&self, name: &str) -> Option<&Contact> {
        self.mem.get(&name_key(name))
    }

    pub fn contact_list(&self) -> Vec<&Contact> {
        self.mem.values().collect()
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    pub fn get_medium(&self) -> &str {
        self.storage.get_medium()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemStore, TxtStore};
    use tempfile::tempdir;

    fn mem_manager() -> ContactManager {
        ContactManager::new(Box::new(MemStore::new()))
    }

    #[test]
    fn add_then_search_any_casing() -> Result<(), AppError> {
        let mut manager = mem_manager();

        manager.add_contact("Ana", "555-1234", "ana@x.com")?;

        let expected = Contact::new(
            "Ana".to_string(),
            "555-1234".to_string(),
            "ana@x.com".to_string(),
        );
        assert_eq!(manager.search("ANA"), Some(&expected));
        assert_eq!(manager.search("ana"), Some(&expected));
        assert_eq!(manager.search("  aNa "), Some(&expected));
        Ok(())
    }

    #[test]
    fn search_miss_returns_none() {
        let manager = mem_manager();

        assert!(manager.search("Nobody").is_none());
    }

    #[test]
    fn names_differing_by_case_collapse() -> Result<(), AppError> {
        let mut manager = mem_manager();

        manager.add_contact("Ana", "111", "first@x.com")?;
        manager.add_contact("ANA", "222", "second@x.com")?;

        assert_eq!(manager.len(), 1);
        let contact = manager.search("ana").ok_or(AppError::NotFound("Contact".to_string()))?;
        assert_eq!(contact.name, "ANA");
        assert_eq!(contact.phone, "222");
        assert_eq!(contact.email, "second@x.com");
        Ok(())
    }

    #[test]
    fn failed_add_leaves_book_untouched() -> Result<(), AppError> {
        let mut manager = mem_manager();
        manager.add_contact("Ana", "111", "ana@x.com")?;

        let result = manager.add_contact("Ana", "", "new@x.com");

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.contact_list()[0].phone, "111");
        Ok(())
    }

    #[test]
    fn add_stores_trimmed_fields() -> Result<(), AppError> {
        let mut manager = mem_manager();

        let added = manager.add_contact(" Ana ", " 555 ", " ana@x.com ")?;

        assert_eq!(added.name, "Ana");
        assert_eq!(added.phone, "555");
        assert_eq!(added.email, "ana@x.com");
        Ok(())
    }

    #[test]
    fn list_returns_every_contact() -> Result<(), AppError> {
        let mut manager = mem_manager();
        assert!(manager.contact_list().is_empty());
        assert!(manager.is_empty());

        manager.add_contact("Ana", "111", "ana@x.com")?;
        manager.add_contact("Bob", "222", "bob@x.com")?;
        manager.add_contact("Cid", "333", "cid@x.com")?;

        let mut names: Vec<&str> = manager
            .contact_list()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        names.sort();

        assert_eq!(names, vec!["Ana", "Bob", "Cid"]);
        Ok(())
    }

    #[test]
    fn save_and_load_round_trip() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.txt");

        let mut manager = ContactManager::new(Box::new(TxtStore::new(&path)));
        manager.add_contact("Ana", "555-1234", "ana@x.com")?;
        manager.add_contact("Bob", "555-9876", "bob@y.org")?;
        manager.save()?;

        let mut reloaded = ContactManager::new(Box::new(TxtStore::new(&path)));
        reloaded.load()?;

        assert_eq!(reloaded.mem, manager.mem);
        assert_eq!(reloaded.get_medium(), "txt");
        Ok(())
    }

    #[test]
    fn load_replaces_memory() -> Result<(), AppError> {
        let stored = Contact::new(
            "Ana".to_string(),
            "555-1234".to_string(),
            "ana@x.com".to_string(),
        );
        let storage = MemStore::with_contacts(HashMap::from([(stored.key(), stored.clone())]));
        let mut manager = ContactManager::new(Box::new(storage));
        manager.add_contact("Bob", "222", "bob@x.com")?;

        manager.load()?;

        assert_eq!(manager.len(), 1);
        assert_eq!(manager.search("ana"), Some(&stored));
        Ok(())
    }
}
