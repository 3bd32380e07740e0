use super::*;
use std::cell::RefCell;

/// Keeps the "persisted" contacts in memory.
///
/// Whatever was last saved is what the next `load` returns.
#[derive(Default)]
pub struct MemStore {
    pub data: RefCell<HashMap<String, Contact>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: HashMap<String, Contact>) -> Self {
        Self {
            data: RefCell::new(contacts),
        }
    }
}

impl ContactStore for MemStore {
    fn load(&self) -> Result<HashMap<String, Contact>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &HashMap<String, Contact>) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.clone();
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_returns_last_save() -> Result<(), AppError> {
        let store = MemStore::new();
        assert!(store.load()?.is_empty());

        let contact = Contact::new(
            "Ana".to_string(),
            "555-1234".to_string(),
            "ana@x.com".to_string(),
        );
        let contacts = HashMap::from([(contact.key(), contact)]);

        store.save(&contacts)?;

        assert_eq!(store.load()?, contacts);
        Ok(())
    }
}
