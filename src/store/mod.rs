pub mod memory;
pub mod txt;

use crate::prelude::{AppError, Contact, HashMap};
use std::fs;
use std::path::Path;

pub use memory::MemStore;
pub use txt::TxtStore;

pub const DEFAULT_STORAGE_PATH: &str = "contacts.txt";

/// Where the contact book lives between runs.
///
/// `load` hands back the full map keyed by normalized name and `save`
/// replaces everything previously stored.
pub trait ContactStore {
    fn load(&self) -> Result<HashMap<String, Contact>, AppError>;

    fn save(&self, contacts: &HashMap<String, Contact>) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
