use super::*;
use crate::helper;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::PathBuf;
use tracing::info;

pub struct TxtStore {
    pub path: PathBuf,
}

impl TxtStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContactStore for TxtStore {
    fn load(&self) -> Result<HashMap<String, Contact>, AppError> {
        // A missing file is an empty contact book
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no contacts file yet, starting empty");
                return Ok(HashMap::new());
            }
            Err(e) => return Err(e.into()),
        };

        let contacts = helper::deserialize_contacts(BufReader::new(file))?;
        info!(path = %self.path.display(), total = contacts.len(), "loaded contacts");
        Ok(contacts)
    }

    fn save(&self, contacts: &HashMap<String, Contact>) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        let total = helper::serialize_contacts(BufWriter::new(file), contacts)?;
        info!(path = %self.path.display(), total, "saved contacts");
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "txt"
    }
}
