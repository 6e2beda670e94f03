use super::*;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::debug;

pub const DEFAULT_STORAGE_PATH: &str = "contacts.json";

/// Contacts kept as a pretty-printed JSON array in a single file.
pub struct JsonStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.into(),
        }
    }
}

impl ContactStore for JsonStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no contact file yet");
            return Ok(Vec::new());
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        let contacts: Vec<Contact> =
            serde_json::from_str(&data).map_err(|source| AppError::CorruptStore {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), count = contacts.len(), "loaded contacts");
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        // four-space indent, keys in field order
        let mut data = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut data, formatter);
        contacts.serialize(&mut serializer)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        file.write_all(&data)?;

        debug!(path = %self.path.display(), count = contacts.len(), "saved contacts");
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
