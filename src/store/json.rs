use super::*;
use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::debug;

pub const STORAGE_PATH: &str = "./.instance/contacts.json";

/// Contacts persisted as a JSON array.
///
/// The file is read once on open; every write rewrites it while the lock is held.
/// Calls block, so async callers run them on the blocking pool.
pub struct JsonStore {
    path: PathBuf,
    mem: Mutex<Vec<Contact>>,
}

impl JsonStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        let mem = load(&path)?;
        debug!(path = %path.display(), count = mem.len(), "json store opened");

        Ok(Self {
            path,
            mem: Mutex::new(mem),
        })
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        let json_contacts = serde_json::to_string(contacts)?;
        file.write_all(json_contacts.as_bytes())?;
        Ok(())
    }
}

fn load(path: &Path) -> Result<Vec<Contact>, AppError> {
    if !fs::exists(path)? {
        return Ok(Vec::new());
    }

    let mut data = String::new();
    OpenOptions::new()
        .read(true)
        .open(path)?
        .read_to_string(&mut data)?;

    // serde_json will give an error if data is empty
    if data.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut contacts: Vec<Contact> = serde_json::from_str(&data)?;

    // Lookups compare canonical ids, so hand-edited files are normalised here.
    for contact in &mut contacts {
        contact.id = parse_id(&contact.id).map_err(|_| {
            AppError::Store(format!(
                "{} holds a contact with invalid id '{}'",
                path.display(),
                contact.id
            ))
        })?;
    }
    Ok(contacts)
}

impl ContactStore for JsonStore {
    fn find_all(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.mem.lock().map_err(lock_poisoned)?.clone())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Contact>, AppError> {
        find_in(&self.mem.lock().map_err(lock_poisoned)?, id)
    }

    fn insert(&self, contact: NewContact) -> Result<Contact, AppError> {
        let mut mem = self.mem.lock().map_err(lock_poisoned)?;
        let contact = contact.into_contact(new_id());

        mem.push(contact.clone());
        if let Err(err) = self.save(&mem) {
            mem.pop();
            return Err(err);
        }
        Ok(contact)
    }

    fn update_by_id(&self, id: &str, contact: NewContact) -> Result<Option<Contact>, AppError> {
        let mut mem = self.mem.lock().map_err(lock_poisoned)?;
        let before = mem.clone();

        let updated = update_in(&mut mem, id, contact)?;
        if updated.is_some()
            && let Err(err) = self.save(&mem)
        {
            *mem = before;
            return Err(err);
        }
        Ok(updated)
    }

    fn remove_by_id(&self, id: &str) -> Result<Option<Contact>, AppError> {
        let mut mem = self.mem.lock().map_err(lock_poisoned)?;
        let before = mem.clone();

        let removed = remove_in(&mut mem, id)?;
        if removed.is_some()
            && let Err(err) = self.save(&mem)
        {
            *mem = before;
            return Err(err);
        }
        Ok(removed)
    }

    fn count(&self) -> Result<usize, AppError> {
        Ok(self.mem.lock().map_err(lock_poisoned)?.len())
    }

    fn get_medium(&self) -> &str {
        "json"
    }
}
