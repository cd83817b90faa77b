pub mod json;
pub mod memory;

use crate::prelude::{AppError, Contact, NewContact};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

pub use json::JsonStore;
pub use memory::MemStore;

/// Document-store primitives the API is built on.
///
/// Ids are assigned by the store. Every id argument is checked against the
/// store's id format first and rejected with `AppError::MalformedId`.
pub trait ContactStore: Send + Sync {
    /// All contacts in insertion order.
    fn find_all(&self) -> Result<Vec<Contact>, AppError>;

    fn find_by_id(&self, id: &str) -> Result<Option<Contact>, AppError>;

    fn insert(&self, contact: NewContact) -> Result<Contact, AppError>;

    /// Overwrites both fields; `None` when no record has this id.
    fn update_by_id(&self, id: &str, contact: NewContact) -> Result<Option<Contact>, AppError>;

    /// Returns the removed record, `None` when it did not exist.
    fn remove_by_id(&self, id: &str) -> Result<Option<Contact>, AppError>;

    fn count(&self) -> Result<usize, AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Mem,
    Json,
}

impl StorageMediums {
    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.to_lowercase().as_str() {
            "json" => Ok(StorageMediums::Json),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::Validation(
                "Not a recognized storage medium".to_string(),
            )),
        }
    }
}

pub fn parse_storage_type(
    medium: StorageMediums,
    json_path: &Path,
) -> Result<Arc<dyn ContactStore>, AppError> {
    match medium {
        StorageMediums::Json => Ok(Arc::new(JsonStore::open(json_path)?)),
        StorageMediums::Mem => Ok(Arc::new(MemStore::new())),
    }
}

/// Checks `raw` against the store's id format and returns the canonical form.
pub fn parse_id(raw: &str) -> Result<String, AppError> {
    Uuid::parse_str(raw)
        .map(|id| id.hyphenated().to_string())
        .map_err(|_| AppError::MalformedId(raw.to_string()))
}

pub fn new_id() -> String {
    Uuid::new_v4().hyphenated().to_string()
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

// Shared by both backends; they differ only in what happens after a write.

fn position(contacts: &[Contact], id: &str) -> Result<Option<usize>, AppError> {
    let id = parse_id(id)?;
    Ok(contacts.iter().position(|c| c.id == id))
}

fn find_in(contacts: &[Contact], id: &str) -> Result<Option<Contact>, AppError> {
    Ok(position(contacts, id)?.map(|idx| contacts[idx].clone()))
}

fn update_in(
    contacts: &mut [Contact],
    id: &str,
    contact: NewContact,
) -> Result<Option<Contact>, AppError> {
    let Some(idx) = position(contacts, id)? else {
        return Ok(None);
    };

    let stored = &mut contacts[idx];
    stored.name = contact.name;
    stored.number = contact.number;
    Ok(Some(stored.clone()))
}

fn remove_in(contacts: &mut Vec<Contact>, id: &str) -> Result<Option<Contact>, AppError> {
    Ok(position(contacts, id)?.map(|idx| contacts.remove(idx)))
}

fn lock_poisoned<T>(_: T) -> AppError {
    AppError::Store("contact store lock poisoned".to_string())
}
