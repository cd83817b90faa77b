use super::*;
use std::sync::Mutex;

/// Process-local store; contents are lost on restart.
pub struct MemStore {
    data: Mutex<Vec<Contact>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            data: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for MemStore {
    fn find_all(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.lock().map_err(lock_poisoned)?.clone())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Contact>, AppError> {
        find_in(&self.data.lock().map_err(lock_poisoned)?, id)
    }

    fn insert(&self, contact: NewContact) -> Result<Contact, AppError> {
        let contact = contact.into_contact(new_id());
        self.data
            .lock()
            .map_err(lock_poisoned)?
            .push(contact.clone());
        Ok(contact)
    }

    fn update_by_id(&self, id: &str, contact: NewContact) -> Result<Option<Contact>, AppError> {
        update_in(&mut self.data.lock().map_err(lock_poisoned)?, id, contact)
    }

    fn remove_by_id(&self, id: &str) -> Result<Option<Contact>, AppError> {
        remove_in(&mut *self.data.lock().map_err(lock_poisoned)?, id)
    }

    fn count(&self) -> Result<usize, AppError> {
        Ok(self.data.lock().map_err(lock_poisoned)?.len())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_contact(name: &str, number: &str) -> NewContact {
        NewContact {
            name: name.to_string(),
            number: number.to_string(),
        }
    }

    #[test]
    fn insert_assigns_id_and_keeps_order() -> Result<(), AppError> {
        let store = MemStore::new();
        let ada = store.insert(new_contact("Ada", "12345"))?;
        let grace = store.insert(new_contact("Grace", "555"))?;

        assert_ne!(ada.id, grace.id);
        assert_eq!(store.find_all()?, vec![ada.clone(), grace]);
        assert_eq!(store.find_by_id(&ada.id)?, Some(ada));
        Ok(())
    }

    #[test]
    fn duplicate_names_are_allowed() -> Result<(), AppError> {
        let store = MemStore::new();
        store.insert(new_contact("Ada", "1"))?;
        store.insert(new_contact("Ada", "2"))?;

        assert_eq!(store.count()?, 2);
        Ok(())
    }

    #[test]
    fn update_overwrites_both_fields() -> Result<(), AppError> {
        let store = MemStore::new();
        let ada = store.insert(new_contact("Ada", "12345"))?;

        let updated = store.update_by_id(&ada.id, new_contact("Ada L", "99999"))?;

        assert_eq!(updated, Some(Contact::new(ada.id.clone(), "Ada L", "99999")));
        assert_eq!(store.find_all()?, vec![Contact::new(ada.id, "Ada L", "99999")]);
        Ok(())
    }

    #[test]
    fn missing_and_malformed_ids_differ() -> Result<(), AppError> {
        let store = MemStore::new();
        store.insert(new_contact("Ada", "12345"))?;

        let absent = new_id();
        assert_eq!(store.find_by_id(&absent)?, None);
        assert_eq!(store.update_by_id(&absent, new_contact("X", "1"))?, None);
        assert_eq!(store.remove_by_id(&absent)?, None);
        assert_eq!(store.count()?, 1);

        assert!(matches!(store.find_by_id("1"), Err(AppError::MalformedId(_))));
        assert!(matches!(store.remove_by_id("1"), Err(AppError::MalformedId(_))));
        Ok(())
    }

    #[test]
    fn remove_returns_the_record() -> Result<(), AppError> {
        let store = MemStore::new();
        let ada = store.insert(new_contact("Ada", "12345"))?;

        assert_eq!(store.remove_by_id(&ada.id)?, Some(ada.clone()));
        assert_eq!(store.remove_by_id(&ada.id)?, None);
        assert_eq!(store.count()?, 0);
        Ok(())
    }
}
