use super::notification::{Notification, Notifier};
use crate::client::ContactsApi;
use crate::prelude::{AppError, Contact, ContactDraft};
use tracing::{info, warn};

/// Asks the user to approve a destructive step.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// What a submit or delete flow ended up doing.
#[derive(Debug)]
pub enum FlowOutcome {
    Created(Contact),
    Updated(Contact),
    /// The record was gone from the server; the local copy was dropped.
    Removed(Contact),
    Deleted(Contact),
    Declined,
    Failed(AppError),
}

/// Immutable copy of the controller state handed to presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonebookView {
    pub contacts: Vec<Contact>,
    pub visible: Vec<Contact>,
    pub filter_text: String,
    pub notification: Option<Notification>,
}

/// Client-side owner of the contact list.
///
/// The list is a cache of the server state: replaced wholesale by `load`
/// and patched after each mutation this controller issues.
pub struct Phonebook<A: ContactsApi> {
    api: A,
    contacts: Vec<Contact>,
    filter_text: String,
    notifier: Notifier,
}

impl<A: ContactsApi> Phonebook<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            contacts: Vec::new(),
            filter_text: String::new(),
            notifier: Notifier::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn load(&mut self) -> Result<(), AppError> {
        self.contacts = self.api.get_all().await?;
        info!(count = self.contacts.len(), "contacts loaded");
        Ok(())
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// First contact whose name matches exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.name == name)
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
    }

    /// Contacts whose name contains the filter text (case-sensitive).
    pub fn visible(&self) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| c.name.contains(self.filter_text.as_str()))
            .collect()
    }

    pub fn notification(&self) -> Option<Notification> {
        self.notifier.current()
    }

    pub fn snapshot(&self) -> PhonebookView {
        PhonebookView {
            contacts: self.contacts.clone(),
            visible: self.visible().into_iter().cloned().collect(),
            filter_text: self.filter_text.clone(),
            notification: self.notification(),
        }
    }

    /// Form submit: create a new contact, or replace the number of the
    /// contact that already carries this name once the user confirms.
    pub async fn submit(
        &mut self,
        name: &str,
        number: &str,
        confirm: &impl Confirm,
    ) -> FlowOutcome {
        let draft = ContactDraft::new(name, number);

        let Some(existing) = self.find_by_name(name).cloned() else {
            return self.create(draft).await;
        };

        let message = format!(
            "Person with name '{}' is already added to phonebook, replace the old number with the new one ?",
            name
        );
        if !confirm.confirm(&message) {
            return FlowOutcome::Declined;
        }

        match self.api.update(&existing.id, &draft).await {
            Ok(updated) => {
                if let Some(slot) = self.contacts.iter_mut().find(|c| c.id == existing.id) {
                    *slot = updated.clone();
                }
                self.notifier
                    .success(format!("Person '{}' is successfully updated", updated.name));
                FlowOutcome::Updated(updated)
            }
            Err(err) if err.is_not_found() => {
                warn!(id = %existing.id, "contact vanished before update");
                self.contacts.retain(|c| c.id != existing.id);
                self.notifier.error(format!(
                    "Person '{}' was already removed from server",
                    existing.name
                ));
                FlowOutcome::Removed(existing)
            }
            Err(err) => {
                self.notifier.error(err.user_message());
                FlowOutcome::Failed(err)
            }
        }
    }

    /// Delete button: confirm, then remove by id.
    pub async fn delete(&mut self, id: &str, confirm: &impl Confirm) -> FlowOutcome {
        let Some(contact) = self.contacts.iter().find(|c| c.id == id).cloned() else {
            let err = AppError::NotFound("Person".to_string());
            self.notifier.error(err.user_message());
            return FlowOutcome::Failed(err);
        };

        if !confirm.confirm(&format!("Delete {} ?", contact.name)) {
            return FlowOutcome::Declined;
        }

        match self.api.remove(&contact.id).await {
            Ok(()) => {
                self.contacts.retain(|c| c.id != contact.id);
                self.notifier
                    .success(format!("Person '{}' is successfully deleted", contact.name));
                FlowOutcome::Deleted(contact)
            }
            Err(err) => {
                self.notifier.error(err.user_message());
                FlowOutcome::Failed(err)
            }
        }
    }

    async fn create(&mut self, draft: ContactDraft) -> FlowOutcome {
        match self.api.create(&draft).await {
            Ok(created) => {
                self.contacts.push(created.clone());
                self.notifier
                    .success(format!("Person '{}' is successfully added", created.name));
                FlowOutcome::Created(created)
            }
            Err(err) => {
                self.notifier.error(err.user_message());
                FlowOutcome::Failed(err)
            }
        }
    }
}
