pub mod http;

use crate::prelude::{AppError, Contact, ContactDraft};
use async_trait::async_trait;

pub use http::HttpContactsApi;

/// The contact operations the client controller needs from the API.
#[async_trait]
pub trait ContactsApi: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Contact>, AppError>;

    async fn create(&self, draft: &ContactDraft) -> Result<Contact, AppError>;

    /// Fails with `AppError::NotFound` when no record has this id.
    async fn update(&self, id: &str, draft: &ContactDraft) -> Result<Contact, AppError>;

    async fn remove(&self, id: &str) -> Result<(), AppError>;
}
