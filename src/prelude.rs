pub use crate::cli::{command, run_app};
pub use crate::client::{ContactsApi, HttpContactsApi};
pub use crate::domain::{
    contact::{self, Contact, ContactDraft, NewContact},
    notification::{self, Notification, NotificationKind},
    phonebook::{Confirm, FlowOutcome, Phonebook, PhonebookView},
};
pub use crate::errors::AppError;
pub use crate::server::{AppState, ServerConfig, build_router};
pub use crate::store::{self, ContactStore, StorageMediums, parse_storage_type};
