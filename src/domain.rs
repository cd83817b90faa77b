pub mod contact;
pub mod notification;
pub mod phonebook;

pub use contact::{Contact, ContactDraft, NewContact};
pub use notification::{Notification, NotificationKind, Notifier};
pub use phonebook::{Confirm, FlowOutcome, Phonebook, PhonebookView};
