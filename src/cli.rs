pub mod command;
pub mod run;

pub use run::run_app;

use crate::prelude::{AppError, Confirm, Contact, Notification, NotificationKind};
use std::io::{self, Write};

/// Terminal confirmation; `assume_yes` answers every prompt with yes.
pub struct PromptConfirm {
    pub assume_yes: bool,
}

impl Confirm for PromptConfirm {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        if confirm_action(message).is_err() {
            return false;
        }

        matches!(get_input_to_lower().as_deref(), Ok("y") | Ok("yes"))
    }
}

// OUTPUT FUNCTIONS
pub fn confirm_action(action: &str) -> Result<(), AppError> {
    println!("\n{} (y/n)", action);
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

pub fn display_contact(i: usize, contact: &Contact) -> String {
    format!("{i:>3}. {:<20} {:15}", contact.name, contact.number)
}

pub fn display_notification(notification: &Notification) {
    match notification.kind {
        NotificationKind::Success => println!("{}", notification.text),
        NotificationKind::Error => eprintln!("{}", notification.text),
    }
}

// INPUT FUNCTIONS
pub fn get_input_to_lower() -> Result<String, AppError> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_lowercase())
}
