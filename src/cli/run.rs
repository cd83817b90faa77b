use super::{PromptConfirm, display_contact, display_notification};
use crate::prelude::{
    AppError, FlowOutcome, HttpContactsApi, Phonebook, ServerConfig, StorageMediums,
    command::{Cli, Commands},
};
use crate::server;
use clap::Parser;
use std::process::ExitCode;

pub async fn run_app() -> Result<ExitCode, AppError> {
    run_cli(Cli::parse()).await
}

/// `ExitCode::FAILURE` means the failure was already reported to the user.
pub async fn run_cli(cli: Cli) -> Result<ExitCode, AppError> {
    match cli.command {
        Commands::Serve {
            port,
            storage_choice,
            json_storage_path,
            static_dir,
        } => {
            let config = ServerConfig {
                port,
                storage: StorageMediums::from(&storage_choice)?,
                json_storage_path,
                static_dir: Some(static_dir),
            };
            server::serve(config).await?;
            Ok(ExitCode::SUCCESS)
        }

        // Listing contacts
        Commands::List { filter } => {
            let mut phonebook = connect(&cli.api_url).await?;
            if let Some(text) = filter {
                phonebook.set_filter(text);
            }

            let view = phonebook.snapshot();
            if view.visible.is_empty() {
                if view.filter_text.is_empty() {
                    println!("No contact yet");
                } else {
                    println!("Found no contact matching '{}'", view.filter_text);
                }
                return Ok(ExitCode::SUCCESS);
            }

            for (i, c) in view.visible.iter().enumerate() {
                println!("{}", display_contact(i + 1, c));
            }
            Ok(ExitCode::SUCCESS)
        }

        // Add or replace
        Commands::Add { name, number, yes } => {
            let mut phonebook = connect(&cli.api_url).await?;
            let outcome = phonebook
                .submit(&name, &number, &PromptConfirm { assume_yes: yes })
                .await;
            finish(&phonebook, outcome)
        }

        // Delete Contact
        Commands::Delete { name, yes } => {
            let mut phonebook = connect(&cli.api_url).await?;
            let Some(id) = phonebook.find_by_name(&name).map(|c| c.id.clone()) else {
                eprintln!("{}", AppError::NotFound("Contact".to_string()));
                return Ok(ExitCode::SUCCESS);
            };

            let outcome = phonebook
                .delete(&id, &PromptConfirm { assume_yes: yes })
                .await;
            finish(&phonebook, outcome)
        }

        Commands::Info => {
            let api = HttpContactsApi::new(&cli.api_url)?;
            println!("{}", api.info().await?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn connect(api_url: &str) -> Result<Phonebook<HttpContactsApi>, AppError> {
    let mut phonebook = Phonebook::new(HttpContactsApi::new(api_url)?);
    phonebook.load().await?;
    Ok(phonebook)
}

fn finish(
    phonebook: &Phonebook<HttpContactsApi>,
    outcome: FlowOutcome,
) -> Result<ExitCode, AppError> {
    let notification = phonebook.notification();
    if let Some(notification) = &notification {
        display_notification(notification);
    }

    match outcome {
        FlowOutcome::Declined => {
            println!("Nothing changed");
            Ok(ExitCode::SUCCESS)
        }
        // The error banner already told the user what went wrong.
        FlowOutcome::Failed(_) if notification.is_some() => Ok(ExitCode::FAILURE),
        FlowOutcome::Failed(err) => Err(err),
        _ => Ok(ExitCode::SUCCESS),
    }
}
