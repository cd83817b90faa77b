use crate::server::config::{DEFAULT_PORT, DEFAULT_STATIC_DIR};
use crate::store::json::STORAGE_PATH;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phonebook", version, about = "Phonebook server and client")]
pub struct Cli {
    /// Base url of the phonebook API used by client commands
    #[arg(
        long,
        global = true,
        env = "PHONEBOOK_API_URL",
        default_value_t = String::from("http://localhost:3001")
    )]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the phonebook API server
    Serve {
        /// Listen port
        #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Storage choice (mem, json) are available
        #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("json"))]
        storage_choice: String,

        /// File backing the json storage
        #[arg(long, env = "JSON_STORAGE_PATH", default_value = STORAGE_PATH)]
        json_storage_path: PathBuf,

        /// Directory of frontend assets served for non-API paths
        #[arg(long, env = "STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
        static_dir: PathBuf,
    },
    /// List contacts
    List {
        /// Show only names containing this text (case-sensitive)
        #[arg(long)]
        filter: Option<String>,
    },
    /// Add a contact, or replace the number of the contact with the same name
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        number: String,

        /// Replace an existing number without asking
        #[arg(short, long)]
        yes: bool,
    },
    /// Delete the first contact with this exact name
    Delete {
        /// Name of contact to delete
        #[arg(long)]
        name: String,

        /// Delete without asking
        #[arg(short, long)]
        yes: bool,
    },
    /// Show how many people the phonebook holds
    Info,
}
