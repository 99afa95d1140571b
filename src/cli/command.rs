use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Personal Contact Book")]
pub struct Cli {
    /// Path to the SQLite database file
    #[arg(long, env = "CONTACTS_DB", default_value = "./data/contacts.db")]
    pub db: PathBuf,

    /// Directory holding cached list snapshots
    #[arg(long, env = "CONTACTS_CACHE_DIR", default_value = "./data")]
    pub cache_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact surname
        #[arg(long)]
        surname: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: Option<String>,
    },
    /// List contacts
    List {
        /// Sort key (id, name, surname, email, phone; default is id order)
        #[arg(long)]
        sort: Option<String>,
    },
    /// Edit one field of an existing contact by id
    Edit {
        /// Field to update (name, surname, phone, email)
        #[arg(long)]
        field: String,

        /// New value for the field
        #[arg(long)]
        value: String,

        /// Id of the contact to edit
        #[arg(long)]
        id: i64,
    },
    /// Delete a contact by id
    Delete {
        /// Id of the contact to delete
        #[arg(long)]
        id: i64,
    },
    /// Delete every contact
    DeleteAll,
    /// Find contacts whose field equals a value
    Find {
        /// Field to match (name, surname, phone, email)
        #[arg(long)]
        field: String,

        /// Value to search for
        #[arg(long)]
        value: String,
    },
}
