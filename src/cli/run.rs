use std::fs;

use clap::Parser;

use crate::cache::Cacher;
use crate::cli::command::{Cli, Commands};
use crate::domain::{render, ContactBook, ContactField, NewContact, SortKey};
use crate::errors::AppError;
use crate::store::{ContactStore, Database};

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    // The cacher itself never creates its directory, so it is prepared
    // here before the book is built.
    fs::create_dir_all(&cli.cache_dir)?;
    if let Some(parent) = cli.db.parent() {
        fs::create_dir_all(parent)?;
    }

    let db = Database::open(&cli.db)?;
    db.ensure_schema()?;

    let mut book = ContactBook::new(db, Cacher::new(&cli.cache_dir))?;

    match cli.command {
        Commands::Add {
            name,
            surname,
            phone,
            email,
        } => {
            let contact = NewContact::new(name, surname, phone, email.unwrap_or_default());

            book.add(&contact)?;
            println!("Contact added successfully");
            Ok(())
        }

        Commands::List { sort } => {
            if book.contacts().is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            match sort {
                Some(key) => {
                    let key: SortKey = key.parse()?;
                    print!("{}", render(&book.sort(key)));
                }
                None => print!("{}", render(book.contacts())),
            }
            Ok(())
        }

        Commands::Edit { field, value, id } => {
            let field: ContactField = field.parse()?;

            book.edit(field, &value, id)?;
            println!("Contact updated successfully");
            Ok(())
        }

        Commands::Delete { id } => {
            book.delete(id)?;
            println!("Contact deleted successfully");
            Ok(())
        }

        Commands::DeleteAll => {
            book.delete_all()?;
            println!("All contacts deleted");
            Ok(())
        }

        Commands::Find { field, value } => {
            let field: ContactField = field.parse()?;

            let found = book.find(field, &value)?;
            if found.is_empty() {
                println!("Found no contact with {} {{{}}}", field, value);
                return Ok(());
            }

            print!("{}", render(&found));
            Ok(())
        }
    }
}
