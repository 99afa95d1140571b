use std::path::Path;

use log::debug;
use rusqlite::{params, Connection, Row};

use super::ContactStore;
use crate::domain::contact::{Contact, ContactField, NewContact};
use crate::errors::AppError;

const CREATE_CONTACT_BOOK: &str = "
    CREATE TABLE IF NOT EXISTS contactbook (
        id INTEGER PRIMARY KEY,
        name TEXT,
        surname TEXT,
        phone TEXT,
        email TEXT
    )";

const INSERT_CONTACT: &str = "
    INSERT INTO contactbook (name, surname, phone, email)
    VALUES (?1, ?2, ?3, ?4)";

const LIST_CONTACTS: &str =
    "SELECT id, name, surname, phone, email FROM contactbook ORDER BY id";

const DELETE_CONTACT: &str = "DELETE FROM contactbook WHERE id = ?1";

const DELETE_ALL_CONTACTS: &str = "DELETE FROM contactbook";

const DROP_TABLE: &str = "DROP TABLE IF EXISTS contactbook";

// One statement per editable column. The field enum is the only way in,
// so no unrecognized name can ever reach the database.
fn update_stmt(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "UPDATE contactbook SET name = ?1 WHERE id = ?2",
        ContactField::Surname => "UPDATE contactbook SET surname = ?1 WHERE id = ?2",
        ContactField::Phone => "UPDATE contactbook SET phone = ?1 WHERE id = ?2",
        ContactField::Email => "UPDATE contactbook SET email = ?1 WHERE id = ?2",
    }
}

fn select_stmt(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => {
            "SELECT id, name, surname, phone, email FROM contactbook WHERE name = ?1 ORDER BY id"
        }
        ContactField::Surname => {
            "SELECT id, name, surname, phone, email FROM contactbook WHERE surname = ?1 ORDER BY id"
        }
        ContactField::Phone => {
            "SELECT id, name, surname, phone, email FROM contactbook WHERE phone = ?1 ORDER BY id"
        }
        ContactField::Email => {
            "SELECT id, name, surname, phone, email FROM contactbook WHERE email = ?1 ORDER BY id"
        }
    }
}

fn row_to_contact(row: &Row) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: row.get(0)?,
        name: row.get(1)?,
        surname: row.get(2)?,
        phone: row.get(3)?,
        email: row.get(4)?,
    })
}

/// SQLite-backed contact store. The connection is held for the lifetime
/// of this value and released on drop, error paths included.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, AppError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    pub fn drop_table(&self) -> Result<(), AppError> {
        self.conn.execute(DROP_TABLE, [])?;
        Ok(())
    }
}

impl ContactStore for Database {
    fn ensure_schema(&self) -> Result<(), AppError> {
        debug!("ensuring contactbook table exists");
        self.conn.execute(CREATE_CONTACT_BOOK, [])?;
        Ok(())
    }

    fn insert(&self, contact: &NewContact) -> Result<(), AppError> {
        self.conn.execute(
            INSERT_CONTACT,
            params![contact.name, contact.surname, contact.phone, contact.email],
        )?;
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<Contact>, AppError> {
        let mut stmt = self.conn.prepare(LIST_CONTACTS)?;
        let rows = stmt.query_map([], row_to_contact)?;

        let mut contacts = Vec::new();
        for contact in rows {
            contacts.push(contact?);
        }
        Ok(contacts)
    }

    fn list_where(&self, field: ContactField, value: &str) -> Result<Vec<Contact>, AppError> {
        let mut stmt = self.conn.prepare(select_stmt(field))?;
        let rows = stmt.query_map(params![value], row_to_contact)?;

        let mut contacts = Vec::new();
        for contact in rows {
            contacts.push(contact?);
        }
        Ok(contacts)
    }

    fn update_field(&self, field: ContactField, value: &str, id: i64) -> Result<(), AppError> {
        let affected = self.conn.execute(update_stmt(field), params![value, id])?;

        if affected == 0 {
            return Err(AppError::NotFound("Contact".to_string()));
        }
        Ok(())
    }

    fn delete(&self, id: i64) -> Result<(), AppError> {
        let affected = self.conn.execute(DELETE_CONTACT, params![id])?;

        if affected == 0 {
            return Err(AppError::NotFound("Contact".to_string()));
        }
        Ok(())
    }

    fn delete_all(&self) -> Result<(), AppError> {
        self.conn.execute(DELETE_ALL_CONTACTS, [])?;
        Ok(())
    }
}
