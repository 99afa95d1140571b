pub mod sqlite;

pub use sqlite::Database;

use crate::domain::contact::{Contact, ContactField, NewContact};
use crate::errors::AppError;

/// The persistence seam of the contact book.
pub trait ContactStore {
    /// Create the contact table if it does not exist yet.
    fn ensure_schema(&self) -> Result<(), AppError>;

    fn insert(&self, contact: &NewContact) -> Result<(), AppError>;

    /// Every contact, ordered by id ascending.
    fn list_all(&self) -> Result<Vec<Contact>, AppError>;

    /// Contacts whose `field` equals `value` exactly.
    fn list_where(&self, field: ContactField, value: &str) -> Result<Vec<Contact>, AppError>;

    fn update_field(&self, field: ContactField, value: &str, id: i64) -> Result<(), AppError>;

    fn delete(&self, id: i64) -> Result<(), AppError>;

    fn delete_all(&self) -> Result<(), AppError>;
}
