pub use crate::cache::Cacher;
pub use crate::cli::{command, run_app};
pub use crate::domain::{
    book::{render, ContactBook, REFRESH_CACHE_NAME},
    contact::{Contact, ContactField, NewContact, SortKey},
};
pub use crate::errors::AppError;
pub use crate::store::{ContactStore, Database};
