pub mod book;
pub mod contact;

pub use book::{render, ContactBook};
pub use contact::{Contact, ContactField, NewContact, SortKey};
