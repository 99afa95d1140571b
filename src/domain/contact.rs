use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// One record in the contact book. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub email: String,
}

/// A contact as provided by the user, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub email: String,
}

impl NewContact {
    pub fn new(name: String, surname: String, phone: String, email: String) -> Self {
        Self {
            name,
            surname,
            phone,
            email,
        }
    }
}

/// The editable/searchable columns of a contact.
///
/// Field names coming from the outside are parsed through this enum, so
/// an unrecognized name is rejected before any statement is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Surname,
    Phone,
    Email,
}

impl ContactField {
    pub fn column(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Surname => "surname",
            ContactField::Phone => "phone",
            ContactField::Email => "email",
        }
    }
}

impl FromStr for ContactField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(ContactField::Name),
            "surname" => Ok(ContactField::Surname),
            "phone" => Ok(ContactField::Phone),
            "email" => Ok(ContactField::Email),
            _ => Err(AppError::UnknownField(s.to_string())),
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

/// Supported sort keys. Anything else fails to parse, rather than
/// falling through to an arbitrary ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Name,
    Surname,
    Email,
    Phone,
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            // "index" kept as an alias for the id column
            "id" | "index" => Ok(SortKey::Id),
            "name" => Ok(SortKey::Name),
            "surname" => Ok(SortKey::Surname),
            "email" => Ok(SortKey::Email),
            "phone" => Ok(SortKey::Phone),
            _ => Err(AppError::UnknownField(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn field_names_parse_case_insensitively() -> Result<(), AppError> {
        assert_eq!("Surname".parse::<ContactField>()?, ContactField::Surname);
        assert_eq!("EMAIL".parse::<ContactField>()?, ContactField::Email);
        Ok(())
    }

    #[test]
    fn unknown_field_name_is_rejected() {
        let err = "nickname".parse::<ContactField>().unwrap_err();

        assert!(matches!(err, AppError::UnknownField(name) if name == "nickname"));
    }

    #[test]
    fn unknown_sort_key_is_rejected() {
        assert!("created_at".parse::<SortKey>().is_err());
        assert!("index".parse::<SortKey>().is_ok());
    }

    #[test]
    fn contact_serializes_deterministically() -> Result<(), AppError> {
        let contact = Contact {
            id: 1,
            name: "Anne-Mary".to_string(),
            surname: "Pitt".to_string(),
            phone: "+49883495333".to_string(),
            email: "ann-mary234@email.com".to_string(),
        };

        let first = serde_json::to_string(&contact)?;
        let second = serde_json::to_string(&contact.clone())?;

        assert_eq!(first, second);
        assert!(first.starts_with(r#"{"id":1,"name":"Anne-Mary""#));
        Ok(())
    }
}
