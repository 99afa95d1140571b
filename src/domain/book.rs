use crate::cache::Cacher;
use crate::domain::contact::{Contact, ContactField, NewContact, SortKey};
use crate::errors::AppError;
use crate::store::ContactStore;

/// Cache file name for the refreshed contact list.
pub const REFRESH_CACHE_NAME: &str = "refresh";

/// Orchestrates the store, the cache and one in-memory snapshot of all
/// contacts.
///
/// Every mutation goes to the store first and then through `refresh`,
/// which re-reads the full list, replaces the snapshot and routes its
/// serialized form through the [`Cacher`]. If the refresh after a
/// successful mutation fails, the snapshot stays stale until the next
/// refresh succeeds.
pub struct ContactBook<S: ContactStore> {
    store: S,
    cacher: Cacher,
    contacts: Vec<Contact>,
}

impl<S: ContactStore> ContactBook<S> {
    pub fn new(store: S, cacher: Cacher) -> Result<Self, AppError> {
        let contacts = store.list_all()?;
        Ok(Self {
            store,
            cacher,
            contacts,
        })
    }

    /// The current snapshot, as of the last successful refresh.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn add(&mut self, contact: &NewContact) -> Result<String, AppError> {
        self.store.insert(contact)?;
        self.refresh()
    }

    pub fn delete(&mut self, id: i64) -> Result<String, AppError> {
        self.store.delete(id)?;
        self.refresh()
    }

    pub fn delete_all(&mut self) -> Result<String, AppError> {
        self.store.delete_all()?;
        self.refresh()
    }

    pub fn edit(&mut self, field: ContactField, value: &str, id: i64) -> Result<String, AppError> {
        self.store.update_field(field, value, id)?;
        self.refresh()
    }

    /// Store lookup by exact field value. Does not touch the snapshot
    /// or the cache.
    pub fn find(&self, field: ContactField, value: &str) -> Result<Vec<Contact>, AppError> {
        self.store.list_where(field, value)
    }

    /// The snapshot ordered by `key`. Stable, so equal keys keep their
    /// id order.
    pub fn sort(&self, key: SortKey) -> Vec<Contact> {
        let mut sorted = self.contacts.clone();
        match key {
            SortKey::Id => sorted.sort_by_key(|c| c.id),
            SortKey::Name => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::Surname => sorted.sort_by(|a, b| a.surname.cmp(&b.surname)),
            SortKey::Email => sorted.sort_by(|a, b| a.email.cmp(&b.email)),
            SortKey::Phone => sorted.sort_by(|a, b| a.phone.cmp(&b.phone)),
        }
        sorted
    }

    /// Re-read the full list, replace the snapshot and write it through
    /// the cache. Returns the serialized list text.
    pub fn refresh(&mut self) -> Result<String, AppError> {
        self.contacts = self.store.list_all()?;

        let snapshot = &self.contacts;
        self.cacher.cached(REFRESH_CACHE_NAME, || Ok(snapshot))
    }
}

/// Fixed-width table of contacts for console output.
pub fn render(contacts: &[Contact]) -> String {
    let rule = "-".repeat(74);

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "{:<10}{:<10}{:<15}{:<17}{:<17}\n",
        "index", "name", "surname", "email", "phone"
    ));
    out.push_str(&rule);
    out.push('\n');

    for contact in contacts {
        out.push_str(&format!(
            "{:<10}{:<10}{:<15}{:<17}{:<17}\n",
            contact.id, contact.name, contact.surname, contact.email, contact.phone
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;
    use crate::store::Database;

    fn seeded_book(cache_dir: &std::path::Path) -> Result<ContactBook<Database>, AppError> {
        let db = Database::open_in_memory()?;
        db.ensure_schema()?;

        let mut book = ContactBook::new(db, Cacher::new(cache_dir))?;

        book.add(&NewContact::new(
            "Caroline".to_string(),
            "Doe".to_string(),
            "08123456789".to_string(),
            "caroline@email.com".to_string(),
        ))?;
        book.add(&NewContact::new(
            "Anne-Mary".to_string(),
            "Pitt".to_string(),
            "+49883495333".to_string(),
            "ann-mary234@email.com".to_string(),
        ))?;
        book.add(&NewContact::new(
            "Anne-Mary".to_string(),
            "Abbot".to_string(),
            "08163456789".to_string(),
            "abbot@email.com".to_string(),
        ))?;

        Ok(book)
    }

    #[test]
    fn mutations_keep_snapshot_and_cache_in_step() -> Result<(), AppError> {
        let dir = tempdir()?;
        let mut book = seeded_book(dir.path())?;

        assert_eq!(book.contacts().len(), 3);

        let text = book.delete(2)?;

        let ids: Vec<i64> = book.contacts().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let cached = fs::read_to_string(dir.path().join(REFRESH_CACHE_NAME))?;
        assert_eq!(cached, text);

        let restored: Vec<Contact> = serde_json::from_str(&cached)?;
        assert_eq!(restored, book.contacts());
        Ok(())
    }

    #[test]
    fn refresh_without_change_returns_same_text() -> Result<(), AppError> {
        let dir = tempdir()?;
        let mut book = seeded_book(dir.path())?;

        let first = book.refresh()?;
        let second = book.refresh()?;

        assert_eq!(first, second);
        assert_eq!(
            fs::read_to_string(dir.path().join(REFRESH_CACHE_NAME))?,
            second
        );
        Ok(())
    }

    #[test]
    fn sort_by_name_is_stable_for_equal_keys() -> Result<(), AppError> {
        let dir = tempdir()?;
        let book = seeded_book(dir.path())?;

        let sorted = book.sort(SortKey::Name);

        let names: Vec<&str> = sorted.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Anne-Mary", "Anne-Mary", "Caroline"]);

        // The two Anne-Marys keep their id order
        assert_eq!(sorted[0].id, 2);
        assert_eq!(sorted[1].id, 3);

        // Sorting never reorders the snapshot itself
        assert_eq!(book.contacts()[0].name, "Caroline");
        Ok(())
    }

    #[test]
    fn find_does_not_touch_the_cache() -> Result<(), AppError> {
        let dir = tempdir()?;
        let book = seeded_book(dir.path())?;

        let cached_before = fs::read_to_string(dir.path().join(REFRESH_CACHE_NAME))?;

        let found = book.find(ContactField::Name, "Anne-Mary")?;
        assert_eq!(found.len(), 2);

        let cached_after = fs::read_to_string(dir.path().join(REFRESH_CACHE_NAME))?;
        assert_eq!(cached_before, cached_after);
        Ok(())
    }

    #[test]
    fn failed_cache_write_surfaces_but_insert_persists() -> Result<(), AppError> {
        let dir = tempdir()?;
        let db = Database::open_in_memory()?;
        db.ensure_schema()?;

        // Cache dir that does not exist makes every refresh fail
        let missing = dir.path().join("no-such-dir");
        let mut book = ContactBook::new(db, Cacher::new(&missing))?;

        let result = book.add(&NewContact::new(
            "Caroline".to_string(),
            "Doe".to_string(),
            "08123456789".to_string(),
            "caroline@email.com".to_string(),
        ));

        assert!(result.is_err());
        // The insert itself went through; only the cached refresh failed
        assert_eq!(book.contacts().len(), 1);
        assert!(!missing.exists());
        Ok(())
    }

    #[test]
    fn render_lists_one_row_per_contact() -> Result<(), AppError> {
        let dir = tempdir()?;
        let book = seeded_book(dir.path())?;

        let table = render(book.contacts());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[1].starts_with("index"));
        assert!(lines[3].contains("Caroline"));
        assert!(lines[5].contains("abbot@email.com"));
        Ok(())
    }
}
