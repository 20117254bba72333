use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use crate::models::{EventFilter, Registration, RegistrationForm, RegistrationId};
use crate::repo::{RegistrationStore, StoreError};

/// In-memory RegistrationStore for tests and local runs without a database.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    table: Arc<Mutex<Table>>,
}

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<RegistrationId, Registration>,
    last_id: RegistrationId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RegistrationStore for MemoryStore {
    async fn insert(&self, form: &RegistrationForm) -> Result<RegistrationId, StoreError> {
        let mut table = self.table();
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(
            id,
            Registration {
                id,
                name: form.name.clone(),
                email: form.email.clone(),
                mobile: form.mobile.clone(),
                event: form.event.clone(),
                password: form.password.clone(),
                created_at: Utc::now(),
            },
        );
        Ok(id)
    }

    async fn update(&self, id: RegistrationId, form: &RegistrationForm) -> Result<(), StoreError> {
        if let Some(row) = self.table().rows.get_mut(&id) {
            row.name = form.name.clone();
            row.email = form.email.clone();
            row.mobile = form.mobile.clone();
            row.event = form.event.clone();
            row.password = form.password.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: RegistrationId) -> Result<(), StoreError> {
        self.table().rows.remove(&id);
        Ok(())
    }

    async fn get(&self, id: RegistrationId) -> Result<Option<Registration>, StoreError> {
        Ok(self.table().rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Registration>, StoreError> {
        Ok(self.table().rows.values().cloned().collect())
    }

    async fn list_recent(&self, filter: &EventFilter) -> Result<Vec<Registration>, StoreError> {
        let mut rows: Vec<Registration> = self
            .table()
            .rows
            .values()
            .filter(|row| filter.matches(row))
            .cloned()
            .collect();
        // Newest first; ids break ties between rows inserted within the same instant.
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, event: &str) -> RegistrationForm {
        RegistrationForm {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            mobile: "555".to_string(),
            event: event.to_string(),
            password: "p1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = MemoryStore::new();

        // Initially empty
        assert!(store.list().await.unwrap().is_empty());

        let submitted = form("Alice", "Conf");
        let id = store.insert(&submitted).await.unwrap();

        let rows = store.list().await.unwrap();
        assert_eq!(rows.len(), 1);
        let row = store.get(id).await.unwrap().unwrap();
        assert_eq!(row.id, id);
        assert_eq!(row.to_form(), submitted);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let store = MemoryStore::new();

        let first = store.insert(&form("Alice", "Conf")).await.unwrap();
        store.delete(first).await.unwrap();
        let second = store.insert(&form("Bob", "Conf")).await.unwrap();

        assert_ne!(first, second);
        assert!(store.get(first).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryStore::new();

        let keep = store.insert(&form("Alice", "Conf")).await.unwrap();
        let gone = store.insert(&form("Bob", "Conf")).await.unwrap();

        store.delete(gone).await.unwrap();
        let after_once = store.list().await.unwrap();
        store.delete(gone).await.unwrap();
        let after_twice = store.list().await.unwrap();

        assert_eq!(after_once, after_twice);
        assert_eq!(after_twice.len(), 1);
        assert_eq!(after_twice[0].id, keep);
    }

    #[tokio::test]
    async fn test_save_round_trip_preserves_identity() {
        let store = MemoryStore::new();

        let id = store.save(None, &form("Alice", "Conf")).await.unwrap();
        let before = store.get(id).await.unwrap().unwrap();

        let changed = form("Alicia", "Workshop");
        let saved = store.save(Some(id), &changed).await.unwrap();

        assert_eq!(saved, id);
        let after = store.get(id).await.unwrap().unwrap();
        assert_eq!(after.to_form(), changed);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_silent() {
        let store = MemoryStore::new();
        store.insert(&form("Alice", "Conf")).await.unwrap();

        store.update(42, &form("Ghost", "Conf")).await.unwrap();

        let rows = store.list().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Alice");
    }

    #[tokio::test]
    async fn test_list_recent_filters_newest_first() {
        let store = MemoryStore::new();

        let alice = store.insert(&form("Alice", "Conf")).await.unwrap();
        let bob = store.insert(&form("Bob", "Other")).await.unwrap();
        let carol = store.insert(&form("Carol", "Conf")).await.unwrap();

        let all = store.list_recent(&EventFilter::All).await.unwrap();
        let ids: Vec<_> = all.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![carol, bob, alice]);

        let conf = store
            .list_recent(&EventFilter::Event("Conf".into()))
            .await
            .unwrap();
        let expected: Vec<_> = all.into_iter().filter(|r| r.event == "Conf").collect();
        assert_eq!(conf, expected);

        let none = store
            .list_recent(&EventFilter::Event("conf".into()))
            .await
            .unwrap();
        assert!(none.is_empty());
    }
}
