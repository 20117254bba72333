//! # Registration store: the persistence seam
//!
//! Every app talks to the `registrations` table through [`RegistrationStore`], so
//! the same handlers run against Postgres in production (`api::db::PgStore`) and
//! against [`crate::MemoryStore`] in tests.
//!
//! Each method maps to exactly one statement. There are no multi-statement
//! transactions: an edit-fetch followed by a save can race with a concurrent
//! delete, and that race is left unguarded.
//!
//! | Method | Statement |
//! |--------|-----------|
//! | [`insert`](RegistrationStore::insert) | insert a new row, returning its id |
//! | [`update`](RegistrationStore::update) | replace the five mutable fields of one row; a missing id is not an error |
//! | [`delete`](RegistrationStore::delete) | remove one row; a missing id is not an error |
//! | [`get`](RegistrationStore::get) | fetch one row or none |
//! | [`list`](RegistrationStore::list) | every row in id order |
//! | [`list_recent`](RegistrationStore::list_recent) | rows matching an [`EventFilter`], newest first |
//!
//! [`save`](RegistrationStore::save) is the dashboard upsert built on top of
//! `insert` and `update`.

use std::future::Future;

use thiserror::Error;

use crate::models::{EventFilter, Registration, RegistrationForm, RegistrationId};

/// Failure reported by a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failure: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(err))
    }
}

/// Async access to the registrations table.
pub trait RegistrationStore: Clone + Send + Sync + 'static {
    fn insert(
        &self,
        form: &RegistrationForm,
    ) -> impl Future<Output = Result<RegistrationId, StoreError>> + Send;

    fn update(
        &self,
        id: RegistrationId,
        form: &RegistrationForm,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn delete(&self, id: RegistrationId) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn get(
        &self,
        id: RegistrationId,
    ) -> impl Future<Output = Result<Option<Registration>, StoreError>> + Send;

    fn list(&self) -> impl Future<Output = Result<Vec<Registration>, StoreError>> + Send;

    fn list_recent(
        &self,
        filter: &EventFilter,
    ) -> impl Future<Output = Result<Vec<Registration>, StoreError>> + Send;

    /// Update the row when an id is given, insert otherwise. Returns the row id.
    fn save(
        &self,
        id: Option<RegistrationId>,
        form: &RegistrationForm,
    ) -> impl Future<Output = Result<RegistrationId, StoreError>> + Send {
        async move {
            match id {
                Some(id) => {
                    self.update(id, form).await?;
                    Ok(id)
                }
                None => self.insert(form).await,
            }
        }
    }
}
