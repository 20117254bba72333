//! # Domain models for event registrations
//!
//! Defines the single entity of the system and the values that flow into and out
//! of a [`crate::RegistrationStore`].
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Registration`] | A stored signup row: server-assigned `id`, the five mutable text fields and the insertion timestamp. |
//! | [`RegistrationForm`] | The five mutable fields as submitted by a form. Used for inserts and full-row updates. |
//! | [`EventFilter`] | The public listing filter: every row, or only rows for one exact event name. |
//!
//! Passwords are kept exactly as submitted. Callers that render rows for the
//! public must leave the field out themselves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-generated row identifier.
pub type RegistrationId = i64;

/// Query value meaning "no filter".
pub const ALL_EVENTS: &str = "ALL";

/// A registration row as stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub id: RegistrationId,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub event: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl Registration {
    /// The mutable part of the row, e.g. to pre-fill an edit form.
    pub fn to_form(&self) -> RegistrationForm {
        RegistrationForm {
            name: self.name.clone(),
            email: self.email.clone(),
            mobile: self.mobile.clone(),
            event: self.event.clone(),
            password: self.password.clone(),
        }
    }
}

/// Submitted field values for an insert or a full-row replace.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub event: String,
    pub password: String,
}

/// Filter applied by the public listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EventFilter {
    #[default]
    All,
    /// Exact match on the `event` column.
    Event(String),
}

impl EventFilter {
    /// Build a filter from an optional query value. Absent and `"ALL"` both mean every row;
    /// any other value, the empty string included, is an exact match.
    pub fn from_query(value: Option<String>) -> Self {
        match value {
            None => Self::All,
            Some(v) if v == ALL_EVENTS => Self::All,
            Some(v) => Self::Event(v),
        }
    }

    /// The value to echo back into a filter form.
    pub fn as_query(&self) -> &str {
        match self {
            Self::All => ALL_EVENTS,
            Self::Event(event) => event,
        }
    }

    pub fn matches(&self, registration: &Registration) -> bool {
        match self {
            Self::All => true,
            Self::Event(event) => registration.event == *event,
        }
    }
}
