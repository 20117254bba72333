pub mod models;
pub mod repo;

mod memory;
pub use memory::MemoryStore;

pub use models::{EventFilter, Registration, RegistrationForm, RegistrationId, ALL_EVENTS};
pub use repo::{RegistrationStore, StoreError};
