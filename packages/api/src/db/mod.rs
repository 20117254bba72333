//! # Database module: Postgres access for the registration apps
//!
//! - [`connect`] opens the connection pool described by [`crate::settings::Database`].
//! - [`init_database`] creates the `registrations` table if it does not exist yet.
//! - [`PgStore`] implements [`store::RegistrationStore`] with one statement per call.

mod pool;
mod postgres;

pub use pool::{connect, init_database};
pub use postgres::PgStore;
