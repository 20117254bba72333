//! # API crate: server-side plumbing for the registration apps
//!
//! Shared by the `registration`, `dashboard` and `listing` binaries.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Credential verification and the session helpers (admin flag, flash messages, `require_admin` middleware) |
//! | [`db`] | Postgres pool, table bootstrap and the [`db::PgStore`] registration store |
//! | [`error`] | [`AppError`], the error type every handler returns |
//! | [`server`] | Session layer, static assets, tracing and graceful shutdown around an app router |
//! | [`settings`] | Layered configuration (defaults, `config/<app>.toml`, `EVENTS_*` environment) |

pub mod auth;
pub mod db;
pub mod error;
pub mod server;
pub mod settings;

pub use error::AppError;
pub use settings::Settings;
