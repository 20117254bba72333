//! This crate contains all shared UI for the workspace.
//!
//! Pages are ordinary Dioxus components rendered on the server into complete
//! HTML documents; the apps return the strings as `text/html` responses.

mod layout;
pub use layout::STYLESHEET;

mod fields;

mod registration;
pub use registration::registration_page;

mod login;
pub use login::login_page;

mod dashboard;
pub use dashboard::dashboard_page;

mod listing;
pub use listing::listing_page;
