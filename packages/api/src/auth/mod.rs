//! Dashboard authentication: credential checks and the session flag.

mod credentials;
mod session;

pub use credentials::{CredentialVerifier, StaticCredentials};
pub use session::{
    is_authenticated, require_admin, sign_in, sign_out, take_flash, push_flash, FLASH_KEY,
    SESSION_USER_KEY,
};
