//! Session keys and helpers shared by the apps.
//!
//! The only state kept per session is the signed-in admin name under
//! [`SESSION_USER_KEY`] and an optional one-shot message under [`FLASH_KEY`].

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::error::AppError;

/// Key for storing the signed-in admin in session.
pub const SESSION_USER_KEY: &str = "user";

/// Key for a message shown once on the next page render.
pub const FLASH_KEY: &str = "flash";

/// Whether the session carries the admin flag.
pub async fn is_authenticated(session: &Session) -> Result<bool, tower_sessions::session::Error> {
    Ok(session.get::<String>(SESSION_USER_KEY).await?.is_some())
}

pub async fn sign_in(session: &Session, username: &str) -> Result<(), tower_sessions::session::Error> {
    session.insert(SESSION_USER_KEY, username).await
}

/// Drop every key of the session and delete it from the store.
pub async fn sign_out(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}

pub async fn push_flash(session: &Session, message: &str) -> Result<(), tower_sessions::session::Error> {
    session.insert(FLASH_KEY, message).await
}

/// Remove and return the pending flash message, if any.
pub async fn take_flash(session: &Session) -> Result<Option<String>, tower_sessions::session::Error> {
    session.remove::<String>(FLASH_KEY).await
}

/// Middleware for admin-only routes: anonymous requests go to `/login` before
/// the handler runs.
pub async fn require_admin(session: Session, request: Request, next: Next) -> Response {
    match is_authenticated(&session).await {
        Ok(true) => next.run(request).await,
        Ok(false) => {
            tracing::warn!("Anonymous request to {} redirected to login", request.uri().path());
            Redirect::to("/login").into_response()
        }
        Err(e) => AppError::from(e).into_response(),
    }
}
