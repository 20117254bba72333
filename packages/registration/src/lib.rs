//! Public registration form.
//!
//! `GET /registration` shows the empty form, `POST /registration` inserts one
//! row and redirects back to the form with a one-shot confirmation.

use api::auth::{push_flash, take_flash};
use api::AppError;
use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::get,
    Form, Router,
};
use store::{RegistrationForm, RegistrationStore};
use tower_sessions::Session;

/// Flash shown after a successful submission.
pub const REGISTERED_MESSAGE: &str = "Registration Done!";

pub fn router<S: RegistrationStore>(store: S) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/registration") }))
        .route("/registration", get(registration_form).post(register::<S>))
        .with_state(store)
}

async fn registration_form(session: Session) -> Result<Html<String>, AppError> {
    let flash = take_flash(&session).await?;
    Ok(Html(ui::registration_page(flash)))
}

async fn register<S: RegistrationStore>(
    State(store): State<S>,
    session: Session,
    Form(form): Form<RegistrationForm>,
) -> Result<Redirect, AppError> {
    let id = store.insert(&form).await?;
    tracing::info!("New registration #{id} for event {:?}", form.event);
    push_flash(&session, REGISTERED_MESSAGE).await?;
    Ok(Redirect::to("/registration"))
}
