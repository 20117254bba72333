//! # Admin dashboard
//!
//! Anonymous visitors only reach the login form. A successful login stores the
//! admin flag in the session; `/dashboard` and `/save` sit behind
//! [`require_admin`], which re-checks that flag on every request.
//!
//! | Route | Purpose |
//! |-------|---------|
//! | `GET /`, `GET /login` | login form |
//! | `POST /login` | check credentials, redirect to `/dashboard` or redisplay the form |
//! | `GET /logout` | clear the session |
//! | `GET /dashboard` | list rows; `?del=<id>` deletes first, `?edit=<id>` pre-fills the form |
//! | `POST /save` | insert, or replace the row named by a non-blank `id` |

use std::sync::Arc;

use api::auth::{require_admin, sign_in, sign_out, CredentialVerifier};
use api::AppError;
use axum::{
    extract::{Query, State},
    middleware,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use store::{RegistrationForm, RegistrationId, RegistrationStore};
use tower_sessions::Session;
use tracing::{info, warn};

/// Shared state of the dashboard routes.
#[derive(Clone)]
pub struct DashboardState<S> {
    pub store: S,
    pub credentials: Arc<dyn CredentialVerifier>,
}

impl<S: RegistrationStore> DashboardState<S> {
    pub fn new(store: S, credentials: impl CredentialVerifier + 'static) -> Self {
        Self {
            store,
            credentials: Arc::new(credentials),
        }
    }
}

pub fn router<S: RegistrationStore>(state: DashboardState<S>) -> Router {
    let admin = Router::new()
        .route("/dashboard", get(dashboard::<S>))
        .route("/save", post(save::<S>))
        .route_layer(middleware::from_fn(require_admin));

    Router::new()
        .route("/", get(login_form))
        .route("/login", get(login_form).post(login::<S>))
        .route("/logout", get(logout))
        .merge(admin)
        .with_state(state)
}

#[derive(Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

async fn login_form() -> Html<String> {
    Html(ui::login_page(false))
}

async fn login<S: RegistrationStore>(
    State(state): State<DashboardState<S>>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    if !state.credentials.verify(&form.username, &form.password) {
        warn!("Rejected login attempt for {:?}", form.username);
        return Ok(Html(ui::login_page(true)).into_response());
    }
    sign_in(&session, &form.username).await?;
    info!("{} signed in", form.username);
    Ok(Redirect::to("/dashboard").into_response())
}

async fn logout(session: Session) -> Result<Redirect, AppError> {
    sign_out(&session).await?;
    Ok(Redirect::to("/login"))
}

/// Query string of `GET /dashboard`.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub del: Option<String>,
    pub edit: Option<String>,
}

/// What a dashboard request asks for besides the listing.
///
/// Both ids may be present: the delete runs before the listing and the edit
/// fetch after it, so editing the row just deleted finds nothing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DashboardAction {
    pub delete: Option<RegistrationId>,
    pub edit: Option<RegistrationId>,
}

impl DashboardQuery {
    pub fn action(&self) -> Result<DashboardAction, AppError> {
        Ok(DashboardAction {
            delete: parse_id(self.del.as_deref())?,
            edit: parse_id(self.edit.as_deref())?,
        })
    }
}

/// Absent and blank values mean "no id".
fn parse_id(raw: Option<&str>) -> Result<Option<RegistrationId>, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| AppError::MalformedId(value.to_string())),
    }
}

async fn dashboard<S: RegistrationStore>(
    State(state): State<DashboardState<S>>,
    Query(query): Query<DashboardQuery>,
) -> Result<Html<String>, AppError> {
    let action = query.action()?;

    if let Some(id) = action.delete {
        state.store.delete(id).await?;
        info!("Deleted registration #{id}");
    }

    let rows = state.store.list().await?;

    let editing = match action.edit {
        Some(id) => state.store.get(id).await?,
        None => None,
    };

    Ok(Html(ui::dashboard_page(&rows, editing.as_ref())))
}

/// Body of `POST /save`: the five fields plus the optional row id.
#[derive(Debug, Deserialize)]
pub struct SaveForm {
    #[serde(default)]
    id: Option<String>,
    name: String,
    email: String,
    mobile: String,
    event: String,
    password: String,
}

impl SaveForm {
    fn into_parts(self) -> Result<(Option<RegistrationId>, RegistrationForm), AppError> {
        let id = parse_id(self.id.as_deref())?;
        let form = RegistrationForm {
            name: self.name,
            email: self.email,
            mobile: self.mobile,
            event: self.event,
            password: self.password,
        };
        Ok((id, form))
    }
}

async fn save<S: RegistrationStore>(
    State(state): State<DashboardState<S>>,
    Form(form): Form<SaveForm>,
) -> Result<Redirect, AppError> {
    let (id, form) = form.into_parts()?;
    let saved = state.store.save(id, &form).await?;
    match id {
        Some(_) => info!("Updated registration #{saved}"),
        None => info!("Added registration #{saved}"),
    }
    Ok(Redirect::to("/dashboard"))
}
