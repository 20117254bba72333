//! Public read-only listing with an event filter.

use api::AppError;
use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;
use store::{EventFilter, RegistrationStore};

pub fn router<S: RegistrationStore>(store: S) -> Router {
    Router::new().route("/", get(index::<S>)).with_state(store)
}

#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub event: Option<String>,
}

async fn index<S: RegistrationStore>(
    State(store): State<S>,
    Query(query): Query<ListingQuery>,
) -> Result<Html<String>, AppError> {
    let filter = EventFilter::from_query(query.event);
    let rows = store.list_recent(&filter).await?;
    tracing::debug!("Listing {} registrations for {:?}", rows.len(), filter);
    Ok(Html(ui::listing_page(&rows, &filter)))
}
