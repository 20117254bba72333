//! # Server launch, shared by the three apps
//!
//! Each app builds its own [`Router`], layers it, and hands it to [`launch`]:
//!
//! - [`assemble_public`] adds `/static` assets from `server.static_dir` and
//!   request tracing. The listing app stops here.
//! - [`assemble`] puts a session layer in front of that. Production uses the
//!   Postgres store from [`session_store`]; tests pass an in-memory one.
//! - [`launch`] binds and serves until Ctrl+C / SIGTERM.

use anyhow::Context as _;
use axum::Router;
use sqlx::PgPool;
use tokio::{net::TcpListener, signal};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer, SessionStore};
use tower_sessions_sqlx_store::PostgresStore;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::settings::Settings;

/// Install the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    fmt().with_env_filter(filter).init();
}

/// Add static assets and request tracing to an app router.
pub fn assemble_public(router: Router, settings: &Settings) -> Router {
    router
        .nest_service("/static", ServeDir::new(&settings.server.static_dir))
        .layer(TraceLayer::new_for_http())
}

/// Like [`assemble_public`], with the app's routes behind a session layer.
pub fn assemble<S>(router: Router, session_store: S, settings: &Settings) -> Router
where
    S: SessionStore + Clone,
{
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(settings.session.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::seconds(
            settings.session.expiry_secs,
        )));

    assemble_public(router.layer(session_layer), settings)
}

/// Postgres-backed session store, with its table created if missing.
pub async fn session_store(pool: PgPool) -> anyhow::Result<PostgresStore> {
    let store = PostgresStore::new(pool);
    store
        .migrate()
        .await
        .context("Failed to migrate session store")?;
    Ok(store)
}

/// Serve an assembled app until a shutdown signal arrives.
pub async fn launch(app: Router, settings: &Settings) -> anyhow::Result<()> {
    let address = settings.server.address();
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server listening on http://{address}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
