use anyhow::Context as _;
use api::auth::StaticCredentials;
use api::db::{self, PgStore};
use api::{server, Settings};
use dashboard::DashboardState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    server::init_tracing();

    let settings = Settings::new("dashboard", 5001).context("Failed to load settings")?;
    let pool = db::connect(&settings.database)
        .await
        .context("Failed to connect to database")?;
    db::init_database(&pool).await?;

    let sessions = server::session_store(pool.clone()).await?;
    let state = DashboardState::new(PgStore::new(pool), StaticCredentials::from(&settings.admin));
    let app = server::assemble(dashboard::router(state), sessions, &settings);
    server::launch(app, &settings).await
}
