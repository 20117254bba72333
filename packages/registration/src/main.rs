use anyhow::Context as _;
use api::db::{self, PgStore};
use api::{server, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    server::init_tracing();

    let settings = Settings::new("registration", 5000).context("Failed to load settings")?;
    let pool = db::connect(&settings.database)
        .await
        .context("Failed to connect to database")?;
    db::init_database(&pool).await?;

    let sessions = server::session_store(pool.clone()).await?;
    let router = registration::router(PgStore::new(pool));
    server::launch(server::assemble(router, sessions, &settings), &settings).await
}
