use anyhow::Context as _;
use api::db::{self, PgStore};
use api::{server, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    server::init_tracing();

    let settings = Settings::new("listing", 5002).context("Failed to load settings")?;
    let pool = db::connect(&settings.database)
        .await
        .context("Failed to connect to database")?;
    db::init_database(&pool).await?;

    let router = listing::router(PgStore::new(pool));
    server::launch(server::assemble_public(router, &settings), &settings).await
}
