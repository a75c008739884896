//! `randomweb-seed`: load a JSON file of curated websites into the catalog.

use std::path::PathBuf;

use anyhow::Context;
use chrono::Datelike;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use randomweb_api::config::DatabaseConfig;
use randomweb_api::seed::{seed_catalog, SeedOptions};
use randomweb_core::seed::parse_seed_document;
use randomweb_db::PgCatalogStore;

#[derive(Debug, Parser)]
#[command(
    name = "randomweb-seed",
    about = "Load curated websites into the catalog as approved entries"
)]
struct Args {
    /// JSON file containing an array of websites.
    #[arg(long, default_value = "websites.json")]
    file: PathBuf,

    /// Keep existing sites instead of clearing the catalog first.
    #[arg(long)]
    keep_existing: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "randomweb_seed=info,randomweb_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let raw = tokio::fs::read_to_string(&args.file)
        .await
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let records = parse_seed_document(&raw)?;
    tracing::info!(file = %args.file.display(), records = records.len(), "Read seed file");

    let db = DatabaseConfig::try_from_env()?;
    let pool = randomweb_db::create_pool(&db.url, db.max_connections)
        .await
        .context("Failed to connect to database")?;
    randomweb_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let store = PgCatalogStore::new(pool.clone());
    let options = SeedOptions {
        keep_existing: args.keep_existing,
        current_year: chrono::Utc::now().year(),
    };
    let report = seed_catalog(&store, records, options).await?;

    println!("Database statistics:");
    println!("--------------------");
    for entry in &report.categories {
        println!("{}: {} sites", entry.category, entry.count);
    }
    println!();
    println!("Removed: {}", report.removed);
    println!("Inserted: {} (skipped {})", report.inserted, report.skipped);
    println!("Total approved sites: {}", report.total_approved);

    pool.close().await;
    Ok(())
}
