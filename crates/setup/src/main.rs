//! Database bootstrap tool.
//!
//! `festival-setup migrate` creates the schema; `festival-setup seed`
//! creates it if needed and then replaces all data with a demo data set.
//! Both read the same `DATABASE_URL` / `DB_*` variables as the server.

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use festival_db::{DbConfig, DbPool};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the five festival tables. Safe to run repeatedly.
    Migrate,
    /// Wipe every table and load demo stages, artists, concerts and tickets.
    Seed {
        /// Seed for the random choices, for reproducible data sets.
        #[arg(long, env = "SEED_RNG_SEED")]
        rng_seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "festival_setup=info,festival_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = DbConfig::from_env().context("Invalid database configuration")?;
    let pool = festival_db::create_pool(&config)
        .await
        .context("Failed to connect to database")?;

    let result = match cli.command {
        Command::Migrate => migrate(&pool).await,
        Command::Seed { rng_seed } => seed(&pool, rng_seed).await,
    };

    pool.close().await;
    result
}

async fn migrate(pool: &DbPool) -> anyhow::Result<()> {
    festival_db::run_migrations(pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Schema is up to date");
    Ok(())
}

async fn seed(pool: &DbPool, rng_seed: Option<u64>) -> anyhow::Result<()> {
    migrate(pool).await?;

    let rng_seed = rng_seed.unwrap_or_else(rand::random);
    tracing::info!(rng_seed, "Seeding database");
    let mut rng = StdRng::seed_from_u64(rng_seed);

    let report = festival_db::seed::run(pool, &mut rng)
        .await
        .context("Seeding failed; no data was changed")?;

    tracing::info!(
        palcos = report.palcos,
        artistas = report.artistas,
        concertos = report.concertos,
        bilhetes = report.bilhetes,
        alinhamentos = report.alinhamentos,
        "Seed complete"
    );
    Ok(())
}
