//! CLI for recomputing derived provider reputation state.
//!
//! Sweeps every provider (or a single one) and rebuilds avg_rating,
//! total_reviews and the cached insight maps from the full review set.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use server_core::common::ProviderId;
use server_core::domains::insights::refresh_provider_insights;
use server_core::domains::providers::models::Provider;
use server_core::domains::reviews::activities::update_provider_stats;
use server_core::kernel::{LexiconSentiment, ServerDeps};
use server_core::Config;
use sqlx::postgres::PgPoolOptions;

#[derive(Parser)]
#[command(name = "refresh_stats")]
#[command(about = "Recompute provider ratings and insight maps from reviews")]
struct Cli {
    /// Restrict the sweep to a single provider
    #[arg(long)]
    provider_id: Option<String>,

    /// Recompute ratings only, skipping the insight refresh
    #[arg(long)]
    skip_insights: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    let deps = ServerDeps::new(pool.clone(), Arc::new(LexiconSentiment::new()));

    let provider_ids = match &cli.provider_id {
        Some(raw) => vec![ProviderId::parse(raw).context("Invalid provider ID")?],
        None => Provider::all_ids(&pool).await?,
    };

    tracing::info!(count = provider_ids.len(), "Refreshing provider stats");

    for provider_id in provider_ids {
        update_provider_stats(provider_id, &pool).await?;
        if !cli.skip_insights {
            refresh_provider_insights(provider_id, &deps).await?;
        }
    }

    tracing::info!("All provider stats updated");
    Ok(())
}
