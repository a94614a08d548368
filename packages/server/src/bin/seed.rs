//! CLI that loads demo providers and reviews for local development.
//!
//! Data is deterministic so repeated runs against a fresh database
//! produce identical directories.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use server_core::common::RatingSet;
use server_core::domains::insights::refresh_provider_insights;
use server_core::domains::providers::models::{CreateProvider, Provider};
use server_core::domains::reviews::activities::update_provider_stats;
use server_core::domains::reviews::models::{CreateReview, Review};
use server_core::kernel::{LexiconSentiment, ServerDeps};
use server_core::Config;
use sqlx::postgres::PgPoolOptions;

#[derive(Parser)]
#[command(name = "seed")]
#[command(about = "Load demo providers and reviews")]
struct Cli {
    /// Number of reviews per provider
    #[arg(long, default_value_t = 8)]
    reviews_per_provider: usize,
}

const PROVIDERS: &[(&str, &str, &str, &str)] = &[
    // Electricians in Mumbai
    ("Rajesh Kumar", "electrician", "mumbai", "+919876543210"),
    ("Amit Sharma", "electrician", "mumbai", "+919876543211"),
    ("Suresh Yadav", "electrician", "mumbai", "+919876543212"),
    // Plumbers in Mumbai
    ("Kiran Singh", "plumber", "mumbai", "+919876543213"),
    ("Deepak Gupta", "plumber", "mumbai", "+919876543214"),
    ("Manoj Tiwari", "plumber", "mumbai", "+919876543215"),
    // Cleaning services in Mumbai
    ("Kavita Devi", "cleaning", "mumbai", "+919876543216"),
    ("Sunita Kumari", "cleaning", "mumbai", "+919876543217"),
    ("Geeta Sharma", "cleaning", "mumbai", "+919876543218"),
];

const REVIEW_TEXTS: &[(&str, &[&str])] = &[
    (
        "electrician",
        &[
            "Very punctual and skilled electrician. Fixed all wiring issues perfectly!",
            "Great work! Professional behavior and reasonable pricing.",
            "Came on time, very polite, and excellent quality work.",
            "Skilled electrician but slightly expensive. Worth it for the quality.",
            "Amazing service! Cleaned up after work and explained everything.",
        ],
    ),
    (
        "plumber",
        &[
            "Excellent plumber! Fixed the leak permanently and fair pricing.",
            "Very skilled and punctual. Highly recommend for any plumbing work.",
            "Good work but could improve on cleanliness after completing job.",
            "Professional service and polite behavior. Will call again.",
            "Quick and efficient work. Solved the problem in no time.",
        ],
    ),
    (
        "cleaning",
        &[
            "Best cleaning service! Very thorough and trustworthy.",
            "Always punctual and does amazing work. House looks brand new!",
            "Good cleaning but sometimes rushes. Overall satisfied with service.",
            "Excellent work and very reasonable pricing. Highly recommended!",
            "Professional and reliable. Uses good quality cleaning supplies.",
        ],
    ),
];

const REVIEWER_PHONES: &[&str] = &[
    "+919123456789",
    "+919123456790",
    "+919123456791",
    "+919123456792",
    "+919123456793",
    "+919123456794",
    "+919123456795",
    "+919123456796",
    "+919123456797",
];

/// Deterministic score in [low, 5], cycling with the review index.
fn score(low: i16, index: usize) -> i16 {
    low + (index as i16 % (5 - low + 1))
}

fn texts_for(service_type: &str) -> &'static [&'static str] {
    REVIEW_TEXTS
        .iter()
        .find(|(kind, _)| *kind == service_type)
        .map(|(_, texts)| *texts)
        .unwrap_or(REVIEW_TEXTS[0].1)
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

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let deps = ServerDeps::new(pool.clone(), Arc::new(LexiconSentiment::new()));

    for (name, service_type, location, phone) in PROVIDERS {
        tracing::info!(name, service_type, "Creating provider");

        let provider = Provider::create(
            CreateProvider {
                name: name.to_string(),
                service_type: service_type.to_string(),
                location: location.to_string(),
                phone_number: Some(phone.to_string()),
            },
            &pool,
        )
        .await?;

        let texts = texts_for(service_type);
        for i in 0..cli.reviews_per_provider {
            Review::create(
                CreateReview {
                    provider_id: provider.id,
                    reviewer_phone: REVIEWER_PHONES[i % REVIEWER_PHONES.len()].to_string(),
                    ratings: RatingSet {
                        punctuality: score(3, i),
                        skill_quality: score(4, i),
                        politeness: score(3, i + 1),
                        pricing: score(3, i + 2),
                    },
                    review_text: texts[i % texts.len()].to_string(),
                },
                &pool,
            )
            .await?;
        }

        update_provider_stats(provider.id, &pool).await?;
        refresh_provider_insights(provider.id, &deps).await?;
    }

    tracing::info!("All demo data created");
    Ok(())
}
