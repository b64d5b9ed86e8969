//! Seed the database with demo users, courses and enrollments

use anyhow::{Context, Result};
use clap::Parser;

use courses_server::db::{seed, SeedData};

use super::DatabaseArgs;

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let pool = args.database.connect().await?;

    let data = SeedData::generate();
    let result = seed(&pool, &data).await.context("Failed to seed database");
    pool.close().await;

    let summary = result?;
    tracing::info!(
        users = summary.users,
        courses = summary.courses,
        enrollments = summary.enrollments,
        "Database seeded"
    );
    Ok(())
}
