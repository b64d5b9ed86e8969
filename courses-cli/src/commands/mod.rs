//! Subcommand implementations

pub mod migrate;
pub mod seed;
pub mod serve;

use anyhow::{Context, Result};
use clap::Args;
use courses_server::db::{create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
use courses_server::db::PgPool;

pub use migrate::{run_migrate, MigrateArgs};
pub use seed::{run_seed, SeedArgs};
pub use serve::{run_serve, ServeArgs};

/// Database connection options shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL (overrides environment / .env)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum connections in the pool
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// Open a connection pool.
    pub async fn connect(&self) -> Result<PgPool> {
        let database_url = self
            .database_url
            .as_deref()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

        create_pool_with_options(database_url, self.max_connections)
            .await
            .context("Failed to create database pool")
    }
}
