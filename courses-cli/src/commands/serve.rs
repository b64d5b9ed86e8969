//! HTTP server command
//!
//! Opens the pool, applies migrations, serves until shutdown, then closes
//! the pool.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use courses_server::db::{run_migrations, PgCourseStore};
use courses_server::http::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "COURSES_BIND", default_value = "127.0.0.1:3333")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Do not apply pending migrations at startup
    #[arg(long)]
    pub skip_migrations: bool,

    /// Serve Swagger UI at /docs (always on in debug builds)
    #[arg(long, env = "COURSES_DOCS")]
    pub docs: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting courses server on {}", args.bind);

    let pool = args.database.connect().await?;

    if args.skip_migrations {
        tracing::info!("Skipping migrations");
    } else {
        run_migrations(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    let store = Arc::new(PgCourseStore::new(pool.clone()));
    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        docs: args.docs || cfg!(debug_assertions),
    };

    // Blocks until shutdown
    let result = run_server(store, config).await.context("Server error");

    pool.close().await;
    tracing::info!("Database pool closed");

    result
}
