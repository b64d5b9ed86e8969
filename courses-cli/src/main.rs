//! courses CLI - run and maintain the courses HTTP service
//!
//! - `serve`: HTTP API over PostgreSQL
//! - `migrate`: apply schema migrations
//! - `seed`: insert demo users, courses and enrollments

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "courses",
    author,
    version,
    about = "HTTP service for creating, listing and updating courses"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::ServeArgs),
    /// Apply database migrations
    Migrate(commands::MigrateArgs),
    /// Insert demo users, courses and enrollments
    Seed(commands::SeedArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before parsing so clap sees DATABASE_URL
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(cli.debug)?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Migrate(args) => commands::run_migrate(args).await,
        Commands::Seed(args) => commands::run_seed(args).await,
    }
}
