//! Database layer - connection pool, migrations and course stores
//!
//! - Connection pool (max 5 connections by default)
//! - List operations use JOINs - no N+1 queries
//! - Handlers depend on the `CourseStore` trait, not on sqlx

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod seed;
pub mod store;

pub use memory::MemoryCourseStore;
pub use pool::{create_pool, create_pool_with_options, run_migrations, DEFAULT_MAX_CONNECTIONS};
pub use postgres::PgCourseStore;
pub use seed::{seed, SeedData, SeedSummary};
pub use sqlx::PgPool;
pub use store::{CourseStore, StoreError};
