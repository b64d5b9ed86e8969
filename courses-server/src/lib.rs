//! courses-server: HTTP service for courses
//!
//! Create, list, fetch and update courses stored in PostgreSQL. Listing
//! reports how many users are enrolled in each course.

pub mod db;
pub mod http;
pub mod models;

pub use db::{CourseStore, MemoryCourseStore, PgCourseStore, StoreError};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
