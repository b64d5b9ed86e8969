//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request tracing
//! - OpenAPI document with Swagger UI
//! - Graceful shutdown
//! - JSON error responses

pub mod docs;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod schemas;
pub mod server;

pub use docs::ApiDoc;
pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
