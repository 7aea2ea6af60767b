//! HTTP server layer
//!
//! Axum server with:
//! - `/api/v1` routes for projects and palettes
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState};
