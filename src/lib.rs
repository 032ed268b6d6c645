//! Quickstart - a minimal JSON HTTP service for container platforms.
//!
//! Serves a fixed greeting at `/` and a liveness probe at `/health`.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::AppError;
pub use routes::create_router;
