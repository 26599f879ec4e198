//! HTTP adapter
//!
//! Axum server with:
//! - bearer-token identity per request
//! - CORS (localhost only by default)
//! - request tracing
//! - graceful shutdown
//! - JSON bodies for every presentation outcome

pub mod error;
pub mod extractors;
pub mod response;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
