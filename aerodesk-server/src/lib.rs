//! aerodesk-server: repository, orchestrator and HTTP adapter
//!
//! - [`db`]: storage contract, Postgres backend, table-driven repository
//! - [`orchestrator`]: one operation request in, one presentation out
//! - [`http`]: axum routes mapping presentations to JSON responses

pub mod db;
pub mod http;
pub mod orchestrator;

pub use db::{create_pool, PgStorage, Repository, Storage};
pub use http::{build_router, run_server, ServerConfig, ServerError};
pub use orchestrator::{OperationKind, OperationRequest, Orchestrator, Presentation, RequestContext};
