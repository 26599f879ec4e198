//! Database layer: storage contract, Postgres backend, repository

pub mod pool;
pub mod postgres;
pub mod query;
pub mod repo;
pub mod schema;
pub mod storage;

#[cfg(test)]
pub(crate) mod testing;

pub use pool::{create_pool, create_pool_with_options};
pub use postgres::PgStorage;
pub use query::{Filter, ListQuery, Paginated, Pagination, PaginationParams, SortDirection};
pub use repo::{Record, RepoError, Repository};
pub use storage::{Param, Projected, Row, Statement, Storage};
