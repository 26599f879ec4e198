//! Postgres-backed storage
//!
//! Binds every `Param` with its real SQL type (typed `NULL`s included) and
//! flattens driver errors into text the classifier can match: message,
//! detail, constraint and table.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use sqlx::postgres::{PgArguments, PgDatabaseError, PgRow};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres, Row as _};

use aerodesk_core::{ColumnType, RawStorageError, Value};

use super::storage::{Param, Projected, Row, Statement, Storage};

type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// `Storage` over a sqlx connection pool
#[derive(Debug, Clone)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Storage for PgStorage {
    async fn execute(&self, statement: &Statement) -> Result<u64, RawStorageError> {
        tracing::debug!(sql = %statement.sql, params = statement.params.len(), "execute");
        let result = prepare(statement)
            .execute(&self.pool)
            .await
            .map_err(raw_error)?;
        Ok(result.rows_affected())
    }

    async fn query(&self, statement: &Statement) -> Result<Vec<Row>, RawStorageError> {
        tracing::debug!(sql = %statement.sql, params = statement.params.len(), "query");
        let rows = prepare(statement)
            .fetch_all(&self.pool)
            .await
            .map_err(raw_error)?;

        rows.iter()
            .map(|row| decode_row(row, &statement.projection))
            .collect::<Result<_, _>>()
            .map_err(raw_error)
    }
}

fn prepare(statement: &Statement) -> PgQuery<'_> {
    statement
        .params
        .iter()
        .fold(sqlx::query(&statement.sql), bind_param)
}

fn bind_param<'q>(query: PgQuery<'q>, param: &'q Param) -> PgQuery<'q> {
    match &param.value {
        Value::Null => match param.ty {
            ColumnType::Integer => query.bind(None::<i32>),
            ColumnType::Decimal => query.bind(None::<Decimal>),
            ColumnType::Text => query.bind(None::<String>),
            ColumnType::Date => query.bind(None::<NaiveDate>),
            ColumnType::Timestamp => query.bind(None::<NaiveDateTime>),
            ColumnType::Boolean => query.bind(None::<bool>),
        },
        Value::Integer(v) => query.bind(*v),
        Value::Decimal(v) => query.bind(*v),
        Value::Text(v) => query.bind(v.as_str()),
        Value::Date(v) => query.bind(*v),
        Value::Timestamp(v) => query.bind(*v),
        Value::Boolean(v) => query.bind(*v),
    }
}

fn decode_row(row: &PgRow, projection: &[Projected]) -> Result<Row, sqlx::Error> {
    projection
        .iter()
        .enumerate()
        .map(|(idx, col)| decode_cell(row, idx, col.ty))
        .collect()
}

fn decode_cell(row: &PgRow, idx: usize, ty: ColumnType) -> Result<Value, sqlx::Error> {
    let value = match ty {
        ColumnType::Integer => row.try_get::<Option<i32>, _>(idx)?.map(Value::Integer),
        ColumnType::Decimal => row.try_get::<Option<Decimal>, _>(idx)?.map(Value::Decimal),
        ColumnType::Text => row.try_get::<Option<String>, _>(idx)?.map(Value::Text),
        ColumnType::Date => row.try_get::<Option<NaiveDate>, _>(idx)?.map(Value::Date),
        ColumnType::Timestamp => row
            .try_get::<Option<NaiveDateTime>, _>(idx)?
            .map(Value::Timestamp),
        ColumnType::Boolean => row.try_get::<Option<bool>, _>(idx)?.map(Value::Boolean),
    };
    Ok(value.unwrap_or(Value::Null))
}

/// Flatten a driver error into classifier input.
pub(crate) fn raw_error(err: sqlx::Error) -> RawStorageError {
    let sqlx::Error::Database(db) = &err else {
        return RawStorageError::new(err.to_string());
    };

    let mut message = db.message().to_owned();
    if let Some(pg) = db.try_downcast_ref::<PgDatabaseError>() {
        if let Some(detail) = pg.detail() {
            message.push_str(" DETAIL: ");
            message.push_str(detail);
        }
        if let Some(constraint) = pg.constraint() {
            if !message.contains(constraint) {
                message.push_str(&format!(" (constraint \"{}\")", constraint));
            }
        }
        if let Some(table) = pg.table() {
            message.push_str(&format!(" (table \"{}\")", table));
        }
    }

    let raw = RawStorageError::new(message);
    match db.code() {
        Some(code) => raw.with_code(code.into_owned()),
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_keep_their_text() {
        let raw = raw_error(sqlx::Error::RowNotFound);
        assert_eq!(raw.code, None);
        assert!(raw.message.contains("no rows"));
    }

    #[test]
    fn binds_one_argument_per_param() {
        let mut st = Statement::new("UPDATE flight SET actualdeparture = $1 WHERE flightid = $2");
        st.bind(ColumnType::Timestamp, Value::Null);
        st.bind(ColumnType::Integer, Value::Integer(10));

        // Building the query must not panic for typed NULLs
        let _query = prepare(&st);
    }
}
