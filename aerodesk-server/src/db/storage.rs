//! Storage contract
//!
//! The repository only ever talks to a `Storage`: it hands over a
//! parameterized statement and gets back rows, an affected-row count, or a
//! raw error to classify. Values never appear in the SQL text.

use async_trait::async_trait;

use aerodesk_core::{ColumnType, RawStorageError, Value};

/// Bound parameter with the column type it targets, so typed NULLs can be
/// bound for nullable columns
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub ty: ColumnType,
    pub value: Value,
}

/// One projected result column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projected {
    pub alias: String,
    pub ty: ColumnType,
}

/// SQL text with `$n` placeholders plus the values bound to them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Param>,
    /// Result columns in select-list order; empty for non-queries
    pub projection: Vec<Projected>,
}

impl Statement {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            ..Self::default()
        }
    }

    /// Append a parameter and return its placeholder
    pub fn bind(&mut self, ty: ColumnType, value: Value) -> String {
        self.params.push(Param { ty, value });
        format!("${}", self.params.len())
    }

    pub fn project(&mut self, alias: impl Into<String>, ty: ColumnType) {
        self.projection.push(Projected {
            alias: alias.into(),
            ty,
        });
    }
}

/// Decoded result row, aligned with `Statement::projection`
pub type Row = Vec<Value>;

#[async_trait]
pub trait Storage: Send + Sync {
    /// Run a statement that returns no rows; yields the affected-row count.
    async fn execute(&self, statement: &Statement) -> Result<u64, RawStorageError>;

    /// Run a query and decode every row per the statement's projection.
    async fn query(&self, statement: &Statement) -> Result<Vec<Row>, RawStorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_follow_bind_order() {
        let mut st = Statement::new("");
        assert_eq!(st.bind(ColumnType::Integer, Value::Integer(1)), "$1");
        assert_eq!(st.bind(ColumnType::Text, Value::Null), "$2");
        assert_eq!(st.params.len(), 2);
        assert_eq!(st.params[1].ty, ColumnType::Text);
    }
}
