//! Table-driven entity repository
//!
//! One implementation serves every entity in the catalog:
//! - create / update / delete: single parameterized statement each
//! - read / list: one SELECT with LEFT JOINs for display names (no N+1)
//! - storage failures are classified before they leave this module

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use aerodesk_core::catalog::{self, EntityDef};
use aerodesk_core::{
    classify, Classification, ColumnType, CoreError, Fields, Operation, RawStorageError, Value,
    ViolationKind,
};

use super::query::{Filter, ListQuery, Paginated, SortDirection};
use super::storage::{Row, Statement, Storage};

/// One entity row plus the display names of the rows it references
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub entity: &'static str,
    pub values: BTreeMap<&'static str, Value>,
    /// Display text of referenced rows, keyed by the referencing column
    pub display: BTreeMap<&'static str, String>,
}

impl Record {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    pub fn text(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(Value::as_text)
    }

    pub fn display(&self, column: &str) -> Option<&str> {
        self.display.get(column).map(String::as_str)
    }
}

/// Repository error: never a raw storage error
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    #[error(transparent)]
    Constraint(#[from] Classification),

    #[error(transparent)]
    Catalog(#[from] CoreError),
}

impl RepoError {
    /// Violation kind, when this is a classified storage failure
    pub fn kind(&self) -> Option<ViolationKind> {
        match self {
            Self::Constraint(c) => Some(c.kind),
            _ => None,
        }
    }
}

/// CRUD over one entity's table
pub struct Repository<'a> {
    storage: &'a dyn Storage,
    entity: &'static EntityDef,
}

impl<'a> Repository<'a> {
    pub fn new(storage: &'a dyn Storage, entity: &'static EntityDef) -> Self {
        Self { storage, entity }
    }

    pub fn entity(&self) -> &'static EntityDef {
        self.entity
    }

    /// Insert a full row; the primary key is caller-chosen.
    ///
    /// Returns the primary key value that was inserted.
    pub async fn create(&self, fields: &Fields) -> Result<Value, RepoError> {
        let e = self.entity;
        let mut st = Statement::default();
        let mut names = Vec::with_capacity(e.columns.len());
        let mut placeholders = Vec::with_capacity(e.columns.len());

        for column in e.columns {
            names.push(column.name);
            placeholders.push(st.bind(column.ty, field(fields, column.name)));
        }
        st.sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            e.table,
            names.join(", "),
            placeholders.join(", ")
        );

        self.storage
            .execute(&st)
            .await
            .map_err(|raw| self.fail(raw, Operation::Create))?;

        let id = field(fields, e.primary_key);
        tracing::info!(entity = e.name, id = %id, "created");
        Ok(id)
    }

    /// Fetch one row by primary key, with display names joined in.
    pub async fn read(&self, id: &Value) -> Result<Record, RepoError> {
        let mut select = Select::new(self.entity);
        let pk = self.entity.primary();
        let placeholder = select.st.bind(pk.ty, id.clone());
        select.conditions.push(format!("e.{} = {}", pk.name, placeholder));

        let rows = self
            .storage
            .query(&select.finish())
            .await
            .map_err(|raw| self.fail(raw, Operation::Read))?;

        rows.into_iter()
            .next()
            .map(|row| select.record(row))
            .ok_or_else(|| self.not_found(id))
    }

    /// Filtered, ordered page of rows in a single statement.
    pub async fn list(&self, query: &ListQuery) -> Result<Paginated<Record>, RepoError> {
        let e = self.entity;
        let mut select = Select::new(e);

        for filter in &query.filters {
            let condition = match filter {
                Filter::Equals { column, value } => {
                    let column = e.require_column(column)?;
                    if value.is_null() {
                        format!("e.{} IS NULL", column.name)
                    } else {
                        let p = select.st.bind(column.ty, value.clone());
                        format!("e.{} = {}", column.name, p)
                    }
                }
                Filter::Contains { columns, needle } => {
                    if columns.is_empty() {
                        continue;
                    }
                    let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));
                    let p = select.st.bind(ColumnType::Text, Value::Text(pattern));
                    let mut alternatives = Vec::with_capacity(columns.len());
                    for name in columns {
                        let column = e.require_column(name)?;
                        let expr = match column.ty {
                            ColumnType::Text => format!("e.{}", column.name),
                            _ => format!("CAST(e.{} AS VARCHAR)", column.name),
                        };
                        alternatives.push(format!("LOWER({}) LIKE {} ESCAPE '\\'", expr, p));
                    }
                    format!("({})", alternatives.join(" OR "))
                }
            };
            select.conditions.push(condition);
        }

        let (order_column, direction) = match &query.order_by {
            Some((column, direction)) => (e.require_column(column)?.name, *direction),
            None => (e.primary_key, SortDirection::Asc),
        };
        select.order = format!("e.{} {}", order_column, direction.as_sql());
        if order_column != e.primary_key {
            select.order.push_str(&format!(", e.{} ASC", e.primary_key));
        }

        let count = select.count();
        select.with_total();
        let limit = select.st.bind(ColumnType::Integer, Value::Integer(query.page.limit() as i32));
        let offset = select.st.bind(
            ColumnType::Integer,
            Value::Integer(i32::try_from(query.page.offset()).unwrap_or(i32::MAX)),
        );
        select.tail = format!(" LIMIT {} OFFSET {}", limit, offset);

        let rows = self
            .storage
            .query(&select.finish())
            .await
            .map_err(|raw| self.fail(raw, Operation::Read))?;

        let total = match rows.first() {
            Some(row) => row.last().and_then(Value::as_integer).map(i64::from).unwrap_or(0),
            // Past the last page there is no row to carry the window count
            None if query.page.offset() > 0 => self.scalar(&count).await?,
            None => 0,
        };
        let items = rows.into_iter().map(|row| select.record(row)).collect();

        Ok(Paginated {
            items,
            total,
            page: query.page.page,
            per_page: query.page.per_page,
        })
    }

    /// Number of rows in the table.
    pub async fn count(&self) -> Result<i64, RepoError> {
        let mut st = Statement::new(format!(
            "SELECT CAST(COUNT(*) AS INTEGER) FROM {}",
            self.entity.table
        ));
        st.project("count", ColumnType::Integer);
        self.scalar(&st).await
    }

    async fn scalar(&self, st: &Statement) -> Result<i64, RepoError> {
        let rows = self
            .storage
            .query(st)
            .await
            .map_err(|raw| self.fail(raw, Operation::Read))?;

        Ok(rows
            .first()
            .and_then(|r| r.first())
            .and_then(Value::as_integer)
            .map(i64::from)
            .unwrap_or(0))
    }

    /// Full-row update addressed by primary key. Last writer wins.
    pub async fn update(&self, id: &Value, fields: &Fields) -> Result<(), RepoError> {
        let e = self.entity;
        let mut st = Statement::default();

        let assignments: Vec<String> = e
            .data_columns()
            .map(|column| {
                let p = st.bind(column.ty, field(fields, column.name));
                format!("{} = {}", column.name, p)
            })
            .collect();
        let key = st.bind(e.primary().ty, id.clone());
        st.sql = format!(
            "UPDATE {} SET {} WHERE {} = {}",
            e.table,
            assignments.join(", "),
            e.primary_key,
            key
        );

        let affected = self
            .storage
            .execute(&st)
            .await
            .map_err(|raw| self.fail(raw, Operation::Update))?;

        if affected == 0 {
            return Err(self.not_found(id));
        }
        tracing::info!(entity = e.name, id = %id, "updated");
        Ok(())
    }

    /// Delete by primary key. Fails while dependent rows reference it.
    pub async fn delete(&self, id: &Value) -> Result<(), RepoError> {
        let e = self.entity;
        let mut st = Statement::default();
        let key = st.bind(e.primary().ty, id.clone());
        st.sql = format!("DELETE FROM {} WHERE {} = {}", e.table, e.primary_key, key);

        let affected = self
            .storage
            .execute(&st)
            .await
            .map_err(|raw| self.fail(raw, Operation::Delete))?;

        if affected == 0 {
            return Err(self.not_found(id));
        }
        tracing::info!(entity = e.name, id = %id, "deleted");
        Ok(())
    }

    fn fail(&self, raw: RawStorageError, op: Operation) -> RepoError {
        let c = classify(&raw, self.entity, op);
        if c.kind == ViolationKind::Unknown {
            tracing::error!(entity = self.entity.name, ?op, error = %raw, "unclassified storage error");
        } else {
            tracing::warn!(
                entity = self.entity.name,
                ?op,
                kind = ?c.kind,
                column = ?c.column,
                target = ?c.target,
                "constraint violation"
            );
        }
        RepoError::Constraint(c)
    }

    fn not_found(&self, id: &Value) -> RepoError {
        RepoError::NotFound {
            entity: self.entity.name,
            id: id.to_string(),
        }
    }
}

fn field(fields: &Fields, column: &str) -> Value {
    fields.get(column).cloned().unwrap_or(Value::Null)
}

/// Escape LIKE wildcards so the needle matches literally
fn escape_like(needle: &str) -> String {
    let mut out = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// SELECT over an entity with display joins
struct Select {
    entity: &'static EntityDef,
    st: Statement,
    columns: Vec<String>,
    joins: String,
    /// Referencing columns whose display text is projected, in order
    display: Vec<&'static str>,
    conditions: Vec<String>,
    order: String,
    tail: String,
}

impl Select {
    fn new(entity: &'static EntityDef) -> Self {
        let mut st = Statement::default();
        let mut columns = Vec::new();
        let mut joins = String::new();
        let mut display = Vec::new();

        for column in entity.columns {
            columns.push(format!("e.{}", column.name));
            st.project(column.name, column.ty);
        }

        for (i, fk) in entity.foreign_keys.iter().enumerate() {
            let Some(target) = catalog::entity(fk.target) else {
                continue;
            };
            let Some(shown) = target.display else {
                continue;
            };
            let alias = format!("j{}", i);
            columns.push(format!("{}.{}", alias, shown));
            st.project(format!("{}_display", fk.column), ColumnType::Text);
            joins.push_str(&format!(
                " LEFT JOIN {} {} ON {}.{} = e.{}",
                target.table, alias, alias, target.primary_key, fk.column
            ));
            display.push(fk.column);
        }

        Self {
            entity,
            st,
            columns,
            joins,
            display,
            conditions: Vec::new(),
            order: String::new(),
            tail: String::new(),
        }
    }

    fn with_total(&mut self) {
        self.columns.push("CAST(COUNT(*) OVER() AS INTEGER)".to_owned());
        self.st.project("total", ColumnType::Integer);
    }

    /// Rows matching the conditions, ignoring paging
    fn count(&self) -> Statement {
        let mut st = Statement::new(format!(
            "SELECT CAST(COUNT(*) AS INTEGER) FROM {} e",
            self.entity.table
        ));
        if !self.conditions.is_empty() {
            st.sql.push_str(" WHERE ");
            st.sql.push_str(&self.conditions.join(" AND "));
        }
        st.params = self.st.params.clone();
        st.project("count", ColumnType::Integer);
        st
    }

    fn finish(&self) -> Statement {
        let mut sql = format!(
            "SELECT {} FROM {} e{}",
            self.columns.join(", "),
            self.entity.table,
            self.joins
        );
        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.conditions.join(" AND "));
        }
        if !self.order.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.order);
        }
        sql.push_str(&self.tail);

        let mut st = self.st.clone();
        st.sql = sql;
        st
    }

    fn record(&self, row: Row) -> Record {
        let mut cells = row.into_iter();
        let values = self
            .entity
            .columns
            .iter()
            .map(|c| (c.name, cells.next().unwrap_or(Value::Null)))
            .collect();
        let display = self
            .display
            .iter()
            .zip(cells)
            .filter_map(|(column, cell)| match cell {
                Value::Text(text) => Some((*column, text)),
                _ => None,
            })
            .collect();

        Record {
            entity: self.entity.name,
            values,
            display,
        }
    }
}
