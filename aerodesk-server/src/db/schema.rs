//! Schema bootstrap generated from the catalog
//!
//! Tables are created leaves first so every REFERENCES target exists.
//! Deletes are restricted: a referenced row cannot be removed while
//! dependents point at it.

use aerodesk_core::catalog::{self, ColumnDef, EntityDef};
use aerodesk_core::{ColumnType, RawStorageError};

use super::storage::{Statement, Storage};

fn sql_type(column: &ColumnDef) -> String {
    match column.ty {
        ColumnType::Integer => "INTEGER".to_owned(),
        ColumnType::Decimal => "NUMERIC".to_owned(),
        ColumnType::Text => match column.max_len {
            Some(len) => format!("VARCHAR({})", len),
            None => "TEXT".to_owned(),
        },
        ColumnType::Date => "DATE".to_owned(),
        ColumnType::Timestamp => "TIMESTAMP".to_owned(),
        ColumnType::Boolean => "BOOLEAN".to_owned(),
    }
}

/// `CREATE TABLE IF NOT EXISTS` for one entity
pub fn create_table(entity: &EntityDef) -> String {
    let mut lines: Vec<String> = entity
        .columns
        .iter()
        .map(|c| {
            let null = if c.nullable { "" } else { " NOT NULL" };
            format!("    {} {}{}", c.name, sql_type(c), null)
        })
        .collect();

    lines.push(format!("    PRIMARY KEY ({})", entity.primary_key));
    for unique in entity.unique {
        lines.push(format!("    UNIQUE ({})", unique.columns.join(", ")));
    }
    for fk in entity.foreign_keys {
        // Target existence is checked by catalog::validate
        let Some(target) = catalog::entity(fk.target) else {
            continue;
        };
        lines.push(format!(
            "    FOREIGN KEY ({}) REFERENCES {} ({}) ON DELETE RESTRICT",
            fk.column, target.table, target.primary_key
        ));
    }

    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n{}\n)",
        entity.table,
        lines.join(",\n")
    )
}

/// DDL for every catalog entity, in creation order
pub fn ddl() -> Vec<String> {
    catalog::entities().iter().map(create_table).collect()
}

/// Create any missing tables.
pub async fn bootstrap(storage: &dyn Storage) -> Result<(), RawStorageError> {
    tracing::info!("Bootstrapping schema...");
    for (entity, sql) in catalog::entities().iter().zip(ddl()) {
        storage.execute(&Statement::new(sql)).await?;
        tracing::debug!(table = entity.table, "table ready");
    }
    tracing::info!(tables = catalog::entities().len(), "schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing::{Reply, ScriptedStorage};

    #[test]
    fn passenger_table() {
        let sql = create_table(catalog::entity("passenger").unwrap());
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS passenger (\n"));
        assert!(sql.contains("    passengerid INTEGER NOT NULL,"));
        assert!(sql.contains("    dateofbirth DATE NOT NULL,"));
        assert!(sql.contains("    PRIMARY KEY (passengerid),"));
        assert!(sql.contains("    UNIQUE (passportnumber),"));
        assert!(sql.contains(
            "FOREIGN KEY (countrycode) REFERENCES country (countrycode) ON DELETE RESTRICT"
        ));
    }

    #[test]
    fn nullable_columns_drop_not_null() {
        let sql = create_table(catalog::entity("flight").unwrap());
        assert!(sql.contains("    actualdeparture TIMESTAMP,"));
        assert!(sql.contains("    flightnumber VARCHAR(20) NOT NULL,"));
        assert!(sql.contains("REFERENCES gate (gatenumber)"));
    }

    #[test]
    fn referenced_tables_come_first() {
        let statements = ddl();
        let position = |table: &str| {
            statements
                .iter()
                .position(|s| s.starts_with(&format!("CREATE TABLE IF NOT EXISTS {} (", table)))
                .unwrap()
        };
        assert!(position("country") < position("city"));
        assert!(position("gate") < position("flight"));
        assert!(position("flight") < position("ticket"));
    }

    #[tokio::test]
    async fn bootstrap_runs_every_table() {
        let count = catalog::entities().len();
        let storage = (0..count).fold(ScriptedStorage::new(), |s, _| s.reply(Reply::Affected(0)));

        bootstrap(&storage).await.unwrap();
        assert_eq!(storage.calls().len(), count);
    }

    #[tokio::test]
    async fn bootstrap_stops_on_first_failure() {
        let storage = ScriptedStorage::new()
            .reply(Reply::Affected(0))
            .reply(Reply::Fail(RawStorageError::new("permission denied for schema public")));

        let err = bootstrap(&storage).await.unwrap_err();
        assert!(err.message.contains("permission denied"));
        assert_eq!(storage.calls().len(), 2);
    }
}
