//! Binding submitted form text to typed column values
//!
//! Every problem is collected before returning, so one `ValidationError`
//! names all offending fields.

use std::collections::BTreeMap;

use crate::catalog::EntityDef;
use crate::validation::{FieldError, ValidationError};
use crate::value::Value;

/// Typed values keyed by column name
pub type Fields = BTreeMap<&'static str, Value>;

/// Raw submitted text keyed by field name
pub type FormData = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindMode<'a> {
    /// Every column comes from the form, primary key included
    Create,
    /// Primary key comes from the addressed id; a submitted one is ignored
    Update { id: &'a str },
}

/// Parse an addressed primary key.
pub fn parse_id(entity: &EntityDef, raw: &str) -> Result<Value, ValidationError> {
    let pk = entity.primary();
    match pk.coerce(Some(raw))? {
        // coerce only yields Null for nullable columns; keys never are
        Value::Null => Err(FieldError::Missing { field: pk.name }.into()),
        value => Ok(value),
    }
}

/// Coerce a whole submission into a full row for `entity`.
pub fn bind_form(
    entity: &EntityDef,
    form: &FormData,
    mode: BindMode<'_>,
) -> Result<Fields, ValidationError> {
    let mut errors = ValidationError::default();
    let mut fields = Fields::new();

    for column in entity.columns {
        let raw = match mode {
            BindMode::Update { id } if column.name == entity.primary_key => Some(id),
            _ => lookup(form, column.name),
        };

        match column.coerce(raw) {
            Ok(value) => {
                fields.insert(column.name, value);
            }
            Err(e) => errors.push(e),
        }
    }

    for name in form.keys() {
        if entity.column(name).is_none() {
            errors.push(FieldError::UnknownField {
                field: name.clone(),
            });
        }
    }

    errors.into_result().map(|()| fields)
}

fn lookup<'f>(form: &'f FormData, column: &str) -> Option<&'f str> {
    form.iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(column))
        .map(|(_, v)| v.as_str())
}
