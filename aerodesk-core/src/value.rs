//! Column types and typed cell values
//!
//! Values are what the repository binds as statement parameters and what it
//! decodes from result rows. Text coming from forms is turned into a `Value`
//! by [`ColumnDef::coerce`](crate::catalog::ColumnDef::coerce).

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::validation::FieldError;

/// Accepted timestamp layouts, tried in order.
///
/// The first two are what an HTML `datetime-local` input submits.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Semantic type of a catalog column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Integer,
    Decimal,
    Text,
    Date,
    Timestamp,
    Boolean,
}

impl ColumnType {
    /// Short name used in validation messages
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Integer => "a whole number",
            Self::Decimal => "a decimal number",
            Self::Text => "text",
            Self::Date => "a date (YYYY-MM-DD)",
            Self::Timestamp => "a date and time (YYYY-MM-DDTHH:MM)",
            Self::Boolean => "yes or no",
        }
    }
}

/// A single typed cell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Integer(i32),
    Decimal(Decimal),
    Text(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    Boolean(bool),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Parse non-empty text as the given column type.
    ///
    /// `field` only feeds the error; emptiness and nullability are the
    /// caller's concern.
    pub fn parse(ty: ColumnType, field: &'static str, raw: &str) -> Result<Self, FieldError> {
        let raw = raw.trim();
        let invalid = || FieldError::InvalidFormat {
            field,
            reason: ty.describe(),
        };

        match ty {
            ColumnType::Integer => raw.parse::<i32>().map(Self::Integer).map_err(|_| invalid()),
            ColumnType::Decimal => Decimal::from_str(raw)
                .map(Self::Decimal)
                .map_err(|_| invalid()),
            ColumnType::Text => Ok(Self::Text(raw.to_owned())),
            ColumnType::Date => NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .map(Self::Date)
                .map_err(|_| invalid()),
            ColumnType::Timestamp => TIMESTAMP_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(Self::Timestamp)
                .ok_or_else(invalid),
            ColumnType::Boolean => match raw.to_ascii_lowercase().as_str() {
                "on" | "true" | "1" | "yes" => Ok(Self::Boolean(true)),
                "off" | "false" | "0" | "no" => Ok(Self::Boolean(false)),
                _ => Err(invalid()),
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str(""),
            Self::Integer(v) => write!(f, "{}", v),
            Self::Decimal(v) => write!(f, "{}", v),
            Self::Text(v) => f.write_str(v),
            Self::Date(v) => write!(f, "{}", v.format(DATE_FORMAT)),
            Self::Timestamp(v) => write!(f, "{}", v.format("%Y-%m-%d %H:%M:%S")),
            Self::Boolean(v) => write!(f, "{}", v),
        }
    }
}
