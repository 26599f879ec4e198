//! Outcomes handed to the presentation layer
//!
//! Nothing in here carries a raw storage error: failures are already
//! classified and turned into one human message.

use std::collections::BTreeMap;

use serde::Serialize;

use aerodesk_core::{FormData, ValidationError, ViolationKind};

use crate::db::{Paginated, Record, RepoError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Success,
    Error,
}

/// Why an operation did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Failure {
    Validation {
        fields: Vec<String>,
    },
    ForeignKeyViolation {
        column: Option<&'static str>,
        target: Option<&'static str>,
    },
    UniqueViolation {
        column: Option<&'static str>,
    },
    NotFound,
    Unknown,
    Unauthenticated,
}

impl Failure {
    /// Failure kind plus the message to show for it
    pub(crate) fn from_repo(err: &RepoError, label: &str) -> (Self, String) {
        match err {
            RepoError::NotFound { .. } => (Self::NotFound, format!("{} not found.", capitalize(label))),
            RepoError::Constraint(c) => {
                let failure = match c.kind {
                    ViolationKind::ForeignKey => Self::ForeignKeyViolation {
                        column: c.column,
                        target: c.target,
                    },
                    ViolationKind::Unique => Self::UniqueViolation { column: c.column },
                    ViolationKind::Unknown => Self::Unknown,
                };
                (failure, c.message.clone())
            }
            RepoError::Catalog(e) => (Self::Unknown, e.to_string()),
        }
    }

    pub(crate) fn validation(err: &ValidationError) -> Self {
        Self::Validation {
            fields: err.fields(),
        }
    }
}

/// One offending form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMessage {
    pub field: String,
    pub message: String,
}

impl FieldMessage {
    pub(crate) fn all(err: &ValidationError) -> Vec<Self> {
        err.errors
            .iter()
            .map(|e| Self {
                field: e.field().to_owned(),
                message: e.to_string(),
            })
            .collect()
    }
}

/// Dependent rows shown alongside a detail view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedRecords {
    pub entity: &'static str,
    pub label: &'static str,
    /// Column on the dependent that points back at the viewed row
    pub via: &'static str,
    pub records: Vec<Record>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub kind: &'static str,
    pub title: String,
    pub subtitle: Option<String>,
    pub status: Option<String>,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    /// Row counts keyed by entity name
    pub counts: BTreeMap<&'static str, i64>,
    pub recent_flights: Vec<Record>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Presentation {
    RenderList {
        entity: &'static str,
        label: &'static str,
        page: Paginated<Record>,
    },
    RenderDetail {
        record: Record,
        related: Vec<RelatedRecords>,
    },
    /// Re-show a submission with what went wrong
    RenderForm {
        entity: &'static str,
        failure: Failure,
        message: String,
        errors: Vec<FieldMessage>,
        values: FormData,
    },
    RedirectWithMessage {
        level: Level,
        text: String,
        location: String,
        failure: Option<Failure>,
    },
    SearchResults {
        query: String,
        hits: Vec<SearchHit>,
    },
    Dashboard(Dashboard),
}

impl Presentation {
    pub(crate) fn success(text: String, location: String) -> Self {
        Self::RedirectWithMessage {
            level: Level::Success,
            text,
            location,
            failure: None,
        }
    }

    pub(crate) fn error(failure: Failure, text: String, location: String) -> Self {
        Self::RedirectWithMessage {
            level: Level::Error,
            text,
            location,
            failure: Some(failure),
        }
    }

    /// The failure this outcome reports, if any
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::RenderForm { failure, .. } => Some(failure),
            Self::RedirectWithMessage { failure, .. } => failure.as_ref(),
            _ => None,
        }
    }
}

/// "aircraft type" -> "Aircraft type"
pub(crate) fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
