//! Constraint-violation classifier
//!
//! Turns the raw error text a storage backend produced into a structured,
//! field-attributed [`Classification`]. Matching is case-insensitive
//! substring search against fragments derived from the catalog; it is
//! best-effort and always degrades to a generic message instead of failing.
//!
//! The fragment tables live in [`ViolationRules`] so they can be inspected
//! and tested on their own.

use serde::Serialize;
use thiserror::Error;

use crate::catalog::{self, EntityDef};

/// SQLSTATE / vendor codes meaning "foreign key violation"
/// (Postgres, MySQL child/parent row, SQLite extended code).
const FOREIGN_KEY_CODES: &[&str] = &["23503", "1451", "1452", "787"];

/// SQLSTATE / vendor codes meaning "unique violation"
const UNIQUE_CODES: &[&str] = &["23505", "1062", "2067", "1555"];

/// Error as reported by a storage backend, before classification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RawStorageError {
    /// SQLSTATE or vendor error code, when the driver exposes one
    pub code: Option<String>,
    /// Full human-readable text, including any detail and constraint name
    pub message: String,
}

impl RawStorageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// What the failed statement was doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Create,
    Update,
    Delete,
    Read,
}

impl Operation {
    fn verb(&self) -> &'static str {
        match self {
            Self::Create => "adding",
            Self::Update => "updating",
            Self::Delete => "deleting",
            Self::Read => "loading",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    ForeignKey,
    Unique,
    Unknown,
}

/// Structured outcome of classifying one storage error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{message}")]
pub struct Classification {
    pub kind: ViolationKind,
    /// Column the violation is attributed to, if a fragment matched
    pub column: Option<&'static str>,
    /// Entity on the other side of the violated edge
    pub target: Option<&'static str>,
    /// Message fit for showing to the user
    pub message: String,
}

/// One fragment and the foreign-key edge it identifies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationRule {
    /// Lowercase text to look for
    pub fragment: String,
    /// Only match when not embedded in a longer identifier
    pub whole_word: bool,
    /// Column holding the reference, when the fragment pins down one edge
    pub column: Option<&'static str>,
    /// Entity named in the message: the referenced entity for writes,
    /// the dependent entity for deletes
    pub target: &'static str,
    /// Human wording for `target`
    pub label: &'static str,
}

impl ViolationRule {
    fn matches(&self, text: &str) -> bool {
        if self.whole_word {
            contains_word(text, &self.fragment)
        } else {
            text.contains(&self.fragment)
        }
    }
}

/// Ordered fragment table; the first matching rule wins
#[derive(Debug, Clone, Default)]
pub struct ViolationRules {
    rules: Vec<ViolationRule>,
}

impl ViolationRules {
    /// Rules for inserts and updates: the entity's own outgoing edges,
    /// in declaration order. Explicit fragments come before the column name.
    pub fn for_write(entity: &EntityDef) -> Self {
        let rules = entity
            .foreign_keys
            .iter()
            .flat_map(|fk| {
                fk.fragments
                    .iter()
                    .copied()
                    .chain(std::iter::once(fk.column))
                    .map(move |fragment| ViolationRule {
                        fragment: fragment.to_ascii_lowercase(),
                        whole_word: false,
                        column: Some(fk.column),
                        target: fk.target,
                        label: fk.label,
                    })
            })
            .collect();
        Self { rules }
    }

    /// Rules for deletes: edges of other entities pointing at this one.
    ///
    /// Three passes from most to least precise: the conventional Postgres
    /// constraint name `{table}_{column}`, the MySQL `{table}_ibfk` prefix,
    /// then the dependent table name as a whole word. The last two only
    /// name the dependent table, so they carry a column only when that
    /// table has a single edge to this entity.
    pub fn for_delete(entity: &EntityDef) -> Self {
        let dependents = catalog::dependents(entity.name);
        let mut rules = Vec::with_capacity(dependents.len() * 3);

        for (dep, fk) in &dependents {
            rules.push(ViolationRule {
                fragment: format!("{}_{}", dep.table, fk.column),
                whole_word: false,
                column: Some(fk.column),
                target: dep.name,
                label: dep.plural,
            });
        }

        let mut tables: Vec<(&'static EntityDef, Option<&'static str>)> = Vec::new();
        for (dep, fk) in &dependents {
            match tables.iter().position(|(d, _)| d.name == dep.name) {
                Some(i) => tables[i].1 = None,
                None => tables.push((*dep, Some(fk.column))),
            }
        }

        let passes: [fn(&EntityDef) -> (String, bool); 2] = [
            |dep| (format!("{}_ibfk", dep.table), false),
            |dep| (dep.table.to_owned(), true),
        ];
        for pass in passes {
            for (dep, column) in &tables {
                let (fragment, whole_word) = pass(dep);
                rules.push(ViolationRule {
                    fragment,
                    whole_word,
                    column: *column,
                    target: dep.name,
                    label: dep.plural,
                });
            }
        }
        Self { rules }
    }

    pub fn find(&self, text: &str) -> Option<&ViolationRule> {
        self.rules.iter().find(|r| r.matches(text))
    }

    pub fn rules(&self) -> &[ViolationRule] {
        &self.rules
    }
}

/// Classify a storage error raised while running `op` against `entity`.
pub fn classify(raw: &RawStorageError, entity: &EntityDef, op: Operation) -> Classification {
    let text = raw.message.to_lowercase();
    let code = raw.code.as_deref().unwrap_or("");

    if text.contains("foreign key") || FOREIGN_KEY_CODES.contains(&code) {
        foreign_key(&text, entity, op)
    } else if text.contains("duplicate") || text.contains("unique") || UNIQUE_CODES.contains(&code)
    {
        unique(&text, entity)
    } else {
        Classification {
            kind: ViolationKind::Unknown,
            column: None,
            target: None,
            message: format!("Error {} {}: {}", op.verb(), entity.label, raw.message),
        }
    }
}

fn foreign_key(text: &str, entity: &EntityDef, op: Operation) -> Classification {
    if op == Operation::Delete {
        return match ViolationRules::for_delete(entity).find(text) {
            Some(rule) => Classification {
                kind: ViolationKind::ForeignKey,
                column: rule.column,
                target: Some(rule.target),
                message: format!(
                    "Cannot delete this {} because it has associated {}. Please delete those first.",
                    entity.label, rule.label
                ),
            },
            None => Classification {
                kind: ViolationKind::ForeignKey,
                column: None,
                target: None,
                message: generic_delete_message(entity),
            },
        };
    }

    match ViolationRules::for_write(entity).find(text) {
        Some(rule) => Classification {
            kind: ViolationKind::ForeignKey,
            column: rule.column,
            target: Some(rule.target),
            message: format!(
                "Invalid {0} selected. Please choose a valid {0} from the list.",
                rule.label
            ),
        },
        None => {
            let labels: Vec<_> = entity.foreign_keys.iter().map(|fk| fk.label).collect();
            Classification {
                kind: ViolationKind::ForeignKey,
                column: None,
                target: None,
                message: format!(
                    "Cannot save {} due to invalid reference data. Please check the selected {}.",
                    entity.label,
                    labels.join(", ")
                ),
            }
        }
    }
}

fn generic_delete_message(entity: &EntityDef) -> String {
    let mut plurals: Vec<&str> = Vec::new();
    for (dep, _) in catalog::dependents(entity.name) {
        if !plurals.contains(&dep.plural) {
            plurals.push(dep.plural);
        }
    }

    if plurals.is_empty() {
        format!(
            "Cannot delete this {} because other records still reference it.",
            entity.label
        )
    } else {
        format!(
            "Cannot delete this {} because it may have associated {}. Please delete those first.",
            entity.label,
            plurals.join(", ")
        )
    }
}

fn unique(text: &str, entity: &EntityDef) -> Classification {
    let constraint = entity
        .unique
        .iter()
        .find(|u| u.columns.iter().all(|c| text.contains(c)));

    let (column, label) = match constraint {
        Some(u) => (u.columns[0], u.label),
        None => (entity.primary_key, entity.primary().label),
    };

    Classification {
        kind: ViolationKind::Unique,
        column: Some(column),
        target: None,
        message: format!(
            "A {} with this {} already exists. Please use a different {}.",
            entity.label, label, label
        ),
    }
}

/// Substring match that refuses hits inside a longer identifier
fn contains_word(haystack: &str, needle: &str) -> bool {
    let is_ident = |c: char| c.is_ascii_alphanumeric() || c == '_';
    haystack.match_indices(needle).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + needle.len()..].chars().next();
        !before.is_some_and(is_ident) && !after.is_some_and(is_ident)
    })
}
