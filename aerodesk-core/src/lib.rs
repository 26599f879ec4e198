//! aerodesk-core: schema catalog and constraint-violation classification
//!
//! Everything here is synchronous and storage-agnostic. The server crate
//! builds statements from the catalog and feeds storage errors back through
//! [`classify::classify`].

pub mod catalog;
pub mod classify;
pub mod config;
pub mod error;
pub mod form;
pub mod validation;
pub mod value;

pub use catalog::{ColumnDef, EntityDef, ForeignKeyDef, RelatedDef, UniqueDef};
pub use classify::{classify, Classification, Operation, RawStorageError, ViolationKind};
pub use config::AerodeskConfig;
pub use error::{CoreError, Result};
pub use form::{bind_form, parse_id, BindMode, Fields, FormData};
pub use validation::{FieldError, ValidationError};
pub use value::{ColumnType, Value};
