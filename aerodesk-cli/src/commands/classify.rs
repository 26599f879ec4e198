//! Run the violation classifier by hand

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use aerodesk_core::{catalog, classify, Operation, RawStorageError};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationArg {
    Create,
    Update,
    Delete,
    Read,
}

impl From<OperationArg> for Operation {
    fn from(op: OperationArg) -> Self {
        match op {
            OperationArg::Create => Operation::Create,
            OperationArg::Update => Operation::Update,
            OperationArg::Delete => Operation::Delete,
            OperationArg::Read => Operation::Read,
        }
    }
}

/// Arguments for the classify command
#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    /// Entity the failed statement targeted
    pub entity: String,

    /// Raw error text as reported by the database
    pub message: String,

    /// Operation that failed
    #[arg(long, value_enum, default_value = "create")]
    pub op: OperationArg,

    /// Vendor error code (e.g. SQLSTATE 23503)
    #[arg(long)]
    pub code: Option<String>,
}

pub fn run_classify(args: ClassifyArgs) -> Result<()> {
    let entity = catalog::require(&args.entity)?;
    let raw = match args.code {
        Some(code) => RawStorageError::new(args.message).with_code(code),
        None => RawStorageError::new(args.message),
    };

    let classification = classify(&raw, entity, args.op.into());
    let json = serde_json::to_string_pretty(&classification)
        .context("Failed to serialize classification")?;
    println!("{}", json);
    Ok(())
}
