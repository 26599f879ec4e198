//! Schema catalog inspection

use anyhow::Result;
use clap::Parser;

use aerodesk_core::catalog::{self, EntityDef};
use aerodesk_server::db::schema;

/// Arguments for the catalog command
#[derive(Parser, Debug)]
pub struct CatalogArgs {
    /// Entity to describe (name, plural or table); all entities when omitted
    pub entity: Option<String>,

    /// Print CREATE TABLE statements instead
    #[arg(long)]
    pub ddl: bool,
}

pub fn run_catalog(args: CatalogArgs) -> Result<()> {
    let selected: Vec<&'static EntityDef> = match &args.entity {
        Some(name) => vec![catalog::require(name)?],
        None => catalog::entities().iter().collect(),
    };

    if args.ddl {
        for entity in selected {
            println!("{};\n", schema::create_table(entity));
        }
        return Ok(());
    }

    match args.entity {
        Some(_) => selected.into_iter().for_each(describe),
        None => {
            println!("{:<20} {:<20} {:>7}  dependents", "entity", "primary key", "columns");
            for entity in selected {
                let dependents: Vec<&str> = catalog::dependents(entity.name)
                    .iter()
                    .map(|(d, _)| d.name)
                    .collect();
                println!(
                    "{:<20} {:<20} {:>7}  {}",
                    entity.name,
                    entity.primary_key,
                    entity.columns.len(),
                    dependents.join(", ")
                );
            }
        }
    }
    Ok(())
}

fn describe(entity: &EntityDef) {
    println!("{} (table {}, {})", entity.label, entity.table, entity.plural);
    println!();
    println!("columns:");
    for c in entity.columns {
        let mut notes = Vec::new();
        if c.name == entity.primary_key {
            notes.push("primary key".to_owned());
        }
        if c.nullable {
            notes.push("nullable".to_owned());
        }
        if let Some(max) = c.max_len {
            notes.push(format!("max {}", max));
        }
        println!("  {:<24} {:<10} {}", c.name, c.ty.describe(), notes.join(", "));
    }

    if !entity.foreign_keys.is_empty() {
        println!("references:");
        for fk in entity.foreign_keys {
            println!("  {:<24} -> {}", fk.column, fk.target);
        }
    }
    for unique in entity.unique {
        println!("unique: ({})", unique.columns.join(", "));
    }

    let dependents = catalog::dependents(entity.name);
    if !dependents.is_empty() {
        println!("referenced by:");
        for (dependent, fk) in dependents {
            println!("  {}.{}", dependent.name, fk.column);
        }
    }
}
