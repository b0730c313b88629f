use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use holonet::config::Settings;
use holonet::import::{DatabaseSummary, Record, SqliteSource};
use serde::Serialize;

#[derive(Serialize)]
struct Inspection<'a> {
    path: String,
    #[serde(flatten)]
    summary: &'a DatabaseSummary,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    samples: BTreeMap<String, Vec<Record>>,
}

/// Describe the tables of the SQLite source
pub fn run(settings: &Settings, sqlite: Option<PathBuf>, json: bool, samples: usize) -> Result<()> {
    let path = sqlite.unwrap_or_else(|| settings.sqlite_db_path.clone());
    let source = SqliteSource::open(&path)?;
    let summary = source.summary()?;

    let mut rows = BTreeMap::new();
    if samples > 0 {
        for table in summary.tables.keys() {
            rows.insert(table.clone(), source.sample_rows(table, samples)?);
        }
    }

    if json {
        let inspection = Inspection {
            path: path.display().to_string(),
            summary: &summary,
            samples: rows,
        };
        println!("{}", serde_json::to_string_pretty(&inspection)?);
        return Ok(());
    }

    println!("Database: {}", path.display());
    println!("Tables: {}", summary.total_tables);
    for (table, info) in &summary.tables {
        println!("\n{} ({} rows)", table, info.count);
        for column in &info.columns {
            let mut flags = Vec::new();
            if column.primary_key {
                flags.push("PK");
            }
            if column.not_null {
                flags.push("NOT NULL");
            }
            println!(
                "  {:<20} {:<10} {}",
                column.name,
                column.column_type,
                flags.join(" ")
            );
        }
        if let Some(records) = rows.get(table) {
            for record in records {
                println!("  > {}", serde_json::to_string(record)?);
            }
        }
    }
    Ok(())
}
