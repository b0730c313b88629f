use std::path::{Path, PathBuf};

use anyhow::Result;
use holonet::config::Settings;
use holonet::import::{GraphImporter, SqliteSource};
use holonet::store::Neo4jStore;

/// Copy the SQLite dataset into Neo4j
pub async fn run(settings: &Settings, sqlite: Option<PathBuf>, keep_existing: bool) -> Result<()> {
    let path = sqlite.unwrap_or_else(|| settings.sqlite_db_path.clone());
    println!("Importing {} into {}", path.display(), settings.neo4j_uri);

    let source = SqliteSource::open(&path)?;
    let store = Neo4jStore::connect(settings).await?;

    let result = GraphImporter::new(&store, &source)
        .import_all(!keep_existing)
        .await;
    store.close();
    let report = result?;

    println!("Import complete:");
    for (label, count) in &report.nodes {
        println!("  - {:<14} {}", label.as_str(), count);
    }
    for table in &report.skipped_tables {
        println!("  - {:<14} skipped (table missing)", table);
    }
    println!("  {} nodes, {} link queries", report.total_nodes(), report.link_queries);
    print_next_steps(&path);
    Ok(())
}

fn print_next_steps(path: &Path) {
    println!("\nSource: {}", path.display());
    println!("Try: holonet ask \"Quantas naves Han Solo pilota?\"");
}
