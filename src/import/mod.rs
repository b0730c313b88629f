//! One-time import of the relational Star Wars dataset into the graph.

mod importer;
mod sqlite;

pub use importer::{GraphImporter, ImportReport, TableMapping, TABLES};
pub use sqlite::{
    validate_identifier, ColumnInfo, DatabaseSummary, Record, SqliteSource, TableSummary,
};
