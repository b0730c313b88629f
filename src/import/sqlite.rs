use once_cell::sync::Lazy;
use regex::Regex;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ImportError;
use crate::store::Param;

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid"));

/// Reject table and column names that cannot be used verbatim in SQL or Cypher
pub fn validate_identifier(name: &str) -> Result<&str, ImportError> {
    if IDENTIFIER.is_match(name) {
        Ok(name)
    } else {
        Err(ImportError::InvalidIdentifier(name.to_string()))
    }
}

/// Column description from `PRAGMA table_info`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub column_type: String,
    pub not_null: bool,
    pub default_value: Option<String>,
    pub primary_key: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    pub count: i64,
    pub columns: Vec<ColumnInfo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatabaseSummary {
    pub tables: BTreeMap<String, TableSummary>,
    pub total_tables: usize,
}

/// One source row; `None` marks SQL NULL (and NaN reals)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record(BTreeMap<String, Option<Param>>);

impl Record {
    pub fn get(&self, column: &str) -> Option<&Param> {
        self.0.get(column).and_then(Option::as_ref)
    }

    /// Column value as non-empty text
    pub fn text(&self, column: &str) -> Option<String> {
        match self.get(column)? {
            Param::Text(s) if s.is_empty() => None,
            Param::Text(s) => Some(s.clone()),
            Param::Int(i) => Some(i.to_string()),
            Param::Float(f) => Some(f.to_string()),
            Param::Bool(b) => Some(b.to_string()),
        }
    }

    /// Non-null columns
    pub fn present(&self) -> impl Iterator<Item = (&str, &Param)> {
        self.0
            .iter()
            .filter_map(|(column, value)| value.as_ref().map(|v| (column.as_str(), v)))
    }
}

fn to_param(value: ValueRef<'_>) -> Option<Param> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(Param::Int(i)),
        ValueRef::Real(f) if f.is_nan() => None,
        ValueRef::Real(f) => Some(Param::Float(f)),
        ValueRef::Text(bytes) => Some(Param::Text(String::from_utf8_lossy(bytes).into_owned())),
        ValueRef::Blob(_) => None,
    }
}

/// Read-only view of the SQLite dataset
pub struct SqliteSource {
    conn: Connection,
    path: PathBuf,
}

impl std::fmt::Debug for SqliteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteSource")
            .field("conn", &"SQLite Connection")
            .field("path", &self.path)
            .finish()
    }
}

impl SqliteSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ImportError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ImportError::SourceMissing(path.display().to_string()));
        }

        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tables(&self) -> Result<Vec<String>, ImportError> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }

    pub fn has_table(&self, table: &str) -> Result<bool, ImportError> {
        Ok(self.tables()?.iter().any(|t| t == table))
    }

    pub fn table_info(&self, table: &str) -> Result<Vec<ColumnInfo>, ImportError> {
        let table = validate_identifier(table)?;
        let mut stmt = self.conn.prepare(&format!("PRAGMA table_info({})", table))?;
        let columns = stmt
            .query_map([], |row| {
                Ok(ColumnInfo {
                    name: row.get(1)?,
                    column_type: row.get(2)?,
                    not_null: row.get::<_, i64>(3)? != 0,
                    default_value: row.get(4)?,
                    primary_key: row.get::<_, i64>(5)? != 0,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(columns)
    }

    pub fn count(&self, table: &str) -> Result<i64, ImportError> {
        let table = validate_identifier(table)?;
        let count = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))?;
        Ok(count)
    }

    pub fn sample_rows(&self, table: &str, limit: usize) -> Result<Vec<Record>, ImportError> {
        let table = validate_identifier(table)?;
        self.select(&format!("SELECT * FROM {} LIMIT {}", table, limit))
    }

    pub fn read_table(&self, table: &str) -> Result<Vec<Record>, ImportError> {
        let table = validate_identifier(table)?;
        self.select(&format!("SELECT * FROM {}", table))
    }

    /// Row counts and column descriptions for every table
    pub fn summary(&self) -> Result<DatabaseSummary, ImportError> {
        let mut tables = BTreeMap::new();
        for table in self.tables()? {
            let summary = TableSummary {
                count: self.count(&table)?,
                columns: self.table_info(&table)?,
            };
            tables.insert(table, summary);
        }

        Ok(DatabaseSummary {
            total_tables: tables.len(),
            tables,
        })
    }

    fn select(&self, sql: &str) -> Result<Vec<Record>, ImportError> {
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let records = stmt
            .query_map([], |row| {
                let mut fields = BTreeMap::new();
                for (i, column) in columns.iter().enumerate() {
                    fields.insert(column.clone(), to_param(row.get_ref(i)?));
                }
                Ok(Record(fields))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }
}
