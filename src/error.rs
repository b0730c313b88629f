use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Variáveis de ambiente obrigatórias não encontradas: {}", .0.join(", "))]
    MissingVariables(Vec<String>),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Query failed: {0}")]
    Query(String),
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("SQLite database {0} not found")]
    SourceMissing(String),

    #[error("Invalid identifier in source schema: {0}")]
    InvalidIdentifier(String),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
