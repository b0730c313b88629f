//! Graph store boundary: parameterised Cypher in, rows of named fields out.

mod neo4j;
#[cfg(test)]
pub mod testing;

pub use neo4j::Neo4jStore;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::StoreError;

/// A value bound to a `$name` placeholder in a Cypher query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Param {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::Text(value.to_string())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Param::Text(value)
    }
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Param::Int(value)
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Param::Float(value)
    }
}

impl From<bool> for Param {
    fn from(value: bool) -> Self {
        Param::Bool(value)
    }
}

/// Cypher text together with its bound parameters and the aliases it returns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CypherQuery {
    text: String,
    params: BTreeMap<String, Param>,
    columns: Vec<String>,
}

impl CypherQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            params: BTreeMap::new(),
            columns: Vec::new(),
        }
    }

    pub fn param(mut self, key: &str, value: impl Into<Param>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    /// Declare the aliases of the `RETURN` clause, in order
    pub fn returning(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn params(&self) -> &BTreeMap<String, Param> {
        &self.params
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

/// One result row: aliased field name to value
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Row(BTreeMap<String, Value>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from a JSON object; anything else yields an empty row
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => Row(map.into_iter().collect()),
            _ => Row::default(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Field rendered as text; null, missing and empty strings give `None`
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(value_text)
    }

    /// List field rendered as texts, skipping null and empty entries
    pub fn texts(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::Array(items)) => items.iter().filter_map(value_text).collect(),
            _ => Vec::new(),
        }
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Access to the graph database
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Execute a read query and collect every row
    async fn query(&self, query: &CypherQuery) -> Result<Vec<Row>, StoreError>;

    /// Execute a write query, discarding any result
    async fn run(&self, query: &CypherQuery) -> Result<(), StoreError>;
}
