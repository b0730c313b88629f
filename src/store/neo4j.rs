use async_trait::async_trait;
use neo4rs::{ConfigBuilder, Graph};
use serde_json::Value;
use tracing::{debug, info};

use super::{CypherQuery, GraphStore, Param, Row};
use crate::config::Settings;
use crate::error::StoreError;

const MAX_CONNECTIONS: usize = 8;

/// Neo4j-backed [`GraphStore`] over Bolt
pub struct Neo4jStore {
    graph: Graph,
    uri: String,
}

impl std::fmt::Debug for Neo4jStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Neo4jStore")
            .field("graph", &"Neo4j Graph")
            .field("uri", &self.uri)
            .finish()
    }
}

impl Neo4jStore {
    /// Open the connection pool and check it with a trivial query
    pub async fn connect(settings: &Settings) -> Result<Self, StoreError> {
        let config = ConfigBuilder::default()
            .uri(settings.neo4j_uri.as_str())
            .user(settings.neo4j_user.as_str())
            .password(settings.neo4j_password.as_str())
            .max_connections(MAX_CONNECTIONS)
            .build()
            .map_err(|e| StoreError::Connection(format!("Invalid Neo4j config: {}", e)))?;

        let graph = Graph::connect(config)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        graph
            .run(neo4rs::query("RETURN 1 AS ok"))
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        info!("Connected to Neo4j at {}", settings.neo4j_uri);
        Ok(Self {
            graph,
            uri: settings.neo4j_uri.clone(),
        })
    }

    /// Release the connection pool
    pub fn close(self) {
        info!("Closing Neo4j connection to {}", self.uri);
        drop(self.graph);
    }
}

fn to_bolt_query(query: &CypherQuery) -> neo4rs::Query {
    query
        .params()
        .iter()
        .fold(neo4rs::query(query.text()), |q, (key, value)| match value {
            Param::Text(s) => q.param(key, s.as_str()),
            Param::Int(i) => q.param(key, *i),
            Param::Float(f) => q.param(key, *f),
            Param::Bool(b) => q.param(key, *b),
        })
}

/// Copy the declared columns out of a Bolt row; any undecodable field fails the whole query
fn decode_row(bolt_row: &neo4rs::Row, columns: &[String]) -> Result<Row, StoreError> {
    let mut row = Row::new();
    for column in columns {
        let value = bolt_row
            .get::<Value>(column)
            .map_err(|e| StoreError::Query(format!("column {}: {}", column, e)))?;
        row.insert(column.clone(), value);
    }
    Ok(row)
}

#[async_trait]
impl GraphStore for Neo4jStore {
    async fn query(&self, query: &CypherQuery) -> Result<Vec<Row>, StoreError> {
        debug!("Executing Cypher: {}", query.text());

        let mut stream = self
            .graph
            .execute(to_bolt_query(query))
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let mut rows = Vec::new();
        while let Some(bolt_row) = stream
            .next()
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?
        {
            rows.push(decode_row(&bolt_row, query.columns())?);
        }

        debug!("Query returned {} rows", rows.len());
        Ok(rows)
    }

    async fn run(&self, query: &CypherQuery) -> Result<(), StoreError> {
        debug!("Running Cypher: {}", query.text());
        self.graph
            .run(to_bolt_query(query))
            .await
            .map_err(|e| StoreError::Query(e.to_string()))
    }
}
