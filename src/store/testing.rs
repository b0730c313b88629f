//! In-memory [`GraphStore`] that records every query it receives.

use async_trait::async_trait;
use std::sync::Mutex;

use super::{CypherQuery, GraphStore, Row};
use crate::error::StoreError;

pub struct RecordingStore {
    rows: Vec<Row>,
    failure: Option<String>,
    failing_fragment: Option<String>,
    executed: Mutex<Vec<CypherQuery>>,
}

impl RecordingStore {
    /// Every read returns `rows`
    pub fn returning(rows: Vec<Row>) -> Self {
        Self {
            rows,
            failure: None,
            failing_fragment: None,
            executed: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::returning(Vec::new())
        }
    }

    /// Calls whose text contains `fragment` fail; the rest succeed
    pub fn failing_on(fragment: &str) -> Self {
        Self {
            failing_fragment: Some(fragment.to_string()),
            ..Self::returning(Vec::new())
        }
    }

    pub fn executed(&self) -> Vec<CypherQuery> {
        self.executed.lock().unwrap().clone()
    }

    fn record(&self, query: &CypherQuery) -> Result<(), StoreError> {
        self.executed.lock().unwrap().push(query.clone());

        if let Some(message) = &self.failure {
            return Err(StoreError::Query(message.clone()));
        }
        match &self.failing_fragment {
            Some(fragment) if query.text().contains(fragment.as_str()) => Err(
                StoreError::Query(format!("rejected query containing {}", fragment)),
            ),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl GraphStore for RecordingStore {
    async fn query(&self, query: &CypherQuery) -> Result<Vec<Row>, StoreError> {
        self.record(query)?;
        Ok(self.rows.clone())
    }

    async fn run(&self, query: &CypherQuery) -> Result<(), StoreError> {
        self.record(query)
    }
}
