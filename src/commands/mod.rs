pub mod ask;
pub mod chat;
pub mod demo;
pub mod explain;
pub mod import;
pub mod inspect;
#[cfg(feature = "http")]
pub mod serve;

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use holonet::config::Settings;
use holonet::qa::StarWarsQa;
use holonet::store::Neo4jStore;

/// An open store connection and the orchestrator built on it
pub struct Session {
    store: Arc<Neo4jStore>,
    pub qa: StarWarsQa,
}

impl Session {
    /// Validate the settings, connect, and build the QA system
    pub async fn open(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let store = Arc::new(Neo4jStore::connect(settings).await?);
        let qa = StarWarsQa::new(store.clone());
        info!("QA system initialized");
        Ok(Self { store, qa })
    }

    /// Release the connection once every clone of the orchestrator is gone
    pub fn close(self) {
        let Session { store, qa } = self;
        drop(qa);
        match Arc::try_unwrap(store) {
            Ok(store) => store.close(),
            Err(_) => warn!("Store still shared at shutdown; leaving it to drop"),
        }
    }
}
