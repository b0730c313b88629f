pub mod config;
pub mod error;
pub mod graph;
pub mod import;
pub mod qa;
pub mod query;
#[cfg(feature = "http")]
pub mod server;
pub mod store;

pub use qa::{StarWarsQa, Translation, Translator};
pub use store::{GraphStore, Neo4jStore};
