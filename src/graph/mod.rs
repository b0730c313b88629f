pub mod schema;

pub use schema::{Label, RelationshipType};
