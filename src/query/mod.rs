//! Translation of a free-text question into a graph query, and of the
//! resulting rows back into an answer.

mod builder;
mod entities;
mod formatter;
mod intent;
mod relations;

pub use builder::{build_query, DEFAULT_LIST_LIMIT, NAME_PARAM};
pub use entities::{EntityExtractor, KNOWN_CHARACTERS};
pub use formatter::{format_answer, NONE_FOUND};
pub use intent::Intent;
pub use relations::{Relation, RelationTriple, KEYWORDS};
