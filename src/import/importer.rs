use std::time::Instant;
use tracing::{info, warn};

use super::sqlite::{validate_identifier, Record, SqliteSource};
use crate::error::ImportError;
use crate::graph::{Label, RelationshipType};
use crate::store::{CypherQuery, GraphStore};

/// Source table, the label its rows become, and column renames
#[derive(Debug, Clone, Copy)]
pub struct TableMapping {
    pub table: &'static str,
    pub label: Label,
    pub renames: &'static [(&'static str, &'static str)],
}

impl TableMapping {
    fn property_for<'c>(&self, column: &'c str) -> &'c str {
        self.renames
            .iter()
            .find(|(from, _)| *from == column)
            .map(|(_, to)| *to)
            .unwrap_or(column)
    }
}

/// Import order matters: characters link to species and planets, quotes to characters.
pub const TABLES: [TableMapping; 8] = [
    TableMapping { table: "species", label: Label::Species, renames: &[] },
    TableMapping { table: "planets", label: Label::Planet, renames: &[] },
    TableMapping { table: "characters", label: Label::Character, renames: &[] },
    TableMapping { table: "starships", label: Label::Starship, renames: &[] },
    TableMapping { table: "weapons", label: Label::Weapon, renames: &[] },
    TableMapping { table: "organizations", label: Label::Organization, renames: &[] },
    TableMapping { table: "films", label: Label::Film, renames: &[] },
    // Quote text is read back as `text` by the question templates
    TableMapping { table: "quotes", label: Label::Quote, renames: &[("quote", "text")] },
];

/// Labels whose nodes carry a comma-separated `films` property
const FILM_LINKED: [Label; 4] = [
    Label::Character,
    Label::Starship,
    Label::Weapon,
    Label::Organization,
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub nodes: Vec<(Label, usize)>,
    pub skipped_tables: Vec<String>,
    /// Link queries issued; a query whose target is absent creates no edge
    pub link_queries: usize,
}

impl ImportReport {
    pub fn total_nodes(&self) -> usize {
        self.nodes.iter().map(|(_, count)| count).sum()
    }
}

/// Copies the SQLite dataset into the graph store
pub struct GraphImporter<'a> {
    store: &'a dyn GraphStore,
    source: &'a SqliteSource,
}

impl<'a> GraphImporter<'a> {
    pub fn new(store: &'a dyn GraphStore, source: &'a SqliteSource) -> Self {
        Self { store, source }
    }

    /// Run the whole import. With `clear` set, existing graph data is removed first.
    pub async fn import_all(&self, clear: bool) -> Result<ImportReport, ImportError> {
        info!("Starting import from {}", self.source.path().display());
        let start_time = Instant::now();
        let mut report = ImportReport::default();

        if clear {
            self.clear_database().await?;
        }
        self.create_constraints().await;

        for mapping in &TABLES {
            if !self.source.has_table(mapping.table)? {
                warn!("Table {} not found in source, skipping", mapping.table);
                report.skipped_tables.push(mapping.table.to_string());
                continue;
            }
            let (nodes, link_queries) = self.import_table(mapping).await?;
            report.nodes.push((mapping.label, nodes));
            report.link_queries += link_queries;
        }

        self.create_relationships().await?;

        info!(
            "Import complete in {:.2?}: {} nodes, {} link queries",
            start_time.elapsed(),
            report.total_nodes(),
            report.link_queries
        );
        Ok(report)
    }

    pub async fn clear_database(&self) -> Result<(), ImportError> {
        self.store
            .run(&CypherQuery::new("MATCH (n) DETACH DELETE n"))
            .await?;
        info!("Graph database cleared");
        Ok(())
    }

    /// Create the `id` uniqueness constraints; failures are logged and ignored
    pub async fn create_constraints(&self) {
        for label in Label::ALL {
            let query = CypherQuery::new(format!(
                "CREATE CONSTRAINT {} IF NOT EXISTS FOR (n:{}) REQUIRE n.id IS UNIQUE",
                label.id_constraint_name(),
                label
            ));
            if let Err(e) = self.store.run(&query).await {
                warn!("Constraint for {} already exists or failed: {}", label, e);
            }
        }
    }

    /// Create one node per row; returns (nodes created, link queries issued)
    pub async fn import_table(&self, mapping: &TableMapping) -> Result<(usize, usize), ImportError> {
        let records = self.source.read_table(mapping.table)?;
        let mut issued = 0;

        for record in &records {
            self.store.run(&create_node_query(mapping, record)?).await?;

            let link_queries = match mapping.label {
                Label::Character => character_links(record),
                Label::Quote => quote_links(record),
                _ => Vec::new(),
            };
            for query in &link_queries {
                self.store.run(query).await?;
            }
            issued += link_queries.len();
        }

        info!("Imported {} {} nodes", records.len(), mapping.label);
        Ok((records.len(), issued))
    }

    /// Relationships derived from list-valued text properties
    pub async fn create_relationships(&self) -> Result<(), ImportError> {
        let pilots = CypherQuery::new(format!(
            "MATCH (c:{}), (s:{}) WHERE s.pilots CONTAINS c.name CREATE (c)-[:{}]->(s)",
            Label::Character,
            Label::Starship,
            RelationshipType::Pilots
        ));
        self.store.run(&pilots).await?;

        for label in FILM_LINKED {
            let appears_in = CypherQuery::new(format!(
                "MATCH (x:{}), (f:{}) WHERE f.title IN split(x.films, ', ') CREATE (x)-[:{}]->(f)",
                label,
                Label::Film,
                RelationshipType::AppearsIn
            ));
            self.store.run(&appears_in).await?;
        }

        info!("Relationships created");
        Ok(())
    }
}

/// `CREATE` for one row; NULL columns are left out of the property map
fn create_node_query(mapping: &TableMapping, record: &Record) -> Result<CypherQuery, ImportError> {
    let mut assignments = Vec::new();
    let mut params = Vec::new();

    for (column, value) in record.present() {
        let property = validate_identifier(mapping.property_for(column))?;
        assignments.push(format!("{}: ${}", property, property));
        params.push((property, value.clone()));
    }

    let text = format!("CREATE (n:{} {{{}}})", mapping.label, assignments.join(", "));
    Ok(params
        .into_iter()
        .fold(CypherQuery::new(text), |query, (key, value)| query.param(key, value)))
}

fn character_links(record: &Record) -> Vec<CypherQuery> {
    let Some(id) = record.get("id") else {
        return Vec::new();
    };

    let targets = [
        ("species", RelationshipType::IsSpecies, Label::Species),
        ("homeworld", RelationshipType::BornOn, Label::Planet),
    ];

    targets
        .iter()
        .filter_map(|(column, edge, label)| {
            record.text(column).map(|target_name| {
                CypherQuery::new(format!(
                    "MATCH (c:{} {{id: $char_id}}) MATCH (t:{} {{name: $target_name}}) CREATE (c)-[:{}]->(t)",
                    Label::Character,
                    label,
                    edge
                ))
                .param("char_id", id.clone())
                .param("target_name", target_name)
            })
        })
        .collect()
}

fn quote_links(record: &Record) -> Vec<CypherQuery> {
    match (record.get("id"), record.text("character_name")) {
        (Some(id), Some(speaker)) => vec![CypherQuery::new(format!(
            "MATCH (q:{} {{id: $quote_id}}) MATCH (c:{} {{name: $char_name}}) CREATE (c)-[:{}]->(q)",
            Label::Quote,
            Label::Character,
            RelationshipType::Said
        ))
        .param("quote_id", id.clone())
        .param("char_name", speaker)],
        _ => Vec::new(),
    }
}
