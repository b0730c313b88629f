use indoc::formatdoc;

use super::intent::Intent;
use super::relations::Relation;
use crate::graph::{Label, RelationshipType};
use crate::store::CypherQuery;

/// Number of characters returned when a question names nothing we recognise
pub const DEFAULT_LIST_LIMIT: usize = 10;

/// Parameter holding the character name in every templated query
pub const NAME_PARAM: &str = "name";

/// Assemble the Cypher query answering a classified question.
///
/// The character name is always bound as `$name` (empty when no entity was
/// found). Only labels, relationship types and property names from the
/// closed schema enums are written into the query text.
pub fn build_query(intent: Intent, entity: Option<&str>, relation: Option<Relation>) -> CypherQuery {
    let name = entity.unwrap_or_default();

    match (intent, relation) {
        (Intent::Count, Some(relation)) => {
            let triple = relation.triple();
            CypherQuery::new(format!(
                "MATCH (c:{} {{name: ${}}})-[:{}]->(x:{}) RETURN count(x) AS count",
                Label::Character,
                NAME_PARAM,
                triple.edge,
                triple.target
            ))
            .param(NAME_PARAM, name)
            .returning(&["count"])
        }
        (Intent::List, Some(relation)) => {
            let triple = relation.triple();
            CypherQuery::new(format!(
                "MATCH (c:{} {{name: ${}}})-[:{}]->(x:{}) RETURN x.{} AS value",
                Label::Character,
                NAME_PARAM,
                triple.edge,
                triple.target,
                triple.property
            ))
            .param(NAME_PARAM, name)
            .returning(&["value"])
        }
        (Intent::Detail, _) => detail_query(name),
        _ => roster_query(),
    }
}

fn detail_query(name: &str) -> CypherQuery {
    let text = formatdoc!(
        "
        MATCH (c:{character} {{name: ${param}}})
        OPTIONAL MATCH (c)-[:{is_species}]->(s:{species})
        OPTIONAL MATCH (c)-[:{born_on}]->(p:{planet})
        OPTIONAL MATCH (c)-[:{pilots}]->(ship:{starship})
        OPTIONAL MATCH (c)-[:{said}]->(q:{quote})
        RETURN c.name AS name, c.gender AS gender,
               coalesce(c.birth_year, c.year_born) AS birth_year,
               s.name AS species, p.name AS planet,
               collect(DISTINCT ship.name) AS ships, collect(DISTINCT q.text) AS quotes",
        character = Label::Character,
        param = NAME_PARAM,
        is_species = RelationshipType::IsSpecies,
        species = Label::Species,
        born_on = RelationshipType::BornOn,
        planet = Label::Planet,
        pilots = RelationshipType::Pilots,
        starship = Label::Starship,
        said = RelationshipType::Said,
        quote = Label::Quote,
    );

    CypherQuery::new(text)
        .param(NAME_PARAM, name)
        .returning(&["name", "gender", "birth_year", "species", "planet", "ships", "quotes"])
}

fn roster_query() -> CypherQuery {
    CypherQuery::new(format!(
        "MATCH (c:{}) RETURN c.name AS value LIMIT {}",
        Label::Character,
        DEFAULT_LIST_LIMIT
    ))
    .returning(&["value"])
}
