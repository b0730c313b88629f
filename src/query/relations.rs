use serde::Serialize;

use crate::graph::{Label, RelationshipType};

/// A traversal a question can ask about, starting from a character
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Relation {
    Starships,
    Quotes,
    Species,
    Homeworld,
    Films,
}

/// Edge to follow, label of the node it reaches, and the property to project
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RelationTriple {
    pub edge: RelationshipType,
    pub target: Label,
    pub property: &'static str,
}

/// Keywords in lookup order; the first one found in the question wins.
/// Several keywords may share a relation (plural forms, English synonyms).
pub const KEYWORDS: [(&str, Relation); 9] = [
    ("naves", Relation::Starships),
    ("ship", Relation::Starships),
    ("citações", Relation::Quotes),
    ("quotes", Relation::Quotes),
    ("espécies", Relation::Species),
    ("espécie", Relation::Species),
    ("planeta", Relation::Homeworld),
    ("filmes", Relation::Films),
    ("filme", Relation::Films),
];

impl Relation {
    pub fn triple(&self) -> RelationTriple {
        match self {
            Relation::Starships => RelationTriple {
                edge: RelationshipType::Pilots,
                target: Label::Starship,
                property: "name",
            },
            Relation::Quotes => RelationTriple {
                edge: RelationshipType::Said,
                target: Label::Quote,
                property: "text",
            },
            Relation::Species => RelationTriple {
                edge: RelationshipType::IsSpecies,
                target: Label::Species,
                property: "name",
            },
            Relation::Homeworld => RelationTriple {
                edge: RelationshipType::BornOn,
                target: Label::Planet,
                property: "name",
            },
            Relation::Films => RelationTriple {
                edge: RelationshipType::AppearsIn,
                target: Label::Film,
                property: "title",
            },
        }
    }

    /// Find the relation named by the first matching keyword in `question`
    pub fn detect(question: &str) -> Option<Relation> {
        let lowered = question.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, relation)| *relation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_keywords() {
        assert_eq!(
            Relation::detect("Quantas naves Han Solo pilota?"),
            Some(Relation::Starships)
        );
        assert_eq!(
            Relation::detect("Listar CITAÇÕES de Darth Vader"),
            Some(Relation::Quotes)
        );
        assert_eq!(
            Relation::detect("Em que planeta Luke nasceu?"),
            Some(Relation::Homeworld)
        );
        assert_eq!(
            Relation::detect("Quais filmes Luke aparece?"),
            Some(Relation::Films)
        );
        assert_eq!(Relation::detect("Quem é Luke Skywalker?"), None);
    }

    #[test]
    fn test_detect_uses_table_order() {
        // "naves" precedes "citações" in the table, regardless of position in the text
        assert_eq!(
            Relation::detect("citações e naves de Han Solo"),
            Some(Relation::Starships)
        );
        // "ship" matches inside longer words
        assert_eq!(
            Relation::detect("starships of Han Solo"),
            Some(Relation::Starships)
        );
    }

    #[test]
    fn test_triples() {
        let quotes = Relation::Quotes.triple();
        assert_eq!(quotes.edge, RelationshipType::Said);
        assert_eq!(quotes.target, Label::Quote);
        assert_eq!(quotes.property, "text");

        assert_eq!(Relation::Films.triple().property, "title");
        assert_eq!(Relation::Species.triple().edge, RelationshipType::IsSpecies);
    }
}
