use serde::Serialize;
use std::fmt;

/// Node labels present in the imported graph
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Label {
    Character,
    Species,
    Planet,
    Starship,
    Weapon,
    Organization,
    Film,
    Quote,
    Vehicle,
    City,
    Droid,
    Battle,
}

impl Label {
    pub const ALL: [Label; 12] = [
        Label::Character,
        Label::Species,
        Label::Planet,
        Label::Starship,
        Label::Weapon,
        Label::Organization,
        Label::Film,
        Label::Quote,
        Label::Vehicle,
        Label::City,
        Label::Droid,
        Label::Battle,
    ];

    /// Label as written in Cypher patterns
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Character => "Character",
            Label::Species => "Species",
            Label::Planet => "Planet",
            Label::Starship => "Starship",
            Label::Weapon => "Weapon",
            Label::Organization => "Organization",
            Label::Film => "Film",
            Label::Quote => "Quote",
            Label::Vehicle => "Vehicle",
            Label::City => "City",
            Label::Droid => "Droid",
            Label::Battle => "Battle",
        }
    }

    /// Name of the uniqueness constraint on `id` for this label
    pub fn id_constraint_name(&self) -> String {
        format!("{}_id", self.as_str().to_lowercase())
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directed relationship types between nodes
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum RelationshipType {
    IsSpecies,  // Character -> Species
    BornOn,     // Character -> Planet
    Pilots,     // Character -> Starship
    Said,       // Character -> Quote
    AppearsIn,  // Character/Starship/Weapon/Organization -> Film
}

impl RelationshipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::IsSpecies => "IS_SPECIES",
            RelationshipType::BornOn => "BORN_ON",
            RelationshipType::Pilots => "PILOTS",
            RelationshipType::Said => "SAID",
            RelationshipType::AppearsIn => "APPEARS_IN",
        }
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
