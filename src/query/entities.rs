/// Characters recognised in questions, in match priority order
pub const KNOWN_CHARACTERS: [&str; 5] = [
    "Luke Skywalker",
    "Han Solo",
    "Darth Vader",
    "Leia Organa",
    "Yoda",
];

/// Finds the character a question is about by case-insensitive substring match.
///
/// Names are tried in list order and the first hit wins, so when one name
/// contains another the earlier entry decides.
#[derive(Debug, Clone)]
pub struct EntityExtractor {
    names: Vec<String>,
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new(KNOWN_CHARACTERS.iter().map(|n| n.to_string()).collect())
    }
}

impl EntityExtractor {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn extract(&self, question: &str) -> Option<&str> {
        let lowered = question.to_lowercase();
        self.names
            .iter()
            .find(|name| lowered.contains(&name.to_lowercase()))
            .map(|name| name.as_str())
    }
}
