use serde::Serialize;
use std::fmt;

const COUNT_PREFIX: &str = "quant";
const COUNT_WORDS: [&str; 2] = ["quantos", "quantas"];
const LIST_PREFIXES: [&str; 2] = ["quais", "listar"];

/// What kind of answer a question asks for
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// "How many ...": a single number
    Count,
    /// "Which ..." / "List ...": a list of names
    List,
    /// A question naming a character: its profile
    Detail,
}

impl Intent {
    /// Pick the intent of `question` by fixed priority: counting markers,
    /// then listing markers, then whether an entity was recognised.
    pub fn classify(question: &str, entity: Option<&str>) -> Intent {
        let lowered = question.to_lowercase();

        if lowered.starts_with(COUNT_PREFIX) || COUNT_WORDS.iter().any(|w| lowered.contains(w)) {
            return Intent::Count;
        }
        if LIST_PREFIXES.iter().any(|p| lowered.starts_with(p)) {
            return Intent::List;
        }
        match entity {
            Some(name) if !name.is_empty() => Intent::Detail,
            _ => Intent::List,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Count => "count",
            Intent::List => "list",
            Intent::Detail => "detail",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
