//! Question answering: translate a question, run it, render the rows.

#[cfg(test)]
mod tests;

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error};

use crate::query::{
    build_query, format_answer, EntityExtractor, Intent, Relation, RelationTriple,
};
use crate::store::{CypherQuery, GraphStore};

/// Everything decided about a question before it reaches the store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Translation {
    pub question: String,
    pub entity: Option<String>,
    pub relation: Option<Relation>,
    pub triple: Option<RelationTriple>,
    pub intent: Intent,
    pub query: CypherQuery,
}

/// Store-independent half of the pipeline
#[derive(Debug, Clone, Default)]
pub struct Translator {
    extractor: EntityExtractor,
}

impl Translator {
    pub fn new(extractor: EntityExtractor) -> Self {
        Self { extractor }
    }

    pub fn translate(&self, question: &str) -> Translation {
        let entity = self.extractor.extract(question);
        let relation = Relation::detect(question);
        let intent = Intent::classify(question, entity);
        let query = build_query(intent, entity, relation);

        Translation {
            question: question.to_string(),
            entity: entity.map(str::to_string),
            relation,
            triple: relation.map(|r| r.triple()),
            intent,
            query,
        }
    }
}

/// Answers questions about the Star Wars graph.
///
/// Holds no state between calls besides the shared store handle, so asking
/// the same question twice against an unchanged graph gives the same answer.
#[derive(Clone)]
pub struct StarWarsQa {
    translator: Translator,
    store: Arc<dyn GraphStore>,
}

impl StarWarsQa {
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self::with_translator(Translator::default(), store)
    }

    pub fn with_translator(translator: Translator, store: Arc<dyn GraphStore>) -> Self {
        Self { translator, store }
    }

    pub fn translate(&self, question: &str) -> Translation {
        self.translator.translate(question)
    }

    /// Answer `question`. Store failures come back as an error message
    /// rather than an `Err`; nothing is retried.
    pub async fn ask(&self, question: &str) -> String {
        let translation = self.translate(question);
        debug!(
            "Question {:?}: entity={:?} relation={:?} intent={}",
            question, translation.entity, translation.relation, translation.intent
        );

        match self.store.query(&translation.query).await {
            Ok(rows) => format_answer(translation.intent, &rows),
            Err(e) => {
                error!("Erro na consulta: {}", e);
                format!("Erro ao executar consulta: {}", e)
            }
        }
    }
}
