use serde_json::json;
use std::sync::Arc;

use super::*;
use crate::graph::{Label, RelationshipType};
use crate::query::NONE_FOUND;
use crate::store::testing::RecordingStore;
use crate::store::{Param, Row};

fn qa_with(store: &Arc<RecordingStore>) -> StarWarsQa {
    StarWarsQa::new(store.clone())
}

#[test]
fn test_translate_count_question() {
    let translation = Translator::default().translate("Quantas naves Han Solo pilota?");

    assert_eq!(translation.entity.as_deref(), Some("Han Solo"));
    assert_eq!(translation.relation, Some(Relation::Starships));
    assert_eq!(translation.intent, Intent::Count);

    let triple = translation.triple.unwrap();
    assert_eq!(triple.edge, RelationshipType::Pilots);
    assert_eq!(triple.target, Label::Starship);
    assert!(translation.query.text().contains("count(x) AS count"));
}

#[test]
fn test_translate_with_custom_character_list() {
    let translator = Translator::new(EntityExtractor::new(vec!["Chewbacca".to_string()]));
    let translation = translator.translate("Qual a espécie de Chewbacca?");

    assert_eq!(translation.entity.as_deref(), Some("Chewbacca"));
    assert_eq!(translation.relation, Some(Relation::Species));
    assert_eq!(translation.intent, Intent::Detail);
}

#[tokio::test]
async fn test_ask_count_end_to_end() {
    let store = Arc::new(RecordingStore::returning(vec![Row::from_json(json!({ "count": 2 }))]));
    let qa = qa_with(&store);

    let answer = qa.ask("Quantas naves Han Solo pilota?").await;

    assert_eq!(answer, "Total: 2");
    let executed = store.executed();
    assert_eq!(executed.len(), 1);
    assert!(executed[0].text().contains("[:PILOTS]->(x:Starship)"));
    assert_eq!(
        executed[0].params().get("name"),
        Some(&Param::Text("Han Solo".to_string()))
    );
}

#[tokio::test]
async fn test_ask_list_relation() {
    let store = Arc::new(RecordingStore::returning(vec![
        Row::from_json(json!({ "value": "Millennium Falcon" })),
        Row::from_json(json!({ "value": "Imperial shuttle" })),
    ]));
    let qa = qa_with(&store);

    let answer = qa.ask("Quais naves Han Solo pilota?").await;

    assert_eq!(answer, "Millennium Falcon, Imperial shuttle");
    assert!(store.executed()[0].text().contains("PILOTS"));
}

#[tokio::test]
async fn test_ask_detail() {
    let store = Arc::new(RecordingStore::returning(vec![Row::from_json(json!({
        "name": "Luke Skywalker",
        "gender": "male",
        "birth_year": "19BBY",
        "species": "Human",
        "planet": "Tatooine",
        "ships": ["X-wing"],
        "quotes": [],
    }))]));
    let qa = qa_with(&store);

    let answer = qa.ask("Quem é Luke Skywalker?").await;

    assert!(answer.starts_with("Nome: Luke Skywalker"));
    assert!(answer.contains("Planeta natal: Tatooine"));
    assert!(answer.contains("Naves: X-wing"));
    assert!(!answer.contains("Citações"));
    assert!(store.executed()[0].text().contains("OPTIONAL MATCH"));
}

#[tokio::test]
async fn test_ask_without_entity_or_keyword_lists_roster() {
    let store = Arc::new(RecordingStore::returning(vec![
        Row::from_json(json!({ "value": "Luke Skywalker" })),
        Row::from_json(json!({ "value": "C-3PO" })),
    ]));
    let qa = qa_with(&store);

    let answer = qa.ask("Listar personagens").await;

    assert_eq!(answer, "Luke Skywalker, C-3PO");
    assert_eq!(
        store.executed()[0].text(),
        "MATCH (c:Character) RETURN c.name AS value LIMIT 10"
    );
}

#[tokio::test]
async fn test_ask_relation_without_entity_finds_nothing() {
    let store = Arc::new(RecordingStore::returning(Vec::new()));
    let qa = qa_with(&store);

    let answer = qa.ask("Quais personagens são da espécie Wookiee?").await;

    assert_eq!(answer, NONE_FOUND);
    assert_eq!(
        store.executed()[0].params().get("name"),
        Some(&Param::Text(String::new()))
    );
}

#[tokio::test]
async fn test_ask_reports_store_failure() {
    let store = Arc::new(RecordingStore::failing("connection refused"));
    let qa = qa_with(&store);

    let answer = qa.ask("Quem é Yoda?").await;

    assert!(answer.starts_with("Erro ao executar consulta:"));
    assert!(answer.contains("connection refused"));
    assert_eq!(store.executed().len(), 1, "failed queries are not retried");
}

#[tokio::test]
async fn test_ask_is_idempotent() {
    let store = Arc::new(RecordingStore::returning(vec![Row::from_json(json!({ "count": 4 }))]));
    let qa = qa_with(&store);

    let first = qa.ask("Quantas citações Darth Vader tem?").await;
    let second = qa.ask("Quantas citações Darth Vader tem?").await;

    assert_eq!(first, second);
    let executed = store.executed();
    assert_eq!(executed[0], executed[1]);
}
