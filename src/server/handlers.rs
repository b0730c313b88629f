use axum::{
    extract::{rejection::JsonRejection, Extension, Json},
    response::{Html, IntoResponse},
};
use serde_json::json;
use tracing::{info, warn};

use crate::server::models::{AskRequest, AskResponse};
use crate::server::AppState;

const CHAT_PAGE: &str = include_str!("chat.html");

pub const EMPTY_QUESTION: &str = "Pergunta vazia";
pub const NOT_INITIALIZED: &str = "Sistema QA não inicializado";

/// Chat page
pub async fn index() -> Html<&'static str> {
    Html(CHAT_PAGE)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Answer one question; every outcome is a JSON body with a `success` flag
pub async fn ask(
    Extension(state): Extension<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Json<AskResponse> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected /ask body: {}", rejection);
            return Json(AskResponse::error(rejection.body_text()));
        }
    };

    let question = request.question.trim();
    if question.is_empty() {
        return Json(AskResponse::error(EMPTY_QUESTION));
    }

    let Some(qa) = state.qa.as_ref() else {
        return Json(AskResponse::error(NOT_INITIALIZED));
    };

    info!("Received question: {}", question);
    Json(AskResponse::answer(qa.ask(question).await))
}
